//! Gateways to the services this application depends on.

pub mod mawaqit;
