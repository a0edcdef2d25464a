#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # masjid-entities
//!
//! Reusable, agnostic domain entities for the masjid finder.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod facility;
pub mod geo;
pub mod id;
pub mod prayer;
