pub mod gateways;
pub mod i18n;
pub mod maps;
pub mod presentation;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use masjid_boundary::{Facilities, MosqueDetail, MosqueSummary, ScheduleEntry};
    pub use masjid_entities::{facility::*, geo::*, id::*, prayer::*};
}
