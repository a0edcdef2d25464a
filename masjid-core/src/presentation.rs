//! State of a single browsing session.
//!
//! The view feeds [`Event`]s into a [`Session`] and executes the
//! [`Command`]s it returns. Nothing is cached between selections.

use crate::entities::{Coordinate, Distance, MosqueDetail, MosqueId, MosqueSummary};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    /// Waiting for the position and the nearby search.
    LocationPending,
    /// Locating or searching failed, see [`Session::error`].
    Unavailable,
    MosquesLoaded,
    MosqueSelected(DetailPhase),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailPhase {
    Loading,
    Loaded,
    Failed,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Start,
    LocationAcquired(Coordinate),
    LocationDenied(String),
    MosquesFetched(Vec<MosqueSummary>),
    SearchFailed(String),
    Select(MosqueSummary),
    DetailFetched(MosqueId, MosqueDetail),
    DetailFailed(MosqueId, String),
    DismissError,
    Retry,
}

/// Side effects requested by a state transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    AcquireLocation,
    SearchMosques(Coordinate),
    FetchDetails(MosqueId),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    phase: Phase,
    location: Option<Coordinate>,
    mosques: Vec<MosqueSummary>,
    selected: Option<MosqueSummary>,
    detail: Option<MosqueDetail>,
    error: Option<String>,
}

impl Session {
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    pub const fn location(&self) -> Option<Coordinate> {
        self.location
    }

    pub fn mosques(&self) -> &[MosqueSummary] {
        &self.mosques
    }

    pub const fn selected(&self) -> Option<&MosqueSummary> {
        self.selected.as_ref()
    }

    /// Either the fetched detail or the fallback built from the summary.
    pub const fn detail(&self) -> Option<&MosqueDetail> {
        self.detail.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        matches!(
            self.phase,
            Phase::LocationPending | Phase::MosqueSelected(DetailPhase::Loading)
        )
    }

    pub fn is_selected(&self, mosque: &MosqueSummary) -> bool {
        self.selected
            .as_ref()
            .is_some_and(|selected| selected.uuid == mosque.uuid)
    }

    /// Distance between the own location and a mosque.
    pub fn distance_to(&self, mosque: &MosqueSummary) -> Option<Distance> {
        let here = self.location?;
        let there = mosque.coordinate()?;
        Some(Coordinate::distance(here, there))
    }

    fn is_pending_detail(&self, id: &MosqueId) -> bool {
        self.phase == Phase::MosqueSelected(DetailPhase::Loading)
            && self
                .selected
                .as_ref()
                .is_some_and(|selected| selected.uuid == id.as_str())
    }

    #[must_use]
    pub fn handle(&mut self, event: Event) -> Option<Command> {
        match event {
            Event::Start => {
                if self.phase != Phase::Idle {
                    log::debug!("Session has already been started");
                    return None;
                }
                self.phase = Phase::LocationPending;
                self.error = None;
                Some(Command::AcquireLocation)
            }
            Event::Retry => {
                if self.phase != Phase::Unavailable {
                    return None;
                }
                self.phase = Phase::LocationPending;
                self.error = None;
                Some(Command::AcquireLocation)
            }
            Event::LocationAcquired(location) => {
                if self.phase != Phase::LocationPending {
                    return None;
                }
                self.location = Some(location);
                Some(Command::SearchMosques(location))
            }
            Event::LocationDenied(reason) | Event::SearchFailed(reason) => {
                if self.phase != Phase::LocationPending {
                    return None;
                }
                self.phase = Phase::Unavailable;
                self.error = Some(reason);
                None
            }
            Event::MosquesFetched(mosques) => {
                if self.phase != Phase::LocationPending {
                    return None;
                }
                self.mosques = mosques;
                self.phase = Phase::MosquesLoaded;
                None
            }
            Event::Select(mosque) => {
                if !matches!(self.phase, Phase::MosquesLoaded | Phase::MosqueSelected(_)) {
                    return None;
                }
                let Some(id) = mosque.id() else {
                    log::warn!("Unable to select a mosque without ID");
                    return None;
                };
                self.selected = Some(mosque);
                self.detail = None;
                self.error = None;
                self.phase = Phase::MosqueSelected(DetailPhase::Loading);
                Some(Command::FetchDetails(id))
            }
            Event::DetailFetched(id, detail) => {
                if !self.is_pending_detail(&id) {
                    log::debug!("Ignoring outdated details of mosque {id}");
                    return None;
                }
                self.detail = Some(detail);
                self.phase = Phase::MosqueSelected(DetailPhase::Loaded);
                None
            }
            Event::DetailFailed(id, reason) => {
                if !self.is_pending_detail(&id) {
                    log::debug!("Ignoring outdated failure of mosque {id}");
                    return None;
                }
                self.detail = self.selected.clone().map(MosqueDetail::from);
                self.error = Some(reason);
                self.phase = Phase::MosqueSelected(DetailPhase::Failed);
                None
            }
            Event::DismissError => {
                self.error = None;
                None
            }
        }
    }
}
