use strum::{EnumCount, EnumIter, IntoEnumIterator, IntoStaticStr};

/// The daily prayers in the order the upstream API lists their times.
///
/// Sunrise is not a prayer but is part of every schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCount, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Prayer {
    Fajr,
    Sunrise,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

impl Prayer {
    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }

    /// Position within the list of adhan times.
    pub const fn time_index(self) -> usize {
        self as usize
    }

    /// Position within the list of iqama offsets.
    pub const fn iqama_index(self) -> Option<usize> {
        match self {
            Self::Fajr => Some(0),
            Self::Sunrise => None,
            Self::Dhuhr => Some(1),
            Self::Asr => Some(2),
            Self::Maghrib => Some(3),
            Self::Isha => Some(4),
        }
    }

    pub const fn is_night(self) -> bool {
        matches!(self, Self::Fajr | Self::Maghrib | Self::Isha)
    }
}

/// Number of adhan times that make up a complete daily schedule.
pub const DAILY_TIMES_COUNT: usize = Prayer::COUNT;
