use strum::{EnumIter, IntoEnumIterator, IntoStaticStr};

/// Services a mosque may offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
pub enum Facility {
    Parking,
    WomenSpace,
    AdultCourses,
    ChildrenCourses,
    Ablutions,
    HandicapAccessibility,
    AidPrayer,
    JanazaPrayer,
}

impl Facility {
    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }

    pub const fn icon(self) -> &'static str {
        match self {
            Self::Parking => "🚗",
            Self::WomenSpace => "👩",
            Self::AdultCourses => "📚",
            Self::ChildrenCourses => "👶",
            Self::Ablutions => "💧",
            Self::HandicapAccessibility => "♿",
            Self::AidPrayer => "🌙",
            Self::JanazaPrayer => "🤲",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Parking => "Parking",
            Self::WomenSpace => "Women Space",
            Self::AdultCourses => "Adult Courses",
            Self::ChildrenCourses => "Children Courses",
            Self::Ablutions => "Ablution",
            Self::HandicapAccessibility => "Accessible",
            Self::AidPrayer => "Eid Prayer",
            Self::JanazaPrayer => "Janazah",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_facility_has_an_icon_and_a_label() {
        for f in Facility::all() {
            assert!(!f.icon().is_empty());
            assert!(!f.label().is_empty());
        }
        assert_eq!(8, Facility::all().count());
    }
}
