use masjid_entities::{
    facility::Facility,
    geo::Coordinate,
    id::MosqueId,
    prayer::{Prayer, DAILY_TIMES_COUNT},
};

use super::*;

/// One row of a daily prayer schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleEntry {
    pub prayer: Prayer,
    pub adhan: String,
    pub iqama: Option<String>,
}

impl Facilities {
    pub fn is_enabled(&self, facility: Facility) -> bool {
        let flag = match facility {
            Facility::Parking => self.parking,
            Facility::WomenSpace => self.women_space,
            Facility::AdultCourses => self.adult_courses,
            Facility::ChildrenCourses => self.children_courses,
            Facility::Ablutions => self.ablutions,
            Facility::HandicapAccessibility => self.handicap_accessibility,
            Facility::AidPrayer => self.aid_prayer,
            Facility::JanazaPrayer => self.janaza_prayer,
        };
        flag.unwrap_or(false)
    }

    pub fn enabled(&self) -> Vec<Facility> {
        Facility::all().filter(|f| self.is_enabled(*f)).collect()
    }
}

fn coordinate(lat: Option<f64>, lng: Option<f64>) -> Option<Coordinate> {
    lat.zip(lng)
        .map(|(lat, lng)| Coordinate::new(lat, lng))
        .filter(|c| c.is_valid())
}

impl MosqueSummary {
    pub fn coordinate(&self) -> Option<Coordinate> {
        coordinate(self.latitude, self.longitude)
    }

    pub fn id(&self) -> Option<MosqueId> {
        self.uuid.parse().ok()
    }
}

impl MosqueDetail {
    pub fn coordinate(&self) -> Option<Coordinate> {
        coordinate(self.latitude, self.longitude)
    }

    /// The schedule is only available if all daily times are known.
    pub fn schedule(&self) -> Option<Vec<ScheduleEntry>> {
        if self.times.len() < DAILY_TIMES_COUNT {
            return None;
        }
        let entries = Prayer::all()
            .map(|prayer| {
                let adhan = self.times[prayer.time_index()].clone();
                let iqama = prayer
                    .iqama_index()
                    .and_then(|idx| self.iqama.as_ref().and_then(|iqama| iqama.get(idx)))
                    .filter(|iqama| !iqama.is_empty())
                    .cloned();
                ScheduleEntry {
                    prayer,
                    adhan,
                    iqama,
                }
            })
            .collect();
        Some(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail(times: &[&str], iqama: Option<&[&str]>) -> MosqueDetail {
        MosqueDetail {
            uuid: Some("m1".into()),
            times: times.iter().map(ToString::to_string).collect(),
            iqama: iqama.map(|i| i.iter().map(ToString::to_string).collect()),
            ..Default::default()
        }
    }

    #[test]
    fn incomplete_schedule() {
        let d = detail(&["05:00", "06:30"], None);
        assert!(d.schedule().is_none());
    }

    #[test]
    fn schedule_with_iqama() {
        let d = detail(
            &["05:00", "06:30", "12:30", "15:45", "18:20", "19:50"],
            Some(&["+20", "+10", "+10", "+5", ""]),
        );
        let schedule = d.schedule().unwrap();
        assert_eq!(6, schedule.len());
        assert_eq!(Prayer::Fajr, schedule[0].prayer);
        assert_eq!(Some("+20"), schedule[0].iqama.as_deref());
        assert_eq!(Prayer::Sunrise, schedule[1].prayer);
        assert_eq!("06:30", schedule[1].adhan);
        assert_eq!(None, schedule[1].iqama);
        assert_eq!(Some("+10"), schedule[2].iqama.as_deref());
        assert_eq!(Some("+5"), schedule[4].iqama.as_deref());
        assert_eq!("19:50", schedule[5].adhan);
        assert_eq!(None, schedule[5].iqama);
    }

    #[test]
    fn enabled_facilities_in_order() {
        let facilities = Facilities {
            janaza_prayer: Some(true),
            parking: Some(true),
            ablutions: Some(false),
            ..Default::default()
        };
        assert_eq!(
            vec![Facility::Parking, Facility::JanazaPrayer],
            facilities.enabled()
        );
    }

    #[test]
    fn coordinate_of_summary() {
        let mut summary = MosqueSummary {
            uuid: "m1".into(),
            name: None,
            label: None,
            localisation: None,
            latitude: Some(48.857),
            longitude: None,
            image: None,
            url: None,
            phone: None,
            email: None,
            site: None,
            facilities: Facilities::default(),
        };
        assert!(summary.coordinate().is_none());
        summary.longitude = Some(2.352);
        assert_eq!(Some(Coordinate::new(48.857, 2.352)), summary.coordinate());
        assert_eq!("m1", summary.id().unwrap().as_str());
    }
}
