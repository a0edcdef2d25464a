use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

#[cfg(feature = "entity-conversions")]
pub use conv::ScheduleEntry;

/// Facility flags as published by the upstream API.
#[rustfmt::skip]
#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
#[serde(rename_all = "camelCase")]
pub struct Facilities {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parking                : Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub women_space            : Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adult_courses          : Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children_courses       : Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ablutions              : Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handicap_accessibility : Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aid_prayer             : Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub janaza_prayer          : Option<bool>,
}

/// A mosque as listed by a nearby search.
///
/// Only `uuid` is mandatory, it is used as the selection key.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct MosqueSummary {
    pub uuid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub localisation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,
    #[serde(flatten)]
    pub facilities: Facilities,
}

/// A mosque together with its prayer schedule of the current day.
#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct MosqueDetail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub localisation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,
    /// Adhan times: Fajr, Sunrise, Dhuhr, Asr, Maghrib, Isha.
    #[serde(default)]
    pub times: Vec<String>,
    /// Iqama offsets or times: Fajr, Dhuhr, Asr, Maghrib, Isha.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iqama: Option<Vec<String>>,
    /// Friday prayer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jumua: Option<String>,
    #[serde(flatten)]
    pub facilities: Facilities,
}

impl MosqueSummary {
    /// The label is preferred over the name.
    pub fn title(&self) -> Option<&str> {
        self.label.as_deref().or(self.name.as_deref())
    }
}

impl MosqueDetail {
    pub fn title(&self) -> Option<&str> {
        self.label.as_deref().or(self.name.as_deref())
    }

    pub fn has_contact(&self) -> bool {
        self.phone.is_some() || self.email.is_some() || self.site.is_some()
    }
}

impl From<MosqueSummary> for MosqueDetail {
    fn from(from: MosqueSummary) -> Self {
        let MosqueSummary {
            uuid,
            name,
            label,
            localisation,
            latitude,
            longitude,
            image,
            url,
            phone,
            email,
            site,
            facilities,
        } = from;
        Self {
            uuid: Some(uuid),
            name,
            label,
            localisation,
            latitude,
            longitude,
            image,
            url,
            phone,
            email,
            site,
            times: vec![],
            iqama: None,
            jumua: None,
            facilities,
        }
    }
}

/// The body of every non-successful proxy response.
#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, PartialEq, Eq, thiserror::Error),
    error("{error}")
)]
pub struct Error {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_summary_with_unknown_fields() {
        let json = r#"{
            "uuid": "m1",
            "label": "Grande Mosquée",
            "localisation": "2bis Place du Puits de l'Ermite, 75005 Paris",
            "latitude": 48.8420,
            "longitude": 2.3550,
            "womenSpace": true,
            "parking": false,
            "proximity": 812,
            "slug": "grande-mosquee-de-paris"
        }"#;
        let summary: MosqueSummary = serde_json::from_str(json).unwrap();
        assert_eq!("m1", summary.uuid);
        assert_eq!(Some("Grande Mosquée"), summary.title());
        assert_eq!(Some(true), summary.facilities.women_space);
        assert_eq!(Some(false), summary.facilities.parking);
        assert_eq!(None, summary.facilities.ablutions);
    }

    #[test]
    fn summary_requires_uuid() {
        assert!(serde_json::from_str::<MosqueSummary>(r#"{"name":"x"}"#).is_err());
        assert!(serde_json::from_str::<MosqueSummary>(r#"{"uuid":42}"#).is_err());
    }

    #[test]
    fn deserialize_detail_without_optional_fields() {
        let json = r#"{"uuid":"m1","times":["05:00","06:30","12:30","15:45","18:20","19:50"]}"#;
        let detail: MosqueDetail = serde_json::from_str(json).unwrap();
        assert_eq!(Some("m1".to_string()), detail.uuid);
        assert_eq!(6, detail.times.len());
        assert_eq!(None, detail.iqama);
        assert_eq!(None, detail.jumua);
        assert!(!detail.has_contact());
    }

    #[test]
    fn fall_back_to_summary() {
        let summary = MosqueSummary {
            uuid: "m1".into(),
            name: Some("Masjid".into()),
            label: None,
            localisation: None,
            latitude: Some(48.857),
            longitude: Some(2.352),
            image: None,
            url: None,
            phone: Some("+33 1 00 00 00 00".into()),
            email: None,
            site: None,
            facilities: Facilities::default(),
        };
        let detail = MosqueDetail::from(summary);
        assert_eq!(Some("m1"), detail.uuid.as_deref());
        assert_eq!(Some("Masjid"), detail.title());
        assert!(detail.times.is_empty());
        assert!(detail.has_contact());
    }

    #[test]
    fn serialize_error_without_details() {
        let err = Error {
            error: "Missing lat or lon parameters".into(),
            details: None,
        };
        assert_eq!(
            r#"{"error":"Missing lat or lon parameters"}"#,
            serde_json::to_string(&err).unwrap()
        );
        assert_eq!("Missing lat or lon parameters", err.to_string());
    }
}
