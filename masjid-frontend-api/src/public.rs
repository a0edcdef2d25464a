use gloo_net::http::Request;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::Deserialize;
use serde_json::Value;

use masjid_boundary::{MosqueDetail, MosqueSummary};
use masjid_entities::geo::Coordinate;

use crate::{into_json, Result};

/// Public API of the mosque proxy
#[derive(Debug, Clone, Copy)]
pub struct PublicApi {
    url: &'static str,
}

impl PublicApi {
    #[must_use]
    pub const fn new(url: &'static str) -> Self {
        Self { url }
    }

    /// Entries that cannot be read as [`MosqueSummary`] are skipped.
    pub async fn search(&self, center: &Coordinate, distance: f64) -> Result<Vec<MosqueSummary>> {
        let url = search_url(self.url, center, distance);
        let response = Request::get(&url).send().await?;
        let mosques: Vec<Value> = into_json(response).await?;
        Ok(readable_mosques(mosques))
    }

    pub async fn mosque_details(&self, id: &str) -> Result<MosqueDetail> {
        let url = details_url(self.url, id);
        let response = Request::get(&url).send().await?;
        into_json(response).await
    }
}

fn search_url(base: &str, center: &Coordinate, distance: f64) -> String {
    format!(
        "{base}/mosque-search?lat={}&lon={}&distance={distance}",
        center.lat(),
        center.lng()
    )
}

fn readable_mosques(mosques: Vec<Value>) -> Vec<MosqueSummary> {
    mosques
        .into_iter()
        .filter_map(|mosque| MosqueSummary::deserialize(mosque).ok())
        .collect()
}

fn details_url(base: &str, id: &str) -> String {
    let encoded_id = utf8_percent_encode(id, NON_ALPHANUMERIC);
    format!("{base}/mosque-details?id={encoded_id}")
}
