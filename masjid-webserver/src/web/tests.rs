use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use masjid_core::{
    entities::MosqueId,
    gateways::mosque::{MosqueGateway, SearchQuery, UpstreamError, UpstreamResponse},
};
use rocket::{config::Config as RocketCfg, local::blocking::Client, Route};

pub mod prelude {

    pub const DUMMY_VERSION: &str = "3.2.1";

    pub use rocket::{
        http::{ContentType, Status},
        local::blocking::{Client, LocalResponse},
    };

    pub use super::{rocket_test_setup, Request, StubGateway};
}

#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    Search(SearchQuery),
    Mosque(MosqueId),
}

/// Answers every upstream request with a canned response
/// and records what has been requested.
#[derive(Clone)]
pub struct StubGateway {
    response: Result<UpstreamResponse, UpstreamError>,
    requests: Arc<Mutex<Vec<Request>>>,
}

impl StubGateway {
    pub fn new(status: u16, body: &str) -> Self {
        Self {
            response: Ok(UpstreamResponse {
                status,
                body: body.to_string(),
            }),
            requests: Arc::default(),
        }
    }

    pub fn unreachable() -> Self {
        Self {
            response: Err(UpstreamError::Transport("connection refused".to_string())),
            requests: Arc::default(),
        }
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl MosqueGateway for StubGateway {
    async fn search(&self, query: &SearchQuery) -> Result<UpstreamResponse, UpstreamError> {
        self.requests.lock().unwrap().push(Request::Search(*query));
        self.response.clone()
    }

    async fn mosque(&self, id: &MosqueId) -> Result<UpstreamResponse, UpstreamError> {
        self.requests
            .lock()
            .unwrap()
            .push(Request::Mosque(id.clone()));
        self.response.clone()
    }
}

pub fn rocket_test_setup(mounts: Vec<(&'static str, Vec<Route>)>, gateway: StubGateway) -> Client {
    let options = super::InstanceOptions {
        mounts,
        rocket_cfg: Some(RocketCfg::debug_default()),
        version: prelude::DUMMY_VERSION,
    };
    let gateways = super::Gateways {
        mosques: Box::new(gateway),
    };
    let rocket = super::rocket_instance(options, gateways);
    Client::tracked(rocket).unwrap()
}
