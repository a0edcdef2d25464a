//! Client of the public Mawaqit API.

use std::time::Duration;

use async_trait::async_trait;
use masjid_core::{
    entities::MosqueId,
    gateways::mosque::{MosqueGateway, SearchQuery, UpstreamError, UpstreamResponse},
};
use reqwest::header;
use thiserror::Error;
use url::Url;

pub const DEFAULT_API_BASE_URL: &str = "https://mawaqit.net/api/2.0";

/// Some deployments of the upstream API reject requests
/// without a browser-like user agent.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";

#[derive(Debug, Clone)]
pub struct MawaqitConfig {
    pub api_base_url: Url,
    pub user_agent: String,
    pub timeout: Option<Duration>,
}

impl Default for MawaqitConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL
                .parse()
                .expect("Valid default API base URL"),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: None,
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid API base URL: {0}")]
    BaseUrl(Url),
    #[error(transparent)]
    Client(#[from] reqwest::Error),
}

#[derive(Debug, Clone)]
pub struct Mawaqit {
    client: reqwest::Client,
    api_base_url: Url,
}

impl Mawaqit {
    pub fn new(config: MawaqitConfig) -> Result<Self, Error> {
        let MawaqitConfig {
            api_base_url,
            user_agent,
            timeout,
        } = config;
        if api_base_url.cannot_be_a_base() {
            return Err(Error::BaseUrl(api_base_url));
        }
        let mut builder = reqwest::Client::builder().user_agent(user_agent);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        Ok(Self {
            client,
            api_base_url,
        })
    }

    fn endpoint<'a>(&self, segments: impl IntoIterator<Item = &'a str>) -> Url {
        let mut url = self.api_base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn search_url(&self, query: &SearchQuery) -> Url {
        let SearchQuery { center, distance } = query;
        let mut url = self.endpoint(["mosque", "search"]);
        url.query_pairs_mut()
            .append_pair("lat", &center.lat().to_string())
            .append_pair("lon", &center.lng().to_string())
            .append_pair("distance", &distance.to_string());
        url
    }

    fn mosque_url(&self, id: &MosqueId) -> Url {
        self.endpoint(["mosque", id.as_str()])
    }

    async fn get(&self, url: Url) -> Result<UpstreamResponse, UpstreamError> {
        log::info!("Fetching from Mawaqit API: {url}");
        let response = self
            .client
            .get(url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(transport_error)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(transport_error)?;
        log::debug!("Mawaqit API responded with status {status} ({} bytes)", body.len());
        Ok(UpstreamResponse { status, body })
    }
}

fn transport_error(err: reqwest::Error) -> UpstreamError {
    log::warn!("Request to Mawaqit API failed: {err}");
    UpstreamError::Transport(err.to_string())
}

#[async_trait]
impl MosqueGateway for Mawaqit {
    async fn search(&self, query: &SearchQuery) -> Result<UpstreamResponse, UpstreamError> {
        self.get(self.search_url(query)).await
    }

    async fn mosque(&self, id: &MosqueId) -> Result<UpstreamResponse, UpstreamError> {
        self.get(self.mosque_url(id)).await
    }
}

#[cfg(test)]
mod tests {
    use masjid_core::entities::Coordinate;
    use tokio::{
        io::{AsyncReadExt, AsyncWriteExt},
        net::TcpListener,
    };

    use super::*;

    fn mawaqit(base: &str) -> Mawaqit {
        Mawaqit::new(MawaqitConfig {
            api_base_url: base.parse().unwrap(),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn search_url() {
        let gw = mawaqit(DEFAULT_API_BASE_URL);
        let query = SearchQuery {
            center: Coordinate::new(48.8566, 2.3522),
            distance: 1.0,
        };
        assert_eq!(
            "https://mawaqit.net/api/2.0/mosque/search?lat=48.8566&lon=2.3522&distance=1",
            gw.search_url(&query).as_str()
        );
    }

    #[test]
    fn base_url_with_trailing_slash() {
        let gw = mawaqit("http://127.0.0.1:8080/api/");
        let id = "m1".parse().unwrap();
        assert_eq!("http://127.0.0.1:8080/api/mosque/m1", gw.mosque_url(&id).as_str());
    }

    #[test]
    fn mosque_id_is_a_single_path_segment() {
        let gw = mawaqit(DEFAULT_API_BASE_URL);
        let id = "a/b?c d".parse().unwrap();
        assert_eq!(
            "https://mawaqit.net/api/2.0/mosque/a%2Fb%3Fc%20d",
            gw.mosque_url(&id).as_str()
        );
    }

    #[test]
    fn reject_invalid_base_url() {
        let res = Mawaqit::new(MawaqitConfig {
            api_base_url: "mailto:someone@example.com".parse().unwrap(),
            ..Default::default()
        });
        assert!(matches!(res, Err(Error::BaseUrl(_))));
    }

    #[tokio::test]
    async fn unreachable_upstream() {
        let gw = Mawaqit::new(MawaqitConfig {
            api_base_url: "http://127.0.0.1:1/api".parse().unwrap(),
            timeout: Some(Duration::from_secs(5)),
            ..Default::default()
        })
        .unwrap();
        let id = "m1".parse().unwrap();
        let err = gw.mosque(&id).await.unwrap_err();
        assert!(matches!(err, UpstreamError::Transport(_)));
    }

    /// Accepts a single connection, answers with an empty JSON object
    /// and returns the raw request head.
    async fn serve_once(listener: TcpListener) -> String {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut head = Vec::new();
        let mut buf = [0; 1024];
        while !head.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            head.extend_from_slice(&buf[..n]);
        }
        socket
            .write_all(
                b"HTTP/1.1 200 OK\r\n\
                  Content-Type: application/json\r\n\
                  Content-Length: 2\r\n\
                  Connection: close\r\n\r\n{}",
            )
            .await
            .unwrap();
        String::from_utf8(head).unwrap()
    }

    #[tokio::test]
    async fn send_browser_like_request() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(serve_once(listener));

        let gw = mawaqit(&format!("http://{addr}/api"));
        let id = "m1".parse().unwrap();
        let response = gw.mosque(&id).await.unwrap();
        assert_eq!(200, response.status);
        assert_eq!("{}", response.body);

        let head = server.await.unwrap();
        let mut lines = head.lines();
        assert_eq!(Some("GET /api/mosque/m1 HTTP/1.1"), lines.next());
        let headers: Vec<String> = lines.map(str::to_lowercase).collect();
        assert!(
            headers.iter().any(|h| h == "user-agent: mozilla/5.0"),
            "{head}"
        );
        assert!(
            headers.iter().any(|h| h == "accept: application/json"),
            "{head}"
        );
    }
}
