use std::{net::IpAddr, time::Duration};

use duration_str::deserialize_option_duration;
use serde::Deserialize;

const DEFAULT_CONFIG_FILE: &str = include_str!("masjid.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub webserver: Option<WebServer>,
    pub upstream: Option<Upstream>,
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct WebServer {
    pub address: IpAddr,
    pub port: u16,
}

impl Default for WebServer {
    fn default() -> Self {
        Config::default()
            .webserver
            .expect("Web server configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Upstream {
    pub api_base_url: String,
    pub user_agent: String,
    #[serde(default, deserialize_with = "deserialize_option_duration")]
    pub timeout: Option<Duration>,
}

impl Default for Upstream {
    fn default() -> Self {
        Config::default()
            .upstream
            .expect("Upstream configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_config() {
        let Config {
            webserver,
            upstream,
        } = Config::default();
        let webserver = webserver.unwrap();
        assert_eq!(8080, webserver.port);
        assert!(webserver.address.is_loopback());
        let upstream = upstream.unwrap();
        assert_eq!("https://mawaqit.net/api/2.0", upstream.api_base_url);
        assert_eq!("Mozilla/5.0", upstream.user_agent);
        assert_eq!(None, upstream.timeout);
    }

    #[test]
    fn parse_partial_config() {
        let cfg: Config = toml::from_str(
            r#"
            [upstream]
            api-base-url = "http://localhost:3000/api"
            user-agent = "masjid"
            timeout = "10s"
            "#,
        )
        .unwrap();
        assert!(cfg.webserver.is_none());
        let upstream = cfg.upstream.unwrap();
        assert_eq!(Some(Duration::from_secs(10)), upstream.timeout);
    }
}
