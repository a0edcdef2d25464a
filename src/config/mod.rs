use std::{env, fs, io::ErrorKind, net::IpAddr, path::Path, time::Duration};

use anyhow::{Context as _, Result};
use url::Url;

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "masjid.toml";

const ENV_NAME_UPSTREAM_URL: &str = "MASJID_UPSTREAM_URL";
const ENV_NAME_PORT: &str = "MASJID_PORT";

pub struct Config {
    pub webserver: WebServer,
    pub upstream: Upstream,
}

pub struct WebServer {
    pub address: IpAddr,
    pub port: u16,
}

pub struct Upstream {
    pub api_base_url: Url,
    pub user_agent: String,
    /// Limits the duration of a single upstream request.
    pub timeout: Option<Duration>,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str::<raw::Config>(&cfg_string)
                .with_context(|| format!("Invalid configuration file {}", file_path.display()))?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    raw::Config::default()
                }
                _ => return Err(err.into()),
            },
        };
        let mut cfg = Self::try_from(raw_config)?;
        cfg.apply_env_overrides(|name| env::var(name).ok())?;
        Ok(cfg)
    }

    fn apply_env_overrides(&mut self, var: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(url) = var(ENV_NAME_UPSTREAM_URL) {
            self.upstream.api_base_url = url
                .parse()
                .with_context(|| format!("Invalid {ENV_NAME_UPSTREAM_URL}"))?;
        }
        if let Some(port) = var(ENV_NAME_PORT) {
            self.webserver.port = port
                .parse()
                .with_context(|| format!("Invalid {ENV_NAME_PORT}"))?;
        }
        Ok(())
    }
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            webserver,
            upstream,
        } = from;

        let raw::WebServer { address, port } = webserver.unwrap_or_default();
        let webserver = WebServer { address, port };

        let raw::Upstream {
            api_base_url,
            user_agent,
            timeout,
        } = upstream.unwrap_or_default();
        let api_base_url = api_base_url
            .parse()
            .with_context(|| format!("Invalid upstream API URL '{api_base_url}'"))?;
        let upstream = Upstream {
            api_base_url,
            user_agent,
            timeout,
        };

        Ok(Self {
            webserver,
            upstream,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn load_default_config() {
        let file: Option<&Path> = None;
        let cfg = Config::try_from(raw::Config::default()).unwrap();
        assert_eq!(8080, cfg.webserver.port);
        assert_eq!(
            "https://mawaqit.net/api/2.0",
            cfg.upstream.api_base_url.as_str()
        );
        let _: Config = Config::try_load_from_file_or_default(file).unwrap();
    }

    #[test]
    fn override_with_env_vars() {
        let vars = HashMap::from([
            (ENV_NAME_UPSTREAM_URL, "http://127.0.0.1:3000/api/"),
            (ENV_NAME_PORT, "3001"),
        ]);
        let mut cfg = Config::try_from(raw::Config::default()).unwrap();
        cfg.apply_env_overrides(|name| vars.get(name).map(ToString::to_string))
            .unwrap();
        assert_eq!(3001, cfg.webserver.port);
        assert_eq!(
            "http://127.0.0.1:3000/api/",
            cfg.upstream.api_base_url.as_str()
        );
    }

    #[test]
    fn reject_invalid_port() {
        let mut cfg = Config::try_from(raw::Config::default()).unwrap();
        let res = cfg.apply_env_overrides(|name| (name == ENV_NAME_PORT).then(|| "http".into()));
        assert!(res.is_err());
        assert_eq!(8080, cfg.webserver.port);
    }

    #[test]
    fn reject_invalid_upstream_url() {
        let raw_cfg: raw::Config = toml::from_str(
            r#"
            [upstream]
            api-base-url = "not a url"
            user-agent = "Mozilla/5.0"
            "#,
        )
        .unwrap();
        assert!(Config::try_from(raw_cfg).is_err());
    }
}
