use gloo_net::http::Response;
use serde::de::DeserializeOwned;
use thiserror::Error;

mod public;

pub use self::public::*;

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum Error {
    #[error("{0}")]
    Fetch(String),

    #[error("{0}")]
    Api(#[from] masjid_boundary::Error),

    #[error("HTTP error! status: {0}")]
    Status(u16),
}

impl From<gloo_net::Error> for Error {
    fn from(err: gloo_net::Error) -> Self {
        Self::Fetch(format!("{err}"))
    }
}

pub async fn into_json<T>(response: Response) -> Result<T>
where
    T: DeserializeOwned,
{
    // ensure we've got 2xx status
    if response.ok() {
        return Ok(response.json().await?);
    }
    let status = response.status();
    match response.json::<masjid_boundary::Error>().await {
        Ok(err) => Err(err.into()),
        Err(_) => Err(Error::Status(status)),
    }
}
