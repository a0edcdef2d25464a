use masjid_core::usecases::Error as UsecaseError;
use rocket::{
    self,
    http::Status,
    response::{self, Responder},
};
use thiserror::Error;

use super::json_error_response;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Usecase(#[from] UsecaseError),
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, req: &'r rocket::Request<'_>) -> response::Result<'o> {
        match self {
            Error::Usecase(err) => match err.upstream() {
                Some(upstream) => {
                    error!("Proxy error: {err}");
                    let details = upstream.to_string();
                    json_error_response(
                        req,
                        err.to_string(),
                        Some(details),
                        Status::InternalServerError,
                    )
                }
                None => {
                    debug!("Rejected request: {err}");
                    json_error_response(req, err.to_string(), None, Status::BadRequest)
                }
            },
        }
    }
}
