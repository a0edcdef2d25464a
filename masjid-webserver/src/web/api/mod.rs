use std::result;

use masjid_boundary::Error as JsonErrorResponse;
use masjid_core::usecases;
use rocket::{
    self, get,
    http::Status,
    options,
    response::{self, content::RawJson, Responder},
    routes,
    serde::json::Json,
    Route, State,
};

use super::guards::*;

mod error;
mod mosques;
mod util;

pub use self::error::Error as ApiError;


/// Upstream JSON relayed without re-encoding.
type RawResult = result::Result<RawJson<String>, ApiError>;

pub fn routes() -> Vec<Route> {
    routes![
        // ---   mosques   --- //
        mosques::get_mosque_search,
        mosques::get_mosque_details,
        // ---   pre-flight   --- //
        mosques::options_mosque_search,
        mosques::options_mosque_details,
        // ---   server   --- //
        util::get_version,
    ]
}

fn json_error_response<'r, 'o: 'r>(
    req: &'r rocket::Request<'_>,
    error: String,
    details: Option<String>,
    status: Status,
) -> response::Result<'o> {
    let boundary_error = JsonErrorResponse { error, details };
    Json(boundary_error).respond_to(req).map(|mut res| {
        res.set_status(status);
        res
    })
}
