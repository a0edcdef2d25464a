use serde_json::Value;

use crate::gateways::mosque::{UpstreamError, UpstreamResponse};

const MARKUP_PREFIXES: &[&str] = &["<!doctype", "<html", "<?xml"];

/// Detect documents like HTML error pages that are
/// delivered instead of the expected JSON data.
pub fn is_markup(body: &str) -> bool {
    let head = body.trim_start();
    MARKUP_PREFIXES.iter().any(|prefix| {
        head.get(..prefix.len())
            .is_some_and(|h| h.eq_ignore_ascii_case(prefix))
    })
}

fn parse_json(response: &UpstreamResponse) -> Result<Value, UpstreamError> {
    if !response.is_success() {
        return Err(UpstreamError::Status(response.status));
    }
    if is_markup(&response.body) {
        return Err(UpstreamError::Markup);
    }
    serde_json::from_str(&response.body).map_err(|err| UpstreamError::Json(err.to_string()))
}

fn has_uuid(mosque: &Value) -> bool {
    mosque
        .get("uuid")
        .and_then(Value::as_str)
        .is_some_and(|uuid| !uuid.trim().is_empty())
}

/// Accept a list of mosques if every entry is an object with a `uuid`.
///
/// All other fields are opaque. Returns the body as received.
pub fn mosque_list(response: UpstreamResponse) -> Result<String, UpstreamError> {
    let Value::Array(mosques) = parse_json(&response)? else {
        return Err(UpstreamError::Shape("expected a list of mosques".to_string()));
    };
    if let Some(idx) = mosques.iter().position(|m| !has_uuid(m)) {
        return Err(UpstreamError::Shape(format!("mosque #{idx} has no uuid")));
    }
    log::debug!("Upstream API listed {} mosques", mosques.len());
    Ok(response.body)
}

/// Accept any JSON object as the details of a mosque.
///
/// Returns the body as received.
pub fn mosque_detail(response: UpstreamResponse) -> Result<String, UpstreamError> {
    if !parse_json(&response)?.is_object() {
        return Err(UpstreamError::Shape("expected a mosque object".to_string()));
    }
    Ok(response.body)
}
