//! Links into an external map service.

use url::Url;

use crate::entities::Coordinate;

const DIRECTIONS_URL: &str = "https://www.google.com/maps/dir/";
const EMBED_DIRECTIONS_URL: &str = "https://www.google.com/maps/embed/v1/directions";
const EMBED_ZOOM: &str = "15";
const TRAVEL_MODE: &str = "walking";

fn lat_lng(c: Coordinate) -> String {
    format!("{},{}", c.lat(), c.lng())
}

/// Link that opens walking directions in a new browser tab.
pub fn directions_url(origin: Coordinate, destination: Coordinate) -> Url {
    let mut url = Url::parse(DIRECTIONS_URL).expect("valid directions URL");
    url.query_pairs_mut()
        .append_pair("api", "1")
        .append_pair("origin", &lat_lng(origin))
        .append_pair("destination", &lat_lng(destination))
        .append_pair("travelmode", TRAVEL_MODE);
    url
}

/// Source of an embedded map frame that requires an API key.
pub fn embed_url(api_key: &str, origin: Coordinate, destination: Coordinate) -> Url {
    let mut url = Url::parse(EMBED_DIRECTIONS_URL).expect("valid embed URL");
    url.query_pairs_mut()
        .append_pair("key", api_key)
        .append_pair("origin", &lat_lng(origin))
        .append_pair("destination", &lat_lng(destination))
        .append_pair("mode", TRAVEL_MODE)
        .append_pair("zoom", EMBED_ZOOM);
    url
}
