use super::*;
use crate::gateways::mosque::DEFAULT_SEARCH_DISTANCE;

/// Raw query parameters of a nearby search.
#[derive(Debug, Default, Clone, Copy)]
pub struct SearchParams<'a> {
    pub lat: Option<&'a str>,
    pub lon: Option<&'a str>,
    pub distance: Option<&'a str>,
}

pub fn parse_search_query(params: &SearchParams) -> Result<SearchQuery> {
    let lat = parse::required_param("lat", params.lat)?;
    let lon = parse::required_param("lon", params.lon)?;
    let lat = parse::parse_number("lat", lat)?;
    let lon = parse::parse_number("lon", lon)?;
    let center = Coordinate::try_new(lat, lon).map_err(|err| match err {
        CoordinateError::Latitude(_) => Error::InvalidParameter("lat", err.to_string()),
        CoordinateError::Longitude(_) => Error::InvalidParameter("lon", err.to_string()),
    })?;
    let distance = match parse::optional_param(params.distance) {
        Some(distance) => {
            let distance = parse::parse_number("distance", distance)?;
            if distance <= 0.0 {
                return Err(Error::InvalidParameter(
                    "distance",
                    "must be greater than zero".to_string(),
                ));
            }
            distance
        }
        None => DEFAULT_SEARCH_DISTANCE,
    };
    Ok(SearchQuery { center, distance })
}

/// Find mosques around the given center.
///
/// Returns the JSON list exactly as sent by the upstream API.
pub async fn search_mosques<G>(gateway: &G, query: &SearchQuery) -> Result<String>
where
    G: MosqueGateway + ?Sized,
{
    let response = gateway.search(query).await.map_err(Error::Search)?;
    let mosques = validate::mosque_list(response).map_err(Error::Search)?;
    log::info!("Successfully fetched mosques around {}", query.center);
    Ok(mosques)
}
