use super::*;

#[get("/mosque-search?<lat>&<lon>&<distance>")]
pub async fn get_mosque_search(
    gateway: &State<Mosques>,
    lat: Option<String>,
    lon: Option<String>,
    distance: Option<String>,
) -> RawResult {
    let params = usecases::SearchParams {
        lat: lat.as_deref(),
        lon: lon.as_deref(),
        distance: distance.as_deref(),
    };
    let query = usecases::parse_search_query(&params)?;
    let mosques = usecases::search_mosques(&*gateway.0, &query).await?;
    Ok(RawJson(mosques))
}

#[get("/mosque-details?<id>")]
pub async fn get_mosque_details(gateway: &State<Mosques>, id: Option<String>) -> RawResult {
    let id = usecases::parse_mosque_id(id.as_deref())?;
    let mosque = usecases::get_mosque_details(&*gateway.0, &id).await?;
    Ok(RawJson(mosque))
}

#[options("/mosque-search")]
pub fn options_mosque_search() {}

#[options("/mosque-details")]
pub fn options_mosque_details() {}
