use super::*;

pub fn parse_mosque_id(id: Option<&str>) -> Result<MosqueId> {
    parse::required_param("id", id)?
        .parse()
        .map_err(|_| Error::MissingParameter("id"))
}

/// Fetch the details of a mosque.
///
/// Returns the JSON object exactly as sent by the upstream API.
pub async fn get_mosque_details<G>(gateway: &G, id: &MosqueId) -> Result<String>
where
    G: MosqueGateway + ?Sized,
{
    let response = gateway.mosque(id).await.map_err(Error::Details)?;
    let mosque = validate::mosque_detail(response).map_err(Error::Details)?;
    log::debug!("Successfully fetched details of mosque {id}");
    Ok(mosque)
}
