use std::{borrow::Cow, ffi::OsStr, path::PathBuf};

use rocket::{get, http::ContentType, response::content::RawHtml, routes, Route};
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "../masjid-frontend/dist/"]
struct Asset;

#[get("/")]
pub fn get_index() -> Option<RawHtml<Cow<'static, [u8]>>> {
    Asset::get("index.html").map(|html| RawHtml(html.data))
}

#[get("/<file..>", rank = 10)]
pub fn get_asset(file: PathBuf) -> Option<(ContentType, Cow<'static, [u8]>)> {
    let filename = file.display().to_string();
    let asset = Asset::get(&filename)?;
    let content_type = file
        .extension()
        .and_then(OsStr::to_str)
        .and_then(ContentType::from_extension)
        .unwrap_or(ContentType::Bytes);
    Some((content_type, asset.data))
}

pub fn routes() -> Vec<Route> {
    routes![get_index, get_asset]
}
