use js_sys::{Promise, Reflect};
use leptos::window;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{GeolocationPosition, GeolocationPositionError};

use masjid_core::{entities::Coordinate, i18n::Texts};

#[derive(Debug)]
pub enum Error {
    Unsupported,
    Failed(String),
}

impl Error {
    pub fn message(&self, texts: &Texts) -> String {
        match self {
            Self::Unsupported => texts.no_geolocation.to_string(),
            Self::Failed(msg) => msg.clone(),
        }
    }
}

/// Ask the browser for the current position of the device.
pub async fn current_position() -> Result<Coordinate, Error> {
    let navigator = window().navigator();
    if !Reflect::has(&navigator, &JsValue::from_str("geolocation")).unwrap_or(false) {
        return Err(Error::Unsupported);
    }
    let geolocation = navigator.geolocation().map_err(|_| Error::Unsupported)?;
    let promise = Promise::new(&mut |resolve, reject| {
        if let Err(err) =
            geolocation.get_current_position_with_error_callback(&resolve, Some(&reject))
        {
            _ = reject.call1(&JsValue::UNDEFINED, &err);
        }
    });
    let position = JsFuture::from(promise)
        .await
        .map_err(|err| Error::Failed(error_message(err)))?;
    let coords = position.unchecked_into::<GeolocationPosition>().coords();
    Ok(Coordinate::new(coords.latitude(), coords.longitude()))
}

fn error_message(err: JsValue) -> String {
    match err.dyn_into::<GeolocationPositionError>() {
        Ok(err) => err.message(),
        Err(err) => err
            .as_string()
            .unwrap_or_else(|| "unknown JS error".to_string()),
    }
}
