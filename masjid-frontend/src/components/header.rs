use std::time::Duration;

use leptos::*;
use wasm_bindgen::JsValue;

use masjid_core::i18n::{Language, Texts};

const MAWAQIT_URL: &str = "https://mawaqit.net";
const CLOCK_INTERVAL: Duration = Duration::from_secs(1);

#[component]
pub fn Header(language: RwSignal<Language>, texts: Signal<&'static Texts>) -> impl IntoView {
    view! {
      <header class="header">
        <div class="header__bar">
          <nav class="header__links">
            <a href=MAWAQIT_URL target="_blank" rel="noopener noreferrer">
              "🌐 " { move || texts.get().visit_upstream }
            </a>
          </nav>
          <button
            class="language-toggle"
            on:click = move |_| language.update(|l| *l = l.toggle())
          >
            "🌐 " { move || language.get().toggle().native_name() }
          </button>
        </div>
        <div class="header__title">
          <h1>{ move || texts.get().title }</h1>
          <p class="header__subtitle">{ move || texts.get().subtitle }</p>
          <Clock language = language.into() />
        </div>
      </header>
    }
}

#[component]
fn Clock(language: Signal<Language>) -> impl IntoView {
    let now = RwSignal::new(js_sys::Date::now());

    match set_interval_with_handle(move || now.set(js_sys::Date::now()), CLOCK_INTERVAL) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(err) => log::warn!("Unable to start clock: {err:?}"),
    }

    let time = move || {
        let date = js_sys::Date::new(&JsValue::from_f64(now.get()));
        String::from(date.to_locale_time_string(language.get().locale()))
    };

    view! {
      <p class="header__clock">"🕐 " { time }</p>
    }
}
