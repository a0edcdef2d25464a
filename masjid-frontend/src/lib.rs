use leptos::*;

use masjid_core::{
    entities::{Coordinate, MosqueId, MosqueSummary},
    gateways::mosque::DEFAULT_SEARCH_DISTANCE,
    i18n::Language,
    presentation::{Command, Event, Phase, Session},
};
use masjid_frontend_api as api;

mod components;
mod geolocation;

use components::*;

const DEFAULT_API_URL: &str = "/api";

/// The embedded map is only offered if a key was provided at build time.
const MAPS_EMBED_KEY: Option<&str> = option_env!("MASJID_MAPS_EMBED_KEY");

#[allow(clippy::too_many_lines)]
#[component]
#[must_use]
pub fn App() -> impl IntoView {
    // -- signals -- //

    let language = RwSignal::new(Language::default());
    let session = RwSignal::new(Session::default());
    let texts = Signal::derive(move || language.get().texts());

    // -- init API -- //

    let public_api = api::PublicApi::new(DEFAULT_API_URL);

    // -- actions -- //

    let locate = Action::new(move |()| async move {
        match geolocation::current_position().await {
            Ok(position) => Event::LocationAcquired(position),
            Err(err) => {
                log::warn!("Unable to locate device: {err:?}");
                Event::LocationDenied(err.message(language.get_untracked().texts()))
            }
        }
    });

    let search = Action::new(move |center: &Coordinate| {
        let center = *center;
        async move {
            match public_api.search(&center, DEFAULT_SEARCH_DISTANCE).await {
                Ok(mosques) => Event::MosquesFetched(mosques),
                Err(err) => {
                    log::warn!("Unable to fetch nearby mosques: {err}");
                    Event::SearchFailed(err.to_string())
                }
            }
        }
    });

    let fetch_details = Action::new(move |id: &MosqueId| {
        let id = id.clone();
        async move {
            match public_api.mosque_details(id.as_str()).await {
                Ok(detail) => Event::DetailFetched(id, detail),
                Err(err) => {
                    log::warn!("Unable to fetch details of mosque {id}: {err}");
                    Event::DetailFailed(id, err.to_string())
                }
            }
        }
    });

    // -- callbacks -- //

    let send = move |event: Event| {
        let Some(command) = session.try_update(|s| s.handle(event)).flatten() else {
            return;
        };
        log::debug!("Run {command:?}");
        match command {
            Command::AcquireLocation => locate.dispatch(()),
            Command::SearchMosques(center) => search.dispatch(center),
            Command::FetchDetails(id) => fetch_details.dispatch(id),
        }
    };

    let on_select = move |mosque: MosqueSummary| send(Event::Select(mosque));
    let on_dismiss = move || send(Event::DismissError);
    let on_retry = move || send(Event::Retry);

    // -- effects -- //

    Effect::new(move |_| {
        if let Some(event) = locate.value().get() {
            untrack(|| send(event));
        }
    });

    Effect::new(move |_| {
        if let Some(event) = search.value().get() {
            untrack(|| send(event));
        }
    });

    Effect::new(move |_| {
        if let Some(event) = fetch_details.value().get() {
            untrack(|| send(event));
        }
    });

    send(Event::Start);

    // -- derived signals -- //

    let session = Signal::from(session);
    let error = Signal::derive(move || session.with(|s| s.error().map(ToOwned::to_owned)));
    let retry = Signal::derive(move || session.with(|s| s.phase() == Phase::Unavailable));
    let location = Signal::derive(move || session.with(Session::location));

    view! {
      <div
        class="app"
        dir=move || language.get().dir().as_str()
        lang=move || language.get().locale()
        style=move || format!("font-family: {}", language.get().font_family())
      >
        <div class="container">
          <Header language texts />
          <ErrorBanner texts error retry on_dismiss on_retry />
          <LocationBanner texts location />
          <main class="panels">
            <MosqueList texts session on_select />
            <PrayerPanel texts session embed_key=MAPS_EMBED_KEY />
          </main>
          <Footer texts />
        </div>
      </div>
    }
}
