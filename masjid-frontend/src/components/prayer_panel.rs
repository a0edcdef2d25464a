use leptos::*;

use masjid_core::{
    entities::{Coordinate, MosqueDetail, MosqueSummary, ScheduleEntry},
    i18n::Texts,
    maps,
    presentation::Session,
};

#[component]
pub fn PrayerPanel(
    texts: Signal<&'static Texts>,
    session: Signal<Session>,
    embed_key: Option<&'static str>,
) -> impl IntoView {
    let selected = create_memo(move |_| session.with(|s| s.selected().map(|m| m.uuid.clone())));
    let detail = create_memo(move |_| session.with(|s| s.detail().cloned()));
    let show_map = RwSignal::new(false);

    Effect::new(move |_| {
        selected.track();
        show_map.set(false);
    });

    let loading = move || selected.with(Option::is_some) && detail.with(Option::is_none);

    view! {
      <section class="panel panel--prayers">
        <h2 class="panel__title">"🕰️ " { move || texts.get().prayer_times }</h2>
        { move || selected.with(Option::is_none).then(|| view! {
            <p class="panel__empty">"🔍 " { move || texts.get().select_mosque }</p>
        })}
        { move || loading().then(|| view! { <span class="spinner"></span> }) }
        { move || detail.get().map(|detail| view! {
            <MosqueDetails texts session detail show_map embed_key />
        })}
      </section>
    }
}

#[allow(clippy::too_many_lines)]
#[component]
fn MosqueDetails(
    texts: Signal<&'static Texts>,
    session: Signal<Session>,
    detail: MosqueDetail,
    show_map: RwSignal<bool>,
    embed_key: Option<&'static str>,
) -> impl IntoView {
    let destination = detail.coordinate().or_else(|| {
        session.with_untracked(|s| s.selected().and_then(MosqueSummary::coordinate))
    });
    let origin = Signal::derive(move || session.with(Session::location));
    let route = move || origin.get().zip(destination);

    let title = detail.title().unwrap_or_default().to_owned();
    let schedule = detail.schedule();
    let facilities = detail.facilities.enabled();
    let has_contact = detail.has_contact();
    let MosqueDetail {
        localisation,
        phone,
        email,
        site,
        jumua,
        ..
    } = detail;

    let map_buttons = move || {
        route().map(|(origin, destination)| {
            let directions = maps::directions_url(origin, destination).to_string();
            view! {
              <div class="actions">
                { embed_key.is_some().then(|| view! {
                    <button
                      class="button button--map"
                      on:click = move |_| show_map.update(|show| *show = !*show)
                    >
                      "🗺️ " { move || if show_map.get() { texts.get().hide_map } else { texts.get().show_map } }
                    </button>
                })}
                <a class="button button--directions" href=directions target="_blank" rel="noopener noreferrer">
                  "🧭 " { move || texts.get().get_directions }
                </a>
              </div>
            }
        })
    };

    let map = move || {
        let key = embed_key?;
        let (origin, destination) = route()?;
        show_map.get().then(|| view! { <EmbeddedMap api_key=key origin destination /> })
    };

    let facilities = (!facilities.is_empty()).then(|| {
        view! {
          <div class="facilities">
            <h4>{ move || texts.get().facilities }</h4>
            <div class="facilities__grid">
              { facilities.into_iter().map(|f| view! {
                  <div class="facility"><span>{ f.icon() }</span> <span>{ f.label() }</span></div>
              }).collect_view() }
            </div>
          </div>
        }
    });

    let schedule = schedule.map(|entries| {
        view! {
          <div class="schedule">
            <p class="schedule__today">"📅 " { move || texts.get().today }</p>
            { entries.into_iter().map(|entry| view! { <ScheduleRow texts entry /> }).collect_view() }
            { jumua.map(|jumua| view! {
                <div class="prayer prayer--jumua">
                  <span class="prayer__icon">"🕌"</span>
                  <div>
                    <p class="prayer__name">{ move || texts.get().jumua }</p>
                    <span class="prayer__time">{ jumua }</span>
                  </div>
                </div>
            })}
          </div>
        }
    });

    let contact = has_contact.then(|| {
        view! {
          <div class="contact">
            <h4>"📞 " { move || texts.get().contact }</h4>
            { phone.map(|phone| view! {
                <a class="contact__link" href=format!("tel:{phone}")>"☎️ " <span>{ phone }</span></a>
            })}
            { email.map(|email| view! {
                <a class="contact__link" href=format!("mailto:{email}")>"✉️ " <span>{ email }</span></a>
            })}
            { site.map(|site| view! {
                <a class="contact__link" href=site.clone() target="_blank" rel="noopener noreferrer">
                  "🌐 " <span>{ site }</span>
                </a>
            })}
          </div>
        }
    });

    view! {
      <div class="mosque-details">
        <div class="mosque-details__head">
          <h3>{ title }</h3>
          <p class="mosque__localisation">{ localisation }</p>
          { map_buttons }
          { map }
          { facilities }
        </div>
        { schedule }
        { contact }
      </div>
    }
}

#[component]
fn ScheduleRow(texts: Signal<&'static Texts>, entry: ScheduleEntry) -> impl IntoView {
    let ScheduleEntry {
        prayer,
        adhan,
        iqama,
    } = entry;
    let name: &'static str = prayer.into();
    let icon = if prayer.is_night() { "🌙" } else { "☀️" };

    view! {
      <div class=format!("prayer prayer--{name}")>
        <span class="prayer__icon">{ icon }</span>
        <div>
          <p class="prayer__name">{ move || texts.get().prayer(prayer) }</p>
          <p class="prayer__times">
            <span>{ move || texts.get().adhan } ": " <strong class="prayer__time">{ adhan }</strong></span>
            { iqama.map(|iqama| view! {
                <span>{ move || texts.get().iqama } ": " <strong class="prayer__iqama">{ iqama }</strong></span>
            })}
          </p>
        </div>
      </div>
    }
}

#[component]
fn EmbeddedMap(api_key: &'static str, origin: Coordinate, destination: Coordinate) -> impl IntoView {
    let src = maps::embed_url(api_key, origin, destination).to_string();
    view! {
      <div class="map">
        <iframe
          width="100%"
          height="350"
          loading="lazy"
          allowfullscreen=true
          referrerpolicy="no-referrer-when-downgrade"
          src=src
        ></iframe>
      </div>
    }
}
