use leptos::*;

use masjid_core::{entities::MosqueSummary, i18n::Texts, presentation::Session};

/// Facility badges shown per list item before collapsing into a counter.
const MAX_BADGES: usize = 3;

#[component]
pub fn MosqueList<F>(
    texts: Signal<&'static Texts>,
    session: Signal<Session>,
    on_select: F,
) -> impl IntoView
where
    F: Fn(MosqueSummary) + 'static + Copy,
{
    let mosques = create_memo(move |_| session.with(|s| s.mosques().to_vec()));
    let loading = Signal::derive(move || session.with(Session::is_loading));
    let located = Signal::derive(move || session.with(|s| s.location().is_some()));
    let nothing_found =
        move || mosques.with(Vec::is_empty) && !loading.get() && located.get();

    view! {
      <section class="panel panel--list">
        <h2 class="panel__title">
          "🕌 " { move || texts.get().nearby_mosques }
          { move || loading.get().then(|| view! { <span class="spinner"></span> }) }
        </h2>
        { move || located.get().then(|| view! {
            <p class="panel__hint">{ move || texts.get().within }</p>
        })}
        <div class="mosque-list">
          { move || nothing_found().then(|| view! {
              <p class="panel__empty">"🔍 " { move || texts.get().no_mosques }</p>
          })}
          <For
            each = move || mosques.get()
            key = |mosque| mosque.uuid.clone()
            children = move |mosque| view! { <MosqueItem texts session mosque on_select /> }
          />
        </div>
      </section>
    }
}

#[component]
fn MosqueItem<F>(
    texts: Signal<&'static Texts>,
    session: Signal<Session>,
    mosque: MosqueSummary,
    on_select: F,
) -> impl IntoView
where
    F: Fn(MosqueSummary) + 'static + Copy,
{
    let title = mosque.title().unwrap_or_default().to_owned();
    let localisation = mosque.localisation.clone();

    let facilities = mosque.facilities.enabled();
    let collapsed = facilities.len().saturating_sub(MAX_BADGES);
    let badges = (!facilities.is_empty()).then(|| {
        let badges = facilities
            .into_iter()
            .take(MAX_BADGES)
            .map(|f| {
                view! {
                  <span class="badge" title=f.label()>
                    { f.icon() } " " <span class="badge__text">{ f.label() }</span>
                  </span>
                }
            })
            .collect_view();
        view! {
          <div class="badges">
            { badges }
            { (collapsed > 0).then(|| view! { <span class="badge">{ format!("+{collapsed}") }</span> }) }
          </div>
        }
    });

    let selected = {
        let mosque = mosque.clone();
        Signal::derive(move || session.with(|s| s.is_selected(&mosque)))
    };

    let distance = {
        let mosque = mosque.clone();
        move || {
            session.with(|s| s.distance_to(&mosque)).map(|distance| {
                view! {
                  <p class="mosque__distance">
                    "📍 " { distance.to_display_string() } " km " { move || texts.get().away }
                  </p>
                }
            })
        }
    };

    view! {
      <button
        class = move || if selected.get() { "mosque mosque--selected" } else { "mosque" }
        on:click = move |_| on_select(mosque.clone())
      >
        <h3 class="mosque__title">{ title }</h3>
        <p class="mosque__localisation">{ localisation }</p>
        { badges }
        { distance }
      </button>
    }
}
