use leptos::*;

use masjid_core::{entities::Coordinate, i18n::Texts};

#[component]
pub fn ErrorBanner<D, R>(
    texts: Signal<&'static Texts>,
    error: Signal<Option<String>>,
    retry: Signal<bool>,
    on_dismiss: D,
    on_retry: R,
) -> impl IntoView
where
    D: Fn() + 'static + Copy,
    R: Fn() + 'static + Copy,
{
    move || {
        error.get().map(|message| {
            view! {
              <div class="banner banner--error" role="alert">
                <p class="banner__title">"⚠️ " { move || texts.get().error_title }</p>
                <p class="banner__message">{ message }</p>
                <div class="banner__actions">
                  { move || retry.get().then(|| view! {
                      <button on:click = move |_| on_retry()>{ move || texts.get().retry }</button>
                  })}
                  <button on:click = move |_| on_dismiss()>{ move || texts.get().dismiss }</button>
                </div>
              </div>
            }
        })
    }
}

#[component]
pub fn LocationBanner(
    texts: Signal<&'static Texts>,
    location: Signal<Option<Coordinate>>,
) -> impl IntoView {
    move || {
        location.get().map(|location| {
            view! {
              <div class="banner banner--location">
                <span class="banner__label">"📍 " { move || texts.get().your_location } ":"</span>
                " "
                <span>{ format!("{:.4}, {:.4}", location.lat(), location.lng()) }</span>
              </div>
            }
        })
    }
}
