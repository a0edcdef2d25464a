use leptos::*;

use masjid_core::i18n::Texts;

#[component]
pub fn Footer(texts: Signal<&'static Texts>) -> impl IntoView {
    view! {
      <footer class="footer">
        <p>{ move || texts.get().powered_by }</p>
      </footer>
    }
}
