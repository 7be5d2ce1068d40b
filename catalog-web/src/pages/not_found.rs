use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::*;

/// Shown for unknown paths and unknown catalog kinds.
#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <section class="panel not-found" aria-live="assertive">
            <h1>{ crate::i18n::t("not_found.title") }</h1>
            <p>{ crate::i18n::t("not_found.message") }</p>
            <Link<Route> to={Route::Home} classes="back-link">
                { crate::i18n::t("not_found.back") }
            </Link<Route>>
        </section>
    }
}
