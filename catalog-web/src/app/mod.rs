pub mod state;

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::pages::catalog::CatalogPage;
use crate::pages::home::HomePage;
use crate::pages::not_found::NotFound;
use crate::pages::overview::OverviewPage;
use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::*;

pub use state::{CatalogHandle, use_catalog};

#[function_component(App)]
pub fn app() -> Html {
    let router_base = crate::paths::router_base().map(AttrValue::from);
    html! {
        <BrowserRouter basename={router_base}>
            <AppShell />
        </BrowserRouter>
    }
}

/// Header, routed main content and footer. Changing the language re-renders
/// the whole tree so every `t()` call picks up the new bundle.
#[function_component(AppShell)]
pub fn app_shell() -> Html {
    let current_language = use_state(crate::i18n::current_lang);
    let on_lang_change = {
        let current_language = current_language.clone();
        Callback::from(move |lang: String| current_language.set(lang))
    };

    html! {
        <>
            <style>{ crate::a11y::visible_focus_css() }</style>
            <Header current_lang={(*current_language).clone()} {on_lang_change} />
            <main id="main" role="main" key={(*current_language).clone()}>
                <Switch<Route> render={switch} />
            </main>
            <Footer />
        </>
    }
}

/// Route to page. Unknown catalog kinds render the not-found page.
#[must_use]
pub fn switch(route: Route) -> Html {
    match (&route, route.kind()) {
        (Route::Home, _) => html! { <HomePage /> },
        (Route::Catalog { .. }, Some(kind)) => {
            html! { <CatalogPage key={kind.slug()} {kind} /> }
        }
        (Route::Overview { .. }, Some(kind)) => {
            html! { <OverviewPage key={kind.slug()} {kind} /> }
        }
        _ => html! { <NotFound /> },
    }
}
