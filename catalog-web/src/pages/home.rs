use crate::i18n::t;
use crate::router::Route;
use catalog_core::CatalogKind;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    html! {
        <section class="home">
            <h1>{ t("app.title") }</h1>
            <p class="subtitle">{ t("app.subtitle") }</p>
            <p>{ t("home.intro") }</p>
            <ul class="catalog-links">
                { for CatalogKind::ALL.into_iter().map(|kind| html! {
                    <li class="catalog-link" data-kind={kind.slug()}>
                        <h2>{ t(&format!("kinds.{}", kind.slug())) }</h2>
                        <Link<Route> to={Route::catalog(kind)}>{ t("home.open_catalog") }</Link<Route>>
                        {" "}
                        <Link<Route> to={Route::overview(kind)}>{ t("home.open_overview") }</Link<Route>>
                    </li>
                }) }
            </ul>
        </section>
    }
}
