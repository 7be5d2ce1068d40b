use catalog_core::CatalogKind;
use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/catalog/:kind")]
    Catalog { kind: String },
    #[at("/overview/:kind")]
    Overview { kind: String },
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    #[must_use]
    pub fn catalog(kind: CatalogKind) -> Self {
        Self::Catalog {
            kind: kind.slug().to_string(),
        }
    }

    #[must_use]
    pub fn overview(kind: CatalogKind) -> Self {
        Self::Overview {
            kind: kind.slug().to_string(),
        }
    }

    /// Catalog kind addressed by this route; `None` for pages without one or
    /// an unknown kind segment.
    #[must_use]
    pub fn kind(&self) -> Option<CatalogKind> {
        match self {
            Self::Catalog { kind } | Self::Overview { kind } => kind.parse().ok(),
            Self::Home | Self::NotFound => None,
        }
    }
}
