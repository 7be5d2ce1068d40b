//! Per-page catalog store bound to Yew.
use crate::api::FetchClient;
use crate::prompter::BrowserPrompter;
use catalog_core::{Action, CatalogKind, CatalogStore, execute};
use std::cell::{Ref, RefCell};
use std::rc::Rc;
use yew::prelude::*;

/// Everything needed to run effects outside the render cycle.
struct Runner {
    store: Rc<RefCell<CatalogStore>>,
    api: FetchClient,
    prompter: BrowserPrompter,
    redraw: UseForceUpdateHandle,
}

/// Dispatch `action`, re-render, and execute the resulting effects. Each
/// completed effect is dispatched the same way.
fn run(runner: &Rc<Runner>, action: Action) {
    let (effects, kind) = {
        let mut store = runner.store.borrow_mut();
        (store.dispatch(action), store.kind())
    };
    runner.redraw.force_update();
    for effect in effects {
        let runner = Rc::clone(runner);
        wasm_bindgen_futures::spawn_local(async move {
            if let Some(next) = execute(&runner.api, &runner.prompter, kind, effect).await {
                run(&runner, next);
            }
        });
    }
}

#[derive(Clone)]
pub struct CatalogHandle {
    store: Rc<RefCell<CatalogStore>>,
    dispatch: Callback<Action>,
}

impl CatalogHandle {
    /// Borrow the store for rendering. Do not hold across a dispatch.
    #[must_use]
    pub fn store(&self) -> Ref<'_, CatalogStore> {
        self.store.borrow()
    }

    #[must_use]
    pub fn dispatch(&self) -> Callback<Action> {
        self.dispatch.clone()
    }

    /// Callback that maps its input to an action before dispatching.
    #[must_use]
    pub fn reform<T: 'static>(&self, f: impl Fn(T) -> Action + 'static) -> Callback<T> {
        self.dispatch.reform(f)
    }
}

/// Own a [`CatalogStore`] for `kind` and load the unfiltered list on mount.
///
/// Pages are keyed by kind, so a kind change remounts instead of reusing the
/// store.
#[hook]
pub fn use_catalog(kind: CatalogKind) -> CatalogHandle {
    let store = use_mut_ref(|| CatalogStore::new(kind));
    let redraw = use_force_update();
    let runner = {
        let store = store.clone();
        use_memo((), move |_| Runner {
            store,
            api: FetchClient::default(),
            prompter: BrowserPrompter,
            redraw,
        })
    };
    let dispatch = {
        let runner = Rc::clone(&runner);
        use_callback((), move |action: Action, _| run(&runner, action))
    };
    {
        let dispatch = dispatch.clone();
        use_effect_with(kind, move |_| {
            dispatch.emit(Action::Refresh);
            || {}
        });
    }

    CatalogHandle { store, dispatch }
}
