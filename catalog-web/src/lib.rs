#![forbid(unsafe_code)]
//! Yew front end for the catalog pages.
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod a11y;
pub mod api;
pub mod app;
pub mod assets;
pub mod components;
pub mod dom;
pub mod i18n;
pub mod pages;
pub mod paths;
pub mod prompter;
pub mod router;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    init_logging();
    // Ensure <html lang> matches the saved locale before the first render
    crate::i18n::set_lang(&crate::i18n::current_lang());
    tracing::info!("catalog browser starting");
    yew::Renderer::<app::App>::new().render();
}

/// Route `tracing` events and `log` records from the core crate to the
/// browser console. Only the first call has an effect.
#[cfg(target_arch = "wasm32")]
pub fn init_logging() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        let (level, filter) = if cfg!(debug_assertions) {
            (tracing::Level::DEBUG, log::LevelFilter::Debug)
        } else {
            (tracing::Level::INFO, log::LevelFilter::Info)
        };
        tracing_wasm::set_as_global_default_with_config(
            tracing_wasm::WASMLayerConfigBuilder::new()
                .set_max_level(level)
                .build(),
        );
        if let Err(err) = tracing_log::LogTracer::init_with_filter(filter) {
            tracing::warn!("log records will not reach the console: {err}");
        }
    });
}
