// Accessibility helpers

/// CSS for visible focus indicators and screen reader utilities.
///
/// Injected once by the app shell; everything else is left to the host page.
#[must_use]
pub const fn visible_focus_css() -> &'static str {
    ":focus-visible{outline:3px solid #1a73e8;outline-offset:2px} .sr-only{position:absolute;width:1px;height:1px;margin:-1px;overflow:hidden;clip:rect(0 0 0 0);white-space:nowrap;}"
}

/// Move focus back to the element with `id`, if present.
///
/// Used when the detail modal closes so keyboard users land on the card they
/// opened it from.
pub fn restore_focus(id: &str) {
    use wasm_bindgen::JsCast;

    if let Some(el) = crate::dom::document()
        .and_then(|doc| doc.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
    {
        let _ = el.focus();
    }
}

/// Update the `#catalog-status` live region for screen readers.
pub fn set_status(msg: &str) {
    if let Some(node) = crate::dom::document().and_then(|doc| doc.get_element_by_id("catalog-status")) {
        node.set_text_content(Some(msg));
    }
}
