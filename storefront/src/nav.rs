//! In-page jump to the "why choose us" section.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::consts::{LINK_SELECTOR, WHY_CHOOSE_US_ID, WHY_US_HREF, WHY_US_LABEL};
use crate::dom::{self, by_id, listen};

/// Whether a link with this text and `href` jumps to the section.
#[must_use]
pub fn is_why_us_link(text: Option<&str>, href: Option<&str>) -> bool {
    text.is_some_and(|text| text.contains(WHY_US_LABEL)) || href == Some(WHY_US_HREF)
}

/// One document-level listener catching every "Why Us" link.
///
/// Only clicks inside an `<a>` count, so the drawer backdrop and other
/// containers whose text mentions the section are ignored.
///
/// # Errors
///
/// Propagates a failed listener registration.
pub fn mount(document: &Document) -> Result<(), JsValue> {
    let doc = document.clone();
    listen(document, "click", move |e| {
        let Some(link) = dom::event_element(&e).and_then(|target| dom::closest(&target, LINK_SELECTOR)) else {
            return;
        };
        if !is_why_us_link(link.text_content().as_deref(), link.get_attribute("href").as_deref()) {
            return;
        }
        e.prevent_default();
        if let Some(section) = by_id::<Element>(&doc, WHY_CHOOSE_US_ID) {
            dom::scroll_into_view(&section, None);
        }
    })?;
    log::info!("nav: mounted");
    Ok(())
}
