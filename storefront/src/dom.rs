//! Thin helpers over `web-sys` shared by the components.
//!
//! Lookups return `Option` and log instead of failing: a page without some
//! section simply leaves that component unmounted. Fallible DOM calls made from
//! inside event handlers go through [`report`], which logs and carries on.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

use gloo_timers::callback::Timeout;
use shop::consts::{FEEDBACK_BACKGROUND, FEEDBACK_MS};
use shop::copy::Locale;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    Window,
};

use crate::consts::{DATA_FLASH_GENERATION, DATA_ORIGINAL_LABEL};

/// `document.readyState` before the DOM has been parsed.
const READY_STATE_LOADING: &str = "loading";

/// The global `window`.
///
/// # Errors
///
/// Fails outside a browser main thread.
pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))
}

/// The window's `document`.
///
/// # Errors
///
/// Fails when there is no window or it has no document.
pub fn document() -> Result<Document, JsValue> {
    window()?.document().ok_or_else(|| JsValue::from_str("window has no document"))
}

/// Whether a `document.readyState` value means parsing is still under way.
#[must_use]
pub fn is_loading(ready_state: &str) -> bool {
    ready_state == READY_STATE_LOADING
}

/// Log a failed DOM call and continue.
pub fn report<T>(context: &str, result: Result<T, JsValue>) {
    if let Err(err) = result {
        log::warn!("{context}: {err:?}");
    }
}

/// Element by id, cast to `T`. `None` when absent or of another type.
pub fn by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    let element = document.get_element_by_id(id)?;
    match element.dyn_into::<T>() {
        Ok(typed) => Some(typed),
        Err(_) => {
            log::warn!("#{id} is not the expected element type");
            None
        }
    }
}

/// First descendant matching `selector`.
pub fn query(root: &Element, selector: &str) -> Option<Element> {
    match root.query_selector(selector) {
        Ok(found) => found,
        Err(err) => {
            log::warn!("query {selector}: {err:?}");
            None
        }
    }
}

/// All descendants matching `selector`, in document order.
pub fn query_all(root: &Element, selector: &str) -> Vec<Element> {
    let list = match root.query_selector_all(selector) {
        Ok(list) => list,
        Err(err) => {
            log::warn!("query all {selector}: {err:?}");
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect()
}

/// Nearest ancestor (or self) matching `selector`.
pub fn closest(element: &Element, selector: &str) -> Option<Element> {
    match element.closest(selector) {
        Ok(found) => found,
        Err(err) => {
            log::warn!("closest {selector}: {err:?}");
            None
        }
    }
}

/// The element an event was dispatched to, if it is one.
pub fn event_element(event: &Event) -> Option<Element> {
    event.target().and_then(|target| target.dyn_ref::<Element>().cloned())
}

/// Whether `event` was dispatched to `element` itself rather than a child.
pub fn targets_self(event: &Event, element: &Element) -> bool {
    let own: &EventTarget = element.as_ref();
    event.target().as_ref() == Some(own)
}

/// Attach `handler` for `event` on `target` for the lifetime of the page.
///
/// # Errors
///
/// Propagates a failed `addEventListener`.
pub fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) -> Result<(), JsValue> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Smooth-scroll `element` into view, optionally aligning its block edge.
pub fn scroll_into_view(element: &Element, block: Option<ScrollLogicalPosition>) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    if let Some(block) = block {
        options.set_block(block);
    }
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Copy language chosen by `<html lang>`.
pub fn locale(document: &Document) -> Locale {
    let lang = document.document_element().and_then(|root| root.get_attribute("lang")).unwrap_or_default();
    Locale::from_lang(&lang)
}

/// Generation number for the next flash, given the one stored on the button.
///
/// Unreadable values restart the count.
#[must_use]
pub fn next_flash_generation(current: Option<&str>) -> u32 {
    match current.map(str::parse::<u32>) {
        Some(Ok(generation)) => generation.wrapping_add(1),
        _ => 1,
    }
}

/// Swap a button's label for `label` on a green background, then restore it.
///
/// The original label is stashed on the element, so a second flash before the
/// first one ends still restores the real label. Each flash bumps a generation
/// stored on the button and only the newest flash's timer restores it.
pub fn flash(button: &HtmlElement, label: &str, text_color: Option<&str>) {
    if !button.has_attribute(DATA_ORIGINAL_LABEL) {
        let original = button.text_content().unwrap_or_default();
        report("stash button label", button.set_attribute(DATA_ORIGINAL_LABEL, &original));
    }
    let generation = next_flash_generation(button.get_attribute(DATA_FLASH_GENERATION).as_deref()).to_string();
    report("stamp flash", button.set_attribute(DATA_FLASH_GENERATION, &generation));
    button.set_text_content(Some(label));

    let style = button.style();
    report("feedback background", style.set_property("background", FEEDBACK_BACKGROUND));
    if let Some(color) = text_color {
        report("feedback color", style.set_property("color", color));
    }

    let button = button.clone();
    Timeout::new(FEEDBACK_MS, move || restore_label(&button, &generation)).forget();
}

fn restore_label(button: &HtmlElement, generation: &str) {
    if button.get_attribute(DATA_FLASH_GENERATION).as_deref() != Some(generation) {
        // A later flash owns the button now.
        return;
    }
    let Some(original) = button.get_attribute(DATA_ORIGINAL_LABEL) else {
        return;
    };
    button.set_text_content(Some(&original));
    report("drop stashed label", button.remove_attribute(DATA_ORIGINAL_LABEL));
    report("drop flash generation", button.remove_attribute(DATA_FLASH_GENERATION));

    let style = button.style();
    report("reset background", style.remove_property("background"));
    report("reset color", style.remove_property("color"));
}
