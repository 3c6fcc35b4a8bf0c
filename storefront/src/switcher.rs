//! Size/color option selection and the color-to-image swap on product cards.

use shop::catalog;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlImageElement};

use crate::consts::{CARD_IMAGE_SELECTOR, CARD_SELECTOR, DATA_COLOR, DATA_SHOE, DATA_SIZE, SELECTED_CLASS};
use crate::dom::{self, listen, query, query_all, report};

/// One delegated click listener on the document for every card's options.
///
/// # Errors
///
/// Propagates a failed listener registration.
pub fn mount(document: &Document) -> Result<(), JsValue> {
    listen(document, "click", |e| {
        let Some(target) = dom::event_element(&e) else {
            return;
        };
        if target.has_attribute(DATA_SIZE) {
            select_option(&target, DATA_SIZE);
        }
        if target.has_attribute(DATA_COLOR) {
            select_option(&target, DATA_COLOR);
            show_color(&target);
        }
    })?;
    log::info!("switcher: mounted");
    Ok(())
}

/// Mark `option` selected and clear its siblings carrying the same attribute.
pub fn select_option(option: &Element, attribute: &str) {
    if let Some(group) = option.parent_element() {
        for sibling in query_all(&group, &format!("[{attribute}]")) {
            report("deselect option", sibling.class_list().remove_1(SELECTED_CLASS));
        }
    }
    report("select option", option.class_list().add_1(SELECTED_CLASS));
}

/// Swap the card image for the color carried by `color_option`.
///
/// Unknown product/color pairs leave the image as it is.
pub fn show_color(color_option: &Element) {
    let Some(color) = color_option.get_attribute(DATA_COLOR) else {
        return;
    };
    let Some(card) = dom::closest(color_option, CARD_SELECTOR) else {
        return;
    };
    let Some(image) = query(&card, CARD_IMAGE_SELECTOR).and_then(|el| el.dyn_ref::<HtmlImageElement>().cloned()) else {
        return;
    };
    let Some(shoe) = card.get_attribute(DATA_SHOE) else {
        return;
    };

    match catalog::image_for(&shoe, &color) {
        Some(path) => image.set_src(path),
        None => log::debug!("switcher: no image for {shoe}/{color}"),
    }
}
