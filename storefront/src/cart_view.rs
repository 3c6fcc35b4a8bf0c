//! Shopping cart binding: add-to-cart buttons, the summary panel and checkout.
//!
//! The [`Cart`] itself lives in the `shop` crate. This module reads selections
//! off the product cards, forwards them to the cart and rebuilds the summary
//! rows after every mutation.

#[cfg(test)]
#[path = "cart_view_test.rs"]
mod cart_view_test;

use std::cell::RefCell;
use std::rc::Rc;

use shop::consts::{DEFAULT_COLOR, DEFAULT_SIZE, UNKNOWN_PRODUCT};
use shop::copy::Locale;
use shop::{Cart, CartItem, CheckoutOutcome, LineId, Money, PriceError, Selection};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, Window};

use crate::consts::{
    ADD_TO_CART_CLASS, CARD_IMAGE_SELECTOR, CARD_SELECTOR, CART_ITEM_CLASS, CART_ITEMS_ID, CART_SUMMARY_ID,
    CART_TOTAL_ID, CHECKOUT_BTN_ID, CLEAR_CART_BTN_ID, DATA_COLOR, DATA_ID, DATA_PRICE, DATA_SIZE,
    DECREASE_QTY_CLASS, FIRST_COLOR_SELECTOR, FIRST_SIZE_SELECTOR, HIDDEN_CLASS, INCREASE_QTY_CLASS,
    REMOVE_ITEM_CLASS, SELECTED_COLOR_SELECTOR, SELECTED_SIZE_SELECTOR,
};
use crate::dom::{self, by_id, listen, query, report};
use crate::switcher;

/// Text color of the add-to-cart button during its feedback flash.
const ADDED_TEXT_COLOR: &str = "#ffffff";

/// Unit price from a button's `data-price`. A missing or blank attribute is free.
///
/// # Errors
///
/// Returns [`PriceError`] for anything [`Money::parse`] rejects.
pub fn parse_price(raw: Option<&str>) -> Result<Money, PriceError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(Money::ZERO),
        Some(text) => Money::parse(text),
    }
}

struct CartView {
    cart: Cart,
    locale: Locale,
    document: Document,
    summary: Element,
    rows: Element,
    total: Element,
    clear_button: Option<HtmlElement>,
}

impl CartView {
    fn add_from_button(&mut self, button: &HtmlElement) {
        let Some(card) = dom::closest(button, CARD_SELECTOR) else {
            log::debug!("cart: add button outside a product card");
            return;
        };
        let price = match parse_price(button.get_attribute(DATA_PRICE).as_deref()) {
            Ok(price) => price,
            Err(err) => {
                log::warn!("cart: not adding item: {err}");
                return;
            }
        };

        let item = self.cart.add(read_selection(&card, price));
        log::info!("cart: {} now x{}", item.id, item.quantity);
        self.rerender();
        dom::flash(button, self.locale.added_feedback(), Some(ADDED_TEXT_COLOR));
    }

    fn on_row_click(&mut self, target: &Element) {
        let Some(raw) = target.get_attribute(DATA_ID) else {
            return;
        };
        let id = LineId::from_raw(raw);
        let classes = target.class_list();

        if classes.contains(REMOVE_ITEM_CLASS) {
            let removed = self.cart.remove(&id);
            log::debug!("cart: remove {id}: {removed}");
        } else if classes.contains(INCREASE_QTY_CLASS) {
            let change = self.cart.change_quantity(&id, 1);
            log::debug!("cart: increase {id}: {change:?}");
        } else if classes.contains(DECREASE_QTY_CLASS) {
            let change = self.cart.change_quantity(&id, -1);
            log::debug!("cart: decrease {id}: {change:?}");
        } else {
            return;
        }
        self.rerender();
    }

    fn clear(&mut self) {
        self.cart.clear();
        self.rerender();
        if let Some(button) = &self.clear_button {
            dom::flash(button, self.locale.cleared_feedback(), None);
        }
    }

    fn checkout(&mut self, window: &Window) {
        let locale = self.locale;
        let mut dialog_error = None;
        let outcome = self.cart.checkout(|summary| match window.confirm_with_message(&locale.checkout_confirmation(summary)) {
            Ok(answer) => answer,
            Err(err) => {
                dialog_error = Some(err);
                false
            }
        });

        match outcome {
            Err(err) => {
                log::info!("cart: checkout refused: {err}");
                report("empty cart notice", window.alert_with_message(locale.empty_cart_notice()));
            }
            Ok(CheckoutOutcome::Declined) => {
                if let Some(err) = dialog_error {
                    log::error!("cart: checkout dialog failed: {err:?}");
                    report("checkout failure notice", window.alert_with_message(locale.checkout_failed_notice()));
                }
            }
            Ok(CheckoutOutcome::Confirmed(summary)) => {
                log::info!("cart: order confirmed, {} units for {}", summary.unit_count, summary.total);
                report("checkout thanks", window.alert_with_message(&locale.checkout_thanks(&summary)));
                self.clear();
            }
        }
    }

    fn rerender(&self) {
        report("cart render", self.render());
    }

    fn render(&self) -> Result<(), JsValue> {
        self.rows.set_text_content(None);
        self.total.set_text_content(Some(&self.cart.total().to_string()));

        if self.cart.is_empty() {
            self.summary.class_list().add_1(HIDDEN_CLASS)?;
            return Ok(());
        }
        self.summary.class_list().remove_1(HIDDEN_CLASS)?;

        for item in self.cart.items() {
            self.rows.append_child(&self.row(item)?.into())?;
        }
        Ok(())
    }

    fn row(&self, item: &CartItem) -> Result<Element, JsValue> {
        let row = self.element("div", CART_ITEM_CLASS, None)?;
        row.append_child(&self.element("div", "item-name", Some(&item.name))?.into())?;
        row.append_child(&self.element("div", "item-details", Some(&self.locale.item_details(&item.size, &item.color)))?.into())?;

        let line = self.element("div", "flex justify-between items-center mt-2", None)?;
        line.append_child(&self.element("span", "item-price", Some(&item.price.to_string()))?.into())?;

        let controls = self.element("div", "quantity-controls flex items-center gap-2", None)?;
        controls.append_child(&self.control(
            &format!("{DECREASE_QTY_CLASS} bg-gray-200 hover:bg-gray-300 w-6 h-6 rounded-full text-sm"),
            "-",
            &item.id,
        )?.into())?;
        controls.append_child(&self.element("span", "quantity font-bold", Some(&item.quantity.to_string()))?.into())?;
        controls.append_child(&self.control(
            &format!("{INCREASE_QTY_CLASS} bg-amber-200 hover:bg-amber-300 w-6 h-6 rounded-full text-sm"),
            "+",
            &item.id,
        )?.into())?;
        controls.append_child(&self.control(
            &format!("{REMOVE_ITEM_CLASS} text-red-500 hover:text-red-700 text-lg font-bold ml-2"),
            "×",
            &item.id,
        )?.into())?;

        line.append_child(&controls)?;
        row.append_child(&line)?;
        Ok(row)
    }

    fn control(&self, class: &str, label: &str, id: &LineId) -> Result<Element, JsValue> {
        let button = self.element("button", class, Some(label))?;
        button.set_attribute(DATA_ID, id.as_str())?;
        Ok(button)
    }

    fn element(&self, tag: &str, class: &str, text: Option<&str>) -> Result<Element, JsValue> {
        let element = self.document.create_element(tag)?;
        element.set_class_name(class);
        element.set_text_content(text);
        Ok(element)
    }
}

/// Read name, size, color and image off a card, auto-selecting the first
/// size/color option when the shopper picked none.
fn read_selection(card: &Element, price: Money) -> Selection {
    let name = query(card, "h2")
        .and_then(|heading| heading.text_content())
        .map(|text| text.trim().to_owned())
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| UNKNOWN_PRODUCT.to_owned());

    let size = selected_size(card);
    let color = selected_color(card);

    // Read after the color default so an auto-selected color's image is used.
    let image = query(card, CARD_IMAGE_SELECTOR).and_then(|img| img.get_attribute("src")).unwrap_or_default();

    Selection { name, price, size, color, image }
}

fn selected_size(card: &Element) -> String {
    if let Some(size) = query(card, SELECTED_SIZE_SELECTOR).and_then(|el| el.text_content()).filter(|s| !s.is_empty()) {
        return size;
    }
    let Some(first) = query(card, FIRST_SIZE_SELECTOR) else {
        return DEFAULT_SIZE.to_owned();
    };
    switcher::select_option(&first, DATA_SIZE);
    first.text_content().filter(|s| !s.is_empty()).unwrap_or_else(|| DEFAULT_SIZE.to_owned())
}

fn selected_color(card: &Element) -> String {
    if let Some(color) = query(card, SELECTED_COLOR_SELECTOR).and_then(|el| el.get_attribute(DATA_COLOR)).filter(|c| !c.is_empty()) {
        return color;
    }
    let Some(first) = query(card, FIRST_COLOR_SELECTOR) else {
        return DEFAULT_COLOR.to_owned();
    };
    switcher::select_option(&first, DATA_COLOR);
    switcher::show_color(&first);
    first.get_attribute(DATA_COLOR).filter(|c| !c.is_empty()).unwrap_or_else(|| DEFAULT_COLOR.to_owned())
}

/// Wire add-to-cart buttons, row controls, clear and checkout.
///
/// # Errors
///
/// Propagates a failed listener registration.
pub fn mount(document: &Document) -> Result<(), JsValue> {
    let (Some(summary), Some(rows), Some(total)) = (
        by_id::<Element>(document, CART_SUMMARY_ID),
        by_id::<Element>(document, CART_ITEMS_ID),
        by_id::<Element>(document, CART_TOTAL_ID),
    ) else {
        log::debug!("cart: summary markup not found, skipping");
        return Ok(());
    };
    let window = dom::window()?;
    let clear_button = by_id::<HtmlElement>(document, CLEAR_CART_BTN_ID);

    let view = Rc::new(RefCell::new(CartView {
        cart: Cart::new(),
        locale: dom::locale(document),
        document: document.clone(),
        summary,
        rows: rows.clone(),
        total,
        clear_button: clear_button.clone(),
    }));

    let add_selector = format!(".{ADD_TO_CART_CLASS}");
    let v = Rc::clone(&view);
    listen(document, "click", move |e| {
        let Some(button) = dom::event_element(&e)
            .and_then(|target| dom::closest(&target, &add_selector))
            .and_then(|el| el.dyn_ref::<HtmlElement>().cloned())
        else {
            return;
        };
        e.prevent_default();
        v.borrow_mut().add_from_button(&button);
    })?;

    // Rows are rebuilt on every render; one delegated listener serves them all.
    let v = Rc::clone(&view);
    listen(&rows, "click", move |e| {
        if let Some(target) = dom::event_element(&e) {
            v.borrow_mut().on_row_click(&target);
        }
    })?;

    if let Some(button) = by_id::<Element>(document, CHECKOUT_BTN_ID) {
        let v = Rc::clone(&view);
        listen(&button, "click", move |_| v.borrow_mut().checkout(&window))?;
    }

    if let Some(button) = clear_button {
        let v = Rc::clone(&view);
        listen(&button, "click", move |_| v.borrow_mut().clear())?;
    }

    view.borrow().rerender();
    log::info!("cart: mounted ({:?} copy)", view.borrow().locale);
    Ok(())
}
