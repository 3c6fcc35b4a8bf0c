//! Mobile navigation drawer.

use std::cell::RefCell;
use std::rc::Rc;

use shop::menu::{MenuEvent, MenuState};
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, HtmlElement};

use crate::consts::{CLOSE_MENU_ID, HIDDEN_CLASS, MENU_ICON_ID, MENU_OPEN_CLASS, MOBILE_MENU_ID};
use crate::dom::{self, by_id, listen, query_all, report};

struct Drawer {
    state: MenuState,
    panel: Element,
    body: Option<HtmlElement>,
}

impl Drawer {
    fn handle(&mut self, event: MenuEvent) {
        if self.state.handle(event) {
            report("menu classes", self.apply());
        }
    }

    fn apply(&self) -> Result<(), JsValue> {
        let open = self.state.is_open();
        self.panel.class_list().toggle_with_force(HIDDEN_CLASS, !open)?;
        if let Some(body) = &self.body {
            body.class_list().toggle_with_force(MENU_OPEN_CLASS, open)?;
        }
        Ok(())
    }
}

/// Wire the hamburger icon, close button, drawer links and backdrop.
///
/// # Errors
///
/// Propagates a failed listener registration.
pub fn mount(document: &Document) -> Result<(), JsValue> {
    let (Some(icon), Some(panel), Some(close)) = (
        by_id::<Element>(document, MENU_ICON_ID),
        by_id::<Element>(document, MOBILE_MENU_ID),
        by_id::<Element>(document, CLOSE_MENU_ID),
    ) else {
        log::debug!("menu: markup not found, skipping");
        return Ok(());
    };

    let links = query_all(&panel, "a");
    let drawer = Rc::new(RefCell::new(Drawer { state: MenuState::default(), panel: panel.clone(), body: document.body() }));

    let d = Rc::clone(&drawer);
    listen(&icon, "click", move |e| {
        e.prevent_default();
        e.stop_propagation();
        d.borrow_mut().handle(MenuEvent::IconClicked);
    })?;

    let d = Rc::clone(&drawer);
    listen(&close, "click", move |e| {
        e.prevent_default();
        e.stop_propagation();
        d.borrow_mut().handle(MenuEvent::CloseClicked);
    })?;

    for link in &links {
        let d = Rc::clone(&drawer);
        listen(link, "click", move |e| {
            e.prevent_default();
            d.borrow_mut().handle(MenuEvent::LinkClicked);
        })?;
    }

    let backdrop = panel.clone();
    listen(&panel, "click", move |e| {
        if dom::targets_self(&e, &backdrop) {
            drawer.borrow_mut().handle(MenuEvent::BackdropClicked);
        }
    })?;

    log::info!("menu: mounted with {} links", links.len());
    Ok(())
}
