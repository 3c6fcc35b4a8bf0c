//! Browser module for the Stride storefront page.
//!
//! Compiled to WebAssembly and loaded by `index.html`. On start it installs
//! console logging, waits for the DOM and mounts each interactive component.
//! Components are independent: one whose markup is missing is skipped and the
//! rest still mount. All state lives in the `shop` crate's types, held here in
//! `Rc<RefCell<_>>` by the listener closures.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`menu`] | Mobile navigation drawer |
//! | [`video`] | Scroll shrink effect and visibility-driven playback |
//! | [`switcher`] | Size/color option selection and image swap |
//! | [`cart_view`] | Add-to-cart, cart summary rows, clear and checkout |
//! | [`carousel_view`] | "Why choose us" slider |
//! | [`nav`] | Smooth scroll for "Why Us" links |
//! | [`dom`] | Shared `web-sys` helpers |
//! | [`consts`] | Element ids, classes and attributes the page must carry |

pub mod carousel_view;
pub mod cart_view;
pub mod consts;
pub mod dom;
pub mod menu;
pub mod nav;
pub mod switcher;
pub mod video;

use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::Document;

/// Module entry point, run by the wasm-bindgen glue on instantiation.
///
/// # Errors
///
/// Fails when there is no window/document or the ready listener cannot be
/// attached.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        // Another logger is already installed; keep using it.
        log::debug!("console_log: {err}");
    }

    let document = dom::document()?;
    if dom::is_loading(&document.ready_state()) {
        let doc = document.clone();
        dom::listen(&document, "DOMContentLoaded", move |_| mount_all(&doc))?;
    } else {
        mount_all(&document);
    }
    Ok(())
}

/// Mount every component, logging (not propagating) individual failures.
pub fn mount_all(document: &Document) {
    let components: [(&str, fn(&Document) -> Result<(), JsValue>); 6] = [
        ("menu", menu::mount),
        ("video", video::mount),
        ("switcher", switcher::mount),
        ("cart", cart_view::mount),
        ("carousel", carousel_view::mount),
        ("nav", nav::mount),
    ];
    for (name, mount) in components {
        dom::report(&format!("mount {name}"), mount(document));
    }
    log::info!("storefront ready");
}
