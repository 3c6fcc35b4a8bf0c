//! Hero video: scroll-driven shrink, visibility-driven playback and
//! click-to-recenter.

use shop::consts::VIDEO_VISIBILITY_THRESHOLD;
use shop::scroll::{Playback, ScrollGeometry, ScrollUpdate, VideoTransform};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{
    CssStyleDeclaration, Document, HtmlElement, HtmlVideoElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, ScrollLogicalPosition, Window,
};

use crate::consts::{VIDEO_CONTAINER_ID, VIDEO_SECTION_ID};
use crate::dom::{self, by_id, listen, report};

/// Wire the scroll effect, the playback observer and the click handler.
///
/// # Errors
///
/// Propagates a failed listener or observer registration.
pub fn mount(document: &Document) -> Result<(), JsValue> {
    let (Some(container), Some(section)) = (
        by_id::<HtmlElement>(document, VIDEO_CONTAINER_ID),
        by_id::<HtmlElement>(document, VIDEO_SECTION_ID),
    ) else {
        log::debug!("video: markup not found, skipping");
        return Ok(());
    };
    let window = dom::window()?;

    let (w, s, c) = (window.clone(), section.clone(), container.clone());
    listen(&window, "scroll", move |_| {
        report("video scroll effect", on_scroll(&w, &s, &c));
    })?;

    observe_playback(&section)?;

    let target = section.clone();
    listen(&container, "click", move |_| {
        dom::scroll_into_view(&target, Some(ScrollLogicalPosition::Start));
    })?;

    log::info!("video: mounted");
    Ok(())
}

fn on_scroll(window: &Window, section: &HtmlElement, container: &HtmlElement) -> Result<(), JsValue> {
    let geometry = ScrollGeometry {
        scroll_y: window.scroll_y()?,
        viewport_height: window.inner_height()?.as_f64().unwrap_or(0.0),
        section_top: f64::from(section.offset_top()),
        section_height: f64::from(section.offset_height()),
    };

    let style = container.style();
    match ScrollUpdate::for_geometry(&geometry) {
        ScrollUpdate::Apply(transform) => {
            write_transform(&style, &transform)?;
            style.set_property("transform-origin", "center center")?;
            style.set_property("overflow", "hidden")?;
        }
        ScrollUpdate::Reset => write_transform(&style, &VideoTransform::IDENTITY)?,
        ScrollUpdate::Unchanged => {}
    }
    Ok(())
}

fn write_transform(style: &CssStyleDeclaration, transform: &VideoTransform) -> Result<(), JsValue> {
    style.set_property("transform", &transform.css_transform())?;
    style.set_property("opacity", &transform.css_opacity())?;
    style.set_property("border-radius", &transform.css_radius())?;
    Ok(())
}

fn observe_playback(section: &HtmlElement) -> Result<(), JsValue> {
    let callback = Closure::wrap(Box::new(|entries: js_sys::Array, _observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Some(entry) = entry.dyn_ref::<IntersectionObserverEntry>() else {
                continue;
            };
            let Some(video) = dom::query(&entry.target(), "video").and_then(|el| el.dyn_ref::<HtmlVideoElement>().cloned())
            else {
                continue;
            };
            match Playback::for_visibility(entry.is_intersecting()) {
                Playback::Play => play(&video),
                Playback::Pause => report("pause video", video.pause()),
            }
        }
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(VIDEO_VISIBILITY_THRESHOLD));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    observer.observe(section);
    callback.forget();
    Ok(())
}

/// Start playback; a rejected play promise (autoplay policy) is only logged.
fn play(video: &HtmlVideoElement) {
    match video.play() {
        Ok(promise) => spawn_local(async move {
            if let Err(err) = JsFuture::from(promise).await {
                log::warn!("video play failed: {err:?}");
            }
        }),
        Err(err) => log::warn!("video play failed: {err:?}"),
    }
}
