//! "Why choose us" carousel: buttons, dots, swipe, resize and auto-advance.

#[cfg(test)]
#[path = "carousel_view_test.rs"]
mod carousel_view_test;

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use shop::carousel::{Carousel, Swipe, SwipeTracker, items_per_view};
use shop::consts::AUTO_ADVANCE_MS;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, HtmlButtonElement, HtmlElement, TouchEvent, Window};

use crate::consts::{
    DOT_ACTIVE_CLASSES, DOT_INACTIVE_CLASSES, DOTS_CONTAINER_ID, NEXT_SERVICE_ID, PREV_SERVICE_ID, SERVICES_TRACK_ID,
    WHY_CHOOSE_US_ID,
};
use crate::dom::{self, by_id, listen, report};

/// Index of a dot button within the dots container.
const DATA_DOT: &str = "data-dot";

/// Class list for dot `dot` when `active` is the highlighted one.
#[must_use]
pub fn dot_classes(dot: usize, active: usize) -> &'static str {
    if dot == active { DOT_ACTIVE_CLASSES } else { DOT_INACTIVE_CLASSES }
}

struct Slider {
    carousel: Carousel,
    swipe: SwipeTracker,
    document: Document,
    track: HtmlElement,
    prev: HtmlButtonElement,
    next: HtmlButtonElement,
    dots: Element,
}

impl Slider {
    /// Run a transition and repaint if the index moved.
    fn step(&mut self, transition: impl FnOnce(&mut Carousel) -> bool) {
        if transition(&mut self.carousel) {
            report("carousel render", self.render());
        }
    }

    fn resize(&mut self, per_view: usize) {
        if self.carousel.resize(per_view) {
            log::debug!("carousel: {per_view} per view");
            report("carousel dots", self.build_dots());
            report("carousel render", self.render());
        }
    }

    fn render(&self) -> Result<(), JsValue> {
        self.track.style().set_property("transform", &self.carousel.css_transform())?;
        self.prev.set_disabled(self.carousel.at_start());
        self.next.set_disabled(self.carousel.at_end());

        let dots = self.dots.children();
        let active = self.carousel.active_dot();
        for (i, dot) in (0..dots.length()).filter_map(|i| dots.item(i)).enumerate() {
            dot.set_class_name(dot_classes(i, active));
        }
        Ok(())
    }

    fn build_dots(&self) -> Result<(), JsValue> {
        self.dots.set_text_content(None);
        for i in 0..self.carousel.dot_count() {
            let dot = self.document.create_element("button")?;
            dot.set_attribute("type", "button")?;
            dot.set_attribute(DATA_DOT, &i.to_string())?;
            self.dots.append_child(&dot)?;
        }
        Ok(())
    }

    fn on_dot_click(&mut self, target: &Element) {
        let Some(raw) = target.get_attribute(DATA_DOT) else {
            return;
        };
        match raw.parse::<usize>() {
            Ok(dot) => {
                let index = self.carousel.dot_target(dot);
                self.step(|c| c.go_to(index));
            }
            Err(err) => log::warn!("carousel: bad dot index {raw:?}: {err}"),
        }
    }
}

/// The single auto-advance interval. Dropping the handle cancels it.
struct AutoAdvance {
    slider: Rc<RefCell<Slider>>,
    timer: RefCell<Option<Interval>>,
}

impl AutoAdvance {
    /// Start ticking unless already running.
    fn start(&self) {
        let mut timer = self.timer.borrow_mut();
        if timer.is_some() {
            return;
        }
        let slider = Rc::clone(&self.slider);
        *timer = Some(Interval::new(AUTO_ADVANCE_MS, move || {
            slider.borrow_mut().step(Carousel::auto_advance);
        }));
    }

    fn stop(&self) {
        if self.timer.borrow_mut().take().is_some() {
            log::debug!("carousel: auto-advance paused");
        }
    }
}

fn viewport_per_view(window: &Window) -> Result<usize, JsValue> {
    let width = window.inner_width()?.as_f64().unwrap_or(0.0);
    Ok(items_per_view(width))
}

fn touch_x(event: &Event, changed: bool) -> Option<f64> {
    let touch_event = event.dyn_ref::<TouchEvent>()?;
    let list = if changed { touch_event.changed_touches() } else { touch_event.touches() };
    list.item(0).map(|touch| f64::from(touch.client_x()))
}

/// Wire the carousel. Skipped when the track, buttons or dots container is
/// missing.
///
/// # Errors
///
/// Propagates a failed listener registration or viewport read.
pub fn mount(document: &Document) -> Result<(), JsValue> {
    let (Some(track), Some(prev), Some(next), Some(dots)) = (
        by_id::<HtmlElement>(document, SERVICES_TRACK_ID),
        by_id::<HtmlButtonElement>(document, PREV_SERVICE_ID),
        by_id::<HtmlButtonElement>(document, NEXT_SERVICE_ID),
        by_id::<Element>(document, DOTS_CONTAINER_ID),
    ) else {
        log::debug!("carousel: markup not found, skipping");
        return Ok(());
    };
    let window = dom::window()?;

    let total = track.child_element_count() as usize;
    let carousel = Carousel::new(total, viewport_per_view(&window)?);
    let slider = Rc::new(RefCell::new(Slider {
        carousel,
        swipe: SwipeTracker::default(),
        document: document.clone(),
        track: track.clone(),
        prev: prev.clone(),
        next: next.clone(),
        dots: dots.clone(),
    }));
    let auto = Rc::new(AutoAdvance { slider: Rc::clone(&slider), timer: RefCell::new(None) });

    let s = Rc::clone(&slider);
    listen(&prev, "click", move |_| s.borrow_mut().step(Carousel::prev_slide))?;

    let s = Rc::clone(&slider);
    listen(&next, "click", move |_| s.borrow_mut().step(Carousel::next_slide))?;

    let s = Rc::clone(&slider);
    listen(&dots, "click", move |e| {
        if let Some(target) = dom::event_element(&e) {
            s.borrow_mut().on_dot_click(&target);
        }
    })?;

    let (s, w) = (Rc::clone(&slider), window.clone());
    listen(&window, "resize", move |_| match viewport_per_view(&w) {
        Ok(per_view) => s.borrow_mut().resize(per_view),
        Err(err) => log::warn!("carousel: viewport width: {err:?}"),
    })?;

    mount_touch(&track, &slider, &auto)?;
    mount_pause(document, &auto)?;

    {
        let s = slider.borrow();
        s.build_dots()?;
        s.render()?;
    }
    auto.start();

    log::info!("carousel: mounted with {total} slides");
    Ok(())
}

fn mount_touch(track: &HtmlElement, slider: &Rc<RefCell<Slider>>, auto: &Rc<AutoAdvance>) -> Result<(), JsValue> {
    let (s, a) = (Rc::clone(slider), Rc::clone(auto));
    listen(track, "touchstart", move |e| {
        if let Some(x) = touch_x(&e, false) {
            s.borrow_mut().swipe.begin(x);
        }
        a.stop();
    })?;

    let s = Rc::clone(slider);
    listen(track, "touchmove", move |e| {
        if s.borrow().swipe.is_dragging() {
            e.prevent_default();
        }
    })?;

    let (s, a) = (Rc::clone(slider), Rc::clone(auto));
    listen(track, "touchend", move |e| {
        {
            let mut slider = s.borrow_mut();
            let swipe = match touch_x(&e, true) {
                Some(x) => slider.swipe.end(x),
                None => {
                    slider.swipe.cancel();
                    None
                }
            };
            match swipe {
                Some(Swipe::Next) => slider.step(Carousel::next_slide),
                Some(Swipe::Prev) => slider.step(Carousel::prev_slide),
                None => {}
            }
        }
        a.start();
    })?;
    Ok(())
}

/// Pause while the pointer is over the section or the tab is hidden.
fn mount_pause(document: &Document, auto: &Rc<AutoAdvance>) -> Result<(), JsValue> {
    if let Some(section) = by_id::<Element>(document, WHY_CHOOSE_US_ID) {
        let a = Rc::clone(auto);
        listen(&section, "mouseenter", move |_| a.stop())?;
        let a = Rc::clone(auto);
        listen(&section, "mouseleave", move |_| a.start())?;
    }

    let (a, d) = (Rc::clone(auto), document.clone());
    listen(document, "visibilitychange", move |_| {
        if d.hidden() {
            a.stop();
        } else {
            a.start();
        }
    })?;
    Ok(())
}
