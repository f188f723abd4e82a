// src/dom.rs — browser side of the navigator

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo::events::EventListener;
use gloo::render::{request_animation_frame, AnimationFrame};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::nav::{Section, SectionRect, Viewport};

pub struct DomViewport {
    window: Window,
    document: Document,
}

impl DomViewport {
    pub fn new() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self { window, document })
    }
}

impl Viewport for DomViewport {
    fn scroll_offset(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn section_rect(&self, section: Section) -> Option<SectionRect> {
        let el = self.document.get_element_by_id(section.id())?;
        let rect = el.get_bounding_client_rect();
        Some(SectionRect {
            top: rect.top(),
            bottom: rect.bottom(),
        })
    }

    fn section_offset_top(&self, section: Section) -> Option<f64> {
        let el = self
            .document
            .get_element_by_id(section.id())?
            .dyn_into::<HtmlElement>()
            .ok()?;
        Some(f64::from(el.offset_top()))
    }

    fn smooth_scroll_to(&self, top: f64) {
        let opts = ScrollToOptions::new();
        opts.set_top(top);
        opts.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&opts);
    }
}

/* -----------------------------
   Scroll subscription
----------------------------- */

#[derive(Default)]
struct FrameSlot {
    scheduled: Cell<bool>,
    // a fired frame stays here until the next one replaces it; dropping it
    // from inside its own callback would free the running closure
    frame: RefCell<Option<AnimationFrame>>,
}

/// Live `scroll` subscription on `window`. Bursts of scroll events are
/// coalesced into one `on_frame` call per animation frame. Dropping the
/// handle removes the listener and cancels any pending frame.
pub struct ScrollWatch {
    _listener: EventListener,
    slot: Rc<FrameSlot>,
}

impl Drop for ScrollWatch {
    fn drop(&mut self) {
        self.slot.frame.borrow_mut().take();
    }
}

pub fn watch_scroll<F>(on_frame: F) -> Option<ScrollWatch>
where
    F: Fn() + 'static,
{
    let window = web_sys::window()?;
    let slot = Rc::new(FrameSlot::default());
    let on_frame = Rc::new(on_frame);

    let listener = {
        let slot = slot.clone();
        EventListener::new(&window, "scroll", move |_| {
            if slot.scheduled.replace(true) {
                return;
            }
            let fired = slot.clone();
            let on_frame = on_frame.clone();
            let frame = request_animation_frame(move |_ts| {
                fired.scheduled.set(false);
                on_frame();
            });
            *slot.frame.borrow_mut() = Some(frame);
        })
    };

    Some(ScrollWatch {
        _listener: listener,
        slot,
    })
}

/// Placeholder acknowledgement for the contact form; nothing is sent.
pub fn acknowledge(message: &str) {
    gloo::dialogs::alert(message);
}

pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}
