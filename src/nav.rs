// src/nav.rs — scroll-synced section tracking + in-page navigation
//
// Everything here is host-agnostic: the browser side lives in `dom.rs` and
// plugs in through the `Viewport` trait.

use std::rc::Rc;

use serde::Deserialize;
use yew::prelude::*;

/// Named regions of the page, in scroll traversal order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Home,
    About,
    Menu,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::About,
        Section::Menu,
        Section::Contact,
    ];

    /// DOM id of the `<section>` backing this region.
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Menu => "menu",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> String {
        capitalize(self.id())
    }
}

impl Default for Section {
    fn default() -> Self {
        Section::ALL[0]
    }
}

fn capitalize(s: &str) -> String {
    let mut ch = s.chars();
    match ch.next() {
        None => String::new(),
        Some(f) => f.to_uppercase().collect::<String>() + ch.as_str(),
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavConfig {
    /// Line below the viewport top a section must straddle to count as in view.
    pub reference_line: f64,
    /// Gap left above a section's top after navigate-to (clears the fixed nav bar).
    pub anchor_offset: f64,
    /// Scroll offset past which the nav bar turns opaque.
    pub scrolled_threshold: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            reference_line: 100.0,
            anchor_offset: 80.0,
            scrolled_threshold: 50.0,
        }
    }
}

/// Viewport-relative vertical extent of a section.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionRect {
    pub top: f64,
    pub bottom: f64,
}

impl SectionRect {
    pub fn straddles(&self, line: f64) -> bool {
        self.top <= line && self.bottom >= line
    }
}

/// What the navigator needs from the hosting document.
///
/// Lookups return `None` when the section is not (yet) rendered; callers
/// treat that as "skip this section" and never as an error.
pub trait Viewport {
    fn scroll_offset(&self) -> f64;

    fn section_rect(&self, section: Section) -> Option<SectionRect>;

    /// Offset of the section's top edge from the top of the document.
    fn section_offset_top(&self, section: Section) -> Option<f64>;

    /// Fire-and-forget; the animation is never awaited.
    fn smooth_scroll_to(&self, top: f64);
}

pub fn is_scrolled(offset: f64, config: &NavConfig) -> bool {
    offset > config.scrolled_threshold
}

/// First section (in traversal order) straddling the reference line.
pub fn section_in_view<V: Viewport + ?Sized>(viewport: &V, config: &NavConfig) -> Option<Section> {
    Section::ALL.into_iter().find(|&s| {
        viewport
            .section_rect(s)
            .is_some_and(|r| r.straddles(config.reference_line))
    })
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollSample {
    pub scrolled: bool,
    pub in_view: Option<Section>,
}

impl ScrollSample {
    pub fn take<V: Viewport + ?Sized>(viewport: &V, config: &NavConfig) -> Self {
        Self {
            scrolled: is_scrolled(viewport.scroll_offset(), config),
            in_view: section_in_view(viewport, config),
        }
    }
}

/// Starts a smooth scroll toward `section` and returns the state change to
/// apply right away. `None` when the section is not in the document.
pub fn navigate_to<V: Viewport + ?Sized>(
    viewport: &V,
    section: Section,
    config: &NavConfig,
) -> Option<NavAction> {
    let top = viewport.section_offset_top(section)?;
    viewport.smooth_scroll_to(top - config.anchor_offset);
    Some(NavAction::Navigated(section))
}

/* -----------------------------
   Reducer
----------------------------- */

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NavState {
    pub active: Section,
    pub menu_open: bool,
    pub scrolled: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NavAction {
    Scrolled(ScrollSample),
    Navigated(Section),
    ToggleMenu,
}

impl NavState {
    pub fn apply(self, action: NavAction) -> Self {
        match action {
            NavAction::Scrolled(sample) => Self {
                active: sample.in_view.unwrap_or(self.active),
                scrolled: sample.scrolled,
                ..self
            },
            NavAction::Navigated(section) => Self {
                active: section,
                menu_open: false,
                ..self
            },
            NavAction::ToggleMenu => Self {
                menu_open: !self.menu_open,
                ..self
            },
        }
    }
}

impl Reducible for NavState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.apply(action);
        // same Rc => no re-render for scroll ticks that change nothing
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}
