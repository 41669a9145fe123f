//! Scroll-linked presentation bindings.
//!
//! Sections hand their root node to one of the hooks below on mount. Each hook
//! acquires browser observers or listeners and returns a guard from its effect;
//! dropping the guard on unmount releases everything it registered. The actual
//! tweening is left to CSS transitions driven by the `is-revealed` class and the
//! `--scrub` custom property.

use gloo_timers::callback::Timeout;
use log::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    js_sys, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, Window,
};
use yew::prelude::*;

use crate::config;

pub const REVEALED_CLASS: &str = "is-revealed";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealAction {
    Play,
    Reverse,
}

/// Decides the entrance timeline state from where the section top sits.
///
/// `start` is the fraction of the viewport height the top has to cross, so
/// `0.7` reads as "top 70%". Above the line the timeline plays; back below it
/// reverses. Leaving through the top of the viewport keeps it played.
pub fn reveal_action(section_top: f64, viewport_height: f64, start: f64) -> RevealAction {
    if section_top <= viewport_height * start {
        RevealAction::Play
    } else {
        RevealAction::Reverse
    }
}

/// Shrinks the observer root so its bottom edge is the trigger line.
fn root_margin(start: f64) -> String {
    let cut = ((1.0 - start) * 100.0).clamp(0.0, 100.0);
    format!("0px 0px -{:.0}% 0px", cut)
}

/// Inline style placing an element on the entrance timeline.
pub fn reveal_delay(base: f64, step: f64, index: usize) -> String {
    format!("--reveal-delay: {:.2}s", base + step * index as f64)
}

fn viewport_height(window: &Window) -> f64 {
    window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}

fn apply(section: &Element, action: RevealAction) {
    let classes = section.class_list();
    let result = match action {
        RevealAction::Play => classes.add_1(REVEALED_CLASS),
        RevealAction::Reverse => classes.remove_1(REVEALED_CLASS),
    };
    if let Err(err) = result {
        warn!("Failed to {:?} reveal: {:?}", action, err);
    }
}

pub struct RevealBinding {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl RevealBinding {
    pub fn attach(section: &Element, start: f64) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let target = section.clone();

        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, _: IntersectionObserver| {
                let height = viewport_height(&window);
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    let top = entry.bounding_client_rect().top();
                    apply(&target, reveal_action(top, height, start));
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_root_margin(&root_margin(start));
        init.set_threshold(&JsValue::from_f64(0.0));

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        observer.observe(section);
        debug!("Reveal bound at top {:.0}%", start * 100.0);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for RevealBinding {
    fn drop(&mut self) {
        self.observer.disconnect();
        debug!("Reveal released");
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Top,
    Bottom,
}

/// An element edge meeting a viewport edge, optionally pushed by `offset` pixels.
/// `ScrollPoint::new(Bottom, Top).offset(150.0)` reads as "bottom+=150 top".
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollPoint {
    pub element: Anchor,
    pub viewport: Anchor,
    pub offset: f64,
}

impl ScrollPoint {
    pub const fn new(element: Anchor, viewport: Anchor) -> Self {
        Self {
            element,
            viewport,
            offset: 0.0,
        }
    }

    pub const fn offset(self, offset: f64) -> Self {
        Self { offset, ..self }
    }

    // Distance still to scroll before this point is reached; shrinks 1:1 with scrolling.
    fn remaining(&self, top: f64, height: f64, viewport_height: f64) -> f64 {
        let edge = match self.element {
            Anchor::Top => top,
            Anchor::Bottom => top + height,
        };
        let line = match self.viewport {
            Anchor::Top => 0.0,
            Anchor::Bottom => viewport_height,
        };
        edge + self.offset - line
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrubRange {
    pub start: ScrollPoint,
    pub end: ScrollPoint,
}

impl ScrubRange {
    /// Progress through the range for a trigger at `top` with `height`, clamped to `[0, 1]`.
    pub fn progress(&self, top: f64, height: f64, viewport_height: f64) -> f64 {
        let start = self.start.remaining(top, height, viewport_height);
        let end = self.end.remaining(top, height, viewport_height);
        let travel = end - start;
        if travel <= 0.0 {
            return if start <= 0.0 { 1.0 } else { 0.0 };
        }
        (-start / travel).clamp(0.0, 1.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shift {
    /// Percent of the element's own height.
    Percent(f64),
    Pixels(f64),
}

pub fn scrub_value(shift: Shift, progress: f64) -> String {
    match shift {
        Shift::Percent(to) => format!("{:.3}%", to * progress),
        Shift::Pixels(to) => format!("{:.3}px", to * progress),
    }
}

/// Continuous motion for every element under the section matching `selector`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scrub {
    pub selector: &'static str,
    pub range: ScrubRange,
    pub shift: Shift,
}

/// Last progress written to a target, so unchanged values are not rewritten.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct ScrubMemo {
    last: Option<f64>,
}

impl ScrubMemo {
    /// True when `progress` differs from the last write and should be applied.
    fn update(&mut self, progress: f64) -> bool {
        if self.last == Some(progress) {
            return false;
        }
        self.last = Some(progress);
        true
    }

    fn forget(&mut self) {
        self.last = None;
    }
}

pub struct ScrubBinding {
    window: Window,
    listener: Closure<dyn FnMut()>,
}

impl ScrubBinding {
    const EVENTS: [&'static str; 2] = ["scroll", "resize"];

    pub fn attach(section: &Element, scrubs: &[Scrub]) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;

        let mut targets = Vec::new();
        for scrub in scrubs {
            let nodes = section.query_selector_all(scrub.selector)?;
            for i in 0..nodes.length() {
                if let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) {
                    targets.push((el, *scrub, ScrubMemo::default()));
                }
            }
        }

        let trigger = section.clone();
        let win = window.clone();
        let listener = Closure::<dyn FnMut()>::new(move || {
            let rect = trigger.get_bounding_client_rect();
            let height = viewport_height(&win);
            for (el, scrub, memo) in targets.iter_mut() {
                let progress = scrub.range.progress(rect.top(), rect.height(), height);
                if !memo.update(progress) {
                    continue;
                }
                if let Err(err) = el
                    .style()
                    .set_property("--scrub", &scrub_value(scrub.shift, progress))
                {
                    memo.forget();
                    warn!("Failed to write scrub for {}: {:?}", scrub.selector, err);
                }
            }
        });

        for event in Self::EVENTS {
            window.add_event_listener_with_callback(event, listener.as_ref().unchecked_ref())?;
        }

        // Initial position, in case the page loads scrolled
        listener
            .as_ref()
            .unchecked_ref::<js_sys::Function>()
            .call0(&JsValue::NULL)?;

        debug!("Scrub bound for {} selector(s)", scrubs.len());
        Ok(Self { window, listener })
    }
}

impl Drop for ScrubBinding {
    fn drop(&mut self) {
        for event in Self::EVENTS {
            if let Err(err) = self
                .window
                .remove_event_listener_with_callback(event, self.listener.as_ref().unchecked_ref())
            {
                debug!("Failed to remove {} listener: {:?}", event, err);
            }
        }
        debug!("Scrub released");
    }
}

/// Plays the section's entrance when its top crosses `start` of the viewport.
#[hook]
pub fn use_scroll_reveal(section: NodeRef, start: f64) {
    use_effect_with_deps(
        move |section: &NodeRef| {
            let binding = section
                .cast::<Element>()
                .and_then(|el| match RevealBinding::attach(&el, start) {
                    Ok(binding) => Some(binding),
                    Err(err) => {
                        warn!("Scroll reveal unavailable, showing section as is: {:?}", err);
                        apply(&el, RevealAction::Play);
                        None
                    }
                });
            move || drop(binding)
        },
        section,
    );
}

#[hook]
pub fn use_scrub(section: NodeRef, scrubs: &'static [Scrub]) {
    use_effect_with_deps(
        move |section: &NodeRef| {
            let binding = section
                .cast::<Element>()
                .and_then(|el| match ScrubBinding::attach(&el, scrubs) {
                    Ok(binding) => Some(binding),
                    Err(err) => {
                        warn!("Scrub unavailable: {:?}", err);
                        None
                    }
                });
            move || drop(binding)
        },
        section,
    );
}

/// One-shot entrance shortly after mount, independent of scrolling.
#[hook]
pub fn use_intro(section: NodeRef) {
    use_effect_with_deps(
        move |section: &NodeRef| {
            // Dropping a pending Timeout cancels it
            let timeout = section.cast::<Element>().map(|el| {
                Timeout::new(config::INTRO_DELAY_MS, move || {
                    apply(&el, RevealAction::Play);
                })
            });
            move || drop(timeout)
        },
        section,
    );
}

/// Base rules for every `[data-reveal]` element; sections tune delays inline.
pub const REVEAL_CSS: &str = r#"
    [data-reveal] {
        opacity: 0;
        transform: translate3d(0, var(--reveal-y, 40px), 0);
        transition:
            opacity var(--reveal-duration, 0.8s) cubic-bezier(0.215, 0.61, 0.355, 1),
            transform var(--reveal-duration, 0.8s) cubic-bezier(0.215, 0.61, 0.355, 1);
        transition-delay: var(--reveal-delay, 0s);
    }

    [data-reveal="right"] {
        transform: translate3d(40px, 0, 0);
    }

    [data-reveal="pop"] {
        transform: scale(0);
        transition-timing-function: cubic-bezier(0.34, 1.56, 0.64, 1);
    }

    .is-revealed [data-reveal] {
        opacity: 1;
        transform: none;
    }

    [data-scrub] {
        transform: translate3d(0, var(--scrub, 0), 0);
        will-change: transform;
    }

    @media (prefers-reduced-motion: reduce) {
        [data-reveal] {
            opacity: 1;
            transform: none;
            transition: none;
        }
        [data-scrub] {
            transform: none;
        }
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    const HERO: ScrubRange = ScrubRange {
        start: ScrollPoint::new(Anchor::Top, Anchor::Top),
        end: ScrollPoint::new(Anchor::Bottom, Anchor::Top).offset(150.0),
    };

    const THROUGH_VIEWPORT: ScrubRange = ScrubRange {
        start: ScrollPoint::new(Anchor::Top, Anchor::Bottom),
        end: ScrollPoint::new(Anchor::Bottom, Anchor::Top),
    };

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn reveal_plays_above_line_and_reverses_below() {
        assert_eq!(reveal_action(500.0, 1000.0, 0.7), RevealAction::Play);
        assert_eq!(reveal_action(700.0, 1000.0, 0.7), RevealAction::Play);
        assert_eq!(reveal_action(701.0, 1000.0, 0.7), RevealAction::Reverse);
    }

    #[test]
    fn reveal_holds_after_leaving_through_top() {
        assert_eq!(reveal_action(-2400.0, 1000.0, 0.8), RevealAction::Play);
    }

    #[test]
    fn root_margin_cuts_below_the_line() {
        assert_eq!(root_margin(0.7), "0px 0px -30% 0px");
        assert_eq!(root_margin(0.8), "0px 0px -20% 0px");
        assert_eq!(root_margin(1.5), "0px 0px -0% 0px");
    }

    #[test]
    fn hero_progress_runs_from_top_to_extended_bottom() {
        // 800px tall hero, 900px viewport
        assert!(close(HERO.progress(0.0, 800.0, 900.0), 0.0));
        assert!(close(HERO.progress(-475.0, 800.0, 900.0), 0.5));
        assert!(close(HERO.progress(-950.0, 800.0, 900.0), 1.0));
    }

    #[test]
    fn progress_is_clamped_outside_the_range() {
        assert_eq!(HERO.progress(300.0, 800.0, 900.0), 0.0);
        assert_eq!(HERO.progress(-5000.0, 800.0, 900.0), 1.0);
    }

    #[test]
    fn progress_across_whole_viewport() {
        // enters at the bottom, leaves at the top: travel = height + viewport
        assert!(close(THROUGH_VIEWPORT.progress(1000.0, 600.0, 1000.0), 0.0));
        assert!(close(THROUGH_VIEWPORT.progress(200.0, 600.0, 1000.0), 0.5));
        assert!(close(THROUGH_VIEWPORT.progress(-600.0, 600.0, 1000.0), 1.0));
    }

    #[test]
    fn degenerate_range_snaps() {
        let point = ScrollPoint::new(Anchor::Top, Anchor::Top);
        let range = ScrubRange { start: point, end: point };
        assert_eq!(range.progress(10.0, 100.0, 500.0), 0.0);
        assert_eq!(range.progress(-10.0, 100.0, 500.0), 1.0);
    }

    #[test]
    fn scrub_values_carry_units() {
        assert_eq!(scrub_value(Shift::Percent(-8.0), 0.5), "-4.000%");
        assert_eq!(scrub_value(Shift::Pixels(-10.0), 1.0), "-10.000px");
    }

    #[test]
    fn scrub_skips_unchanged_progress() {
        let mut memo = ScrubMemo::default();
        assert!(memo.update(0.0));
        // Parked before the range: clamped progress stays at 0
        assert!(!memo.update(0.0));
        assert!(memo.update(0.25));
        assert!(!memo.update(0.25));
        assert!(memo.update(1.0));
    }

    #[test]
    fn failed_scrub_write_is_retried() {
        let mut memo = ScrubMemo::default();
        assert!(memo.update(0.5));
        memo.forget();
        assert!(memo.update(0.5));
    }

    #[test]
    fn stagger_delays() {
        assert_eq!(reveal_delay(0.4, 0.12, 0), "--reveal-delay: 0.40s");
        assert_eq!(reveal_delay(0.4, 0.12, 2), "--reveal-delay: 0.64s");
    }
}
