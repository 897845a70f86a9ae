use wasm_bindgen::JsValue;
use web_sys::js_sys;
use yew::prelude::*;

use crate::config::MOBILE_BREAKPOINT;
use crate::utils::listeners::{ListenerSet, WindowListener};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout {
    Mobile,
    Desktop,
}

impl Layout {
    pub fn from_width(width: f64) -> Self {
        if width < MOBILE_BREAKPOINT {
            Layout::Mobile
        } else {
            Layout::Desktop
        }
    }

    /// The 3D scene also treats any touch-capable device as mobile so it
    /// gets touch controls and the calmer transform.
    pub fn for_scene(width: f64, touch_capable: bool) -> Self {
        if touch_capable {
            Layout::Mobile
        } else {
            Self::from_width(width)
        }
    }

    pub fn is_mobile(self) -> bool {
        self == Layout::Mobile
    }
}

/// Remembers the last classification seen by a resize handler.
#[derive(Debug, Default)]
pub struct LayoutTracker {
    last: Option<Layout>,
}

impl LayoutTracker {
    pub fn new(initial: Option<Layout>) -> Self {
        Self { last: initial }
    }

    /// Records `layout`; true when it differs from the previous one.
    pub fn observe(&mut self, layout: Layout) -> bool {
        let changed = self.last != Some(layout);
        self.last = Some(layout);
        changed
    }
}

pub fn window_size() -> Option<(f64, f64)> {
    let window = web_sys::window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some((width, height))
}

pub fn scroll_y() -> Option<f64> {
    web_sys::window()?.scroll_y().ok()
}

pub fn has_touch() -> bool {
    web_sys::window()
        .map(|window| js_sys::Reflect::has(&window, &JsValue::from_str("ontouchstart")).unwrap_or(false))
        .unwrap_or(false)
}

fn current_layout(touch_aware: bool) -> Option<Layout> {
    let (width, _) = window_size()?;
    Some(if touch_aware {
        Layout::for_scene(width, has_touch())
    } else {
        Layout::from_width(width)
    })
}

/// Tracks the mobile/desktop classification of the window.
///
/// Starts as desktop, is corrected on mount and on every `resize`. Only a
/// change of classification re-renders the caller.
#[hook]
pub fn use_layout(touch_aware: bool) -> Layout {
    let layout = use_state_eq(|| Layout::Desktop);
    {
        let layout = layout.clone();
        use_effect_with_deps(
            move |touch_aware: &bool| {
                let touch_aware = *touch_aware;
                let initial = current_layout(touch_aware);
                if let Some(current) = initial {
                    layout.set(current);
                }
                let mut tracker = LayoutTracker::new(initial);
                let mut listeners = ListenerSet::new();
                if let Some(listener) = WindowListener::new("resize", move |_| {
                    if let Some(current) = current_layout(touch_aware) {
                        if tracker.observe(current) {
                            log::debug!("Layout changed to {:?}", current);
                            layout.set(current);
                        }
                    }
                }) {
                    listeners.attach("resize", listener);
                }
                move || drop(listeners)
            },
            touch_aware,
        );
    }
    *layout
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_flips_exactly_at_768() {
        assert_eq!(Layout::from_width(767.0), Layout::Mobile);
        assert_eq!(Layout::from_width(767.9), Layout::Mobile);
        assert_eq!(Layout::from_width(768.0), Layout::Desktop);
        assert_eq!(Layout::from_width(1440.0), Layout::Desktop);
    }

    #[test]
    fn same_width_keeps_classification() {
        assert_eq!(Layout::from_width(768.0), Layout::from_width(768.0));
    }

    #[test]
    fn tracker_reports_each_flip_once() {
        let mut tracker = LayoutTracker::new(Some(Layout::Desktop));
        assert!(!tracker.observe(Layout::from_width(1024.0)));
        assert!(tracker.observe(Layout::from_width(767.0)));
        assert!(!tracker.observe(Layout::from_width(700.0)));
        assert!(!tracker.observe(Layout::from_width(500.0)));
        assert!(tracker.observe(Layout::from_width(768.0)));
        assert!(!tracker.observe(Layout::from_width(768.0)));
    }

    #[test]
    fn tracker_without_initial_reading_reports_first_layout() {
        let mut tracker = LayoutTracker::default();
        assert!(tracker.observe(Layout::Mobile));
        assert!(!tracker.observe(Layout::Mobile));
    }

    #[test]
    fn touch_forces_mobile_scene() {
        assert_eq!(Layout::for_scene(1920.0, true), Layout::Mobile);
        assert_eq!(Layout::for_scene(1920.0, false), Layout::Desktop);
        assert_eq!(Layout::for_scene(500.0, false), Layout::Mobile);
        assert!(Layout::for_scene(500.0, false).is_mobile());
    }
}
