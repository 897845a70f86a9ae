use wasm_bindgen::JsCast;
use web_sys::{MouseEvent, TouchEvent};
use yew::prelude::*;

use crate::config::{SCENE_TAG, SCENE_URL};
use crate::utils::listeners::{Detach, ListenerSet, WindowListener};
use crate::utils::parallax::{PointerOffset, MOUSE_SCALE, TOUCH_SCALE};
use crate::utils::scene::{apply_scene, ElementHost};
use crate::utils::viewport::{self, Layout};

fn offset_at(client_x: i32, client_y: i32, scale: f64) -> Option<PointerOffset> {
    let (width, height) = viewport::window_size()?;
    Some(PointerOffset::from_position(
        client_x as f64,
        client_y as f64,
        width,
        height,
        scale,
    ))
}

/// Window events the hero follows for a classification: scroll always,
/// mouse on desktop, single-finger touch on mobile.
pub fn window_events(layout: Layout) -> &'static [&'static str] {
    match layout {
        Layout::Desktop => &["scroll", "mousemove"],
        Layout::Mobile => &["scroll", "touchmove"],
    }
}

/// Builds the listener set for `layout`, one handle per event from `make`.
pub fn subscribe<H, F>(layout: Layout, mut make: F) -> ListenerSet<H>
where
    H: Detach,
    F: FnMut(&'static str) -> Option<H>,
{
    let mut listeners = ListenerSet::new();
    for &event in window_events(layout) {
        if let Some(handle) = make(event) {
            listeners.attach(event, handle);
        }
    }
    listeners
}

fn window_listener(
    event: &'static str,
    scroll_y: &UseStateHandle<f64>,
    pointer: &UseStateHandle<PointerOffset>,
) -> Option<WindowListener> {
    match event {
        "scroll" => {
            let scroll_y = scroll_y.clone();
            WindowListener::new(event, move |_| {
                if let Some(y) = viewport::scroll_y() {
                    scroll_y.set(y);
                }
            })
        }
        "touchmove" => {
            let pointer = pointer.clone();
            WindowListener::passive(event, move |event| {
                let Some(touch_event) = event.dyn_ref::<TouchEvent>() else {
                    return;
                };
                let touches = touch_event.touches();
                if touches.length() != 1 {
                    return;
                }
                if let Some(touch) = touches.get(0) {
                    if let Some(offset) = offset_at(touch.client_x(), touch.client_y(), TOUCH_SCALE) {
                        pointer.set(offset);
                    }
                }
            })
        }
        "mousemove" => {
            let pointer = pointer.clone();
            WindowListener::new(event, move |event| {
                if let Some(mouse_event) = event.dyn_ref::<MouseEvent>() {
                    if let Some(offset) =
                        offset_at(mouse_event.client_x(), mouse_event.client_y(), MOUSE_SCALE)
                    {
                        pointer.set(offset);
                    }
                }
            })
        }
        _ => None,
    }
}

/// Full-screen 3D scene that leans with scroll and pointer position.
#[function_component(SplineHero)]
pub fn spline_hero() -> Html {
    let layout = viewport::use_layout(true);
    let scroll_y = use_state_eq(|| 0.0_f64);
    let pointer = use_state_eq(PointerOffset::default);
    let viewer_ref = use_node_ref();

    // Runs again only when the classification flips; yew drops the previous
    // set before this one is built.
    {
        let scroll_y = scroll_y.clone();
        let pointer = pointer.clone();
        use_effect_with_deps(
            move |layout: &Layout| {
                let listeners = subscribe(*layout, |event| window_listener(event, &scroll_y, &pointer));
                log::debug!("Hero listening for {} window events", listeners.len());
                move || drop(listeners)
            },
            layout,
        );
    }

    // Push the current transform and control flags into the scene element.
    // A scene that never upgrades only costs us a warning.
    {
        let viewer_ref = viewer_ref.clone();
        use_effect_with_deps(
            move |(layout, scroll_y, pointer): &(Layout, f64, PointerOffset)| {
                let applied = ElementHost::from_node_ref(&viewer_ref)
                    .and_then(|host| apply_scene(&host, *layout, *scroll_y, *pointer));
                if let Err(err) = applied {
                    log::warn!("3D scene not updated: {}", err);
                }
                || ()
            },
            (layout, *scroll_y, *pointer),
        );
    }

    let hero_css = r#"
        .hero-scene {
            position: relative;
            width: 100%;
            height: 100vh;
            overflow: hidden;
        }
        .hero-scene .spline-viewer {
            display: block;
            width: 100%;
            height: 100%;
        }
        @media (max-width: 767px) {
            .hero-scene .spline-viewer { touch-action: pan-y; }
        }
    "#;

    html! {
        <div class="hero-scene">
            <style>{hero_css}</style>
            <@{SCENE_TAG} ref={viewer_ref} url={SCENE_URL} class="spline-viewer"></@>
        </div>
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::listeners::test_support::CountingHandle;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[test]
    fn desktop_follows_mouse_and_mobile_follows_touch() {
        assert_eq!(window_events(Layout::Desktop), ["scroll", "mousemove"]);
        assert_eq!(window_events(Layout::Mobile), ["scroll", "touchmove"]);
    }

    #[test]
    fn flipping_to_mobile_swaps_mouse_for_touch() {
        let live = Rc::new(Cell::new(0));
        let made = RefCell::new(Vec::new());
        let live_before_each = RefCell::new(Vec::new());
        let make = |event: &'static str| {
            made.borrow_mut().push(event);
            live_before_each.borrow_mut().push(live.get());
            Some(CountingHandle::new(&live))
        };

        let desktop = subscribe(Layout::Desktop, make);
        assert_eq!(live.get(), 2);
        assert_eq!(desktop.len(), 2);

        // same order as an effect re-run: old destructor first
        drop(desktop);
        assert_eq!(live.get(), 0);
        made.borrow_mut().clear();
        live_before_each.borrow_mut().clear();

        let mut mobile = subscribe(Layout::Mobile, make);
        assert_eq!(live.get(), 2);
        assert_eq!(*made.borrow(), ["scroll", "touchmove"]);
        assert_eq!(*live_before_each.borrow(), [0, 1]);
        assert!(!mobile.detach("mousemove"));
        assert!(mobile.detach("touchmove"));
        assert_eq!(live.get(), 1);

        drop(mobile);
        assert_eq!(live.get(), 0);
    }

    #[test]
    fn events_that_fail_to_register_are_skipped() {
        let live = Rc::new(Cell::new(0));
        let set = subscribe(Layout::Desktop, |event| {
            (event == "scroll").then(|| CountingHandle::new(&live))
        });
        assert_eq!(set.len(), 1);
        assert_eq!(live.get(), 1);
    }
}
