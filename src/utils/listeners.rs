use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::AddEventListenerOptions;

/// Something that can be unhooked from its event source.
pub trait Detach {
    fn detach(&mut self);
}

/// Mount-scoped set of listeners keyed by event name.
///
/// At most one listener per event name is live: attaching a name that is
/// already present detaches the previous handle first. Dropping the set
/// detaches everything it still owns, so a component that keeps the set in
/// its effect destructor cannot leak listeners across unmounts.
pub struct ListenerSet<H: Detach> {
    active: Vec<(&'static str, H)>,
}

impl<H: Detach> ListenerSet<H> {
    pub fn new() -> Self {
        Self { active: Vec::new() }
    }

    pub fn attach(&mut self, event: &'static str, handle: H) {
        self.detach(event);
        self.active.push((event, handle));
    }

    /// Returns true when a listener for `event` was removed.
    pub fn detach(&mut self, event: &str) -> bool {
        match self.active.iter().position(|(name, _)| *name == event) {
            Some(index) => {
                let (_, mut handle) = self.active.remove(index);
                handle.detach();
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn clear(&mut self) {
        for (_, mut handle) in self.active.drain(..) {
            handle.detach();
        }
    }
}

impl<H: Detach> Default for ListenerSet<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: Detach> Drop for ListenerSet<H> {
    fn drop(&mut self) {
        self.clear();
    }
}

/// A callback registered on `window`, removed again on detach or drop.
pub struct WindowListener {
    event: &'static str,
    callback: Closure<dyn FnMut(web_sys::Event)>,
    attached: bool,
}

impl WindowListener {
    pub fn new<F>(event: &'static str, handler: F) -> Option<Self>
    where
        F: FnMut(web_sys::Event) + 'static,
    {
        Self::register(event, handler, false)
    }

    /// Registers with `{ passive: true }`, for touch handlers that never
    /// call `prevent_default`.
    pub fn passive<F>(event: &'static str, handler: F) -> Option<Self>
    where
        F: FnMut(web_sys::Event) + 'static,
    {
        Self::register(event, handler, true)
    }

    fn register<F>(event: &'static str, handler: F, passive: bool) -> Option<Self>
    where
        F: FnMut(web_sys::Event) + 'static,
    {
        let window = web_sys::window()?;
        let callback = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
        let result = if passive {
            let options = AddEventListenerOptions::new();
            options.set_passive(true);
            window.add_event_listener_with_callback_and_add_event_listener_options(
                event,
                callback.as_ref().unchecked_ref(),
                &options,
            )
        } else {
            window.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
        };
        if let Err(err) = result {
            log::warn!("Failed to add {} listener: {:?}", event, err);
            return None;
        }
        Some(Self {
            event,
            callback,
            attached: true,
        })
    }
}

impl Detach for WindowListener {
    fn detach(&mut self) {
        if !self.attached {
            return;
        }
        self.attached = false;
        if let Some(window) = web_sys::window() {
            if let Err(err) = window
                .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
            {
                log::warn!("Failed to remove {} listener: {:?}", self.event, err);
            }
        }
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        self.detach();
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::Detach;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Stand-in for a DOM listener that tracks how many are still live.
    pub(crate) struct CountingHandle {
        live: Rc<Cell<i32>>,
        attached: bool,
    }

    impl CountingHandle {
        pub(crate) fn new(live: &Rc<Cell<i32>>) -> Self {
            live.set(live.get() + 1);
            Self {
                live: live.clone(),
                attached: true,
            }
        }
    }

    impl Detach for CountingHandle {
        fn detach(&mut self) {
            if self.attached {
                self.attached = false;
                self.live.set(self.live.get() - 1);
            }
        }
    }
}
