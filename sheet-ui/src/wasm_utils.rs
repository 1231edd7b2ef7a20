//! WASM utilities for browser interop
//!
//! # Event Listener Cleanup Pattern
//!
//! A JavaScript listener backed by a Rust `Closure` must keep the closure
//! alive for as long as the listener is attached. `closure.forget()` leaks it
//! and leaves the listener attached forever, so instead the closure lives in a
//! guard that removes the listener on `Drop`:
//!
//! ```ignore
//! // Listener is attached when the guard is created
//! let guard = EventListenerGuard::new(element.into(), "transitionend", callback)?;
//!
//! // ...and removed when the guard is dropped
//! drop(guard);
//! ```
//!
//! Store the guard in a `Signal<Option<EventListenerGuard>>`; setting it to
//! `None` (or replacing it) detaches the previous listener.

use wasm_bindgen_x::prelude::*;
use wasm_bindgen_x::JsCast;

use crate::dom::DomError;

/// An event listener that removes itself when dropped.
pub struct EventListenerGuard {
    target: web_sys_x::EventTarget,
    event_name: &'static str,
    callback: Closure<dyn FnMut(wasm_bindgen_x::JsValue)>,
}

impl EventListenerGuard {
    /// Attach a listener that stays until the guard is dropped.
    pub fn new(
        target: web_sys_x::EventTarget,
        event_name: &'static str,
        callback: impl FnMut(wasm_bindgen_x::JsValue) + 'static,
    ) -> Result<Self, DomError> {
        let callback: Closure<dyn FnMut(wasm_bindgen_x::JsValue)> =
            Closure::wrap(Box::new(callback));

        target
            .add_event_listener_with_callback(event_name, callback.as_ref().unchecked_ref())
            .map_err(|err| DomError::Listener {
                event: event_name,
                reason: format!("{:?}", err),
            })?;

        Ok(Self {
            target,
            event_name,
            callback,
        })
    }
}

impl Drop for EventListenerGuard {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback(
            self.event_name,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}
