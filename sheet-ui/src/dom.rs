//! DOM side of the close transition
//!
//! [`DomTransitionHost`] implements the completion protocol's host against
//! the sheet's mounted root element: `transitionend` listeners go on that
//! element and only react to the element's own transition, and timers run as
//! Dioxus tasks so they die with the sheet.

use std::rc::Rc;
use std::time::Duration;

use dioxus::dioxus_core::{Runtime, RuntimeGuard};
use dioxus::prelude::*;
use sheet_common::{
    transition_end_event_name, AnchorRect, Completion, RootTransitionEnd, TransitionHost,
};
use thiserror::Error;
use wasm_bindgen_x::{JsCast, JsValue};
use tracing::warn;

use crate::wasm_utils::EventListenerGuard;

#[derive(Debug, Error)]
pub enum DomError {
    #[error("no window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("element #{0} not found")]
    ElementNotFound(String),
    #[error("sheet root is not mounted")]
    NotMounted,
    #[error("failed to listen for {event}: {reason}")]
    Listener { event: &'static str, reason: String },
}

/// Transition host bound to one sheet's root element.
///
/// Built fresh each render by [`use_transition_host`]; the root element and
/// the attached listener live in signals, so every copy sees the current
/// root and replaces the same listener.
#[derive(Clone, Copy)]
pub struct DomTransitionHost {
    root: Signal<Option<Rc<MountedData>>>,
    listener: Signal<Option<EventListenerGuard>>,
    fallback: Duration,
}

/// Create the transition host for a sheet.
///
/// `fallback` is used when a `transitionend` listener can't be attached.
pub fn use_transition_host(fallback: Duration) -> DomTransitionHost {
    let root = use_signal(|| None::<Rc<MountedData>>);
    let mut listener = use_signal(|| None::<EventListenerGuard>);

    use_drop(move || {
        // WORKAROUND: dropping the guard during scope teardown runs a synchronous
        // removeEventListener IPC inside the diff cycle; defer it to a task.
        if let Some(guard) = listener.write().take() {
            spawn(async move {
                drop(guard);
            });
        }
    });

    DomTransitionHost {
        root,
        listener,
        fallback,
    }
}

impl DomTransitionHost {
    /// Callback for the root element's `onmounted`.
    pub fn onmounted(&self) -> impl FnMut(MountedEvent) {
        let mut root = self.root;
        move |evt: MountedEvent| {
            root.set(Some(evt.data()));
        }
    }

    fn root_element(&self) -> Result<web_sys_x::Element, DomError> {
        self.root
            .peek()
            .as_ref()
            .and_then(|mounted| mounted.downcast::<web_sys_x::Element>().cloned())
            .ok_or(DomError::NotMounted)
    }

    fn attach(
        &self,
        event: &'static str,
        on_end: Completion,
    ) -> Result<EventListenerGuard, DomError> {
        let root = self.root_element()?;
        let root_value = JsValue::from(root.clone());
        let end = RootTransitionEnd::new(on_end);
        // Listener callbacks run from wasm-bindgen, outside the Dioxus runtime
        let runtime = Runtime::current();
        EventListenerGuard::new(root.into(), event, move |evt: JsValue| {
            // transitionend bubbles; rows and header have transitions of their own
            let target = evt
                .dyn_ref::<web_sys_x::Event>()
                .and_then(|evt| evt.target())
                .map(JsValue::from);
            let _guard = RuntimeGuard::new(runtime.clone());
            end.handle(target.as_ref() == Some(&root_value));
        })
    }
}

impl TransitionHost for DomTransitionHost {
    fn transition_end_event(&self) -> Option<&'static str> {
        let window = web_sys_x::window()?;
        let has = |name: &str| js_sys_x::Reflect::has(&window, &name.into()).unwrap_or(false);
        transition_end_event_name(has("TransitionEvent"), has("WebKitTransitionEvent"))
    }

    fn listen_once(&self, event: &'static str, on_end: Completion) {
        let mut listener = self.listener;
        // Detach the previous listener before arming a new one
        listener.set(None);

        match self.attach(event, on_end.clone()) {
            Ok(guard) => listener.set(Some(guard)),
            Err(err) => {
                warn!("Falling back to close timer: {}", err);
                self.schedule(self.fallback, on_end);
            }
        }
    }

    fn schedule(&self, delay: Duration, on_end: Completion) {
        spawn(async move {
            sleep_ms(delay.as_millis() as u64).await;
            on_end();
        });
    }
}

/// Bounding box of element `id` plus the viewport width, for desktop layout.
pub fn measure_anchor(id: &str) -> Result<(AnchorRect, f64), DomError> {
    let window = web_sys_x::window().ok_or(DomError::NoWindow)?;
    let document = window.document().ok_or(DomError::NoDocument)?;
    let element = document
        .get_element_by_id(id)
        .ok_or_else(|| DomError::ElementNotFound(id.to_string()))?;

    let rect = element.get_bounding_client_rect();
    let viewport_width = document
        .document_element()
        .map(|root| root.client_width() as f64)
        .unwrap_or_else(|| {
            window
                .inner_width()
                .ok()
                .and_then(|w| w.as_f64())
                .unwrap_or(0.0)
        });

    Ok((
        AnchorRect {
            x: rect.x(),
            y: rect.y(),
            width: rect.width(),
            height: rect.height(),
        },
        viewport_width,
    ))
}

#[cfg(target_arch = "wasm32")]
async fn sleep_ms(ms: u64) {
    gloo_timers::future::TimeoutFuture::new(ms as u32).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}
