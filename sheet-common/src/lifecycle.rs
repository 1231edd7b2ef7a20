//! Close lifecycle for one sheet instance
//!
//! Every way of closing (mask click, explicit close, autoclose item) goes
//! through the same gate and the same completion protocol. The dismissal
//! callback is delivered at most once, after the close transition, and before
//! the action of the item that triggered it.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, trace};

use crate::state::{transition, Effect, PanelState, SheetEvent, SheetPhase};
use crate::transition::{wait_for_completion, CompletionPolicy, TransitionHost};

/// Where a click inside the presentation shell landed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOrigin {
    /// The mask around the panel (outside click)
    Mask,
    /// Anywhere inside the panel body
    Panel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Routed to the close path
    Dismiss,
    /// Stopped at the panel; must not bubble to the mask
    Contained,
}

impl ClickOutcome {
    /// Whether the shell must stop the click from bubbling further
    pub fn stops_propagation(self) -> bool {
        self == ClickOutcome::Contained
    }
}

struct Shared {
    phase: SheetPhase,
    on_close: Rc<dyn Fn()>,
    /// Item action queued behind the dismissal callback
    after_close: Option<Box<dyn FnOnce()>>,
    observer: Option<Rc<dyn Fn(SheetPhase)>>,
}

/// Shared handle to a sheet's close state. Clones refer to the same sheet.
#[derive(Clone)]
pub struct CloseLifecycle {
    shared: Rc<RefCell<Shared>>,
}

impl CloseLifecycle {
    pub fn new(on_close: impl Fn() + 'static) -> Self {
        Self {
            shared: Rc::new(RefCell::new(Shared {
                phase: SheetPhase::Open,
                on_close: Rc::new(on_close),
                after_close: None,
                observer: None,
            })),
        }
    }

    /// Swap in the latest dismissal callback (props change between renders).
    pub fn set_on_close(&self, on_close: impl Fn() + 'static) {
        self.shared.borrow_mut().on_close = Rc::new(on_close);
    }

    /// Called after every phase change, before any user callback runs.
    pub fn observe(&self, observer: impl Fn(SheetPhase) + 'static) {
        self.shared.borrow_mut().observer = Some(Rc::new(observer));
    }

    pub fn phase(&self) -> SheetPhase {
        self.shared.borrow().phase
    }

    pub fn panel_state(&self) -> PanelState {
        self.phase().panel_state()
    }

    /// Start closing. Returns `false` if the sheet was already closing or
    /// closed, in which case nothing is armed.
    pub fn request_close<H: TransitionHost + ?Sized>(
        &self,
        host: &H,
        policy: &CompletionPolicy,
    ) -> bool {
        self.begin_close(host, policy, None)
    }

    /// Route a click from the presentation shell.
    pub fn handle_click<H: TransitionHost + ?Sized>(
        &self,
        origin: ClickOrigin,
        host: &H,
        policy: &CompletionPolicy,
    ) -> ClickOutcome {
        match origin {
            ClickOrigin::Mask => {
                self.request_close(host, policy);
                ClickOutcome::Dismiss
            }
            ClickOrigin::Panel => ClickOutcome::Contained,
        }
    }

    /// Build the activation handler for one item.
    ///
    /// Without `autoclose` the action runs right away. With it, the sheet
    /// closes and the action runs after the dismissal callback, receiving the
    /// triggering event.
    pub fn item_handler<E, F, H>(
        &self,
        action: Option<F>,
        autoclose: bool,
        host: H,
        policy: CompletionPolicy,
    ) -> impl Fn(E) + 'static
    where
        E: 'static,
        F: Fn(E) + Clone + 'static,
        H: TransitionHost + 'static,
    {
        let lifecycle = self.clone();
        move |event: E| {
            if !autoclose {
                if let Some(action) = &action {
                    action(event);
                }
                return;
            }
            let after_close = action.clone().map(|action| {
                let queued: Box<dyn FnOnce()> = Box::new(move || action(event));
                queued
            });
            lifecycle.begin_close(&host, &policy, after_close);
        }
    }

    fn begin_close<H: TransitionHost + ?Sized>(
        &self,
        host: &H,
        policy: &CompletionPolicy,
        after_close: Option<Box<dyn FnOnce()>>,
    ) -> bool {
        let observer = {
            let mut shared = self.shared.borrow_mut();
            let (next, effect) = transition(shared.phase, SheetEvent::CloseRequested);
            if effect != Effect::ArmCompletion {
                debug!("Ignoring close request, sheet is {:?}", shared.phase);
                return false;
            }
            shared.phase = next;
            shared.after_close = after_close;
            shared.observer.clone()
        };
        debug!("Sheet closing ({:?} layout)", policy.layout);

        if let Some(observer) = observer {
            observer(SheetPhase::Closing);
        }

        let lifecycle = self.clone();
        wait_for_completion(host, Rc::new(move || lifecycle.complete()), policy);
        true
    }

    fn complete(&self) {
        let (on_close, after_close, observer) = {
            let mut shared = self.shared.borrow_mut();
            let (next, effect) = transition(shared.phase, SheetEvent::TransitionEnded);
            if effect != Effect::Deliver {
                trace!("Repeated completion ignored ({:?})", shared.phase);
                return;
            }
            shared.phase = next;
            (
                shared.on_close.clone(),
                shared.after_close.take(),
                shared.observer.clone(),
            )
        };
        debug!("Sheet closed, delivering dismissal");

        if let Some(observer) = observer {
            observer(SheetPhase::Closed);
        }
        on_close();
        if let Some(action) = after_close {
            action();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::time::Duration;

    use super::*;
    use crate::test_support::FakeHost;
    use crate::{LayoutMode, Platform, SheetConfig, TRANSITION_END};

    fn compact() -> CompletionPolicy {
        CompletionPolicy::new(LayoutMode::Compact, Platform::Android, &SheetConfig::default())
    }

    fn counting_lifecycle() -> (CloseLifecycle, Rc<Cell<u32>>) {
        let closes = Rc::new(Cell::new(0));
        let c = closes.clone();
        (CloseLifecycle::new(move || c.set(c.get() + 1)), closes)
    }

    #[test]
    fn second_request_is_a_noop() {
        let host = FakeHost::with_event(TRANSITION_END);
        let (lifecycle, closes) = counting_lifecycle();

        assert!(lifecycle.request_close(&host, &compact()));
        assert!(!lifecycle.request_close(&host, &compact()));
        assert_eq!(host.listen_calls(), 1);

        host.fire_transition_end();
        assert_eq!(closes.get(), 1);
        assert_eq!(lifecycle.phase(), SheetPhase::Closed);

        assert!(!lifecycle.request_close(&host, &compact()));
        host.fire_transition_end();
        assert_eq!(closes.get(), 1);
    }

    /// Deliver a click to each origin in bubbling order, like the DOM does
    fn bubble(
        lifecycle: &CloseLifecycle,
        path: &[ClickOrigin],
        host: &FakeHost,
    ) -> Vec<ClickOutcome> {
        let mut outcomes = Vec::new();
        for origin in path {
            let outcome = lifecycle.handle_click(*origin, host, &compact());
            outcomes.push(outcome);
            if outcome.stops_propagation() {
                break;
            }
        }
        outcomes
    }

    #[test]
    fn panel_click_never_reaches_mask() {
        let host = FakeHost::without_event();
        let (lifecycle, closes) = counting_lifecycle();

        let outcomes = bubble(&lifecycle, &[ClickOrigin::Panel, ClickOrigin::Mask], &host);
        assert_eq!(outcomes, vec![ClickOutcome::Contained]);
        assert_eq!(lifecycle.phase(), SheetPhase::Open);
        assert_eq!(host.pending_timers(), 0);

        let outcomes = bubble(&lifecycle, &[ClickOrigin::Mask], &host);
        assert_eq!(outcomes, vec![ClickOutcome::Dismiss]);
        host.advance(Duration::from_millis(200));
        assert_eq!(closes.get(), 1);
    }

    #[test]
    fn only_contained_clicks_stop_propagation() {
        assert!(ClickOutcome::Contained.stops_propagation());
        assert!(!ClickOutcome::Dismiss.stops_propagation());
    }

    #[test]
    fn observer_sees_each_phase_once() {
        let host = FakeHost::with_event(TRANSITION_END);
        let (lifecycle, _) = counting_lifecycle();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let s = seen.clone();
        lifecycle.observe(move |phase| s.borrow_mut().push(phase));

        lifecycle.request_close(&host, &compact());
        lifecycle.request_close(&host, &compact());
        host.fire_transition_end();

        assert_eq!(*seen.borrow(), vec![SheetPhase::Closing, SheetPhase::Closed]);
    }

    #[test]
    fn refreshed_on_close_is_the_one_delivered() {
        let host = FakeHost::with_event(TRANSITION_END);
        let (lifecycle, stale) = counting_lifecycle();
        let fresh = Rc::new(Cell::new(0));
        let f = fresh.clone();
        lifecycle.set_on_close(move || f.set(f.get() + 1));

        lifecycle.request_close(&host, &compact());
        host.fire_transition_end();
        assert_eq!((stale.get(), fresh.get()), (0, 1));
    }

    #[test]
    fn callbacks_may_reenter_the_lifecycle() {
        let host = FakeHost::without_event();
        let lifecycle = CloseLifecycle::new(|| {});
        let inner = lifecycle.clone();
        let observed = Rc::new(Cell::new(None));
        let o = observed.clone();
        lifecycle.set_on_close(move || o.set(Some(inner.phase())));

        lifecycle.request_close(&host, &compact());
        host.advance(Duration::from_millis(200));
        assert_eq!(observed.get(), Some(SheetPhase::Closed));
    }
}
