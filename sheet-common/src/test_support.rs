//! Recording [`TransitionHost`] with a manual clock

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::{Completion, RootTransitionEnd, TransitionHost};

#[derive(Default)]
struct FakeHostState {
    event: Option<&'static str>,
    listener: Option<Rc<RootTransitionEnd>>,
    listens: usize,
    now: Duration,
    timers: Vec<(Duration, Completion)>,
}

/// In-memory stand-in for a sheet root element.
///
/// Clones share state, so a clone can be captured by item handlers while the
/// test drives the first handle.
#[derive(Clone, Default)]
pub struct FakeHost {
    state: Rc<RefCell<FakeHostState>>,
}

impl FakeHost {
    /// Environment that emits `event` when the transition ends
    pub fn with_event(event: &'static str) -> Self {
        let host = Self::default();
        host.state.borrow_mut().event = Some(event);
        host
    }

    /// Environment with no transition-end support
    pub fn without_event() -> Self {
        Self::default()
    }

    /// Simulate the root element's own transition finishing.
    pub fn fire_transition_end(&self) {
        self.dispatch(true);
    }

    /// Simulate a descendant's transition finishing and bubbling to the root.
    pub fn fire_child_transition_end(&self) {
        self.dispatch(false);
    }

    fn dispatch(&self, target_is_root: bool) {
        // Clone out so the completion can re-arm without a live borrow
        let listener = self.state.borrow().listener.clone();
        if let Some(listener) = listener {
            listener.handle(target_is_root);
        }
    }

    /// Move the clock forward, running every timer that comes due.
    pub fn advance(&self, by: Duration) {
        let now = {
            let mut state = self.state.borrow_mut();
            state.now += by;
            state.now
        };
        loop {
            let due = {
                let mut state = self.state.borrow_mut();
                let index = state.timers.iter().position(|(at, _)| *at <= now);
                index.map(|i| state.timers.remove(i).1)
            };
            match due {
                Some(callback) => callback(),
                None => break,
            }
        }
    }

    /// Armed listeners that have not completed yet (0 or 1)
    pub fn listener_count(&self) -> usize {
        let state = self.state.borrow();
        usize::from(state.listener.as_ref().is_some_and(|l| !l.has_fired()))
    }

    /// How many times a listener was attached in total
    pub fn listen_calls(&self) -> usize {
        self.state.borrow().listens
    }

    pub fn pending_timers(&self) -> usize {
        self.state.borrow().timers.len()
    }
}

impl TransitionHost for FakeHost {
    fn transition_end_event(&self) -> Option<&'static str> {
        self.state.borrow().event
    }

    fn listen_once(&self, _event: &'static str, on_end: Completion) {
        let mut state = self.state.borrow_mut();
        state.listens += 1;
        state.listener = Some(Rc::new(RootTransitionEnd::new(on_end)));
    }

    fn schedule(&self, delay: Duration, on_end: Completion) {
        let mut state = self.state.borrow_mut();
        let at = state.now + delay;
        state.timers.push((at, on_end));
    }
}
