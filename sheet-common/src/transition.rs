//! Completion protocol for the close transition
//!
//! Waits for the sheet's CSS close transition to finish before the dismissal
//! callback runs. Environments that emit `transitionend` get a listener on
//! the sheet's root element that completes on the root's own transition only;
//! the rest get a timer matching the platform's transition duration.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use tracing::trace;

use crate::{LayoutMode, Platform, SheetConfig};

/// Standard transition-end event name
pub const TRANSITION_END: &str = "transitionend";
/// Prefixed name used by older WebKit
pub const WEBKIT_TRANSITION_END: &str = "webkitTransitionEnd";

/// Callback run when the close transition is over. May run more than once.
pub type Completion = Rc<dyn Fn()>;

/// Environment the sheet's root element lives in.
///
/// The DOM implementation lives in the UI crate; tests use a recording host
/// with a manual clock.
pub trait TransitionHost {
    /// Name of the transition-end event this environment emits, if any.
    fn transition_end_event(&self) -> Option<&'static str>;

    /// Attach an `event` listener to the root element that runs `on_end` for
    /// the first event targeting the root itself. Events bubbled up from
    /// descendants (row hover transitions and the like) must not complete it.
    ///
    /// Must replace any listener this host attached earlier, so arming twice
    /// never fires twice. See [`RootTransitionEnd`].
    fn listen_once(&self, event: &'static str, on_end: Completion);

    /// Run `on_end` once after `delay`.
    fn schedule(&self, delay: Duration, on_end: Completion);
}

impl<H: TransitionHost + ?Sized> TransitionHost for Rc<H> {
    fn transition_end_event(&self) -> Option<&'static str> {
        (**self).transition_end_event()
    }

    fn listen_once(&self, event: &'static str, on_end: Completion) {
        (**self).listen_once(event, on_end)
    }

    fn schedule(&self, delay: Duration, on_end: Completion) {
        (**self).schedule(delay, on_end)
    }
}

/// Pick the transition-end event name from what the environment supports.
pub fn transition_end_event_name(standard: bool, webkit: bool) -> Option<&'static str> {
    if standard {
        Some(TRANSITION_END)
    } else if webkit {
        Some(WEBKIT_TRANSITION_END)
    } else {
        None
    }
}

/// One-shot completion for a listener on the root element.
///
/// The listener sees every `transitionend` bubbling through the root; only the
/// first one whose target is the root completes.
pub struct RootTransitionEnd {
    on_end: Completion,
    fired: Cell<bool>,
}

impl RootTransitionEnd {
    pub fn new(on_end: Completion) -> Self {
        Self {
            on_end,
            fired: Cell::new(false),
        }
    }

    /// Handle one event seen by the listener. Returns `true` if it completed.
    pub fn handle(&self, target_is_root: bool) -> bool {
        if !target_is_root {
            trace!("Ignoring transition end from a descendant");
            return false;
        }
        if self.fired.replace(true) {
            return false;
        }
        (self.on_end)();
        true
    }

    pub fn has_fired(&self) -> bool {
        self.fired.get()
    }
}

/// Inputs that decide how completion is detected for one close
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompletionPolicy {
    pub layout: LayoutMode,
    pub platform: Platform,
    /// Timer used when no transition-end event is available
    pub fallback: Duration,
}

impl CompletionPolicy {
    pub fn new(layout: LayoutMode, platform: Platform, config: &SheetConfig) -> Self {
        Self {
            layout,
            platform,
            fallback: platform.transition_duration(config),
        }
    }
}

/// What got armed to detect the end of the transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Armed {
    Listener(&'static str),
    Timer(Duration),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionPath {
    /// Desktop layout ran the completion synchronously
    pub fired_immediately: bool,
    pub armed: Armed,
}

/// Run `on_complete` once the close transition is over.
///
/// Desktop layout completes synchronously and still arms the listener or
/// timer, so callers must treat repeated completions as no-ops.
pub fn wait_for_completion<H: TransitionHost + ?Sized>(
    host: &H,
    on_complete: Completion,
    policy: &CompletionPolicy,
) -> CompletionPath {
    let fired_immediately = policy.layout.is_desktop();
    if fired_immediately {
        on_complete();
    }

    let armed = match host.transition_end_event() {
        Some(event) => {
            trace!("Arming {} listener", event);
            host.listen_once(event, on_complete);
            Armed::Listener(event)
        }
        None => {
            trace!(
                "No transition event, falling back to {:?} timer ({})",
                policy.fallback,
                policy.platform.as_str()
            );
            host.schedule(policy.fallback, on_complete);
            Armed::Timer(policy.fallback)
        }
    };

    CompletionPath {
        fired_immediately,
        armed,
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::test_support::FakeHost;

    fn counter() -> (Rc<Cell<u32>>, Completion) {
        let count = Rc::new(Cell::new(0));
        let c = count.clone();
        (count, Rc::new(move || c.set(c.get() + 1)))
    }

    fn policy(layout: LayoutMode, platform: Platform) -> CompletionPolicy {
        CompletionPolicy::new(layout, platform, &SheetConfig::default())
    }

    #[test]
    fn event_name_prefers_standard() {
        assert_eq!(transition_end_event_name(true, true), Some("transitionend"));
        assert_eq!(
            transition_end_event_name(false, true),
            Some("webkitTransitionEnd")
        );
        assert_eq!(transition_end_event_name(false, false), None);
    }

    #[test]
    fn compact_with_event_waits_for_listener() {
        let host = FakeHost::with_event(TRANSITION_END);
        let (count, done) = counter();

        let path = wait_for_completion(
            &host,
            done,
            &policy(LayoutMode::Compact, Platform::Android),
        );
        assert_eq!(
            path,
            CompletionPath {
                fired_immediately: false,
                armed: Armed::Listener(TRANSITION_END),
            }
        );
        assert_eq!(count.get(), 0);

        host.fire_transition_end();
        assert_eq!(count.get(), 1);

        // One-shot
        host.fire_transition_end();
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn descendant_transition_end_does_not_complete() {
        let host = FakeHost::with_event(TRANSITION_END);
        let (count, done) = counter();

        wait_for_completion(&host, done, &policy(LayoutMode::Compact, Platform::Android));

        // A row's colour transition finishes while the panel is still sliding
        host.fire_child_transition_end();
        host.fire_child_transition_end();
        assert_eq!(count.get(), 0);
        assert_eq!(host.listener_count(), 1);

        host.fire_transition_end();
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn root_end_completes_once() {
        let (count, done) = counter();
        let end = RootTransitionEnd::new(done);

        assert!(!end.handle(false));
        assert!(!end.has_fired());
        assert!(end.handle(true));
        assert!(!end.handle(true));
        assert!(end.has_fired());
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn arming_twice_replaces_listener() {
        let host = FakeHost::with_event(TRANSITION_END);
        let (count, done) = counter();
        let p = policy(LayoutMode::Compact, Platform::Ios);

        wait_for_completion(&host, done.clone(), &p);
        wait_for_completion(&host, done, &p);
        assert_eq!(host.listener_count(), 1);

        host.fire_transition_end();
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn timer_fallback_uses_platform_duration() {
        for (platform, ms) in [(Platform::Android, 200u64), (Platform::Ios, 300)] {
            let host = FakeHost::without_event();
            let (count, done) = counter();

            let path = wait_for_completion(&host, done, &policy(LayoutMode::Compact, platform));
            assert_eq!(path.armed, Armed::Timer(Duration::from_millis(ms)));

            host.advance(Duration::from_millis(ms - 1));
            assert_eq!(count.get(), 0, "{platform:?} fired early");
            host.advance(Duration::from_millis(1));
            assert_eq!(count.get(), 1, "{platform:?} did not fire on time");
        }
    }

    #[test]
    fn desktop_fires_synchronously_and_still_arms() {
        let host = FakeHost::with_event(WEBKIT_TRANSITION_END);
        let (count, done) = counter();

        let path = wait_for_completion(
            &host,
            done,
            &policy(LayoutMode::Desktop, Platform::Android),
        );
        assert!(path.fired_immediately);
        assert_eq!(count.get(), 1);

        host.fire_transition_end();
        assert_eq!(count.get(), 2);
    }
}
