//! Action sheet: a dismissible list of actions over the current page
//!
//! Compact layout renders a bottom panel over a dimmed mask. Desktop layout
//! renders a dropdown right-aligned under the element that opened it, over a
//! transparent mask that still catches outside clicks.
//!
//! `on_close` fires once, after the close transition has finished. The caller
//! keeps the sheet mounted until then:
//!
//! ```ignore
//! if show_sheet() {
//!     ActionSheet {
//!         toggle_id: "more-button",
//!         on_close: move |_| show_sheet.set(false),
//!         items: vec![
//!             SheetItem::new("Share").autoclose(true).action(EventHandler::new(share)),
//!             SheetItem::cancel("Cancel"),
//!         ],
//!     }
//! }
//! ```

use dioxus::prelude::*;
use sheet_common::{
    adapt, compute_coords, ClickOrigin, CloseLifecycle, CompletionPolicy, DropdownCoords,
    LayoutMode,
};
use tracing::warn;

use super::action_sheet_item::{ActionSheetItem, ItemHandler, SheetItem};
use crate::dom::{measure_anchor, use_transition_host};
use crate::environment::use_sheet_environment;

#[component]
pub fn ActionSheet(
    /// Called once the sheet has finished closing
    on_close: EventHandler<()>,
    /// Rows, in display order
    items: Vec<SheetItem>,
    /// Title above the items (iOS only)
    #[props(default)]
    header: Option<String>,
    /// Secondary text under the header (iOS only)
    #[props(default)]
    text: Option<String>,
    /// ID of the element that opened the sheet. Required in desktop layout.
    #[props(default)]
    toggle_id: Option<String>,
    #[props(default)]
    id: Option<String>,
    #[props(default)]
    class: Option<String>,
) -> Element {
    let env_signal = use_sheet_environment();
    let env = env_signal();
    let layout = env.layout();
    let policy = CompletionPolicy::new(layout, env.platform, &env.config);
    let host = use_transition_host(policy.fallback);

    let closing = use_signal(|| false);
    let lifecycle = use_hook(|| {
        let lifecycle = CloseLifecycle::new(move || on_close.call(()));
        lifecycle.observe(move |phase| {
            let mut closing = closing;
            // The sheet may already be unmounted when a late completion lands
            if let Ok(mut closing) = closing.try_write() {
                *closing = phase.panel_state().closing;
            }
        });
        lifecycle
    });
    lifecycle.set_on_close(move || on_close.call(()));

    let adapted = adapt(&items, env.insets.bottom, |action, autoclose| {
        let action = action.map(|handler: EventHandler<MouseEvent>| {
            move |evt: MouseEvent| handler.call(evt)
        });
        ItemHandler::new(lifecycle.item_handler(action, autoclose, host, policy))
    });

    // Placement CSS for desktop layout; `None` until the first measurement
    let mut placement = use_signal(|| None::<String>);
    let anchor_id = toggle_id.clone();
    // WORKAROUND: measure after render. DOM calls made during render cause
    // wry-bindgen U8BufferEmpty panics on native.
    use_effect(move || {
        // Re-measure on every environment change and on every closing render
        let env = env_signal();
        let _ = closing();
        let css = if env.layout().is_desktop() {
            anchored_coords(anchor_id.as_deref(), env.config.dropdown_gap)
                .map(|coords| coords.to_css())
                .unwrap_or_default()
        } else {
            String::new()
        };
        placement.set(Some(css));
    });

    let is_closing = closing();
    let duration_ms = policy.fallback.as_millis();
    let show_header =
        env.platform.shows_header() && (header.is_some() || text.is_some());

    let mask_class = match (layout.is_desktop(), is_closing) {
        (true, _) => "action-sheet-mask fixed inset-0 z-[3000]",
        (false, false) => "action-sheet-mask fixed inset-0 z-[3000] flex items-end bg-black/50 transition-opacity",
        (false, true) => "action-sheet-mask action-sheet-mask--closing fixed inset-0 z-[3000] flex items-end bg-black/50 transition-opacity opacity-0",
    };

    let mut sheet_class = format!(
        "action-sheet action-sheet--{} bg-surface-overlay shadow-lg overflow-hidden",
        env.platform.as_str()
    );
    if layout.is_desktop() {
        sheet_class.push_str(" action-sheet--desktop absolute rounded-lg border border-border-subtle min-w-56 transition-opacity");
    } else {
        sheet_class.push_str(" w-full rounded-t-xl transition-transform");
    }
    if is_closing {
        sheet_class.push_str(if layout.is_desktop() {
            " action-sheet--closing opacity-0"
        } else {
            " action-sheet--closing translate-y-full"
        });
    }
    if let Some(extra) = &class {
        sheet_class.push(' ');
        sheet_class.push_str(extra);
    }

    let sheet_style = format!(
        "transition-duration: {}ms; {}",
        duration_ms,
        placement_style(layout, placement())
    );

    let mask_lifecycle = lifecycle.clone();
    let panel_lifecycle = lifecycle.clone();

    rsx! {
        div {
            class: mask_class,
            style: "transition-duration: {duration_ms}ms;",
            onclick: move |_| {
                mask_lifecycle.handle_click(ClickOrigin::Mask, &host, &policy);
            },
            div {
                id,
                class: "{sheet_class}",
                style: "{sheet_style}",
                onmounted: host.onmounted(),
                onclick: move |evt| {
                    let outcome = panel_lifecycle.handle_click(ClickOrigin::Panel, &host, &policy);
                    if outcome.stops_propagation() {
                        evt.stop_propagation();
                    }
                },
                if show_header {
                    div { class: "action-sheet-header px-4 py-3 text-center border-b border-border-subtle",
                        if let Some(header) = &header {
                            div { class: "text-sm font-medium text-gray-300", "{header}" }
                        }
                        if let Some(text) = &text {
                            div { class: "text-xs text-gray-500 mt-1", "{text}" }
                        }
                    }
                }
                for (index, item) in adapted.into_iter().enumerate() {
                    ActionSheetItem { key: "{index}", item }
                }
            }
        }
    }
}

/// Inline placement for the panel from the latest measurement, if any.
fn placement_style(layout: LayoutMode, measured: Option<String>) -> String {
    match measured {
        Some(css) => css,
        // Keep an unplaced dropdown from flashing at the wrong spot
        None if layout.is_desktop() => "visibility: hidden;".to_string(),
        None => String::new(),
    }
}

/// Dropdown position under the toggle element. Call after render only.
fn anchored_coords(toggle_id: Option<&str>, gap: f64) -> Option<DropdownCoords> {
    let Some(toggle_id) = toggle_id else {
        warn!("Desktop action sheet rendered without a toggle_id");
        return None;
    };
    match measure_anchor(toggle_id) {
        Ok((anchor, viewport_width)) => Some(compute_coords(anchor, viewport_width, gap)),
        Err(err) => {
            warn!("Can't position action sheet: {}", err);
            None
        }
    }
}
