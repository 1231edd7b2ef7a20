//! Action sheet mock with platform and viewport controls

use dioxus::prelude::*;
use sheet_common::{Insets, ItemMode, Platform};
use sheet_ui::{use_sheet_environment_provider, ActionSheet, SheetEnvironment, SheetItem};
use tracing::info;

use super::viewport::{MockViewport, DEFAULT_BREAKPOINTS};

const TOGGLE_ID: &str = "mock-sheet-toggle";

/// Minimal CSS so the close transition actually runs and emits `transitionend`
const SHEET_CSS: &str = r#"
body { margin: 0; background: #1a1a2e; font-family: system-ui; color: white; }
* { box-sizing: border-box; }
.action-sheet-mask { position: fixed; inset: 0; display: flex; align-items: flex-end; }
.action-sheet { background: #1f2937; transition-property: transform, opacity; }
.action-sheet:not(.action-sheet--desktop) { width: 100%; }
.action-sheet--desktop { position: absolute; min-width: 220px; border-radius: 8px; }
.action-sheet--closing:not(.action-sheet--desktop) { transform: translateY(100%); }
.action-sheet--closing.action-sheet--desktop { opacity: 0; }
.action-sheet-item { display: flex; width: 100%; padding: 12px 16px; background: none; border: none; color: inherit; text-align: left; }
.action-sheet-item--destructive { color: #f87171; }
.action-sheet-item--cancel { color: #9ca3af; }
"#;

#[component]
pub fn ActionSheetMock() -> Element {
    let mut env = use_sheet_environment_provider(|| SheetEnvironment {
        insets: Insets {
            bottom: Some(20.0),
            ..Default::default()
        },
        ..Default::default()
    });
    let mut breakpoint = use_signal(|| DEFAULT_BREAKPOINTS[1]);
    let mut show_sheet = use_signal(|| false);
    let mut events = use_signal(Vec::<String>::new);

    let mut log = move |entry: String| {
        info!("{}", entry);
        events.write().push(entry);
    };

    let items = vec![
        SheetItem::new("Pin")
            .subtitle("Stays open")
            .action(EventHandler::new(move |_: MouseEvent| log("action: pin".to_string()))),
        SheetItem::new("Share")
            .meta("⌘S")
            .autoclose(true)
            .action(EventHandler::new(move |_: MouseEvent| log("action: share".to_string()))),
        SheetItem::new("Delete")
            .mode(ItemMode::Destructive)
            .autoclose(true)
            .action(EventHandler::new(move |_: MouseEvent| log("action: delete".to_string()))),
        SheetItem::cancel("Cancel"),
    ];

    let platform = env.read().platform;

    rsx! {
        style { "{SHEET_CSS}" }
        div { style: "padding: 20px;",
            h1 { style: "margin: 0 0 16px 0;", "Action sheet" }

            div { style: "display: flex; gap: 8px; margin-bottom: 12px;",
                for p in [Platform::Android, Platform::Ios] {
                    button {
                        disabled: platform == p,
                        onclick: move |_| env.write().platform = p,
                        "{p.as_str()}"
                    }
                }
            }
            div { style: "display: flex; gap: 8px; margin-bottom: 12px;",
                for bp in DEFAULT_BREAKPOINTS.iter().copied() {
                    button {
                        disabled: breakpoint() == bp,
                        onclick: move |_| {
                            breakpoint.set(bp);
                            env.write().view_width = bp.view_width();
                        },
                        "{bp.name}"
                    }
                }
            }

            MockViewport { width: breakpoint().width,
                div { style: "display: flex; justify-content: flex-end; padding: 16px;",
                    button {
                        id: TOGGLE_ID,
                        onclick: move |_| {
                            events.write().clear();
                            show_sheet.set(true);
                        },
                        "More…"
                    }
                }
                if show_sheet() {
                    ActionSheet {
                        toggle_id: TOGGLE_ID.to_string(),
                        header: "Album".to_string(),
                        text: "Choose what to do with this album".to_string(),
                        on_close: move |_| {
                            log("close".to_string());
                            show_sheet.set(false);
                        },
                        items,
                    }
                }
            }

            ol { style: "margin-top: 16px; color: #9ca3af;",
                for (i , entry) in events().into_iter().enumerate() {
                    li { key: "{i}", "{entry}" }
                }
            }
        }
    }
}
