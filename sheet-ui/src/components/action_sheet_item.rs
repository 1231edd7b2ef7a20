//! Single row of an action sheet

use std::rc::Rc;

use dioxus::prelude::*;
use sheet_common::{ActionItem, ItemMode};

/// Item as handed to the sheet by its caller
pub type SheetItem = ActionItem<EventHandler<MouseEvent>>;

/// Item after adaptation: the action is the lifecycle-wrapped handler
pub type AdaptedSheetItem = ActionItem<ItemHandler>;

/// Lifecycle-wrapped row handler.
///
/// Rebuilt on every render of the sheet and freed with the props that hold
/// it, unlike a scope-owned `Callback`. Equal only to its own clones.
#[derive(Clone)]
pub struct ItemHandler(Rc<dyn Fn(MouseEvent)>);

impl ItemHandler {
    pub fn new(handler: impl Fn(MouseEvent) + 'static) -> Self {
        Self(Rc::new(handler))
    }

    pub fn call(&self, evt: MouseEvent) {
        (self.0)(evt)
    }
}

impl PartialEq for ItemHandler {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

fn item_class(item: &AdaptedSheetItem) -> String {
    let mut class = String::from(
        "action-sheet-item w-full text-left px-4 py-3 flex items-center gap-3 transition-colors hover:bg-hover",
    );
    match item.mode {
        ItemMode::Cancel => class.push_str(" action-sheet-item--cancel text-gray-400 font-medium"),
        ItemMode::Destructive => class.push_str(" action-sheet-item--destructive text-red-400"),
        ItemMode::Default => class.push_str(" text-gray-200"),
    }
    if !item.is_last {
        class.push_str(" border-b border-border-subtle");
    } else {
        class.push_str(" action-sheet-item--last");
    }
    class
}

/// Action sheet row. Clicks run the adapted handler, which applies the
/// item's autoclose policy.
#[component]
pub fn ActionSheetItem(item: AdaptedSheetItem) -> Element {
    let class = item_class(&item);
    let style = item.css();
    let action = item.action;

    rsx! {
        button {
            class: "{class}",
            style: "{style}",
            onclick: move |evt: MouseEvent| {
                if let Some(action) = &action {
                    action.call(evt);
                }
            },
            div { class: "flex-1 min-w-0",
                div { class: "truncate", "{item.label}" }
                if let Some(subtitle) = &item.subtitle {
                    div { class: "text-xs text-gray-500 truncate", "{subtitle}" }
                }
            }
            if let Some(meta) = &item.meta {
                span { class: "text-sm text-gray-500 flex-shrink-0", "{meta}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_item_drops_divider() {
        let mut item: AdaptedSheetItem = ActionItem::new("Share");
        assert!(item_class(&item).contains("border-b"));

        item.is_last = true;
        let class = item_class(&item);
        assert!(class.contains("action-sheet-item--last"));
        assert!(!class.contains("border-b"));
    }

    #[test]
    fn handler_equals_only_its_clones() {
        let handler = ItemHandler::new(|_| {});
        assert!(handler == handler.clone());
        assert!(handler != ItemHandler::new(|_| {}));
    }

    #[test]
    fn dropping_item_releases_handler() {
        let captured = Rc::new(());
        let weak = Rc::downgrade(&captured);

        let item: AdaptedSheetItem = ActionItem::new("Share").action(ItemHandler::new(move |_| {
            let _keep = &captured;
        }));
        assert!(weak.upgrade().is_some());

        drop(item);
        assert!(weak.upgrade().is_none());
    }

    #[test]
    fn mode_classes() {
        let cancel: AdaptedSheetItem = ActionItem::cancel("Cancel");
        assert!(item_class(&cancel).contains("action-sheet-item--cancel"));

        let delete: AdaptedSheetItem = ActionItem::new("Delete").mode(ItemMode::Destructive);
        assert!(item_class(&delete).contains("action-sheet-item--destructive"));
    }
}
