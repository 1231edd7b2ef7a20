//! Action items and the adapter that decorates them for rendering

/// Visual role of an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ItemMode {
    #[default]
    Default,
    /// Trailing dismiss entry. Rendered apart from the real actions.
    Cancel,
    /// Irreversible action (red text)
    Destructive,
}

/// One entry in the sheet.
///
/// `A` is the activation callback type: a Dioxus `EventHandler` in the UI
/// crate, a plain closure in tests. `is_last` and `margin_bottom` are written
/// by [`adapt`].
#[derive(Debug, Clone, PartialEq)]
pub struct ActionItem<A> {
    pub label: String,
    pub subtitle: Option<String>,
    pub meta: Option<String>,
    pub mode: ItemMode,
    pub autoclose: bool,
    pub action: Option<A>,
    pub is_last: bool,
    pub margin_bottom: Option<f64>,
    /// Caller style, passed through untouched
    pub style: Option<String>,
}

impl<A> ActionItem<A> {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            subtitle: None,
            meta: None,
            mode: ItemMode::Default,
            autoclose: false,
            action: None,
            is_last: false,
            margin_bottom: None,
            style: None,
        }
    }

    /// Trailing cancel entry. Cancel closes the sheet by default.
    pub fn cancel(label: impl Into<String>) -> Self {
        Self::new(label).mode(ItemMode::Cancel).autoclose(true)
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn meta(mut self, meta: impl Into<String>) -> Self {
        self.meta = Some(meta.into());
        self
    }

    pub fn mode(mut self, mode: ItemMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn autoclose(mut self, autoclose: bool) -> Self {
        self.autoclose = autoclose;
        self
    }

    pub fn action(mut self, action: A) -> Self {
        self.action = Some(action);
        self
    }

    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    /// Inline style for the rendered row, including any adapter margin.
    pub fn css(&self) -> String {
        let mut css = self.style.clone().unwrap_or_default();
        if let Some(margin) = self.margin_bottom {
            if !css.is_empty() && !css.trim_end().ends_with(';') {
                css.push(';');
            }
            css.push_str(&format!("margin-bottom: {}px;", margin));
        }
        css
    }
}

/// Whether position `index` closes the list of real actions.
///
/// A trailing cancel item sits outside that list, so the item before it also
/// counts as last.
pub fn is_last_at<A>(items: &[ActionItem<A>], index: usize) -> bool {
    let n = items.len();
    if n == 0 || index >= n {
        return false;
    }
    index == n - 1 || (index + 2 == n && items[n - 1].mode == ItemMode::Cancel)
}

/// Decorate items for rendering without touching the caller's list.
///
/// Each action is replaced by `wrap(action, autoclose)`; the UI passes the
/// lifecycle's item handler here. The last item gets the bottom inset as a
/// margin when the inset is a finite number.
pub fn adapt<A, W>(
    items: &[ActionItem<A>],
    bottom_inset: Option<f64>,
    mut wrap: impl FnMut(Option<A>, bool) -> W,
) -> Vec<ActionItem<W>>
where
    A: Clone,
{
    let n = items.len();
    let inset = bottom_inset.filter(|v| v.is_finite());

    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let margin_bottom = match inset {
                Some(inset) if i + 1 == n => Some(inset),
                _ => item.margin_bottom,
            };
            ActionItem {
                label: item.label.clone(),
                subtitle: item.subtitle.clone(),
                meta: item.meta.clone(),
                mode: item.mode,
                autoclose: item.autoclose,
                action: Some(wrap(item.action.clone(), item.autoclose)),
                is_last: is_last_at(items, i),
                margin_bottom,
                style: item.style.clone(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(labels: &[&str]) -> Vec<ActionItem<u32>> {
        labels
            .iter()
            .enumerate()
            .map(|(i, l)| ActionItem::new(*l).action(i as u32))
            .collect()
    }

    fn last_flags<A>(items: &[ActionItem<A>]) -> Vec<bool> {
        items.iter().map(|i| i.is_last).collect()
    }

    #[test]
    fn only_final_item_is_last_without_cancel() {
        for n in 1..6 {
            let labels: Vec<String> = (0..n).map(|i| format!("item {i}")).collect();
            let refs: Vec<&str> = labels.iter().map(String::as_str).collect();
            let adapted = adapt(&plain(&refs), None, |a, _| a);
            let flags = last_flags(&adapted);
            for (i, flag) in flags.iter().enumerate() {
                assert_eq!(*flag, i == n - 1, "n={n} i={i}");
            }
        }
    }

    #[test]
    fn trailing_cancel_marks_two_items_last() {
        let mut items = plain(&["Copy", "Share", "Delete"]);
        items.push(ActionItem::cancel("Cancel"));
        let adapted = adapt(&items, None, |a, _| a);
        assert_eq!(last_flags(&adapted), vec![false, false, true, true]);
    }

    #[test]
    fn lone_cancel_is_last() {
        let items: Vec<ActionItem<u32>> = vec![ActionItem::cancel("Cancel")];
        let adapted = adapt(&items, None, |a, _| a);
        assert_eq!(last_flags(&adapted), vec![true]);
    }

    #[test]
    fn cancel_in_the_middle_is_not_special() {
        let items: Vec<ActionItem<u32>> = vec![
            ActionItem::new("Copy"),
            ActionItem::cancel("Cancel"),
            ActionItem::new("Share"),
        ];
        let adapted = adapt(&items, None, |a, _| a);
        assert_eq!(last_flags(&adapted), vec![false, false, true]);
    }

    #[test]
    fn bottom_inset_goes_on_final_item_only() {
        let mut items = plain(&["Copy", "Share"]);
        items.push(ActionItem::cancel("Cancel"));
        let adapted = adapt(&items, Some(34.0), |a, _| a);
        assert_eq!(adapted[0].margin_bottom, None);
        assert_eq!(adapted[1].margin_bottom, None);
        assert_eq!(adapted[2].margin_bottom, Some(34.0));
    }

    #[test]
    fn non_finite_inset_is_ignored() {
        let items = plain(&["Copy"]);
        assert_eq!(adapt(&items, Some(f64::NAN), |a, _| a)[0].margin_bottom, None);
        assert_eq!(
            adapt(&items, Some(f64::INFINITY), |a, _| a)[0].margin_bottom,
            None
        );
        assert_eq!(adapt(&items, None, |a, _| a)[0].margin_bottom, None);
    }

    #[test]
    fn wrap_sees_each_action_and_policy_in_order() {
        let items = vec![
            ActionItem::new("a").action(1u32).autoclose(true),
            ActionItem::new("b"),
            ActionItem::new("c").action(3u32),
        ];
        let mut seen = Vec::new();
        let adapted = adapt(&items, None, |action, autoclose| {
            seen.push((action, autoclose));
            seen.len()
        });
        assert_eq!(seen, vec![(Some(1), true), (None, false), (Some(3), false)]);
        let labels: Vec<&str> = adapted.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, vec!["a", "b", "c"]);
        // Caller's items are untouched
        assert!(items.iter().all(|i| !i.is_last));
    }

    #[test]
    fn css_appends_margin_to_caller_style() {
        let mut item: ActionItem<()> = ActionItem::new("x").style("color: red");
        assert_eq!(item.css(), "color: red");
        item.margin_bottom = Some(20.0);
        assert_eq!(item.css(), "color: red;margin-bottom: 20px;");
    }
}
