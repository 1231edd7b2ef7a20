//! Viewport switcher for responsive testing

use dioxus::prelude::*;
use sheet_common::ViewWidth;

/// Breakpoint definition
#[derive(Clone, Copy, PartialEq)]
pub struct Breakpoint {
    pub name: &'static str,
    pub width: u32, // 0 = full width
}

impl Breakpoint {
    pub const fn new(name: &'static str, width: u32) -> Self {
        Self { name, width }
    }

    /// Adaptivity bucket a sheet sees at this breakpoint.
    /// Full width counts as desktop.
    pub fn view_width(&self) -> ViewWidth {
        if self.width == 0 {
            ViewWidth::Desktop
        } else {
            ViewWidth::from_px(self.width as f64)
        }
    }
}

/// Default breakpoints
pub const DEFAULT_BREAKPOINTS: &[Breakpoint] = &[
    Breakpoint::new("Small mobile", 320),
    Breakpoint::new("Mobile", 375),
    Breakpoint::new("Tablet", 768),
    Breakpoint::new("Desktop", 1280),
    Breakpoint::new("Full", 0),
];

/// Viewport container - just applies width constraint
#[component]
pub fn MockViewport(width: u32, children: Element) -> Element {
    let style = if width > 0 {
        format!(
            "position: relative; width: {}px; min-height: 480px; margin: 0 auto; background: #111827;",
            width
        )
    } else {
        "position: relative; width: 100%; min-height: 480px; background: #111827;".to_string()
    };

    rsx! {
        div { style, {children} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sheet_common::LayoutMode;

    #[test]
    fn breakpoints_cover_both_layouts() {
        let layouts: Vec<LayoutMode> = DEFAULT_BREAKPOINTS
            .iter()
            .map(|bp| LayoutMode::from_view_width(bp.view_width()))
            .collect();
        assert_eq!(
            layouts,
            vec![
                LayoutMode::Compact,
                LayoutMode::Compact,
                LayoutMode::Desktop,
                LayoutMode::Desktop,
                LayoutMode::Desktop,
            ]
        );
    }
}
