//! Dropdown placement for desktop layout
//!
//! The sheet hangs under the element that opened it, right-aligned to it.

/// Bounding box of the element that opened the sheet, in viewport pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnchorRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Where an anchored sheet goes. Horizontal placement is driven by `right`;
/// `left` is always `auto`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DropdownCoords {
    pub right: f64,
    pub top: f64,
}

impl DropdownCoords {
    pub fn to_css(&self) -> String {
        format!("left: auto; right: {}px; top: {}px;", self.right, self.top)
    }
}

/// Right-align the sheet with the anchor and drop it `gap` pixels below.
///
/// Call on every render: the anchor moves with scroll and resize.
pub fn compute_coords(anchor: AnchorRect, viewport_width: f64, gap: f64) -> DropdownCoords {
    DropdownCoords {
        right: viewport_width - (anchor.x + anchor.width),
        top: anchor.y + anchor.height + gap,
    }
}
