//! Ambient inputs for action sheets
//!
//! Platform, adaptivity and insets are detected elsewhere in the app; sheets
//! only read them. Provide a `Signal<SheetEnvironment>` near the root so a
//! change (rotation, window resize) re-renders open sheets.

use dioxus::prelude::*;
use sheet_common::{Insets, LayoutMode, Platform, SheetConfig, ViewWidth};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SheetEnvironment {
    pub platform: Platform,
    pub view_width: ViewWidth,
    pub insets: Insets,
    pub config: SheetConfig,
}

impl SheetEnvironment {
    pub fn layout(&self) -> LayoutMode {
        LayoutMode::from_view_width(self.view_width)
    }
}

/// Provide the environment to every sheet below this component.
pub fn use_sheet_environment_provider(
    init: impl FnOnce() -> SheetEnvironment,
) -> Signal<SheetEnvironment> {
    use_context_provider(|| Signal::new(init()))
}

/// The provided environment signal, or a local one holding the defaults when
/// nothing provides it. Reading it subscribes the caller (or an effect) to
/// environment changes.
pub fn use_sheet_environment() -> Signal<SheetEnvironment> {
    use_hook(|| {
        try_consume_context::<Signal<SheetEnvironment>>()
            .unwrap_or_else(|| Signal::new(SheetEnvironment::default()))
    })
}
