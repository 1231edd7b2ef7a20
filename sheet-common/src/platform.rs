//! Platform and adaptivity model

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::SheetConfig;

/// Platform theme the sheet is rendered under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[default]
    Android,
    Ios,
}

impl Platform {
    /// How long the close transition runs under this theme.
    ///
    /// Used as the timer fallback when the environment can't report
    /// transition completion.
    pub fn transition_duration(self, config: &SheetConfig) -> Duration {
        match self {
            Platform::Android => Duration::from_millis(config.android_transition_ms),
            Platform::Ios => Duration::from_millis(config.ios_transition_ms),
        }
    }

    /// Header and text are only part of the iOS sheet design.
    pub fn shows_header(self) -> bool {
        matches!(self, Platform::Ios)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Android => "android",
            Platform::Ios => "ios",
        }
    }
}

/// Adaptivity bucket for the current viewport width, smallest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum ViewWidth {
    SmallMobile,
    #[default]
    Mobile,
    SmallTablet,
    Tablet,
    Desktop,
}

impl ViewWidth {
    /// Bucket a viewport width in CSS pixels.
    pub fn from_px(width: f64) -> Self {
        if width >= 1280.0 {
            ViewWidth::Desktop
        } else if width >= 1024.0 {
            ViewWidth::Tablet
        } else if width >= 768.0 {
            ViewWidth::SmallTablet
        } else if width >= 375.0 {
            ViewWidth::Mobile
        } else {
            ViewWidth::SmallMobile
        }
    }
}

/// How the sheet is laid out. Derived from [`ViewWidth`], never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// Anchored dropdown next to the trigger element
    Desktop,
    /// Bottom panel over a mask
    Compact,
}

impl LayoutMode {
    pub fn from_view_width(view_width: ViewWidth) -> Self {
        if view_width >= ViewWidth::SmallTablet {
            LayoutMode::Desktop
        } else {
            LayoutMode::Compact
        }
    }

    pub fn is_desktop(self) -> bool {
        self == LayoutMode::Desktop
    }
}

/// Safe-area insets in CSS pixels. `None` when the side is unknown.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Insets {
    pub top: Option<f64>,
    pub right: Option<f64>,
    pub bottom: Option<f64>,
    pub left: Option<f64>,
}
