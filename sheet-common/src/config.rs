//! Sheet timing and layout configuration

use serde::{Deserialize, Serialize};

/// Gap between the trigger element and an anchored sheet, in pixels
pub const DEFAULT_DROPDOWN_GAP: f64 = 10.0;

/// Tunables for the close animation and anchored layout.
///
/// The transition durations must match the CSS for each platform theme,
/// since they stand in for `transitionend` where the browser doesn't emit it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetConfig {
    /// Close transition length under the Android theme
    pub android_transition_ms: u64,
    /// Close transition length under the iOS theme
    pub ios_transition_ms: u64,
    /// Vertical gap below the trigger in desktop layout
    pub dropdown_gap: f64,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            android_transition_ms: 200,
            ios_transition_ms: 300,
            dropdown_gap: DEFAULT_DROPDOWN_GAP,
        }
    }
}

impl SheetConfig {
    /// Parse a config blob. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
