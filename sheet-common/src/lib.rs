//! sheet-common - Pure action sheet logic
//!
//! Close state machine, transition completion protocol, item adapter and
//! dropdown positioning. No DOM or rendering dependencies, shared by the UI
//! components and their tests.

mod config;
mod items;
mod lifecycle;
mod platform;
mod position;
pub mod state;
mod transition;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_support;

pub use config::*;
pub use items::*;
pub use lifecycle::*;
pub use platform::*;
pub use position::*;
pub use state::{PanelState, SheetPhase};
pub use transition::*;
