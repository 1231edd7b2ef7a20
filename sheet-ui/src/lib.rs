//! sheet-ui - Action sheet components for Dioxus
//!
//! Wires the pure close lifecycle from `sheet-common` to the DOM: the sheet's
//! root element carries the `transitionend` listener, and platform, view width
//! and insets come from a [`SheetEnvironment`] context.

pub mod components;
pub mod dom;
pub mod environment;
pub mod wasm_utils;

pub use components::*;
pub use environment::{use_sheet_environment, use_sheet_environment_provider, SheetEnvironment};
pub use sheet_common::{
    ActionItem, Insets, ItemMode, LayoutMode, Platform, SheetConfig, ViewWidth,
};
