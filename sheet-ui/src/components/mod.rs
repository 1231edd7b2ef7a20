//! Action sheet components

pub mod action_sheet;
pub mod action_sheet_item;

pub use action_sheet::ActionSheet;
pub use action_sheet_item::{ActionSheetItem, AdaptedSheetItem, ItemHandler, SheetItem};
