//! Component mocks with interactive controls

mod action_sheet;
pub mod viewport;

pub use action_sheet::ActionSheetMock;
