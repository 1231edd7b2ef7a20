//! sheet mocks - Interactive page for exercising the action sheet
//!
//! Switch platform theme and viewport breakpoint, open the sheet, and watch
//! the order in which dismissal and item callbacks land.

mod mocks;

use dioxus::prelude::*;
use mocks::ActionSheetMock;

#[component]
pub fn App() -> Element {
    rsx! {
        ActionSheetMock {}
    }
}

fn main() {
    dioxus::launch(App);
}
