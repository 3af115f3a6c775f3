use dioxus::prelude::*;

use crate::nav::Page;
use crate::views::PageView;

#[component]
pub fn Atm() -> Element {
    rsx! {
        PageView {
            page: Page::Atm,
            p { "Find an ATM near you." }
        }
    }
}
