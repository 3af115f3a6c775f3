use dioxus::prelude::*;

use crate::nav::Page;
use crate::views::PageView;

#[component]
pub fn Home() -> Element {
    rsx! {
        PageView {
            page: Page::Home,
            p { "Welcome to the bank. Pick a service from the menu above." }
        }
    }
}
