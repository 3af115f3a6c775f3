use dioxus::prelude::*;

use crate::nav::Page;
use crate::views::PageView;

#[component]
pub fn Balance() -> Element {
    rsx! {
        PageView {
            page: Page::Balance,
            p { "Your account balances will appear here." }
        }
    }
}
