use dioxus::prelude::*;

use crate::nav::Page;
use crate::views::PageView;

#[component]
pub fn Transfer() -> Element {
    rsx! {
        PageView {
            page: Page::Transfer,
            p { "Move money between your accounts." }
        }
    }
}
