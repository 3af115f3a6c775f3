use dioxus::prelude::*;

use crate::nav::Page;
use crate::views::PageView;

#[component]
pub fn Apply() -> Element {
    rsx! {
        PageView {
            page: Page::Apply,
            p { "Open a new checking or savings account." }
        }
    }
}
