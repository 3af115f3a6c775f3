use dioxus::prelude::*;

use crate::nav::Page;
use crate::views::PageView;

#[component]
pub fn Login() -> Element {
    rsx! {
        PageView {
            page: Page::Login,
            p { "Sign in to your account, or sign out when you are done." }
        }
    }
}
