use dioxus::prelude::*;

use crate::nav::Page;

/// Heading and body for a placeholder page.
#[component]
pub fn PageView(page: Page, children: Element) -> Element {
    rsx! {
        section {
            class: "page",
            h1 { "{page.title()}" }
            {children}
        }
    }
}
