use dioxus::prelude::*;

use crate::context::RoutingContext;
use crate::nav::Page;

/// Panel for locations outside the route table. The router lands unknown
/// paths on this route; the shell also renders it directly for locations
/// the router accepts but the table does not, such as `/apply/`.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let routing = use_context::<RoutingContext>();
    let missing = format!("/{}", segments.join("/"));

    rsx! {
        section {
            class: "page not-found",
            h1 { "Page not found" }
            p { "Nothing lives at {missing}." }
            button {
                onclick: move |_| routing.navigate_to(Page::Home),
                "Back to Home"
            }
        }
    }
}

/// Replaces the current history entry with `page` once mounted.
#[component]
pub fn RedirectTo(page: Page) -> Element {
    let routing = use_context::<RoutingContext>();

    use_effect(move || routing.redirect(page));

    rsx! {}
}
