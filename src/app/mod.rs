pub mod navbar;
pub mod route;

use dioxus::prelude::*;

use crate::config::ShellConfig;
use crate::context::RoutingContext;
use crate::nav::{path_segments, Resolution};
use crate::views::{NotFound, RedirectTo};
use navbar::Navbar;
use route::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    use_context_provider(ShellConfig::load);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        Router::<Route> {}
    }
}

/// Layout around every route. The navigation bar is mounted once here,
/// outside the content region.
///
/// The route table decides what the content region shows. The router's
/// own parser is more forgiving (`/apply/` parses as `Route::Apply`), so
/// the outlet is only rendered for locations the table matches.
#[component]
pub fn Shell() -> Element {
    let config = use_context::<ShellConfig>();
    let navigator = use_navigator();
    let routing = use_context_provider(|| RoutingContext::new(router(), navigator, config));

    let location = routing.current_path();
    let resolution = routing.resolve(&location);
    tracing::debug!("{} resolves to {:?}", location, resolution);

    rsx! {
        Navbar {}
        main {
            id: "content",
            match resolution {
                Resolution::View(_) => rsx! { Outlet::<Route> {} },
                Resolution::NotFound => rsx! { NotFound { segments: path_segments(&location) } },
                Resolution::Redirect(page) => rsx! { RedirectTo { page } },
                Resolution::Blank => rsx! {},
            }
        }
    }
}
