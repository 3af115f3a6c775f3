use dioxus::prelude::*;

use crate::app::route::Route;
use crate::context::RoutingContext;
use crate::nav::{active_link, NavLink, NAV_LINKS};

const NAVBAR_CSS: Asset = asset!("/assets/navbar.css");

#[component]
pub fn Navbar() -> Element {
    let routing = use_context::<RoutingContext>();
    let active = active_link(&routing.current_path());

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }

        nav {
            id: "navbar",
            ul {
                for link in NAV_LINKS.iter() {
                    li {
                        key: "{link.path()}",
                        Link {
                            class: nav_link_class(link, active),
                            to: Route::from(link.target),
                            "{link.label}"
                        }
                    }
                }
            }
        }
    }
}

// `Link`'s own `active_class` compares the whole location, query string
// included, so it would drop the highlight on `/balance?acct=1`.
fn nav_link_class(link: &NavLink, active: Option<&NavLink>) -> String {
    if active == Some(link) {
        "nav-link active".to_string()
    } else {
        "nav-link".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_active_link_gets_active_class() {
        let active = active_link("/transfer");
        let classes: Vec<String> = NAV_LINKS
            .iter()
            .map(|link| nav_link_class(link, active))
            .collect();
        let active_count = classes.iter().filter(|c| c.contains("active")).count();
        assert_eq!(active_count, 1);
        assert_eq!(classes[3], "nav-link active");
    }

    #[test]
    fn test_unknown_path_has_no_active_class() {
        let active = active_link("/unknown");
        assert!(NAV_LINKS
            .iter()
            .all(|link| nav_link_class(link, active) == "nav-link"));
    }
}
