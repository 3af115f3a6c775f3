//! Navigation model shared by the router shell and the navigation bar.
//!
//! Nothing in here touches the renderer, so the menu order, the path
//! literals and the active-link rule can be checked with plain tests.

mod table;

pub use table::{path_segments, route_path, Resolution, RouteDef, RouteTable};

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Apply,
    Atm,
    Balance,
    Login,
    Transfer,
}

impl Page {
    /// Route table order.
    pub const ALL: [Page; 6] = [
        Page::Home,
        Page::Apply,
        Page::Atm,
        Page::Balance,
        Page::Login,
        Page::Transfer,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Apply => "/apply",
            Page::Atm => "/atm",
            Page::Balance => "/balance",
            Page::Login => "/login",
            Page::Transfer => "/transfer",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Apply => "Apply for a Bank Account",
            Page::Atm => "ATM",
            Page::Balance => "Balance",
            Page::Login => "Login",
            Page::Transfer => "Transfer Funds",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// A single navigation bar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub target: Page,
}

impl NavLink {
    pub const fn new(label: &'static str, target: Page) -> Self {
        Self { label, target }
    }

    pub fn path(&self) -> &'static str {
        self.target.path()
    }
}

/// Menu order differs from route table order.
pub const NAV_LINKS: [NavLink; 6] = [
    NavLink::new("Home", Page::Home),
    NavLink::new("Apply for Bank Accounts", Page::Apply),
    NavLink::new("View Balance", Page::Balance),
    NavLink::new("Transfer Funds", Page::Transfer),
    NavLink::new("ATM", Page::Atm),
    NavLink::new("Login/Logout", Page::Login),
];

/// Same rule as [`RouteTable::match_path`]: the path part of the location
/// must equal the link's path.
pub fn is_active(link: &NavLink, location: &str) -> bool {
    link.path() == route_path(location)
}

/// The navigation bar entry for `location`, if any.
pub fn active_link(location: &str) -> Option<&'static NavLink> {
    NAV_LINKS.iter().find(|link| is_active(link, location))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_order_matches_navbar() {
        let labels: Vec<&str> = NAV_LINKS.iter().map(|l| l.label).collect();
        assert_eq!(
            labels,
            vec![
                "Home",
                "Apply for Bank Accounts",
                "View Balance",
                "Transfer Funds",
                "ATM",
                "Login/Logout",
            ]
        );
    }

    #[test]
    fn test_every_page_has_exactly_one_link() {
        for page in Page::ALL {
            let count = NAV_LINKS.iter().filter(|l| l.target == page).count();
            assert_eq!(count, 1, "{:?}", page);
        }
    }

    #[test]
    fn test_exactly_one_link_active_on_each_defined_path() {
        for page in Page::ALL {
            let active: Vec<&NavLink> = NAV_LINKS
                .iter()
                .filter(|l| is_active(l, page.path()))
                .collect();
            assert_eq!(active.len(), 1);
            assert_eq!(active[0].path(), page.path());
        }
    }

    #[test]
    fn test_home_link_active_at_root() {
        assert_eq!(active_link("/").map(|l| l.label), Some("Home"));
    }

    #[test]
    fn test_apply_link_active_after_navigating() {
        let link = active_link("/apply").unwrap();
        assert_eq!(link.target, Page::Apply);
        assert_eq!(link.label, "Apply for Bank Accounts");
    }

    #[test]
    fn test_no_link_active_on_unknown_path() {
        assert!(active_link("/unknown").is_none());
        assert!(active_link("").is_none());
        assert!(active_link("/Apply").is_none());
        assert!(active_link("/apply/").is_none());
    }

    #[test]
    fn test_active_link_ignores_query_and_fragment() {
        assert_eq!(active_link("/atm?near=me").map(|l| l.target), Some(Page::Atm));
        assert_eq!(active_link("/login#form").map(|l| l.target), Some(Page::Login));
    }

    #[test]
    fn test_active_link_agrees_with_route_table() {
        let table = RouteTable::standard();
        for location in ["/", "/apply", "/apply/", "/Apply", "/balance?x=1", "/unknown"] {
            assert_eq!(
                active_link(location).map(|l| l.target),
                table.match_path(location),
                "{}",
                location
            );
        }
    }

    #[test]
    fn test_page_paths_are_distinct() {
        let mut paths: Vec<&str> = Page::ALL.iter().map(|p| p.path()).collect();
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), Page::ALL.len());
    }
}
