use crate::config::NoMatch;
use crate::nav::Page;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteDef {
    pub path: &'static str,
    pub page: Page,
}

/// What the content region shows for a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    View(Page),
    Blank,
    NotFound,
    Redirect(Page),
}

/// The path part of a history location, without query or fragment.
pub fn route_path(location: &str) -> &str {
    let end = location.find(['?', '#']).unwrap_or(location.len());
    &location[..end]
}

/// Non-empty segments of the path part of `location`.
pub fn path_segments(location: &str) -> Vec<String> {
    route_path(location)
        .split('/')
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Ordered, immutable list of routes. A location matches a route when its
/// path part equals the route path exactly; the first match wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    routes: Vec<RouteDef>,
}

impl RouteTable {
    /// The six application routes.
    pub fn standard() -> Self {
        Self {
            routes: Page::ALL
                .iter()
                .map(|&page| RouteDef {
                    path: page.path(),
                    page,
                })
                .collect(),
        }
    }

    pub fn routes(&self) -> &[RouteDef] {
        &self.routes
    }

    pub fn match_path(&self, location: &str) -> Option<Page> {
        let path = route_path(location);
        self.routes
            .iter()
            .find(|route| route.path == path)
            .map(|route| route.page)
    }

    pub fn resolve(&self, location: &str, on_no_match: NoMatch) -> Resolution {
        if let Some(page) = self.match_path(location) {
            return Resolution::View(page);
        }

        match on_no_match {
            NoMatch::Blank => Resolution::Blank,
            NoMatch::FallbackView => Resolution::NotFound,
            NoMatch::RedirectHome => Resolution::Redirect(Page::Home),
        }
    }
}
