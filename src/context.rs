use dioxus::prelude::*;

use crate::app::route::Route;
use crate::config::{NoMatch, ShellConfig};
use crate::nav::{Page, Resolution, RouteTable};

/// Single source of truth for navigation. Provided by the shell layout
/// and consumed by the navigation bar and the views.
#[derive(Clone, Copy)]
pub struct RoutingContext {
    router: RouterContext,
    navigator: Navigator,
    routes: Signal<RouteTable>,
    config: Signal<ShellConfig>,
}

impl RoutingContext {
    pub fn new(router: RouterContext, navigator: Navigator, config: ShellConfig) -> Self {
        Self {
            router,
            navigator,
            routes: Signal::new(RouteTable::standard()),
            config: Signal::new(config),
        }
    }

    /// Current history location, query and fragment included. Reading it
    /// subscribes the calling component to navigation.
    pub fn current_path(&self) -> String {
        self.router.full_route_string()
    }

    /// Pushes a history entry. No page reload.
    pub fn navigate(&self, path: &str) {
        tracing::info!("navigating to {}", path);
        self.navigator.push(path.to_string());
    }

    pub fn navigate_to(&self, page: Page) {
        self.navigate(page.path());
    }

    /// Replaces the current history entry, so back skips the path we
    /// redirected away from.
    pub fn redirect(&self, page: Page) {
        tracing::info!("redirecting to {}", page);
        self.navigator.replace(Route::from(page));
    }

    pub fn on_no_match(&self) -> NoMatch {
        self.config.read().on_no_match
    }

    pub fn resolve(&self, path: &str) -> Resolution {
        self.routes.read().resolve(path, self.on_no_match())
    }
}
