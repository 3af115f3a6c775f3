use dioxus::prelude::*;

use crate::app::Shell;
use crate::nav::Page;
use crate::views::{Apply, Atm, Balance, Home, Login, NotFound, Transfer};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},

        #[route("/apply")]
        Apply {},

        #[route("/atm")]
        Atm {},

        #[route("/balance")]
        Balance {},

        #[route("/login")]
        Login {},

        #[route("/transfer")]
        Transfer {},

        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

impl Route {
    pub fn page(&self) -> Option<Page> {
        match self {
            Route::Home {} => Some(Page::Home),
            Route::Apply {} => Some(Page::Apply),
            Route::Atm {} => Some(Page::Atm),
            Route::Balance {} => Some(Page::Balance),
            Route::Login {} => Some(Page::Login),
            Route::Transfer {} => Some(Page::Transfer),
            Route::NotFound { .. } => None,
        }
    }
}

impl From<Page> for Route {
    fn from(page: Page) -> Self {
        match page {
            Page::Home => Route::Home {},
            Page::Apply => Route::Apply {},
            Page::Atm => Route::Atm {},
            Page::Balance => Route::Balance {},
            Page::Login => Route::Login {},
            Page::Transfer => Route::Transfer {},
        }
    }
}
