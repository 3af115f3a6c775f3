/// Bankfront - router shell and navigation bar for the banking web client
///
/// Six literal routes render placeholder pages under a shared layout
/// that keeps the navigation bar mounted and highlights the active link.
pub mod app;
pub mod config;
pub mod context;
pub mod nav;
pub mod views;

pub use app::App;
