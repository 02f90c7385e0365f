// Dioxus UI module - the countries page and its details route
pub mod app;
pub mod components;
pub mod router;
pub mod views;

pub use app::App;
