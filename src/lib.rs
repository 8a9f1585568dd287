//! "Select Skip" step of the skip-hire booking wizard, as a Yew page.

pub mod api;
pub mod app;
pub mod components;
pub mod model;
pub mod state;

pub use app::{App, AppProps};
pub use model::Skip;
