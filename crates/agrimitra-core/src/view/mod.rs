//! View router module.
//!
//! # Module Structure
//!
//! - `router`: Layout classes, tabs and the panel selection policy
//! - `screen`: Composition of app state into serializable screens

mod router;
mod screen;

pub use router::{ActiveTab, Layout, Panel, visible_panels};
pub use screen::{
    DashboardView, FOOTER_TEXT, LocationView, LoginView, PanelView, Screen, TabView, compose,
};
