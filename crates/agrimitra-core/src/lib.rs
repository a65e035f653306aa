//! Domain layer of the AgriMitra farm advisory dashboard.
//!
//! Holds the presentation state machine: the login gate, the farm profile and
//! its derived metrics, the geolocation workflow, the voice assistant cycle and
//! the view router. All transitions go through [`state::reduce`]; anything
//! asynchronous is requested as an [`state::Effect`] and executed elsewhere.

pub mod chart;
pub mod config;
pub mod error;
pub mod geo;
pub mod language;
pub mod metrics;
pub mod notice;
pub mod profile;
pub mod session;
pub mod state;
pub mod view;
pub mod voice;

// Re-export common error type
pub use error::AgriError;
