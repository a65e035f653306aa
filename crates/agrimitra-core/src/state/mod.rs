//! Application state and its reducer.
//!
//! # Module Structure
//!
//! - `model`: The explicit `AppState` struct holding every piece of UI state
//! - `event`: Tagged events and the effects the reducer asks for
//! - `reducer`: `reduce(&mut AppState, DashboardEvent) -> Vec<Effect>`

mod event;
mod model;
mod reducer;

pub use event::{DashboardEvent, Effect, RecommendationAction};
pub use model::AppState;
pub use reducer::reduce;
