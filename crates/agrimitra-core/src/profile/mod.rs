//! Farm profile module.
//!
//! User-editable crop, soil and area fields read by the derived metrics.

mod model;

pub use model::{FarmProfile, ProfileField};
