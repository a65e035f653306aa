//! Session gate module.
//!
//! Holds the authentication state that gates every other dashboard component.
//!
//! # Module Structure
//!
//! - `model`: Session domain model (`Session`) and the login transition
//!
//! # Usage
//!
//! ```ignore
//! use agrimitra_core::session::Session;
//! ```

mod model;

// Re-export public API
pub use model::{DEFAULT_FARMER_NAME, Session};
