//! Geolocation domain module.
//!
//! # Module Structure
//!
//! - `model`: Coordinates, `GeoFix` and the request workflow state (`GeoState`)
//! - `provider`: Traits for the platform location capability and the imagery source
//!
//! The workflow is `Idle -> Requesting -> {Resolved, Failed}`. The request
//! itself runs outside the reducer; completion comes back as an event.

mod model;
mod provider;

pub use model::{Coordinates, GeoFix, GeoState, GeoStatus, RequestId};
pub use provider::{GeolocationProvider, ImageryProvider};
