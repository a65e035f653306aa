pub mod chart_feed;
pub mod config_service;
pub mod geolocation;
pub mod imagery;
pub mod paths;

pub use crate::chart_feed::StaticChartFeed;
pub use crate::config_service::ConfigService;
pub use crate::geolocation::{
    FailingGeolocationProvider, FixedGeolocationProvider, UnavailableGeolocationProvider,
};
pub use crate::imagery::PlaceholderImageryProvider;
pub use crate::paths::AgriPaths;
