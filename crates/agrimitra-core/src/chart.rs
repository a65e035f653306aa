//! Records fed to the chart rendering surface.

use serde::{Deserialize, Serialize};

/// One day of the weather forecast series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherPoint {
    pub day: String,
    /// Rainfall in mm.
    pub rain: u32,
    /// Temperature in °C.
    pub temp: i32,
}

/// One bar of the model-insight series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureImportance {
    pub feature: String,
    /// Relative importance in percent.
    pub importance: u32,
}

/// Header data for the model insights panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelSummary {
    pub model_name: String,
    /// Confidence in percent.
    pub confidence: u32,
}

/// Data source for the dashboard charts.
pub trait ChartFeed: Send + Sync {
    /// Seven-day forecast, in display order.
    fn weather(&self) -> Vec<WeatherPoint>;

    fn feature_importance(&self) -> Vec<FeatureImportance>;

    fn model_summary(&self) -> ModelSummary;
}
