//! Literal chart data used until weather and model services are wired in.

use agrimitra_core::chart::{ChartFeed, FeatureImportance, ModelSummary, WeatherPoint};

const WEATHER: &[(&str, u32, i32)] = &[
    ("Mon", 12, 28),
    ("Tue", 5, 30),
    ("Wed", 20, 26),
    ("Thu", 8, 27),
    ("Fri", 15, 29),
    ("Sat", 10, 31),
    ("Sun", 25, 25),
];

const FEATURES: &[(&str, u32)] = &[
    ("Rainfall", 40),
    ("Soil pH", 25),
    ("Temperature", 20),
    ("Fertilizer", 15),
];

#[derive(Debug, Clone, Copy, Default)]
pub struct StaticChartFeed;

impl ChartFeed for StaticChartFeed {
    fn weather(&self) -> Vec<WeatherPoint> {
        WEATHER
            .iter()
            .map(|(day, rain, temp)| WeatherPoint {
                day: day.to_string(),
                rain: *rain,
                temp: *temp,
            })
            .collect()
    }

    fn feature_importance(&self) -> Vec<FeatureImportance> {
        FEATURES
            .iter()
            .map(|(feature, importance)| FeatureImportance {
                feature: feature.to_string(),
                importance: *importance,
            })
            .collect()
    }

    fn model_summary(&self) -> ModelSummary {
        ModelSummary {
            model_name: "Gradient Boosting + LSTM".to_string(),
            confidence: 78,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weather_week_in_order() {
        let days: Vec<_> = StaticChartFeed.weather().into_iter().map(|p| p.day).collect();
        assert_eq!(days, ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]);
    }

    #[test]
    fn test_feature_importance_sums_to_100() {
        let total: u32 = StaticChartFeed
            .feature_importance()
            .iter()
            .map(|f| f.importance)
            .sum();
        assert_eq!(total, 100);
    }
}
