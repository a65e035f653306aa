//! Panel selection policy.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Viewport class. Chosen by the host, not by the dashboard.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Layout {
    /// Sidebar plus main grid; every panel at once.
    #[default]
    Wide,
    /// Tab bar; one tab's panels at a time.
    Narrow,
}

/// Tab selected in the narrow layout.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ActiveTab {
    #[default]
    Home,
    Field,
    Recommend,
    Insights,
}

impl ActiveTab {
    /// Label on the tab bar.
    pub fn label(&self) -> &'static str {
        match self {
            ActiveTab::Home => "Home",
            ActiveTab::Field => "Field",
            ActiveTab::Recommend => "Recommend",
            ActiveTab::Insights => "Insights",
        }
    }
}

/// Content blocks the dashboard can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Panel {
    Farmer,
    FieldDetails,
    Location,
    YieldCard,
    SoilCard,
    RevenueCard,
    Weather,
    Recommendations,
    VoiceAssistant,
    ModelInsights,
}

const WIDE_PANELS: &[Panel] = &[
    Panel::Farmer,
    Panel::FieldDetails,
    Panel::Location,
    Panel::YieldCard,
    Panel::SoilCard,
    Panel::RevenueCard,
    Panel::Weather,
    Panel::Recommendations,
    Panel::VoiceAssistant,
    Panel::ModelInsights,
];

/// Panels visible for a layout. The tab only matters in the narrow layout.
pub fn visible_panels(layout: Layout, tab: ActiveTab) -> Vec<Panel> {
    match layout {
        Layout::Wide => WIDE_PANELS.to_vec(),
        Layout::Narrow => match tab {
            ActiveTab::Home => vec![Panel::YieldCard, Panel::Weather],
            ActiveTab::Field => vec![Panel::SoilCard, Panel::RevenueCard, Panel::Location],
            ActiveTab::Recommend => vec![Panel::Recommendations],
            ActiveTab::Insights => vec![Panel::ModelInsights],
        },
    }
}
