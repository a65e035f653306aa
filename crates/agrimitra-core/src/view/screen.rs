//! Screen composition.
//!
//! Turns the app state into plain data the host renders. Nothing here holds
//! state; derived values are pulled from the advisor on every call.

use serde::Serialize;
use strum::IntoEnumIterator;

use super::router::{ActiveTab, Layout, Panel, visible_panels};
use crate::chart::{ChartFeed, FeatureImportance, ModelSummary, WeatherPoint};
use crate::geo::GeoStatus;
use crate::language::Language;
use crate::metrics::{Advisor, DerivedMetrics};
use crate::state::AppState;

pub const APP_TITLE: &str = "AgriMitra";
pub const FOOTER_TEXT: &str = "© AgriMitra | Empowering Farmers";
const LOGIN_TITLE: &str = "AgriMitra Login";
const LOGIN_HINT: &str = "Demo login accepts any details";
const FARMER_REGION: &str = "Punjab";
const YIELD_TREND: &str = "+12% vs last season";
const REVENUE_NOTE: &str = "Based on avg market price";

/// What the host should draw.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum Screen {
    Login(LoginView),
    Dashboard(DashboardView),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoginView {
    pub title: String,
    pub hint: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub title: String,
    pub language: Language,
    pub language_options: Vec<String>,
    /// Present only in the narrow layout.
    pub tabs: Option<Vec<TabView>>,
    pub panels: Vec<PanelView>,
    pub footer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabView {
    pub tab: ActiveTab,
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationView {
    pub requesting: bool,
    /// `Lat: .., Lon: ..` once a fix exists.
    pub coordinates: Option<String>,
    pub imagery_ref: Option<String>,
    pub last_error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "panel", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum PanelView {
    Farmer {
        name: String,
        region: String,
    },
    FieldDetails {
        crop: String,
        soil_type: String,
        area: String,
    },
    Location(LocationView),
    YieldCard {
        value: String,
        trend: String,
    },
    SoilCard {
        soil_type: String,
        note: String,
    },
    RevenueCard {
        value: String,
        note: String,
    },
    Weather {
        series: Vec<WeatherPoint>,
    },
    Recommendations {
        items: Vec<String>,
        actions: Vec<String>,
    },
    VoiceAssistant {
        listening: bool,
        message: String,
    },
    ModelInsights {
        summary: ModelSummary,
        features: Vec<FeatureImportance>,
    },
}

/// Builds the screen for the current state.
///
/// An unauthenticated session only ever gets the login surface.
pub fn compose(
    state: &AppState,
    layout: Layout,
    advisor: &dyn Advisor,
    feed: &dyn ChartFeed,
) -> Screen {
    if !state.session.authenticated {
        return Screen::Login(LoginView {
            title: LOGIN_TITLE.to_string(),
            hint: LOGIN_HINT.to_string(),
        });
    }

    let metrics = advisor.advise(&state.profile);
    let panels = visible_panels(layout, state.active_tab)
        .into_iter()
        .map(|panel| render_panel(panel, state, &metrics, feed))
        .collect();

    let tabs = match layout {
        Layout::Wide => None,
        Layout::Narrow => Some(
            ActiveTab::iter()
                .map(|tab| TabView {
                    tab,
                    label: tab.label().to_string(),
                    active: tab == state.active_tab,
                })
                .collect(),
        ),
    };

    Screen::Dashboard(DashboardView {
        title: APP_TITLE.to_string(),
        language: state.language,
        language_options: Language::iter()
            .map(|l| l.native_label().to_string())
            .collect(),
        tabs,
        panels,
        footer: FOOTER_TEXT.to_string(),
    })
}

fn render_panel(
    panel: Panel,
    state: &AppState,
    metrics: &DerivedMetrics,
    feed: &dyn ChartFeed,
) -> PanelView {
    let profile = &state.profile;
    match panel {
        Panel::Farmer => PanelView::Farmer {
            name: state.session.display_name().to_string(),
            region: FARMER_REGION.to_string(),
        },
        Panel::FieldDetails => PanelView::FieldDetails {
            crop: profile.crop.clone(),
            soil_type: profile.soil_type.clone(),
            area: profile.area.clone(),
        },
        Panel::Location => {
            let geo = &state.geo;
            PanelView::Location(LocationView {
                requesting: geo.is_requesting(),
                coordinates: geo.fix.as_ref().map(|fix| fix.display_coordinates()),
                imagery_ref: geo.fix.as_ref().and_then(|fix| fix.imagery_ref.clone()),
                last_error: match &geo.status {
                    GeoStatus::Failed(reason) => Some(reason.clone()),
                    _ => None,
                },
            })
        }
        Panel::YieldCard => PanelView::YieldCard {
            value: metrics.predicted_yield.clone(),
            trend: YIELD_TREND.to_string(),
        },
        Panel::SoilCard => PanelView::SoilCard {
            soil_type: profile.soil_type.clone(),
            note: format!("Best suited for {}", profile.crop),
        },
        Panel::RevenueCard => PanelView::RevenueCard {
            value: metrics.estimated_revenue.clone(),
            note: REVENUE_NOTE.to_string(),
        },
        Panel::Weather => PanelView::Weather {
            series: feed.weather(),
        },
        Panel::Recommendations => PanelView::Recommendations {
            items: metrics.recommendations.clone(),
            actions: vec!["Mark Done".to_string(), "Save".to_string()],
        },
        Panel::VoiceAssistant => PanelView::VoiceAssistant {
            listening: state.voice.is_listening(),
            message: state.voice.display_message().to_string(),
        },
        Panel::ModelInsights => PanelView::ModelInsights {
            summary: feed.model_summary(),
            features: feed.feature_importance(),
        },
    }
}
