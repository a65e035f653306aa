//! Derived metrics computed from the farm profile.
//!
//! These are fixed lookup and templating rules, not a trained model. The
//! [`Advisor`] trait is the seam where a real prediction service plugs in
//! while keeping the same crop + soil + area input contract.

use serde::{Deserialize, Serialize};

use crate::profile::FarmProfile;

/// Yield shown for wheat.
pub const WHEAT_YIELD: &str = "3.6 t/acre";
/// Yield shown for every other crop.
pub const DEFAULT_YIELD: &str = "2.8 t/acre";
/// Revenue shown when the area mentions acres.
pub const ACRE_REVENUE: &str = "₹45,000";
/// Revenue shown otherwise.
pub const DEFAULT_REVENUE: &str = "₹60,000";

/// Predicted yield for a crop.
///
/// Exact, case-sensitive match on `"Wheat"`; everything else (including
/// `"wheat"` and `"Wheat "`) falls into the default bucket.
pub fn predicted_yield(crop: &str) -> &'static str {
    if crop == "Wheat" { WHEAT_YIELD } else { DEFAULT_YIELD }
}

/// Estimated revenue for a field area.
///
/// Substring match on `"acre"`. No unit parsing or numeric conversion.
pub fn estimated_revenue(area: &str) -> &'static str {
    if area.contains("acre") {
        ACRE_REVENUE
    } else {
        DEFAULT_REVENUE
    }
}

/// Ordered advisory list for a crop and soil type.
pub fn recommendations(crop: &str, soil_type: &str) -> [String; 3] {
    [
        "Ensure timely irrigation to maintain soil moisture.".to_string(),
        format!("Apply recommended fertilizers for {} growth.", crop),
        format!("Monitor for pest risks in {} soil conditions.", soil_type),
    ]
}

/// Display values derived from a [`FarmProfile`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedMetrics {
    pub predicted_yield: String,
    pub estimated_revenue: String,
    pub recommendations: Vec<String>,
}

/// Source of derived metrics.
///
/// Derivation is pull-based: the view asks for metrics each time it renders.
pub trait Advisor: Send + Sync {
    /// Computes display values for the given profile.
    fn advise(&self, profile: &FarmProfile) -> DerivedMetrics;
}

/// Advisor backed by the fixed rules above.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedAdvisor;

impl Advisor for RuleBasedAdvisor {
    fn advise(&self, profile: &FarmProfile) -> DerivedMetrics {
        DerivedMetrics {
            predicted_yield: predicted_yield(&profile.crop).to_string(),
            estimated_revenue: estimated_revenue(&profile.area).to_string(),
            recommendations: recommendations(&profile.crop, &profile.soil_type).to_vec(),
        }
    }
}
