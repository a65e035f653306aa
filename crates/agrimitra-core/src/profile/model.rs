//! FarmProfile domain model.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Editable fields of the farm profile form.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter, AsRefStr,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum ProfileField {
    Crop,
    SoilType,
    Area,
}

/// Crop, soil and area as typed by the farmer.
///
/// All three are free text. `area` is expected to carry a unit token such as
/// "acres" but nothing enforces it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FarmProfile {
    pub crop: String,
    #[serde(alias = "soil_type")]
    pub soil_type: String,
    pub area: String,
}

impl Default for FarmProfile {
    fn default() -> Self {
        Self {
            crop: "Wheat".to_string(),
            soil_type: "Loamy".to_string(),
            area: "1.5 acres".to_string(),
        }
    }
}

impl FarmProfile {
    /// Overwrites one field. No validation.
    pub fn set_field(&mut self, field: ProfileField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ProfileField::Crop => self.crop = value,
            ProfileField::SoilType => self.soil_type = value,
            ProfileField::Area => self.area = value,
        }
    }

    /// Returns the current value of one field.
    pub fn field(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::Crop => &self.crop,
            ProfileField::SoilType => &self.soil_type,
            ProfileField::Area => &self.area,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_default_profile() {
        let profile = FarmProfile::default();
        assert_eq!(profile.crop, "Wheat");
        assert_eq!(profile.soil_type, "Loamy");
        assert_eq!(profile.area, "1.5 acres");
    }

    #[test]
    fn test_set_field_overwrites_only_target() {
        let mut profile = FarmProfile::default();
        profile.set_field(ProfileField::Crop, "Rice");

        assert_eq!(profile.crop, "Rice");
        assert_eq!(profile.soil_type, "Loamy");
        assert_eq!(profile.area, "1.5 acres");
    }

    #[test]
    fn test_set_field_accepts_empty_value() {
        let mut profile = FarmProfile::default();
        for field in ProfileField::iter() {
            profile.set_field(field, "");
            assert_eq!(profile.field(field), "");
        }
    }

    #[test]
    fn test_field_names() {
        assert_eq!(ProfileField::SoilType.to_string(), "soilType");
        assert_eq!(ProfileField::from_str("area").unwrap(), ProfileField::Area);
        assert!(ProfileField::from_str("yield").is_err());
    }
}
