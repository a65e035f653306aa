//! Display language selection.
//!
//! The chosen language is stored only; displayed text is not translated.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

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
pub enum Language {
    #[default]
    English,
    Hindi,
    Punjabi,
    Bengali,
}

impl Language {
    /// Label shown in the selector, in the language's own script.
    pub fn native_label(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "हिन्दी",
            Language::Punjabi => "ਪੰਜਾਬੀ",
            Language::Bengali => "বাংলা",
        }
    }
}
