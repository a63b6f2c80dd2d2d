//! Reference entity records
//!
//! Field names follow the camelCase layout of the JSON datasets.

use super::Localized;
use crate::i18n::Language;
use serde::{Deserialize, Serialize};

/// A city the business serves
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct City {
    pub slug: String,
    pub name_ar: String,
    pub name_en: String,
    pub region_ar: String,
    pub region_en: String,
    #[serde(default)]
    pub description_ar: String,
    #[serde(default)]
    pub description_en: String,
}

impl City {
    /// Localized region name
    pub fn region(&self, lang: Language) -> &str {
        match lang {
            Language::Ar => &self.region_ar,
            Language::En => &self.region_en,
        }
    }
}

/// A service offered (regas, compressor repair, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub slug: String,
    pub name_ar: String,
    pub name_en: String,
    pub description_ar: String,
    pub description_en: String,
    /// Component slugs this service works on
    #[serde(default)]
    pub parts_involved: Vec<String>,
}

/// An AC system part
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    pub slug: String,
    pub name_ar: String,
    pub name_en: String,
    pub description_ar: String,
    pub description_en: String,
}

/// A customer-facing AC problem
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Symptom {
    pub slug: String,
    pub title_ar: String,
    pub title_en: String,
    #[serde(default)]
    pub description_ar: String,
    #[serde(default)]
    pub description_en: String,
    #[serde(default)]
    pub related_symptom_slugs: Vec<String>,
    /// Empty when the dataset declares no component relation
    #[serde(default)]
    pub related_component_slugs: Vec<String>,
}

/// A car brand with its own landing page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    pub slug: String,
    pub name_ar: String,
    pub name_en: String,
    #[serde(default)]
    pub description_ar: String,
    #[serde(default)]
    pub description_en: String,
}

macro_rules! impl_localized {
    ($ty:ty, $title_ar:ident, $title_en:ident) => {
        impl Localized for $ty {
            fn slug(&self) -> &str {
                &self.slug
            }

            fn title(&self, lang: Language) -> &str {
                match lang {
                    Language::Ar => &self.$title_ar,
                    Language::En => &self.$title_en,
                }
            }

            fn description(&self, lang: Language) -> &str {
                match lang {
                    Language::Ar => &self.description_ar,
                    Language::En => &self.description_en,
                }
            }
        }
    };
}

impl_localized!(City, name_ar, name_en);
impl_localized!(Service, name_ar, name_en);
impl_localized!(Component, name_ar, name_en);
impl_localized!(Symptom, title_ar, title_en);
impl_localized!(Brand, name_ar, name_en);
