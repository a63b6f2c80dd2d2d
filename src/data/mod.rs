//! Static reference datasets
//!
//! Cities, services, AC components, symptoms and car brands. Each dataset is
//! an ordered list keyed by slug, loaded once and never mutated afterwards.
//! Order matters: positional fallbacks in the link resolver take the first
//! entries as declared.

mod builtin;
mod entities;

pub use entities::{Brand, City, Component, Service, Symptom};

use crate::core::{Error, Result};
use crate::i18n::Language;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::Path;

pub const CITIES_FILE: &str = "cities.json";
pub const SERVICES_FILE: &str = "services.json";
pub const COMPONENTS_FILE: &str = "components.json";
pub const SYMPTOMS_FILE: &str = "symptoms.json";
pub const BRANDS_FILE: &str = "car-brands.json";

/// A record with bilingual display fields
pub trait Localized {
    fn slug(&self) -> &str;

    /// Localized display name or title
    fn title(&self, lang: Language) -> &str;

    /// Localized long-form description
    fn description(&self, lang: Language) -> &str;
}

/// All reference tables the site is generated from
#[derive(Debug, Clone, Default)]
pub struct Datasets {
    pub cities: Vec<City>,
    pub services: Vec<Service>,
    pub components: Vec<Component>,
    pub symptoms: Vec<Symptom>,
    pub brands: Vec<Brand>,
}

/// Why a relational slug is suspicious
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IssueKind {
    /// The slug points at nothing
    Missing,
    /// A record lists itself as related
    SelfReference,
}

/// A relational slug that the link resolver will drop or surface oddly
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReferenceIssue {
    /// Dataset file holding the reference
    pub dataset: &'static str,
    /// Slug of the record holding the reference
    pub owner: String,
    /// Field holding the reference
    pub field: &'static str,
    pub slug: String,
    pub kind: IssueKind,
}

impl Datasets {
    /// Seed datasets compiled into the binary
    pub fn builtin() -> Self {
        Self {
            cities: builtin::cities(),
            services: builtin::services(),
            components: builtin::components(),
            symptoms: builtin::symptoms(),
            brands: builtin::brands(),
        }
    }

    /// Load every dataset from JSON files in `dir`.
    /// A missing file leaves that dataset empty; malformed JSON is an error.
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        if !dir.is_dir() {
            return Err(Error::Dataset {
                file: dir.display().to_string(),
                message: "data directory does not exist".to_string(),
            });
        }

        let datasets = Self {
            cities: load_json(dir, CITIES_FILE)?,
            services: load_json(dir, SERVICES_FILE)?,
            components: load_json(dir, COMPONENTS_FILE)?,
            symptoms: load_json(dir, SYMPTOMS_FILE)?,
            brands: load_json(dir, BRANDS_FILE)?,
        };

        log::info!(
            "Loaded datasets from {}: {} cities, {} services, {} components, {} symptoms, {} brands",
            dir.display(),
            datasets.cities.len(),
            datasets.services.len(),
            datasets.components.len(),
            datasets.symptoms.len(),
            datasets.brands.len()
        );

        for issue in datasets.reference_issues() {
            log::debug!(
                "{}: {}.{} has {:?} slug '{}'",
                issue.dataset,
                issue.owner,
                issue.field,
                issue.kind,
                issue.slug
            );
        }

        Ok(datasets)
    }

    pub fn city_by_slug(&self, slug: &str) -> Option<&City> {
        self.cities.iter().find(|c| c.slug == slug)
    }

    pub fn service_by_slug(&self, slug: &str) -> Option<&Service> {
        self.services.iter().find(|s| s.slug == slug)
    }

    pub fn component_by_slug(&self, slug: &str) -> Option<&Component> {
        self.components.iter().find(|c| c.slug == slug)
    }

    pub fn symptom_by_slug(&self, slug: &str) -> Option<&Symptom> {
        self.symptoms.iter().find(|s| s.slug == slug)
    }

    pub fn brand_by_slug(&self, slug: &str) -> Option<&Brand> {
        self.brands.iter().find(|b| b.slug == slug)
    }

    /// Relational slugs that do not resolve or point back at their owner,
    /// in dataset order
    pub fn reference_issues(&self) -> Vec<ReferenceIssue> {
        let mut issues = Vec::new();
        let mut push = |dataset, owner: &str, field, slug: &str, kind| {
            issues.push(ReferenceIssue {
                dataset,
                owner: owner.to_string(),
                field,
                slug: slug.to_string(),
                kind,
            })
        };

        for service in &self.services {
            for slug in &service.parts_involved {
                if self.component_by_slug(slug).is_none() {
                    push(SERVICES_FILE, &service.slug, "partsInvolved", slug, IssueKind::Missing);
                }
            }
        }

        for symptom in &self.symptoms {
            for slug in &symptom.related_symptom_slugs {
                if *slug == symptom.slug {
                    push(SYMPTOMS_FILE, &symptom.slug, "relatedSymptomSlugs", slug, IssueKind::SelfReference);
                } else if self.symptom_by_slug(slug).is_none() {
                    push(SYMPTOMS_FILE, &symptom.slug, "relatedSymptomSlugs", slug, IssueKind::Missing);
                }
            }
            for slug in &symptom.related_component_slugs {
                if self.component_by_slug(slug).is_none() {
                    push(SYMPTOMS_FILE, &symptom.slug, "relatedComponentSlugs", slug, IssueKind::Missing);
                }
            }
        }

        issues
    }
}

fn load_json<T: DeserializeOwned>(dir: &Path, file: &str) -> Result<Vec<T>> {
    let path = dir.join(file);

    if !path.exists() {
        log::warn!("Dataset {} not found, using an empty list", path.display());
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(&path)?;
    serde_json::from_str(&content).map_err(|e| Error::Dataset {
        file: file.to_string(),
        message: e.to_string(),
    })
}
