//! Common types used across the site engine

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single "related content" link rendered on a page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InternalLink {
    /// Localized link text
    pub title: String,
    /// Site-relative href, always ending with a slash
    pub href: String,
    /// Optional localized teaser shown under the title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl InternalLink {
    pub fn new(title: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            href: href.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Kinds of programmatic SEO pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageType {
    City,
    Service,
    Symptom,
    Component,
    Brand,
}

impl PageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PageType::City => "city",
            PageType::Service => "service",
            PageType::Symptom => "symptom",
            PageType::Component => "component",
            PageType::Brand => "brand",
        }
    }
}

impl fmt::Display for PageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "city" => Ok(PageType::City),
            "service" => Ok(PageType::Service),
            "symptom" => Ok(PageType::Symptom),
            "component" | "part" => Ok(PageType::Component),
            "brand" => Ok(PageType::Brand),
            other => Err(format!("unknown page type: {}", other)),
        }
    }
}

/// Named link sections for one page, in render order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedLinks {
    pub sections: Vec<LinkSection>,
}

/// A titled block of related links
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkSection {
    /// Translation key of the section heading
    pub heading_key: String,
    /// Localized section heading
    pub heading: String,
    pub links: Vec<InternalLink>,
}

impl RelatedLinks {
    /// Total number of links across sections
    pub fn len(&self) -> usize {
        self.sections.iter().map(|s| s.links.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate every link in render order
    pub fn links(&self) -> impl Iterator<Item = &InternalLink> {
        self.sections.iter().flat_map(|s| s.links.iter())
    }
}
