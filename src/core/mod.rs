//! Core module - Site configuration, errors, and shared page types

mod config;
mod error;
mod types;

pub use config::{Config, ContentConfig, LinksConfig, SiteConfig};
pub use error::{Error, Result};
pub use types::{InternalLink, LinkSection, PageType, RelatedLinks};
