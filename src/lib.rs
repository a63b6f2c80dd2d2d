//! AutoSave site library
//!
//! Bilingual (Arabic/English) content engine for the AutoSave car AC
//! service site: reference datasets, internal linking for programmatic
//! SEO pages, the blog collection schema and robots.txt.

pub mod content;
pub mod core;
pub mod data;
pub mod i18n;
pub mod links;
pub mod seo;
