//! Blog content collection
//!
//! Posts are Markdown files with YAML frontmatter between `---` lines.
//! Frontmatter is checked against the SEO rules below and every violation
//! is reported at once.

use crate::core::{Error, Result};
use crate::i18n::{localized_path, Language};
use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const FRONTMATTER_DELIM: &str = "---";

pub const TITLE_MAX_CHARS: usize = 60;
pub const DESCRIPTION_MIN_CHARS: usize = 50;
pub const DESCRIPTION_MAX_CHARS: usize = 160;

/// Blog post frontmatter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogFrontmatter {
    pub title: String,
    pub description: String,
    #[serde(deserialize_with = "deserialize_date")]
    pub pub_date: NaiveDate,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub updated_date: Option<NaiveDate>,
    #[serde(default)]
    pub canonical_url: Option<String>,
    #[serde(default = "default_og_image")]
    pub og_image: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Free-form, e.g. "5 min"
    #[serde(default)]
    pub read_time: Option<String>,
    #[serde(default)]
    pub lang: Language,
    #[serde(default)]
    pub draft: bool,
}

fn default_og_image() -> String { "/og-image.jpg".to_string() }

/// Accepts `2024-01-15` or a full RFC 3339 timestamp
fn parse_date(value: &str) -> std::result::Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(value).map(|dt| dt.date_naive()))
        .map_err(|_| format!("invalid date '{}'", value))
}

fn deserialize_date<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<NaiveDate, D::Error> {
    let value = String::deserialize(deserializer)?;
    parse_date(&value).map_err(serde::de::Error::custom)
}

fn deserialize_optional_date<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Option<NaiveDate>, D::Error> {
    match Option::<String>::deserialize(deserializer)? {
        Some(value) => parse_date(&value).map(Some).map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

impl BlogFrontmatter {
    /// List every rule the frontmatter breaks
    pub fn problems(&self) -> Vec<String> {
        let mut problems = Vec::new();

        if self.title.chars().count() > TITLE_MAX_CHARS {
            problems.push(format!("SEO Title must be under {} characters", TITLE_MAX_CHARS));
        }

        let description_len = self.description.chars().count();
        if description_len < DESCRIPTION_MIN_CHARS {
            problems.push(format!(
                "description must be at least {} characters (got {})",
                DESCRIPTION_MIN_CHARS, description_len
            ));
        }
        if description_len > DESCRIPTION_MAX_CHARS {
            problems.push(format!(
                "Optimal meta description length is at most {} characters (got {})",
                DESCRIPTION_MAX_CHARS, description_len
            ));
        }

        if let Some(canonical) = &self.canonical_url {
            if let Err(e) = url::Url::parse(canonical) {
                problems.push(format!("canonicalUrl '{}' is not a valid URL: {}", canonical, e));
            }
        }

        if let Some(updated) = self.updated_date {
            if updated < self.pub_date {
                problems.push("updatedDate is before pubDate".to_string());
            }
        }

        problems
    }
}

/// A parsed blog post
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlogPost {
    /// File stem, used as the URL segment
    pub slug: String,
    pub frontmatter: BlogFrontmatter,
    /// Markdown body after the frontmatter
    pub body: String,
}

impl BlogPost {
    /// Parse and validate a post. `path` is used for the slug and error reports.
    pub fn parse(source: &str, path: &Path) -> Result<Self> {
        let content_error = |problems: Vec<String>| Error::Content {
            path: path.to_path_buf(),
            problems,
        };

        let (raw_frontmatter, body) = split_frontmatter(source).map_err(|e| content_error(vec![e]))?;

        let frontmatter: BlogFrontmatter = serde_yaml::from_str(&raw_frontmatter)
            .map_err(|e| content_error(vec![format!("invalid frontmatter: {}", e)]))?;

        let problems = frontmatter.problems();
        if !problems.is_empty() {
            return Err(content_error(problems));
        }

        let slug = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_string();

        Ok(Self {
            slug,
            frontmatter,
            body,
        })
    }

    /// Localized site path of the post
    pub fn href(&self) -> String {
        localized_path(&format!("/blog/{}/", self.slug), self.frontmatter.lang)
    }

    /// Explicit canonical URL, or the post's own URL on the site
    pub fn canonical_url(&self, base_url: &str) -> String {
        match &self.frontmatter.canonical_url {
            Some(url) => url.clone(),
            None => format!("{}{}", base_url.trim_end_matches('/'), self.href()),
        }
    }
}

fn split_frontmatter(source: &str) -> std::result::Result<(String, String), String> {
    let lines: Vec<&str> = source.lines().collect();

    if lines.first().map(|l| l.trim()) != Some(FRONTMATTER_DELIM) {
        return Err("missing frontmatter start delimiter".to_string());
    }

    let end_idx = lines
        .iter()
        .enumerate()
        .skip(1)
        .find_map(|(i, line)| (line.trim() == FRONTMATTER_DELIM).then_some(i))
        .ok_or_else(|| "missing frontmatter end delimiter".to_string())?;

    Ok((lines[1..end_idx].join("\n"), lines[end_idx + 1..].join("\n")))
}

/// Every post of the blog collection
#[derive(Debug, Clone, Default)]
pub struct BlogCollection {
    pub posts: Vec<BlogPost>,
}

impl BlogCollection {
    /// Load all `*.md` files in `dir` (not recursive), in file name order.
    /// The first invalid post aborts the load.
    pub fn load_dir(dir: &Path) -> Result<Self> {
        let mut paths: Vec<PathBuf> = fs::read_dir(dir)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| p.is_file() && p.extension().map_or(false, |ext| ext == "md"))
            .collect();
        paths.sort();

        let mut posts = Vec::with_capacity(paths.len());
        for path in paths {
            let source = fs::read_to_string(&path)?;
            posts.push(BlogPost::parse(&source, &path)?);
        }

        log::info!("Loaded {} blog posts from {}", posts.len(), dir.display());

        Ok(Self { posts })
    }

    pub fn by_slug(&self, slug: &str) -> Option<&BlogPost> {
        self.posts.iter().find(|p| p.slug == slug)
    }

    /// Non-draft posts in `lang`, newest first
    pub fn published(&self, lang: Language) -> Vec<&BlogPost> {
        let mut posts: Vec<&BlogPost> = self
            .posts
            .iter()
            .filter(|p| !p.frontmatter.draft && p.frontmatter.lang == lang)
            .collect();
        posts.sort_by(|a, b| b.frontmatter.pub_date.cmp(&a.frontmatter.pub_date));
        posts
    }
}
