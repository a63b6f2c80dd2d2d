//! AutoSave site - command line entry point
//!
//! Emits the generated SEO artifacts (robots.txt, related-link blocks) and
//! checks the datasets and blog content before a site build.

use anyhow::{anyhow, bail, Context};
use autosave_site_lib::content::BlogCollection;
use autosave_site_lib::core::{Config, PageType};
use autosave_site_lib::data::{Datasets, IssueKind};
use autosave_site_lib::i18n::Language;
use autosave_site_lib::links::InternalLinkResolver;
use autosave_site_lib::seo;

const USAGE: &str = "\
Usage: autosave-site <command> [options]

Commands:
  robots                               Print robots.txt
  links <page-type> <slug>             Print related links for a page as JSON
  cross-links                          Print footer cross-links as JSON
  check-data                           Report dataset references that do not resolve
  check-blog                           Validate blog post frontmatter

Options:
  --lang <ar|en>                       Link language (default from config)
  --limit <n>                          Number of links per block";

/// Options shared by the link commands
struct LinkOptions {
    lang: Language,
    limit: Option<usize>,
    positional: Vec<String>,
}

fn parse_options(args: &[String], default_lang: Language) -> anyhow::Result<LinkOptions> {
    let mut options = LinkOptions {
        lang: default_lang,
        limit: None,
        positional: Vec::new(),
    };

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--lang" => {
                let value = iter.next().ok_or_else(|| anyhow!("--lang needs a value"))?;
                options.lang = value.parse()?;
            }
            "--limit" => {
                let value = iter.next().ok_or_else(|| anyhow!("--limit needs a value"))?;
                options.limit = Some(
                    value
                        .parse()
                        .with_context(|| format!("invalid --limit '{}'", value))?,
                );
            }
            other if other.starts_with("--") => bail!("unknown option {}", other),
            other => options.positional.push(other.to_string()),
        }
    }

    Ok(options)
}

/// Commands that read the site configuration
const CONFIG_COMMANDS: [&str; 5] = ["robots", "links", "cross-links", "check-data", "check-blog"];

fn needs_config(command: &str) -> bool {
    CONFIG_COMMANDS.contains(&command)
}

fn load_datasets(config: &Config) -> anyhow::Result<Datasets> {
    match &config.content.data_dir {
        Some(dir) => Datasets::load_from_dir(dir)
            .with_context(|| format!("failed to load datasets from {}", dir.display())),
        None => {
            log::info!("No data_dir configured, using built-in datasets");
            Ok(Datasets::builtin())
        }
    }
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::debug!("Starting autosave-site v{}", env!("CARGO_PKG_VERSION"));

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some((command, rest)) = args.split_first() else {
        eprintln!("{}", USAGE);
        std::process::exit(2);
    };

    if !needs_config(command) {
        if matches!(command.as_str(), "help" | "--help" | "-h") {
            println!("{}", USAGE);
            return Ok(());
        }
        bail!("unknown command '{}'\n\n{}", command, USAGE);
    }

    // Load or create configuration
    let config = Config::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config, using defaults: {}", e);
        Config::default()
    });

    match command.as_str() {
        "robots" => {
            println!("{}", seo::robots_txt(config.site.base_url()));
        }
        "links" => {
            let options = parse_options(rest, config.site.default_language)?;
            let [page_type, slug] = options.positional.as_slice() else {
                bail!("links expects <page-type> <slug>\n\n{}", USAGE);
            };
            let page_type: PageType = page_type.parse().map_err(|e: String| anyhow!(e))?;

            let datasets = load_datasets(&config)?;
            let resolver = InternalLinkResolver::new(&datasets);
            let related = resolver.for_page(
                page_type,
                slug,
                options.lang,
                options.limit.unwrap_or(config.links.limit),
            );
            println!("{}", serde_json::to_string_pretty(&related)?);
        }
        "cross-links" => {
            let options = parse_options(rest, config.site.default_language)?;
            let datasets = load_datasets(&config)?;
            let resolver = InternalLinkResolver::new(&datasets);
            let links = resolver.cross_links(
                options.lang,
                options.limit.unwrap_or(config.links.cross_link_limit),
            );
            println!("{}", serde_json::to_string_pretty(&links)?);
        }
        "check-data" => {
            let datasets = load_datasets(&config)?;
            let issues = datasets.reference_issues();
            for issue in &issues {
                let reason = match issue.kind {
                    IssueKind::Missing => "not found",
                    IssueKind::SelfReference => "points at itself",
                };
                println!(
                    "{}: {}.{} -> '{}' {}",
                    issue.dataset, issue.owner, issue.field, issue.slug, reason
                );
            }
            if !issues.is_empty() {
                bail!("{} reference issues", issues.len());
            }
            println!("All dataset references resolve");
        }
        "check-blog" => {
            let dir = &config.content.blog_dir;
            let collection = BlogCollection::load_dir(dir)
                .with_context(|| format!("blog validation failed in {}", dir.display()))?;
            for lang in autosave_site_lib::i18n::SUPPORTED_LANGUAGES {
                println!("{}: {} published posts", lang, collection.published(lang).len());
            }
        }
        other => unreachable!("command '{}' is not in CONFIG_COMMANDS", other),
    }

    Ok(())
}
