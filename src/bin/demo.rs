//! AutoSave site - Demo CLI
//!
//! Walks through every internal-linking operation over the built-in
//! datasets in both languages.

use autosave_site_lib::core::{InternalLink, PageType};
use autosave_site_lib::data::Datasets;
use autosave_site_lib::i18n::{localized_path, I18n, Language};
use autosave_site_lib::links::{InternalLinkResolver, DEFAULT_CROSS_LINK_LIMIT, DEFAULT_LIMIT};
use autosave_site_lib::seo;

fn print_links(label: &str, links: &[InternalLink]) {
    println!("  {} ({})", label, links.len());
    for link in links {
        match &link.description {
            Some(description) => println!("    - {} -> {}  [{}]", link.title, link.href, description),
            None => println!("    - {} -> {}", link.title, link.href),
        }
    }
}

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("==============================================");
    println!("   AutoSave Site - Internal Linking Demo");
    println!("==============================================\n");

    // 1. Load datasets
    println!("[1/4] Loading built-in datasets...");
    let data = Datasets::builtin();
    println!(
        "      {} cities, {} services, {} components, {} symptoms, {} brands\n",
        data.cities.len(),
        data.services.len(),
        data.components.len(),
        data.symptoms.len(),
        data.brands.len()
    );

    // 2. Language helpers
    println!("[2/4] Localized paths...");
    let names: Vec<String> = I18n::available_languages()
        .into_iter()
        .map(|(lang, name)| format!("{} ({})", name, lang))
        .collect();
    println!("      Languages: {}", names.join(", "));
    for lang in [Language::Ar, Language::En] {
        let i18n = I18n::new(lang);
        println!(
            "      {} ({}): home={} services={} nav={}",
            i18n.current_language(),
            lang.dir(),
            localized_path("/", lang),
            localized_path("services/", lang),
            i18n.get("nav.services")
        );
    }
    println!();

    // 3. Resolver operations
    println!("[3/4] Related links...\n");
    let resolver = InternalLinkResolver::new(&data);
    let symptom = data.symptoms.first().map(|s| s.slug.as_str()).unwrap_or_default();
    let service = data.services.first().map(|s| s.slug.as_str()).unwrap_or_default();
    let component = data.components.first().map(|c| c.slug.as_str()).unwrap_or_default();
    let city = data.cities.first().map(|c| c.slug.as_str()).unwrap_or_default();
    let brand = data.brands.first().map(|b| b.slug.as_str()).unwrap_or_default();

    for lang in [Language::En, Language::Ar] {
        println!("--- {} ---", lang);
        print_links("related cities", &resolver.related_cities(city, lang, DEFAULT_LIMIT));
        print_links("related services", &resolver.related_services(service, lang, 3));
        print_links("related symptoms", &resolver.related_symptoms(symptom, lang, DEFAULT_LIMIT));
        print_links("related components", &resolver.related_components(symptom, lang, DEFAULT_LIMIT));
        print_links("related brands", &resolver.related_brands(brand, lang, 3));
        print_links("services for component", &resolver.services_for_component(component, lang, DEFAULT_LIMIT));
        print_links("components for service", &resolver.components_for_service(service, lang, DEFAULT_LIMIT));
        print_links("cross links", &resolver.cross_links(lang, DEFAULT_CROSS_LINK_LIMIT));
        println!();
    }

    let bundle = resolver.for_page(PageType::Symptom, symptom, Language::En, 3);
    println!("  Page bundle for symptom '{}': {} links in {} sections\n", symptom, bundle.len(), bundle.sections.len());

    // 4. robots.txt
    println!("[4/4] robots.txt ({})\n", seo::ROBOTS_CONTENT_TYPE);
    println!("{}", seo::robots_txt("https://autosave.sa"));
    println!("\n==============================================");
}
