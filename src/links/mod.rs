//! Internal linking for programmatic SEO pages
//!
//! Builds "related content" link lists by cross-referencing the reference
//! datasets. Explicit relations declared on a record win; otherwise the
//! resolver falls back to the first entries of a dataset in declared order.
//! Unknown slugs are dropped silently and never produce an error.

use crate::core::{InternalLink, LinkSection, PageType, RelatedLinks};
use crate::data::{Component, Datasets, Localized};
use crate::i18n::{I18n, Language};

/// Default number of links per related-content block
pub const DEFAULT_LIMIT: usize = 5;
/// Default number of footer cross-links
pub const DEFAULT_CROSS_LINK_LIMIT: usize = 6;

/// Characters kept from a description before the ellipsis
const TEASER_CHARS: usize = 80;

const SERVICES_SECTION: &str = "services";
const SYMPTOMS_SECTION: &str = "symptoms";
const PARTS_SECTION: &str = "parts";
const BRANDS_SECTION: &str = "car-ac";

/// Site path prefix for a language (empty for the default language)
pub fn path_prefix(lang: Language) -> &'static str {
    lang.path_prefix()
}

fn href(lang: Language, section: &str, slug: &str) -> String {
    format!("{}/{}/{}/", path_prefix(lang), section, slug)
}

/// First 80 characters plus "...", appended even when nothing was cut
fn teaser(text: &str) -> String {
    let mut teaser: String = text.chars().take(TEASER_CHARS).collect();
    teaser.push_str("...");
    teaser
}

/// First `limit` records whose slug differs from `current_slug`
fn others<'d, T: Localized + 'd>(
    items: &'d [T],
    current_slug: &'d str,
    limit: usize,
) -> impl Iterator<Item = &'d T> + 'd {
    items
        .iter()
        .filter(move |item| item.slug() != current_slug)
        .take(limit)
}

/// Resolves related-page links against a set of datasets
pub struct InternalLinkResolver<'a> {
    data: &'a Datasets,
    ar: I18n,
    en: I18n,
}

impl<'a> InternalLinkResolver<'a> {
    /// Create a resolver over datasets that outlive it
    pub fn new(data: &'a Datasets) -> Self {
        Self {
            data,
            ar: I18n::new(Language::Ar),
            en: I18n::new(Language::En),
        }
    }

    fn i18n(&self, lang: Language) -> &I18n {
        match lang {
            Language::Ar => &self.ar,
            Language::En => &self.en,
        }
    }

    fn service_link<T: Localized>(&self, service: &T, lang: Language) -> InternalLink {
        InternalLink::new(service.title(lang), href(lang, SERVICES_SECTION, service.slug()))
            .with_description(teaser(service.description(lang)))
    }

    fn symptom_link<T: Localized>(&self, symptom: &T, lang: Language) -> InternalLink {
        InternalLink::new(symptom.title(lang), href(lang, SYMPTOMS_SECTION, symptom.slug()))
    }

    fn component_link<T: Localized>(&self, component: &T, lang: Language) -> InternalLink {
        InternalLink::new(component.title(lang), href(lang, PARTS_SECTION, component.slug()))
    }

    /// Other cities, described by their region
    pub fn related_cities(&self, current_slug: &str, lang: Language, limit: usize) -> Vec<InternalLink> {
        others(&self.data.cities, current_slug, limit)
            .map(|c| {
                InternalLink::new(c.title(lang), href(lang, SERVICES_SECTION, &c.slug))
                    .with_description(c.region(lang))
            })
            .collect()
    }

    /// Other services, with a truncated description
    pub fn related_services(&self, current_slug: &str, lang: Language, limit: usize) -> Vec<InternalLink> {
        others(&self.data.services, current_slug, limit)
            .map(|s| self.service_link(s, lang))
            .collect()
    }

    /// Declared related symptoms first, padded with other symptoms in
    /// dataset order. Padding skips every declared slug, resolvable or not.
    pub fn related_symptoms(&self, current_slug: &str, lang: Language, limit: usize) -> Vec<InternalLink> {
        let Some(current) = self.data.symptom_by_slug(current_slug) else {
            return others(&self.data.symptoms, current_slug, limit)
                .map(|s| self.symptom_link(s, lang))
                .collect();
        };

        let mut links: Vec<InternalLink> = current
            .related_symptom_slugs
            .iter()
            .filter_map(|slug| self.data.symptom_by_slug(slug))
            .map(|s| self.symptom_link(s, lang))
            .collect();

        if links.len() >= limit {
            links.truncate(limit);
            return links;
        }

        let remaining = limit - links.len();
        links.extend(
            self.data
                .symptoms
                .iter()
                .filter(|s| s.slug != current_slug && !current.related_symptom_slugs.contains(&s.slug))
                .take(remaining)
                .map(|s| self.symptom_link(s, lang)),
        );

        links
    }

    /// Components declared on the symptom `current_slug`, or the first other
    /// components when the symptom is unknown or declares none.
    pub fn related_components(&self, current_slug: &str, lang: Language, limit: usize) -> Vec<InternalLink> {
        let declared = self
            .data
            .symptom_by_slug(current_slug)
            .map(|s| s.related_component_slugs.as_slice())
            .unwrap_or_default();

        let component_link = |c: &Component| {
            self.component_link(c, lang)
                .with_description(teaser(c.description(lang)))
        };

        if !declared.is_empty() {
            return declared
                .iter()
                .filter_map(|slug| self.data.component_by_slug(slug))
                .take(limit)
                .map(component_link)
                .collect();
        }

        others(&self.data.components, current_slug, limit)
            .map(component_link)
            .collect()
    }

    /// Other car brands in dataset order
    pub fn related_brands(&self, current_slug: &str, lang: Language, limit: usize) -> Vec<InternalLink> {
        others(&self.data.brands, current_slug, limit)
            .map(|b| InternalLink::new(b.title(lang), href(lang, BRANDS_SECTION, &b.slug)))
            .collect()
    }

    /// Services whose `parts_involved` lists the component
    pub fn services_for_component(&self, component_slug: &str, lang: Language, limit: usize) -> Vec<InternalLink> {
        self.data
            .services
            .iter()
            .filter(|s| s.parts_involved.iter().any(|p| p == component_slug))
            .take(limit)
            .map(|s| self.service_link(s, lang))
            .collect()
    }

    /// Components a service works on; empty for an unknown service
    pub fn components_for_service(&self, service_slug: &str, lang: Language, limit: usize) -> Vec<InternalLink> {
        let Some(service) = self.data.service_by_slug(service_slug) else {
            return Vec::new();
        };

        service
            .parts_involved
            .iter()
            .filter_map(|slug| self.data.component_by_slug(slug))
            .take(limit)
            .map(|c| self.component_link(c, lang))
            .collect()
    }

    /// Footer mix: two cities, two services, one symptom, one brand
    pub fn cross_links(&self, lang: Language, limit: usize) -> Vec<InternalLink> {
        let i18n = self.i18n(lang);
        let mut links = Vec::new();

        for city in self.data.cities.iter().take(2) {
            links.push(InternalLink::new(
                i18n.format("link.city_service", city.title(lang)),
                href(lang, SERVICES_SECTION, &city.slug),
            ));
        }

        for service in self.data.services.iter().take(2) {
            links.push(InternalLink::new(
                service.title(lang),
                href(lang, SERVICES_SECTION, &service.slug),
            ));
        }

        if let Some(symptom) = self.data.symptoms.first() {
            links.push(self.symptom_link(symptom, lang));
        }

        if let Some(brand) = self.data.brands.first() {
            links.push(InternalLink::new(
                i18n.format("link.brand_ac", brand.title(lang)),
                href(lang, BRANDS_SECTION, &brand.slug),
            ));
        }

        links.truncate(limit);
        links
    }

    /// All related-content blocks for one page, in render order
    pub fn for_page(&self, page_type: PageType, slug: &str, lang: Language, limit: usize) -> RelatedLinks {
        let sections: Vec<(&str, Vec<InternalLink>)> = match page_type {
            PageType::City => vec![
                ("section.related_cities", self.related_cities(slug, lang, limit)),
                ("section.related_services", self.related_services(slug, lang, limit)),
            ],
            PageType::Service => vec![
                ("section.related_services", self.related_services(slug, lang, limit)),
                ("section.components_for_service", self.components_for_service(slug, lang, limit)),
            ],
            PageType::Symptom => vec![
                ("section.related_symptoms", self.related_symptoms(slug, lang, limit)),
                ("section.related_components", self.related_components(slug, lang, limit)),
            ],
            PageType::Component => vec![
                ("section.services_for_component", self.services_for_component(slug, lang, limit)),
                ("section.related_components", self.related_components(slug, lang, limit)),
            ],
            PageType::Brand => vec![
                ("section.related_brands", self.related_brands(slug, lang, limit)),
                ("section.related_services", self.related_services(slug, lang, limit)),
            ],
        };

        let i18n = self.i18n(lang);
        let related = RelatedLinks {
            sections: sections
                .into_iter()
                .filter(|(_, links)| !links.is_empty())
                .map(|(key, links)| LinkSection {
                    heading_key: key.to_string(),
                    heading: i18n.get(key),
                    links,
                })
                .collect(),
        };

        log::debug!(
            "Resolved {} related links for {} page '{}' ({})",
            related.len(),
            page_type,
            slug,
            lang
        );

        related
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Brand, City, Service, Symptom};

    fn city(slug: &str) -> City {
        City {
            slug: slug.into(),
            name_ar: format!("مدينة {}", slug),
            name_en: format!("City {}", slug),
            region_ar: "منطقة".into(),
            region_en: "Region".into(),
            description_ar: String::new(),
            description_en: String::new(),
        }
    }

    fn service(slug: &str, parts: &[&str], description: &str) -> Service {
        Service {
            slug: slug.into(),
            name_ar: format!("خدمة {}", slug),
            name_en: format!("Service {}", slug),
            description_ar: description.into(),
            description_en: description.into(),
            parts_involved: parts.iter().map(|p| p.to_string()).collect(),
        }
    }

    fn component(slug: &str) -> Component {
        Component {
            slug: slug.into(),
            name_ar: format!("قطعة {}", slug),
            name_en: format!("Part {}", slug),
            description_ar: "وصف".into(),
            description_en: "Short".into(),
        }
    }

    fn symptom(slug: &str, related: &[&str], components: &[&str]) -> Symptom {
        Symptom {
            slug: slug.into(),
            title_ar: format!("عرض {}", slug),
            title_en: format!("Symptom {}", slug),
            description_ar: String::new(),
            description_en: String::new(),
            related_symptom_slugs: related.iter().map(|s| s.to_string()).collect(),
            related_component_slugs: components.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn brand(slug: &str) -> Brand {
        Brand {
            slug: slug.into(),
            name_ar: format!("ماركة {}", slug),
            name_en: format!("Brand{}", slug),
            description_ar: String::new(),
            description_en: String::new(),
        }
    }

    fn fixture() -> Datasets {
        Datasets {
            cities: vec![city("c1"), city("c2"), city("c3")],
            services: vec![
                service("s1", &["comp-x", "ghost", "comp-y"], &"x".repeat(100)),
                service("s2", &["comp-y"], "short"),
                service("s3", &[], "short"),
            ],
            components: vec![component("comp-x"), component("comp-y"), component("comp-z")],
            symptoms: vec![
                symptom("sym-a", &["sym-c", "missing", "sym-b"], &["comp-x", "comp-y"]),
                symptom("sym-b", &[], &[]),
                symptom("sym-c", &["sym-a"], &["nope"]),
                symptom("sym-d", &[], &[]),
                symptom("sym-e", &[], &[]),
            ],
            brands: vec![brand("b1"), brand("b2")],
        }
    }

    fn slugs(links: &[InternalLink]) -> Vec<&str> {
        links
            .iter()
            .map(|l| l.href.trim_end_matches('/').rsplit('/').next().unwrap_or_default())
            .collect()
    }

    #[test]
    fn test_related_cities_excludes_current() {
        let data = fixture();
        let resolver = InternalLinkResolver::new(&data);

        let links = resolver.related_cities("c1", Language::En, 5);
        assert_eq!(slugs(&links), vec!["c2", "c3"]);
        assert_eq!(links[0].href, "/en/services/c2/");
        assert_eq!(links[0].title, "City c2");
        assert_eq!(links[0].description.as_deref(), Some("Region"));

        let links = resolver.related_cities("unknown", Language::Ar, 2);
        assert_eq!(slugs(&links), vec!["c1", "c2"]);
        assert_eq!(links[1].href, "/services/c2/");
    }

    #[test]
    fn test_related_services_hrefs_and_teaser() {
        let data = fixture();
        let resolver = InternalLinkResolver::new(&data);

        let en = resolver.related_services("x", Language::En, 3);
        assert_eq!(en.len(), 3);
        assert!(en.iter().all(|l| l.href.starts_with("/en/services/")));

        let ar = resolver.related_services("x", Language::Ar, 3);
        assert!(ar.iter().all(|l| l.href.starts_with("/services/")));

        assert_eq!(en[0].description.as_deref(), Some(format!("{}...", "x".repeat(80)).as_str()));
        assert_eq!(en[1].description.as_deref(), Some("short..."));

        let links = resolver.related_services("s2", Language::En, 5);
        assert_eq!(slugs(&links), vec!["s1", "s3"]);
    }

    #[test]
    fn test_positional_results_truncate_to_limit() {
        let data = fixture();
        let resolver = InternalLinkResolver::new(&data);

        let links = resolver.related_services("x", Language::En, 2);
        assert_eq!(slugs(&links), vec!["s1", "s2"]);

        let links = resolver.related_services("s1", Language::En, 1);
        assert_eq!(slugs(&links), vec!["s2"]);

        let links = resolver.related_brands("x", Language::En, 1);
        assert_eq!(slugs(&links), vec!["b1"]);

        let links = resolver.related_cities("c2", Language::Ar, 1);
        assert_eq!(slugs(&links), vec!["c1"]);
    }

    #[test]
    fn test_teaser_counts_characters() {
        let arabic = "م".repeat(90);
        let result = teaser(&arabic);
        assert_eq!(result.chars().count(), 83);
        assert!(result.ends_with("..."));
    }

    #[test]
    fn test_related_symptoms_declared_first_then_padding() {
        let data = fixture();
        let resolver = InternalLinkResolver::new(&data);

        // "missing" is dropped; padding skips sym-a itself and declared slugs
        let links = resolver.related_symptoms("sym-a", Language::En, 5);
        assert_eq!(slugs(&links), vec!["sym-c", "sym-b", "sym-d", "sym-e"]);
        assert!(links.iter().all(|l| l.description.is_none()));
        assert_eq!(links[0].href, "/en/symptoms/sym-c/");
    }

    #[test]
    fn test_related_symptoms_truncates_declared() {
        let data = fixture();
        let resolver = InternalLinkResolver::new(&data);

        let links = resolver.related_symptoms("sym-a", Language::Ar, 2);
        assert_eq!(slugs(&links), vec!["sym-c", "sym-b"]);

        let links = resolver.related_symptoms("sym-a", Language::Ar, 1);
        assert_eq!(slugs(&links), vec!["sym-c"]);
    }

    #[test]
    fn test_related_symptoms_padding_with_few_declared() {
        let data = fixture();
        let resolver = InternalLinkResolver::new(&data);

        let links = resolver.related_symptoms("sym-c", Language::En, 3);
        assert_eq!(slugs(&links), vec!["sym-a", "sym-b", "sym-d"]);
    }

    #[test]
    fn test_related_symptoms_unknown_uses_dataset_order() {
        let data = fixture();
        let resolver = InternalLinkResolver::new(&data);

        let links = resolver.related_symptoms("not-a-symptom", Language::En, 3);
        assert_eq!(slugs(&links), vec!["sym-a", "sym-b", "sym-c"]);
    }

    #[test]
    fn test_related_components_declared() {
        let data = fixture();
        let resolver = InternalLinkResolver::new(&data);

        let links = resolver.related_components("sym-a", Language::En, 5);
        assert_eq!(slugs(&links), vec!["comp-x", "comp-y"]);
        assert_eq!(links[0].href, "/en/parts/comp-x/");
        assert_eq!(links[0].description.as_deref(), Some("Short..."));
    }

    #[test]
    fn test_related_components_unresolvable_declared_yields_empty() {
        let data = fixture();
        let resolver = InternalLinkResolver::new(&data);

        // sym-c declares only an unknown component: no fallback
        assert!(resolver.related_components("sym-c", Language::En, 5).is_empty());
    }

    #[test]
    fn test_related_components_fallback() {
        let data = fixture();
        let resolver = InternalLinkResolver::new(&data);

        let links = resolver.related_components("sym-b", Language::En, 5);
        assert_eq!(slugs(&links), vec!["comp-x", "comp-y", "comp-z"]);

        // Not a symptom: falls back and excludes the slug from components
        let links = resolver.related_components("comp-y", Language::Ar, 5);
        assert_eq!(slugs(&links), vec!["comp-x", "comp-z"]);
    }

    #[test]
    fn test_related_brands() {
        let data = fixture();
        let resolver = InternalLinkResolver::new(&data);

        let links = resolver.related_brands("b1", Language::En, 5);
        assert_eq!(links, vec![InternalLink::new("Brandb2", "/en/car-ac/b2/")]);
    }

    #[test]
    fn test_services_for_component() {
        let data = fixture();
        let resolver = InternalLinkResolver::new(&data);

        let links = resolver.services_for_component("comp-y", Language::En, 5);
        assert_eq!(slugs(&links), vec!["s1", "s2"]);
        assert!(links.iter().all(|l| l.description.is_some()));

        let links = resolver.services_for_component("comp-y", Language::En, 1);
        assert_eq!(slugs(&links), vec!["s1"]);

        assert!(resolver.services_for_component("comp-z", Language::En, 5).is_empty());
    }

    #[test]
    fn test_components_for_service() {
        let data = fixture();
        let resolver = InternalLinkResolver::new(&data);

        let links = resolver.components_for_service("s1", Language::Ar, 5);
        assert_eq!(slugs(&links), vec!["comp-x", "comp-y"]);
        assert!(links[0].description.is_none());
        assert_eq!(links[0].href, "/parts/comp-x/");

        assert!(resolver.components_for_service("unknown", Language::Ar, 5).is_empty());
        assert!(resolver.components_for_service("s3", Language::Ar, 5).is_empty());
    }

    #[test]
    fn test_cross_links_fixed_order() {
        let data = fixture();
        let resolver = InternalLinkResolver::new(&data);

        let links = resolver.cross_links(Language::En, 6);
        let hrefs: Vec<&str> = links.iter().map(|l| l.href.as_str()).collect();
        assert_eq!(
            hrefs,
            vec![
                "/en/services/c1/",
                "/en/services/c2/",
                "/en/services/s1/",
                "/en/services/s2/",
                "/en/symptoms/sym-a/",
                "/en/car-ac/b1/",
            ]
        );
        assert_eq!(links[0].title, "AC Service in City c1");
        assert_eq!(links[5].title, "Brandb1 AC");
        assert!(links.iter().all(|l| l.description.is_none()));

        let ar = resolver.cross_links(Language::Ar, 6);
        assert_eq!(ar[0].title, "خدمة مكيف في مدينة c1");
        assert_eq!(ar[5].title, "مكيف ماركة b1");
        assert_eq!(ar[4].href, "/symptoms/sym-a/");

        let short = resolver.cross_links(Language::Ar, 3);
        assert_eq!(short, ar[..3].to_vec());
    }

    #[test]
    fn test_cross_links_with_sparse_data() {
        let data = Datasets {
            cities: vec![city("only")],
            ..Default::default()
        };
        let resolver = InternalLinkResolver::new(&data);

        let links = resolver.cross_links(Language::En, 6);
        assert_eq!(links.len(), 1);
        assert!(InternalLinkResolver::new(&Datasets::default())
            .cross_links(Language::En, 6)
            .is_empty());
    }

    #[test]
    fn test_zero_limit_is_empty() {
        let data = fixture();
        let resolver = InternalLinkResolver::new(&data);

        assert!(resolver.related_cities("c1", Language::En, 0).is_empty());
        assert!(resolver.related_services("s1", Language::En, 0).is_empty());
        assert!(resolver.related_symptoms("sym-a", Language::En, 0).is_empty());
        assert!(resolver.related_symptoms("zzz", Language::En, 0).is_empty());
        assert!(resolver.related_components("sym-a", Language::En, 0).is_empty());
        assert!(resolver.related_brands("b1", Language::En, 0).is_empty());
        assert!(resolver.services_for_component("comp-y", Language::En, 0).is_empty());
        assert!(resolver.components_for_service("s1", Language::En, 0).is_empty());
        assert!(resolver.cross_links(Language::En, 0).is_empty());
    }

    #[test]
    fn test_limits_and_exclusion_hold_for_builtin_data() {
        let data = Datasets::builtin();
        let resolver = InternalLinkResolver::new(&data);

        for lang in crate::i18n::SUPPORTED_LANGUAGES {
            for limit in 0..8 {
                for symptom in &data.symptoms {
                    let links = resolver.related_symptoms(&symptom.slug, lang, limit);
                    assert!(links.len() <= limit);
                    assert!(!slugs(&links).contains(&symptom.slug.as_str()));

                    let links = resolver.related_components(&symptom.slug, lang, limit);
                    assert!(links.len() <= limit);
                }
                for city in &data.cities {
                    let links = resolver.related_cities(&city.slug, lang, limit);
                    assert!(links.len() <= limit);
                    assert!(!slugs(&links).contains(&city.slug.as_str()));
                }
                for service in &data.services {
                    let links = resolver.related_services(&service.slug, lang, limit);
                    assert!(links.len() <= limit);
                    assert!(!slugs(&links).contains(&service.slug.as_str()));
                    assert!(resolver.components_for_service(&service.slug, lang, limit).len() <= limit);
                }
                for component in &data.components {
                    let links = resolver.services_for_component(&component.slug, lang, limit);
                    assert!(links.len() <= limit);
                }
                for brand in &data.brands {
                    let links = resolver.related_brands(&brand.slug, lang, limit);
                    assert!(links.len() <= limit);
                    assert!(!slugs(&links).contains(&brand.slug.as_str()));
                }
                assert!(resolver.cross_links(lang, limit).len() <= limit);
            }
        }
    }

    #[test]
    fn test_calls_are_idempotent() {
        let data = Datasets::builtin();
        let resolver = InternalLinkResolver::new(&data);

        assert_eq!(
            resolver.related_symptoms("ac-not-cooling", Language::En, 4),
            resolver.related_symptoms("ac-not-cooling", Language::En, 4)
        );
        assert_eq!(
            resolver.cross_links(Language::Ar, 6),
            resolver.cross_links(Language::Ar, 6)
        );
    }

    #[test]
    fn test_for_page_sections() {
        let data = fixture();
        let resolver = InternalLinkResolver::new(&data);

        let related = resolver.for_page(PageType::Symptom, "sym-a", Language::En, 5);
        let keys: Vec<&str> = related.sections.iter().map(|s| s.heading_key.as_str()).collect();
        assert_eq!(keys, vec!["section.related_symptoms", "section.related_components"]);
        assert_eq!(related.sections[0].heading, "Related AC Problems");
        assert_eq!(related.len(), 6);

        // Unknown service has no components: that block is omitted
        let related = resolver.for_page(PageType::Service, "unknown", Language::Ar, 5);
        assert_eq!(related.sections.len(), 1);
        assert_eq!(related.sections[0].heading_key, "section.related_services");

        let related = resolver.for_page(PageType::Component, "comp-x", Language::En, 5);
        assert_eq!(related.links().next().map(|l| l.href.as_str()), Some("/en/services/s1/"));
    }
}
