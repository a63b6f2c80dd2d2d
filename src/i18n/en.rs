//! English translations

use std::collections::HashMap;

pub fn get_translations() -> HashMap<String, String> {
    let mut t = HashMap::new();

    // Site
    t.insert("site.name".into(), "AutoSave".into());
    t.insert("site.tagline".into(), "Car AC repair and maintenance across Saudi Arabia".into());
    t.insert("site.cta.book".into(), "Book a Service".into());
    t.insert("site.cta.whatsapp".into(), "Chat on WhatsApp".into());

    // Navigation
    t.insert("nav.home".into(), "Home".into());
    t.insert("nav.services".into(), "Services".into());
    t.insert("nav.symptoms".into(), "AC Problems".into());
    t.insert("nav.parts".into(), "AC Parts".into());
    t.insert("nav.brands".into(), "Car Brands".into());
    t.insert("nav.blog".into(), "Blog".into());
    t.insert("nav.switch_language".into(), "العربية".into());

    // Link title templates
    t.insert("link.city_service".into(), "AC Service in {name}".into());
    t.insert("link.brand_ac".into(), "{name} AC".into());

    // Related content sections
    t.insert("section.related_cities".into(), "We also serve".into());
    t.insert("section.related_services".into(), "Related Services".into());
    t.insert("section.related_symptoms".into(), "Related AC Problems".into());
    t.insert("section.related_components".into(), "Related AC Parts".into());
    t.insert("section.related_brands".into(), "Other Car Brands".into());
    t.insert("section.services_for_component".into(), "Services for This Part".into());
    t.insert("section.components_for_service".into(), "Parts Involved".into());
    t.insert("section.cross_links".into(), "Explore More".into());

    // Blog
    t.insert("blog.read_time".into(), "Read time".into());
    t.insert("blog.published".into(), "Published".into());
    t.insert("blog.updated".into(), "Updated".into());

    t
}
