//! Arabic translations

use std::collections::HashMap;

pub fn get_translations() -> HashMap<String, String> {
    let mut t = HashMap::new();

    // Site
    t.insert("site.name".into(), "أوتوسيف".into());
    t.insert("site.tagline".into(), "صيانة وإصلاح مكيفات السيارات في جميع أنحاء المملكة".into());
    t.insert("site.cta.book".into(), "احجز خدمة".into());
    t.insert("site.cta.whatsapp".into(), "تواصل عبر واتساب".into());

    // Navigation
    t.insert("nav.home".into(), "الرئيسية".into());
    t.insert("nav.services".into(), "الخدمات".into());
    t.insert("nav.symptoms".into(), "مشاكل المكيف".into());
    t.insert("nav.parts".into(), "قطع المكيف".into());
    t.insert("nav.brands".into(), "ماركات السيارات".into());
    t.insert("nav.blog".into(), "المدونة".into());
    t.insert("nav.switch_language".into(), "English".into());

    // Link title templates
    t.insert("link.city_service".into(), "خدمة مكيف في {name}".into());
    t.insert("link.brand_ac".into(), "مكيف {name}".into());

    // Related content sections
    t.insert("section.related_cities".into(), "نخدم أيضاً".into());
    t.insert("section.related_services".into(), "خدمات ذات صلة".into());
    t.insert("section.related_symptoms".into(), "مشاكل مكيف ذات صلة".into());
    t.insert("section.related_components".into(), "قطع مكيف ذات صلة".into());
    t.insert("section.related_brands".into(), "ماركات أخرى".into());
    t.insert("section.services_for_component".into(), "خدمات لهذه القطعة".into());
    t.insert("section.components_for_service".into(), "القطع المعنية".into());
    t.insert("section.cross_links".into(), "اكتشف المزيد".into());

    // Blog
    t.insert("blog.read_time".into(), "مدة القراءة".into());
    t.insert("blog.published".into(), "تاريخ النشر".into());
    t.insert("blog.updated".into(), "آخر تحديث".into());

    t
}
