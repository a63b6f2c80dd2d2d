//! Seed datasets shipped with the binary

use super::{Brand, City, Component, Service, Symptom};

fn strings(slugs: &[&str]) -> Vec<String> {
    slugs.iter().map(|s| s.to_string()).collect()
}

fn city(slug: &str, name: (&str, &str), region: (&str, &str)) -> City {
    City {
        slug: slug.into(),
        name_ar: name.0.into(),
        name_en: name.1.into(),
        region_ar: region.0.into(),
        region_en: region.1.into(),
        description_ar: format!("خدمة صيانة مكيفات السيارات في {}", name.0),
        description_en: format!("Car AC repair and maintenance in {}", name.1),
    }
}

pub fn cities() -> Vec<City> {
    vec![
        city("riyadh", ("الرياض", "Riyadh"), ("المنطقة الوسطى", "Central Region")),
        city("jeddah", ("جدة", "Jeddah"), ("المنطقة الغربية", "Western Region")),
        city("dammam", ("الدمام", "Dammam"), ("المنطقة الشرقية", "Eastern Region")),
        city("makkah", ("مكة المكرمة", "Makkah"), ("المنطقة الغربية", "Western Region")),
        city("madinah", ("المدينة المنورة", "Madinah"), ("منطقة المدينة", "Madinah Region")),
        city("khobar", ("الخبر", "Khobar"), ("المنطقة الشرقية", "Eastern Region")),
    ]
}

pub fn services() -> Vec<Service> {
    vec![
        Service {
            slug: "ac-regas".into(),
            name_ar: "تعبئة فريون المكيف".into(),
            name_en: "AC Regas".into(),
            description_ar: "فحص التسريب وتعبئة غاز الفريون بالكمية الصحيحة حسب مواصفات الشركة المصنعة لاستعادة التبريد الكامل.".into(),
            description_en: "Leak test and refrigerant recharge to the manufacturer's exact specification to restore full cooling performance.".into(),
            parts_involved: strings(&["compressor", "condenser", "expansion-valve"]),
        },
        Service {
            slug: "compressor-repair".into(),
            name_ar: "إصلاح كمبروسر المكيف".into(),
            name_en: "AC Compressor Repair".into(),
            description_ar: "تشخيص وإصلاح أو استبدال كمبروسر المكيف مع ضمان على القطع والعمل.".into(),
            description_en: "Diagnosis, repair or replacement of the AC compressor with warranty on parts and labour.".into(),
            parts_involved: strings(&["compressor", "clutch"]),
        },
        Service {
            slug: "ac-cleaning".into(),
            name_ar: "تنظيف وتعقيم المكيف".into(),
            name_en: "AC Cleaning & Sanitizing".into(),
            description_ar: "تنظيف الثلاجة وتغيير فلتر المقصورة وتعقيم مجاري الهواء للتخلص من الروائح.".into(),
            description_en: "Evaporator cleaning, cabin filter replacement and duct sanitizing to remove odours.".into(),
            parts_involved: strings(&["evaporator", "cabin-filter", "blower-motor"]),
        },
        Service {
            slug: "ac-diagnostics".into(),
            name_ar: "فحص شامل للمكيف".into(),
            name_en: "AC Diagnostics".into(),
            description_ar: "فحص كمبيوتر وضغط للنظام بالكامل لتحديد سبب المشكلة بدقة.".into(),
            description_en: "Full pressure and electronic check of the system to pinpoint the fault.".into(),
            parts_involved: Vec::new(),
        },
        Service {
            slug: "condenser-replacement".into(),
            name_ar: "تغيير رديتر المكيف".into(),
            name_en: "Condenser Replacement".into(),
            description_ar: "استبدال رديتر المكيف التالف أو المسدود بقطعة أصلية أو تجارية عالية الجودة.".into(),
            description_en: "Replacement of a damaged or clogged condenser with an OEM or quality aftermarket part.".into(),
            parts_involved: strings(&["condenser"]),
        },
    ]
}

fn component(slug: &str, name: (&str, &str), description: (&str, &str)) -> Component {
    Component {
        slug: slug.into(),
        name_ar: name.0.into(),
        name_en: name.1.into(),
        description_ar: description.0.into(),
        description_en: description.1.into(),
    }
}

pub fn components() -> Vec<Component> {
    vec![
        component(
            "compressor",
            ("الكمبروسر", "Compressor"),
            ("قلب نظام التكييف، يضغط غاز الفريون ويدفعه عبر الدورة.", "The heart of the AC system, it pressurizes refrigerant and pumps it around the circuit."),
        ),
        component(
            "condenser",
            ("الرديتر (المكثف)", "Condenser"),
            ("يطرد الحرارة من الفريون المضغوط أمام رديتر المحرك.", "Sheds heat from the pressurized refrigerant in front of the engine radiator."),
        ),
        component(
            "evaporator",
            ("الثلاجة (المبخر)", "Evaporator"),
            ("تمتص الحرارة من هواء المقصورة خلف لوحة القيادة.", "Absorbs heat from cabin air behind the dashboard."),
        ),
        component(
            "expansion-valve",
            ("بلف التمدد", "Expansion Valve"),
            ("ينظم تدفق الفريون إلى الثلاجة.", "Meters refrigerant flow into the evaporator."),
        ),
        component(
            "blower-motor",
            ("مروحة المقصورة", "Blower Motor"),
            ("تدفع الهواء البارد عبر فتحات التكييف.", "Pushes cooled air through the vents."),
        ),
        component(
            "cabin-filter",
            ("فلتر المكيف", "Cabin Air Filter"),
            ("يحجز الغبار والروائح قبل دخولها المقصورة.", "Traps dust and odours before they reach the cabin."),
        ),
        component(
            "clutch",
            ("كلتش الكمبروسر", "Compressor Clutch"),
            ("يربط الكمبروسر بسير المحرك عند تشغيل المكيف.", "Engages the compressor with the engine belt when the AC is switched on."),
        ),
    ]
}

fn symptom(
    slug: &str,
    title: (&str, &str),
    description: (&str, &str),
    related_symptoms: &[&str],
    related_components: &[&str],
) -> Symptom {
    Symptom {
        slug: slug.into(),
        title_ar: title.0.into(),
        title_en: title.1.into(),
        description_ar: description.0.into(),
        description_en: description.1.into(),
        related_symptom_slugs: strings(related_symptoms),
        related_component_slugs: strings(related_components),
    }
}

pub fn symptoms() -> Vec<Symptom> {
    vec![
        symptom(
            "ac-not-cooling",
            ("المكيف لا يبرد", "AC Not Cooling"),
            ("أشهر مشكلة في الصيف، غالباً بسبب نقص الفريون أو عطل الكمبروسر.", "The most common summer complaint, usually low refrigerant or a failing compressor."),
            &["ac-blowing-hot-air", "weak-airflow"],
            &["compressor", "condenser", "expansion-valve"],
        ),
        symptom(
            "weak-airflow",
            ("ضعف تدفق الهواء", "Weak Airflow"),
            ("الهواء يخرج ضعيفاً من الفتحات حتى على أعلى سرعة.", "Air barely comes out of the vents even on the highest fan speed."),
            &["bad-smell"],
            &["blower-motor", "cabin-filter", "evaporator"],
        ),
        symptom(
            "ac-blowing-hot-air",
            ("المكيف يطلع هواء حار", "AC Blowing Hot Air"),
            ("المكيف يعمل لكن الهواء حار أو بدرجة حرارة الجو.", "The AC runs but the air is hot or at ambient temperature."),
            &["ac-not-cooling", "compressor-noise"],
            &["compressor", "clutch"],
        ),
        symptom(
            "bad-smell",
            ("رائحة كريهة من المكيف", "Bad Smell from AC"),
            ("رائحة عفن أو رطوبة عند تشغيل المكيف.", "A musty or damp odour when the AC is switched on."),
            &["weak-airflow"],
            &["evaporator", "cabin-filter"],
        ),
        symptom(
            "compressor-noise",
            ("صوت من الكمبروسر", "Noisy Compressor"),
            ("صوت طقطقة أو صفير عند تشغيل المكيف.", "Clicking, grinding or whining when the AC engages."),
            &[],
            &[],
        ),
    ]
}

fn brand(slug: &str, name: (&str, &str)) -> Brand {
    Brand {
        slug: slug.into(),
        name_ar: name.0.into(),
        name_en: name.1.into(),
        description_ar: format!("صيانة مكيفات سيارات {}", name.0),
        description_en: format!("AC service for {} vehicles", name.1),
    }
}

pub fn brands() -> Vec<Brand> {
    vec![
        brand("toyota", ("تويوتا", "Toyota")),
        brand("hyundai", ("هيونداي", "Hyundai")),
        brand("nissan", ("نيسان", "Nissan")),
        brand("ford", ("فورد", "Ford")),
        brand("kia", ("كيا", "Kia")),
    ]
}
