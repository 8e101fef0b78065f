// Product tag badges
use serde::Serialize;

use super::Tone;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BadgeStyle {
    pub label_en: String,
    pub label_cz: String,
    pub tone: Tone,
    pub class_name: &'static str,
}

pub fn badge_style(badge: &str) -> BadgeStyle {
    let (tone, label_cz, class_name) = match badge {
        "Bestseller" => (Tone::Warning, "Nejprodávanější", "bg-yellow-100 text-yellow-700 border-yellow-200"),
        "Low Stock" => (Tone::Danger, "Nízký stav", "bg-red-100 text-red-600 border-red-200"),
        "New" => (Tone::Info, "Novinka", "bg-blue-100 text-blue-700 border-blue-200"),
        other => (Tone::Neutral, other, "bg-muted text-muted-foreground border-border"),
    };
    BadgeStyle { label_en: badge.to_string(), label_cz: label_cz.to_string(), tone, class_name }
}
