//! Service catalog entries for the public website.

use once_cell::sync::Lazy;
use serde::Serialize;

/// A single entry in the service catalog shown on the website.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ServiceItem {
    /// URL-safe identifier
    pub id: &'static str,

    /// Display title
    pub title: &'static str,

    /// One-line description
    pub description: &'static str,

    /// Icon name used by the frontend
    pub icon: &'static str,
}

static CATALOG: Lazy<Vec<ServiceItem>> = Lazy::new(|| {
    vec![
        ServiceItem {
            id: "vlakke-chape",
            title: "Chape & Uitvlakwerken",
            description: "Perfect vlakke ondergrond voor elke vloer.",
            icon: "Layers",
        },
        ServiceItem {
            id: "vloerisolatie",
            title: "Vloerisolatie",
            description: "Warme voeten en lagere energiefactuur.",
            icon: "Thermometer",
        },
        ServiceItem {
            id: "vloerverwarming",
            title: "Vloerverwarming",
            description: "Comfort door gelijkmatige warmteverdeling.",
            icon: "Flame",
        },
        ServiceItem {
            id: "gietvloeren",
            title: "Giet- & Ploegvloeren",
            description: "Strakke, naadloze afwerking voor modern interieur.",
            icon: "Droplet",
        },
        ServiceItem {
            id: "tegelwerken",
            title: "Tegelwerken",
            description: "Vakkundige plaatsing van tegels en natuursteen.",
            icon: "Square",
        },
    ]
});

/// The fixed, ordered service catalog.
pub fn service_catalog() -> &'static [ServiceItem] {
    &CATALOG
}
