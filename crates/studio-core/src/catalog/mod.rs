//! The priced service catalog: immutable configuration describing
//! everything the agency sells, from base site packages to recurring
//! maintenance plans.

mod standard;

use serde::{Deserialize, Serialize};

/// Billing cadence attached to a catalog price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceUnit {
    OneTime,
    Monthly,
    Quarterly,
    Yearly,
    PerPage,
    PerHour,
}

impl PriceUnit {
    /// Suffix appended to a formatted price ("" for one-time amounts).
    pub const fn label(self) -> &'static str {
        match self {
            Self::OneTime => "",
            Self::Monthly => "/mese",
            Self::Quarterly => "/trimestre",
            Self::Yearly => "/anno",
            Self::PerPage => "/pagina",
            Self::PerHour => "/ora",
        }
    }

    /// Classification table routing an amount into the recurring or
    /// one-time bucket of a quote.
    pub const fn is_recurring(self) -> bool {
        matches!(self, Self::Monthly | Self::Quarterly | Self::Yearly)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceCategory {
    SiteType,
    Design,
    Content,
    Seo,
    Marketing,
    Infrastructure,
    Support,
}

impl ServiceCategory {
    pub const fn ordered() -> [Self; 7] {
        [
            Self::SiteType,
            Self::Design,
            Self::Content,
            Self::Seo,
            Self::Marketing,
            Self::Infrastructure,
            Self::Support,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::SiteType => "Tipologia di sito",
            Self::Design => "Design",
            Self::Content => "Contenuti",
            Self::Seo => "SEO",
            Self::Marketing => "Marketing",
            Self::Infrastructure => "Infrastruttura",
            Self::Support => "Assistenza",
        }
    }
}

/// One sellable offering. `required`, `depends_on`, and `included_in`
/// are descriptive metadata for the brief builder UI; nothing in the
/// engines enforces them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub why_needed: String,
    pub benefits: Vec<String>,
    pub price: f64,
    pub price_unit: PriceUnit,
    pub category: ServiceCategory,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depends_on: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub included_in: Option<String>,
}

/// Immutable lookup over the configured service list. Engines receive
/// a catalog as a parameter so tests can run against synthetic ones.
#[derive(Debug, Clone)]
pub struct ServiceCatalog {
    items: Vec<ServiceItem>,
}

impl ServiceCatalog {
    pub fn new(items: Vec<ServiceItem>) -> Self {
        Self { items }
    }

    /// The standard agency offering.
    pub fn standard() -> Self {
        Self::new(standard::standard_items())
    }

    pub fn find(&self, id: &str) -> Option<&ServiceItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn items(&self) -> &[ServiceItem] {
        &self.items
    }

    pub fn site_types(&self) -> Vec<&ServiceItem> {
        self.items
            .iter()
            .filter(|item| item.category == ServiceCategory::SiteType)
            .collect()
    }

    pub fn by_category(&self, category: ServiceCategory) -> Vec<&ServiceItem> {
        self.items
            .iter()
            .filter(|item| item.category == category)
            .collect()
    }
}

/// Format an amount as euros with it-IT thousands grouping and no
/// decimals ("€ 1.250"). Non-finite amounts render as zero.
pub fn format_eur(amount: f64) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    let rounded = amount.round() as i64;
    let negative = rounded < 0;
    let digits = rounded.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 4);
    let offset = digits.len() % 3;
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (index + 3 - offset) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    if negative {
        format!("-€ {grouped}")
    } else {
        format!("€ {grouped}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_covers_every_category() {
        let catalog = ServiceCatalog::standard();
        for category in ServiceCategory::ordered() {
            assert!(
                !catalog.by_category(category).is_empty(),
                "category {:?} has no offering",
                category
            );
        }
        assert!(catalog.site_types().len() >= 3);
    }

    #[test]
    fn standard_catalog_ids_are_unique() {
        let catalog = ServiceCatalog::standard();
        for item in catalog.items() {
            let occurrences = catalog
                .items()
                .iter()
                .filter(|other| other.id == item.id)
                .count();
            assert_eq!(occurrences, 1, "duplicate catalog id {}", item.id);
        }
    }

    #[test]
    fn find_resolves_known_ids_only() {
        let catalog = ServiceCatalog::standard();
        assert!(catalog.find("site-vetrina").is_some());
        assert!(catalog.find("definitely-not-a-service").is_none());
    }

    #[test]
    fn recurring_classification_matches_billing_cadence() {
        assert!(PriceUnit::Monthly.is_recurring());
        assert!(PriceUnit::Quarterly.is_recurring());
        assert!(PriceUnit::Yearly.is_recurring());
        assert!(!PriceUnit::OneTime.is_recurring());
        assert!(!PriceUnit::PerPage.is_recurring());
        assert!(!PriceUnit::PerHour.is_recurring());
    }

    #[test]
    fn eur_formatting_groups_thousands() {
        assert_eq!(format_eur(0.0), "€ 0");
        assert_eq!(format_eur(950.0), "€ 950");
        assert_eq!(format_eur(1250.0), "€ 1.250");
        assert_eq!(format_eur(12500.4), "€ 12.500");
        assert_eq!(format_eur(1_234_567.0), "€ 1.234.567");
        assert_eq!(format_eur(-1250.0), "-€ 1.250");
        assert_eq!(format_eur(f64::NAN), "€ 0");
    }
}
