use crate::catalog::ServiceCatalog;
use crate::pricing::{compute_discounted_total, compute_totals, QuoteTotals, SelectedService};
use serde::{Deserialize, Serialize};

/// Contact block of a brief.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientInfo {
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub contact_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

/// Where the client stands today, as collected by the brief builder.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentSituation {
    #[serde(default)]
    pub has_website: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,
    #[serde(default)]
    pub pain_points: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Objectives {
    #[serde(default)]
    pub goals: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_audience: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Aggregate state of the brief builder. Mutated field by field while
/// the operator walks the steps, then read once at generate time.
/// `total` and `recurring` are written back by [`BriefData::recompute`]
/// rather than derived lazily.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BriefData {
    #[serde(default)]
    pub client_info: ClientInfo,
    #[serde(default)]
    pub current_situation: CurrentSituation,
    #[serde(default)]
    pub objectives: Objectives,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_site_type: Option<String>,
    #[serde(default)]
    pub selected_services: Vec<SelectedService>,
    #[serde(default)]
    pub total: f64,
    #[serde(default)]
    pub recurring: f64,
    #[serde(default)]
    pub discount_percent: f64,
    /// Days the quote stays valid. `None` means the caller did not
    /// choose one; [`BriefData::effective_validity_days`] falls back
    /// to [`DEFAULT_VALIDITY_DAYS`], and the API layer fills in its
    /// configured default before rendering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validity_days: Option<u16>,
}

pub const DEFAULT_VALIDITY_DAYS: u16 = 30;

impl Default for BriefData {
    fn default() -> Self {
        Self::new()
    }
}

impl BriefData {
    /// Empty brief, the starting point of the builder flow.
    pub fn new() -> Self {
        Self {
            client_info: ClientInfo::default(),
            current_situation: CurrentSituation::default(),
            objectives: Objectives::default(),
            selected_site_type: None,
            selected_services: Vec::new(),
            total: 0.0,
            recurring: 0.0,
            discount_percent: 0.0,
            validity_days: None,
        }
    }

    pub fn effective_validity_days(&self) -> u16 {
        self.validity_days.unwrap_or(DEFAULT_VALIDITY_DAYS)
    }

    /// Add the service if absent, remove it if present.
    pub fn toggle_service(&mut self, service_id: &str) {
        if let Some(position) = self
            .selected_services
            .iter()
            .position(|selection| selection.service_id == service_id)
        {
            self.selected_services.remove(position);
        } else {
            self.selected_services
                .push(SelectedService::new(service_id));
        }
    }

    /// Adjust a selection's quantity by `delta`, flooring at 1.
    /// Unknown ids are ignored.
    pub fn adjust_quantity(&mut self, service_id: &str, delta: i32) {
        if let Some(selection) = self
            .selected_services
            .iter_mut()
            .find(|selection| selection.service_id == service_id)
        {
            let current = i64::from(selection.quantity.max(1));
            selection.quantity = current
                .saturating_add(i64::from(delta))
                .clamp(1, i64::from(u32::MAX)) as u32;
        }
    }

    /// Recompute and write back the totals from the current selections.
    pub fn recompute(&mut self, catalog: &ServiceCatalog) -> QuoteTotals {
        let totals = compute_totals(
            catalog,
            self.selected_site_type.as_deref(),
            &self.selected_services,
        );
        self.total = totals.total;
        self.recurring = totals.recurring;
        totals
    }

    pub fn discounted_total(&self) -> f64 {
        compute_discounted_total(self.total, self.discount_percent)
    }

    pub fn discount_amount(&self) -> f64 {
        self.total - self.discounted_total()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_adds_then_removes() {
        let mut brief = BriefData::new();
        brief.toggle_service("seo-audit");
        assert_eq!(brief.selected_services.len(), 1);
        brief.toggle_service("seo-audit");
        assert!(brief.selected_services.is_empty());
    }

    #[test]
    fn quantity_adjustment_floors_at_one() {
        let mut brief = BriefData::new();
        brief.toggle_service("content-copywriting");
        brief.adjust_quantity("content-copywriting", 4);
        assert_eq!(brief.selected_services[0].quantity, 5);
        brief.adjust_quantity("content-copywriting", -100);
        assert_eq!(brief.selected_services[0].quantity, 1);
        // ids not in the selection are a no-op
        brief.adjust_quantity("ghost", 3);
        assert_eq!(brief.selected_services.len(), 1);
    }

    #[test]
    fn recompute_writes_totals_back() {
        let catalog = ServiceCatalog::standard();
        let mut brief = BriefData::new();
        brief.selected_site_type = Some("site-vetrina".to_string());
        brief.toggle_service("support-maintenance");

        let totals = brief.recompute(&catalog);
        assert_eq!(brief.total, totals.total);
        assert_eq!(brief.recurring, totals.recurring);
        assert_eq!(brief.total, 1490.0);
        assert_eq!(brief.recurring, 49.0);
    }

    #[test]
    fn validity_falls_back_to_thirty_days_when_unset() {
        let brief = BriefData::new();
        assert_eq!(brief.validity_days, None);
        assert_eq!(brief.effective_validity_days(), 30);

        let parsed: BriefData =
            serde_json::from_str(r#"{ "validityDays": 14 }"#).expect("brief parses");
        assert_eq!(parsed.validity_days, Some(14));
        assert_eq!(parsed.effective_validity_days(), 14);
    }

    #[test]
    fn discount_applies_to_total_only() {
        let mut brief = BriefData::new();
        brief.total = 1000.0;
        brief.recurring = 200.0;
        brief.discount_percent = 20.0;
        assert_eq!(brief.discounted_total(), 800.0);
        assert_eq!(brief.discount_amount(), 200.0);
        assert_eq!(brief.recurring, 200.0);
    }
}
