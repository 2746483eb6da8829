use studio_core::catalog::{format_eur, PriceUnit, ServiceCatalog, ServiceCategory, ServiceItem};
use studio_core::pricing::{
    compute_discounted_total, compute_totals, itemize, ResolutionPolicy, SelectedService,
};
use studio_core::quote::{render_quote_document_at, BriefData};

fn synthetic_catalog() -> ServiceCatalog {
    let item = |id: &str, price: f64, unit: PriceUnit, category: ServiceCategory| ServiceItem {
        id: id.to_string(),
        name: format!("Servizio {id}"),
        description: "Descrizione.".to_string(),
        why_needed: "Motivazione.".to_string(),
        benefits: vec!["Beneficio".to_string()],
        price,
        price_unit: unit,
        category,
        required: false,
        depends_on: None,
        included_in: None,
    };
    ServiceCatalog::new(vec![
        item("base", 1200.0, PriceUnit::OneTime, ServiceCategory::SiteType),
        item("copy", 100.0, PriceUnit::PerPage, ServiceCategory::Content),
        item("care", 50.0, PriceUnit::Monthly, ServiceCategory::Support),
        item("host", 180.0, PriceUnit::Yearly, ServiceCategory::Infrastructure),
    ])
}

#[test]
fn totals_split_by_billing_cadence() {
    let catalog = synthetic_catalog();
    let selections = vec![
        SelectedService {
            quantity: 4,
            ..SelectedService::new("copy")
        },
        SelectedService::new("care"),
        SelectedService::new("host"),
    ];

    let totals = compute_totals(&catalog, Some("base"), &selections);
    assert_eq!(totals.total, 1200.0 + 400.0);
    assert_eq!(totals.recurring, 50.0 + 180.0);
}

#[test]
fn totals_are_additive_per_selection() {
    let catalog = synthetic_catalog();
    let mut selections = Vec::new();
    let mut previous = compute_totals(&catalog, None, &selections);

    for (id, expected_delta, recurring) in
        [("copy", 100.0, false), ("care", 50.0, true), ("copy", 100.0, false)]
    {
        selections.push(SelectedService::new(id));
        let next = compute_totals(&catalog, None, &selections);
        if recurring {
            assert_eq!(next.recurring, previous.recurring + expected_delta);
            assert_eq!(next.total, previous.total);
        } else {
            assert_eq!(next.total, previous.total + expected_delta);
            assert_eq!(next.recurring, previous.recurring);
        }
        previous = next;
    }
}

#[test]
fn discount_bounds_hold_across_the_range() {
    for percent in [0.0, 1.0, 12.5, 50.0, 99.0, 100.0] {
        let discounted = compute_discounted_total(1000.0, percent);
        assert!(discounted <= 1000.0);
        if percent == 0.0 {
            assert_eq!(discounted, 1000.0);
        }
    }
}

#[test]
fn strict_itemization_names_the_broken_reference() {
    let catalog = synthetic_catalog();
    let selections = vec![SelectedService::new("retired-service")];
    let err = itemize(&catalog, None, &selections, ResolutionPolicy::Strict)
        .expect_err("stale selection must surface");
    assert!(err.to_string().contains("retired-service"));
}

#[test]
fn brief_to_document_round_trip() {
    let catalog = synthetic_catalog();
    let mut brief = BriefData::new();
    brief.client_info.company = "Pasticceria Voltaire".to_string();
    brief.selected_site_type = Some("base".to_string());
    brief.toggle_service("copy");
    brief.adjust_quantity("copy", 2);
    brief.toggle_service("care");
    brief.discount_percent = 25.0;
    brief.recompute(&catalog);

    assert_eq!(brief.total, 1200.0 + 300.0);
    assert_eq!(brief.recurring, 50.0);
    assert_eq!(brief.discounted_total(), 1125.0);

    let today = chrono::NaiveDate::from_ymd_opt(2026, 1, 15).expect("valid date");
    let html = render_quote_document_at(&brief, &catalog, today);
    assert!(html.contains("Pasticceria Voltaire"));
    assert!(html.contains("Servizio copy (x3)"));
    assert!(html.contains(&format!("Sconto 25%: -{}", format_eur(375.0))));
    assert!(html.contains(&format_eur(1125.0)));
    assert!(html.contains("Costi ricorrenti"));
    assert!(html.contains("14/02/2026"));
}
