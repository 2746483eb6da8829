//! Static HTML quote rendering. Pure string assembly over totals that
//! were computed upstream; this module never recomputes them, so the
//! document can not diverge from the pricing engine's result.

use chrono::{Duration, Local, NaiveDate};

use crate::catalog::{format_eur, ServiceCatalog, ServiceCategory, ServiceItem};
use crate::pricing::SelectedService;

use super::brief::BriefData;

/// Insertion-ordered grouping of selections by resolved category.
/// First-seen category order drives the document layout, so the
/// grouping must be deterministic; selections that do not resolve are
/// left out (they contributed zero upstream as well).
fn group_by_category<'a>(
    selections: &'a [SelectedService],
    catalog: &'a ServiceCatalog,
) -> Vec<(ServiceCategory, Vec<(&'a SelectedService, &'a ServiceItem)>)> {
    let mut groups: Vec<(ServiceCategory, Vec<(&SelectedService, &ServiceItem)>)> = Vec::new();
    for selection in selections {
        let Some(item) = catalog.find(&selection.service_id) else {
            continue;
        };
        match groups.iter_mut().find(|(category, _)| *category == item.category) {
            Some((_, entries)) => entries.push((selection, item)),
            None => groups.push((item.category, vec![(selection, item)])),
        }
    }
    groups
}

fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

fn line_price(selection: &SelectedService, item: &ServiceItem) -> f64 {
    let unit_price = selection.custom_price.unwrap_or(item.price);
    let unit_price = if unit_price.is_finite() { unit_price } else { 0.0 };
    unit_price * f64::from(selection.effective_quantity())
}

fn push_line_item(html: &mut String, selection: &SelectedService, item: &ServiceItem) {
    let quantity = selection.effective_quantity();
    let name = if quantity > 1 {
        format!("{} (x{})", escape_html(&item.name), quantity)
    } else {
        escape_html(&item.name)
    };

    html.push_str("<div class=\"item\">\n");
    html.push_str(&format!("<h3>{name}</h3>\n"));
    html.push_str(&format!(
        "<p class=\"description\">{}</p>\n",
        escape_html(&item.description)
    ));
    html.push_str(&format!(
        "<p class=\"why\"><strong>Perché serve:</strong> {}</p>\n",
        escape_html(&item.why_needed)
    ));
    if !item.benefits.is_empty() {
        html.push_str("<ul class=\"benefits\">\n");
        for benefit in &item.benefits {
            html.push_str(&format!("<li>{}</li>\n", escape_html(benefit)));
        }
        html.push_str("</ul>\n");
    }
    html.push_str(&format!(
        "<p class=\"price\">{}{}</p>\n",
        format_eur(line_price(selection, item)),
        item.price_unit.label()
    ));
    if let Some(notes) = &selection.notes {
        html.push_str(&format!("<p class=\"notes\">{}</p>\n", escape_html(notes)));
    }
    html.push_str("</div>\n");
}

fn push_group(html: &mut String, label: &str, entries: &[(&SelectedService, &ServiceItem)]) {
    html.push_str(&format!("<section class=\"group\">\n<h2>{}</h2>\n", escape_html(label)));
    for (selection, item) in entries {
        push_line_item(html, selection, item);
    }
    html.push_str("</section>\n");
}

/// Render the quote for `brief` against `catalog`, dating it today.
pub fn render_quote_document(brief: &BriefData, catalog: &ServiceCatalog) -> String {
    render_quote_document_at(brief, catalog, Local::now().date_naive())
}

/// Deterministic variant taking the issue date explicitly.
pub fn render_quote_document_at(
    brief: &BriefData,
    catalog: &ServiceCatalog,
    today: NaiveDate,
) -> String {
    let valid_until = today + Duration::days(i64::from(brief.effective_validity_days()));

    let mut html = String::with_capacity(8 * 1024);
    html.push_str("<!DOCTYPE html>\n<html lang=\"it\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<title>Preventivo</title>\n<style>\n");
    html.push_str(
        "body{font-family:Georgia,serif;max-width:760px;margin:2rem auto;color:#1a1a1a;}\
         h1{border-bottom:2px solid #1a1a1a;padding-bottom:.5rem;}\
         .group h2{margin-top:2rem;color:#333;}\
         .item{margin:1rem 0;padding-bottom:1rem;border-bottom:1px solid #ddd;}\
         .item .price{font-weight:bold;text-align:right;}\
         .benefits{margin:.25rem 0 .5rem 1.25rem;}\
         .totals{margin-top:2rem;text-align:right;}\
         .totals .grand{font-size:1.25rem;font-weight:bold;}\
         .validity{margin-top:2rem;font-style:italic;color:#555;}",
    );
    html.push_str("\n</style>\n</head>\n<body>\n");

    html.push_str("<h1>Preventivo</h1>\n");
    html.push_str(&format!(
        "<p class=\"date\">Data: {}</p>\n",
        today.format("%d/%m/%Y")
    ));

    let client = &brief.client_info;
    if !client.company.is_empty() || !client.contact_name.is_empty() {
        html.push_str("<section class=\"client\">\n");
        if !client.company.is_empty() {
            html.push_str(&format!("<p><strong>{}</strong></p>\n", escape_html(&client.company)));
        }
        if !client.contact_name.is_empty() {
            html.push_str(&format!("<p>{}</p>\n", escape_html(&client.contact_name)));
        }
        if !client.email.is_empty() {
            html.push_str(&format!("<p>{}</p>\n", escape_html(&client.email)));
        }
        html.push_str("</section>\n");
    }

    // The site-type group always opens the document under its fixed
    // label, whatever the resolved item's own category says.
    if let Some(site_type_id) = brief.selected_site_type.as_deref() {
        if let Some(item) = catalog.find(site_type_id) {
            let selection = SelectedService::new(site_type_id);
            push_group(
                &mut html,
                ServiceCategory::SiteType.label(),
                &[(&selection, item)],
            );
        }
    }

    for (category, entries) in group_by_category(&brief.selected_services, catalog) {
        push_group(&mut html, category.label(), &entries);
    }

    html.push_str("<section class=\"totals\">\n");
    html.push_str(&format!(
        "<p>Subtotale una tantum: {}</p>\n",
        format_eur(brief.total)
    ));
    if brief.discount_percent > 0.0 {
        html.push_str(&format!(
            "<p class=\"discount\">Sconto {}%: -{}</p>\n",
            brief.discount_percent,
            format_eur(brief.discount_amount())
        ));
    }
    html.push_str(&format!(
        "<p class=\"grand\">Totale: {}</p>\n",
        format_eur(brief.discounted_total())
    ));
    if brief.recurring > 0.0 {
        html.push_str(&format!(
            "<p class=\"recurring\">Costi ricorrenti: {} (non soggetti a sconto)</p>\n",
            format_eur(brief.recurring)
        ));
    }
    html.push_str("</section>\n");

    html.push_str(&format!(
        "<p class=\"validity\">Preventivo valido fino al {}.</p>\n",
        valid_until.format("%d/%m/%Y")
    ));

    html.push_str("</body>\n</html>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PriceUnit;

    fn dated() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 10).expect("valid date")
    }

    fn sample_brief(catalog: &ServiceCatalog) -> BriefData {
        let mut brief = BriefData::new();
        brief.client_info.company = "Ferri Arredamenti".to_string();
        brief.client_info.contact_name = "Giulia Ferri".to_string();
        brief.selected_site_type = Some("site-vetrina".to_string());
        brief.toggle_service("content-copywriting");
        brief.adjust_quantity("content-copywriting", 5);
        brief.toggle_service("support-maintenance");
        brief.toggle_service("seo-audit");
        brief.recompute(catalog);
        brief
    }

    #[test]
    fn document_is_selfcontained_html_with_grouped_items() {
        let catalog = ServiceCatalog::standard();
        let brief = sample_brief(&catalog);
        let html = render_quote_document_at(&brief, &catalog, dated());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Ferri Arredamenti"));
        // site type leads the document
        let site_type_pos = html.find("Tipologia di sito").expect("site type group present");
        let content_pos = html.find("Contenuti").expect("content group present");
        assert!(site_type_pos < content_pos);
        // quantity marker on the multi-page copywriting line
        assert!(html.contains("Copywriting pagine (x6)"));
        assert!(html.contains("/mese"));
        assert!(html.contains(&format!(
            "Subtotale una tantum: {}",
            format_eur(brief.total)
        )));
        assert!(html.contains("Preventivo valido fino al 09/04/2026."));
    }

    #[test]
    fn discount_line_appears_only_when_discounted() {
        let catalog = ServiceCatalog::standard();
        let mut brief = sample_brief(&catalog);

        let plain = render_quote_document_at(&brief, &catalog, dated());
        assert!(!plain.contains("Sconto"));

        brief.discount_percent = 10.0;
        let discounted = render_quote_document_at(&brief, &catalog, dated());
        assert!(discounted.contains("Sconto 10%"));
        assert!(discounted.contains(&format_eur(brief.discounted_total())));
    }

    #[test]
    fn recurring_note_appears_only_with_recurring_costs() {
        let catalog = ServiceCatalog::standard();
        let mut brief = BriefData::new();
        brief.toggle_service("seo-audit");
        brief.recompute(&catalog);

        let html = render_quote_document_at(&brief, &catalog, dated());
        assert!(!html.contains("Costi ricorrenti"));

        brief.toggle_service("support-maintenance");
        brief.recompute(&catalog);
        let with_recurring = render_quote_document_at(&brief, &catalog, dated());
        assert!(with_recurring.contains("Costi ricorrenti"));
    }

    #[test]
    fn grouping_preserves_first_seen_order() {
        let catalog = ServiceCatalog::standard();
        let selections = vec![
            SelectedService::new("support-hours"),
            SelectedService::new("seo-audit"),
            SelectedService::new("support-training"),
        ];
        let groups = group_by_category(&selections, &catalog);
        let categories: Vec<ServiceCategory> =
            groups.iter().map(|(category, _)| *category).collect();
        assert_eq!(
            categories,
            vec![ServiceCategory::Support, ServiceCategory::Seo]
        );
        assert_eq!(groups[0].1.len(), 2);
        assert_eq!(groups[0].1[0].1.id, "support-hours");
        assert_eq!(groups[0].1[1].1.id, "support-training");
    }

    #[test]
    fn unresolved_selections_are_omitted_from_the_document() {
        let catalog = ServiceCatalog::standard();
        let mut brief = BriefData::new();
        brief.toggle_service("ghost-service");
        brief.toggle_service("seo-audit");
        brief.recompute(&catalog);

        let html = render_quote_document_at(&brief, &catalog, dated());
        assert!(!html.contains("ghost-service"));
        assert!(html.contains("Audit SEO tecnico"));
    }

    #[test]
    fn user_text_is_escaped() {
        let catalog = ServiceCatalog::standard();
        let mut brief = BriefData::new();
        brief.client_info.company = "Rossi & Figli <srl>".to_string();
        brief.recompute(&catalog);
        let html = render_quote_document_at(&brief, &catalog, dated());
        assert!(html.contains("Rossi &amp; Figli &lt;srl&gt;"));
    }

    #[test]
    fn totals_are_inputs_not_recomputed() {
        let catalog = ServiceCatalog::standard();
        let mut brief = BriefData::new();
        brief.toggle_service("seo-audit");
        // deliberately stale totals: the document must show them as-is
        brief.total = 123.0;
        let html = render_quote_document_at(&brief, &catalog, dated());
        assert!(html.contains(&format!("Subtotale una tantum: {}", format_eur(123.0))));
    }

    #[test]
    fn unit_labels_follow_the_catalog_price_unit() {
        assert_eq!(PriceUnit::Monthly.label(), "/mese");
        let catalog = ServiceCatalog::standard();
        let mut brief = BriefData::new();
        brief.toggle_service("support-hours");
        brief.recompute(&catalog);
        let html = render_quote_document_at(&brief, &catalog, dated());
        assert!(html.contains("/ora"));
    }
}
