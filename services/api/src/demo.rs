use crate::infra::{catalog, InMemoryLeadNotifier, InMemoryLeadRepository};
use chrono::Local;
use clap::Args;
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Arc;
use studio_core::config::AppConfig;
use studio_core::error::AppError;
use studio_core::quiz::{standard_funnel, standard_pricing_model, LeadSubmission, QuizLeadService};
use studio_core::quote::{render_quote_document_at, BriefData};

#[derive(Args, Debug, Default)]
pub(crate) struct QuoteGenerateArgs {
    /// Path to a brief JSON file. Omit to use the built-in demo brief.
    #[arg(long)]
    pub(crate) input: Option<PathBuf>,
    /// Write the HTML document here instead of stdout.
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
    /// Override the brief's discount percentage.
    #[arg(long)]
    pub(crate) discount: Option<f64>,
    /// Override the brief's validity window in days.
    #[arg(long)]
    pub(crate) validity_days: Option<u16>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Discount applied to the demo quote.
    #[arg(long)]
    pub(crate) discount: Option<f64>,
}

fn demo_brief() -> BriefData {
    let mut brief = BriefData::new();
    brief.client_info.company = "Trattoria Da Silvana".to_string();
    brief.client_info.contact_name = "Silvana Moretti".to_string();
    brief.client_info.email = "info@dasilvana.it".to_string();
    brief.current_situation.has_website = false;
    brief.objectives.goals = vec![
        "Ricevere prenotazioni online".to_string(),
        "Farsi trovare sulle ricerche di zona".to_string(),
    ];
    brief.selected_site_type = Some("site-vetrina".to_string());
    brief.toggle_service("content-copywriting");
    brief.adjust_quantity("content-copywriting", 5);
    brief.toggle_service("seo-local");
    brief.toggle_service("infra-hosting");
    brief.toggle_service("support-maintenance");
    brief
}

fn load_brief(path: Option<&PathBuf>) -> Result<BriefData, AppError> {
    match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)?;
            let brief = serde_json::from_str(&raw)
                .map_err(|err| std::io::Error::new(ErrorKind::InvalidData, err))?;
            Ok(brief)
        }
        None => Ok(demo_brief()),
    }
}

pub(crate) fn run_quote_generate(args: QuoteGenerateArgs) -> Result<(), AppError> {
    let QuoteGenerateArgs {
        input,
        output,
        discount,
        validity_days,
    } = args;

    let config = AppConfig::load()?;
    let mut brief = load_brief(input.as_ref())?;
    if let Some(discount) = discount {
        brief.discount_percent = discount;
    }
    // precedence: --validity-days flag, then the brief file, then the
    // configured default
    if let Some(validity_days) = validity_days {
        brief.validity_days = Some(validity_days);
    }
    brief.validity_days.get_or_insert(config.quote.validity_days);
    brief.recompute(catalog());

    let html = render_quote_document_at(&brief, catalog(), Local::now().date_naive());
    match output {
        Some(path) => {
            std::fs::write(&path, html)?;
            println!("quote written to {}", path.display());
        }
        None => println!("{html}"),
    }
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    println!("Agency back-office demo");

    let mut brief = demo_brief();
    if let Some(discount) = args.discount {
        brief.discount_percent = discount;
    }
    let totals = brief.recompute(catalog());

    println!("\nBrief for {}", brief.client_info.company);
    println!("  one-time total: {:.2}", totals.total);
    println!("  recurring:      {:.2}", totals.recurring);
    if brief.discount_percent > 0.0 {
        println!(
            "  after {}% discount: {:.2}",
            brief.discount_percent,
            brief.discounted_total()
        );
    }

    let notifier = Arc::new(InMemoryLeadNotifier::default());
    let service = QuizLeadService::new(
        standard_funnel(),
        standard_pricing_model(),
        Arc::new(InMemoryLeadRepository::default()),
        notifier.clone(),
    );

    let mut answers = HashMap::new();
    answers.insert("project_type".to_string(), "vetrina".to_string());
    answers.insert("pages".to_string(), "medium".to_string());
    answers.insert("content".to_string(), "partial".to_string());
    answers.insert("timeline".to_string(), "quarter".to_string());

    let lead = service
        .capture(LeadSubmission {
            name: "Silvana Moretti".to_string(),
            email: "info@dasilvana.it".to_string(),
            phone: None,
            company: Some(brief.client_info.company.clone()),
            answers,
        })
        .map_err(|err| std::io::Error::new(ErrorKind::Other, err))?;

    println!("\nQuiz lead {} captured", lead.lead_id.0);
    println!(
        "  estimated range: {} - {} (score {})",
        lead.estimate.min, lead.estimate.max, lead.estimate.score
    );
    println!("  notifications sent: {}", notifier.sent().len());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_brief_resolves_entirely_against_the_standard_catalog() {
        let mut brief = demo_brief();
        let totals = brief.recompute(catalog());
        assert!(totals.total > 0.0);
        assert!(totals.recurring > 0.0);
        for selection in &brief.selected_services {
            assert!(
                catalog().find(&selection.service_id).is_some(),
                "demo brief references unknown service {}",
                selection.service_id
            );
        }
    }
}
