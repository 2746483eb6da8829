use super::scoring::{ContactField, PricingModel, QuizOption, QuizStep};

fn option(value: &str, label: &str, score: i32) -> QuizOption {
    QuizOption {
        value: value.to_string(),
        label: label.to_string(),
        score: Some(score),
        disabled: false,
    }
}

fn radio(id: &str, title: &str, options: Vec<QuizOption>) -> QuizStep {
    QuizStep::Radio {
        id: id.to_string(),
        title: title.to_string(),
        options,
    }
}

/// The lead-qualification funnel shipped with the marketing site:
/// scored radio screens, then the contact form, then the summary.
pub fn standard_funnel() -> Vec<QuizStep> {
    vec![
        radio(
            "project_type",
            "Che tipo di progetto hai in mente?",
            vec![
                option("onepage", "Una pagina di presentazione", 5),
                option("vetrina", "Un sito vetrina multi-pagina", 15),
                option("ecommerce", "Un negozio online", 40),
                option("custom", "Un portale o gestionale su misura", 60),
            ],
        ),
        radio(
            "pages",
            "Quante pagine immagini per il sito?",
            vec![
                option("small", "Fino a 5", 0),
                option("medium", "Da 6 a 15", 10),
                option("large", "Più di 15", 25),
            ],
        ),
        radio(
            "content",
            "I testi e le immagini sono già pronti?",
            vec![
                option("ready", "Sì, tutto pronto", 0),
                option("partial", "In parte", 10),
                option("none", "No, servono da zero", 20),
            ],
        ),
        radio(
            "features",
            "Servono funzionalità particolari?",
            vec![
                option("none", "No, solo presentazione", 0),
                option("booking", "Prenotazioni o preventivi online", 15),
                option("reserved", "Area riservata per i clienti", 25),
                option("integrations", "Integrazioni con altri software", 35),
            ],
        ),
        radio(
            "timeline",
            "Quando vorresti andare online?",
            vec![
                option("relaxed", "Senza fretta", 0),
                option("quarter", "Entro tre mesi", 5),
                option("month", "Entro un mese", 10),
            ],
        ),
        QuizStep::Contact {
            id: "contact".to_string(),
            fields: vec![
                ContactField {
                    name: "name".to_string(),
                    label: "Nome e cognome".to_string(),
                    required: true,
                },
                ContactField {
                    name: "email".to_string(),
                    label: "Email".to_string(),
                    required: true,
                },
                ContactField {
                    name: "phone".to_string(),
                    label: "Telefono".to_string(),
                    required: false,
                },
                ContactField {
                    name: "company".to_string(),
                    label: "Azienda".to_string(),
                    required: false,
                },
            ],
        },
        QuizStep::Summary {
            id: "summary".to_string(),
        },
    ]
}

/// Constants pairing with [`standard_funnel`]. A full-score run tops
/// out below the cap on purpose; the cap exists for future steps.
pub fn standard_pricing_model() -> PricingModel {
    PricingModel {
        base_min: 700.0,
        base_max: 1_200.0,
        score_multiplier_min: 35.0,
        score_multiplier_max: 55.0,
        cap_min: 500.0,
        cap_max: 15_000.0,
    }
}
