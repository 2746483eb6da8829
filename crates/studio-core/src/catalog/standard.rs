use super::{PriceUnit, ServiceCategory, ServiceItem};

#[allow(clippy::too_many_arguments)]
fn item(
    id: &str,
    name: &str,
    description: &str,
    why_needed: &str,
    benefits: &[&str],
    price: f64,
    price_unit: PriceUnit,
    category: ServiceCategory,
) -> ServiceItem {
    ServiceItem {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        why_needed: why_needed.to_string(),
        benefits: benefits.iter().map(|benefit| benefit.to_string()).collect(),
        price,
        price_unit,
        category,
        required: false,
        depends_on: None,
        included_in: None,
    }
}

pub(super) fn standard_items() -> Vec<ServiceItem> {
    vec![
        item(
            "site-onepage",
            "Sito One Page",
            "Un'unica pagina verticale con tutte le informazioni essenziali dell'attività.",
            "È il punto di partenza più rapido per essere presenti online con un budget contenuto.",
            &[
                "Online in pochi giorni",
                "Ottimizzato per la navigazione da mobile",
                "Sezione contatti con modulo integrato",
            ],
            890.0,
            PriceUnit::OneTime,
            ServiceCategory::SiteType,
        ),
        item(
            "site-vetrina",
            "Sito Vetrina",
            "Sito multi-pagina per presentare azienda, servizi e portfolio.",
            "Dà spazio a ogni servizio con una pagina dedicata, indicizzabile singolarmente.",
            &[
                "Fino a 8 pagine strutturate",
                "Blog predisposto",
                "Struttura pensata per la SEO",
            ],
            1490.0,
            PriceUnit::OneTime,
            ServiceCategory::SiteType,
        ),
        item(
            "site-ecommerce",
            "E-commerce",
            "Negozio online completo di catalogo, carrello e pagamenti.",
            "Serve quando il sito deve vendere direttamente, non solo presentare.",
            &[
                "Catalogo prodotti illimitato",
                "Pagamenti con carta e PayPal",
                "Gestione ordini e spedizioni",
            ],
            3900.0,
            PriceUnit::OneTime,
            ServiceCategory::SiteType,
        ),
        item(
            "site-custom",
            "Portale su misura",
            "Applicazione web con aree riservate, flussi e integrazioni dedicate.",
            "Quando i processi aziendali non rientrano in un sito standard.",
            &[
                "Analisi funzionale dedicata",
                "Integrazione con gestionali esistenti",
                "Architettura scalabile",
            ],
            6500.0,
            PriceUnit::OneTime,
            ServiceCategory::SiteType,
        ),
        item(
            "design-logo",
            "Logo e identità visiva",
            "Progettazione del logo e della palette coordinata.",
            "Un'identità riconoscibile rende coerente ogni materiale, dal sito ai social.",
            &[
                "Tre proposte iniziali",
                "File vettoriali consegnati",
                "Mini brand book",
            ],
            450.0,
            PriceUnit::OneTime,
            ServiceCategory::Design,
        ),
        item(
            "design-restyling",
            "Restyling grafico",
            "Rinnovo dell'aspetto di un sito esistente senza rifarne la struttura.",
            "Un sito datato comunica trascuratezza anche quando i contenuti sono validi.",
            &["Analisi del sito attuale", "Nuova veste grafica", "Migrazione dei contenuti"],
            790.0,
            PriceUnit::OneTime,
            ServiceCategory::Design,
        ),
        item(
            "content-copywriting",
            "Copywriting pagine",
            "Testi professionali scritti per ogni pagina del sito.",
            "I testi scritti per il web convertono meglio di quelli ricopiati dalle brochure.",
            &[
                "Tono di voce coerente",
                "Testi orientati alla conversione",
                "Parole chiave concordate",
            ],
            120.0,
            PriceUnit::PerPage,
            ServiceCategory::Content,
        ),
        item(
            "content-photo",
            "Servizio fotografico",
            "Mezza giornata di scatti professionali in sede.",
            "Le foto di repertorio si riconoscono subito e allontanano i clienti.",
            &["Fino a 40 scatti ritoccati", "Diritti d'uso inclusi", "Formati web e stampa"],
            480.0,
            PriceUnit::OneTime,
            ServiceCategory::Content,
        ),
        item(
            "content-blog",
            "Piano editoriale blog",
            "Due articoli al mese scritti e pubblicati dalla redazione.",
            "Un blog aggiornato porta traffico organico costante nel tempo.",
            &[
                "Calendario editoriale condiviso",
                "Articoli ottimizzati SEO",
                "Pubblicazione inclusa",
            ],
            240.0,
            PriceUnit::Monthly,
            ServiceCategory::Content,
        ),
        item(
            "seo-audit",
            "Audit SEO tecnico",
            "Analisi completa di indicizzazione, velocità e struttura.",
            "Prima di investire in visibilità serve sapere cosa frena il sito.",
            &["Report con priorità", "Analisi dei competitor", "Piano di intervento"],
            350.0,
            PriceUnit::OneTime,
            ServiceCategory::Seo,
        ),
        item(
            "seo-onpage",
            "Ottimizzazione SEO on-page",
            "Ottimizzazione di titoli, meta tag e contenuti pagina per pagina.",
            "Senza basi on-page ogni altra attività SEO rende meno.",
            &["Meta tag riscritti", "Struttura heading corretta", "Dati strutturati"],
            65.0,
            PriceUnit::PerPage,
            ServiceCategory::Seo,
        ),
        item(
            "seo-local",
            "SEO locale e profilo Google",
            "Presidio del profilo Google Business e delle ricerche di zona.",
            "Per le attività con sede fisica le ricerche locali valgono più di quelle nazionali.",
            &["Profilo Google ottimizzato", "Gestione recensioni", "Report trimestrale"],
            290.0,
            PriceUnit::Yearly,
            ServiceCategory::Seo,
        ),
        item(
            "mkt-ads",
            "Gestione campagne Ads",
            "Campagne Google e Meta gestite e ottimizzate ogni mese.",
            "Le campagne lasciate a se stesse bruciano budget senza risultati.",
            &["Budget pubblicitario escluso", "Report mensile", "A/B test continui"],
            390.0,
            PriceUnit::Monthly,
            ServiceCategory::Marketing,
        ),
        item(
            "mkt-social",
            "Gestione social",
            "Piano editoriale e pubblicazione su due canali social.",
            "Profili fermi da mesi scoraggiano chi vi cerca prima di contattarvi.",
            &["8 post al mese", "Grafiche coordinate", "Risposta ai commenti"],
            290.0,
            PriceUnit::Monthly,
            ServiceCategory::Marketing,
        ),
        item(
            "mkt-newsletter",
            "Piano newsletter",
            "Invio trimestrale di newsletter alla vostra base contatti.",
            "La mailing list è l'unico canale che non dipende da un algoritmo.",
            &["Template dedicato", "Segmentazione contatti", "Statistiche di apertura"],
            390.0,
            PriceUnit::Quarterly,
            ServiceCategory::Marketing,
        ),
        ServiceItem {
            required: true,
            ..item(
                "infra-hosting",
                "Hosting gestito e dominio",
                "Hosting su server europei, certificato SSL e rinnovo dominio.",
                "Senza un hosting affidabile ogni altro investimento sul sito è a rischio.",
                &["Backup giornalieri", "Certificato SSL incluso", "Monitoraggio uptime"],
                180.0,
                PriceUnit::Yearly,
                ServiceCategory::Infrastructure,
            )
        },
        ServiceItem {
            depends_on: Some("infra-hosting".to_string()),
            ..item(
                "infra-mail",
                "Caselle email professionali",
                "Caselle di posta sul vostro dominio con antispam gestito.",
                "Un indirizzo @gmail sul biglietto da visita toglie credibilità.",
                &["5 caselle incluse", "Webmail e app mobile", "Antispam gestito"],
                90.0,
                PriceUnit::Yearly,
                ServiceCategory::Infrastructure,
            )
        },
        ServiceItem {
            depends_on: Some("infra-hosting".to_string()),
            ..item(
                "support-maintenance",
                "Manutenzione e aggiornamenti",
                "Aggiornamenti tecnici, piccole modifiche e assistenza prioritaria.",
                "Un sito non aggiornato accumula vulnerabilità e smette di funzionare in silenzio.",
                &[
                    "Aggiornamenti mensili",
                    "2 interventi sui contenuti al mese",
                    "Assistenza prioritaria",
                ],
                49.0,
                PriceUnit::Monthly,
                ServiceCategory::Support,
            )
        },
        item(
            "support-hours",
            "Interventi a consumo",
            "Ore di sviluppo o consulenza da usare quando servono.",
            "Per le richieste spot non coperte dal piano di manutenzione.",
            &["Nessun vincolo mensile", "Rendicontazione puntuale", "Validità 12 mesi"],
            60.0,
            PriceUnit::PerHour,
            ServiceCategory::Support,
        ),
        item(
            "support-training",
            "Formazione all'uso del sito",
            "Sessione di formazione per gestire contenuti e ordini in autonomia.",
            "Saper aggiornare il sito da soli riduce i costi di gestione nel tempo.",
            &["Sessione registrata", "Manuale operativo", "Follow-up a 30 giorni"],
            220.0,
            PriceUnit::OneTime,
            ServiceCategory::Support,
        ),
    ]
}
