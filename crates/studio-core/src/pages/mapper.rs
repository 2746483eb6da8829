//! Schema-to-config mapping: applies the per-section-type layout
//! defaults and restructures nested content into the shapes the
//! rendering layer expects. Order of sections is the page's visual
//! top-to-bottom sequence and is always preserved.

use super::config::{
    AccordionItemConfig, CoverConfig, FormCardConfig, FormFieldConfig, MediaConfig,
    PageSectionConfig, QuizCardConfig, SimpleContentConfig, TextMediaConfig, WallCardConfig,
    WallItemConfig,
};
use super::schema::{
    AlignX, AlignY, Background, CardVariant, ContentVariant, CoverSchema, CtaPlacement,
    FormCardSchema, FormMethod, Gap, MediaPosition, MediaSchema, PaddingY, PageSchema,
    QuizCardSchema, Radius, SectionHeight, SectionSchema, SectionWidth, SimpleContentSchema,
    TextAlign, TextMediaSchema, WallCardSchema,
};

const DEFAULT_ASPECT_RATIO: &str = "4:3";
const DEFAULT_SUBMIT_LABEL: &str = "Invia";
const ACCORDION_KEY_SLUG_LEN: usize = 32;

/// Map every section of a page, preserving input order.
pub fn map_page_schema_to_configs(page: &PageSchema) -> Vec<PageSectionConfig> {
    page.sections.iter().map(map_section_schema_to_config).collect()
}

/// Map one section. The match is exhaustive over the closed tag set;
/// unknown tags cannot reach this point because parsing rejects them.
pub fn map_section_schema_to_config(section: &SectionSchema) -> PageSectionConfig {
    match section {
        SectionSchema::Cover(schema) => PageSectionConfig::Cover(map_cover(schema)),
        SectionSchema::SimpleContent(schema) => {
            PageSectionConfig::SimpleContent(map_simple_content(schema))
        }
        SectionSchema::TextMedia(schema) => PageSectionConfig::TextMedia(map_text_media(schema)),
        SectionSchema::WallCard(schema) => PageSectionConfig::WallCard(map_wall_card(schema)),
        SectionSchema::FormCard(schema) => PageSectionConfig::FormCard(map_form_card(schema)),
        SectionSchema::QuizCard(schema) => PageSectionConfig::QuizCard(map_quiz_card(schema)),
    }
}

fn map_media(media: &MediaSchema) -> MediaConfig {
    MediaConfig {
        src: media.src.clone(),
        alt: media.alt.clone(),
        aspect_ratio: media
            .aspect_ratio
            .clone()
            .unwrap_or_else(|| DEFAULT_ASPECT_RATIO.to_string()),
    }
}

fn map_cover(schema: &CoverSchema) -> CoverConfig {
    let layout = schema.layout.clone().unwrap_or_default();
    CoverConfig {
        title: schema.title.clone(),
        subtitle: schema.subtitle.clone(),
        body: schema.body.clone(),
        ctas: schema.ctas.clone(),
        media: schema.media.as_ref().map(map_media),
        padding_y: layout.padding_y.unwrap_or(PaddingY::Lg),
        radius: layout.radius.unwrap_or(Radius::None),
        background: layout.background.unwrap_or(Background::Default),
        with_overlay: layout.with_overlay.unwrap_or(false),
        align_x: layout.align_x.unwrap_or(AlignX::Left),
        align_y: layout.align_y.unwrap_or(AlignY::Center),
        height: layout.height.unwrap_or(SectionHeight::Lg),
        content_variant: layout.content_variant.unwrap_or(ContentVariant::Card),
    }
}

fn map_simple_content(schema: &SimpleContentSchema) -> SimpleContentConfig {
    let layout = schema.layout.clone().unwrap_or_default();
    let accordion_items = schema
        .accordions
        .iter()
        .enumerate()
        .map(|(index, accordion)| AccordionItemConfig {
            key: accordion_key(index, &accordion.title),
            title: accordion.title.clone(),
            body: accordion.body.clone(),
        })
        .collect();

    SimpleContentConfig {
        title: schema.title.clone(),
        subtitle: schema.subtitle.clone(),
        body: schema.body.clone(),
        columns: schema.columns.clone(),
        accordion_items,
        ctas: schema.ctas.clone(),
        background: layout.background.unwrap_or(Background::Default),
        padding_y: layout.padding_y.unwrap_or(PaddingY::Xl),
    }
}

fn map_text_media(schema: &TextMediaSchema) -> TextMediaConfig {
    let layout = schema.layout.clone().unwrap_or_default();
    TextMediaConfig {
        title: schema.title.clone(),
        body: schema.body.clone(),
        media: schema.media.as_ref().map(map_media),
        ctas: schema.ctas.clone(),
        padding_y: layout.padding_y.unwrap_or(PaddingY::Lg),
        width: layout.width.unwrap_or(SectionWidth::Normal),
        text_align_y: layout.text_align_y.unwrap_or(AlignY::Top),
        media_position: layout.media_position.unwrap_or(MediaPosition::Right),
        align_text: layout.align_text.unwrap_or(TextAlign::Left),
    }
}

fn map_wall_card(schema: &WallCardSchema) -> WallCardConfig {
    let layout = schema.layout.clone().unwrap_or_default();
    let items = schema
        .items
        .iter()
        .map(|item| WallItemConfig {
            title: item.title.clone(),
            body: item.body.clone(),
            icon_name: item.icon_name.clone(),
            href: item.href.clone(),
        })
        .collect();

    WallCardConfig {
        title: schema.title.clone(),
        subtitle: schema.subtitle.clone(),
        items,
        cta: schema.cta.clone(),
        padding_y: layout.padding_y.unwrap_or(PaddingY::Xl),
        align: layout.align.unwrap_or(TextAlign::Left),
        columns_mobile: layout.columns_mobile.unwrap_or(1),
        columns_desktop: layout.columns_desktop.unwrap_or(3),
        card_variant: layout.card_variant.unwrap_or(CardVariant::Primary),
        gap: layout.gap.unwrap_or(Gap::Md),
        cta_placement: layout.cta_placement.unwrap_or(CtaPlacement::Footer),
    }
}

fn map_form_card(schema: &FormCardSchema) -> FormCardConfig {
    let layout = schema.layout.clone().unwrap_or_default();
    let fields = schema
        .fields
        .iter()
        .map(|field| FormFieldConfig {
            name: field.name.clone(),
            label: field.label.clone(),
            field_type: field.field_type.clone().unwrap_or_else(|| "text".to_string()),
            required: field.required,
        })
        .collect();

    FormCardConfig {
        title: schema.title.clone(),
        subtitle: schema.subtitle.clone(),
        fields,
        submit_label: schema
            .submit_label
            .clone()
            .unwrap_or_else(|| DEFAULT_SUBMIT_LABEL.to_string()),
        form_method: schema.form_method.unwrap_or(FormMethod::Post),
        media: schema.media.as_ref().map(map_media),
        with_overlay: layout.with_overlay.unwrap_or(false),
        align_x: layout.align_x.unwrap_or(AlignX::Right),
        align_y: layout.align_y.unwrap_or(AlignY::Center),
        height: layout.height.unwrap_or(SectionHeight::Md),
    }
}

fn map_quiz_card(schema: &QuizCardSchema) -> QuizCardConfig {
    let layout = schema.layout.clone().unwrap_or_default();
    QuizCardConfig {
        title: schema.title.clone(),
        subtitle: schema.subtitle.clone(),
        quiz_slug: schema.quiz_slug.clone(),
        media: schema.media.as_ref().map(map_media),
        with_overlay: layout.with_overlay.unwrap_or(true),
        align_x: layout.align_x.unwrap_or(AlignX::Left),
        align_y: layout.align_y.unwrap_or(AlignY::Center),
        height: layout.height.unwrap_or(SectionHeight::Md),
    }
}

fn accordion_key(index: usize, title: &str) -> String {
    format!("{index}-{}", slugify_fragment(title, ACCORDION_KEY_SLUG_LEN))
}

/// Lowercased, dash-separated fragment of a title. Empty titles
/// produce the bare "item" fragment so the key stays non-empty.
fn slugify_fragment(value: &str, max_len: usize) -> String {
    let mut slug = String::with_capacity(value.len().min(max_len));
    let mut previous_dash = true;
    for ch in value.chars() {
        if slug.len() >= max_len {
            break;
        }
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
            previous_dash = false;
        } else if !previous_dash {
            slug.push('-');
            previous_dash = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    if slug.is_empty() {
        "item".to_string()
    } else {
        slug
    }
}
