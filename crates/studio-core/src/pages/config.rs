use serde::Serialize;

use super::schema::{
    AlignX, AlignY, Background, CardVariant, ColumnSchema, ContentVariant, CtaPlacement,
    CtaSchema, FormMethod, Gap, MediaPosition, PaddingY, Radius, SectionHeight, SectionWidth,
    TextAlign,
};

/// Render-ready section tree: the schema with every optional layout
/// field resolved to its documented default. Consumed by the
/// rendering components, which never apply defaults themselves.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum PageSectionConfig {
    #[serde(rename = "cover")]
    Cover(CoverConfig),
    #[serde(rename = "simple-content")]
    SimpleContent(SimpleContentConfig),
    #[serde(rename = "text-media")]
    TextMedia(TextMediaConfig),
    #[serde(rename = "wall-card")]
    WallCard(WallCardConfig),
    #[serde(rename = "form-card")]
    FormCard(FormCardConfig),
    #[serde(rename = "quiz-card")]
    QuizCard(QuizCardConfig),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaConfig {
    pub src: String,
    pub alt: Option<String>,
    pub aspect_ratio: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverConfig {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub body: Option<String>,
    pub ctas: Vec<CtaSchema>,
    pub media: Option<MediaConfig>,
    pub padding_y: PaddingY,
    pub radius: Radius,
    pub background: Background,
    pub with_overlay: bool,
    pub align_x: AlignX,
    pub align_y: AlignY,
    pub height: SectionHeight,
    pub content_variant: ContentVariant,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccordionItemConfig {
    /// Stable key combining the item index and the slugified title,
    /// used by the renderer for expansion state.
    pub key: String,
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleContentConfig {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub body: Option<String>,
    pub columns: Vec<ColumnSchema>,
    pub accordion_items: Vec<AccordionItemConfig>,
    pub ctas: Vec<CtaSchema>,
    pub background: Background,
    pub padding_y: PaddingY,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextMediaConfig {
    pub title: Option<String>,
    pub body: Option<String>,
    pub media: Option<MediaConfig>,
    pub ctas: Vec<CtaSchema>,
    pub padding_y: PaddingY,
    pub width: SectionWidth,
    pub text_align_y: AlignY,
    pub media_position: MediaPosition,
    pub align_text: TextAlign,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WallItemConfig {
    pub title: String,
    pub body: Option<String>,
    /// Icon names are passed through unresolved; a name the renderer
    /// does not know simply renders without an icon.
    pub icon_name: Option<String>,
    pub href: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WallCardConfig {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub items: Vec<WallItemConfig>,
    pub cta: Option<CtaSchema>,
    pub padding_y: PaddingY,
    pub align: TextAlign,
    pub columns_mobile: u8,
    pub columns_desktop: u8,
    pub card_variant: CardVariant,
    pub gap: Gap,
    pub cta_placement: CtaPlacement,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormFieldConfig {
    pub name: String,
    pub label: String,
    pub field_type: String,
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormCardConfig {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub fields: Vec<FormFieldConfig>,
    pub submit_label: String,
    pub form_method: FormMethod,
    pub media: Option<MediaConfig>,
    pub with_overlay: bool,
    pub align_x: AlignX,
    pub align_y: AlignY,
    pub height: SectionHeight,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizCardConfig {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub quiz_slug: Option<String>,
    pub media: Option<MediaConfig>,
    pub with_overlay: bool,
    pub align_x: AlignX,
    pub align_y: AlignY,
    pub height: SectionHeight,
}
