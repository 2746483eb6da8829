use serde::{Deserialize, Serialize};

/// Declarative page definition as authored in the flat JSON files.
/// The loader (external) picks the file by slug; this crate only
/// parses and maps it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSchema {
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo: Option<SeoSchema>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
    #[serde(default)]
    pub sections: Vec<SectionSchema>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoSchema {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// One visual block of a page. Closed set: content authored with an
/// unknown `type` is rejected at parse time, never silently dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SectionSchema {
    #[serde(rename = "cover")]
    Cover(CoverSchema),
    #[serde(rename = "simple-content")]
    SimpleContent(SimpleContentSchema),
    #[serde(rename = "text-media")]
    TextMedia(TextMediaSchema),
    #[serde(rename = "wall-card")]
    WallCard(WallCardSchema),
    #[serde(rename = "form-card")]
    FormCard(FormCardSchema),
    #[serde(rename = "quiz-card")]
    QuizCard(QuizCardSchema),
}

impl SectionSchema {
    pub const KNOWN_TYPES: [&'static str; 6] = [
        "cover",
        "simple-content",
        "text-media",
        "wall-card",
        "form-card",
        "quiz-card",
    ];

    pub const fn type_tag(&self) -> &'static str {
        match self {
            SectionSchema::Cover(_) => "cover",
            SectionSchema::SimpleContent(_) => "simple-content",
            SectionSchema::TextMedia(_) => "text-media",
            SectionSchema::WallCard(_) => "wall-card",
            SectionSchema::FormCard(_) => "form-card",
            SectionSchema::QuizCard(_) => "quiz-card",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CtaSchema {
    pub label: String,
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaSchema {
    pub src: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnSchema {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccordionSchema {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WallItemSchema {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormFieldSchema {
    pub name: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_type: Option<String>,
    #[serde(default)]
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverSchema {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(default)]
    pub ctas: Vec<CtaSchema>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media: Option<MediaSchema>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<CoverLayoutSchema>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverLayoutSchema {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_y: Option<PaddingY>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<Radius>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<Background>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub with_overlay: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align_x: Option<AlignX>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align_y: Option<AlignY>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<SectionHeight>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_variant: Option<ContentVariant>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleContentSchema {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(default)]
    pub columns: Vec<ColumnSchema>,
    #[serde(default)]
    pub accordions: Vec<AccordionSchema>,
    #[serde(default)]
    pub ctas: Vec<CtaSchema>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<SimpleContentLayoutSchema>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleContentLayoutSchema {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<Background>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_y: Option<PaddingY>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextMediaSchema {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media: Option<MediaSchema>,
    #[serde(default)]
    pub ctas: Vec<CtaSchema>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<TextMediaLayoutSchema>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextMediaLayoutSchema {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_y: Option<PaddingY>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<SectionWidth>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_align_y: Option<AlignY>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_position: Option<MediaPosition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align_text: Option<TextAlign>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WallCardSchema {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub items: Vec<WallItemSchema>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta: Option<CtaSchema>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<WallCardLayoutSchema>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WallCardLayoutSchema {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_y: Option<PaddingY>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<TextAlign>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns_mobile: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns_desktop: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_variant: Option<CardVariant>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gap: Option<Gap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta_placement: Option<CtaPlacement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormCardSchema {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub fields: Vec<FormFieldSchema>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submit_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub form_method: Option<FormMethod>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media: Option<MediaSchema>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<OverlayLayoutSchema>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizCardSchema {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quiz_slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media: Option<MediaSchema>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<OverlayLayoutSchema>,
}

/// Shared layout block for the two overlay-capable card sections.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlayLayoutSchema {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub with_overlay: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align_x: Option<AlignX>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align_y: Option<AlignY>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<SectionHeight>,
}

// Closed vocabularies for the layout fields. Serialized lowercase to
// match the authored JSON.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaddingY {
    None,
    Sm,
    Md,
    Lg,
    Xl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Background {
    Default,
    Muted,
    Primary,
    Dark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Radius {
    None,
    Sm,
    Md,
    Lg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlignX {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlignY {
    Top,
    Center,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionHeight {
    Sm,
    Md,
    Lg,
    Full,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentVariant {
    Card,
    Plain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionWidth {
    Narrow,
    Normal,
    Wide,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaPosition {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardVariant {
    Primary,
    Secondary,
    Outline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gap {
    Sm,
    Md,
    Lg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CtaPlacement {
    Header,
    Footer,
    Inline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormMethod {
    Post,
    Get,
}
