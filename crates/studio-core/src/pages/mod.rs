//! Page schema handling: parse the declarative JSON page definitions
//! and map them into the typed, default-resolved section config tree.

pub mod config;
mod mapper;
pub mod schema;

pub use config::PageSectionConfig;
pub use mapper::{map_page_schema_to_configs, map_section_schema_to_config};
pub use schema::{PageSchema, SectionSchema};

/// Parse failure for an authored page definition. An unknown section
/// tag signals a schema/mapper version mismatch and is fatal for the
/// whole page; it must never be silently dropped.
#[derive(Debug, thiserror::Error)]
pub enum PageSchemaError {
    #[error("unknown section type `{0}`")]
    UnknownSectionType(String),
    #[error("section at index {0} has no `type` field")]
    MissingSectionType(usize),
    #[error("page schema is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Parse a page definition from its JSON value. Section tags are
/// checked up front so the error names the offending type string
/// instead of surfacing as a generic enum mismatch.
pub fn parse_page_schema(value: serde_json::Value) -> Result<PageSchema, PageSchemaError> {
    if let Some(sections) = value.get("sections").and_then(|value| value.as_array()) {
        for (index, section) in sections.iter().enumerate() {
            match section.get("type").and_then(|tag| tag.as_str()) {
                Some(tag) if SectionSchema::KNOWN_TYPES.contains(&tag) => {}
                Some(tag) => return Err(PageSchemaError::UnknownSectionType(tag.to_string())),
                None => return Err(PageSchemaError::MissingSectionType(index)),
            }
        }
    }
    Ok(serde_json::from_value(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_a_minimal_page() {
        let page = parse_page_schema(json!({
            "slug": "home",
            "sections": [
                { "type": "cover", "title": "Benvenuti" },
                { "type": "wall-card" }
            ]
        }))
        .expect("valid page parses");
        assert_eq!(page.slug, "home");
        assert_eq!(page.sections.len(), 2);
    }

    #[test]
    fn unknown_section_type_is_fatal_and_named() {
        let err = parse_page_schema(json!({
            "slug": "home",
            "sections": [ { "type": "carousel-3d" } ]
        }))
        .expect_err("unknown tag must fail");
        assert!(matches!(
            &err,
            PageSchemaError::UnknownSectionType(tag) if tag == "carousel-3d"
        ));
        assert!(err.to_string().contains("carousel-3d"));
    }

    #[test]
    fn section_without_type_is_rejected_with_its_index() {
        let err = parse_page_schema(json!({
            "slug": "home",
            "sections": [ { "type": "cover" }, { "title": "orfano" } ]
        }))
        .expect_err("missing tag must fail");
        assert!(matches!(err, PageSchemaError::MissingSectionType(1)));
    }
}
