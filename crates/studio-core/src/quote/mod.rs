//! Brief builder state and the static HTML quote document.

mod brief;
mod document;

pub use brief::{BriefData, ClientInfo, CurrentSituation, Objectives};
pub use document::{render_quote_document, render_quote_document_at};
