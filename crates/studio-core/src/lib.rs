//! Domain core for the agency site back-office: the priced service
//! catalog, the quote pricing engine, the quiz lead-scoring funnel,
//! the page schema mapper, and the HTML quote assembler.
//!
//! Everything in this crate is synchronous and pure: inputs arrive as
//! already-parsed values, outputs are plain data (or an HTML string).
//! File loading, persistence, and email delivery live behind the
//! traits in [`quiz::leads`] and in the API service.

pub mod catalog;
pub mod config;
pub mod error;
pub mod pages;
pub mod pricing;
pub mod quiz;
pub mod quote;
pub mod telemetry;
