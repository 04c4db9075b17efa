//! # unicat-core — Foundational Types for the University Catalog
//!
//! Defines the record model and the pure logic of the catalog. Every other
//! crate in the workspace depends on `unicat-core`; it depends on nothing
//! internal and performs no I/O.
//!
//! ## Contents
//!
//! - [`country`]: the closed registry of supported countries, in display order.
//! - [`slug`]: deterministic URL-safe identifiers derived from names.
//! - [`university`]: raw source entries and normalized records.
//! - [`search`]: free-text query and composable filter predicates.
//!
//! ## Crate Policy
//!
//! - Source data fields stay opaque display text. No numeric parsing of fees,
//!   salaries, or requirements happens here.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod country;
pub mod search;
pub mod slug;
pub mod university;

pub use country::{CountryCode, CountrySummary, UnknownCountry};
pub use search::{matches_query, search_universities, GreFilter, SearchFilters};
pub use slug::{duplicate_slugs, slugify};
pub use university::{headline_amount, University, UniversityEntry, VisaRisk};
