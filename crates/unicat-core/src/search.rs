//! # Catalog Search
//!
//! A free-text query plus three independent filters, all combined with
//! logical AND:
//!
//! | Predicate | Keeps a record when |
//! |-----------|---------------------|
//! | query | lowercase query is a substring of the name, the city, or any program |
//! | `gre_required` | GRE text starts with "yes" / "no", case-insensitively |
//! | `visa_risk` | visa risk text equals the filter, case-insensitively |
//! | `program_keyword` | some program contains the keyword, case-insensitively |
//!
//! Searching is pure. It never touches the cache and never mutates its
//! input; matches are returned in input order.

use serde::{Deserialize, Serialize};

use crate::university::University;

/// GRE requirement filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GreFilter {
    Yes,
    No,
}

impl GreFilter {
    /// Accepts exactly `"yes"` or `"no"`. Any other value means no filter.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "yes" => Some(Self::Yes),
            "no" => Some(Self::No),
            _ => None,
        }
    }

    fn prefix(&self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
        }
    }

    pub fn matches(&self, gre_required: &str) -> bool {
        gre_required.to_lowercase().starts_with(self.prefix())
    }
}

/// Optional filters applied on top of the text query.
///
/// Empty `visa_risk` or `program_keyword` strings are treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFilters {
    #[serde(default)]
    pub gre_required: Option<GreFilter>,
    #[serde(default)]
    pub visa_risk: Option<String>,
    #[serde(default)]
    pub program_keyword: Option<String>,
}

impl SearchFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gre_required(mut self, filter: GreFilter) -> Self {
        self.gre_required = Some(filter);
        self
    }

    pub fn visa_risk(mut self, risk: impl Into<String>) -> Self {
        self.visa_risk = Some(risk.into());
        self
    }

    pub fn program_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.program_keyword = Some(keyword.into());
        self
    }

    /// Whether no filter is active.
    pub fn is_empty(&self) -> bool {
        self.gre_required.is_none()
            && non_empty(&self.visa_risk).is_none()
            && non_empty(&self.program_keyword).is_none()
    }

    /// Whether `record` passes every active filter. The text query is not
    /// part of this check; see [`matches_query`].
    pub fn matches(&self, record: &University) -> bool {
        if let Some(gre) = self.gre_required {
            if !gre.matches(&record.entry.gre_required) {
                return false;
            }
        }

        if let Some(risk) = non_empty(&self.visa_risk) {
            if record.entry.visa_risk.to_lowercase() != risk.to_lowercase() {
                return false;
            }
        }

        if let Some(keyword) = non_empty(&self.program_keyword) {
            let keyword = keyword.to_lowercase();
            if !any_program_contains(record, &keyword) {
                return false;
            }
        }

        true
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn any_program_contains(record: &University, needle_lower: &str) -> bool {
    record
        .entry
        .popular_english_programs
        .iter()
        .any(|p| p.to_lowercase().contains(needle_lower))
}

/// Whether `record` matches the free-text query. An empty query matches
/// everything.
pub fn matches_query(record: &University, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let q = query.to_lowercase();
    record.entry.university_name.to_lowercase().contains(&q)
        || record.entry.city.to_lowercase().contains(&q)
        || any_program_contains(record, &q)
}

/// Records from `records` matching `query` and every active filter.
pub fn search_universities(
    records: &[University],
    query: &str,
    filters: &SearchFilters,
) -> Vec<University> {
    records
        .iter()
        .filter(|r| matches_query(r, query) && filters.matches(r))
        .cloned()
        .collect()
}
