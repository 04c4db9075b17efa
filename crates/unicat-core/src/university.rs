//! # University Records
//!
//! [`UniversityEntry`] mirrors one object of a country dataset exactly as
//! the data provider publishes it. [`University`] is the normalized record
//! handed to callers: the entry plus the country it was loaded under and
//! its derived slug.
//!
//! Fees, salaries, and requirements are display strings. They may embed a
//! currency note in parentheses (`"₹ 25,00,000 (CAD 40,000)"`) and are kept
//! verbatim; [`headline_amount`] is the only interpretation applied here.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::country::CountryCode;
use crate::slug::slugify;

/// One entry of a country dataset, as published.
///
/// Every field tolerates absence (empty string, empty list, or rank 0) so a
/// partially filled entry still loads. Fields not modeled here are kept in
/// `extra` and written back out on serialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UniversityEntry {
    #[serde(deserialize_with = "lenient::rank")]
    pub rank: u32,
    #[serde(deserialize_with = "lenient::text")]
    pub university_name: String,
    #[serde(deserialize_with = "lenient::text")]
    pub city: String,
    #[serde(rename = "type", deserialize_with = "lenient::text")]
    pub institution_type: String,
    #[serde(deserialize_with = "lenient::text_list")]
    pub popular_english_programs: Vec<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub min_cgpa: String,
    #[serde(deserialize_with = "lenient::text")]
    pub ielts_requirement: String,
    /// Free text, conventionally starting with "Yes" or "No".
    #[serde(deserialize_with = "lenient::text")]
    pub gre_required: String,
    #[serde(deserialize_with = "lenient::text")]
    pub annual_tuition_fee_inr: String,
    #[serde(deserialize_with = "lenient::text")]
    pub estimated_annual_living_cost_inr: String,
    #[serde(deserialize_with = "lenient::text")]
    pub program_duration_years: String,
    #[serde(deserialize_with = "lenient::text")]
    pub avg_starting_salary_inr: String,
    #[serde(deserialize_with = "lenient::text")]
    pub employment_rate: String,
    #[serde(deserialize_with = "lenient::text")]
    pub post_study_work_visa: String,
    #[serde(deserialize_with = "lenient::text")]
    pub visa_risk: String,
    #[serde(deserialize_with = "lenient::text")]
    pub website: String,
    /// Citation URL for the fee figures.
    #[serde(deserialize_with = "lenient::text")]
    pub source: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Serde helpers for dataset fields whose JSON type is not guaranteed.
///
/// A single odd value (`null`, a number where text is expected) must not
/// fail the whole dataset, so scalars are rendered as text and `null`
/// reads as empty.
mod lenient {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    fn as_text(value: Value) -> String {
        match value {
            Value::Null => String::new(),
            Value::String(s) => s,
            other => other.to_string(),
        }
    }

    pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(as_text(Value::deserialize(deserializer)?))
    }

    /// A list of text values. `null` is empty, a lone scalar is a
    /// one-element list, and `null` items are skipped.
    pub fn text_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::Null => Vec::new(),
            Value::Array(items) => items
                .into_iter()
                .filter(|v| !v.is_null())
                .map(as_text)
                .collect(),
            scalar => vec![as_text(scalar)],
        })
    }

    /// A rank number. Numeric strings are accepted; anything else is 0.
    pub fn rank<'de, D>(deserializer: D) -> Result<u32, D::Error>
    where
        D: Deserializer<'de>,
    {
        let rank = match Value::deserialize(deserializer)? {
            Value::Number(n) => n
                .as_u64()
                .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64)),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        };
        Ok(rank.and_then(|r| u32::try_from(r).ok()).unwrap_or(0))
    }
}

/// A normalized catalog record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct University {
    #[serde(flatten)]
    pub entry: UniversityEntry,
    /// Registry country the record was loaded under.
    pub country: CountryCode,
    /// Derived from `entry.university_name` by [`slugify`].
    pub slug: String,
}

impl University {
    /// Normalize a raw entry loaded for `country`.
    ///
    /// `country` and `slug` are assigned here; any same-named keys in the
    /// raw entry are dropped so the derived values are authoritative.
    pub fn from_entry(mut entry: UniversityEntry, country: CountryCode) -> Self {
        entry.extra.remove("country");
        entry.extra.remove("slug");
        let slug = slugify(&entry.university_name);
        Self {
            entry,
            country,
            slug,
        }
    }

    pub fn name(&self) -> &str {
        &self.entry.university_name
    }

    pub fn visa_risk_level(&self) -> VisaRisk {
        VisaRisk::from_text(&self.entry.visa_risk)
    }

    pub fn tuition_headline(&self) -> &str {
        headline_amount(&self.entry.annual_tuition_fee_inr)
    }

    pub fn living_cost_headline(&self) -> &str {
        headline_amount(&self.entry.estimated_annual_living_cost_inr)
    }

    pub fn salary_headline(&self) -> &str {
        headline_amount(&self.entry.avg_starting_salary_inr)
    }

    /// Program duration as displayed, e.g. `"2 years"`.
    pub fn duration_label(&self) -> String {
        format!("{} years", self.entry.program_duration_years)
    }

    /// Route of the detail page for this record.
    pub fn detail_path(&self) -> String {
        format!("/explore/{}/{}", self.country, self.slug)
    }
}

/// Visa risk category used for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisaRisk {
    Low,
    Medium,
    High,
    /// Any value other than low/medium/high.
    Unknown,
}

impl VisaRisk {
    /// Classify a dataset value, case-insensitively.
    pub fn from_text(text: &str) -> Self {
        match text.to_lowercase().as_str() {
            "low" => Self::Low,
            "medium" => Self::Medium,
            "high" => Self::High,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for VisaRisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Unknown => "Unknown",
        };
        f.pad(label)
    }
}

/// The part of a display amount before its parenthetical note, trimmed.
///
/// ```
/// use unicat_core::headline_amount;
///
/// assert_eq!(headline_amount("₹ 25,00,000 (CAD 40,000)"), "₹ 25,00,000");
/// assert_eq!(headline_amount("₹ 9,00,000"), "₹ 9,00,000");
/// ```
pub fn headline_amount(display: &str) -> &str {
    display
        .split_once('(')
        .map_or(display, |(head, _)| head)
        .trim()
}
