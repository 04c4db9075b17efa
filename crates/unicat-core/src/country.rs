//! # Country Registry
//!
//! The fixed, closed set of countries the catalog carries data for. The
//! registry order defined by [`CountryCode::ALL`] is the order used for
//! every "all countries" operation.
//!
//! Codes arriving from callers (URL path segments, CLI arguments) are
//! compared case-insensitively. A code outside the registry is not an
//! error at the service boundary; [`CountryCode::parse`] returns `None`
//! and callers treat that as "no data".

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A supported catalog country.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CountryCode {
    Canada,
    Germany,
    Uk,
    Australia,
    Usa,
}

/// Returned by [`CountryCode::from_str`] for codes outside the registry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown country code: {0}")]
pub struct UnknownCountry(pub String);

impl CountryCode {
    /// Every supported country, in registry order.
    pub const ALL: [CountryCode; 5] = [
        CountryCode::Canada,
        CountryCode::Germany,
        CountryCode::Uk,
        CountryCode::Australia,
        CountryCode::Usa,
    ];

    /// Resolve a caller-supplied code. Lowercased before comparison.
    pub fn parse(code: &str) -> Option<Self> {
        match code.to_lowercase().as_str() {
            "canada" => Some(Self::Canada),
            "germany" => Some(Self::Germany),
            "uk" => Some(Self::Uk),
            "australia" => Some(Self::Australia),
            "usa" => Some(Self::Usa),
            _ => None,
        }
    }

    /// The lowercase registry key, also used in detail-page paths.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Canada => "canada",
            Self::Germany => "germany",
            Self::Uk => "uk",
            Self::Australia => "australia",
            Self::Usa => "usa",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Canada => "Canada",
            Self::Germany => "Germany",
            Self::Uk => "United Kingdom",
            Self::Australia => "Australia",
            Self::Usa => "United States",
        }
    }

    pub fn flag(&self) -> &'static str {
        match self {
            Self::Canada => "🇨🇦",
            Self::Germany => "🇩🇪",
            Self::Uk => "🇬🇧",
            Self::Australia => "🇦🇺",
            Self::Usa => "🇺🇸",
        }
    }

    /// Name of the dataset resource for this country.
    ///
    /// The resources carry a `.txt` extension but hold a JSON array.
    pub fn data_file(&self) -> &'static str {
        match self {
            Self::Canada => "Canada_uni.txt",
            Self::Germany => "Germany_uni.txt",
            Self::Uk => "UK_uni.txt",
            Self::Australia => "Australia_uni.txt",
            Self::Usa => "USA_uni.txt",
        }
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for CountryCode {
    type Err = UnknownCountry;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownCountry(s.to_string()))
    }
}

/// Aggregate view of one registry country.
///
/// `count` reflects the records currently loadable for the country. A
/// country whose dataset failed to load still appears, with a count of 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountrySummary {
    pub code: CountryCode,
    pub name: String,
    pub flag: String,
    pub count: usize,
}

impl CountrySummary {
    pub fn new(code: CountryCode, count: usize) -> Self {
        Self {
            code,
            name: code.display_name().to_string(),
            flag: code.flag().to_string(),
            count,
        }
    }
}
