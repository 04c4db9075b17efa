//! # List Subcommand
//!
//! Prints one country's records in dataset order.

use anyhow::Result;
use clap::Args;
use unicat_catalog::{CatalogService, CountryCode, CountrySource, University};

/// Arguments for the list subcommand.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Country code (canada, germany, uk, australia, usa).
    pub country: String,

    /// Emit JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

/// Execute the list subcommand.
///
/// An unknown country or an unavailable dataset prints an empty listing.
pub async fn run_list<S: CountrySource>(args: &ListArgs, service: &CatalogService<S>) -> Result<u8> {
    if CountryCode::parse(&args.country).is_none() {
        tracing::warn!(country = %args.country, "not a catalog country");
    }

    let records = service.universities_by_country(&args.country).await;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&*records)?);
    } else {
        print!("{}", render_table(&records));
    }
    Ok(0)
}

/// Render records as a table: rank, name, city, visa risk, slug.
pub fn render_table(records: &[University]) -> String {
    if records.is_empty() {
        return "No universities found.\n".to_string();
    }

    let mut out = String::new();
    for u in records {
        out.push_str(&format!(
            "  #{:<4} {:<45} {:<18} {:<8} {}\n",
            u.entry.rank,
            u.name(),
            u.entry.city,
            u.visa_risk_level(),
            u.slug
        ));
    }
    out.push_str(&format!("\n{} universities\n", records.len()));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use unicat_catalog::UniversityEntry;

    #[test]
    fn empty_listing_says_so() {
        assert_eq!(render_table(&[]), "No universities found.\n");
    }

    #[test]
    fn table_row_shows_rank_name_and_slug() {
        let entry = UniversityEntry {
            rank: 7,
            university_name: "University of Sydney".into(),
            city: "Sydney".into(),
            visa_risk: "medium".into(),
            ..Default::default()
        };
        let uni = University::from_entry(entry, CountryCode::Australia);
        let out = render_table(&[uni]);
        assert!(out.contains("#7"));
        assert!(out.contains("University of Sydney"));
        assert!(out.contains("Medium"));
        assert!(out.contains("university-of-sydney"));
        assert!(out.ends_with("1 universities\n"));
    }
}
