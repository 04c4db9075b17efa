//! # Countries Subcommand
//!
//! Lists every registry country with the number of records loaded for it.
//! Countries whose dataset failed to load are listed with a count of 0.

use anyhow::Result;
use clap::Args;
use unicat_catalog::{CatalogService, CountrySource, CountrySummary};

/// Arguments for the countries subcommand.
#[derive(Args, Debug)]
pub struct CountriesArgs {
    /// Emit JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

/// Execute the countries subcommand.
pub async fn run_countries<S: CountrySource>(
    args: &CountriesArgs,
    service: &CatalogService<S>,
) -> Result<u8> {
    let summaries = service.available_countries().await;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
    } else {
        print!("{}", render_countries(&summaries));
    }
    Ok(0)
}

/// Render summaries as a table, one country per line.
pub fn render_countries(summaries: &[CountrySummary]) -> String {
    let mut lines: Vec<String> = summaries
        .iter()
        .map(|s| {
            format!(
                "  {} {:<10} {:<16} {:>4} universities",
                s.flag, s.code, s.name, s.count
            )
        })
        .collect();
    let total: usize = summaries.iter().map(|s| s.count).sum();
    lines.push(String::new());
    lines.push(format!("Total: {total} universities in {} countries", summaries.len()));
    lines.join("\n") + "\n"
}
