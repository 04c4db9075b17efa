//! # Search Subcommand
//!
//! Free-text query over one country or the whole catalog, narrowed by the
//! GRE, visa-risk, and program filters.

use anyhow::Result;
use clap::Args;
use unicat_catalog::{
    search_universities, CatalogService, CountryCode, CountrySource, GreFilter, SearchFilters,
};

use crate::list::render_table;

/// Arguments for the search subcommand.
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Text matched against name, city, and programs. Omit to list everything
    /// the filters keep.
    pub query: Option<String>,

    /// Restrict to one country. Searches every country when omitted.
    #[arg(long)]
    pub country: Option<String>,

    /// GRE requirement: "yes" or "no".
    #[arg(long)]
    pub gre: Option<String>,

    /// Visa risk level, e.g. "low".
    #[arg(long)]
    pub visa_risk: Option<String>,

    /// Keyword that must appear in one of the programs.
    #[arg(long)]
    pub program: Option<String>,

    /// Emit JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

impl SearchArgs {
    /// Build the filter set. An unrecognised `--gre` value is ignored.
    pub fn filters(&self) -> SearchFilters {
        let mut filters = SearchFilters::new();
        if let Some(gre) = self.gre.as_deref() {
            match GreFilter::parse(gre) {
                Some(f) => filters = filters.gre_required(f),
                None => tracing::warn!(value = %gre, "ignoring --gre; expected \"yes\" or \"no\""),
            }
        }
        if let Some(risk) = &self.visa_risk {
            filters = filters.visa_risk(risk.as_str());
        }
        if let Some(keyword) = &self.program {
            filters = filters.program_keyword(keyword.as_str());
        }
        filters
    }
}

/// Execute the search subcommand.
pub async fn run_search<S: CountrySource>(
    args: &SearchArgs,
    service: &CatalogService<S>,
) -> Result<u8> {
    let records = match &args.country {
        Some(code) => {
            if CountryCode::parse(code).is_none() {
                tracing::warn!(country = %code, "not a catalog country");
            }
            service.universities_by_country(code).await.to_vec()
        }
        None => service.all_universities().await,
    };

    let query = args.query.as_deref().unwrap_or("");
    let filters = args.filters();
    let matches = search_universities(&records, query, &filters);
    tracing::debug!(searched = records.len(), matched = matches.len(), "search complete");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&matches)?);
    } else {
        print!("{}", render_table(&matches));
    }
    Ok(0)
}
