//! # unicat CLI entry point
//!
//! Parses command-line arguments, builds the catalog service from the
//! resolved configuration, and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use unicat_catalog::CatalogService;
use unicat_cli::countries::{run_countries, CountriesArgs};
use unicat_cli::list::{run_list, ListArgs};
use unicat_cli::resolve_config;
use unicat_cli::search::{run_search, SearchArgs};
use unicat_cli::show::{run_show, ShowArgs};

/// University catalog for students planning study abroad.
///
/// Browses per-country university datasets: fees, admission requirements,
/// programs, employment outcomes, and visa risk.
#[derive(Parser, Debug)]
#[command(name = "unicat", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Base URL the country datasets are served from.
    #[arg(long, global = true)]
    data_url: Option<String>,

    /// Local directory holding the country datasets.
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List supported countries with record counts.
    Countries(CountriesArgs),

    /// List one country's universities.
    List(ListArgs),

    /// Show the detail view of one university.
    Show(ShowArgs),

    /// Search universities by text and filters.
    Search(SearchArgs),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli).await {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<u8> {
    let config = resolve_config(
        cli.config.as_deref(),
        cli.data_url.as_deref(),
        cli.data_dir.as_deref(),
    )?;
    tracing::debug!(source = %config.source, timeout_secs = ?config.timeout_secs, "catalog configured");

    let service = CatalogService::from_config(&config)?;

    match cli.command {
        Commands::Countries(args) => run_countries(&args, &service).await,
        Commands::List(args) => run_list(&args, &service).await,
        Commands::Show(args) => run_show(&args, &service).await,
        Commands::Search(args) => run_search(&args, &service).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parse_countries() {
        let cli = Cli::try_parse_from(["unicat", "countries"]).unwrap();
        assert!(matches!(cli.command, Commands::Countries(_)));
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn cli_parse_list_with_json() {
        let cli = Cli::try_parse_from(["unicat", "list", "germany", "--json"]).unwrap();
        if let Commands::List(args) = cli.command {
            assert_eq!(args.country, "germany");
            assert!(args.json);
        } else {
            panic!("expected list");
        }
    }

    #[test]
    fn cli_parse_show() {
        let cli = Cli::try_parse_from(["unicat", "show", "uk", "university-of-oxford"]).unwrap();
        if let Commands::Show(args) = cli.command {
            assert_eq!(args.country, "uk");
            assert_eq!(args.slug, "university-of-oxford");
        } else {
            panic!("expected show");
        }
    }

    #[test]
    fn cli_parse_search_filters() {
        let cli = Cli::try_parse_from([
            "unicat",
            "search",
            "computer",
            "--country",
            "canada",
            "--gre",
            "no",
            "--visa-risk",
            "low",
            "--program",
            "data",
        ])
        .unwrap();
        if let Commands::Search(args) = cli.command {
            assert_eq!(args.query.as_deref(), Some("computer"));
            assert_eq!(args.country.as_deref(), Some("canada"));
            assert_eq!(args.gre.as_deref(), Some("no"));
            assert_eq!(args.visa_risk.as_deref(), Some("low"));
            assert_eq!(args.program.as_deref(), Some("data"));
        } else {
            panic!("expected search");
        }
    }

    #[test]
    fn cli_parse_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["unicat", "countries", "-vv", "--data-dir", "/srv/data"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/srv/data")));
    }

    #[test]
    fn cli_parse_data_url_before_subcommand() {
        let cli = Cli::try_parse_from(["unicat", "--data-url", "https://example.org/", "list", "uk"])
            .unwrap();
        assert_eq!(cli.data_url.as_deref(), Some("https://example.org/"));
        assert!(cli.data_dir.is_none());
    }

    #[test]
    fn cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["unicat"]).is_err());
    }
}
