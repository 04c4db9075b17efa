//! # unicat-cli — University Catalog Command-Line Interface
//!
//! A terminal front end over [`unicat_catalog::CatalogService`]. It plays
//! the role the web pages play for the catalog: it parses the country code
//! and slug from its arguments, renders results, and decides what "not
//! found" means for the user.
//!
//! ## Subcommands
//!
//! - `countries` — registry countries with record counts
//! - `list` — one country's records
//! - `show` — detail view of one record
//! - `search` — free-text query plus filters
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from handlers; handlers only call the
//!   catalog service and render.
//! - Handlers return an exit code; errors propagate as `anyhow::Error`.

pub mod countries;
pub mod list;
pub mod search;
pub mod show;

use std::path::Path;

use anyhow::{Context, Result};
use unicat_catalog::CatalogConfig;

/// Resolve the catalog configuration.
///
/// Precedence: `--data-url` / `--data-dir` flags, then the `--config` file,
/// then environment variables.
pub fn resolve_config(
    config_file: Option<&Path>,
    data_url: Option<&str>,
    data_dir: Option<&Path>,
) -> Result<CatalogConfig> {
    let base = match config_file {
        Some(path) => CatalogConfig::from_yaml_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => CatalogConfig::from_env().context("reading catalog environment")?,
    };

    let config = match (data_url, data_dir) {
        (Some(url), _) => CatalogConfig {
            timeout_secs: base.timeout_secs,
            ..CatalogConfig::http(url).context("parsing --data-url")?
        },
        (None, Some(dir)) => CatalogConfig {
            timeout_secs: base.timeout_secs,
            ..CatalogConfig::directory(dir)
        },
        (None, None) => base,
    };

    Ok(config)
}
