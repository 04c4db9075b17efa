//! Exit-code behavior of the subcommand handlers over an in-memory catalog.

use unicat_catalog::{CatalogService, CountryCode, MemorySource};
use unicat_cli::countries::{run_countries, CountriesArgs};
use unicat_cli::list::{run_list, ListArgs};
use unicat_cli::search::{run_search, SearchArgs};
use unicat_cli::show::{run_show, ShowArgs, NOT_FOUND_EXIT};

const UK: &str = r#"[
    {"rank": 1, "university_name": "University of Oxford", "city": "Oxford",
     "popular_english_programs": ["MSc Computer Science"], "gre_required": "No", "visa_risk": "Low"},
    {"rank": 2, "university_name": "Imperial College London", "city": "London",
     "popular_english_programs": ["MSc Data Science"], "gre_required": "Yes", "visa_risk": "Medium"}
]"#;

fn service() -> CatalogService<MemorySource> {
    CatalogService::new(MemorySource::new().with_dataset(CountryCode::Uk, UK))
}

#[tokio::test]
async fn show_existing_record_exits_zero() {
    let svc = service();
    let args = ShowArgs {
        country: "UK".into(),
        slug: "university-of-oxford".into(),
        json: true,
    };
    assert_eq!(run_show(&args, &svc).await.unwrap(), 0);
}

#[tokio::test]
async fn show_missing_record_exits_not_found() {
    let svc = service();
    let args = ShowArgs {
        country: "uk".into(),
        slug: "university-of-atlantis".into(),
        json: false,
    };
    assert_eq!(run_show(&args, &svc).await.unwrap(), NOT_FOUND_EXIT);

    let args = ShowArgs {
        country: "france".into(),
        slug: "university-of-oxford".into(),
        json: false,
    };
    assert_eq!(run_show(&args, &svc).await.unwrap(), NOT_FOUND_EXIT);
}

#[tokio::test]
async fn listing_commands_tolerate_missing_datasets() {
    let svc = service();
    assert_eq!(run_countries(&CountriesArgs { json: false }, &svc).await.unwrap(), 0);

    let args = ListArgs {
        country: "germany".into(),
        json: false,
    };
    assert_eq!(run_list(&args, &svc).await.unwrap(), 0);
    assert_eq!(svc.cache().len(), 1);
}

#[tokio::test]
async fn search_across_catalog_exits_zero() {
    let svc = service();
    let args = SearchArgs {
        query: Some("london".into()),
        country: None,
        gre: Some("yes".into()),
        visa_risk: None,
        program: None,
        json: true,
    };
    assert_eq!(run_search(&args, &svc).await.unwrap(), 0);
}
