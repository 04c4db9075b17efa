//! # Show Subcommand
//!
//! Detail view of a single record, addressed by country code and slug the
//! same way the detail page is addressed by `/explore/{country}/{slug}`.
//!
//! A missing record exits with status 2 so scripts can tell "not found"
//! apart from a failure (status 1).

use anyhow::Result;
use clap::Args;
use unicat_catalog::{CatalogService, CountrySource, University};

/// Exit status when no record matches the country and slug.
pub const NOT_FOUND_EXIT: u8 = 2;

/// Arguments for the show subcommand.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Country code (canada, germany, uk, australia, usa).
    pub country: String,

    /// Record slug, as printed by `list`.
    pub slug: String,

    /// Emit the record as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Execute the show subcommand.
pub async fn run_show<S: CountrySource>(args: &ShowArgs, service: &CatalogService<S>) -> Result<u8> {
    let Some(uni) = service.university_by_slug(&args.country, &args.slug).await else {
        tracing::warn!(country = %args.country, slug = %args.slug, "university not found");
        println!("University not found: {}/{}", args.country, args.slug);
        return Ok(NOT_FOUND_EXIT);
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&uni)?);
    } else {
        print!("{}", render_detail(&uni));
    }
    Ok(0)
}

/// Render the detail view of one record.
pub fn render_detail(uni: &University) -> String {
    let e = &uni.entry;
    let mut out = String::new();

    out.push_str(&format!("#{} {}\n", e.rank, uni.name()));
    out.push_str(&format!(
        "{}, {} {}  |  {}  |  Visa risk: {}\n",
        e.city,
        uni.country.flag(),
        uni.country.display_name(),
        e.institution_type,
        uni.visa_risk_level()
    ));

    section(&mut out, "Financial Overview");
    field(&mut out, "Annual tuition", &e.annual_tuition_fee_inr);
    field(&mut out, "Living cost", &e.estimated_annual_living_cost_inr);
    field(&mut out, "Starting salary", &e.avg_starting_salary_inr);

    section(&mut out, "Admission Requirements");
    field(&mut out, "Minimum CGPA", &e.min_cgpa);
    field(&mut out, "IELTS", &e.ielts_requirement);
    field(&mut out, "GRE", &e.gre_required);
    field(&mut out, "Duration", &uni.duration_label());

    section(&mut out, "Popular English Programs");
    if e.popular_english_programs.is_empty() {
        out.push_str("  (none listed)\n");
    }
    for (i, program) in e.popular_english_programs.iter().enumerate() {
        out.push_str(&format!("  {}. {}\n", i + 1, program));
    }

    section(&mut out, "Key Stats");
    field(&mut out, "Employment rate", &e.employment_rate);
    field(&mut out, "Post-study work visa", &e.post_study_work_visa);
    field(&mut out, "Visa risk", &uni.visa_risk_level().to_string());
    field(&mut out, "Program duration", &uni.duration_label());

    section(&mut out, "ROI Snapshot");
    field(&mut out, "Tuition", uni.tuition_headline());
    field(&mut out, "Living", uni.living_cost_headline());
    field(&mut out, "Salary", uni.salary_headline());

    section(&mut out, "Links");
    field(&mut out, "Website", &e.website);
    field(&mut out, "Fee source", &e.source);

    out
}

fn section(out: &mut String, title: &str) {
    out.push_str(&format!("\n{title}\n"));
}

fn field(out: &mut String, label: &str, value: &str) {
    let value = if value.is_empty() { "-" } else { value };
    out.push_str(&format!("  {:<22} {}\n", format!("{label}:"), value));
}

#[cfg(test)]
mod tests {
    use super::*;
    use unicat_catalog::{CountryCode, UniversityEntry};

    fn tum() -> University {
        let entry = UniversityEntry {
            rank: 2,
            university_name: "Technical University of Munich".into(),
            city: "Munich".into(),
            institution_type: "Public".into(),
            popular_english_programs: vec!["MS Informatics".into(), "MS Robotics".into()],
            gre_required: "No".into(),
            annual_tuition_fee_inr: "₹ 2,70,000 (EUR 3,000)".into(),
            avg_starting_salary_inr: "₹ 50,00,000 (EUR 55,000)".into(),
            program_duration_years: "2".into(),
            visa_risk: "Low".into(),
            website: "https://www.tum.de".into(),
            ..Default::default()
        };
        University::from_entry(entry, CountryCode::Germany)
    }

    #[test]
    fn header_names_rank_city_and_country() {
        let out = render_detail(&tum());
        assert!(out.starts_with("#2 Technical University of Munich\n"));
        assert!(out.contains("Munich, 🇩🇪 Germany"));
        assert!(out.contains("Visa risk: Low"));
    }

    #[test]
    fn programs_are_numbered() {
        let out = render_detail(&tum());
        assert!(out.contains("  1. MS Informatics\n"));
        assert!(out.contains("  2. MS Robotics\n"));
    }

    #[test]
    fn roi_snapshot_uses_headline_amounts() {
        let out = render_detail(&tum());
        assert!(out.contains("₹ 2,70,000 (EUR 3,000)"));
        assert!(out.contains("Tuition:"));
        assert!(out.contains("₹ 50,00,000\n"));
        assert!(out.contains("2 years"));
    }

    #[test]
    fn empty_fields_render_as_dash() {
        let out = render_detail(&tum());
        let living = out
            .lines()
            .find(|l| l.trim_start().starts_with("Living cost:"))
            .unwrap();
        assert!(living.ends_with(" -"));
    }
}
