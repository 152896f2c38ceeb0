use std::collections::BTreeMap;

use board_sync::listing::{Category, Contract, ContractAnalytics, Job, JobCounts, Priority};
use board_sync::render::{
    analytics_durations, analytics_industries, analytics_skills, analytics_stats, clean_cell,
    contract_table, format_rate, format_salary, format_start_date, format_tech_stack, job_table,
    job_counts_section,
};

fn contract() -> Contract {
    Contract {
        id: Some("3fa17a1e-3c3a-4d22-9d5c-2f9b9f0f2a11".to_string()),
        company_name: "Acme Analytics".to_string(),
        company_url: Some("https://acme.example.com".to_string()),
        client_industry: Some("Fintech".to_string()),
        job_title: "Senior Rust Engineer".to_string(),
        job_url: "https://boards.example.com/contract/42".to_string(),
        job_locations: Some("Remote (US)".to_string()),
        hourly_rate_min: Some(95.0),
        hourly_rate_max: Some(140.0),
        contract_duration: Some("6 months".to_string()),
        start_date: Some("2025-09-01".to_string()),
        tech_stack: Some(vec!["Rust".to_string(), "Tokio".to_string()]),
        experience_years_min: Some(5.0),
        clearance_required: Some(true),
        corp_to_corp: Some(true),
        is_remote: Some(true),
        priority: Some(Priority::Urgent),
        age: 3.0,
        days_until_start: Some(14),
    }
}

fn job() -> Job {
    Job {
        id: 7,
        company_name: "Hudson Trading".to_string(),
        company_url: None,
        job_title: "Quant Developer".to_string(),
        job_url: "https://jobs.example.com/7".to_string(),
        job_locations: None,
        salary_min: Some(250.0),
        salary_max: Some(400.0),
        tech_stack: Some(vec![
            "C++".to_string(),
            "Rust".to_string(),
            "Python".to_string(),
            "KDB".to_string(),
        ]),
        category: Some(Category::Quant),
        is_remote: Some(true),
        age: 1.0,
        days_until_start: None,
    }
}

#[test]
fn rate_formatting_covers_all_bound_combinations() {
    assert_eq!(format_rate(Some(50.0), Some(50.0)), "$50/hr");
    assert_eq!(format_rate(Some(50.0), Some(80.0)), "$50-80/hr");
    assert_eq!(format_rate(Some(50.0), None), "$50+/hr");
    assert_eq!(format_rate(None, Some(80.0)), "$80/hr");
    assert_eq!(format_rate(None, None), "TBD");
}

#[test]
fn salary_formatting_mirrors_rate_formatting() {
    assert_eq!(format_salary(Some(150.0), Some(150.0)), "$150k");
    assert_eq!(format_salary(Some(150.0), Some(200.0)), "$150-200k");
    assert_eq!(format_salary(Some(150.0), None), "$150k+");
    assert_eq!(format_salary(None, Some(200.0)), "$200k");
    assert_eq!(format_salary(None, None), "TBD");
}

#[test]
fn start_date_suffix_tracks_days_until_start() {
    assert_eq!(
        format_start_date(Some("2025-09-01"), Some(3)),
        "Sep 1 (3d)"
    );
    assert_eq!(
        format_start_date(Some("2025-09-01"), Some(14)),
        "Sep 1 (~2w)"
    );
    assert_eq!(
        format_start_date(Some("2025-09-01"), Some(-1)),
        "Sep 1 (Started)"
    );
    assert_eq!(
        format_start_date(Some("2025-09-01"), Some(0)),
        "Sep 1 (Today!)"
    );
    assert_eq!(
        format_start_date(Some("2025-09-01"), Some(7)),
        "Sep 1 (7d)"
    );
    assert_eq!(
        format_start_date(Some("2025-09-01"), Some(8)),
        "Sep 1 (~2w)"
    );
    assert_eq!(
        format_start_date(Some("2025-09-01"), Some(30)),
        "Sep 1 (~5w)"
    );
    // Beyond thirty days the suffix disappears.
    assert_eq!(format_start_date(Some("2025-09-01"), Some(31)), "Sep 1");
    assert_eq!(format_start_date(Some("2025-09-01"), None), "Sep 1");
}

#[test]
fn absent_start_date_is_flexible() {
    assert_eq!(format_start_date(None, Some(5)), "Flexible");
    assert_eq!(format_start_date(None, None), "Flexible");
}

#[test]
fn unparseable_start_date_falls_back_to_raw_text() {
    assert_eq!(format_start_date(Some("ASAP"), None), "ASAP");
}

#[test]
fn tech_stack_truncates_past_three_entries() {
    let stack: Vec<String> = ["Go", "Rust", "TS", "Python"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    assert_eq!(format_tech_stack(Some(&stack)), "Go, Rust, TS +1");

    let short: Vec<String> = ["Go", "Rust"].iter().map(|s| s.to_string()).collect();
    assert_eq!(format_tech_stack(Some(&short)), "Go, Rust");

    assert_eq!(format_tech_stack(Some(&[])), "");
    assert_eq!(format_tech_stack(None), "");
}

#[test]
fn cells_collapse_internal_whitespace() {
    assert_eq!(clean_cell("  spread\nacross\t lines "), "spread across lines");
}

#[test]
fn contract_table_renders_one_row_per_record() {
    let contracts = [contract()];
    let rows: Vec<&Contract> = contracts.iter().collect();
    let table = contract_table(&rows, Some("https://img.example.com/apply.png"));

    let lines: Vec<&str> = table.lines().collect();
    assert_eq!(lines.len(), 3, "header, separator, one row");
    assert_eq!(
        lines[0],
        "| Company | Position | Rate | Duration | Start | Tech Stack | Apply |"
    );
    assert_eq!(lines[1], "|---|---|---|---|---|---|---|");

    let row = lines[2];
    assert!(row.contains("<a href=\"https://acme.example.com\"><strong>Acme Analytics</strong></a>"));
    assert!(row.contains("<sub>Fintech</sub>"));
    assert!(row.contains("Senior Rust Engineer :lock: :briefcase:"));
    assert!(row.contains("$95-140/hr"));
    assert!(row.contains("6 months"));
    assert!(row.contains("Sep 1 (~2w)"));
    assert!(row.contains("Rust, Tokio"));
    assert!(row.contains("<img src=\"https://img.example.com/apply.png\""));
}

#[test]
fn contract_table_with_no_records_is_just_the_header() {
    let table = contract_table(&[], None);
    assert_eq!(
        table,
        "| Company | Position | Rate | Duration | Start | Tech Stack | Apply |\n\
         |---|---|---|---|---|---|---|\n"
    );
}

#[test]
fn job_table_marks_remote_roles_without_a_location() {
    let jobs = [job()];
    let rows: Vec<&Job> = jobs.iter().collect();
    let table = job_table(&rows, None);

    let row = table.lines().nth(2).expect("one data row");
    assert!(row.contains("<strong>Hudson Trading</strong>"));
    assert!(row.contains("Quant Developer"));
    assert!(row.contains("$250-400k"));
    assert!(row.contains("| Remote |"));
    assert!(row.contains("C++, Rust, Python +1"));
}

#[test]
fn analytics_stats_table_reports_rates_or_na() {
    let analytics = ContractAnalytics {
        total_active: 12,
        avg_hourly_rate: Some(105.0),
        min_hourly_rate: Some(60.0),
        max_hourly_rate: Some(180.0),
        urgent_count: 3,
        starting_soon_count: 5,
        by_duration: None,
        top_skills: None,
        by_industry: None,
    };
    let section = analytics_stats(&analytics);
    assert!(section.contains("| **Total Active Contracts** | 12 |"));
    assert!(section.contains("| **Average Rate** | $105/hr |"));
    assert!(section.contains("| **Rate Range** | $60 - $180/hr |"));
    assert!(section.contains("| **Urgent Contracts** | 3 |"));
    assert!(section.contains("| **Starting in 30 Days** | 5 |"));

    let empty = ContractAnalytics {
        avg_hourly_rate: None,
        min_hourly_rate: None,
        ..analytics
    };
    let section = analytics_stats(&empty);
    assert!(section.contains("| **Average Rate** | N/A |"));
    assert!(section.contains("| **Rate Range** | N/A |"));
}

fn counts(entries: &[(&str, i64)]) -> BTreeMap<String, i64> {
    entries
        .iter()
        .map(|(label, count)| (label.to_string(), *count))
        .collect()
}

#[test]
fn skills_sort_by_count_with_alphabetical_ties() {
    let analytics = ContractAnalytics {
        total_active: 0,
        avg_hourly_rate: None,
        min_hourly_rate: None,
        max_hourly_rate: None,
        urgent_count: 0,
        starting_soon_count: 0,
        by_duration: None,
        top_skills: Some(counts(&[("Rust", 9), ("Go", 4), ("AWS", 4), ("K8s", 1)])),
        by_industry: None,
    };

    assert_eq!(
        analytics_skills(&analytics),
        "`Rust` (9) | `AWS` (4) | `Go` (4) | `K8s` (1)"
    );
}

#[test]
fn empty_analytics_maps_render_placeholders() {
    let analytics = ContractAnalytics {
        total_active: 0,
        avg_hourly_rate: None,
        min_hourly_rate: None,
        max_hourly_rate: None,
        urgent_count: 0,
        starting_soon_count: 0,
        by_duration: Some(BTreeMap::new()),
        top_skills: None,
        by_industry: None,
    };

    assert_eq!(analytics_skills(&analytics), "_No skill data available_");
    assert_eq!(
        analytics_industries(&analytics),
        "_No industry data available_"
    );
    assert_eq!(
        analytics_durations(&analytics),
        "_No duration data available_"
    );
}

#[test]
fn industries_take_top_five_and_durations_take_all() {
    let analytics = ContractAnalytics {
        total_active: 0,
        avg_hourly_rate: None,
        min_hourly_rate: None,
        max_hourly_rate: None,
        urgent_count: 0,
        starting_soon_count: 0,
        by_duration: Some(counts(&[("3 months", 2), ("6 months", 7), ("12 months", 1)])),
        top_skills: None,
        by_industry: Some(counts(&[
            ("Fintech", 9),
            ("Defense", 6),
            ("Health", 5),
            ("Retail", 4),
            ("Gaming", 3),
            ("Media", 2),
        ])),
    };

    let industries = analytics_industries(&analytics);
    assert!(industries.contains("- **Fintech**: 9 contracts"));
    assert!(industries.contains("- **Gaming**: 3 contracts"));
    assert!(!industries.contains("Media"), "only the top five appear");

    assert_eq!(
        analytics_durations(&analytics),
        "- **6 months**: 7 contracts\n- **3 months**: 2 contracts\n- **12 months**: 1 contracts"
    );
}

#[test]
fn job_counts_section_lists_the_five_counters() {
    let section = job_counts_section(&JobCounts {
        total_active: 40,
        faang_count: 12,
        quant_count: 9,
        other_count: 19,
        added_this_week: 6,
    });

    assert!(section.contains("| **Total Active Roles** | 40 |"));
    assert!(section.contains("| **FAANG+** | 12 |"));
    assert!(section.contains("| **Quant / HFT** | 9 |"));
    assert!(section.contains("| **Other** | 19 |"));
    assert!(section.contains("| **Added This Week** | 6 |"));
}
