//! # render: records in, Markdown out
//!
//! Deterministic, pure table and section generation. Row order is input
//! order; grouping and filtering by tier or category happen upstream in
//! the regeneration orchestrators, never here.

use chrono::NaiveDate;

use crate::config::{CONTRACT_HEADERS, JOB_HEADERS};
use crate::listing::{Contract, ContractAnalytics, Job, JobCounts};

/// Collapse internal whitespace runs to a single space and trim, so
/// embedded newlines from free-text answers never break the table's
/// row-per-line structure.
pub fn clean_cell(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Hourly rate range: `$50/hr`, `$50-80/hr`, `$50+/hr`, `$80/hr`, `TBD`.
pub fn format_rate(min: Option<f64>, max: Option<f64>) -> String {
    match (min, max) {
        (Some(min), Some(max)) if min == max => format!("${min}/hr"),
        (Some(min), Some(max)) => format!("${min}-{max}/hr"),
        (Some(min), None) => format!("${min}+/hr"),
        (None, Some(max)) => format!("${max}/hr"),
        (None, None) => "TBD".to_string(),
    }
}

/// Salary range in thousands per year: `$150k`, `$150-200k`, `$150k+`,
/// `$200k`, `TBD`. Parallel to [`format_rate`] for the job board.
pub fn format_salary(min: Option<f64>, max: Option<f64>) -> String {
    match (min, max) {
        (Some(min), Some(max)) if min == max => format!("${min}k"),
        (Some(min), Some(max)) => format!("${min}-{max}k"),
        (Some(min), None) => format!("${min}k+"),
        (None, Some(max)) => format!("${max}k"),
        (None, None) => "TBD".to_string(),
    }
}

/// Short month/day with a relative-time suffix derived from the backend's
/// `days_until_start`. An absent date renders as "Flexible"; a date that
/// fails to parse falls back to the raw text.
pub fn format_start_date(start_date: Option<&str>, days_until_start: Option<i64>) -> String {
    let Some(raw) = start_date else {
        return "Flexible".to_string();
    };

    let formatted = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(|date| date.format("%b %-d").to_string())
        .unwrap_or_else(|_| raw.to_string());

    let Some(days) = days_until_start else {
        return formatted;
    };
    if days < 0 {
        format!("{formatted} (Started)")
    } else if days == 0 {
        format!("{formatted} (Today!)")
    } else if days <= 7 {
        format!("{formatted} ({days}d)")
    } else if days <= 30 {
        // Whole weeks, rounded up.
        format!("{formatted} (~{}w)", (days + 6) / 7)
    } else {
        formatted
    }
}

/// Comma-joined tag list, truncated past three entries with a `+N` suffix.
pub fn format_tech_stack(tech_stack: Option<&[String]>) -> String {
    match tech_stack {
        None => String::new(),
        Some([]) => String::new(),
        Some(items) if items.len() <= 3 => items.join(", "),
        Some(items) => format!("{} +{}", items[..3].join(", "), items.len() - 3),
    }
}

fn apply_cell(job_url: &str, apply_img_url: Option<&str>) -> String {
    format!(
        "<a href=\"{}\"><img src=\"{}\" alt=\"Apply\" width=\"70\"/></a>",
        clean_cell(job_url),
        apply_img_url.unwrap_or("")
    )
}

fn company_cell(name: &str, url: Option<&str>) -> String {
    let name = clean_cell(name);
    match url {
        Some(url) => format!(
            "<a href=\"{}\"><strong>{}</strong></a>",
            clean_cell(url),
            name
        ),
        None => format!("<strong>{name}</strong>"),
    }
}

fn table_head(headers: &[&str]) -> String {
    let mut table = format!("| {} |\n", headers.join(" | "));
    table.push_str(&format!(
        "|{}|\n",
        headers.iter().map(|_| "---").collect::<Vec<_>>().join("|")
    ));
    table
}

/// Render one contract table. Rows keep their input order.
pub fn contract_table(contracts: &[&Contract], apply_img_url: Option<&str>) -> String {
    let mut table = table_head(&CONTRACT_HEADERS);

    for contract in contracts {
        let mut company = company_cell(&contract.company_name, contract.company_url.as_deref());
        if let Some(industry) = &contract.client_industry {
            company.push_str(&format!(" <sub>{}</sub>", clean_cell(industry)));
        }

        let mut position = clean_cell(&contract.job_title);
        if contract.clearance_required.unwrap_or(false) {
            position.push_str(" :lock:");
        }
        if contract.corp_to_corp.unwrap_or(false) {
            position.push_str(" :briefcase:");
        }

        let row = [
            company,
            position,
            format_rate(contract.hourly_rate_min, contract.hourly_rate_max),
            contract
                .contract_duration
                .as_deref()
                .map(clean_cell)
                .unwrap_or_else(|| "TBD".to_string()),
            format_start_date(contract.start_date.as_deref(), contract.days_until_start),
            format_tech_stack(contract.tech_stack.as_deref()),
            apply_cell(&contract.job_url, apply_img_url),
        ];
        table.push_str(&format!("| {} |\n", row.join(" | ")));
    }

    table
}

/// Render one job table. Parallel instance of [`contract_table`].
pub fn job_table(jobs: &[&Job], apply_img_url: Option<&str>) -> String {
    let mut table = table_head(&JOB_HEADERS);

    for job in jobs {
        let location = match (&job.job_locations, job.is_remote) {
            (Some(locations), _) => clean_cell(locations),
            (None, Some(true)) => "Remote".to_string(),
            (None, _) => "TBD".to_string(),
        };

        let row = [
            company_cell(&job.company_name, job.company_url.as_deref()),
            clean_cell(&job.job_title),
            format_salary(job.salary_min, job.salary_max),
            location,
            format_tech_stack(job.tech_stack.as_deref()),
            apply_cell(&job.job_url, apply_img_url),
        ];
        table.push_str(&format!("| {} |\n", row.join(" | ")));
    }

    table
}

/// Sort a frequency map by count descending. The source map iterates in
/// key order, and the sort is stable, so ties stay alphabetical.
fn by_count_desc(map: &std::collections::BTreeMap<String, i64>) -> Vec<(&str, i64)> {
    let mut entries: Vec<(&str, i64)> = map
        .iter()
        .map(|(label, count)| (label.as_str(), *count))
        .collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1));
    entries
}

pub fn analytics_stats(analytics: &ContractAnalytics) -> String {
    let avg_rate = analytics
        .avg_hourly_rate
        .map(|rate| format!("${rate}/hr"))
        .unwrap_or_else(|| "N/A".to_string());
    let rate_range = match (analytics.min_hourly_rate, analytics.max_hourly_rate) {
        (Some(min), Some(max)) => format!("${min} - ${max}/hr"),
        _ => "N/A".to_string(),
    };

    format!(
        "| Metric | Value |\n\
         |--------|-------|\n\
         | **Total Active Contracts** | {} |\n\
         | **Average Rate** | {} |\n\
         | **Rate Range** | {} |\n\
         | **Urgent Contracts** | {} |\n\
         | **Starting in 30 Days** | {} |",
        analytics.total_active,
        avg_rate,
        rate_range,
        analytics.urgent_count,
        analytics.starting_soon_count
    )
}

/// Top ten skills as inline code badges with counts.
pub fn analytics_skills(analytics: &ContractAnalytics) -> String {
    let Some(skills) = analytics.top_skills.as_ref().filter(|map| !map.is_empty()) else {
        return "_No skill data available_".to_string();
    };

    by_count_desc(skills)
        .into_iter()
        .take(10)
        .map(|(skill, count)| format!("`{skill}` ({count})"))
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Top five industries as a bullet list.
pub fn analytics_industries(analytics: &ContractAnalytics) -> String {
    let Some(industries) = analytics.by_industry.as_ref().filter(|map| !map.is_empty()) else {
        return "_No industry data available_".to_string();
    };

    by_count_desc(industries)
        .into_iter()
        .take(5)
        .map(|(industry, count)| format!("- **{industry}**: {count} contracts"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// All durations as a bullet list.
pub fn analytics_durations(analytics: &ContractAnalytics) -> String {
    let Some(durations) = analytics.by_duration.as_ref().filter(|map| !map.is_empty()) else {
        return "_No duration data available_".to_string();
    };

    by_count_desc(durations)
        .into_iter()
        .map(|(duration, count)| format!("- **{duration}**: {count} contracts"))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn job_counts_section(counts: &JobCounts) -> String {
    format!(
        "| Metric | Value |\n\
         |--------|-------|\n\
         | **Total Active Roles** | {} |\n\
         | **FAANG+** | {} |\n\
         | **Quant / HFT** | {} |\n\
         | **Other** | {} |\n\
         | **Added This Week** | {} |",
        counts.total_active,
        counts.faang_count,
        counts.quant_count,
        counts.other_count,
        counts.added_this_week
    )
}
