//! # regenerate: scheduled README regeneration
//!
//! Each run reads the document fresh from disk, applies every table and
//! section mutation to the in-memory copy, and writes the file back once.
//! Folding all mutations into a single read-apply-write sequence keeps two
//! near-simultaneous runs from silently dropping each other's sections.
//!
//! Tiers and categories are processed sequentially; each splice operates
//! on the result of the previous one. A failed remote call aborts the
//! remaining sections for the invocation.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::backend::{ContractStore, JobStore};
use crate::config;
use crate::listing::{Category, Contract, ContractFilter, Job, JobFilter, Priority};
use crate::render;
use crate::splice::splice;
use crate::supabase::SupabaseClient;

/// Per-tier row counts for the contract board log line.
#[derive(Debug)]
pub struct ContractBoardReport {
    pub total: usize,
    pub urgent: usize,
    pub high: usize,
    pub normal: usize,
}

/// Per-category row counts for the job board log line.
#[derive(Debug)]
pub struct JobBoardReport {
    pub total: usize,
    pub faang: usize,
    pub quant: usize,
    pub other: usize,
}

/// Regenerate the contract tables and analytics sections of `readme_path`.
pub async fn regenerate_contracts<S>(store: &S, readme_path: &Path) -> Result<ContractBoardReport>
where
    S: ContractStore + ?Sized,
{
    let mut document = fs::read_to_string(readme_path)
        .with_context(|| format!("failed to read {}", readme_path.display()))?;

    let contracts = store.list_contracts(ContractFilter::default()).await?;
    let apply_img_url = config::apply_img_url();

    let tiers = [
        (Priority::Urgent, config::TABLE_URGENT),
        (Priority::High, config::TABLE_HIGH),
        (Priority::Normal, config::TABLE_NORMAL),
    ];
    let mut tier_counts = [0usize; 3];
    for (i, (tier, section)) in tiers.iter().enumerate() {
        let rows: Vec<&Contract> = contracts
            .iter()
            .filter(|contract| contract.priority == Some(*tier))
            .collect();
        tier_counts[i] = rows.len();
        let table = render::contract_table(&rows, apply_img_url.as_deref());
        document = splice(&document, section, &table);
    }

    let analytics = store.contract_analytics().await?;
    document = splice(
        &document,
        &config::ANALYTICS_STATS,
        &render::analytics_stats(&analytics),
    );
    document = splice(
        &document,
        &config::ANALYTICS_SKILLS,
        &render::analytics_skills(&analytics),
    );
    document = splice(
        &document,
        &config::ANALYTICS_INDUSTRIES,
        &render::analytics_industries(&analytics),
    );
    document = splice(
        &document,
        &config::ANALYTICS_DURATIONS,
        &render::analytics_durations(&analytics),
    );

    fs::write(readme_path, &document)
        .with_context(|| format!("failed to write {}", readme_path.display()))?;

    let report = ContractBoardReport {
        total: contracts.len(),
        urgent: tier_counts[0],
        high: tier_counts[1],
        normal: tier_counts[2],
    };
    info!(
        total = report.total,
        urgent = report.urgent,
        high = report.high,
        normal = report.normal,
        "regenerated contract board"
    );
    Ok(report)
}

/// Regenerate the job tables and counters section of `readme_path`.
/// Parallel instance of [`regenerate_contracts`].
pub async fn regenerate_jobs<S>(store: &S, readme_path: &Path) -> Result<JobBoardReport>
where
    S: JobStore + ?Sized,
{
    let mut document = fs::read_to_string(readme_path)
        .with_context(|| format!("failed to read {}", readme_path.display()))?;

    let jobs = store.list_jobs(JobFilter::default()).await?;
    let apply_img_url = config::apply_img_url();

    let categories = [
        (Category::Faang, config::TABLE_FAANG),
        (Category::Quant, config::TABLE_QUANT),
        (Category::Other, config::TABLE_OTHER),
    ];
    let mut category_counts = [0usize; 3];
    for (i, (category, section)) in categories.iter().enumerate() {
        let rows: Vec<&Job> = jobs
            .iter()
            .filter(|job| job.category == Some(*category))
            .collect();
        category_counts[i] = rows.len();
        let table = render::job_table(&rows, apply_img_url.as_deref());
        document = splice(&document, section, &table);
    }

    let counts = store.job_counts().await?;
    document = splice(
        &document,
        &config::JOB_COUNTS,
        &render::job_counts_section(&counts),
    );

    fs::write(readme_path, &document)
        .with_context(|| format!("failed to write {}", readme_path.display()))?;

    let report = JobBoardReport {
        total: jobs.len(),
        faang: category_counts[0],
        quant: category_counts[1],
        other: category_counts[2],
    };
    info!(
        total = report.total,
        faang = report.faang,
        quant = report.quant,
        other = report.other,
        "regenerated job board"
    );
    Ok(report)
}

/// CLI entrypoint for the contract board.
pub async fn run_contracts(readme_path: &Path) -> Result<ContractBoardReport> {
    let store = SupabaseClient::new_from_env()?;
    regenerate_contracts(&store, readme_path).await
}

/// CLI entrypoint for the job board.
pub async fn run_jobs(readme_path: &Path) -> Result<JobBoardReport> {
    let store = SupabaseClient::new_from_env()?;
    regenerate_jobs(&store, readme_path).await
}
