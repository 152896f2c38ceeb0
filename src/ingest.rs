//! # ingest: issue-event orchestrator
//!
//! One invocation handles one issue event: extract the submission from the
//! issue body, decide between create and update from the label set, and
//! make a single remote write. Anything that does not match a recognized
//! label with its mandatory fields is a skip, not an error.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{info, warn};

use crate::actions;
use crate::backend::ContractStore;
use crate::config::CommitIdentity;
use crate::issue::ContractSubmission;
use crate::listing::{ContractPatch, NewContract, Patch, Priority};
use crate::supabase::SupabaseClient;

/// The slice of a GitHub issue event payload this pipeline reads.
#[derive(Debug, Deserialize)]
pub struct IssueEvent {
    pub issue: Option<Issue>,
}

#[derive(Debug, Deserialize)]
pub struct Issue {
    #[serde(default)]
    pub body: Option<String>,
    pub user: Author,
    #[serde(default)]
    pub labels: Vec<Label>,
}

#[derive(Debug, Deserialize)]
pub struct Author {
    pub login: String,
}

#[derive(Debug, Deserialize)]
pub struct Label {
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestOutcome {
    Added,
    Updated,
    Skipped,
}

impl IngestOutcome {
    pub fn commit_message(self) -> Option<&'static str> {
        match self {
            IngestOutcome::Added => Some("chore: add new contract"),
            IngestOutcome::Updated => Some("chore: update contract"),
            IngestOutcome::Skipped => None,
        }
    }
}

impl ContractSubmission {
    /// Creation parameters, present only when the mandatory triple (title,
    /// posting URL, company name) was extracted. Create defaults apply:
    /// clearance and corp-to-corp false, priority normal.
    fn into_new_contract(self) -> Option<NewContract> {
        let (Some(job_title), Some(job_url), Some(company_name)) =
            (self.job_title, self.job_url, self.company_name)
        else {
            return None;
        };

        Some(NewContract {
            job_title,
            job_url,
            company_name,
            company_url: self.company_url,
            client_industry: self.client_industry,
            location: self.location,
            hourly_rate_min: self.hourly_rate_min,
            hourly_rate_max: self.hourly_rate_max,
            contract_duration: self.contract_duration,
            start_date: self.start_date,
            tech_stack: self.tech_stack,
            experience_years_min: self.experience_years_min,
            clearance_required: self.clearance_required.unwrap_or(false),
            corp_to_corp: self.corp_to_corp.unwrap_or(false),
            priority: self.priority.unwrap_or(Priority::Normal),
        })
    }

    /// Update parameters keyed by the posting URL. Absent answers become
    /// [`Patch::Keep`], so the backend leaves those columns unchanged.
    fn into_patch(self) -> Option<ContractPatch> {
        let job_url = self.job_url?;

        Some(ContractPatch {
            job_url,
            job_title: Patch::from_answer(self.job_title),
            company_name: Patch::from_answer(self.company_name),
            company_url: Patch::from_answer(self.company_url),
            client_industry: Patch::from_answer(self.client_industry),
            location: Patch::from_answer(self.location),
            hourly_rate_min: Patch::from_answer(self.hourly_rate_min),
            hourly_rate_max: Patch::from_answer(self.hourly_rate_max),
            contract_duration: Patch::from_answer(self.contract_duration),
            start_date: Patch::from_answer(self.start_date),
            tech_stack: Patch::from_answer(self.tech_stack),
            experience_years_min: Patch::from_answer(self.experience_years_min),
            clearance_required: Patch::from_answer(self.clearance_required),
            corp_to_corp: Patch::from_answer(self.corp_to_corp),
            priority: Patch::from_answer(self.priority),
            status: Patch::from_answer(self.status),
        })
    }
}

/// Process one issue event against the contract store.
pub async fn ingest<S>(store: &S, event: &IssueEvent) -> Result<IngestOutcome>
where
    S: ContractStore + ?Sized,
{
    let Some(issue) = &event.issue else {
        warn!("event payload carries no issue; nothing to do");
        return Ok(IngestOutcome::Skipped);
    };

    let labels: Vec<&str> = issue.labels.iter().map(|label| label.name.as_str()).collect();
    let submission = ContractSubmission::from_body(issue.body.as_deref().unwrap_or(""));
    info!(author = %issue.user.login, ?labels, "processing issue event");

    if labels.contains(&"new") {
        if let Some(new) = submission.into_new_contract() {
            store.add_contract(new).await?;
            return Ok(IngestOutcome::Added);
        }
        warn!("'new' submission is missing title, posting URL, or company name; skipping");
        return Ok(IngestOutcome::Skipped);
    }

    if labels.contains(&"update") {
        if let Some(patch) = submission.into_patch() {
            store.update_contract(patch).await?;
            return Ok(IngestOutcome::Updated);
        }
        warn!("'update' submission carries no posting URL; skipping");
        return Ok(IngestOutcome::Skipped);
    }

    info!("issue has no recognized label; skipping");
    Ok(IngestOutcome::Skipped)
}

fn event_payload_path(event_path: Option<PathBuf>) -> Result<PathBuf> {
    event_path
        .or_else(|| env::var("GITHUB_EVENT_PATH").ok().map(PathBuf::from))
        .context("no event payload: pass --event or set GITHUB_EVENT_PATH")
}

pub fn read_event(path: &Path) -> Result<IssueEvent> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read event payload {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse event payload {}", path.display()))
}

/// CLI entrypoint: read the event payload, run ingestion against the
/// environment-configured backend, and emit the workflow outputs.
pub async fn run_ingest(event_path: Option<PathBuf>) -> Result<IngestOutcome> {
    let path = event_payload_path(event_path)?;
    let event = read_event(&path)?;

    let store = SupabaseClient::new_from_env()?;
    let outcome = ingest(&store, &event).await?;

    if let Some(message) = outcome.commit_message() {
        actions::set_output("commit_message", message)?;
    }
    let identity = CommitIdentity::from_env();
    if let Some(name) = &identity.name {
        actions::set_output("git_user_name", name)?;
    }
    if let Some(email) = &identity.email {
        actions::set_output("git_user_email", email)?;
    }

    Ok(outcome)
}
