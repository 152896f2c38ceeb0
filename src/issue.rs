//! # issue: field extraction from issue form bodies
//!
//! GitHub renders an issue form as a sequence of `### <Field Label>`
//! headings, each followed by a free-text answer block. This module splits
//! the body once on heading lines and indexes the answers by label, then
//! offers typed accessors on top of that index.
//!
//! Extraction is pure and total: no accessor fails for any input string,
//! every field independently degrades to `None` on a parse failure, and
//! the sentinel answers GitHub substitutes for skipped optional inputs
//! (`_No response_`, `None`, the empty string) normalize to `None`.

use regex::Regex;

use crate::listing::{Priority, Status};

const FIELD_TITLE: &str = "Position Title";
const FIELD_JOB_URL: &str = "Contract/Application Link";
const FIELD_COMPANY_NAME: &str = "Company/Client Name";
const FIELD_COMPANY_URL: &str = "Company Website";
const FIELD_INDUSTRY: &str = "Client Industry";
const FIELD_LOCATION: &str = "Location";
const FIELD_RATE_MIN: &str = "Minimum Hourly Rate";
const FIELD_RATE_MAX: &str = "Maximum Hourly Rate";
const FIELD_DURATION: &str = "Contract Duration";
const FIELD_START_DATE: &str = "Start Date";
const FIELD_TECH_STACK: &str = "Tech Stack";
const FIELD_EXPERIENCE: &str = "Minimum Years Experience";
const FIELD_CLEARANCE: &str = "Security Clearance Required?";
const FIELD_CORP_TO_CORP: &str = "Corp-to-Corp (C2C) Available?";
const FIELD_PRIORITY: &str = "Priority Level";
const FIELD_STATUS: &str = "Contract Status";

/// An issue body split into labeled answer blocks.
pub struct IssueForm {
    sections: Vec<(String, String)>,
}

impl IssueForm {
    pub fn parse(body: &str) -> Self {
        // Headings may carry trailing annotations ("Position Title
        // (required)"), so lookups match on label prefix.
        let heading = Regex::new(r"(?m)^###\s+(.+?)\s*$").expect("static pattern");

        let mut sections = Vec::new();
        let matches: Vec<_> = heading.captures_iter(body).collect();
        for (i, captures) in matches.iter().enumerate() {
            let label = captures[1].trim().to_string();
            let answer_start = captures.get(0).expect("whole match").end();
            let answer_end = matches
                .get(i + 1)
                .map(|next| next.get(0).expect("whole match").start())
                .unwrap_or(body.len());
            let answer = body[answer_start..answer_end].trim().to_string();
            sections.push((label, answer));
        }

        IssueForm { sections }
    }

    /// The trimmed answer under the first heading starting with `label`,
    /// with sentinel placeholders normalized to `None`.
    pub fn answer(&self, label: &str) -> Option<&str> {
        let answer = self
            .sections
            .iter()
            .find(|(heading, _)| heading.starts_with(label))
            .map(|(_, answer)| answer.as_str())?;
        match answer {
            "" | "_No response_" | "None" => None,
            present => Some(present),
        }
    }

    pub fn text(&self, label: &str) -> Option<String> {
        self.answer(label).map(str::to_string)
    }

    /// Answer parsed as a float; unparseable input yields `None`.
    pub fn number(&self, label: &str) -> Option<f64> {
        self.answer(label)?.parse::<f64>().ok()
    }

    /// Answer split on commas, elements trimmed, empties dropped. An empty
    /// or absent answer yields `None`, never an empty list.
    pub fn list(&self, label: &str) -> Option<Vec<String>> {
        let items: Vec<String> = self
            .answer(label)?
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect();
        if items.is_empty() {
            None
        } else {
            Some(items)
        }
    }

    /// Binary choice: a present answer maps case-sensitive "Yes" to true
    /// and anything else to false. An absent answer stays `None` so it is
    /// never conflated with an explicit "No".
    pub fn yes_no(&self, label: &str) -> Option<bool> {
        self.answer(label).map(|answer| answer == "Yes")
    }
}

/// A contract submission extracted from an issue body. Every field is
/// optional at this stage; mandatory-field validation happens in the
/// ingest orchestrator, where create and update require different sets.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContractSubmission {
    pub job_title: Option<String>,
    pub job_url: Option<String>,
    pub company_name: Option<String>,
    pub company_url: Option<String>,
    pub client_industry: Option<String>,
    pub location: Option<String>,
    pub hourly_rate_min: Option<f64>,
    pub hourly_rate_max: Option<f64>,
    pub contract_duration: Option<String>,
    pub start_date: Option<String>,
    pub tech_stack: Option<Vec<String>>,
    pub experience_years_min: Option<f64>,
    pub clearance_required: Option<bool>,
    pub corp_to_corp: Option<bool>,
    pub priority: Option<Priority>,
    pub status: Option<Status>,
}

impl ContractSubmission {
    pub fn from_body(body: &str) -> Self {
        let form = IssueForm::parse(body);

        ContractSubmission {
            job_title: form.text(FIELD_TITLE),
            job_url: form.text(FIELD_JOB_URL),
            company_name: form.text(FIELD_COMPANY_NAME),
            company_url: form.text(FIELD_COMPANY_URL),
            client_industry: form.text(FIELD_INDUSTRY),
            location: form.text(FIELD_LOCATION),
            hourly_rate_min: form.number(FIELD_RATE_MIN),
            hourly_rate_max: form.number(FIELD_RATE_MAX),
            contract_duration: form.text(FIELD_DURATION),
            start_date: form.text(FIELD_START_DATE),
            tech_stack: form.list(FIELD_TECH_STACK),
            experience_years_min: form.number(FIELD_EXPERIENCE),
            clearance_required: form.yes_no(FIELD_CLEARANCE),
            corp_to_corp: form.yes_no(FIELD_CORP_TO_CORP),
            priority: form.answer(FIELD_PRIORITY).and_then(Priority::parse),
            status: form.answer(FIELD_STATUS).and_then(Status::classify),
        }
    }
}
