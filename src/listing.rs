//! # listing: shared data model for the board
//!
//! Row shapes returned by the backend, parameter shapes sent to it, and the
//! small vocabulary enums (priority, status, category) used on both sides.
//!
//! Absence is always `Option::None`; the backend speaks JSON null and the
//! serde derives keep the two in lockstep. Update parameters use [`Patch`]
//! instead of `Option` so "leave unchanged" and "clear the column" stay
//! distinguishable (create keeps plain `Option`, where `None` simply means
//! no value was supplied).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize, Serializer};

/// Priority tier routing a contract into one of the rendered tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Urgent,
    High,
    Normal,
}

impl Priority {
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Urgent => "urgent",
            Priority::High => "high",
            Priority::Normal => "normal",
        }
    }

    /// Case-insensitive exact match against the fixed vocabulary.
    pub fn parse(text: &str) -> Option<Self> {
        match text.trim().to_lowercase().as_str() {
            "urgent" => Some(Priority::Urgent),
            "high" => Some(Priority::High),
            "normal" => Some(Priority::Normal),
            _ => None,
        }
    }
}

/// Lifecycle status of a posting. Postings are never deleted; they go
/// inactive or filled instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Active,
    Inactive,
    Filled,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Active => "active",
            Status::Inactive => "inactive",
            Status::Filled => "filled",
        }
    }

    /// Classify free text by substring containment. Precedence:
    /// inactive/closed over filled over active, so "inactive (was filled)"
    /// classifies as inactive regardless of ordering.
    pub fn classify(text: &str) -> Option<Self> {
        let lower = text.to_lowercase();
        if lower.contains("inactive") || lower.contains("closed") {
            Some(Status::Inactive)
        } else if lower.contains("filled") {
            Some(Status::Filled)
        } else if lower.contains("active") {
            Some(Status::Active)
        } else {
            None
        }
    }
}

/// Company category routing a job into one of the rendered tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Faang,
    Quant,
    Other,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Faang => "faang",
            Category::Quant => "quant",
            Category::Other => "other",
        }
    }
}

/// One contract listing as returned by the backend, including the derived
/// `age` and `days_until_start` columns computed server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contract {
    pub id: Option<String>,
    pub company_name: String,
    pub company_url: Option<String>,
    pub client_industry: Option<String>,
    pub job_title: String,
    pub job_url: String,
    pub job_locations: Option<String>,
    pub hourly_rate_min: Option<f64>,
    pub hourly_rate_max: Option<f64>,
    pub contract_duration: Option<String>,
    /// ISO date string, e.g. "2025-09-01".
    pub start_date: Option<String>,
    pub tech_stack: Option<Vec<String>>,
    pub experience_years_min: Option<f64>,
    pub clearance_required: Option<bool>,
    pub corp_to_corp: Option<bool>,
    pub is_remote: Option<bool>,
    pub priority: Option<Priority>,
    /// Days since the posting was created.
    pub age: f64,
    pub days_until_start: Option<i64>,
}

/// One job listing as returned by the backend. Kept as a parallel instance
/// of [`Contract`] rather than unified with it; the two boards use distinct
/// backend procedures and schemas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub id: i64,
    pub company_name: String,
    pub company_url: Option<String>,
    pub job_title: String,
    pub job_url: String,
    pub job_locations: Option<String>,
    /// Salary bounds in thousands per year.
    pub salary_min: Option<f64>,
    pub salary_max: Option<f64>,
    pub tech_stack: Option<Vec<String>>,
    pub category: Option<Category>,
    pub is_remote: Option<bool>,
    pub age: f64,
    pub days_until_start: Option<i64>,
}

/// Aggregate statistics over active contracts, recomputed by the backend on
/// every fetch. The maps are keyed by skill/industry/duration label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractAnalytics {
    pub total_active: i64,
    pub avg_hourly_rate: Option<f64>,
    pub min_hourly_rate: Option<f64>,
    pub max_hourly_rate: Option<f64>,
    pub urgent_count: i64,
    pub starting_soon_count: i64,
    pub by_duration: Option<BTreeMap<String, i64>>,
    pub top_skills: Option<BTreeMap<String, i64>>,
    pub by_industry: Option<BTreeMap<String, i64>>,
}

/// Fixed set of named counters for the job board.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobCounts {
    pub total_active: i64,
    pub faang_count: i64,
    pub quant_count: i64,
    pub other_count: i64,
    pub added_this_week: i64,
}

/// Parameters for creating a contract. Title, URL and company name are
/// mandatory; the serde renames match the backend procedure's parameter
/// names, so this struct serializes directly into the RPC payload.
#[derive(Debug, Clone, Serialize)]
pub struct NewContract {
    #[serde(rename = "_job_title")]
    pub job_title: String,
    #[serde(rename = "_job_url")]
    pub job_url: String,
    #[serde(rename = "_company_name")]
    pub company_name: String,
    #[serde(rename = "_company_url")]
    pub company_url: Option<String>,
    #[serde(rename = "_client_industry")]
    pub client_industry: Option<String>,
    #[serde(rename = "_location")]
    pub location: Option<String>,
    #[serde(rename = "_hourly_rate_min")]
    pub hourly_rate_min: Option<f64>,
    #[serde(rename = "_hourly_rate_max")]
    pub hourly_rate_max: Option<f64>,
    #[serde(rename = "_contract_duration")]
    pub contract_duration: Option<String>,
    #[serde(rename = "_start_date")]
    pub start_date: Option<String>,
    #[serde(rename = "_tech_stack")]
    pub tech_stack: Option<Vec<String>>,
    #[serde(rename = "_experience_years_min")]
    pub experience_years_min: Option<f64>,
    #[serde(rename = "_clearance_required")]
    pub clearance_required: bool,
    #[serde(rename = "_corp_to_corp")]
    pub corp_to_corp: bool,
    #[serde(rename = "_priority")]
    pub priority: Priority,
}

/// Tri-state update field: leave the column unchanged, clear it, or set a
/// new value.
///
/// On the wire, `Keep` is omitted from the payload entirely (the backend
/// procedure's parameter defaults take over), `Clear` serializes as an
/// explicit null, and `Set` as the value. This keeps update semantics
/// unambiguous where a plain `Option` would overload null.
#[derive(Debug, Clone, PartialEq)]
pub enum Patch<T> {
    Keep,
    Clear,
    Set(T),
}

// Manual impl: the derive would demand `T: Default`, which the vocabulary
// enums do not provide.
impl<T> Default for Patch<T> {
    fn default() -> Self {
        Patch::Keep
    }
}

impl<T> Patch<T> {
    pub fn is_keep(&self) -> bool {
        matches!(self, Patch::Keep)
    }

    /// Map an extractor result: a present answer sets the field, an absent
    /// one leaves it unchanged. Clearing is only expressible through the
    /// API, not through the issue form.
    pub fn from_answer(value: Option<T>) -> Self {
        match value {
            Some(v) => Patch::Set(v),
            None => Patch::Keep,
        }
    }
}

impl<T: Serialize> Serialize for Patch<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            // Keep is skipped at the field level; serializing it anyway
            // degrades to null, which the backend reads as no-change.
            Patch::Keep | Patch::Clear => serializer.serialize_none(),
            Patch::Set(value) => value.serialize(serializer),
        }
    }
}

/// Parameters for updating a contract, keyed by its posting URL. Every
/// other field defaults to [`Patch::Keep`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct ContractPatch {
    #[serde(rename = "_job_url")]
    pub job_url: String,
    #[serde(rename = "_new_job_title", skip_serializing_if = "Patch::is_keep")]
    pub job_title: Patch<String>,
    #[serde(rename = "_new_company_name", skip_serializing_if = "Patch::is_keep")]
    pub company_name: Patch<String>,
    #[serde(rename = "_new_company_url", skip_serializing_if = "Patch::is_keep")]
    pub company_url: Patch<String>,
    #[serde(rename = "_new_client_industry", skip_serializing_if = "Patch::is_keep")]
    pub client_industry: Patch<String>,
    #[serde(rename = "_new_location", skip_serializing_if = "Patch::is_keep")]
    pub location: Patch<String>,
    #[serde(rename = "_new_hourly_rate_min", skip_serializing_if = "Patch::is_keep")]
    pub hourly_rate_min: Patch<f64>,
    #[serde(rename = "_new_hourly_rate_max", skip_serializing_if = "Patch::is_keep")]
    pub hourly_rate_max: Patch<f64>,
    #[serde(rename = "_new_contract_duration", skip_serializing_if = "Patch::is_keep")]
    pub contract_duration: Patch<String>,
    #[serde(rename = "_new_start_date", skip_serializing_if = "Patch::is_keep")]
    pub start_date: Patch<String>,
    #[serde(rename = "_new_tech_stack", skip_serializing_if = "Patch::is_keep")]
    pub tech_stack: Patch<Vec<String>>,
    #[serde(rename = "_new_experience_years_min", skip_serializing_if = "Patch::is_keep")]
    pub experience_years_min: Patch<f64>,
    #[serde(rename = "_new_clearance_required", skip_serializing_if = "Patch::is_keep")]
    pub clearance_required: Patch<bool>,
    #[serde(rename = "_new_corp_to_corp", skip_serializing_if = "Patch::is_keep")]
    pub corp_to_corp: Patch<bool>,
    #[serde(rename = "_new_priority", skip_serializing_if = "Patch::is_keep")]
    pub priority: Patch<Priority>,
    #[serde(rename = "_new_status", skip_serializing_if = "Patch::is_keep")]
    pub status: Patch<Status>,
}

/// Optional filters for listing contracts.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ContractFilter {
    #[serde(rename = "p_priority", skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(rename = "p_min_rate", skip_serializing_if = "Option::is_none")]
    pub min_rate: Option<f64>,
    #[serde(rename = "p_max_rate", skip_serializing_if = "Option::is_none")]
    pub max_rate: Option<f64>,
}

/// Optional filters for listing jobs.
#[derive(Debug, Clone, Default, Serialize)]
pub struct JobFilter {
    #[serde(rename = "p_category", skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}
