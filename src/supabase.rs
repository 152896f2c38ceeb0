//! # supabase: RPC client against the PostgREST endpoint
//!
//! Every backend operation is a single `POST /rest/v1/rpc/<procedure>`
//! carrying a JSON parameter object, authenticated with the project key.
//! Responses are validated by typed deserialization; a shape mismatch is a
//! [`BackendError::Validation`], distinct from transport failures.

use std::env;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error, info};

use async_trait::async_trait;

use crate::backend::{BackendError, ContractStore, JobStore};
use crate::listing::{
    Contract, ContractAnalytics, ContractFilter, ContractPatch, Job, JobCounts, JobFilter,
    NewContract,
};

/// Environment variable naming the backend endpoint, e.g.
/// `https://abcdefgh.supabase.co`.
pub const ENV_SUPABASE_URL: &str = "SUPABASE_URL";
/// Environment variable carrying the backend service key.
pub const ENV_SUPABASE_KEY: &str = "SUPABASE_KEY";

#[derive(Debug)]
pub struct SupabaseClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl SupabaseClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        SupabaseClient {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Construct from `SUPABASE_URL` and `SUPABASE_KEY`. Fails fast with
    /// [`BackendError::NotConfigured`] when either is missing or blank, so
    /// remote operations never get as far as a half-configured request.
    pub fn new_from_env() -> Result<Self, BackendError> {
        let base_url = env::var(ENV_SUPABASE_URL)
            .ok()
            .filter(|value| !value.trim().is_empty());
        let api_key = env::var(ENV_SUPABASE_KEY)
            .ok()
            .filter(|value| !value.trim().is_empty());

        match (base_url, api_key) {
            (Some(base_url), Some(api_key)) => {
                debug!(base_url = %base_url, "constructed backend client from environment");
                Ok(SupabaseClient::new(base_url, api_key))
            }
            _ => {
                error!("backend endpoint or key missing from environment");
                Err(BackendError::NotConfigured)
            }
        }
    }

    /// Invoke a named remote procedure and return its raw JSON result.
    async fn rpc(&self, procedure: &str, params: Value) -> Result<Value, BackendError> {
        let url = format!(
            "{}/rest/v1/rpc/{}",
            self.base_url.trim_end_matches('/'),
            procedure
        );
        debug!(procedure, "calling backend procedure");

        let response = self
            .http
            .post(&url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .json(&params)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            // PostgREST error payloads carry the message under "message";
            // fall back to the raw body for anything else.
            let message = serde_json::from_str::<Value>(&body)
                .ok()
                .and_then(|payload| {
                    payload
                        .get("message")
                        .and_then(Value::as_str)
                        .map(str::to_string)
                })
                .unwrap_or(body);
            error!(procedure, status = %status, message = %message, "backend returned an error");
            return Err(BackendError::Api(message));
        }

        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&body).map_err(|e| BackendError::Validation(e.to_string()))
    }
}

/// Aggregate procedures may return their single row wrapped in a
/// one-element array; unwrap that case before validation.
fn single_row(value: Value) -> Value {
    match value {
        Value::Array(mut rows) if !rows.is_empty() => rows.remove(0),
        Value::Array(_) => Value::Null,
        other => other,
    }
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, BackendError> {
    serde_json::from_value(value).map_err(|e| BackendError::Validation(e.to_string()))
}

fn encode<T: serde::Serialize>(params: &T) -> Result<Value, BackendError> {
    serde_json::to_value(params).map_err(|e| BackendError::Validation(e.to_string()))
}

#[async_trait]
impl ContractStore for SupabaseClient {
    async fn add_contract(&self, new: NewContract) -> Result<(), BackendError> {
        let params = encode(&new)?;
        self.rpc("add_contract", params).await?;
        info!(job_url = %new.job_url, company = %new.company_name, "contract created");
        Ok(())
    }

    async fn update_contract(&self, patch: ContractPatch) -> Result<(), BackendError> {
        let params = encode(&patch)?;
        self.rpc("update_contract", params).await?;
        info!(job_url = %patch.job_url, "contract updated");
        Ok(())
    }

    async fn list_contracts(
        &self,
        filter: ContractFilter,
    ) -> Result<Vec<Contract>, BackendError> {
        let rows = self.rpc("get_contracts", encode(&filter)?).await?;
        let contracts: Vec<Contract> = decode(rows)?;
        debug!(count = contracts.len(), "fetched contract listings");
        Ok(contracts)
    }

    async fn contract_analytics(&self) -> Result<ContractAnalytics, BackendError> {
        let row = self
            .rpc("get_contract_analytics", serde_json::json!({}))
            .await?;
        decode(single_row(row))
    }
}

#[async_trait]
impl JobStore for SupabaseClient {
    async fn list_jobs(&self, filter: JobFilter) -> Result<Vec<Job>, BackendError> {
        let rows = self.rpc("get_jobs", encode(&filter)?).await?;
        let jobs: Vec<Job> = decode(rows)?;
        debug!(count = jobs.len(), "fetched job listings");
        Ok(jobs)
    }

    async fn job_counts(&self) -> Result<JobCounts, BackendError> {
        let row = self.rpc("get_job_counts", serde_json::json!({})).await?;
        decode(single_row(row))
    }
}
