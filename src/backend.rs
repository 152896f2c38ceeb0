//! # backend: query/mutation interface to the remote data store
//!
//! Two traits, one per board. The contract board and the job board use
//! distinct backend procedures and slightly different schemas; they are
//! kept as parallel instances of the same interface shape rather than
//! unified behind a shared abstraction.
//!
//! ## Mocking & Testing
//! Both traits are annotated for `mockall`, so orchestrators are tested
//! against deterministic mocks without touching the network. The mocks are
//! exported under the `test-export-mocks` feature for integration tests.

use async_trait::async_trait;
#[cfg(any(test, feature = "test-export-mocks"))]
use mockall::automock;
use thiserror::Error;

use crate::listing::{
    Contract, ContractAnalytics, ContractFilter, ContractPatch, Job, JobCounts, JobFilter,
    NewContract,
};

/// Failure taxonomy for remote calls.
///
/// Parse failures never appear here: field extraction degrades to absent
/// values instead of failing. Everything below aborts the current run.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The client was never initialized; the backend endpoint or key is
    /// missing from the environment.
    #[error("backend client is not initialized: set SUPABASE_URL and SUPABASE_KEY")]
    NotConfigured,

    /// The HTTP exchange itself failed.
    #[error("backend transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with an error payload; the message is
    /// propagated verbatim.
    #[error("{0}")]
    Api(String),

    /// The response arrived but does not match the expected record shape.
    #[error("data validation error: {0}")]
    Validation(String),
}

/// Remote operations on the contract board.
#[cfg_attr(any(test, feature = "test-export-mocks"), automock)]
#[async_trait]
pub trait ContractStore: Send + Sync {
    /// Create a contract listing. One remote write; no local state.
    async fn add_contract(&self, new: NewContract) -> Result<(), BackendError>;

    /// Update a contract listing by its posting URL.
    async fn update_contract(&self, patch: ContractPatch) -> Result<(), BackendError>;

    /// List contract listings, optionally filtered by priority tier and
    /// rate bounds. The response is validated against the record shape.
    async fn list_contracts(&self, filter: ContractFilter)
        -> Result<Vec<Contract>, BackendError>;

    /// Fetch the recomputed analytics aggregate.
    async fn contract_analytics(&self) -> Result<ContractAnalytics, BackendError>;
}

/// Remote operations on the job board.
#[cfg_attr(any(test, feature = "test-export-mocks"), automock)]
#[async_trait]
pub trait JobStore: Send + Sync {
    /// List job listings, optionally filtered by company category.
    async fn list_jobs(&self, filter: JobFilter) -> Result<Vec<Job>, BackendError>;

    /// Fetch the fixed set of named counters.
    async fn job_counts(&self) -> Result<JobCounts, BackendError>;
}
