//! # config: table layout, README markers, and environment-backed settings
//!
//! Marker pairs are HTML comments so they survive Markdown rendering.
//! Exactly one pair exists per priority-tier and category table plus one
//! per analytics sub-section; a pair missing from the README leaves that
//! region unmodified.

use std::env;

use tracing::debug;

use crate::splice::Section;

/// Column headers for the contract tables.
pub const CONTRACT_HEADERS: [&str; 7] = [
    "Company",
    "Position",
    "Rate",
    "Duration",
    "Start",
    "Tech Stack",
    "Apply",
];

/// Column headers for the job tables.
pub const JOB_HEADERS: [&str; 6] = [
    "Company",
    "Role",
    "Salary",
    "Location",
    "Tech Stack",
    "Apply",
];

// Contract board regions.
pub const TABLE_URGENT: Section = Section {
    start: "<!-- TABLE_URGENT_START -->",
    end: "<!-- TABLE_URGENT_END -->",
};
pub const TABLE_HIGH: Section = Section {
    start: "<!-- TABLE_HIGH_START -->",
    end: "<!-- TABLE_HIGH_END -->",
};
pub const TABLE_NORMAL: Section = Section {
    start: "<!-- TABLE_NORMAL_START -->",
    end: "<!-- TABLE_NORMAL_END -->",
};
pub const ANALYTICS_STATS: Section = Section {
    start: "<!-- ANALYTICS_START -->",
    end: "<!-- ANALYTICS_END -->",
};
pub const ANALYTICS_SKILLS: Section = Section {
    start: "<!-- SKILLS_START -->",
    end: "<!-- SKILLS_END -->",
};
pub const ANALYTICS_INDUSTRIES: Section = Section {
    start: "<!-- INDUSTRIES_START -->",
    end: "<!-- INDUSTRIES_END -->",
};
pub const ANALYTICS_DURATIONS: Section = Section {
    start: "<!-- DURATIONS_START -->",
    end: "<!-- DURATIONS_END -->",
};

// Job board regions.
pub const TABLE_FAANG: Section = Section {
    start: "<!-- TABLE_FAANG_START -->",
    end: "<!-- TABLE_FAANG_END -->",
};
pub const TABLE_QUANT: Section = Section {
    start: "<!-- TABLE_QUANT_START -->",
    end: "<!-- TABLE_QUANT_END -->",
};
pub const TABLE_OTHER: Section = Section {
    start: "<!-- TABLE_OTHER_START -->",
    end: "<!-- TABLE_OTHER_END -->",
};
pub const JOB_COUNTS: Section = Section {
    start: "<!-- JOB_COUNTS_START -->",
    end: "<!-- JOB_COUNTS_END -->",
};

/// Image shown inside rendered "Apply" links. Optional; rendering degrades
/// to an empty image source when unset.
pub fn apply_img_url() -> Option<String> {
    env::var("APPLY_IMG_URL")
        .ok()
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty())
}

/// Author identity for the automation commit, taken from the environment.
#[derive(Debug, Clone)]
pub struct CommitIdentity {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl CommitIdentity {
    pub fn from_env() -> Self {
        let identity = CommitIdentity {
            name: env::var("GIT_USER_NAME").ok().filter(|v| !v.is_empty()),
            email: env::var("GIT_USER_EMAIL").ok().filter(|v| !v.is_empty()),
        };
        debug!(
            name = identity.name.as_deref().unwrap_or("<unset>"),
            "loaded commit identity"
        );
        identity
    }
}
