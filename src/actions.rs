//! # actions: named string outputs for the automation runner
//!
//! The CI workflow reads `key=value` lines from the file named by
//! `GITHUB_OUTPUT` to pick up the commit message, author identity, and any
//! failure message. Outside of a workflow run the variable is unset and
//! outputs are skipped.

use std::env;
use std::fs::OpenOptions;
use std::io::Write;

use tracing::debug;

/// Append one named output. Values are flattened to a single line, since
/// the output file format is line-delimited.
pub fn set_output(name: &str, value: &str) -> std::io::Result<()> {
    let Ok(path) = env::var("GITHUB_OUTPUT") else {
        debug!(name, "GITHUB_OUTPUT not set; skipping output");
        return Ok(());
    };

    let value = value.replace(['\r', '\n'], " ");
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{name}={value}")?;
    debug!(name, "wrote workflow output");
    Ok(())
}
