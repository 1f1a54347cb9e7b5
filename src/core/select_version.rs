use std::fmt;

use color_eyre::eyre::{eyre, Result};
use tracing::{debug, info};

use crate::core::sort_versions::revision_id;

/// A rollback version chosen for an application, exposed to a build under `name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollbackParameterValue {
    pub name: String,
    pub app_name: String,
    pub rollback_version: String,
}

impl RollbackParameterValue {
    pub fn new(name: &str, app_name: &str, rollback_version: &str) -> Self {
        Self {
            name: name.to_string(),
            app_name: app_name.to_string(),
            rollback_version: rollback_version.to_string(),
        }
    }

    pub fn value(&self) -> &str {
        &self.rollback_version
    }

    /// The variables the value is exposed as: under its own name, and under
    /// the upper-cased name when that differs.
    pub fn environment(&self) -> Vec<(String, String)> {
        let mut variables = vec![(self.name.clone(), self.rollback_version.clone())];
        let upper = self.name.to_uppercase();
        if upper != self.name {
            variables.push((upper, self.rollback_version.clone()));
        }
        variables
    }

    pub fn short_description(&self) -> String {
        format!("{}={}", self.name, self.rollback_version)
    }
}

impl fmt::Display for RollbackParameterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(RollbackParameterValue) {}='{}'", self.name, self.rollback_version)
    }
}

/// Pick the rollback version with the given revision id.
///
/// Labels whose id can't be parsed are skipped here, since they can never match.
pub fn select_rollback_version<'a>(rollback_versions: &'a [String], id: i64) -> Result<&'a str> {
    for rollback_version in rollback_versions {
        match revision_id(rollback_version) {
            Ok(candidate) if candidate == id => {
                info!(revision_id = id, "Selected rollback version: {rollback_version}");
                return Ok(rollback_version.as_str());
            }
            Ok(_) => (),
            Err(e) => debug!("Skipping rollback version: {e}"),
        }
    }
    Err(eyre!(
        "No rollback version with revision id {id} among {} candidate(s)",
        rollback_versions.len()
    ))
}
