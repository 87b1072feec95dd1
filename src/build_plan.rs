//! Build plan written during detection
//!
//! The buildpack provides and requires the same capability. Nothing else in
//! the build consumes it; it only tells the lifecycle this buildpack takes part.

use serde::{Deserialize, Serialize};

/// Capability name provided and required by this buildpack
pub const CAPABILITY: &str = "procfile";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capability {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildPlan {
    pub provides: Vec<Capability>,
    pub requires: Vec<Capability>,
}

impl BuildPlan {
    pub fn procfile() -> Self {
        let capability = || Capability {
            name: CAPABILITY.to_string(),
        };

        Self {
            provides: vec![capability()],
            requires: vec![capability()],
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
