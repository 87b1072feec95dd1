//! The shared `launch.toml` document
//!
//! Other buildpacks in the same build may already have written process
//! records here. Records whose type this buildpack declares are replaced;
//! every other record and top-level key is carried over untouched.

use crate::error::BuildpackError;
use crate::fs::FileSystem;
use crate::launch::LaunchPlan;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;
use tracing::debug;

/// File name of the launch configuration inside the layers directory
pub const LAUNCH_TOML: &str = "launch.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LaunchConfig {
    #[serde(default)]
    pub processes: Vec<toml::Table>,
    #[serde(flatten)]
    pub other: toml::Table,
}

impl LaunchConfig {
    /// Loads the document, treating a missing file as an empty one
    pub fn load(fs: &dyn FileSystem, path: &Path) -> Result<Self, BuildpackError> {
        match fs.read_to_string(path) {
            Ok(content) => Self::from_toml_str(&content).map_err(|source| {
                BuildpackError::InvalidLaunchConfig {
                    path: path.to_path_buf(),
                    source,
                }
            }),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No existing {} at {}", LAUNCH_TOML, path.display());
                Ok(Self::default())
            }
            Err(source) => Err(BuildpackError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(self)
    }

    pub fn save(&self, fs: &dyn FileSystem, path: &Path) -> Result<(), BuildpackError> {
        let content = self.to_toml_string()?;
        fs.write(path, &content).map_err(|source| BuildpackError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Replaces records that share a type with a planned process and appends
    /// the planned processes in plan order
    pub fn merge(&mut self, plan: &LaunchPlan) {
        for process in &plan.processes {
            let before = self.processes.len();
            self.processes
                .retain(|record| record_type(record) != Some(process.r#type.as_str()));

            let replaced = before - self.processes.len();
            if replaced > 0 {
                let process_type = process.r#type.as_str();
                debug!(process_type, replaced, "Replacing existing process records");
            }

            self.processes.push(process.to_record());
        }
    }

    pub fn process_types(&self) -> impl Iterator<Item = &str> {
        self.processes.iter().filter_map(record_type)
    }
}

fn record_type(record: &toml::Table) -> Option<&str> {
    record.get("type").and_then(toml::Value::as_str)
}

pub fn merge(plan: &LaunchPlan, mut existing: LaunchConfig) -> LaunchConfig {
    existing.merge(plan);
    existing
}
