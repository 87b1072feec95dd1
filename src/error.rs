use std::error::Error as _;
use std::fmt::Write as _;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures that end a detect or build run
#[derive(Debug, Error)]
pub enum BuildpackError {
    #[error("Cannot read Procfile contents at {}: {source}", path.display())]
    CannotReadProcfile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid launch configuration at {}: {source}", path.display())]
    InvalidLaunchConfig {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to serialize TOML: {0}")]
    SerializeToml(#[from] toml::ser::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializeJson(#[from] serde_json::Error),
}

impl BuildpackError {
    /// Whether the Procfile itself could not be read
    pub fn is_unreadable_procfile(&self) -> bool {
        matches!(self, BuildpackError::CannotReadProcfile { .. })
    }

    /// Multi-line report printed to the build log before exiting
    pub fn diagnostic(&self) -> String {
        let mut report = String::new();

        match self {
            BuildpackError::CannotReadProcfile { source, .. } => {
                report.push_str("Error: Cannot read Procfile contents\n");
                report.push_str(
                    "Please ensure the Procfile in the root of your application is a readable \
                     UTF-8 encoded file and try again.\n",
                );
                let _ = write!(report, "\nUnderlying cause was: {}", source);
            }
            other => {
                let _ = write!(report, "Error: {}", other);
                let mut cause = other.source();
                while let Some(err) = cause {
                    let _ = write!(report, "\n  caused by: {}", err);
                    cause = err.source();
                }
            }
        }

        report
    }
}
