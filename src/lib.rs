//! procfile-buildpack - a Cloud Native Buildpack for Procfile applications
//!
//! The buildpack takes part in a build when the application ships a
//! `Procfile`, and contributes one launch process per declared process type.
//!
//! # Core Concepts
//!
//! - **Procfile**: one `name: command` declaration per line; anything else is ignored
//! - **Launch plan**: each declaration wrapped as `bash -c <command>`, with a
//!   default process chosen (`web`, or the only process declared)
//! - **Launch configuration**: the `launch.toml` shared with other buildpacks,
//!   into which the launch plan is merged
//!
//! # Example Usage
//!
//! ```
//! use procfile_buildpack::{compose, LaunchConfig, Procfile};
//!
//! let procfile = Procfile::parse("web: rails s\nworker: rake sidekiq");
//! let plan = compose(&procfile);
//! assert_eq!(plan.default_process().unwrap().r#type, "web");
//!
//! let mut launch = LaunchConfig::default();
//! launch.merge(&plan);
//! assert_eq!(launch.processes.len(), 2);
//! ```

pub mod build;
pub mod build_plan;
pub mod cli;
pub mod config;
pub mod detect;
pub mod error;
pub mod fs;
pub mod launch;
pub mod launch_config;
pub mod layer;
pub mod procfile;
pub mod util;

pub use build::{build, BuildContext};
pub use build_plan::BuildPlan;
pub use config::{BuildpackConfig, ConfigError};
pub use detect::{detect, DetectOutcome};
pub use error::BuildpackError;
pub use fs::{FileSystem, MockFileSystem, RealFileSystem};
pub use launch::{compose, LaunchPlan, ProcessEntry};
pub use launch_config::{merge, LaunchConfig};
pub use procfile::Procfile;
pub use util::{init_logging, LoggingConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
