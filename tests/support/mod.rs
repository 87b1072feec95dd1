//! Shared helpers for driving the buildpack binary

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Path to the compiled buildpack binary
pub fn buildpack_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_procfile-buildpack"))
}

pub fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Command with the lifecycle environment cleared so host settings don't leak in
pub fn buildpack_command() -> Command {
    let mut command = Command::new(buildpack_bin());
    for key in [
        "CNB_APP_DIR",
        "CNB_BUILD_PLAN_PATH",
        "CNB_LAYERS_DIR",
        "CNB_PLATFORM_DIR",
        "PROCFILE_BUILDPACK_LOG_LEVEL",
        "PROCFILE_BUILDPACK_LOG_JSON",
        "RUST_LOG",
    ] {
        command.env_remove(key);
    }
    command
}

/// Layers, platform and plan locations for one lifecycle run
pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        fs::create_dir_all(dir.path().join("layers")).expect("Failed to create layers dir");
        fs::create_dir_all(dir.path().join("platform")).expect("Failed to create platform dir");
        Self { dir }
    }

    pub fn layers(&self) -> PathBuf {
        self.dir.path().join("layers")
    }

    pub fn platform(&self) -> PathBuf {
        self.dir.path().join("platform")
    }

    pub fn plan(&self) -> PathBuf {
        self.dir.path().join("plan.json")
    }

    pub fn launch_toml(&self) -> PathBuf {
        self.layers().join("launch.toml")
    }

    pub fn read_launch_toml(&self) -> toml::Table {
        let content = fs::read_to_string(self.launch_toml()).expect("Failed to read launch.toml");
        toml::from_str(&content).expect("launch.toml is not valid TOML")
    }

    pub fn detect(&self, app_dir: &Path) -> Output {
        buildpack_command()
            .arg("detect")
            .arg(self.platform())
            .arg(self.plan())
            .arg("--app-dir")
            .arg(app_dir)
            .output()
            .expect("Failed to execute procfile-buildpack")
    }

    pub fn build(&self, app_dir: &Path, extra_args: &[&str]) -> Output {
        buildpack_command()
            .arg("build")
            .arg(self.layers())
            .arg(self.platform())
            .arg("--app-dir")
            .arg(app_dir)
            .args(extra_args)
            .output()
            .expect("Failed to execute procfile-buildpack")
    }
}

/// Process types of `launch.toml` records, in file order
pub fn record_types(launch: &toml::Table) -> Vec<String> {
    launch
        .get("processes")
        .and_then(toml::Value::as_array)
        .map(|records| {
            records
                .iter()
                .filter_map(|r| r.get("type").and_then(toml::Value::as_str))
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

pub fn record<'a>(launch: &'a toml::Table, process_type: &str) -> &'a toml::Value {
    launch["processes"]
        .as_array()
        .and_then(|records| {
            records
                .iter()
                .find(|r| r.get("type").and_then(toml::Value::as_str) == Some(process_type))
        })
        .unwrap_or_else(|| panic!("No process record of type {}", process_type))
}
