//! Build phase: Procfile → launch plan → merged `launch.toml`

use crate::error::BuildpackError;
use crate::fs::FileSystem;
use crate::launch::LaunchPlan;
use crate::launch_config::{LaunchConfig, LAUNCH_TOML};
use crate::layer::write_processes_layer;
use crate::procfile::{Procfile, PROCFILE_NAME};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Directories the lifecycle hands to the build phase
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildContext {
    pub layers_dir: PathBuf,
    /// Not read by this buildpack
    pub platform_dir: PathBuf,
    pub app_dir: PathBuf,
}

impl BuildContext {
    pub fn procfile_path(&self) -> PathBuf {
        self.app_dir.join(PROCFILE_NAME)
    }

    pub fn launch_toml_path(&self) -> PathBuf {
        self.layers_dir.join(LAUNCH_TOML)
    }
}

pub fn build(fs: &dyn FileSystem, context: &BuildContext) -> Result<LaunchPlan, BuildpackError> {
    info!("Discovering process types");

    let procfile = read_procfile(fs, &context.procfile_path())?;

    let declared = if procfile.is_empty() {
        "(none)".to_string()
    } else {
        procfile.process_types().collect::<Vec<_>>().join(", ")
    };
    info!("Procfile declares types -> {}", declared);

    for warning in &procfile.warnings {
        warn!("{}", warning);
    }

    let plan = LaunchPlan::from(&procfile);
    if let Some(default) = plan.default_process() {
        info!("Setting default process type '{}'", default.r#type);
    }

    let layer_dir = write_processes_layer(fs, &context.layers_dir)?;
    debug!("Wrote layer metadata to {}", layer_dir.display());

    let launch_toml = context.launch_toml_path();
    let mut launch_config = LaunchConfig::load(fs, &launch_toml)?;
    launch_config.merge(&plan);
    launch_config.save(fs, &launch_toml)?;
    debug!(
        processes = launch_config.processes.len(),
        "Wrote {}",
        launch_toml.display()
    );

    Ok(plan)
}

fn read_procfile(fs: &dyn FileSystem, path: &Path) -> Result<Procfile, BuildpackError> {
    fs.read_to_string(path)
        .map(|content| Procfile::parse(&content))
        .map_err(|source| BuildpackError::CannotReadProcfile {
            path: path.to_path_buf(),
            source,
        })
}
