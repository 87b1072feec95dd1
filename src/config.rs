use std::env;
use std::path::PathBuf;
use thiserror::Error;

const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_LOG_JSON: bool = false;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),

    #[error("Missing {name}. Pass it as an argument or set the {env} environment variable")]
    MissingPath { name: &'static str, env: &'static str },
}

/// Settings the lifecycle passes through the environment
///
/// Only the binary reads these; detect and build take explicit paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildpackConfig {
    pub app_dir: PathBuf,
    pub build_plan_path: Option<PathBuf>,
    pub layers_dir: Option<PathBuf>,
    pub platform_dir: Option<PathBuf>,
    pub log_level: String,
    pub log_json: bool,
}

impl Default for BuildpackConfig {
    fn default() -> Self {
        let app_dir = env::var("CNB_APP_DIR")
            .ok()
            .map(PathBuf::from)
            .or_else(|| env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("."));

        let build_plan_path = env::var("CNB_BUILD_PLAN_PATH").ok().map(PathBuf::from);
        let layers_dir = env::var("CNB_LAYERS_DIR").ok().map(PathBuf::from);
        let platform_dir = env::var("CNB_PLATFORM_DIR").ok().map(PathBuf::from);

        let log_level = env::var("PROCFILE_BUILDPACK_LOG_LEVEL")
            .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string())
            .to_lowercase();

        let log_json = env::var("PROCFILE_BUILDPACK_LOG_JSON")
            .ok()
            .and_then(|v| v.parse::<bool>().ok())
            .unwrap_or(DEFAULT_LOG_JSON);

        Self {
            app_dir,
            build_plan_path,
            layers_dir,
            platform_dir,
            log_level,
            log_json,
        }
    }
}

impl BuildpackConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(ConfigError::ValidationFailed(format!(
                    "Invalid log level: {}. Valid options: trace, debug, info, warn, error",
                    self.log_level
                )))
            }
        }

        if self.app_dir.as_os_str().is_empty() {
            return Err(ConfigError::ValidationFailed(
                "Application directory cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Resolves the build plan path, preferring an explicit argument
    pub fn build_plan_path(&self, explicit: Option<PathBuf>) -> Result<PathBuf, ConfigError> {
        explicit
            .or_else(|| self.build_plan_path.clone())
            .ok_or(ConfigError::MissingPath {
                name: "build plan path",
                env: "CNB_BUILD_PLAN_PATH",
            })
    }

    /// Resolves the layers directory, preferring an explicit argument
    pub fn layers_dir(&self, explicit: Option<PathBuf>) -> Result<PathBuf, ConfigError> {
        explicit
            .or_else(|| self.layers_dir.clone())
            .ok_or(ConfigError::MissingPath {
                name: "layers directory",
                env: "CNB_LAYERS_DIR",
            })
    }

    pub fn platform_dir(&self, explicit: Option<PathBuf>) -> PathBuf {
        explicit
            .or_else(|| self.platform_dir.clone())
            .unwrap_or_else(|| PathBuf::from("/platform"))
    }
}
