use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Cloud Native Buildpack that launches the process types declared in a Procfile
#[derive(Parser, Debug)]
#[command(
    name = "procfile-buildpack",
    about = "Cloud Native Buildpack that launches the process types declared in a Procfile",
    version,
    long_about = "procfile-buildpack detects applications that ship a Procfile and contributes \
                  one launch process per declared process type to launch.toml, alongside the \
                  processes other buildpacks in the same build already declared."
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, global = true, help = "Enable debug logging")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Quiet mode - suppress non-error output"
    )]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(
        about = "Check whether the application declares a Procfile",
        long_about = "Passes (exit 0) and writes the build plan when a Procfile exists directly \
                      under the application directory. Exits 100 otherwise.\n\n\
                      Examples:\n  \
                      procfile-buildpack detect /platform /tmp/plan.json\n  \
                      CNB_BUILD_PLAN_PATH=/tmp/plan.json procfile-buildpack detect"
    )]
    Detect(DetectArgs),

    #[command(
        about = "Contribute Procfile process types to launch.toml",
        long_about = "Parses the Procfile, writes the processes layer and merges the declared \
                      process types into <LAYERS>/launch.toml.\n\n\
                      Examples:\n  \
                      procfile-buildpack build /layers /platform /tmp/plan.toml\n  \
                      procfile-buildpack build /layers --app-dir ./my-app --format json"
    )]
    Build(BuildArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct DetectArgs {
    #[arg(value_name = "PLATFORM", help = "Platform directory (unused)")]
    pub platform_dir: Option<PathBuf>,

    #[arg(
        value_name = "PLAN",
        help = "Where to write the build plan (defaults to $CNB_BUILD_PLAN_PATH)"
    )]
    pub plan_path: Option<PathBuf>,

    #[arg(
        long,
        value_name = "DIR",
        help = "Application directory (defaults to $CNB_APP_DIR or the current directory)"
    )]
    pub app_dir: Option<PathBuf>,
}

#[derive(Parser, Debug, Clone)]
pub struct BuildArgs {
    #[arg(
        value_name = "LAYERS",
        help = "Layers directory (defaults to $CNB_LAYERS_DIR)"
    )]
    pub layers_dir: Option<PathBuf>,

    #[arg(value_name = "PLATFORM", help = "Platform directory (unused)")]
    pub platform_dir: Option<PathBuf>,

    #[arg(value_name = "PLAN", help = "Buildpack plan (unused)")]
    pub plan_path: Option<PathBuf>,

    #[arg(
        long,
        value_name = "DIR",
        help = "Application directory (defaults to $CNB_APP_DIR or the current directory)"
    )]
    pub app_dir: Option<PathBuf>,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Format of the launch plan report"
    )]
    pub format: OutputFormatArg,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormatArg {
    Json,
    Human,
}

impl From<OutputFormatArg> for super::output::OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Json => super::output::OutputFormat::Json,
            OutputFormatArg::Human => super::output::OutputFormat::Human,
        }
    }
}
