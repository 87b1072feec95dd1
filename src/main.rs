use procfile_buildpack::cli::{BuildArgs, CliArgs, Commands, DetectArgs, OutputFormatter};
use procfile_buildpack::util::{init_logging, parse_level, LoggingConfig};
use procfile_buildpack::{
    build, detect, BuildContext, BuildpackConfig, DetectOutcome, RealFileSystem, NAME, VERSION,
};

use clap::Parser;
use std::process;
use tracing::{debug, error, Level};

/// Lifecycle exit code for "this buildpack does not apply"
const EXIT_DETECT_FAIL: i32 = 100;

fn main() {
    let args = CliArgs::parse();
    let config = BuildpackConfig::default();
    init_logging_from_args(&args, &config);

    debug!("{} v{} starting", NAME, VERSION);
    debug!("Arguments: {:?}", args);

    if let Err(e) = config.validate() {
        error!("Configuration error: {}", e);
        process::exit(1);
    }

    let exit_code = match &args.command {
        Commands::Detect(detect_args) => handle_detect(detect_args, &config),
        Commands::Build(build_args) => handle_build(build_args, &config),
    };

    process::exit(exit_code);
}

fn init_logging_from_args(args: &CliArgs, config: &BuildpackConfig) {
    let level = if let Some(level_str) = &args.log_level {
        parse_level(level_str)
    } else if args.verbose {
        Level::DEBUG
    } else if args.quiet {
        Level::ERROR
    } else {
        parse_level(&config.log_level)
    };

    init_logging(LoggingConfig {
        level,
        use_json: config.log_json,
        ..Default::default()
    });
}

fn handle_detect(args: &DetectArgs, config: &BuildpackConfig) -> i32 {
    let app_dir = args.app_dir.clone().unwrap_or_else(|| config.app_dir.clone());
    let plan_path = match config.build_plan_path(args.plan_path.clone()) {
        Ok(path) => path,
        Err(e) => {
            error!("{}", e);
            return 1;
        }
    };
    debug!(
        app_dir = %app_dir.display(),
        plan_path = %plan_path.display(),
        "Running detect"
    );

    match detect(&RealFileSystem::new(), &app_dir, &plan_path) {
        Ok(DetectOutcome::Pass) => 0,
        Ok(DetectOutcome::Fail) => EXIT_DETECT_FAIL,
        Err(e) => {
            eprintln!("{}", e.diagnostic());
            1
        }
    }
}

fn handle_build(args: &BuildArgs, config: &BuildpackConfig) -> i32 {
    let layers_dir = match config.layers_dir(args.layers_dir.clone()) {
        Ok(path) => path,
        Err(e) => {
            error!("{}", e);
            return 1;
        }
    };

    let context = BuildContext {
        layers_dir,
        platform_dir: config.platform_dir(args.platform_dir.clone()),
        app_dir: args.app_dir.clone().unwrap_or_else(|| config.app_dir.clone()),
    };
    debug!("Build context: {:?}", context);

    let plan = match build(&RealFileSystem::new(), &context) {
        Ok(plan) => plan,
        Err(e) => {
            eprintln!("{}", e.diagnostic());
            return 1;
        }
    };

    match OutputFormatter::new(args.format.into()).format(&plan) {
        Ok(report) => {
            print!("{}", report);
            0
        }
        Err(e) => {
            error!("Failed to format launch plan: {:#}", e);
            1
        }
    }
}
