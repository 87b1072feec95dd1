//! Detect phase: does this application declare its processes in a Procfile?

use crate::build_plan::BuildPlan;
use crate::error::BuildpackError;
use crate::fs::FileSystem;
use crate::procfile::PROCFILE_NAME;
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectOutcome {
    /// A Procfile is present and the build plan was written
    Pass,
    /// No Procfile; nothing was written
    Fail,
}

impl DetectOutcome {
    pub fn is_pass(self) -> bool {
        self == DetectOutcome::Pass
    }
}

/// Checks for `<app_dir>/Procfile` and, when found, writes the build plan to `plan_path`
pub fn detect(
    fs: &dyn FileSystem,
    app_dir: &Path,
    plan_path: &Path,
) -> Result<DetectOutcome, BuildpackError> {
    let procfile_path = app_dir.join(PROCFILE_NAME);

    if !fs.exists(&procfile_path) {
        info!("No {} found in {}", PROCFILE_NAME, app_dir.display());
        return Ok(DetectOutcome::Fail);
    }

    debug!("Found {}", procfile_path.display());

    let plan = BuildPlan::procfile().to_json()?;
    fs.write(plan_path, &plan)
        .map_err(|source| BuildpackError::Io {
            path: plan_path.to_path_buf(),
            source,
        })?;

    Ok(DetectOutcome::Pass)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MockFileSystem;
    use std::path::PathBuf;

    #[test]
    fn test_detect_with_procfile() {
        let fs = MockFileSystem::new();
        fs.add_file("/workspace/Procfile", "web: rails s");
        fs.add_dir("/tmp");

        let outcome = detect(&fs, Path::new("/workspace"), Path::new("/tmp/plan.json")).unwrap();
        assert!(outcome.is_pass());

        let plan: BuildPlan =
            serde_json::from_str(&fs.file_content("/tmp/plan.json").unwrap()).unwrap();
        assert_eq!(plan, BuildPlan::procfile());
    }

    #[test]
    fn test_detect_empty_procfile_still_passes() {
        let fs = MockFileSystem::new();
        fs.add_file("/workspace/Procfile", "");
        fs.add_dir("/tmp");

        let outcome = detect(&fs, Path::new("/workspace"), Path::new("/tmp/plan.json")).unwrap();
        assert_eq!(outcome, DetectOutcome::Pass);
    }

    #[test]
    fn test_detect_without_procfile_writes_nothing() {
        let fs = MockFileSystem::new();
        fs.add_file("/workspace/Gemfile", "source 'https://rubygems.org'");
        fs.add_dir("/tmp");

        let outcome = detect(&fs, Path::new("/workspace"), Path::new("/tmp/plan.json")).unwrap();
        assert_eq!(outcome, DetectOutcome::Fail);
        assert_eq!(fs.files(), vec![PathBuf::from("/workspace/Gemfile")]);
    }

    #[test]
    fn test_detect_is_case_sensitive() {
        let fs = MockFileSystem::new();
        fs.add_file("/workspace/procfile", "web: rails s");
        fs.add_dir("/tmp");

        let outcome = detect(&fs, Path::new("/workspace"), Path::new("/tmp/plan.json")).unwrap();
        assert_eq!(outcome, DetectOutcome::Fail);
    }

    #[test]
    fn test_detect_ignores_nested_procfile() {
        let fs = MockFileSystem::new();
        fs.add_file("/workspace/app/Procfile", "web: rails s");
        fs.add_dir("/tmp");

        let outcome = detect(&fs, Path::new("/workspace"), Path::new("/tmp/plan.json")).unwrap();
        assert_eq!(outcome, DetectOutcome::Fail);
    }

    #[test]
    fn test_detect_unwritable_plan_is_an_error() {
        let fs = MockFileSystem::new();
        fs.add_file("/workspace/Procfile", "web: rails s");

        let result = detect(&fs, Path::new("/workspace"), Path::new("/missing/plan.json"));
        assert!(matches!(result, Err(BuildpackError::Io { .. })));
    }
}
