//! Launch plan composed from a parsed Procfile

use crate::procfile::Procfile;
use serde::{Deserialize, Serialize};

/// Interpreter invocation every declared command is handed to as one string
pub const SHELL_COMMAND: [&str; 2] = ["bash", "-c"];

/// Working directory of launched processes, relative to the image
pub const WORKING_DIRECTORY: &str = "app";

/// Process type that becomes the default when several are declared
pub const DEFAULT_PROCESS_TYPE: &str = "web";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessEntry {
    #[serde(rename = "type")]
    pub r#type: String,
    pub command: Vec<String>,
    pub args: Vec<String>,
    pub default: bool,
    pub working_directory: String,
}

impl ProcessEntry {
    pub fn new(r#type: impl Into<String>, command: impl Into<String>) -> Self {
        let r#type = r#type.into();
        let default = r#type == DEFAULT_PROCESS_TYPE;

        Self {
            r#type,
            command: SHELL_COMMAND.iter().map(|s| s.to_string()).collect(),
            args: vec![command.into()],
            default,
            working_directory: WORKING_DIRECTORY.to_string(),
        }
    }

    /// Renders the entry with the field names used in `launch.toml`
    pub fn to_record(&self) -> toml::Table {
        let strings =
            |values: &[String]| toml::Value::Array(values.iter().cloned().map(Into::into).collect());

        let mut record = toml::Table::new();
        record.insert("type".to_string(), self.r#type.clone().into());
        record.insert("command".to_string(), strings(&self.command));
        record.insert("args".to_string(), strings(&self.args));
        record.insert("default".to_string(), self.default.into());
        record.insert(
            "working-dir".to_string(),
            self.working_directory.clone().into(),
        );
        record
    }
}

/// Processes this buildpack contributes, in Procfile order
///
/// `labels` and `slices` are reserved and always empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchPlan {
    pub labels: Vec<String>,
    pub processes: Vec<ProcessEntry>,
    pub slices: Vec<String>,
}

impl LaunchPlan {
    pub fn default_process(&self) -> Option<&ProcessEntry> {
        self.processes.iter().find(|process| process.default)
    }

    pub fn process_types(&self) -> impl Iterator<Item = &str> {
        self.processes.iter().map(|process| process.r#type.as_str())
    }
}

impl From<&Procfile> for LaunchPlan {
    fn from(procfile: &Procfile) -> Self {
        let mut processes: Vec<ProcessEntry> = procfile
            .processes
            .iter()
            .map(|(name, command)| ProcessEntry::new(name.as_str(), command.as_str()))
            .collect();

        if let [only] = processes.as_mut_slice() {
            only.default = true;
        }

        LaunchPlan {
            labels: Vec::new(),
            processes,
            slices: Vec::new(),
        }
    }
}

pub fn compose(procfile: &Procfile) -> LaunchPlan {
    LaunchPlan::from(procfile)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn procfile(entries: &[(&str, &str)]) -> Procfile {
        let mut procfile = Procfile::new();
        for (name, command) in entries {
            procfile.insert(*name, *command);
        }
        procfile
    }

    fn entry(r#type: &str, command: &str, default: bool) -> ProcessEntry {
        ProcessEntry {
            r#type: r#type.to_string(),
            command: vec!["bash".to_string(), "-c".to_string()],
            args: vec![command.to_string()],
            default,
            working_directory: "app".to_string(),
        }
    }

    #[test]
    fn test_no_processes() {
        let plan = compose(&Procfile::new());
        assert_eq!(plan, LaunchPlan::default());
        assert!(plan.labels.is_empty());
        assert!(plan.slices.is_empty());
        assert!(plan.default_process().is_none());
    }

    #[test]
    fn test_single_web_process() {
        let plan = compose(&procfile(&[("web", "rails s")]));
        assert_eq!(plan.processes, vec![entry("web", "rails s", true)]);
    }

    #[test]
    fn test_single_non_web_process() {
        let plan = compose(&procfile(&[("worker", "cmd")]));
        assert_eq!(plan.processes, vec![entry("worker", "cmd", true)]);
    }

    #[test]
    fn test_web_and_additional_process() {
        let plan = compose(&procfile(&[("web", "rails s"), ("worker", "rake sidekiq")]));
        assert_eq!(
            plan.processes,
            vec![
                entry("web", "rails s", true),
                entry("worker", "rake sidekiq", false)
            ]
        );
        assert_eq!(plan.default_process().map(|p| p.r#type.as_str()), Some("web"));
    }

    #[test]
    fn test_web_not_first_is_still_default() {
        let plan = compose(&procfile(&[("worker", "a"), ("web", "b")]));
        assert_eq!(
            plan.processes,
            vec![entry("worker", "a", false), entry("web", "b", true)]
        );
    }

    #[test]
    fn test_multiple_non_web_processes() {
        let plan = compose(&procfile(&[("foo", "foo_command"), ("bar", "bar_command")]));
        assert!(plan.processes.iter().all(|p| !p.default));
        assert!(plan.default_process().is_none());
    }

    #[test]
    fn test_process_order() {
        let plan = compose(&procfile(&[("aaa", "1"), ("ccc", "2"), ("bbb", "3")]));
        let types: Vec<&str> = plan.process_types().collect();
        assert_eq!(types, vec!["aaa", "ccc", "bbb"]);
    }

    #[test]
    fn test_command_is_not_tokenized() {
        let plan = compose(&procfile(&[("web", "echo \"a b\" && sleep 1")]));
        assert_eq!(plan.processes[0].args, vec!["echo \"a b\" && sleep 1"]);
    }

    #[test]
    fn test_to_record_uses_external_field_names() {
        let record = entry("web", "rails s", true).to_record();
        assert_eq!(record["type"].as_str(), Some("web"));
        assert_eq!(record["working-dir"].as_str(), Some("app"));
        assert_eq!(record["default"].as_bool(), Some(true));
        assert_eq!(
            record["command"],
            toml::Value::Array(vec!["bash".into(), "-c".into()])
        );
        assert_eq!(record["args"], toml::Value::Array(vec!["rails s".into()]));
        assert!(!record.contains_key("working_directory"));
    }

    #[test]
    fn test_serialize_json() {
        let plan = compose(&procfile(&[("web", "rails s")]));
        let json = serde_json::to_value(&plan).unwrap();
        assert_eq!(json["processes"][0]["type"], "web");
        assert_eq!(json["processes"][0]["working_directory"], "app");
        assert_eq!(json["labels"], serde_json::json!([]));
    }
}
