//! Report of the launch plan produced by a build

use crate::launch::LaunchPlan;
use anyhow::{Context, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON format (machine-readable)
    Json,
    /// Human-readable formatted text
    Human,
}

pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format(&self, plan: &LaunchPlan) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_json(plan),
            OutputFormat::Human => Ok(self.format_human(plan)),
        }
    }

    fn format_json(&self, plan: &LaunchPlan) -> Result<String> {
        serde_json::to_string_pretty(plan).context("Failed to serialize launch plan to JSON")
    }

    fn format_human(&self, plan: &LaunchPlan) -> String {
        if plan.processes.is_empty() {
            return "No process types declared\n".to_string();
        }

        let width = plan
            .process_types()
            .map(str::len)
            .max()
            .unwrap_or_default();

        let mut output = String::from("Process types:\n");
        for process in &plan.processes {
            let marker = if process.default { " (default)" } else { "" };
            output.push_str(&format!(
                "  {:<width$}  {} {}{}\n",
                process.r#type,
                process.command.join(" "),
                process.args.join(" "),
                marker,
                width = width
            ));
        }
        output
    }
}
