//! Procfile parsing
//!
//! A Procfile declares one process type per line:
//!
//! ```text
//! web: bundle exec rails s -p $PORT
//! worker: bundle exec sidekiq
//! ```
//!
//! Parsing is lenient: a line that does not look like a declaration (comments,
//! blank lines, malformed entries) is skipped rather than rejected.

use indexmap::IndexMap;
use regex::Regex;
use std::convert::Infallible;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::trace;

/// File name looked up directly under the application root
pub const PROCFILE_NAME: &str = "Procfile";

/// Ordered set of process declarations parsed from a Procfile
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Procfile {
    /// Process type name to raw command, in order of first appearance
    pub processes: IndexMap<String, String>,
    /// Non-fatal findings worth surfacing in the build log
    pub warnings: Vec<String>,
}

impl Procfile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses Procfile contents. Never fails; unmatched lines are dropped.
    pub fn parse(content: &str) -> Self {
        let normalized = normalize(content);
        let mut procfile = Procfile::new();

        for line in normalized.lines() {
            match parse_line(line) {
                Some((name, command)) => {
                    if procfile.processes.contains_key(name) {
                        procfile.warnings.push(format!(
                            "Duplicate process type `{}` found. The command `{}` will be used.",
                            name, command
                        ));
                    }
                    procfile.insert(name, command);
                }
                None => trace!(line, "Skipping Procfile line"),
            }
        }

        if procfile.is_empty() {
            procfile
                .warnings
                .push("Empty Procfile, no processes defined".to_string());
        }

        procfile
    }

    /// Inserts a declaration. A repeated name keeps its original position.
    pub fn insert(&mut self, name: impl Into<String>, command: impl Into<String>) {
        self.processes.insert(name.into(), command.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.processes.get(name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.processes.len()
    }

    /// Declared process type names in declaration order
    pub fn process_types(&self) -> impl Iterator<Item = &str> {
        self.processes.keys().map(String::as_str)
    }
}

impl FromStr for Procfile {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Procfile::parse(s))
    }
}

/// Converts CRLF and lone CR to LF and leaves exactly one trailing newline
fn normalize(content: &str) -> String {
    let unified = content.replace("\r\n", "\n").replace('\r', "\n");
    let mut normalized = unified.trim_end_matches('\n').to_string();
    normalized.push('\n');
    normalized
}

/// Matches `name[:] command` with optional leading whitespace
fn declaration_regex() -> &'static Regex {
    static DECLARATION_REGEX: OnceLock<Regex> = OnceLock::new();
    DECLARATION_REGEX.get_or_init(|| {
        Regex::new(r"^[[:space:]]*([a-zA-Z0-9_-]+):?[[:space:]]+(.*)$")
            .expect("Invalid Procfile declaration regex")
    })
}

fn parse_line(line: &str) -> Option<(&str, &str)> {
    let captures = declaration_regex().captures(line)?;
    let name = captures.get(1)?.as_str();
    let command = captures
        .get(2)
        .map(|m| m.as_str().trim_matches(|c: char| c.is_ascii_whitespace()))
        .unwrap_or_default();
    Some((name, command))
}
