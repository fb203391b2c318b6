use colored::*;
use models::{FormReport, StudentForm, ValidationResult};
use serde::Serialize;
use std::io;
use std::path::{Path, PathBuf};

/// Directory scanned by `rollcall validate` when no path is given.
pub const DEFAULT_ROSTER_DIR: &str = "rosters";

pub fn roster_path(path: Option<PathBuf>) -> PathBuf {
    path.unwrap_or_else(|| PathBuf::from(DEFAULT_ROSTER_DIR))
}

/// Result of `rollcall check`: either the first failure or every failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CheckOutcome {
    First(ValidationResult),
    Every(FormReport),
}

impl CheckOutcome {
    pub fn is_valid(&self) -> bool {
        match self {
            CheckOutcome::First(result) => result.is_valid(),
            CheckOutcome::Every(report) => report.is_valid,
        }
    }

    pub fn render(&self, json: bool) -> Result<String, serde_json::Error> {
        if json {
            return serde_json::to_string_pretty(self);
        }

        if self.is_valid() {
            return Ok(format!("{} Form is valid", "✅".green()));
        }

        let text = match self {
            CheckOutcome::First(result) => format!("❌ {}", result.error_message()),
            CheckOutcome::Every(report) => {
                let mut out = String::from("❌ Form is invalid:");
                for (i, issue) in report.issues.iter().enumerate() {
                    out.push_str(&format!("\n   {}. {}", i + 1, issue));
                }
                out
            }
        };
        Ok(text)
    }
}

pub fn check_form(form: &StudentForm, all: bool) -> CheckOutcome {
    if all {
        CheckOutcome::Every(validators::collect_form_issues(form))
    } else {
        CheckOutcome::First(validators::validate_form(form))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RosterSummary {
    pub valid: usize,
    pub invalid: usize,
}

impl RosterSummary {
    pub fn has_failures(&self) -> bool {
        self.invalid > 0
    }
}

/// Validate a roster file, or every roster file directly inside a directory
pub fn validate_rosters(path: &Path, verbose: bool) -> io::Result<RosterSummary> {
    let mut rosters: Vec<PathBuf> = Vec::new();

    if path.is_dir() {
        for entry in std::fs::read_dir(path)? {
            let entry_path = entry?.path();
            if utils::is_roster_file(&entry_path) {
                rosters.push(entry_path);
            }
        }
        rosters.sort();
    } else if path.is_file() {
        rosters.push(path.to_path_buf());
    } else {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("Path does not exist: {}", path.display()),
        ));
    }

    let mut summary = RosterSummary::default();

    println!("Validating {} roster file(s)...", rosters.len());

    for roster_path in rosters {
        match evaluator::evaluate_roster_file(&roster_path, verbose) {
            Ok(report) => {
                if report.is_valid() {
                    println!("✅ Valid: {}", roster_path.display());
                    summary.valid += 1;
                } else {
                    println!("❌ Invalid: {}", roster_path.display());
                    for (i, issue) in report.issues().iter().enumerate() {
                        println!("   {}. {}", i + 1, issue);
                    }
                    summary.invalid += 1;
                }
            }
            Err(e) => {
                println!("❌ Error processing {}: {}", roster_path.display(), e);
                summary.invalid += 1;
            }
        }
    }

    println!(
        "\nSummary: {} valid, {} invalid",
        summary.valid, summary.invalid
    );

    Ok(summary)
}
