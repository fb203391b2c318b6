use colored::*;
use std::path::Path;

use models::{RosterEntry, RosterReport, StudentForm};
use validators::collect_form_issues;

pub fn evaluate_roster_file(path: &Path, verbose: bool) -> Result<RosterReport, String> {
    let forms = parser::parse_roster(path).map_err(|e| e.to_string())?;
    logging::debug(&format!(
        "Parsed {} entries from {}",
        forms.len(),
        path.display()
    ));

    let report = evaluate_forms(&forms);

    if verbose && report.is_valid() {
        println!(
            "{} Validated {} student(s) in roster: {}",
            "✓".green(),
            report.entries.len(),
            path.display()
        );
    }

    Ok(report)
}

pub fn evaluate_forms(forms: &[StudentForm]) -> RosterReport {
    let mut report = RosterReport::default();

    if forms.is_empty() {
        report
            .roster_issues
            .push("Roster does not contain any students".to_string());
        return report;
    }

    for (i, form) in forms.iter().enumerate() {
        report.entries.push(RosterEntry {
            index: i + 1,
            label: entry_label(form, i),
            report: collect_form_issues(form),
        });
    }

    report
}

// Students are named by their full name when they have one
fn entry_label(form: &StudentForm, index: usize) -> String {
    match form.full_name.as_deref().map(str::trim) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => format!("entry #{}", index + 1),
    }
}
