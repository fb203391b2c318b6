use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Youngest age accepted on the registration form.
pub const MIN_AGE: i32 = 1;
/// Oldest age accepted on the registration form.
pub const MAX_AGE: i32 = 150;

/// Outcome of validating a single field or a whole form.
///
/// A valid result always carries an empty message; an invalid one always
/// carries a human-readable explanation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    is_valid: bool,
    error_message: String,
}

impl ValidationResult {
    pub fn valid() -> Self {
        ValidationResult {
            is_valid: true,
            error_message: String::new(),
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        let error_message = message.into();
        debug_assert!(
            !error_message.is_empty(),
            "invalid results must explain themselves"
        );
        ValidationResult {
            is_valid: false,
            error_message,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub fn error_message(&self) -> &str {
        &self.error_message
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid {
            write!(f, "valid")
        } else {
            write!(f, "{}", self.error_message)
        }
    }
}

/// The fields of the student registration form, in validation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    FullName,
    Age,
    Birthday,
    GuardianName,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::FullName,
        FormField::Age,
        FormField::Birthday,
        FormField::GuardianName,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::FullName => "Full Name",
            FormField::Age => "Age",
            FormField::Birthday => "Birthday",
            FormField::GuardianName => "Parents' Name",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One registration entry as typed into the form or read from a roster file.
///
/// Every field is optional so that missing input reaches the validators
/// instead of failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentForm {
    #[serde(
        default,
        alias = "name",
        deserialize_with = "deserialize_loose_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub full_name: Option<String>,

    #[serde(
        default,
        deserialize_with = "deserialize_loose_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub age: Option<String>,

    #[serde(
        default,
        deserialize_with = "deserialize_loose_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub birthday: Option<String>,

    #[serde(
        default,
        alias = "parents_name",
        alias = "guardian",
        deserialize_with = "deserialize_loose_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub guardian_name: Option<String>,
}

impl StudentForm {
    pub fn new(
        full_name: impl Into<String>,
        age: impl Into<String>,
        birthday: impl Into<String>,
        guardian_name: impl Into<String>,
    ) -> Self {
        StudentForm {
            full_name: Some(full_name.into()),
            age: Some(age.into()),
            birthday: Some(birthday.into()),
            guardian_name: Some(guardian_name.into()),
        }
    }

    pub fn field(&self, field: FormField) -> Option<&str> {
        match field {
            FormField::FullName => self.full_name.as_deref(),
            FormField::Age => self.age.as_deref(),
            FormField::Birthday => self.birthday.as_deref(),
            FormField::GuardianName => self.guardian_name.as_deref(),
        }
    }
}

// Roster files may write `age: 10`, `birthday: 20140515` or `full_name: 12345`
// unquoted. Any scalar becomes text; floats keep their decimal point so
// `10.0` is still rejected as a non-integer age.
fn deserialize_loose_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(LooseTextVisitor)
}

struct LooseTextVisitor;

impl<'de> Visitor<'de> for LooseTextVisitor {
    type Value = Option<String>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a text, number or boolean value")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        Ok(Some(value.to_string()))
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<Self::Value, E> {
        Ok(Some(value))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        Ok(Some(value.to_string()))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        Ok(Some(value.to_string()))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
        Ok(Some(format!("{:?}", value)))
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> Result<Self::Value, E> {
        Ok(Some(value.to_string()))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(self)
    }
}

/// Every failing field of one form, in field order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormReport {
    pub is_valid: bool,
    pub issues: Vec<String>,
}

impl Default for FormReport {
    fn default() -> Self {
        Self::new()
    }
}

impl FormReport {
    pub fn new() -> Self {
        FormReport {
            is_valid: true,
            issues: Vec::new(),
        }
    }

    pub fn add_issue(&mut self, issue: String) {
        self.is_valid = false;
        self.issues.push(issue);
    }

    /// Records the message of `result` if it failed.
    pub fn record(&mut self, result: ValidationResult) {
        if !result.is_valid {
            self.add_issue(result.error_message);
        }
    }
}

/// Validation outcome of one roster entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosterEntry {
    /// 1-based position in the roster file
    pub index: usize,
    pub label: String,
    pub report: FormReport,
}

/// Validation outcome of a whole roster file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RosterReport {
    pub entries: Vec<RosterEntry>,
    /// Problems with the file as a whole rather than a single entry
    pub roster_issues: Vec<String>,
}

impl RosterReport {
    pub fn is_valid(&self) -> bool {
        self.roster_issues.is_empty() && self.entries.iter().all(|e| e.report.is_valid)
    }

    pub fn invalid_count(&self) -> usize {
        self.entries.iter().filter(|e| !e.report.is_valid).count()
    }

    /// Every problem in the roster, each prefixed with the entry it belongs to.
    pub fn issues(&self) -> Vec<String> {
        let mut issues = self.roster_issues.clone();
        for entry in &self.entries {
            for issue in &entry.report.issues {
                issues.push(format!(
                    "Student {} ({}): {}",
                    entry.index, entry.label, issue
                ));
            }
        }
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_result_has_empty_message() {
        let result = ValidationResult::valid();
        assert!(result.is_valid());
        assert!(result.error_message().is_empty());
        assert_eq!(result.to_string(), "valid");
    }

    #[test]
    fn test_invalid_result_keeps_message() {
        let result = ValidationResult::invalid("Age must be at least 1");
        assert!(!result.is_valid());
        assert_eq!(result.error_message(), "Age must be at least 1");
        assert_eq!(result.to_string(), "Age must be at least 1");
    }

    #[test]
    fn test_form_report_records_only_failures() {
        let mut report = FormReport::new();
        report.record(ValidationResult::valid());
        assert!(report.is_valid);
        assert!(report.issues.is_empty());

        report.record(ValidationResult::invalid("Birthday is required"));
        assert!(!report.is_valid);
        assert_eq!(report.issues, vec!["Birthday is required".to_string()]);
    }

    #[test]
    fn test_student_form_accepts_aliases_and_numeric_age() {
        let yaml = r#"
name: John Doe
age: 10
birthday: 05/15/2014
parents_name: Jane Doe
"#;
        let form: StudentForm = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(form.full_name.as_deref(), Some("John Doe"));
        assert_eq!(form.age.as_deref(), Some("10"));
        assert_eq!(form.birthday.as_deref(), Some("05/15/2014"));
        assert_eq!(form.guardian_name.as_deref(), Some("Jane Doe"));
    }

    #[test]
    fn test_student_form_float_age_keeps_decimal_point() {
        let form: StudentForm = serde_json::from_str(r#"{"age": 10.0}"#).unwrap();
        assert_eq!(form.age.as_deref(), Some("10.0"));

        let form: StudentForm = serde_json::from_str(r#"{"age": 25.5}"#).unwrap();
        assert_eq!(form.age.as_deref(), Some("25.5"));
    }

    #[test]
    fn test_student_form_unquoted_scalars_become_text() {
        let yaml = r#"
full_name: 12345
age: 9
birthday: 20140515
guardian_name: true
"#;
        let form: StudentForm = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(form.full_name.as_deref(), Some("12345"));
        assert_eq!(form.age.as_deref(), Some("9"));
        assert_eq!(form.birthday.as_deref(), Some("20140515"));
        assert_eq!(form.guardian_name.as_deref(), Some("true"));
    }

    #[test]
    fn test_student_form_null_fields_are_none() {
        let form: StudentForm =
            serde_json::from_str(r#"{"full_name": null, "age": null}"#).unwrap();
        assert_eq!(form.full_name, None);
        assert_eq!(form.age, None);
    }

    #[test]
    fn test_student_form_rejects_nested_values() {
        let err = serde_json::from_str::<StudentForm>(r#"{"full_name": ["a", "b"]}"#)
            .unwrap_err();
        assert!(err.to_string().contains("line 1"));
    }

    #[test]
    fn test_student_form_missing_fields_are_none() {
        let form: StudentForm = serde_json::from_str(r#"{"full_name": "Ana"}"#).unwrap();
        assert_eq!(form.field(FormField::FullName), Some("Ana"));
        assert_eq!(form.field(FormField::Age), None);
        assert_eq!(form.field(FormField::Birthday), None);
        assert_eq!(form.field(FormField::GuardianName), None);
    }

    #[test]
    fn test_roster_report_prefixes_entry_issues() {
        let mut bad = FormReport::new();
        bad.add_issue("Age must be at least 1".to_string());

        let report = RosterReport {
            entries: vec![
                RosterEntry {
                    index: 1,
                    label: "John Doe".to_string(),
                    report: FormReport::new(),
                },
                RosterEntry {
                    index: 2,
                    label: "Ana Cruz".to_string(),
                    report: bad,
                },
            ],
            roster_issues: Vec::new(),
        };

        assert!(!report.is_valid());
        assert_eq!(report.invalid_count(), 1);
        assert_eq!(
            report.issues(),
            vec!["Student 2 (Ana Cruz): Age must be at least 1".to_string()]
        );
    }

    #[test]
    fn test_field_order_and_labels() {
        let labels: Vec<&str> = FormField::ALL.iter().map(|f| f.label()).collect();
        assert_eq!(labels, vec!["Full Name", "Age", "Birthday", "Parents' Name"]);
    }
}
