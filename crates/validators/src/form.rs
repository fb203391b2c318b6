use crate::{validate_age, validate_birthday, validate_full_name, validate_guardian_name};
use models::{FormField, FormReport, StudentForm, ValidationResult};

pub fn validate_field(field: FormField, value: Option<&str>) -> ValidationResult {
    match field {
        FormField::FullName => validate_full_name(value),
        FormField::Age => validate_age(value),
        FormField::Birthday => validate_birthday(value),
        FormField::GuardianName => validate_guardian_name(value),
    }
}

/// Validates every field of the form and returns the first failure, checking
/// full name, age, birthday and guardian name in that order.
pub fn validate_all(
    full_name: Option<&str>,
    age: Option<&str>,
    birthday: Option<&str>,
    guardian_name: Option<&str>,
) -> ValidationResult {
    let values = [full_name, age, birthday, guardian_name];

    FormField::ALL
        .iter()
        .zip(values)
        .map(|(field, value)| validate_field(*field, value))
        .find(|result| !result.is_valid())
        .unwrap_or_else(ValidationResult::valid)
}

pub fn validate_form(form: &StudentForm) -> ValidationResult {
    validate_all(
        form.full_name.as_deref(),
        form.age.as_deref(),
        form.birthday.as_deref(),
        form.guardian_name.as_deref(),
    )
}

/// Unlike [`validate_form`], keeps going after the first failure so every
/// problem with the entry can be reported at once.
pub fn collect_form_issues(form: &StudentForm) -> FormReport {
    let mut report = FormReport::new();
    for field in FormField::ALL {
        report.record(validate_field(field, form.field(field)));
    }
    report
}
