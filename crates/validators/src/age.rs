use models::{ValidationResult, MAX_AGE, MIN_AGE};

/// Validates the age field: a whole number between 1 and 150 inclusive.
///
/// Surrounding whitespace is ignored. Decimals, signs without digits and
/// values that overflow an `i32` are all reported as not being a number.
pub fn validate_age(age: Option<&str>) -> ValidationResult {
    let trimmed = match age.map(str::trim) {
        Some(t) if !t.is_empty() => t,
        _ => return ValidationResult::invalid("Age is required and cannot be empty"),
    };

    let age: i32 = match trimmed.parse() {
        Ok(n) => n,
        Err(_) => return ValidationResult::invalid("Age must be a valid number"),
    };

    if age < MIN_AGE {
        return ValidationResult::invalid(format!("Age must be at least {}", MIN_AGE));
    }
    if age > MAX_AGE {
        return ValidationResult::invalid(format!("Age cannot be greater than {}", MAX_AGE));
    }

    ValidationResult::valid()
}
