use crate::is_blank;
use models::ValidationResult;

pub fn validate_full_name(full_name: Option<&str>) -> ValidationResult {
    if is_blank(full_name) {
        return ValidationResult::invalid("Full Name is required and cannot be empty");
    }
    ValidationResult::valid()
}

/// Validates the parents' or guardian's name. Same rule as the full name.
pub fn validate_guardian_name(guardian_name: Option<&str>) -> ValidationResult {
    if is_blank(guardian_name) {
        return ValidationResult::invalid("Parents' Name is required and cannot be empty");
    }
    ValidationResult::valid()
}
