use crate::is_blank;
use models::ValidationResult;

// Only presence is checked; the form's date picker owns the format.
pub fn validate_birthday(birthday: Option<&str>) -> ValidationResult {
    if is_blank(birthday) {
        return ValidationResult::invalid("Birthday is required and cannot be empty");
    }
    ValidationResult::valid()
}
