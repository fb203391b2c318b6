// validators crate

mod age;
mod birthday;
mod form;
mod name;

pub use age::validate_age;
pub use birthday::validate_birthday;
pub use form::{collect_form_issues, validate_all, validate_field, validate_form};
pub use name::{validate_full_name, validate_guardian_name};

// Shared by every free-text field: absent, empty and whitespace-only input
// are all treated as missing.
fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}
