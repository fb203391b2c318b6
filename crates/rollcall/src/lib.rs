pub mod handlers;

pub use handlers::{check_form, roster_path, validate_rosters, CheckOutcome, RosterSummary};
