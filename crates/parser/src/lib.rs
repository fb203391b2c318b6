// parser crate

pub mod roster;

pub use roster::{parse_roster, parse_roster_str, ParserError};
pub use utils::RosterFormat;
