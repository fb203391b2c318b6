// utils crate

use std::path::Path;

/// Serialization formats a roster file can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterFormat {
    Yaml,
    Json,
}

pub fn roster_format(path: &Path) -> Option<RosterFormat> {
    let ext = path.extension()?.to_string_lossy().to_lowercase();
    match ext.as_str() {
        "yml" | "yaml" => Some(RosterFormat::Yaml),
        "json" => Some(RosterFormat::Json),
        _ => None,
    }
}

pub fn is_roster_file(path: &Path) -> bool {
    path.is_file() && roster_format(path).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    #[test]
    fn test_roster_format_by_extension() {
        assert_eq!(
            roster_format(&PathBuf::from("class.yml")),
            Some(RosterFormat::Yaml)
        );
        assert_eq!(
            roster_format(&PathBuf::from("class.YAML")),
            Some(RosterFormat::Yaml)
        );
        assert_eq!(
            roster_format(&PathBuf::from("rosters/class.json")),
            Some(RosterFormat::Json)
        );
        assert_eq!(roster_format(&PathBuf::from("notes.txt")), None);
        assert_eq!(roster_format(&PathBuf::from("Makefile")), None);
    }

    #[test]
    fn test_is_roster_file_requires_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let roster = dir.path().join("class.yaml");
        let notes = dir.path().join("notes.txt");
        fs::write(&roster, "[]").unwrap();
        fs::write(&notes, "hello").unwrap();

        assert!(is_roster_file(&roster));
        assert!(!is_roster_file(&notes));
        assert!(!is_roster_file(&dir.path().join("missing.yml")));
    }
}
