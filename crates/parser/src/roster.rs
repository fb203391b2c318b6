use models::StudentForm;
use serde::de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::fs;
use std::path::Path;
use thiserror::Error;
use utils::{roster_format, RosterFormat};

#[derive(Error, Debug)]
pub enum ParserError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Unsupported roster format: {0} (expected .yml, .yaml or .json)")]
    UnsupportedFormat(String),
}

/// A roster is either a bare list of entries or a mapping with a
/// `students` list. An empty document or a null `students` value is an
/// empty roster.
struct Roster(Vec<StudentForm>);

impl<'de> Deserialize<'de> for Roster {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(RosterVisitor).map(Roster)
    }
}

struct RosterVisitor;

impl<'de> Visitor<'de> for RosterVisitor {
    type Value = Vec<StudentForm>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a list of students or a mapping with a `students` list")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Vec::new())
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Vec::new())
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut forms = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(form) = seq.next_element()? {
            forms.push(form);
        }
        Ok(forms)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut students: Option<Vec<StudentForm>> = None;
        while let Some(key) = map.next_key::<String>()? {
            if key == "students" {
                if students.is_some() {
                    return Err(de::Error::duplicate_field("students"));
                }
                students = Some(map.next_value::<Option<Vec<StudentForm>>>()?.unwrap_or_default());
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }
        students.ok_or_else(|| de::Error::missing_field("students"))
    }
}

/// Parse a roster file, choosing the format from its extension
pub fn parse_roster(path: &Path) -> Result<Vec<StudentForm>, ParserError> {
    let format = roster_format(path)
        .ok_or_else(|| ParserError::UnsupportedFormat(path.display().to_string()))?;

    let content = fs::read_to_string(path)?;
    parse_roster_str(&content, format)
}

pub fn parse_roster_str(
    content: &str,
    format: RosterFormat,
) -> Result<Vec<StudentForm>, ParserError> {
    // An empty file has no document at all
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    let roster: Roster = match format {
        RosterFormat::Yaml => serde_yaml::from_str(content)?,
        RosterFormat::Json => serde_json::from_str(content)?,
    };

    Ok(roster.0)
}
