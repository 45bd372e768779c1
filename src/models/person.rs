use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{Company, EmploymentEntry};

/// Display-ready person record derived from a raw person.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: String,
    pub name: String,
    pub title: String,
    pub photo: String,
    pub photo_url: String,
    pub headline: String,
    pub email: String,
    /// Sourced from the person's own organization fragment; people carry no
    /// number of their own upstream.
    pub phone: String,
    pub linkedin: String,
    pub city: String,
    pub seniority: Seniority,
    /// Never absent: joined from the company set by organization id, or
    /// synthesized from the embedded fragment when no match exists.
    pub company: Company,
    pub employment_history: Vec<EmploymentEntry>,
}

/// Role classification with the five well-known levels named, and anything
/// else carried through as-is after capitalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Seniority {
    Junior,
    Mid,
    Senior,
    Executive,
    CLevel,
    /// A capitalized free-form value matching none of the named levels.
    Other(String),
}

impl Seniority {
    pub fn as_str(&self) -> &str {
        match self {
            Seniority::Junior => "Junior",
            Seniority::Mid => "Mid",
            Seniority::Senior => "Senior",
            Seniority::Executive => "Executive",
            Seniority::CLevel => "C-Level",
            Seniority::Other(label) => label,
        }
    }

    /// Normalize the raw upstream value.
    ///
    /// Exactly `"founder"` maps to C-Level. Any other non-empty value keeps
    /// its spelling with only the first character upper-cased, so `"senior"`
    /// becomes Senior but `"FOUNDER"` stays the free-form `"FOUNDER"`.
    /// Absent or empty means Junior.
    pub fn normalize(raw: Option<&str>) -> Self {
        match raw {
            Some("founder") => Seniority::CLevel,
            None | Some("") => Seniority::Junior,
            Some(value) => Seniority::from_label(capitalize_first(value)),
        }
    }

    fn from_label(label: String) -> Self {
        match label.as_str() {
            "Junior" => Seniority::Junior,
            "Mid" => Seniority::Mid,
            "Senior" => Seniority::Senior,
            "Executive" => Seniority::Executive,
            "C-Level" => Seniority::CLevel,
            _ => Seniority::Other(label),
        }
    }
}

impl fmt::Display for Seniority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Seniority {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Seniority {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Seniority::from_label(String::deserialize(deserializer)?))
    }
}

/// Upper-case the first character only; the rest keeps its spelling.
fn capitalize_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn founder_is_c_level() {
        assert_eq!(Seniority::normalize(Some("founder")), Seniority::CLevel);
    }

    #[test]
    fn founder_match_is_exact() {
        // Anything but the lowercase spelling takes the capitalize path.
        assert_eq!(
            Seniority::normalize(Some("FOUNDER")),
            Seniority::Other("FOUNDER".to_string())
        );
        assert_eq!(
            Seniority::normalize(Some("Founder")),
            Seniority::Other("Founder".to_string())
        );
    }

    #[test]
    fn named_levels_from_lowercase() {
        assert_eq!(Seniority::normalize(Some("junior")), Seniority::Junior);
        assert_eq!(Seniority::normalize(Some("mid")), Seniority::Mid);
        assert_eq!(Seniority::normalize(Some("senior")), Seniority::Senior);
        assert_eq!(Seniority::normalize(Some("executive")), Seniority::Executive);
    }

    #[test]
    fn absent_or_empty_is_junior() {
        assert_eq!(Seniority::normalize(None), Seniority::Junior);
        assert_eq!(Seniority::normalize(Some("")), Seniority::Junior);
    }

    #[test]
    fn only_first_character_changes() {
        assert_eq!(
            Seniority::normalize(Some("vp of sales")),
            Seniority::Other("Vp of sales".to_string())
        );
        assert_eq!(
            Seniority::normalize(Some("senIOR")),
            Seniority::Other("SenIOR".to_string())
        );
        // "c-level" capitalizes to "C-level", which is not the display
        // spelling "C-Level", so it stays free-form.
        assert_eq!(
            Seniority::normalize(Some("c-level")),
            Seniority::Other("C-level".to_string())
        );
    }

    #[test]
    fn display_labels() {
        assert_eq!(Seniority::CLevel.to_string(), "C-Level");
        assert_eq!(Seniority::Junior.to_string(), "Junior");
        assert_eq!(Seniority::Other("Advisor".to_string()).to_string(), "Advisor");
    }

    #[test]
    fn serializes_as_plain_string() {
        assert_eq!(
            serde_json::to_string(&Seniority::CLevel).unwrap(),
            "\"C-Level\""
        );
        assert_eq!(
            serde_json::to_string(&Seniority::Other("Advisor".to_string())).unwrap(),
            "\"Advisor\""
        );
    }

    #[test]
    fn deserializes_display_labels_back_to_variants() {
        let senior: Seniority = serde_json::from_str("\"Senior\"").unwrap();
        assert_eq!(senior, Seniority::Senior);
        let c_level: Seniority = serde_json::from_str("\"C-Level\"").unwrap();
        assert_eq!(c_level, Seniority::CLevel);
        let other: Seniority = serde_json::from_str("\"Advisor\"").unwrap();
        assert_eq!(other, Seniority::Other("Advisor".to_string()));
    }
}
