//! Canonical type definitions for the core domain
//!
//! Records fetched from the remote provider (`Person`) and records created
//! locally through the form (`SubmittedEntry`) are distinct types and are
//! never stored in the same collection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A remote-sourced person record. Identity is `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// A record created locally from a valid form submission.
///
/// Never sent anywhere; lives only as long as the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmittedEntry {
    /// Unix milliseconds at submission time.
    ///
    /// Two submissions inside the same millisecond share an id; ordering
    /// always comes from insertion order, never from this value.
    pub id: i64,
    pub name: String,
    pub designation: String,
    pub location: String,
    pub salary: i64,
    pub submitted_at: DateTime<Utc>,
}

/// Returned when a string names no known variant
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind}: {value}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

/// Layout used to display the people collection
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Table,
    Cards,
    List,
}

impl ViewMode {
    pub const ALL: [ViewMode; 3] = [ViewMode::Table, ViewMode::Cards, ViewMode::List];

    /// Identifier used in element ids and URLs
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Table => "table",
            Self::Cards => "cards",
            Self::List => "list",
        }
    }

    /// Get display label for this mode
    pub fn label(&self) -> &'static str {
        match self {
            Self::Table => "Table",
            Self::Cards => "Cards",
            Self::List => "List",
        }
    }
}

impl std::fmt::Display for ViewMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ViewMode {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "cards" | "card" => Ok(Self::Cards),
            "list" => Ok(Self::List),
            _ => Err(UnknownVariant {
                kind: "view mode",
                value: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_mode_from_str() {
        assert_eq!("table".parse::<ViewMode>().unwrap(), ViewMode::Table);
        assert_eq!("Cards".parse::<ViewMode>().unwrap(), ViewMode::Cards);
        assert_eq!(" list ".parse::<ViewMode>().unwrap(), ViewMode::List);
        assert!("grid".parse::<ViewMode>().is_err());
    }

    #[test]
    fn test_view_mode_roundtrips_through_as_str() {
        for mode in ViewMode::ALL {
            assert_eq!(mode.as_str().parse::<ViewMode>().unwrap(), mode);
        }
    }

    #[test]
    fn test_view_mode_order_follows_declaration() {
        let mut modes = vec![ViewMode::List, ViewMode::Table, ViewMode::Cards];
        modes.sort();
        assert_eq!(modes, ViewMode::ALL.to_vec());
    }

    #[test]
    fn test_person_accepts_negative_id() {
        let person: Person =
            serde_json::from_str(r#"{"id": -1, "name": "Ann", "email": "a@x.io"}"#).unwrap();
        assert_eq!(person.id, -1);
    }

    #[test]
    fn test_person_ignores_extra_fields() {
        let json = r#"{"id": 3, "name": "Clementine Bauch", "email": "n@x.io", "phone": "1-463"}"#;
        let person: Person = serde_json::from_str(json).unwrap();
        assert_eq!(person.id, 3);
        assert_eq!(person.name, "Clementine Bauch");
    }
}
