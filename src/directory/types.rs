//! Core identifier types for the directory snapshot

use serde::{Deserialize, Serialize};
use std::fmt;

/// Business key for a position holder, unique within one snapshot.
///
/// Hierarchy links (`line_manager_id`), search matching, and expansion-set
/// membership all use this key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct EmployeeId(String);

impl EmployeeId {
    pub fn new(id: impl Into<String>) -> Self {
        EmployeeId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for EmployeeId {
    fn from(s: String) -> Self {
        EmployeeId(s)
    }
}

impl From<&str> for EmployeeId {
    fn from(s: &str) -> Self {
        EmployeeId(s.to_string())
    }
}

/// Opaque database-level key for a position record.
///
/// Used for lookups that need a stable storage reference, e.g. resolving the
/// job description assigned to a position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        RecordId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for RecordId {
    fn from(s: String) -> Self {
        RecordId(s)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        RecordId(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employee_id() {
        let id = EmployeeId::new("E1042");
        assert_eq!(id.as_str(), "E1042");
        assert_eq!(format!("{}", id), "E1042");

        let id2: EmployeeId = "E2001".into();
        assert_eq!(id2.as_str(), "E2001");
    }

    #[test]
    fn test_record_id() {
        let id = RecordId::new("rec-7");
        assert_eq!(id.as_str(), "rec-7");
        assert_eq!(format!("{}", id), "rec-7");
    }

    #[test]
    fn test_id_ordering() {
        let a = EmployeeId::new("A");
        let b = EmployeeId::new("B");
        assert!(a < b);
    }
}
