//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::diff::generate_diff;
use crate::models::Record;

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Contact was created
    Create,
    /// Contact was updated
    Update,
    /// Contact was deleted
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Update => write!(f, "UPDATE"),
            Operation::Delete => write!(f, "DELETE"),
        }
    }
}

/// Types of entities that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Contact,
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityType::Contact => write!(f, "Contact"),
        }
    }
}

/// A single audit log entry
///
/// Contacts are keyed by name, so the name doubles as the entity identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Type of operation performed
    pub operation: Operation,

    /// Type of entity affected
    pub entity_type: EntityType,

    /// Name of the affected contact
    pub entity_name: String,

    /// JSON representation before the operation (updates and deletes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    /// JSON representation after the operation (creates and updates)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,

    /// Human-readable diff summary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff_summary: Option<String>,
}

impl AuditEntry {
    /// Entry for a newly added contact
    pub fn create(record: &Record) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Create,
            entity_type: EntityType::Contact,
            entity_name: record.name().value().to_string(),
            before: None,
            after: serde_json::to_value(record).ok(),
            diff_summary: None,
        }
    }

    /// Entry for a modified contact, with a diff of the changed fields
    pub fn update(before: &Record, after: &Record) -> Self {
        let before = serde_json::to_value(before).ok();
        let after_value = serde_json::to_value(after).ok();
        let diff_summary = match (&before, &after_value) {
            (Some(b), Some(a)) => generate_diff(b, a),
            _ => None,
        };

        Self {
            timestamp: Utc::now(),
            operation: Operation::Update,
            entity_type: EntityType::Contact,
            entity_name: after.name().value().to_string(),
            before,
            after: after_value,
            diff_summary,
        }
    }

    /// Entry for a removed contact
    pub fn delete(record: &Record) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Delete,
            entity_type: EntityType::Contact,
            entity_name: record.name().value().to_string(),
            before: serde_json::to_value(record).ok(),
            after: None,
            diff_summary: None,
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.entity_type,
            self.entity_name
        );

        if let Some(diff) = &self.diff_summary {
            output.push_str(&format!("\n  Changes: {}", diff));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> Record {
        let mut record = Record::new("Alice").unwrap();
        record.add_phone("1111111111").unwrap();
        record
    }

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::Create.to_string(), "CREATE");
        assert_eq!(Operation::Update.to_string(), "UPDATE");
        assert_eq!(Operation::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_create_entry() {
        let entry = AuditEntry::create(&alice());

        assert_eq!(entry.operation, Operation::Create);
        assert_eq!(entry.entity_type, EntityType::Contact);
        assert_eq!(entry.entity_name, "Alice");
        assert!(entry.before.is_none());
        assert_eq!(entry.after.unwrap()["phones"][0], "1111111111");
    }

    #[test]
    fn test_update_entry() {
        let before = alice();
        let mut after = before.clone();
        after.add_birthday("12.06.1990").unwrap();

        let entry = AuditEntry::update(&before, &after);

        assert_eq!(entry.operation, Operation::Update);
        assert!(entry.before.is_some());
        assert!(entry.after.is_some());
        assert_eq!(
            entry.diff_summary.as_deref(),
            Some("birthday: null -> \"12.06.1990\"")
        );
    }

    #[test]
    fn test_delete_entry() {
        let entry = AuditEntry::delete(&alice());

        assert_eq!(entry.operation, Operation::Delete);
        assert!(entry.before.is_some());
        assert!(entry.after.is_none());
    }

    #[test]
    fn test_serialization() {
        let entry = AuditEntry::create(&alice());

        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"operation\":\"create\""));
        assert!(json.contains("\"entity_type\":\"contact\""));

        let deserialized: AuditEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.operation, Operation::Create);
        assert_eq!(deserialized.entity_name, "Alice");
    }

    #[test]
    fn test_human_readable_format() {
        let before = alice();
        let mut after = before.clone();
        after.add_phone("2222222222").unwrap();

        let formatted = AuditEntry::update(&before, &after).format_human_readable();
        assert!(formatted.contains("UPDATE Contact Alice"));
        assert!(formatted.contains("Changes: phones:"));
    }
}
