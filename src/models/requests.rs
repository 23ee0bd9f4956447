//! Request DTOs for the record service API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

/// Maximum accepted length for the `type` field
pub const MAX_TYPE_LENGTH: usize = 256;

/// Maximum accepted length for the `description` field
pub const MAX_DESCRIPTION_LENGTH: usize = 4096;

/// Request body for creating a record (POST /records)
///
/// # Fields
/// - `type`: free-form classifier for the new record
/// - `description`: free-form payload
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRecordRequest {
    /// Free-form classifier
    #[serde(rename = "type")]
    pub kind: String,
    /// Free-form payload
    pub description: String,
}

impl CreateRecordRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        validate_fields(&self.kind, &self.description)
    }
}

/// Request body for updating a record (PUT /records/:id)
///
/// The target id comes from the path. Updating an id that does not
/// exist creates the entry under that id.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateRecordRequest {
    /// Free-form classifier
    #[serde(rename = "type")]
    pub kind: String,
    /// Free-form payload
    pub description: String,
}

impl UpdateRecordRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        validate_fields(&self.kind, &self.description)
    }
}

fn validate_fields(kind: &str, description: &str) -> Option<String> {
    if kind.is_empty() {
        return Some("Type cannot be empty".to_string());
    }
    if kind.len() > MAX_TYPE_LENGTH {
        return Some(format!(
            "Type exceeds maximum length of {} characters",
            MAX_TYPE_LENGTH
        ));
    }
    if description.len() > MAX_DESCRIPTION_LENGTH {
        return Some(format!(
            "Description exceeds maximum length of {} characters",
            MAX_DESCRIPTION_LENGTH
        ));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_deserialize() {
        let json = r#"{"type": "todo", "description": "buy milk"}"#;
        let req: CreateRecordRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.kind, "todo");
        assert_eq!(req.description, "buy milk");
    }

    #[test]
    fn test_update_request_deserialize() {
        let json = r#"{"type": "chore", "description": "walk dog"}"#;
        let req: UpdateRecordRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.kind, "chore");
    }

    #[test]
    fn test_validate_empty_type() {
        let req = CreateRecordRequest {
            kind: "".to_string(),
            description: "x".to_string(),
        };
        assert!(req.validate().is_some());
    }

    #[test]
    fn test_validate_oversized_type() {
        let req = CreateRecordRequest {
            kind: "x".repeat(MAX_TYPE_LENGTH + 1),
            description: "x".to_string(),
        };
        assert!(req.validate().is_some());
    }

    #[test]
    fn test_validate_valid_request() {
        let req = CreateRecordRequest {
            kind: "todo".to_string(),
            description: "buy milk".to_string(),
        };
        assert!(req.validate().is_none());
    }

    #[test]
    fn test_validate_empty_description_allowed() {
        let req = UpdateRecordRequest {
            kind: "todo".to_string(),
            description: "".to_string(),
        };
        assert!(req.validate().is_none());
    }
}
