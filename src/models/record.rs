//! Record Model
//!
//! The sole domain entity stored and served by this system.

use serde::{Deserialize, Serialize};

// == Record ==
/// A todo record.
///
/// `id` is assigned by the service on creation and never changes across
/// updates; `kind` and `description` are fully replaceable. `kind` is a
/// free-form classifier used only for filtered lookups and carries no
/// enforced vocabulary (it serializes as `type` on the wire).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Unique identifier among live records
    pub id: String,
    /// Free-form classifier
    #[serde(rename = "type")]
    pub kind: String,
    /// Free-form payload
    pub description: String,
}
