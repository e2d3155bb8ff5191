//! Frontend Models
//!
//! Data structures matching the todo server's wire format.

use serde::{Deserialize, Serialize};

/// A stored to-do record (matches the server)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    /// Server-assigned identifier, never changes once assigned
    pub id: String,
    pub owner: String,
    /// true = complete, false = incomplete
    pub status: bool,
    /// Free text, no format constraint
    pub body: String,
    pub category: String,
}

/// A to-do about to be created; the server assigns the id and
/// returns it as plain text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTodo {
    pub owner: String,
    pub status: bool,
    pub body: String,
    pub category: String,
}
