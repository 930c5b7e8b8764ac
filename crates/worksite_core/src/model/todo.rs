//! Todo domain model.
//!
//! # Responsibility
//! - Define the canonical todo record and its creation request shape.
//! - Provide validation enforced on every write path.
//!
//! # Invariants
//! - `id` is assigned by the backing store and immutable once assigned.
//! - `title` is non-empty and capped at `TITLE_MAX_CHARS`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Maximum accepted title length in characters.
pub const TITLE_MAX_CHARS: usize = 255;

/// Stable store-assigned identifier for a todo row.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TodoId = i64;

/// Validation failure for todo write paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoValidationError {
    /// Title is empty or whitespace-only.
    EmptyTitle,
    /// Title exceeds `TITLE_MAX_CHARS`.
    TitleTooLong { length: usize },
}

impl Display for TodoValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "todo title must not be empty"),
            Self::TitleTooLong { length } => write!(
                f,
                "todo title length {length} exceeds maximum {TITLE_MAX_CHARS}"
            ),
        }
    }
}

impl Error for TodoValidationError {}

/// Canonical todo record as persisted by the backing store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Store-assigned identifier. Never changes for the lifetime of the row.
    pub id: TodoId,
    /// Short human-readable description of the work item.
    pub title: String,
    /// Completion flag.
    pub is_completed: bool,
    /// Optional due date in epoch milliseconds.
    pub due_date: Option<i64>,
}

impl TodoItem {
    /// Validates the mutable payload fields.
    ///
    /// # Errors
    /// - `EmptyTitle` when the title is blank after trimming.
    /// - `TitleTooLong` when the title exceeds the character cap.
    pub fn validate(&self) -> Result<(), TodoValidationError> {
        validate_title(&self.title)
    }
}

/// Creation request for a todo. The store assigns the identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTodo {
    pub title: String,
    pub is_completed: bool,
    pub due_date: Option<i64>,
}

impl NewTodo {
    /// Creates a not-yet-completed todo request with no due date.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            is_completed: false,
            due_date: None,
        }
    }

    /// Validates the request payload with the same rules as `TodoItem`.
    pub fn validate(&self) -> Result<(), TodoValidationError> {
        validate_title(&self.title)
    }
}

fn validate_title(title: &str) -> Result<(), TodoValidationError> {
    if title.trim().is_empty() {
        return Err(TodoValidationError::EmptyTitle);
    }
    let length = title.chars().count();
    if length > TITLE_MAX_CHARS {
        return Err(TodoValidationError::TitleTooLong { length });
    }
    Ok(())
}
