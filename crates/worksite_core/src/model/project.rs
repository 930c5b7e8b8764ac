//! Project domain model.
//!
//! # Responsibility
//! - Define the canonical project record and its lifecycle status.
//! - Enforce field bounds and date-window invariants on write paths.
//!
//! # Invariants
//! - `project_id` is stable and never reused for another project.
//! - End dates must not be earlier than `start_date` when set.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

const PROJECT_NAME_MIN_CHARS: usize = 3;
const PROJECT_NAME_MAX_CHARS: usize = 200;
const ADDRESS_MIN_CHARS: usize = 5;
const ADDRESS_MAX_CHARS: usize = 500;
const CLIENT_INFO_MAX_CHARS: usize = 1000;

/// Stable identifier for a project record.
pub type ProjectId = Uuid;

/// Project lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// Scoped but not yet started.
    Planning,
    /// Work on site is underway.
    InProgress,
    /// Delivered and closed out.
    Completed,
    /// Paused with no committed resume date.
    OnHold,
}

/// Validation failure for project write paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectValidationError {
    NilProjectId,
    NameOutOfBounds { length: usize },
    AddressOutOfBounds { length: usize },
    ClientInfoTooLong { length: usize },
    EndDateBeforeStart { start: i64, end: i64 },
}

impl Display for ProjectValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilProjectId => write!(f, "project id must not be the nil UUID"),
            Self::NameOutOfBounds { length } => write!(
                f,
                "project name length {length} must be between {PROJECT_NAME_MIN_CHARS} and {PROJECT_NAME_MAX_CHARS}"
            ),
            Self::AddressOutOfBounds { length } => write!(
                f,
                "project address length {length} must be between {ADDRESS_MIN_CHARS} and {ADDRESS_MAX_CHARS}"
            ),
            Self::ClientInfoTooLong { length } => write!(
                f,
                "client info length {length} exceeds maximum {CLIENT_INFO_MAX_CHARS}"
            ),
            Self::EndDateBeforeStart { start, end } => {
                write!(f, "end date ({end}) must be >= start date ({start})")
            }
        }
    }
}

impl Error for ProjectValidationError {}

/// Canonical project record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Stable global ID used for linking and auditing.
    pub project_id: ProjectId,
    pub project_name: String,
    /// Site address; required for field dispatch.
    pub address: String,
    /// Free-form client contact details.
    pub client_info: String,
    pub status: ProjectStatus,
    /// Unix epoch milliseconds.
    pub start_date: i64,
    /// Unix epoch milliseconds. Should be >= `start_date` when set.
    pub estimated_end_date: Option<i64>,
    /// Unix epoch milliseconds. Set when the project closes out.
    pub actual_end_date: Option<i64>,
}

impl Project {
    /// Creates a planning-stage project with a generated stable ID.
    pub fn new(
        project_name: impl Into<String>,
        address: impl Into<String>,
        start_date: i64,
    ) -> Self {
        Self {
            project_id: Uuid::new_v4(),
            project_name: project_name.into(),
            address: address.into(),
            client_info: String::new(),
            status: ProjectStatus::Planning,
            start_date,
            estimated_end_date: None,
            actual_end_date: None,
        }
    }

    /// Creates a project with a caller-provided stable ID.
    ///
    /// Used by import paths where identity already exists externally.
    ///
    /// # Errors
    /// - `NilProjectId` when the provided UUID is nil.
    pub fn with_id(
        project_id: ProjectId,
        project_name: impl Into<String>,
        address: impl Into<String>,
        start_date: i64,
    ) -> Result<Self, ProjectValidationError> {
        if project_id.is_nil() {
            return Err(ProjectValidationError::NilProjectId);
        }
        Ok(Self {
            project_id,
            project_name: project_name.into(),
            address: address.into(),
            client_info: String::new(),
            status: ProjectStatus::Planning,
            start_date,
            estimated_end_date: None,
            actual_end_date: None,
        })
    }

    /// Validates identifier, field bounds and date windows.
    pub fn validate(&self) -> Result<(), ProjectValidationError> {
        if self.project_id.is_nil() {
            return Err(ProjectValidationError::NilProjectId);
        }

        let name_length = self.project_name.trim().chars().count();
        if name_length < PROJECT_NAME_MIN_CHARS || name_length > PROJECT_NAME_MAX_CHARS {
            return Err(ProjectValidationError::NameOutOfBounds {
                length: name_length,
            });
        }

        let address_length = self.address.trim().chars().count();
        if address_length < ADDRESS_MIN_CHARS || address_length > ADDRESS_MAX_CHARS {
            return Err(ProjectValidationError::AddressOutOfBounds {
                length: address_length,
            });
        }

        let client_info_length = self.client_info.chars().count();
        if client_info_length > CLIENT_INFO_MAX_CHARS {
            return Err(ProjectValidationError::ClientInfoTooLong {
                length: client_info_length,
            });
        }

        for end in [self.estimated_end_date, self.actual_end_date]
            .into_iter()
            .flatten()
        {
            if end < self.start_date {
                return Err(ProjectValidationError::EndDateBeforeStart {
                    start: self.start_date,
                    end,
                });
            }
        }

        Ok(())
    }
}
