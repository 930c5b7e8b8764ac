//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep API/transport layers decoupled from storage details.

pub mod project_service;
pub mod todo_service;
