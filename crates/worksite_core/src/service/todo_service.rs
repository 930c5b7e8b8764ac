//! Todo use-case service.
//!
//! # Responsibility
//! - Provide stable CRUD entry points for core callers.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Service APIs never bypass repository validation/persistence contracts.
//! - Updates on missing identifiers are always explicit failures.

use crate::model::todo::{NewTodo, TodoId, TodoItem};
use crate::repo::todo_repo::{TodoListQuery, TodoRepository};
use crate::repo::RepoResult;

/// One page of todos plus the unpaginated total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoPage {
    pub items: Vec<TodoItem>,
    pub total_count: u64,
}

/// Use-case service wrapper for todo CRUD operations.
pub struct TodoService<R: TodoRepository> {
    repo: R,
}

impl<R: TodoRepository> TodoService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a new todo and returns the store-assigned id.
    pub fn create_todo(&self, new_todo: &NewTodo) -> RepoResult<TodoId> {
        self.repo.create_todo(new_todo)
    }

    /// Updates an existing todo by stable id.
    ///
    /// The repository routes this through the unit-of-work reconciler, so a
    /// missing id surfaces as `TodoNotFound` rather than silently succeeding.
    pub fn update_todo(&self, item: &TodoItem) -> RepoResult<()> {
        self.repo.update_todo(item)
    }

    /// Gets one todo by id.
    pub fn get_todo(&self, id: TodoId) -> RepoResult<Option<TodoItem>> {
        self.repo.get_todo(id)
    }

    /// Lists todos using filter and pagination options.
    pub fn list_todos(&self, query: &TodoListQuery) -> RepoResult<Vec<TodoItem>> {
        self.repo.list_todos(query)
    }

    /// Lists one page of todos along with the filter's total row count.
    pub fn list_todos_page(&self, query: &TodoListQuery) -> RepoResult<TodoPage> {
        let items = self.repo.list_todos(query)?;
        let total_count = self.repo.count_todos(query)?;
        Ok(TodoPage { items, total_count })
    }

    /// Deletes a todo by id.
    pub fn delete_todo(&self, id: TodoId) -> RepoResult<()> {
        self.repo.delete_todo(id)
    }
}
