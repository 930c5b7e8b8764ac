//! Todo repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over canonical `todos` storage.
//! - Route the update path through the unit-of-work reconciler.
//!
//! # Invariants
//! - Write paths validate the model before SQL mutations.
//! - Read paths reject invalid persisted state instead of masking it.
//! - Updating or deleting a missing id reports `TodoNotFound`.

use crate::model::todo::{NewTodo, TodoId, TodoItem};
use crate::repo::{bool_to_int, ensure_connection_ready, int_to_bool, RepoError, RepoResult};
use crate::uow::TodoUnitOfWork;
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Row};

const TODO_SELECT_SQL: &str = "SELECT id, title, is_completed, due_date FROM todos";

const TODOS_TABLE: &str = "todos";
const TODOS_REQUIRED_COLUMNS: &[&str] =
    &["id", "title", "is_completed", "due_date", "updated_at"];

/// Query options for listing todos.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoListQuery {
    /// Optional completion-flag filter.
    pub is_completed: Option<bool>,
    /// Maximum rows to return. `None` returns all rows.
    pub limit: Option<u32>,
    /// Number of rows to skip.
    pub offset: u32,
}

/// Repository interface for todo CRUD operations.
pub trait TodoRepository {
    /// Creates one todo and returns the store-assigned id.
    fn create_todo(&self, new_todo: &NewTodo) -> RepoResult<TodoId>;
    /// Applies a full replacement payload to an existing todo.
    fn update_todo(&self, item: &TodoItem) -> RepoResult<()>;
    /// Gets one todo by id.
    fn get_todo(&self, id: TodoId) -> RepoResult<Option<TodoItem>>;
    /// Checks row existence by id without materializing the row.
    fn exists_todo(&self, id: TodoId) -> RepoResult<bool>;
    /// Lists todos using filter and pagination options.
    fn list_todos(&self, query: &TodoListQuery) -> RepoResult<Vec<TodoItem>>;
    /// Counts rows matching the filter, ignoring pagination.
    fn count_todos(&self, query: &TodoListQuery) -> RepoResult<u64>;
    /// Removes one todo by id.
    fn delete_todo(&self, id: TodoId) -> RepoResult<()>;
}

/// SQLite-backed todo repository.
pub struct SqliteTodoRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTodoRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, TODOS_TABLE, TODOS_REQUIRED_COLUMNS)?;
        Ok(Self { conn })
    }
}

impl TodoRepository for SqliteTodoRepository<'_> {
    fn create_todo(&self, new_todo: &NewTodo) -> RepoResult<TodoId> {
        new_todo.validate()?;

        self.conn.execute(
            "INSERT INTO todos (title, is_completed, due_date) VALUES (?1, ?2, ?3);",
            params![
                new_todo.title.as_str(),
                bool_to_int(new_todo.is_completed),
                new_todo.due_date,
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn update_todo(&self, item: &TodoItem) -> RepoResult<()> {
        let mut uow = TodoUnitOfWork::new(self.conn)?;
        uow.update(item)?;
        uow.commit()
    }

    fn get_todo(&self, id: TodoId) -> RepoResult<Option<TodoItem>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{TODO_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_todo_row(row)?));
        }

        Ok(None)
    }

    fn exists_todo(&self, id: TodoId) -> RepoResult<bool> {
        let exists: i64 = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM todos WHERE id = ?1);",
            params![id],
            |row| row.get(0),
        )?;
        Ok(exists == 1)
    }

    fn list_todos(&self, query: &TodoListQuery) -> RepoResult<Vec<TodoItem>> {
        let mut sql = format!("{TODO_SELECT_SQL} WHERE 1 = 1");
        let mut bind_values: Vec<Value> = Vec::new();

        if let Some(is_completed) = query.is_completed {
            sql.push_str(" AND is_completed = ?");
            bind_values.push(Value::Integer(bool_to_int(is_completed)));
        }

        sql.push_str(" ORDER BY id ASC");

        if let Some(limit) = query.limit {
            sql.push_str(" LIMIT ?");
            bind_values.push(Value::Integer(i64::from(limit)));
            if query.offset > 0 {
                sql.push_str(" OFFSET ?");
                bind_values.push(Value::Integer(i64::from(query.offset)));
            }
        } else if query.offset > 0 {
            sql.push_str(" LIMIT -1 OFFSET ?");
            bind_values.push(Value::Integer(i64::from(query.offset)));
        }

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(bind_values))?;
        let mut todos = Vec::new();

        while let Some(row) = rows.next()? {
            todos.push(parse_todo_row(row)?);
        }

        Ok(todos)
    }

    fn count_todos(&self, query: &TodoListQuery) -> RepoResult<u64> {
        let mut sql = "SELECT COUNT(*) FROM todos WHERE 1 = 1".to_string();
        let mut bind_values: Vec<Value> = Vec::new();

        if let Some(is_completed) = query.is_completed {
            sql.push_str(" AND is_completed = ?");
            bind_values.push(Value::Integer(bool_to_int(is_completed)));
        }

        let count: i64 = self
            .conn
            .query_row(&sql, params_from_iter(bind_values), |row| row.get(0))?;

        u64::try_from(count)
            .map_err(|_| RepoError::InvalidData(format!("negative row count `{count}` in todos")))
    }

    fn delete_todo(&self, id: TodoId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM todos WHERE id = ?1;", params![id])?;

        if changed == 0 {
            return Err(RepoError::TodoNotFound(id));
        }

        Ok(())
    }
}

fn parse_todo_row(row: &Row<'_>) -> RepoResult<TodoItem> {
    let is_completed = int_to_bool(row.get::<_, i64>("is_completed")?, "todos", "is_completed")?;

    let item = TodoItem {
        id: row.get("id")?,
        title: row.get("title")?,
        is_completed,
        due_date: row.get("due_date")?,
    };
    item.validate()?;
    Ok(item)
}
