//! Project repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over canonical `projects` storage.
//! - Keep status encoding inside the persistence boundary.
//!
//! # Invariants
//! - Write paths call `Project::validate()` before SQL mutations.
//! - Updating or deleting a missing id reports `ProjectNotFound`.

use crate::model::project::{Project, ProjectId, ProjectStatus};
use crate::repo::{ensure_connection_ready, RepoError, RepoResult};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Row};
use uuid::Uuid;

const PROJECT_SELECT_SQL: &str = "SELECT
    project_id,
    project_name,
    address,
    client_info,
    status,
    start_date,
    estimated_end_date,
    actual_end_date
FROM projects";

const PROJECTS_TABLE: &str = "projects";
const PROJECTS_REQUIRED_COLUMNS: &[&str] = &[
    "project_id",
    "project_name",
    "address",
    "client_info",
    "status",
    "start_date",
    "updated_at",
];

/// Query options for listing projects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectListQuery {
    /// Optional lifecycle-status filter.
    pub status: Option<ProjectStatus>,
    /// Maximum rows to return. `None` returns all rows.
    pub limit: Option<u32>,
    /// Number of rows to skip.
    pub offset: u32,
}

/// Repository interface for project CRUD operations.
pub trait ProjectRepository {
    fn create_project(&self, project: &Project) -> RepoResult<ProjectId>;
    fn update_project(&self, project: &Project) -> RepoResult<()>;
    fn get_project(&self, id: ProjectId) -> RepoResult<Option<Project>>;
    fn exists_project(&self, id: ProjectId) -> RepoResult<bool>;
    fn list_projects(&self, query: &ProjectListQuery) -> RepoResult<Vec<Project>>;
    fn count_projects(&self, query: &ProjectListQuery) -> RepoResult<u64>;
    fn delete_project(&self, id: ProjectId) -> RepoResult<()>;
}

/// SQLite-backed project repository.
pub struct SqliteProjectRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteProjectRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, PROJECTS_TABLE, PROJECTS_REQUIRED_COLUMNS)?;
        Ok(Self { conn })
    }
}

impl ProjectRepository for SqliteProjectRepository<'_> {
    fn create_project(&self, project: &Project) -> RepoResult<ProjectId> {
        project.validate()?;

        self.conn.execute(
            "INSERT INTO projects (
                project_id,
                project_name,
                address,
                client_info,
                status,
                start_date,
                estimated_end_date,
                actual_end_date
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8);",
            params![
                project.project_id.to_string(),
                project.project_name.as_str(),
                project.address.as_str(),
                project.client_info.as_str(),
                project_status_to_db(project.status),
                project.start_date,
                project.estimated_end_date,
                project.actual_end_date,
            ],
        )?;

        Ok(project.project_id)
    }

    fn update_project(&self, project: &Project) -> RepoResult<()> {
        project.validate()?;

        let changed = self.conn.execute(
            "UPDATE projects
             SET
                project_name = ?1,
                address = ?2,
                client_info = ?3,
                status = ?4,
                start_date = ?5,
                estimated_end_date = ?6,
                actual_end_date = ?7,
                updated_at = (strftime('%s', 'now') * 1000)
             WHERE project_id = ?8;",
            params![
                project.project_name.as_str(),
                project.address.as_str(),
                project.client_info.as_str(),
                project_status_to_db(project.status),
                project.start_date,
                project.estimated_end_date,
                project.actual_end_date,
                project.project_id.to_string(),
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::ProjectNotFound(project.project_id));
        }

        Ok(())
    }

    fn get_project(&self, id: ProjectId) -> RepoResult<Option<Project>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PROJECT_SELECT_SQL} WHERE project_id = ?1;"))?;

        let mut rows = stmt.query(params![id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_project_row(row)?));
        }

        Ok(None)
    }

    fn exists_project(&self, id: ProjectId) -> RepoResult<bool> {
        let exists: i64 = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM projects WHERE project_id = ?1);",
            params![id.to_string()],
            |row| row.get(0),
        )?;
        Ok(exists == 1)
    }

    fn list_projects(&self, query: &ProjectListQuery) -> RepoResult<Vec<Project>> {
        let mut sql = format!("{PROJECT_SELECT_SQL} WHERE 1 = 1");
        let mut bind_values: Vec<Value> = Vec::new();

        if let Some(status) = query.status {
            sql.push_str(" AND status = ?");
            bind_values.push(Value::Text(project_status_to_db(status).to_string()));
        }

        sql.push_str(" ORDER BY created_at DESC, project_id ASC");

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
        let mut projects = Vec::new();

        while let Some(row) = rows.next()? {
            projects.push(parse_project_row(row)?);
        }

        Ok(projects)
    }

    fn count_projects(&self, query: &ProjectListQuery) -> RepoResult<u64> {
        let mut sql = "SELECT COUNT(*) FROM projects WHERE 1 = 1".to_string();
        let mut bind_values: Vec<Value> = Vec::new();

        if let Some(status) = query.status {
            sql.push_str(" AND status = ?");
            bind_values.push(Value::Text(project_status_to_db(status).to_string()));
        }

        let count: i64 = self
            .conn
            .query_row(&sql, params_from_iter(bind_values), |row| row.get(0))?;

        u64::try_from(count).map_err(|_| {
            RepoError::InvalidData(format!("negative row count `{count}` in projects"))
        })
    }

    fn delete_project(&self, id: ProjectId) -> RepoResult<()> {
        let changed = self.conn.execute(
            "DELETE FROM projects WHERE project_id = ?1;",
            params![id.to_string()],
        )?;

        if changed == 0 {
            return Err(RepoError::ProjectNotFound(id));
        }

        Ok(())
    }
}

fn parse_project_row(row: &Row<'_>) -> RepoResult<Project> {
    let id_text: String = row.get("project_id")?;
    let project_id = Uuid::parse_str(&id_text).map_err(|_| {
        RepoError::InvalidData(format!(
            "invalid uuid value `{id_text}` in projects.project_id"
        ))
    })?;

    let status_text: String = row.get("status")?;
    let status = parse_project_status(&status_text).ok_or_else(|| {
        RepoError::InvalidData(format!(
            "invalid project status `{status_text}` in projects.status"
        ))
    })?;

    let project = Project {
        project_id,
        project_name: row.get("project_name")?,
        address: row.get("address")?,
        client_info: row.get("client_info")?,
        status,
        start_date: row.get("start_date")?,
        estimated_end_date: row.get("estimated_end_date")?,
        actual_end_date: row.get("actual_end_date")?,
    };
    project.validate()?;
    Ok(project)
}

fn project_status_to_db(status: ProjectStatus) -> &'static str {
    match status {
        ProjectStatus::Planning => "planning",
        ProjectStatus::InProgress => "in_progress",
        ProjectStatus::Completed => "completed",
        ProjectStatus::OnHold => "on_hold",
    }
}

fn parse_project_status(value: &str) -> Option<ProjectStatus> {
    match value {
        "planning" => Some(ProjectStatus::Planning),
        "in_progress" => Some(ProjectStatus::InProgress),
        "completed" => Some(ProjectStatus::Completed),
        "on_hold" => Some(ProjectStatus::OnHold),
        _ => None,
    }
}
