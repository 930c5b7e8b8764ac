//! Project use-case service.
//!
//! # Responsibility
//! - Provide request-model CRUD entry points for project callers.
//! - Merge update requests onto stored records after an existence check.
//!
//! # Invariants
//! - Create/update requests are validated through `Project::validate()`
//!   before any persistence write.
//! - Updates on missing identifiers are always explicit failures.

use crate::model::project::{Project, ProjectId, ProjectStatus};
use crate::repo::project_repo::{ProjectListQuery, ProjectRepository};
use crate::repo::{RepoError, RepoResult};

/// Creation request for a project. The model assigns the identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateProjectRequest {
    pub project_name: String,
    pub address: String,
    pub client_info: String,
    /// Unix epoch milliseconds.
    pub start_date: i64,
    pub estimated_end_date: Option<i64>,
}

/// Full replacement payload for an existing project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateProjectRequest {
    pub project_name: String,
    pub address: String,
    pub client_info: String,
    pub status: ProjectStatus,
    pub start_date: i64,
    pub estimated_end_date: Option<i64>,
    pub actual_end_date: Option<i64>,
}

/// One page of projects plus the unpaginated total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPage {
    pub items: Vec<Project>,
    pub total_count: u64,
}

/// Use-case service wrapper for project CRUD operations.
pub struct ProjectService<R: ProjectRepository> {
    repo: R,
}

impl<R: ProjectRepository> ProjectService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a planning-stage project and returns its stable id.
    pub fn create_project(&self, request: &CreateProjectRequest) -> RepoResult<ProjectId> {
        let mut project = Project::new(
            request.project_name.clone(),
            request.address.clone(),
            request.start_date,
        );
        project.client_info.clone_from(&request.client_info);
        project.estimated_end_date = request.estimated_end_date;

        self.repo.create_project(&project)
    }

    /// Replaces an existing project's payload by stable id.
    ///
    /// Fails with `ProjectNotFound` when the id is unknown; the request is
    /// never partially applied.
    pub fn update_project(
        &self,
        id: ProjectId,
        request: &UpdateProjectRequest,
    ) -> RepoResult<()> {
        let Some(mut project) = self.repo.get_project(id)? else {
            return Err(RepoError::ProjectNotFound(id));
        };

        project.project_name.clone_from(&request.project_name);
        project.address.clone_from(&request.address);
        project.client_info.clone_from(&request.client_info);
        project.status = request.status;
        project.start_date = request.start_date;
        project.estimated_end_date = request.estimated_end_date;
        project.actual_end_date = request.actual_end_date;

        self.repo.update_project(&project)
    }

    /// Gets one project by id.
    pub fn get_project(&self, id: ProjectId) -> RepoResult<Option<Project>> {
        self.repo.get_project(id)
    }

    /// Lists projects using filter and pagination options.
    pub fn list_projects(&self, query: &ProjectListQuery) -> RepoResult<Vec<Project>> {
        self.repo.list_projects(query)
    }

    /// Lists one page of projects along with the filter's total row count.
    pub fn list_projects_page(&self, query: &ProjectListQuery) -> RepoResult<ProjectPage> {
        let items = self.repo.list_projects(query)?;
        let total_count = self.repo.count_projects(query)?;
        Ok(ProjectPage { items, total_count })
    }

    /// Deletes a project by id.
    pub fn delete_project(&self, id: ProjectId) -> RepoResult<()> {
        self.repo.delete_project(id)
    }
}
