use uuid::Uuid;
use worksite_core::db::open_db_in_memory;
use worksite_core::{
    CreateProjectRequest, ProjectListQuery, ProjectRepository, ProjectService, ProjectStatus,
    RepoError, SqliteProjectRepository, UpdateProjectRequest,
};

fn create_request(name: &str) -> CreateProjectRequest {
    CreateProjectRequest {
        project_name: name.to_string(),
        address: "12 Substation Road".to_string(),
        client_info: "site contact: J. Doe".to_string(),
        start_date: 1_700_000_000_000,
        estimated_end_date: Some(1_710_000_000_000),
    }
}

#[test]
fn create_and_get_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let service = ProjectService::new(SqliteProjectRepository::try_new(&conn).unwrap());

    let id = service.create_project(&create_request("Rooftop array")).unwrap();

    let loaded = service.get_project(id).unwrap().unwrap();
    assert_eq!(loaded.project_id, id);
    assert_eq!(loaded.project_name, "Rooftop array");
    assert_eq!(loaded.address, "12 Substation Road");
    assert_eq!(loaded.status, ProjectStatus::Planning);
    assert_eq!(loaded.estimated_end_date, Some(1_710_000_000_000));
    assert_eq!(loaded.actual_end_date, None);
}

#[test]
fn update_replaces_payload_for_existing_project() {
    let conn = open_db_in_memory().unwrap();
    let service = ProjectService::new(SqliteProjectRepository::try_new(&conn).unwrap());

    let id = service.create_project(&create_request("Depot retrofit")).unwrap();

    service
        .update_project(
            id,
            &UpdateProjectRequest {
                project_name: "Depot retrofit phase 2".to_string(),
                address: "14 Substation Road".to_string(),
                client_info: "site contact: A. Chen".to_string(),
                status: ProjectStatus::InProgress,
                start_date: 1_700_000_000_000,
                estimated_end_date: Some(1_720_000_000_000),
                actual_end_date: None,
            },
        )
        .unwrap();

    let updated = service.get_project(id).unwrap().unwrap();
    assert_eq!(updated.project_name, "Depot retrofit phase 2");
    assert_eq!(updated.address, "14 Substation Road");
    assert_eq!(updated.status, ProjectStatus::InProgress);
    assert_eq!(updated.estimated_end_date, Some(1_720_000_000_000));
}

#[test]
fn update_of_missing_project_fails_with_not_found() {
    let conn = open_db_in_memory().unwrap();
    let service = ProjectService::new(SqliteProjectRepository::try_new(&conn).unwrap());

    let ghost = Uuid::new_v4();
    let err = service
        .update_project(
            ghost,
            &UpdateProjectRequest {
                project_name: "Nowhere".to_string(),
                address: "1 Missing Lane".to_string(),
                client_info: String::new(),
                status: ProjectStatus::Planning,
                start_date: 1_700_000_000_000,
                estimated_end_date: None,
                actual_end_date: None,
            },
        )
        .unwrap_err();

    assert!(matches!(err, RepoError::ProjectNotFound(id) if id == ghost));
}

#[test]
fn validation_failure_blocks_create_and_update() {
    let conn = open_db_in_memory().unwrap();
    let service = ProjectService::new(SqliteProjectRepository::try_new(&conn).unwrap());

    let mut short_name = create_request("ok name");
    short_name.project_name = "ab".to_string();
    let create_err = service.create_project(&short_name).unwrap_err();
    assert!(matches!(create_err, RepoError::ProjectValidation(_)));

    let mut reversed_dates = create_request("Reversed window");
    reversed_dates.estimated_end_date = Some(reversed_dates.start_date - 1);
    let date_err = service.create_project(&reversed_dates).unwrap_err();
    assert!(matches!(date_err, RepoError::ProjectValidation(_)));

    let id = service.create_project(&create_request("Valid project")).unwrap();
    let update_err = service
        .update_project(
            id,
            &UpdateProjectRequest {
                project_name: "Valid project".to_string(),
                address: "x".to_string(),
                client_info: String::new(),
                status: ProjectStatus::Planning,
                start_date: 1_700_000_000_000,
                estimated_end_date: None,
                actual_end_date: None,
            },
        )
        .unwrap_err();
    assert!(matches!(update_err, RepoError::ProjectValidation(_)));
}

#[test]
fn list_filters_by_status() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteProjectRepository::try_new(&conn).unwrap();
    let service = ProjectService::new(SqliteProjectRepository::try_new(&conn).unwrap());

    let first = service.create_project(&create_request("First site")).unwrap();
    let second = service.create_project(&create_request("Second site")).unwrap();

    let mut started = repo.get_project(second).unwrap().unwrap();
    started.status = ProjectStatus::InProgress;
    repo.update_project(&started).unwrap();

    let planning = service
        .list_projects(&ProjectListQuery {
            status: Some(ProjectStatus::Planning),
            ..ProjectListQuery::default()
        })
        .unwrap();
    assert_eq!(planning.len(), 1);
    assert_eq!(planning[0].project_id, first);

    let page = service
        .list_projects_page(&ProjectListQuery::default())
        .unwrap();
    assert_eq!(page.total_count, 2);
}

#[test]
fn delete_removes_project_and_missing_delete_fails() {
    let conn = open_db_in_memory().unwrap();
    let service = ProjectService::new(SqliteProjectRepository::try_new(&conn).unwrap());

    let id = service.create_project(&create_request("Ephemeral")).unwrap();
    service.delete_project(id).unwrap();
    assert_eq!(service.get_project(id).unwrap(), None);

    let err = service.delete_project(id).unwrap_err();
    assert!(matches!(err, RepoError::ProjectNotFound(missing) if missing == id));
}
