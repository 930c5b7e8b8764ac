use std::collections::BTreeMap;
use worksite_core::response::pagination::paginated;
use worksite_core::{ApiResponse, TodoItem};

#[test]
fn success_envelope_carries_data_and_default_message() {
    let item = TodoItem {
        id: 1,
        title: "inspect cabling".to_string(),
        is_completed: false,
        due_date: None,
    };

    let json = serde_json::to_value(ApiResponse::success(item, None)).unwrap();
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Operation completed successfully");
    assert_eq!(json["data"]["title"], "inspect cabling");
    assert!(json.get("statusCode").is_none());
    assert!(json.get("errors").is_none());
}

#[test]
fn success_no_content_omits_data() {
    let json =
        serde_json::to_value(ApiResponse::<()>::success_no_content(Some("Todo updated"))).unwrap();
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Todo updated");
    assert!(json.get("data").is_none());
}

#[test]
fn error_envelope_keeps_message_and_status_code() {
    let json =
        serde_json::to_value(ApiResponse::<()>::error("Database unavailable", Some(500))).unwrap();
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Database unavailable");
    assert_eq!(json["statusCode"], 500);
}

#[test]
fn not_found_envelope_echoes_identifier() {
    let json = serde_json::to_value(ApiResponse::<()>::not_found("Todo", Some("5"))).unwrap();
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Todo with identifier '5' was not found");
    assert_eq!(json["statusCode"], 404);

    let anonymous = serde_json::to_value(ApiResponse::<()>::not_found("Project", None)).unwrap();
    assert_eq!(anonymous["message"], "Project was not found");
}

#[test]
fn validation_envelope_joins_multiple_errors() {
    let single = ApiResponse::<()>::validation_error(&["Title is required".to_string()]);
    assert_eq!(single.message, "Title is required");

    let multiple = ApiResponse::<()>::validation_error(&[
        "Title is required".to_string(),
        "Due date is invalid".to_string(),
    ]);
    assert_eq!(
        multiple.message,
        "Validation failed: Title is required; Due date is invalid"
    );

    let json = serde_json::to_value(multiple).unwrap();
    assert_eq!(json["statusCode"], 400);
    assert_eq!(json["errors"].as_array().unwrap().len(), 2);
}

#[test]
fn unauthorized_and_forbidden_envelopes_use_default_messages() {
    let unauthorized = serde_json::to_value(ApiResponse::<()>::unauthorized(None)).unwrap();
    assert_eq!(unauthorized["statusCode"], 401);
    assert_eq!(
        unauthorized["message"],
        "Unauthorized access. Please ensure you are authenticated."
    );

    let forbidden = serde_json::to_value(ApiResponse::<()>::forbidden(Some("Managers only"))).unwrap();
    assert_eq!(forbidden["statusCode"], 403);
    assert_eq!(forbidden["message"], "Managers only");
}

#[test]
fn paginated_envelope_uses_camel_case_paging_fields() {
    let items = vec![
        TodoItem {
            id: 1,
            title: "one".to_string(),
            is_completed: false,
            due_date: None,
        },
        TodoItem {
            id: 2,
            title: "two".to_string(),
            is_completed: true,
            due_date: None,
        },
    ];

    let response = paginated(
        items,
        23,
        2,
        Some(10),
        "/api/todos",
        &BTreeMap::new(),
        None,
    );
    let json = serde_json::to_value(response).unwrap();

    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Data retrieved successfully");

    let data = &json["data"];
    assert_eq!(data["items"].as_array().unwrap().len(), 2);
    assert_eq!(data["totalCount"], 23);
    assert_eq!(data["pageNumber"], 2);
    assert_eq!(data["pageSize"], 10);
    assert_eq!(data["totalPages"], 3);

    let links = &data["links"];
    assert_eq!(links["first"], "/api/todos?page=1&pageSize=10");
    assert_eq!(links["previous"], "/api/todos?page=1&pageSize=10");
    assert_eq!(links["current"], "/api/todos?page=2&pageSize=10");
    assert_eq!(links["next"], "/api/todos?page=3&pageSize=10");
    assert_eq!(links["last"], "/api/todos?page=3&pageSize=10");
}

#[test]
fn paginated_envelope_preserves_filter_query_params() {
    let mut params = BTreeMap::new();
    params.insert("isCompleted".to_string(), "false".to_string());

    let response = paginated(
        Vec::<TodoItem>::new(),
        0,
        1,
        None,
        "/api/todos",
        &params,
        Some("No matching todos"),
    );
    let json = serde_json::to_value(response).unwrap();

    assert_eq!(json["message"], "No matching todos");
    let data = &json["data"];
    assert_eq!(data["totalPages"], 0);
    assert_eq!(
        data["links"]["current"],
        "/api/todos?page=1&pageSize=10&isCompleted=false"
    );
    assert!(data["links"].get("next").is_none());
    assert!(data["links"].get("last").is_none());
}
