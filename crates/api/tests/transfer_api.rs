//! HTTP-level integration tests for the export and import endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json};
use sqlx::SqlitePool;

/// Creates a list with two tasks over HTTP and returns the list id.
async fn populate_list(pool: &SqlitePool, title: &str) -> i64 {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/lists",
        serde_json::json!({"title": title, "description": "Exported"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let list_id = body_json(response).await["id"].as_i64().unwrap();

    for task_title in ["First task", "Second task"] {
        let app = common::build_test_app(pool.clone());
        let response = post_json(
            app,
            "/api/tasks",
            serde_json::json!({
                "title": task_title,
                "due_date": "2026-10-01",
                "list_id": list_id,
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    list_id
}

// ---------------------------------------------------------------------------
// Export
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn test_export_empty_store_returns_empty_array(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/export").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json, serde_json::json!([]));
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_export_nests_tasks_under_their_list(pool: SqlitePool) {
    let list_id = populate_list(&pool, "Nested").await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/export").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let lists = json.as_array().unwrap();
    assert_eq!(lists.len(), 1);
    assert_eq!(lists[0]["id"], list_id);
    assert_eq!(lists[0]["title"], "Nested");

    let tasks = lists[0]["tasks"].as_array().unwrap();
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0]["title"], "First task");
    assert_eq!(tasks[0]["status"], false);
    assert_eq!(tasks[0]["due_date"], "2026-10-01");
    // Task rows in the snapshot do not repeat the list id; nesting carries it.
    assert!(tasks[0].get("list_id").is_none());
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_export_includes_lists_without_tasks(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        "/api/lists",
        serde_json::json!({"title": "Bare", "description": "No tasks"}),
    )
    .await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/export").await).await;

    let lists = json.as_array().unwrap();
    assert_eq!(lists.len(), 1);
    assert_eq!(lists[0]["tasks"], serde_json::json!([]));
}

// ---------------------------------------------------------------------------
// Import
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn test_import_reports_inserted_counts(pool: SqlitePool) {
    let payload = serde_json::json!([
        {
            "id": 1,
            "title": "Restored",
            "description": "From a snapshot",
            "created_date": "2026-01-05",
            "tasks": [
                {
                    "id": 1,
                    "title": "Carried over",
                    "status": true,
                    "due_date": "2026-01-10",
                    "created_date": "2026-01-05"
                },
                {
                    "id": 2,
                    "title": "Still open",
                    "status": false,
                    "due_date": "2026-01-12",
                    "created_date": "2026-01-05"
                }
            ]
        },
        {
            "id": 2,
            "title": "Empty restored",
            "description": "Nothing inside",
            "created_date": "2026-01-06",
            "tasks": []
        }
    ]);

    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/import", payload).await;
    assert_eq!(response.status(), StatusCode::OK);

    let counts = body_json(response).await;
    assert_eq!(counts["lists_inserted"], 2);
    assert_eq!(counts["tasks_inserted"], 2);

    // Imported rows keep the ids and dates from the payload.
    let app = common::build_test_app(pool.clone());
    let list = body_json(get(app, "/api/lists/1").await).await;
    assert_eq!(list["title"], "Restored");
    assert_eq!(list["created_date"], "2026-01-05");

    // A completed task stays completed after restore.
    let app = common::build_test_app(pool);
    let task = body_json(get(app, "/api/tasks/1").await).await;
    assert_eq!(task["status"], true);
    assert_eq!(task["due_date"], "2026-01-10");
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_reimport_of_export_inserts_nothing(pool: SqlitePool) {
    populate_list(&pool, "Stable").await;

    let app = common::build_test_app(pool.clone());
    let snapshot = body_json(get(app, "/api/export").await).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/import", snapshot).await;
    assert_eq!(response.status(), StatusCode::OK);

    let counts = body_json(response).await;
    assert_eq!(counts["lists_inserted"], 0);
    assert_eq!(counts["tasks_inserted"], 0);

    // No duplicates appeared.
    let app = common::build_test_app(pool);
    let lists = body_json(get(app, "/api/lists").await).await;
    assert_eq!(lists.as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_export_import_round_trip(pool: SqlitePool) {
    let list_id = populate_list(&pool, "Round trip").await;

    let app = common::build_test_app(pool.clone());
    let original = body_json(get(app, "/api/export").await).await;

    // Wipe the store; deleting the list cascades to its tasks.
    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/lists/{list_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool.clone());
    let emptied = body_json(get(app, "/api/export").await).await;
    assert_eq!(emptied, serde_json::json!([]));

    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/import", original.clone()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let restored = body_json(get(app, "/api/export").await).await;
    assert_eq!(restored, original);
}

// ---------------------------------------------------------------------------
// Import rejection
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn test_import_rejects_non_array_payloads(pool: SqlitePool) {
    for payload in [
        serde_json::json!({"lists": []}),
        serde_json::json!("not a snapshot"),
        serde_json::json!(42),
        serde_json::json!(null),
    ] {
        let app = common::build_test_app(pool.clone());
        let response = post_json(app, "/api/import", payload.clone()).await;
        assert_eq!(
            response.status(),
            StatusCode::BAD_REQUEST,
            "Payload should be rejected: {payload}"
        );

        let json = body_json(response).await;
        assert_eq!(json["code"], "VALIDATION_ERROR");
    }
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_import_rejects_malformed_entry_without_writing(pool: SqlitePool) {
    // The second entry is missing required fields; the whole payload is
    // rejected and the first entry must not land either.
    let payload = serde_json::json!([
        {
            "id": 1,
            "title": "Fine",
            "description": "Valid entry",
            "created_date": "2026-01-05",
            "tasks": []
        },
        {"title": "No id or dates"}
    ]);

    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/import", payload).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");

    let app = common::build_test_app(pool);
    let lists = body_json(get(app, "/api/lists").await).await;
    assert_eq!(lists.as_array().unwrap().len(), 0);
}
