//! Integration tests for the REST API
//!
//! Drive the router end-to-end through `tower::Service`:
//! - health and breakpoint lookup
//! - layout ordering, rows and span hints
//! - recap aggregation
//! - malformed timestamps

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use duo_api::create_router;
use serde_json::{json, Value};
use tower::Service;

/// Helper function to send a request using a router
async fn send_request_with_app(
    app: &mut Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let request_builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");

    let request = if let Some(body_json) = body {
        request_builder
            .body(Body::from(serde_json::to_string(&body_json).unwrap()))
            .unwrap()
    } else {
        request_builder.body(Body::empty()).unwrap()
    };

    let response = app.call(request).await.unwrap();
    let status = response.status();

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap_or(json!({}));

    if status.is_client_error() || status.is_server_error() {
        eprintln!("Request to {} failed with status {}: {}", uri, status, json);
    }

    (status, json)
}

/// Helper for stateless tests
async fn send_request(method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut app = create_router();
    send_request_with_app(&mut app, method, uri, body).await
}

fn sample_memories() -> Value {
    json!([
        {
            "id": "plan-later",
            "type": "future",
            "start_date": "2025-08-01T00:00:00Z",
            "created_at": "2025-01-01T00:00:00Z"
        },
        {
            "id": "plan-undated",
            "type": "Future",
            "created_at": "2024-01-01T00:00:00Z"
        },
        {
            "id": "plan-soon",
            "type": "future",
            "start_date": "2025-03-01T00:00:00Z",
            "created_at": "2025-01-01T00:00:00Z"
        },
        {
            "id": "beach",
            "type": "TRIP",
            "start_date": "2025-02-10T00:00:00Z",
            "end_date": "2025-02-13T00:00:00Z",
            "created_at": "2025-02-14T00:00:00Z",
            "photo_count": 18,
            "location": "Algarve",
            "song": "Sunny"
        },
        {
            "id": "concert",
            "type": "event",
            "created_at": "2024-12-01T00:00:00Z",
            "photo_count": 4,
            "location": "Algarve"
        },
        {
            "id": "coffee",
            "type": "simple",
            "created_at": "2025-02-12T00:00:00Z"
        },
        {
            "id": "mystery",
            "type": "polaroid",
            "created_at": "2023-05-01T00:00:00Z"
        }
    ])
}

#[tokio::test]
async fn test_health_check() {
    let (status, body) = send_request("GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "Duo Grid");
}

#[tokio::test]
async fn test_columns_lookup() {
    let cases = [(1920, 6), (1300, 5), (1024, 4), (800, 2), (375, 1), (-10, 1)];

    let mut app = create_router();
    for (width, columns) in cases {
        let uri = format!("/layout/columns?width={}", width);
        let (status, body) = send_request_with_app(&mut app, "GET", &uri, None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["width"], width);
        assert_eq!(body["columns"], columns);
    }
}

#[tokio::test]
async fn test_layout_orders_plans_then_scored() {
    let request = json!({
        "viewport_width": 1536,
        "now": "2025-02-14T12:00:00Z",
        "memories": sample_memories()
    });

    let (status, body) = send_request("POST", "/layout", Some(request)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["columns"], 6);

    let order: Vec<&str> = body["order"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();

    assert_eq!(
        order,
        vec!["plan-soon", "plan-later", "plan-undated", "beach", "coffee", "concert", "mystery"]
    );
}

#[tokio::test]
async fn test_layout_rows_carry_span_hints() {
    let request = json!({
        "viewport_width": 1536,
        "now": "2025-02-14T12:00:00Z",
        "memories": sample_memories()
    });

    let (status, body) = send_request("POST", "/layout", Some(request)).await;
    assert_eq!(status, StatusCode::OK);

    let rows = body["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["width"], 3);

    let first_scored = &rows[1]["items"][0];
    assert_eq!(first_scored["id"], "beach");
    assert_eq!(first_scored["kind"], "trip");
    assert_eq!(first_scored["span"]["cols"], 2);
    assert_eq!(first_scored["span"]["rows"], 2);

    for row in rows {
        let width = row["width"].as_u64().unwrap();
        assert!(width <= 6);
    }
}

#[tokio::test]
async fn test_layout_empty_memories() {
    let request = json!({
        "viewport_width": 0,
        "memories": []
    });

    let (status, body) = send_request("POST", "/layout", Some(request)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["columns"], 1);
    assert_eq!(body["order"], json!([]));
    assert_eq!(body["rows"], json!([]));
}

#[tokio::test]
async fn test_layout_rejects_bad_timestamp() {
    let request = json!({
        "viewport_width": 1024,
        "memories": [
            { "id": "x", "type": "simple", "created_at": "last tuesday" }
        ]
    });

    let (status, body) = send_request("POST", "/layout", Some(request)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("created_at"));
}

#[tokio::test]
async fn test_layout_rejects_bad_now() {
    let request = json!({
        "viewport_width": 1024,
        "now": "soon",
        "memories": []
    });

    let (status, _) = send_request("POST", "/layout", Some(request)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_recap() {
    let request = json!({
        "now": "2025-02-14T12:00:00Z",
        "top_locations": 3,
        "memories": sample_memories()
    });

    let (status, body) = send_request("POST", "/recap", Some(request)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_memories"], 7);
    assert_eq!(body["by_kind"]["future"], 3);
    assert_eq!(body["by_kind"]["simple"], 2);
    assert_eq!(body["total_photos"], 22);
    assert_eq!(body["top_locations"][0]["location"], "Algarve");
    assert_eq!(body["top_locations"][0]["count"], 2);
    assert_eq!(body["upcoming_futures"], 2);
    assert_eq!(body["next_future"], "plan-soon");
    assert_eq!(body["longest_trip_days"], 4);
}
