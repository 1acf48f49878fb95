//! HTTP contract of the fake backend, driven through `oneshot`

use axum::Router;
use axum::body::Body;
use http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use queue_mock::{Seed, test_router};
use serde_json::{Value, json};
use shared::models::SeatStatus;
use tower::ServiceExt;

async fn call(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

#[tokio::test]
async fn test_root_and_health() {
    let app = test_router(Seed::demo());

    let (status, body) = call(&app, Method::GET, "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["mode"], "Memory Mock");

    let (status, body) = call(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_list_restaurants() {
    let app = test_router(Seed::demo());
    let (status, body) = call(&app, Method::GET, "/api/restaurants", None).await;

    assert_eq!(status, StatusCode::OK);
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(items[0]["restaurant_id"], 1);
    assert_eq!(items[0]["status"], "green");
    assert_eq!(items[0]["average_price"], "150-300");
}

#[tokio::test]
async fn test_join_and_leave() {
    let app = test_router(Seed::demo());

    let (status, body) = call(
        &app,
        Method::POST,
        "/api/restaurants/1/queue",
        Some(json!({ "user_id": 42 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["ticket_number"], 1);
    assert_eq!(body["people_ahead"], 0);

    let (status, body) = call(&app, Method::GET, "/api/user/42/queue", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["restaurant_name"], "麥克小姐");

    let (status, body) = call(
        &app,
        Method::DELETE,
        "/api/restaurants/1/queue",
        Some(json!({ "user_id": 42 })),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, body) = call(&app, Method::GET, "/api/user/42/queue", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "NOT_IN_QUEUE");
}

#[tokio::test]
async fn test_join_twice_is_conflict() {
    let app = test_router(Seed::demo());
    let join = || Some(json!({ "user_id": 7 }));

    call(&app, Method::POST, "/api/restaurants/1/queue", join()).await;
    let (status, body) = call(&app, Method::POST, "/api/restaurants/2/queue", join()).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["code"], "QUEUE_ALREADY_JOINED");
    assert_eq!(body["error"]["message"], "You are already in the queue.");
}

#[tokio::test]
async fn test_leave_without_ticket() {
    let app = test_router(Seed::demo());
    let (status, body) = call(
        &app,
        Method::DELETE,
        "/api/restaurants/1/queue",
        Some(json!({ "user_id": 99 })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "NOT_IN_QUEUE");
}

#[tokio::test]
async fn test_malformed_body_is_invalid_request() {
    let app = test_router(Seed::demo());
    let (status, body) = call(
        &app,
        Method::POST,
        "/api/restaurants/1/queue",
        Some(json!({ "user": "nobody" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_REQUEST");
}

#[tokio::test]
async fn test_queue_status_and_next() {
    let seed = Seed::empty()
        .restaurant(1, "One")
        .waiting(1, 10, 4)
        .waiting(1, 11, 6);
    let app = test_router(seed);

    let (status, body) = call(&app, Method::GET, "/api/restaurants/1/queue/status", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_waiting"], 2);
    // 2 parties * 15 minutes / 4 tables
    assert_eq!(body["avg_wait_time"], 7);

    let (_, body) = call(&app, Method::GET, "/api/restaurants/1/queue/next", None).await;
    assert_eq!(body["next_queue_to_call"], 4);
    assert_eq!(body["current_number"], 0);

    let (status, body) = call(&app, Method::GET, "/api/restaurants/9/queue/status", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "RESTAURANT_NOT_FOUND");
}

#[tokio::test]
async fn test_seat_then_layout_reflects_it() {
    let seed = Seed::empty()
        .restaurant(1, "One")
        .table(1, 3, "3 桌", (3, 1), SeatStatus::Empty)
        .waiting(1, 42, 7);
    let app = test_router(seed);

    let (status, body) = call(
        &app,
        Method::POST,
        "/api/restaurants/1/tables/3",
        Some(json!({ "action": "eating", "queue_ticket_number": 7 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["table_id"], 3);
    assert_eq!(body["new_status"], "eating");
    assert!(body["updated_at"].is_string());

    let (status, body) = call(&app, Method::GET, "/api/restaurants/1/table", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["restaurant_name"], "One");
    assert_eq!(body["seats"][0]["status"], "eating");

    let (_, body) = call(&app, Method::GET, "/api/restaurants/1/queue/next", None).await;
    assert_eq!(body["current_number"], 7);
    assert_eq!(body["total_waiting"], 0);
}

#[tokio::test]
async fn test_seat_walk_in_without_ticket_field() {
    let app = test_router(Seed::demo());
    let (status, body) = call(
        &app,
        Method::POST,
        "/api/restaurants/1/tables/2",
        Some(json!({ "action": "eating" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["new_status"], "eating");
}

#[tokio::test]
async fn test_legacy_table_path() {
    let app = test_router(Seed::demo());
    let (status, body) = call(
        &app,
        Method::POST,
        "/api/restaurant/1/tables/2",
        Some(json!({ "action": "empty" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "TABLE_INVALID_ACTION");
}

#[tokio::test]
async fn test_table_errors() {
    let app = test_router(Seed::demo());

    let (status, body) = call(
        &app,
        Method::POST,
        "/api/restaurants/1/tables/201",
        Some(json!({ "action": "eating", "queue_ticket_number": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "TABLE_NOT_FOUND");

    let (status, body) = call(
        &app,
        Method::POST,
        "/api/restaurants/1/tables/2",
        Some(json!({ "action": "eating", "queue_ticket_number": 99 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "NOT_IN_QUEUE");
}

#[tokio::test]
async fn test_seats_of_unknown_restaurant() {
    let app = test_router(Seed::demo());
    let (status, body) = call(&app, Method::GET, "/api/restaurants/404/table", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "RESTAURANT_NOT_FOUND");
}
