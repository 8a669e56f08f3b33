use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use engine::Engine;
use server::types::{forecast::Forecast, summary::Summary};

fn app() -> Router {
    server::router(Engine::builder().build())
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn household() -> Value {
    json!({
        "income": 3000,
        "rent": 1200,
        "food": 500,
        "transport": 200,
        "entertainment": 100
    })
}

#[tokio::test]
async fn health_is_ok() {
    let response = app().oneshot(get("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"status": "ok"}));
}

#[tokio::test]
async fn upload_then_summary() {
    let app = app();

    let response = app
        .clone()
        .oneshot(post_json("/upload", household().to_string()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        body_json(response).await["message"],
        "Expenses uploaded successfully"
    );

    let response = app.oneshot(get("/summary")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let summary: Summary = serde_json::from_value(body_json(response).await).unwrap();
    assert_eq!(
        summary,
        Summary {
            income: 3000.0,
            total_expenses: 2000.0,
            savings: 1000.0,
            savings_rate: 33.33,
            largest_expense: "rent".to_string(),
        }
    );
}

#[tokio::test]
async fn upload_then_forecast() {
    let app = app();

    let response = app
        .clone()
        .oneshot(post_json("/upload", household().to_string()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app.oneshot(get("/forecast")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["inflation_forecast"]["2026"], 2060.0);
    assert_eq!(json["inflation_forecast"]["2027"], 2121.8);

    let forecast: Forecast = serde_json::from_value(json).unwrap();
    let years: Vec<i32> = forecast.inflation_forecast.keys().copied().collect();
    assert_eq!(years, vec![2026, 2027, 2028, 2029, 2030]);
    let values: Vec<f64> = forecast.inflation_forecast.values().copied().collect();
    assert!(values.windows(2).all(|pair| pair[0] < pair[1]));
}

#[tokio::test]
async fn summary_uses_latest_upload() {
    let app = app();

    for body in [household(), json!({"income": 1000, "rent": 1500})] {
        let response = app
            .clone()
            .oneshot(post_json("/upload", body.to_string()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let json = body_json(app.oneshot(get("/summary")).await.unwrap()).await;
    assert_eq!(json["income"], 1000.0);
    assert_eq!(json["savings"], -500.0);
    assert_eq!(json["savings_rate"], -50.0);
    assert_eq!(json["largest_expense"], "rent");
}

#[tokio::test]
async fn empty_store_is_client_error() {
    let app = app();

    for uri in ["/summary", "/forecast"] {
        let response = app.clone().oneshot(get(uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], "No data uploaded");
    }
}

#[tokio::test]
async fn upload_without_income_is_rejected() {
    let app = app();

    let response = app
        .clone()
        .oneshot(post_json("/upload", json!({"rent": 1200}).to_string()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error = body_json(response).await["error"].as_str().unwrap().to_string();
    assert!(error.starts_with("Invalid input"));

    let response = app.oneshot(get("/summary")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn malformed_bodies_are_rejected() {
    let bodies = [
        "{not json",
        "[1, 2, 3]",
        r#"{"income": "lots"}"#,
        r#"{"income": 3000, "rent": -5}"#,
    ];

    for body in bodies {
        let response = app().oneshot(post_json("/upload", body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {body}");
        assert!(body_json(response).await["error"].is_string());
    }
}

#[tokio::test]
async fn upload_without_json_content_type_is_rejected() {
    let request = Request::builder()
        .method("POST")
        .uri("/upload")
        .body(Body::from(household().to_string()))
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn income_only_upload_reports_sentinel() {
    let app = app();

    let response = app
        .clone()
        .oneshot(post_json("/upload", json!({"income": 0}).to_string()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(app.oneshot(get("/summary")).await.unwrap()).await;
    assert_eq!(json["largest_expense"], "none");
    assert_eq!(json["savings_rate"], 0.0);
    assert_eq!(json["total_expenses"], 0.0);
}

#[tokio::test]
async fn upload_too_large_to_forecast_is_rejected() {
    let app = app();

    let body = json!({"income": 80_000_000_000_000_000_i64, "rent": 80_000_000_000_000_000_i64});
    let response = app
        .clone()
        .oneshot(post_json("/upload", body.to_string()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error = body_json(response).await["error"].as_str().unwrap().to_string();
    assert!(error.starts_with("Invalid input"));

    let response = app.oneshot(get("/forecast")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "No data uploaded");
}
