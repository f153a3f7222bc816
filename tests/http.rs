use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use tower::util::ServiceExt;

use diccionari::handlers::{AppState, router};
use diccionari::{BuildOptions, Solver, build_dictionary};

fn make_state() -> AppState {
    let text = "■\ncar\t-a\n■\ncaragol\n■\nrac\n■\narc\n■\nraca\n";
    let (dictionary, _) = build_dictionary(text, &BuildOptions::default());
    AppState {
        solver: Solver::new(dictionary),
        max_page_size: 500,
    }
}

async fn get_json(uri: &str) -> (StatusCode, serde_json::Value) {
    let app = router(make_state());
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body_bytes = to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
    let body = serde_json::from_slice(&body_bytes).unwrap_or(serde_json::Value::Null);
    (status, body)
}

#[tokio::test]
async fn healthz_ok() {
    let app = router(make_state());
    let response = app
        .oneshot(
            Request::builder()
                .uri("/healthz")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn solve_endpoint_returns_results() {
    let (status, body) = get_json("/v1/solve?letters=acr&main=r").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["main"], "r");
    assert_eq!(body["letters"], "acr");
    let items: Vec<&str> = body["items"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|v| v.as_str())
        .collect();
    assert_eq!(items, vec!["arc", "car", "cara", "rac", "raca"]);
    assert_eq!(body["total"], 5);
}

#[tokio::test]
async fn solve_endpoint_paginates() {
    let (status, body) = get_json("/v1/solve?letters=acr&main=r&page=2&page_size=2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["items"].as_array().unwrap().len(), 2);
    assert_eq!(body["has_more"], true);
}

#[tokio::test]
async fn solve_endpoint_rejects_invalid_page() {
    let (status, body) = get_json("/v1/solve?letters=acr&main=r&page=0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(
        body["error"]
            .as_str()
            .unwrap_or_default()
            .contains("page")
    );
}

#[tokio::test]
async fn solve_endpoint_rejects_invalid_letters() {
    let (status, body) = get_json("/v1/solve?letters=a1c&main=a").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(
        body["error"]
            .as_str()
            .unwrap_or_default()
            .contains("invalid character")
    );
}

#[tokio::test]
async fn solve_endpoint_rejects_long_main_letter() {
    let (status, body) = get_json("/v1/solve?letters=acr&main=ar").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(
        body["error"]
            .as_str()
            .unwrap_or_default()
            .contains("main letter")
    );
}
