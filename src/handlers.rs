use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::solver::{SolveParams, Solver, parse_letters, parse_main_letter};

#[derive(Clone)]
pub struct AppState {
    pub solver: Arc<Solver>,
    pub max_page_size: usize,
}

#[derive(Deserialize)]
pub struct SolveQuery {
    pub letters: String,
    pub main: String,
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

#[derive(Serialize)]
pub struct SolveResponse {
    letters: String,
    main: char,
    page: usize,
    page_size: usize,
    total: usize,
    has_more: bool,
    items: Vec<String>,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/v1/solve", get(solve))
        .with_state(state)
}

async fn healthz() -> impl IntoResponse {
    "ok"
}

async fn solve(
    State(state): State<AppState>,
    Query(params): Query<SolveQuery>,
) -> Result<Json<SolveResponse>, ApiError> {
    let letters = parse_letters(&params.letters).map_err(|e| ApiError::bad_request(e.to_string()))?;
    let main_letter =
        parse_main_letter(&params.main).map_err(|e| ApiError::bad_request(e.to_string()))?;

    let page = params.page.unwrap_or(1);
    if page == 0 {
        return Err(ApiError::bad_request("page must be >= 1"));
    }
    let mut page_size = params.page_size.unwrap_or(50);
    if page_size == 0 {
        return Err(ApiError::bad_request("page_size must be >= 1"));
    }
    if page_size > state.max_page_size {
        page_size = state.max_page_size;
    }

    let result = state.solver.solve(SolveParams {
        letters: &letters,
        main_letter,
        page,
        page_size,
    });

    Ok(Json(SolveResponse {
        letters: letters.into_iter().collect(),
        main: main_letter,
        page,
        page_size,
        total: result.total,
        has_more: result.has_more,
        items: result.items,
    }))
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
}

impl ApiError {
    fn bad_request<T: Into<String>>(msg: T) -> Self {
        ApiError::BadRequest(msg.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(msg) => {
                let body = Json(ErrorResponse { error: msg });
                (StatusCode::BAD_REQUEST, body).into_response()
            }
        }
    }
}
