//! HTTP route handlers.

use askama::Template;
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::domain::{ConnectorType, StationId};
use crate::gateway::{EXPORT_FILE_NAME, StationApi};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router<A: StationApi>(state: AppState<A>, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(index_page::<A>))
        .route("/health", get(health))
        .route("/stations/reload", get(reload_stations::<A>))
        .route("/stations/:id", get(show_station::<A>))
        .route("/search", get(search::<A>))
        .route("/nearby", get(nearby::<A>))
        .route("/locate", get(locate::<A>))
        .route("/filter", get(filter::<A>))
        .route("/detail/close", get(close_detail::<A>))
        .route("/export", get(export::<A>))
        .route("/api/connector-types", get(connector_types::<A>))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// The map page, with any alerts raised since the last render.
async fn index_page<A: StationApi>(State(state): State<AppState<A>>) -> Html<String> {
    Html(
        state
            .controller
            .render_page()
            .await
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
}

fn back_to_page() -> Redirect {
    Redirect::to("/")
}

/// "Refresh": reload every station.
async fn reload_stations<A: StationApi>(State(state): State<AppState<A>>) -> Redirect {
    state.controller.load_all().await;
    back_to_page()
}

/// Search box submitted. Only an empty query means "all stations"; text
/// made of spaces is searched as typed.
async fn search<A: StationApi>(
    State(state): State<AppState<A>>,
    Query(req): Query<SearchRequest>,
) -> Redirect {
    state.controller.search(&req.query).await;
    back_to_page()
}

/// Map clicked at a point.
async fn nearby<A: StationApi>(
    State(state): State<AppState<A>>,
    Query(req): Query<CoordinatesRequest>,
) -> Result<Redirect, AppError> {
    let position = req
        .position()
        .map_err(|message| AppError::BadRequest { message })?;
    state.controller.map_clicked(position).await;
    Ok(back_to_page())
}

/// Result of the browser's geolocation lookup.
async fn locate<A: StationApi>(
    State(state): State<AppState<A>>,
    Query(req): Query<LocateRequest>,
) -> Result<Redirect, AppError> {
    let outcome = req
        .outcome()
        .map_err(|message| AppError::BadRequest { message })?;
    state.controller.locate(outcome).await;
    Ok(back_to_page())
}

/// Filter controls changed.
async fn filter<A: StationApi>(
    State(state): State<AppState<A>>,
    Query(req): Query<FilterRequest>,
) -> Result<Redirect, AppError> {
    let criteria = req
        .criteria()
        .map_err(|message| AppError::BadRequest { message })?;
    state.controller.filter_changed(criteria).await;
    Ok(back_to_page())
}

/// Station marker or list entry clicked.
async fn show_station<A: StationApi>(
    State(state): State<AppState<A>>,
    Path(id): Path<String>,
) -> Result<Redirect, AppError> {
    let id = id.parse::<i64>().map_err(|_| AppError::BadRequest {
        message: format!("Invalid station id: {id:?}"),
    })?;
    state.controller.show_detail(StationId(id)).await;
    Ok(back_to_page())
}

async fn close_detail<A: StationApi>(State(state): State<AppState<A>>) -> Redirect {
    state.controller.close_detail().await;
    back_to_page()
}

/// Download the GeoJSON export. On failure the page shows an alert instead.
async fn export<A: StationApi>(State(state): State<AppState<A>>) -> Response {
    match state.controller.export().await {
        Some(body) => (
            [
                (header::CONTENT_TYPE, "application/geo+json".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{EXPORT_FILE_NAME}\""),
                ),
            ],
            body,
        )
            .into_response(),
        None => back_to_page().into_response(),
    }
}

/// Connector types known to the API.
async fn connector_types<A: StationApi>(
    State(state): State<AppState<A>>,
) -> Json<Vec<ConnectorType>> {
    Json(state.controller.connector_types().await)
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
        };

        warn!(%status, error = %message, "Rejected request");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
