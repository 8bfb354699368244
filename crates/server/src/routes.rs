//! HTTP routes for the calendar API.
//!
//! ```text
//! POST /create_event
//! POST /update_event
//! POST /delete_event
//! GET  /events_for_day?user_id=..&date=YYYY-MM-DD
//! GET  /events_for_week?user_id=..&date=YYYY-MM-DD
//! GET  /events_for_month?user_id=..&date=YYYY-MM-DD
//! ```
//!
//! Successful responses are `{"result": ...}`, failures `{"error": "..."}`.

use std::path::Path;
use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use calendar::{DateOnly, Event, EventInput, Granularity, Service};
use serde::{Deserialize, Serialize};
use tower_http::LatencyUnit;
use tower_http::services::ServeFile;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::HttpConfig;
use crate::error::ApiError;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<dyn Service>,
    /// Status used when update/delete name an unknown id.
    pub not_found_status: StatusCode,
}

impl AppState {
    pub fn new(service: Arc<dyn Service>, http: &HttpConfig) -> Self {
        let not_found_status = if http.legacy_not_found_status {
            StatusCode::SERVICE_UNAVAILABLE
        } else {
            StatusCode::NOT_FOUND
        };
        Self {
            service,
            not_found_status,
        }
    }

    fn reject(&self, err: calendar::Error) -> ApiError {
        ApiError::from_calendar(err, self.not_found_status)
    }
}

#[derive(Debug, Serialize)]
struct Envelope<T> {
    result: T,
}

fn ok<T>(result: T) -> Json<Envelope<T>> {
    Json(Envelope { result })
}

#[derive(Debug, Deserialize)]
struct DeleteRequest {
    #[serde(default)]
    id: i64,
}

#[derive(Debug, Deserialize)]
struct EventsQuery {
    user_id: Option<String>,
    date: Option<String>,
}

/// Build the application router.
///
/// When `index_file` is given it is served at `/`.
pub fn router(state: AppState, index_file: Option<&Path>) -> Router {
    let mut routes = Router::new()
        .route("/create_event", post(create_event))
        .route("/update_event", post(update_event))
        .route("/delete_event", post(delete_event));

    for granularity in Granularity::ALL {
        routes = routes.route(
            &format!("/events_for_{granularity}"),
            get(
                move |state: State<AppState>, query: Result<Query<EventsQuery>, QueryRejection>| {
                    events_for(state, query, granularity)
                },
            ),
        );
    }

    if let Some(path) = index_file {
        routes = routes.route_service("/", ServeFile::new(path));
    }

    routes.with_state(state).layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_response(
                DefaultOnResponse::new()
                    .level(Level::INFO)
                    .latency_unit(LatencyUnit::Micros),
            ),
    )
}

async fn create_event(
    State(state): State<AppState>,
    payload: Result<Json<EventInput>, JsonRejection>,
) -> Result<Json<Envelope<Event>>, ApiError> {
    let Json(input) = payload?;
    let event = input.validate().map_err(|e| state.reject(e))?;
    Ok(ok(state.service.create_event(event)))
}

async fn update_event(
    State(state): State<AppState>,
    payload: Result<Json<EventInput>, JsonRejection>,
) -> Result<Json<Envelope<Event>>, ApiError> {
    let Json(input) = payload?;
    let event = input.validate().map_err(|e| state.reject(e))?;
    let updated = state
        .service
        .update_event(event)
        .map_err(|e| state.reject(e))?;
    Ok(ok(updated))
}

async fn delete_event(
    State(state): State<AppState>,
    payload: Result<Json<DeleteRequest>, JsonRejection>,
) -> Result<Json<Envelope<Event>>, ApiError> {
    let Json(request) = payload?;
    let deleted = state
        .service
        .delete_event(request.id)
        .map_err(|e| state.reject(e))?;
    Ok(ok(deleted))
}

async fn events_for(
    State(state): State<AppState>,
    query: Result<Query<EventsQuery>, QueryRejection>,
    granularity: Granularity,
) -> Result<Json<Envelope<Vec<Event>>>, ApiError> {
    let Query(query) = query.map_err(|e| ApiError::bad_request(e.body_text()))?;

    let raw_user = query.user_id.unwrap_or_default();
    let user_id: i64 = raw_user
        .parse()
        .map_err(|e| ApiError::bad_request(format!("invalid user_id {raw_user:?}: {e}")))?;
    let date: DateOnly = query
        .date
        .unwrap_or_default()
        .parse()
        .map_err(|e| state.reject(e))?;

    Ok(ok(state.service.get_since(user_id, date, granularity)))
}
