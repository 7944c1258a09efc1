//! HTTP request handlers.

use axum::extract::{Query, State};
use axum::Json;

use super::dto::{ChartQuery, HealthResponse, StationListResponse};
use super::error::AppError;
use super::state::AppState;
use crate::api::ChartData;
use crate::db::repository::StationRepository;
use crate::models::Identity;
use crate::routes::validation::resolve_range;
use crate::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// Health check endpoint.
///
/// Probes the station directory to report store reachability.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let store = match state.repository.list_stations().await {
        Ok(_) => "connected".to_string(),
        Err(err) => {
            log::warn!("Health check store probe failed: {}", err);
            format!("unavailable: {}", err)
        }
    };

    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        store,
    }))
}

/// List the stations visible to the caller.
pub async fn list_stations(
    State(state): State<AppState>,
    identity: Identity,
) -> HandlerResult<StationListResponse> {
    let stations = services::accessible_stations(state.repository.as_ref(), &identity).await?;

    let stations: Vec<_> = stations.into_iter().map(Into::into).collect();
    let total = stations.len();

    Ok(Json(StationListResponse { stations, total }))
}

/// Broadcast-times bar chart.
pub async fn broadcast_times_chart(
    State(state): State<AppState>,
    identity: Identity,
    Query(query): Query<ChartQuery>,
) -> HandlerResult<ChartData> {
    let range = resolve_range(
        query.date.as_deref(),
        query.start_date.as_deref(),
        query.end_date.as_deref(),
    )?;

    let chart = services::broadcast_times(state.repository.as_ref(), &identity, range).await?;
    non_empty(chart)
}

/// Temperature course line chart.
pub async fn temperature_chart(
    State(state): State<AppState>,
    identity: Identity,
    Query(query): Query<ChartQuery>,
) -> HandlerResult<ChartData> {
    let range = resolve_range(
        query.date.as_deref(),
        query.start_date.as_deref(),
        query.end_date.as_deref(),
    )?;

    let chart = services::temperature_course(state.repository.as_ref(), &identity, range).await?;
    non_empty(chart)
}

/// Brightness course line chart.
pub async fn brightness_chart(
    State(state): State<AppState>,
    identity: Identity,
    Query(query): Query<ChartQuery>,
) -> HandlerResult<ChartData> {
    let range = resolve_range(
        query.date.as_deref(),
        query.start_date.as_deref(),
        query.end_date.as_deref(),
    )?;

    let chart = services::brightness_course(state.repository.as_ref(), &identity, range).await?;
    non_empty(chart)
}

/// Upload activity line chart.
pub async fn uploads_chart(
    State(state): State<AppState>,
    identity: Identity,
    Query(query): Query<ChartQuery>,
) -> HandlerResult<ChartData> {
    let range = resolve_range(
        query.date.as_deref(),
        query.start_date.as_deref(),
        query.end_date.as_deref(),
    )?;

    let chart = services::images_per_hour(state.repository.as_ref(), &identity, range).await?;
    non_empty(chart)
}

fn non_empty(chart: ChartData) -> HandlerResult<ChartData> {
    if chart.datasets.is_empty() {
        return Err(AppError::NotFound("no data found".to_string()));
    }
    Ok(Json(chart))
}
