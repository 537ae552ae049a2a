use crate::core::service::FightService;
use crate::domain::model::{Fight, Fighters};
use crate::utils::error::{FightError, Result};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

/// Explicit route table for the fight endpoints.
pub fn router(service: Arc<FightService>) -> Router {
    Router::new()
        .route("/api/fights/randomfighters", get(get_random_fighters))
        .route("/api/fights/hello", get(hello))
        .route("/api/fights", get(get_all_fights).post(do_fight))
        .route("/api/fights/{id}", get(get_fight))
        .layer(CorsLayer::permissive())
        .with_state(service)
}

pub async fn serve(addr: SocketAddr, service: Arc<FightService>) -> Result<()> {
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Fights service listening on {}", listener.local_addr()?);

    axum::serve(listener, router(service)).await?;
    Ok(())
}

async fn get_random_fighters(
    State(service): State<Arc<FightService>>,
) -> std::result::Result<Json<Fighters>, ApiError> {
    let fighters = service.find_random_fighters().await?;
    Ok(Json(fighters))
}

async fn get_all_fights(
    State(service): State<Arc<FightService>>,
) -> std::result::Result<Response, ApiError> {
    let fights = service.find_all_fights().await?;
    if fights.is_empty() {
        Ok(StatusCode::NO_CONTENT.into_response())
    } else {
        Ok(Json(fights).into_response())
    }
}

async fn get_fight(
    State(service): State<Arc<FightService>>,
    Path(id): Path<i64>,
) -> std::result::Result<Response, ApiError> {
    match service.find_fight_by_id(id).await? {
        Some(fight) => Ok(Json(fight).into_response()),
        None => Ok(StatusCode::NOT_FOUND.into_response()),
    }
}

async fn do_fight(
    State(service): State<Arc<FightService>>,
    payload: std::result::Result<Json<Fighters>, JsonRejection>,
) -> std::result::Result<Json<Fight>, ApiError> {
    // A missing or malformed body is a validation failure, not a server error.
    let Json(fighters) = payload.map_err(|e| {
        ApiError(FightError::ValidationError {
            message: format!("invalid request body: {}", e),
        })
    })?;

    let fight = service.perform_fight(&fighters).await?;
    Ok(Json(fight))
}

async fn hello(State(service): State<Arc<FightService>>) -> &'static str {
    service.hello()
}

/// Boundary wrapper translating `FightError` into HTTP status semantics.
pub struct ApiError(FightError);

impl From<FightError> for ApiError {
    fn from(err: FightError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            FightError::ValidationError { .. } => StatusCode::BAD_REQUEST,
            FightError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!("Request failed: {}", self.0);
        } else {
            tracing::warn!("Request rejected: {}", self.0);
        }

        (
            status,
            Json(serde_json::json!({ "error": self.0.to_string() })),
        )
            .into_response()
    }
}
