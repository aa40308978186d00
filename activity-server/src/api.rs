use crate::errors::{ApiError, ApiResult};
use crate::AppState;
use activity_core::{Directory, DirectoryError};
use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    response::Redirect,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub const INDEX_PATH: &str = "/static/index.html";

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

pub async fn root() -> Redirect {
    Redirect::temporary(INDEX_PATH)
}

pub async fn list_activities(State(state): State<Arc<AppState>>) -> Json<Directory> {
    let directory = state.directory.read().await;
    Json(directory.clone())
}

pub async fn signup(
    State(state): State<Arc<AppState>>,
    Path(activity_name): Path<String>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let Query(query) = query?;

    let (message, participants, max_participants) = {
        let mut directory = state.directory.write().await;
        let message = match directory.signup(&activity_name, &query.email) {
            Ok(message) => message,
            Err(e) => {
                drop(directory);
                return Err(reject(&state, e));
            }
        };
        let (participants, max_participants, spots_left) = directory
            .get(&activity_name)
            .map(|a| (a.participants.len(), a.max_participants, a.spots_left()))
            .unwrap_or_default();
        tracing::info!(
            activity = %activity_name,
            email = %query.email,
            participants,
            spots_left,
            "Student signed up"
        );
        (message, participants, max_participants)
    };

    if let Some(monitoring) = &state.monitoring {
        monitoring.log_signed_up(&activity_name, &query.email, participants, max_participants);
    }

    Ok(Json(MessageResponse { message }))
}

pub async fn unregister(
    State(state): State<Arc<AppState>>,
    Path(activity_name): Path<String>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let Query(query) = query?;

    let (message, participants) = {
        let mut directory = state.directory.write().await;
        let message = match directory.unregister(&activity_name, &query.email) {
            Ok(message) => message,
            Err(e) => {
                drop(directory);
                return Err(reject(&state, e));
            }
        };
        let participants = directory
            .get(&activity_name)
            .map(|activity| activity.participants.len())
            .unwrap_or_default();
        tracing::info!(
            activity = %activity_name,
            email = %query.email,
            participants,
            "Student unregistered"
        );
        (message, participants)
    };

    if let Some(monitoring) = &state.monitoring {
        monitoring.log_unregistered(&activity_name, &query.email, participants);
    }

    Ok(Json(MessageResponse { message }))
}

pub async fn reset_activities(State(state): State<Arc<AppState>>) -> Json<MessageResponse> {
    tracing::info!("Resetting activities to seed data");
    state.directory.write().await.reset();

    if let Some(monitoring) = &state.monitoring {
        monitoring.log_reset();
    }

    Json(MessageResponse {
        message: "Activities reset".to_string(),
    })
}

fn reject(state: &AppState, error: DirectoryError) -> ApiError {
    tracing::debug!(activity = error.activity().unwrap_or_default(), %error, "Request rejected");
    if let Some(monitoring) = &state.monitoring {
        monitoring.log_rejected(error.to_string());
    }
    ApiError::from(error)
}
