use std::collections::BTreeMap;

use activities_core::{Activity, Confirmation};
use axum::extract::{Path, Query, State};
use axum::Json;

use crate::error::AppError;
use crate::state::AppState;

#[derive(serde::Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

/// GET /activities - every activity with its current participants.
pub async fn list_activities(State(app): State<AppState>) -> Json<BTreeMap<String, Activity>> {
    let directory = app.directory.read().await;
    Json(directory.list_activities().clone())
}

/// POST /activities/{name}/signup?email= - enroll a student.
pub async fn signup(
    State(app): State<AppState>,
    Path(name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<Confirmation>, AppError> {
    let result = app.directory.write().await.signup(&name, &query.email);
    match result {
        Ok(confirmation) => {
            tracing::info!(activity = %name, email = %query.email, "student signed up");
            Ok(Json(confirmation))
        }
        Err(e) => {
            tracing::debug!(activity = %name, email = %query.email, "signup rejected: {e:?}");
            Err(e.into())
        }
    }
}

/// DELETE /activities/{name}/unregister?email= - remove a student.
pub async fn unregister(
    State(app): State<AppState>,
    Path(name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<Confirmation>, AppError> {
    let result = app.directory.write().await.unregister(&name, &query.email);
    match result {
        Ok(confirmation) => {
            tracing::info!(activity = %name, email = %query.email, "student unregistered");
            Ok(Json(confirmation))
        }
        Err(e) => {
            tracing::debug!(activity = %name, email = %query.email, "unregister rejected: {e:?}");
            Err(e.into())
        }
    }
}
