use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::models::Activity;
use crate::store::{RosterError, RosterStore};

fn roster_error_response(err: RosterError) -> (StatusCode, Json<Value>) {
    (
        err.status(),
        Json(serde_json::json!({ "detail": err.to_string() })),
    )
}

pub async fn activities_handler(
    State(store): State<Arc<RosterStore>>,
) -> Json<HashMap<String, Activity>> {
    Json(store.list_activities())
}

#[derive(Debug, Deserialize)]
pub struct SignupQuery {
    pub email: String,
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<SignupQuery>,
    State(store): State<Arc<RosterStore>>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    store.signup(&activity_name, &query.email).map_err(|e| {
        warn!(activity = %activity_name, email = %query.email, error = %e, "signup rejected");
        roster_error_response(e)
    })?;

    Ok(Json(serde_json::json!({
        "message": format!("Signed up {} for {}", query.email, activity_name)
    })))
}

pub async fn remove_participant_handler(
    Path((activity_name, email)): Path<(String, String)>,
    State(store): State<Arc<RosterStore>>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    store.remove_participant(&activity_name, &email).map_err(|e| {
        warn!(activity = %activity_name, email = %email, error = %e, "removal rejected");
        roster_error_response(e)
    })?;

    Ok(Json(serde_json::json!({
        "message": format!("Removed {} from {}", email, activity_name)
    })))
}
