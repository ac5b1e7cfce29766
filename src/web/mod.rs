pub mod routes;

use std::sync::Arc;

use axum::{
    response::Redirect,
    routing::{delete, get, post},
    Router,
};

use crate::store::RosterStore;
use routes::activities;

/// API routes plus the root redirect. Static file serving and outer
/// middleware layers are wired up in `main`.
pub fn app(store: Arc<RosterStore>) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::temporary("/static/index.html") }))
        .route("/activities", get(activities::activities_handler))
        .route(
            "/activities/:activity_name/signup",
            post(activities::signup_handler),
        )
        .route(
            "/activities/:activity_name/participants/:email",
            delete(activities::remove_participant_handler),
        )
        .with_state(store)
}
