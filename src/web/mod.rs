use std::path::Path;
use std::sync::Arc;

use axum::{
    routing::{get, get_service, post},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::database::ActivityStore;

pub mod error;
pub mod routes;

use routes::{activities, home};

/// Shared handler state. The store is built once at startup and injected
/// here; handlers never reach for globals.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ActivityStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn ActivityStore>) -> Self {
        Self { store }
    }
}

pub fn router(state: AppState, assets_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(home::home_handler))
        .route("/activities", get(activities::list_activities_handler))
        .route(
            "/activities/:activity_name/signup",
            post(activities::signup_handler),
        )
        .route(
            "/activities/:activity_name/unregister",
            post(activities::unregister_handler),
        )
        .nest_service(
            "/assets",
            get_service(ServeDir::new(assets_dir.as_ref())),
        )
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
