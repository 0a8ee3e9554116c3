use askama::Template;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use tracing::error;

use crate::services::roster_service::{self, ActivityCardView};
use crate::web::AppState;

#[derive(Template)]
#[template(path = "index.html")]
pub struct HomeTemplate {
    pub activities: Vec<ActivityCardView>,
    pub build_id: &'static str,
}

pub async fn home_handler(State(state): State<AppState>) -> Response {
    let activities = match roster_service::load_activity_cards(state.store.as_ref()).await {
        Ok(cards) => cards,
        Err(e) => {
            error!("Activity roster load failed: {}", e);
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    let template = HomeTemplate {
        activities,
        build_id: env!("MERGINGTON_BUILD_ID"),
    };
    match template.render() {
        Ok(body) => Html(body).into_response(),
        Err(e) => {
            error!("Template render failed: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
