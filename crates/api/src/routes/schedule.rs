use axum::{
    routing::{delete, get},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/shifts",
            get(handlers::schedule::list_shifts).put(handlers::schedule::upsert_shift),
        )
        .route(
            "/api/requests",
            get(handlers::schedule::list_requests).post(handlers::schedule::create_request),
        )
        .route("/api/requests/:id", delete(handlers::schedule::delete_request))
        .route(
            "/api/schedule/daily/:date",
            get(handlers::schedule::daily_summary),
        )
        .route(
            "/api/schedule/monthly/:staff_id/:year/:month",
            get(handlers::schedule::monthly_summary),
        )
}
