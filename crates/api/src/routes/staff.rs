use axum::{
    routing::{get, put},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/staff",
            get(handlers::staff::list_staff).post(handlers::staff::create_staff),
        )
        .route(
            "/api/staff/:id",
            put(handlers::staff::update_staff).delete(handlers::staff::delete_staff),
        )
}
