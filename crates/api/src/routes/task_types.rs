use axum::{
    routing::{get, put},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/task-types",
            get(handlers::task_types::list_task_types).post(handlers::task_types::create_task_type),
        )
        .route(
            "/api/task-types/:id",
            put(handlers::task_types::update_task_type)
                .delete(handlers::task_types::delete_task_type),
        )
}
