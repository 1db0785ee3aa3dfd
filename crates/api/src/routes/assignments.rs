use axum::{
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/assignments",
            get(handlers::assignments::list_assignments)
                .post(handlers::assignments::place_assignment)
                .delete(handlers::assignments::clear_assignments),
        )
        .route(
            "/api/assignments/:id",
            delete(handlers::assignments::delete_assignment),
        )
        .route(
            "/api/assignments/click",
            post(handlers::assignments::click_assignment),
        )
        .route(
            "/api/assignments/copy",
            post(handlers::assignments::copy_assignments),
        )
        .route(
            "/api/assignments/paste",
            post(handlers::assignments::paste_assignments),
        )
}
