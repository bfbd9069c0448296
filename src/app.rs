use axum::routing::{get, patch, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::public::index))
        .route("/health", get(handlers::health))
        .route("/api/tours", get(handlers::public::list_tours))
        .route("/api/bookings", post(handlers::public::create_booking))
        .route("/admin", get(handlers::admin::console))
        .route(
            "/admin/api/session",
            get(handlers::admin::session_status)
                .post(handlers::admin::save_session)
                .delete(handlers::admin::clear_session),
        )
        .route(
            "/admin/api/tours",
            get(handlers::admin::list_tours).post(handlers::admin::create_tour),
        )
        .route("/admin/api/tours/:id", patch(handlers::admin::update_tour))
        .route("/admin/api/bookings", get(handlers::admin::list_bookings))
        .route(
            "/admin/api/bookings/:id",
            patch(handlers::admin::update_booking),
        )
        .with_state(state)
}
