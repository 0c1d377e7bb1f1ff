//! 路由表

use axum::{
    middleware,
    routing::{get, put},
    Router,
};
use std::time::Duration;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::app::user::handler::{self, AppState};
use crate::config::HttpConfig;
use crate::core::middleware::request_logging_middleware;

/// 创建应用路由
pub fn create_router(state: AppState, config: &HttpConfig) -> Router {
    Router::new()
        .route(
            "/users",
            get(handler::list_users)
                .post(handler::create_user)
                .options(handler::list_users),
        )
        .route(
            "/users/:id",
            put(handler::update_user)
                .delete(handler::delete_user)
                .options(handler::update_user),
        )
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(config.timeout_seconds)))
        .with_state(state)
}
