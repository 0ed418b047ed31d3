use axum::{
    middleware,
    routing::{delete, get},
    Router,
};
use tower_http::services::ServeDir;

use crate::shared::config::ServerConfig;
use crate::shared::request_logger::request_logger;
use crate::{handlers, AppState};

/// Конфигурация всех роутов приложения
pub fn configure_routes(state: AppState, server: &ServerConfig) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // SHOP
        // ========================================
        .route("/", get(handlers::shop::index))
        .route("/shop", get(handlers::shop::shop_page))
        // ========================================
        // ADMIN API
        // ========================================
        .route(
            "/api/a001/categories",
            get(handlers::a001_category::list_all).post(handlers::a001_category::create),
        )
        .route(
            "/api/a001/categories/:id",
            delete(handlers::a001_category::delete),
        )
        .route(
            "/api/a002/products",
            get(handlers::a002_product::list_all).post(handlers::a002_product::create),
        )
        .route(
            "/api/a002/products/:id",
            delete(handlers::a002_product::delete),
        )
        // ========================================
        // STATIC
        // ========================================
        .nest_service("/static", ServeDir::new(&server.static_dir))
        .nest_service("/pkg", ServeDir::new(&server.pkg_dir))
        .layer(middleware::from_fn(request_logger))
        .with_state(state)
}
