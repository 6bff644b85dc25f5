use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers::{
    delete_url_handler, get_url_handler, health_handler, list_urls_handler, redirect_handler,
    shorten_url_handler,
};
use crate::state::AppState;

pub struct App {}

impl App {
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route("/health", get(health_handler))
            .route("/shorten-url", post(shorten_url_handler))
            .route("/url", get(list_urls_handler))
            .route(
                "/url/{id}",
                get(get_url_handler).delete(delete_url_handler),
            )
            .route("/redirect/{id}", get(redirect_handler))
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }
}
