// HTTP request handlers
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
    Form,
};
use tracing::info;

use crate::pipeline::FetchRequest;
use crate::render;
use crate::server::state::AppState;

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "Transaction viewer is running")
}

/// Empty form with configured defaults
pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    let request = FetchRequest::from_defaults(&state.defaults);
    Html(render::page(&request, None))
}

/// Run the submitted form and render the results below it
pub async fn submit(
    State(state): State<AppState>,
    Form(request): Form<FetchRequest>,
) -> impl IntoResponse {
    info!("Received fetch request for {}", request.address.trim());

    let report = state.viewer.run(&request).await;
    let status = report.status_code();
    (status, Html(render::page(&request, Some(&report))))
}
