use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::models::{ChatRequest, ChatResponse, ErrorResponse};
use crate::respond::generate_response;
use crate::state::AppState;

/// GET / — health check.
pub async fn health() -> &'static str {
    "Hello, world! I'm running."
}

/// POST /chat — generate a reply for a user query.
pub async fn chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, (StatusCode, Json<ErrorResponse>)> {
    let query = req.query.trim().to_string();
    if query.is_empty() {
        return Err(bad_request("Query field is required"));
    }

    let response = generate_response(&query, &state.greetings, &state.documents);

    // Fire-and-forget: the reply is already final when logging starts.
    let interactions = state.interactions.clone();
    let logged_query = query.clone();
    let logged_response = response.clone();
    tokio::task::spawn_blocking(move || {
        interactions.record(&logged_query, &logged_response);
    });

    Ok(Json(ChatResponse { response }))
}

fn bad_request(message: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
}
