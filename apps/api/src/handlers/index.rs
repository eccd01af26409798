use axum::extract::State;
use axum::response::Html;
use tracing::warn;

use crate::state::AppState;

/// Serves the bundled single-page UI.
///
/// A missing file is reported in the page body rather than as an HTTP error.
pub async fn index_handler(State(state): State<AppState>) -> Html<String> {
    match tokio::fs::read_to_string(&state.index_html_path).await {
        Ok(contents) => Html(contents),
        Err(error) => {
            warn!(path = %state.index_html_path, %error, "failed to load ui file");
            Html(format!("Error loading index.html: {error}"))
        }
    }
}
