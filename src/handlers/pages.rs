use axum::{
    extract::State,
    response::{Html, IntoResponse},
};
use tracing::info;

use crate::{
    error::{AppError, AppResult},
    AppState,
};

/// `GET /` — the inventory management page.
///
/// The page is a static asset read from the configured static directory;
/// everything dynamic on it (product CRUD, live updates) happens client-side
/// through the Firebase SDK, so there is no view model to render here.
pub async fn inventory_page(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let path = state.static_dir.join("inventory.html");

    let html = tokio::fs::read_to_string(&path).await.map_err(|err| {
        if err.kind() == std::io::ErrorKind::NotFound {
            AppError::NotFound("inventory page not found".to_string())
        } else {
            AppError::Internal(
                anyhow::Error::new(err).context(format!("reading {}", path.display())),
            )
        }
    })?;

    info!(bytes = html.len(), "Served inventory page");

    Ok(Html(html))
}
