use axum::{extract::State, routing::get, Json, Router};
use tracing::instrument;

use crate::{auth::extractors::AdminUser, cards::repo::Card, error::AppResult, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new().route("/cards", get(list_cards))
}

/// Admin-only listing. `AdminUser` rejects the request before this runs.
#[instrument(skip(state, _admin))]
pub async fn list_cards(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> AppResult<Json<Vec<Card>>> {
    let cards = Card::list_all(&state.db).await?;
    Ok(Json(cards))
}
