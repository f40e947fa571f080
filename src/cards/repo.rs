use serde::Serialize;
use sqlx::{FromRow, PgPool};
use time::Date;

use crate::error::AppResult;

/// Card record, serialized as-is in the gated listing.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Card {
    pub id: i32,
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub date_created: Option<Date>,
}

impl Card {
    /// All cards in board display order, title descending.
    pub async fn list_all(db: &PgPool) -> AppResult<Vec<Card>> {
        let cards = sqlx::query_as::<_, Card>(
            r#"
            SELECT id, title, description, status, date_created
            FROM cards
            ORDER BY title DESC
            "#,
        )
        .fetch_all(db)
        .await?;
        Ok(cards)
    }
}
