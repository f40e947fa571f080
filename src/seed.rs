use time::OffsetDateTime;
use tracing::info;

use crate::auth::password::hash_password;
use crate::state::AppState;

/// Insert fixture data: one admin, one regular user, three sample cards.
/// User rows are keyed on email, so reseeding does not duplicate them.
pub async fn run(state: &AppState) -> anyhow::Result<()> {
    let admin_hash = hash_password("spinynorman")?;
    let user_hash = hash_password("test123")?;

    sqlx::query(
        r#"
        INSERT INTO users (name, email, password_hash, is_admin)
        VALUES (NULL, 'admin@example.com', $1, TRUE),
               ('John Cleese', 'johnc@example.com', $2, FALSE)
        ON CONFLICT (email) DO NOTHING
        "#,
    )
    .bind(&admin_hash)
    .bind(&user_hash)
    .execute(&state.db)
    .await?;

    let today = OffsetDateTime::now_utc().date();
    let cards = [
        ("Start the project", "Stage 1 - schema design", "Done"),
        ("Database queries", "Stage 2 - CRUD queries", "In Progress"),
        ("Serialization", "Stage 3 - JSON output for the models", "In Progress"),
    ];
    for (title, description, status) in cards {
        sqlx::query(
            r#"
            INSERT INTO cards (title, description, status, date_created)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(title)
        .bind(description)
        .bind(status)
        .bind(today)
        .execute(&state.db)
        .await?;
    }

    info!("database seeded");
    Ok(())
}
