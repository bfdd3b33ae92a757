use sqlx::{Sqlite, SqlitePool};

use crate::{
    errors::RequestError,
    models::{ArticleSummary, User},
};

use super::get_user_by_id;

/// Fetches the user together with summaries of every article they wrote.
pub async fn get_profile_from_db(
    pool: &SqlitePool,
    user_id: i64,
) -> Result<(User, Vec<ArticleSummary>), RequestError> {
    let user = match get_user_by_id(pool, user_id).await? {
        Some(user) => user,
        None => return Err(RequestError::NotFound("User not found")),
    };

    let mut tx = pool.begin().await?;
    let articles = sqlx::query_as::<Sqlite, ArticleSummary>(
        "SELECT id, title, tldr FROM articles WHERE author_id = $1",
    )
    .bind(user_id)
    .fetch_all(&mut tx)
    .await?;
    tx.commit().await?;

    Ok((user, articles))
}
