use sqlx::{Sqlite, SqlitePool};

use crate::errors::RequestError;
use crate::models::ArticleSummary;

const FAVORITE_EXISTS_QUERY: &str =
    "SELECT EXISTS (SELECT 1 FROM favorites WHERE user_id = $1 AND article_id = $2)";

pub async fn is_favorited_in_db(
    pool: &SqlitePool,
    user_id: i64,
    article_id: i64,
) -> Result<bool, RequestError> {
    let mut tx = pool.begin().await?;
    let favorited = sqlx::query_scalar::<Sqlite, bool>(FAVORITE_EXISTS_QUERY)
        .bind(user_id)
        .bind(article_id)
        .fetch_one(&mut tx)
        .await?;
    tx.commit().await?;
    Ok(favorited)
}

/// Flips the (user, article) favorite pair inside one transaction: removes it
/// when present, inserts it when absent. Returns the state after the flip.
pub async fn toggle_favorite_in_db(
    pool: &SqlitePool,
    user_id: i64,
    article_id: i64,
) -> Result<bool, RequestError> {
    let mut tx = pool.begin().await?;

    let article_exists =
        sqlx::query_scalar::<Sqlite, bool>("SELECT EXISTS (SELECT 1 FROM articles WHERE id = $1)")
            .bind(article_id)
            .fetch_one(&mut tx)
            .await?;
    if !article_exists {
        return Err(RequestError::NotFound("Article not found"));
    }

    let favorited = sqlx::query_scalar::<Sqlite, bool>(FAVORITE_EXISTS_QUERY)
        .bind(user_id)
        .bind(article_id)
        .fetch_one(&mut tx)
        .await?;

    if favorited {
        sqlx::query("DELETE FROM favorites WHERE user_id = $1 AND article_id = $2")
            .bind(user_id)
            .bind(article_id)
            .execute(&mut tx)
            .await?;
    } else {
        sqlx::query("INSERT INTO favorites (user_id, article_id) VALUES ($1, $2)")
            .bind(user_id)
            .bind(article_id)
            .execute(&mut tx)
            .await?;
    }

    tx.commit().await?;
    Ok(!favorited)
}

pub async fn list_favorite_articles_in_db(
    pool: &SqlitePool,
    user_id: i64,
) -> Result<Vec<ArticleSummary>, RequestError> {
    let mut tx = pool.begin().await?;
    let articles = sqlx::query_as::<Sqlite, ArticleSummary>(
        r#"
        SELECT articles.id    AS "id",
               articles.title AS "title",
               articles.tldr  AS "tldr"
        FROM   articles
            JOIN favorites
                ON favorites.article_id = articles.id
        WHERE  favorites.user_id = $1
        "#,
    )
    .bind(user_id)
    .fetch_all(&mut tx)
    .await?;
    tx.commit().await?;
    Ok(articles)
}
