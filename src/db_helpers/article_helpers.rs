use sqlx::{Sqlite, SqlitePool};

use crate::data_formats::{ArticleFilter, CreateArticleRequest};
use crate::errors::RequestError;
use crate::models::{join_tags, Article, ArticleWithAuthor};

const LIST_ARTICLES_QUERY: &str = r#"
            SELECT articles.id        AS "id",
                   articles.title     AS "title",
                   articles.tldr      AS "tldr",
                   articles.content   AS "content",
                   articles.tags      AS "tags",
                   articles.author_id AS "author_id",
                   users.full_name    AS "author_name"
            FROM   articles
                JOIN users
                    ON articles.author_id = users.id
            WHERE  1 = 1
     "#;

const SINGLE_ARTICLE_QUERY: &str = r#"
            SELECT articles.id        AS "id",
                   articles.title     AS "title",
                   articles.tldr      AS "tldr",
                   articles.content   AS "content",
                   articles.tags      AS "tags",
                   articles.author_id AS "author_id",
                   users.full_name    AS "author_name"
            FROM   articles
                JOIN users
                    ON articles.author_id = users.id
            WHERE  articles.id = $1
"#;

/// Lists articles, narrowed by the optional filters. Every requested tag
/// must appear as a substring of the stored tag string; the search term
/// matches against the title, the author's full name, or the tag string.
/// SQLite `LIKE` is case-insensitive for ASCII.
pub async fn list_articles_in_db(
    pool: &SqlitePool,
    ArticleFilter { tags, search_query }: &ArticleFilter,
) -> Result<Vec<ArticleWithAuthor>, RequestError> {
    let mut tx = pool.begin().await?;

    let mut query = LIST_ARTICLES_QUERY.to_owned();
    let mut params = Vec::new();

    if let Some(search) = search_query {
        query.push_str(
            " AND (articles.title LIKE ? OR users.full_name LIKE ? OR articles.tags LIKE ?)",
        );
        let pattern = format!("%{search}%");
        params.push(pattern.clone());
        params.push(pattern.clone());
        params.push(pattern);
    }
    for tag in tags {
        query.push_str(" AND articles.tags LIKE ?");
        params.push(format!("%{tag}%"));
    }

    let mut result = sqlx::query_as::<Sqlite, ArticleWithAuthor>(&query);
    for param in &params {
        result = result.bind(param);
    }
    let articles = result.fetch_all(&mut tx).await?;

    tx.commit().await?;
    Ok(articles)
}

pub async fn get_article_in_db(
    pool: &SqlitePool,
    article_id: i64,
) -> Result<Option<ArticleWithAuthor>, RequestError> {
    let mut tx = pool.begin().await?;

    let article = sqlx::query_as::<Sqlite, ArticleWithAuthor>(SINGLE_ARTICLE_QUERY)
        .bind(article_id)
        .fetch_optional(&mut tx)
        .await?;

    tx.commit().await?;
    Ok(article)
}

pub async fn create_article_in_db(
    pool: &SqlitePool,
    author_id: i64,
    CreateArticleRequest {
        title,
        tldr,
        content,
        tags,
    }: &CreateArticleRequest,
) -> Result<i64, RequestError> {
    let mut tx = pool.begin().await?;

    let tags = join_tags(tags);
    let article_id = sqlx::query_scalar::<Sqlite, i64>(
        r#"
        INSERT INTO articles (title, tldr, content, tags, author_id)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id
        "#,
    )
    .bind(title)
    .bind(tldr)
    .bind(content)
    .bind(tags)
    .bind(author_id)
    .fetch_one(&mut tx)
    .await?;

    tx.commit().await?;
    Ok(article_id)
}

/// Deletes an article on behalf of `requesting_user_id`. Missing articles and
/// articles owned by somebody else are reported separately so the handler can
/// answer 404 and 403 respectively.
pub async fn delete_article_in_db(
    pool: &SqlitePool,
    article_id: i64,
    requesting_user_id: i64,
) -> Result<(), RequestError> {
    let mut tx = pool.begin().await?;

    let article = sqlx::query_as::<Sqlite, Article>(
        "SELECT id, title, tldr, content, tags, author_id FROM articles WHERE id = $1",
    )
    .bind(article_id)
    .fetch_optional(&mut tx)
    .await?;

    let article = match article {
        Some(article) => article,
        None => return Err(RequestError::NotFound("Article not found")),
    };
    if article.author_id != requesting_user_id {
        return Err(RequestError::Forbidden(
            "You are not authorized to delete this article",
        ));
    }

    // Favorites reference the article, so they have to go first.
    sqlx::query("DELETE FROM favorites WHERE article_id = $1")
        .bind(article_id)
        .execute(&mut tx)
        .await?;
    sqlx::query("DELETE FROM articles WHERE id = $1")
        .bind(article_id)
        .execute(&mut tx)
        .await?;

    tx.commit().await?;
    Ok(())
}
