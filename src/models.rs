/// Delimiter the `articles.tags` column is joined with. Tags are stored
/// exactly as submitted, so a tag containing a comma cannot survive the
/// round trip; everything else does.
pub const TAG_DELIMITER: &str = ",";

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub username: String,
    pub password_hash: String,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Article {
    pub id: i64,
    pub title: String,
    pub tldr: String,
    pub content: String,
    pub tags: String,
    pub author_id: i64,
}

/// An article row joined with its author's display name, the shape the
/// list and detail endpoints serve.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ArticleWithAuthor {
    pub id: i64,
    pub title: String,
    pub tldr: String,
    pub content: String,
    pub tags: String,
    pub author_id: i64,
    pub author_name: String,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ArticleSummary {
    pub id: i64,
    pub title: String,
    pub tldr: String,
}

pub fn join_tags(tags: &[String]) -> String {
    tags.join(TAG_DELIMITER)
}

pub fn split_tags(tags: &str) -> Vec<String> {
    // "".split(",") yields [""], which would turn an article created with
    // no tags into one with a single empty tag.
    if tags.is_empty() {
        return Vec::new();
    }
    tags.split(TAG_DELIMITER).map(|s| s.to_string()).collect()
}
