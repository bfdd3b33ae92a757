use serde::{Deserialize, Serialize};

use crate::models::{split_tags, ArticleSummary, ArticleWithAuthor, User};

#[derive(Deserialize, Serialize, Debug)]
pub struct SignupResponse {
    pub message: String,
    pub user_id: i64,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    pub user_id: i64,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct ArticleCreatedResponse {
    pub message: String,
    pub article_id: i64,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct MessageResponse {
    pub message: String,
}

/// Article as served by the list and detail endpoints. The owner shows up
/// as `user_id` on the wire, alongside the joined author name.
#[derive(Deserialize, Serialize, Debug)]
pub struct ArticleResponse {
    pub id: i64,
    pub title: String,
    pub tldr: String,
    pub content: String,
    pub tags: Vec<String>,
    pub user_id: i64,
    pub author_name: String,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct ArticleSummaryResponse {
    pub id: i64,
    pub title: String,
    pub tldr: String,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct ProfileResponse {
    pub full_name: String,
    pub email: String,
    pub username: String,
    pub total_articles: i64,
    pub articles: Vec<ArticleSummaryResponse>,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct FavoriteStatusResponse {
    pub is_favorited: bool,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct FavoriteToggleResponse {
    pub favorited: bool,
}

impl ArticleResponse {
    pub fn new(
        ArticleWithAuthor {
            id,
            title,
            tldr,
            content,
            tags,
            author_id,
            author_name,
        }: ArticleWithAuthor,
    ) -> Self {
        ArticleResponse {
            id,
            title,
            tldr,
            content,
            tags: split_tags(&tags),
            user_id: author_id,
            author_name,
        }
    }
}

impl ArticleSummaryResponse {
    pub fn new(ArticleSummary { id, title, tldr }: ArticleSummary) -> Self {
        ArticleSummaryResponse { id, title, tldr }
    }
}

impl ProfileResponse {
    pub fn new(
        User {
            full_name,
            email,
            username,
            ..
        }: User,
        articles: Vec<ArticleSummary>,
    ) -> Self {
        let articles: Vec<_> = articles
            .into_iter()
            .map(ArticleSummaryResponse::new)
            .collect();
        ProfileResponse {
            full_name,
            email,
            username,
            total_articles: articles.len() as i64,
            articles,
        }
    }
}
