use serde::{Deserialize, Serialize};

// ----------------- User Requests -----------------
#[derive(Deserialize, Serialize, Debug)]
pub struct SignupRequest {
    pub full_name: String,
    pub email: String,
    pub username: String,
    pub password: String,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

// ----------------- Article Requests -----------------
#[derive(Deserialize, Serialize, Debug)]
pub struct CreateArticleRequest {
    pub title: String,
    pub tldr: String,
    pub content: String,
    pub tags: Vec<String>,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct FavoriteRequest {
    pub user_id: i64,
    pub article_id: i64,
}
