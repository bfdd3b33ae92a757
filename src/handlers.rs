use std::sync::Arc;

use axum::{
    extract::Path,
    http::{StatusCode, Uri},
    Extension, Json,
};
use axum_extra::extract::Query;
use sqlx::SqlitePool;

use crate::{
    authentication::{hash_password, verify_password, AuthSubject, TokenKeys},
    data_formats::{
        ArticleCreatedResponse, ArticleFilter, ArticleResponse, ArticleSummaryResponse,
        CreateArticleRequest, FavoriteRequest, FavoriteStatusResponse, FavoriteToggleResponse,
        LoginRequest, LoginResponse, MessageResponse, ProfileResponse, SignupRequest,
        SignupResponse,
    },
    db_helpers::{
        create_article_in_db, delete_article_in_db, find_user_by_email_or_username,
        get_article_in_db, get_profile_from_db, get_user_by_username, insert_user,
        is_favorited_in_db, list_articles_in_db, list_favorite_articles_in_db,
        toggle_favorite_in_db,
    },
    errors::RequestError,
    models::User,
};

type JsonResult<T> = Result<Json<T>, RequestError>;

// ----------------- Helper Handlers -----------------
pub async fn alive() -> &'static str {
    "alive"
}

pub async fn not_found(uri: Uri) -> Result<(), (StatusCode, String)> {
    Err((
        StatusCode::NOT_FOUND,
        format!("URL {} provided was not found", uri),
    ))
}

/// Resolves a token subject back to its user row. Tokens outlive accounts,
/// so a valid token whose user is gone still has to be turned away.
async fn resolve_subject(pool: &SqlitePool, username: &str) -> Result<User, RequestError> {
    match get_user_by_username(pool, username).await? {
        Some(user) => Ok(user),
        None => Err(RequestError::NotFound("User not found")),
    }
}

// ----------------- User Handlers -----------------
pub async fn signup(
    Extension(pool): Extension<Arc<SqlitePool>>,
    Json(mut request): Json<SignupRequest>,
) -> JsonResult<SignupResponse> {
    if find_user_by_email_or_username(&pool, &request.email, &request.username)
        .await?
        .is_some()
    {
        return Err(RequestError::BadRequest(
            "Email or username already registered",
        ));
    }

    request.password = hash_password(request.password)
        .await
        .map_err(|_| RequestError::ServerError)?;
    let user_id = insert_user(&pool, &request).await?;

    Ok(Json(SignupResponse {
        message: "User created successfully".to_owned(),
        user_id,
    }))
}

pub async fn login(
    Extension(pool): Extension<Arc<SqlitePool>>,
    Extension(keys): Extension<Arc<TokenKeys>>,
    Json(request): Json<LoginRequest>,
) -> JsonResult<LoginResponse> {
    let user = match get_user_by_username(&pool, &request.username).await? {
        Some(user) => user,
        None => {
            return Err(RequestError::BadRequest("Invalid username or password"));
        }
    };

    let is_password_correct = verify_password(request.password, user.password_hash)
        .await
        .map_err(|_| RequestError::ServerError)?;
    if !is_password_correct {
        return Err(RequestError::BadRequest("Invalid username or password"));
    }

    let access_token = keys
        .issue(&user.username)
        .map_err(|_| RequestError::ServerError)?;

    Ok(Json(LoginResponse {
        access_token,
        token_type: "bearer".to_owned(),
        user_id: user.id,
    }))
}
// ----------------- End User Handlers -----------------

// ----------------- Article Handlers -----------------
pub async fn create_article(
    Extension(pool): Extension<Arc<SqlitePool>>,
    AuthSubject(username): AuthSubject,
    Json(request): Json<CreateArticleRequest>,
) -> JsonResult<ArticleCreatedResponse> {
    let author = resolve_subject(&pool, &username).await?;
    let article_id = create_article_in_db(&pool, author.id, &request).await?;

    Ok(Json(ArticleCreatedResponse {
        message: "Article created successfully".to_owned(),
        article_id,
    }))
}

pub async fn list_articles(
    Extension(pool): Extension<Arc<SqlitePool>>,
    Query(filter): Query<ArticleFilter>,
) -> JsonResult<Vec<ArticleResponse>> {
    let articles = list_articles_in_db(&pool, &filter).await?;
    Ok(Json(
        articles.into_iter().map(ArticleResponse::new).collect(),
    ))
}

pub async fn get_article(
    Extension(pool): Extension<Arc<SqlitePool>>,
    Path(article_id): Path<i64>,
) -> JsonResult<ArticleResponse> {
    match get_article_in_db(&pool, article_id).await? {
        Some(article) => Ok(Json(ArticleResponse::new(article))),
        None => Err(RequestError::NotFound("Article not found")),
    }
}

pub async fn delete_article(
    Extension(pool): Extension<Arc<SqlitePool>>,
    AuthSubject(username): AuthSubject,
    Path(article_id): Path<i64>,
) -> JsonResult<MessageResponse> {
    let user = resolve_subject(&pool, &username).await?;
    delete_article_in_db(&pool, article_id, user.id).await?;

    Ok(Json(MessageResponse {
        message: "Article deleted successfully".to_owned(),
    }))
}
// ----------------- End Article Handlers -----------------

// ----------------- Profile Handlers -----------------
pub async fn get_profile(
    Extension(pool): Extension<Arc<SqlitePool>>,
    Path(user_id): Path<i64>,
) -> JsonResult<ProfileResponse> {
    let (user, articles) = get_profile_from_db(&pool, user_id).await?;
    Ok(Json(ProfileResponse::new(user, articles)))
}
// ----------------- End Profile Handlers -----------------

// ----------------- Favorite Handlers -----------------
pub async fn is_favorited(
    Extension(pool): Extension<Arc<SqlitePool>>,
    Json(FavoriteRequest {
        user_id,
        article_id,
    }): Json<FavoriteRequest>,
) -> JsonResult<FavoriteStatusResponse> {
    let favorited = is_favorited_in_db(&pool, user_id, article_id).await?;
    Ok(Json(FavoriteStatusResponse {
        is_favorited: favorited,
    }))
}

pub async fn toggle_favorite(
    Extension(pool): Extension<Arc<SqlitePool>>,
    Json(FavoriteRequest {
        user_id,
        article_id,
    }): Json<FavoriteRequest>,
) -> JsonResult<FavoriteToggleResponse> {
    let favorited = toggle_favorite_in_db(&pool, user_id, article_id).await?;
    Ok(Json(FavoriteToggleResponse { favorited }))
}

pub async fn list_favorite_articles(
    Extension(pool): Extension<Arc<SqlitePool>>,
    Path(user_id): Path<i64>,
) -> JsonResult<Vec<ArticleSummaryResponse>> {
    let articles = list_favorite_articles_in_db(&pool, user_id).await?;
    Ok(Json(
        articles
            .into_iter()
            .map(ArticleSummaryResponse::new)
            .collect(),
    ))
}
// ----------------- End Favorite Handlers -----------------
