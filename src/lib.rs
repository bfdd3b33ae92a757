mod authentication;
mod config;
mod data_formats;
mod db_helpers;
mod errors;
mod handlers;
mod models;

use anyhow::Context;
pub use anyhow::Result;
use axum::http::StatusCode;
use axum::{routing::*, Extension, Json, Router};
pub use config::AppConfig;
pub use data_formats::*;
use authentication::TokenKeys;
use handlers::*;
use sqlx::{migrate::MigrateDatabase, Sqlite, SqlitePool};
use std::{
    net::{SocketAddr, TcpListener},
    sync::Arc,
};
pub type JsonResponse<T> = (StatusCode, Json<T>);

/// Runs the server until it fails or is shut down. The database pool and the
/// token keys are built once from the config and shared with every handler
/// through Extensions.
pub async fn run_app(config: AppConfig) -> Result<()> {
    let db = init_db(&config.database_url).await?;
    let keys = TokenKeys::new(
        &config.token_secret,
        time::Duration::minutes(config.token_ttl_minutes),
    );
    let app = make_router()
        .layer(Extension(Arc::new(db)))
        .layer(Extension(Arc::new(keys)));
    tracing::info!("Listening on {}", config.bind_addr);
    axum::Server::bind(&config.bind_addr)
        .serve(app.into_make_service())
        .await?;
    Ok(())
}

pub async fn init_db(db_url: &str) -> Result<SqlitePool> {
    if !Sqlite::database_exists(db_url).await.unwrap_or(false) {
        tracing::info!("Creating database {}", db_url);
        Sqlite::create_database(db_url)
            .await
            .context("Failed to create database")?;
    }
    let pool = SqlitePool::connect(db_url).await?;
    // Run migrations
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Migrations completed");
    Ok(pool)
}

pub fn get_random_free_port() -> (u16, SocketAddr) {
    let listener = TcpListener::bind("localhost:0").unwrap();
    match listener.local_addr() {
        Ok(addr) => (addr.port(), addr),
        Err(_) => panic!("Could not get a free port"),
    }
}

pub fn make_router() -> Router {
    Router::new()
        .route("/check_health", get(alive))
        .route("/signup", post(signup))
        .route("/login", post(login))
        .route("/createpost", post(create_article))
        .route("/article", get(list_articles))
        .route("/article/:article_id", get(get_article))
        .route("/delete_article/:article_id", delete(delete_article))
        .route("/profile/:user_id", get(get_profile))
        .route("/is_favorited", post(is_favorited))
        .route("/favorite", post(toggle_favorite))
        .route("/favorite_articles/:user_id", get(list_favorite_articles))
        .fallback(not_found)
}
