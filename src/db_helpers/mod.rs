use sqlx::{Sqlite, SqlitePool};

use crate::{errors::RequestError, models::User};

mod article_helpers;
mod favorite_helpers;
mod profile_helpers;
mod user_helpers;

pub use article_helpers::*;
pub use favorite_helpers::*;
pub use profile_helpers::*;
pub use user_helpers::*;

// ----------------- Shared User Lookups -----------------

pub async fn get_user_by_username(
    pool: &SqlitePool,
    username: &str,
) -> Result<Option<User>, RequestError> {
    let mut tx = pool.begin().await?;
    let user = sqlx::query_as::<Sqlite, User>(
        "SELECT id, full_name, email, username, password_hash FROM users WHERE username = $1",
    )
    .bind(username)
    .fetch_optional(&mut tx)
    .await?;
    tx.commit().await?;
    Ok(user)
}

pub async fn get_user_by_id(pool: &SqlitePool, user_id: i64) -> Result<Option<User>, RequestError> {
    let mut tx = pool.begin().await?;
    let user = sqlx::query_as::<Sqlite, User>(
        "SELECT id, full_name, email, username, password_hash FROM users WHERE id = $1",
    )
    .bind(user_id)
    .fetch_optional(&mut tx)
    .await?;
    tx.commit().await?;
    Ok(user)
}

/// Single lookup behind the signup duplicate check. Any existing user holding
/// either the email or the username counts as a collision.
pub async fn find_user_by_email_or_username(
    pool: &SqlitePool,
    email: &str,
    username: &str,
) -> Result<Option<User>, RequestError> {
    let mut tx = pool.begin().await?;
    let user = sqlx::query_as::<Sqlite, User>(
        "SELECT id, full_name, email, username, password_hash FROM users WHERE email = $1 OR username = $2",
    )
    .bind(email)
    .bind(username)
    .fetch_optional(&mut tx)
    .await?;
    tx.commit().await?;
    Ok(user)
}
