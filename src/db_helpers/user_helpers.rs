use sqlx::{Sqlite, SqlitePool};

use crate::{data_formats::SignupRequest, errors::RequestError};

/// Inserts a user row and returns the new id. The `password` field of the
/// request must already hold the Argon2 hash, never the plaintext.
pub async fn insert_user(pool: &SqlitePool, user: &SignupRequest) -> Result<i64, RequestError> {
    let mut tx = pool.begin().await?;
    let user_id = sqlx::query_scalar::<Sqlite, i64>(
        r#"
        INSERT INTO users (full_name, email, username, password_hash)
        VALUES ($1, $2, $3, $4)
        RETURNING id
        "#,
    )
    .bind(&user.full_name)
    .bind(&user.email)
    .bind(&user.username)
    .bind(&user.password)
    .fetch_one(&mut tx)
    .await?;
    tx.commit().await?;
    Ok(user_id)
}
