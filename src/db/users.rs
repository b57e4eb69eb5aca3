//! User repository: create (insert-if-absent) and lookup by email.

use crate::error::{AppError, AppResult};
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use super::DbPool;

/// User record as stored. `password_hash` never leaves the db/auth layers.
#[derive(Debug, FromRow)]
pub struct UserRow {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub phone: String,
    pub role: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Insert a new user. Atomic insert-if-absent: the UNIQUE constraint on
/// `email` decides the winner of concurrent registrations, so there is no
/// check-then-insert window.
pub async fn user_create(
    pool: &DbPool,
    email: &str,
    name: &str,
    phone: &str,
    role: &str,
    password_hash: &str,
) -> AppResult<UserRow> {
    let row = sqlx::query_as::<_, UserRow>(
        r#"
        INSERT INTO users (id, email, name, phone, role, password_hash)
        VALUES ($1, $2, $3, $4, $5, $6)
        ON CONFLICT (email) DO NOTHING
        RETURNING id, email, name, phone, role, password_hash, created_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(email)
    .bind(name)
    .bind(phone)
    .bind(role)
    .bind(password_hash)
    .fetch_optional(pool)
    .await?;
    row.ok_or(AppError::DuplicateEmail)
}

/// Point read by email, exactly as given (emails are case-sensitive as stored).
pub async fn user_find_by_email(pool: &DbPool, email: &str) -> AppResult<Option<UserRow>> {
    let row = sqlx::query_as::<_, UserRow>(
        "SELECT id, email, name, phone, role, password_hash, created_at FROM users WHERE email = $1",
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}
