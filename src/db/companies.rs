use sqlx::PgPool;

use crate::models::Company;

pub async fn list(pool: &PgPool) -> Result<Vec<Company>, sqlx::Error> {
    sqlx::query_as::<_, Company>("SELECT code, name, description FROM companies")
        .fetch_all(pool)
        .await
}

pub async fn find_by_code(pool: &PgPool, code: &str) -> Result<Option<Company>, sqlx::Error> {
    sqlx::query_as::<_, Company>("SELECT code, name, description FROM companies WHERE code = $1")
        .bind(code)
        .fetch_optional(pool)
        .await
}

pub async fn create(
    pool: &PgPool,
    code: &str,
    name: &str,
    description: &str,
) -> Result<Company, sqlx::Error> {
    sqlx::query_as::<_, Company>(
        "INSERT INTO companies (code, name, description) VALUES ($1, $2, $3)
         RETURNING code, name, description",
    )
    .bind(code)
    .bind(name)
    .bind(description)
    .fetch_one(pool)
    .await
}

/// Returns `RowNotFound` when no company has `code`.
pub async fn update(
    pool: &PgPool,
    code: &str,
    name: &str,
    description: &str,
) -> Result<Company, sqlx::Error> {
    sqlx::query_as::<_, Company>(
        "UPDATE companies SET name = $2, description = $3 WHERE code = $1
         RETURNING code, name, description",
    )
    .bind(code)
    .bind(name)
    .bind(description)
    .fetch_one(pool)
    .await
}

/// Returns whether a row was removed.
pub async fn delete(pool: &PgPool, code: &str) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM companies WHERE code = $1")
        .bind(code)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
