use sqlx::PgPool;

use crate::models::{CompanyIndustry, Industry, IndustryCompany};

pub async fn list(pool: &PgPool) -> Result<Vec<Industry>, sqlx::Error> {
    sqlx::query_as::<_, Industry>("SELECT code, field FROM industries")
        .fetch_all(pool)
        .await
}

pub async fn find_by_code(pool: &PgPool, code: &str) -> Result<Option<Industry>, sqlx::Error> {
    sqlx::query_as::<_, Industry>("SELECT code, field FROM industries WHERE code = $1")
        .bind(code)
        .fetch_optional(pool)
        .await
}

pub async fn companies_in(pool: &PgPool, code: &str) -> Result<Vec<IndustryCompany>, sqlx::Error> {
    sqlx::query_as::<_, IndustryCompany>(
        "SELECT c.name, i.field
         FROM companies AS c
         JOIN comp_indust AS ci ON c.code = ci.comp_code
         JOIN industries AS i ON ci.ind_code = i.code
         WHERE i.code = $1",
    )
    .bind(code)
    .fetch_all(pool)
    .await
}

pub async fn create(pool: &PgPool, code: &str, field: &str) -> Result<Industry, sqlx::Error> {
    sqlx::query_as::<_, Industry>(
        "INSERT INTO industries (code, field) VALUES ($1, $2) RETURNING code, field",
    )
    .bind(code)
    .bind(field)
    .fetch_one(pool)
    .await
}

pub async fn associate(
    pool: &PgPool,
    comp_code: &str,
    ind_code: &str,
) -> Result<Vec<CompanyIndustry>, sqlx::Error> {
    sqlx::query_as::<_, CompanyIndustry>(
        "INSERT INTO comp_indust (comp_code, ind_code) VALUES ($1, $2)
         RETURNING comp_code, ind_code",
    )
    .bind(comp_code)
    .bind(ind_code)
    .fetch_all(pool)
    .await
}
