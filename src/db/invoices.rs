use sqlx::PgPool;

use crate::models::{Invoice, InvoiceWithCompany};

const INVOICE_COLUMNS: &str = "id, comp_code, amt, paid, add_date, paid_date";

pub async fn list(pool: &PgPool) -> Result<Vec<Invoice>, sqlx::Error> {
    sqlx::query_as::<_, Invoice>(&format!("SELECT {INVOICE_COLUMNS} FROM invoices"))
        .fetch_all(pool)
        .await
}

pub async fn ids_for_company(pool: &PgPool, comp_code: &str) -> Result<Vec<i32>, sqlx::Error> {
    sqlx::query_scalar::<_, i32>("SELECT id FROM invoices WHERE comp_code = $1 ORDER BY id")
        .bind(comp_code)
        .fetch_all(pool)
        .await
}

pub async fn find_with_company(
    pool: &PgPool,
    id: i32,
) -> Result<Option<InvoiceWithCompany>, sqlx::Error> {
    sqlx::query_as::<_, InvoiceWithCompany>(
        "SELECT i.id, i.comp_code, i.amt, i.paid, i.add_date, i.paid_date,
                c.name, c.description
         FROM invoices AS i
         JOIN companies AS c ON i.comp_code = c.code
         WHERE i.id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn exists(pool: &PgPool, id: i32) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM invoices WHERE id = $1)")
        .bind(id)
        .fetch_one(pool)
        .await
}

pub async fn create(pool: &PgPool, comp_code: &str, amt: f64) -> Result<Invoice, sqlx::Error> {
    sqlx::query_as::<_, Invoice>(&format!(
        "INSERT INTO invoices (comp_code, amt) VALUES ($1, $2) RETURNING {INVOICE_COLUMNS}"
    ))
    .bind(comp_code)
    .bind(amt)
    .fetch_one(pool)
    .await
}

/// Changes only the amount. Returns `RowNotFound` when no invoice has `id`.
pub async fn update_amount(pool: &PgPool, id: i32, amt: f64) -> Result<Invoice, sqlx::Error> {
    sqlx::query_as::<_, Invoice>(&format!(
        "UPDATE invoices SET amt = $2 WHERE id = $1 RETURNING {INVOICE_COLUMNS}"
    ))
    .bind(id)
    .bind(amt)
    .fetch_one(pool)
    .await
}

/// Sets amount and paid status. `paid_date` is stamped on the unpaid to paid
/// transition, kept while the invoice stays paid and cleared once unpaid.
/// Returns `RowNotFound` when no invoice has `id`.
pub async fn update_paid(
    pool: &PgPool,
    id: i32,
    amt: f64,
    paid: bool,
) -> Result<Invoice, sqlx::Error> {
    sqlx::query_as::<_, Invoice>(&format!(
        "UPDATE invoices
         SET amt = $2,
             paid = $3,
             paid_date = CASE
                 WHEN $3 AND NOT paid THEN now()
                 WHEN $3 THEN paid_date
                 ELSE NULL
             END
         WHERE id = $1
         RETURNING {INVOICE_COLUMNS}"
    ))
    .bind(id)
    .bind(amt)
    .bind(paid)
    .fetch_one(pool)
    .await
}

/// Returns whether a row was removed.
pub async fn delete(pool: &PgPool, id: i32) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM invoices WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
