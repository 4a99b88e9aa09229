use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use axum_extra::extract::WithRejection;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::db;
use crate::error::AppError;
use crate::models::InvoiceDetail;
use crate::state::SharedState;

use super::{required_amount, required_text};

const INVOICE_NOT_FOUND: &str = "That invoice cannot be found in the DB";

#[derive(Deserialize)]
pub struct CreateInvoice {
    pub comp_code: Option<String>,
    pub amt: Option<f64>,
}

#[derive(Deserialize)]
pub struct PatchInvoice {
    pub amt: Option<f64>,
}

#[derive(Deserialize)]
pub struct UpdatePaidStatus {
    pub amt: Option<f64>,
    pub paid: Option<bool>,
}

type InvoiceId = WithRejection<Path<i32>, AppError>;

pub async fn list(State(state): State<SharedState>) -> Result<Json<Value>, AppError> {
    let invoices = db::invoices::list(&state.pool).await?;
    Ok(Json(json!({ "invoices": invoices })))
}

pub async fn get(
    State(state): State<SharedState>,
    WithRejection(Path(id), _): InvoiceId,
) -> Result<Json<Value>, AppError> {
    let row = db::invoices::find_with_company(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("That id does not exist in our DB".to_string()))?;

    Ok(Json(json!({ "invoice": InvoiceDetail::from(row) })))
}

pub async fn create(
    State(state): State<SharedState>,
    WithRejection(Json(req), _): WithRejection<Json<CreateInvoice>, AppError>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    const MISSING: &str = "Invoice requires a company code and amount";

    let comp_code =
        required_text(&req.comp_code).ok_or_else(|| AppError::BadRequest(MISSING.to_string()))?;
    let amt = required_amount(req.amt, MISSING)?;

    let invoice = db::invoices::create(&state.pool, comp_code, amt)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_foreign_key_violation() => {
                AppError::NotFound(format!("Company '{comp_code}' does not exist in our DB"))
            }
            _ => AppError::Database(e),
        })?;

    tracing::info!(id = invoice.id, comp_code = %invoice.comp_code, "invoice created");

    Ok((StatusCode::CREATED, Json(json!({ "invoice": invoice }))))
}

pub async fn patch_amount(
    State(state): State<SharedState>,
    WithRejection(Path(id), _): InvoiceId,
    WithRejection(Json(req), _): WithRejection<Json<PatchInvoice>, AppError>,
) -> Result<Json<Value>, AppError> {
    let amt = match required_amount(req.amt, "Invoice update requires an amount") {
        Ok(amt) => amt,
        Err(e) => return Err(not_found_or(&state, id, e).await),
    };

    let invoice = db::invoices::update_amount(&state.pool, id, amt)
        .await
        .map_err(not_found_on_missing_row)?;

    Ok(Json(json!({ "invoice": invoice })))
}

pub async fn update_paid_status(
    State(state): State<SharedState>,
    WithRejection(Path(id), _): InvoiceId,
    WithRejection(Json(req), _): WithRejection<Json<UpdatePaidStatus>, AppError>,
) -> Result<Json<Value>, AppError> {
    let validated = req
        .paid
        .ok_or_else(|| AppError::BadRequest("Invoice update requires a paid status".to_string()))
        .and_then(|paid| {
            required_amount(req.amt, "Invoice update requires an amount").map(|amt| (amt, paid))
        });
    let (amt, paid) = match validated {
        Ok(fields) => fields,
        Err(e) => return Err(not_found_or(&state, id, e).await),
    };

    let invoice = db::invoices::update_paid(&state.pool, id, amt, paid)
        .await
        .map_err(not_found_on_missing_row)?;

    Ok(Json(json!({ "invoice": invoice })))
}

pub async fn delete(
    State(state): State<SharedState>,
    WithRejection(Path(id), _): InvoiceId,
) -> Result<Json<Value>, AppError> {
    if !db::invoices::delete(&state.pool, id).await? {
        return Err(AppError::NotFound(INVOICE_NOT_FOUND.to_string()));
    }

    tracing::info!(id, "invoice deleted");

    Ok(Json(json!({ "status": "Deleted" })))
}

/// An unknown id reports 404 ahead of the validation error `e`.
async fn not_found_or(state: &SharedState, id: i32, e: AppError) -> AppError {
    match db::invoices::exists(&state.pool, id).await {
        Ok(true) => e,
        Ok(false) => AppError::NotFound(INVOICE_NOT_FOUND.to_string()),
        Err(db_err) => AppError::Database(db_err),
    }
}

fn not_found_on_missing_row(e: sqlx::Error) -> AppError {
    match e {
        sqlx::Error::RowNotFound => AppError::NotFound(INVOICE_NOT_FOUND.to_string()),
        _ => AppError::Database(e),
    }
}
