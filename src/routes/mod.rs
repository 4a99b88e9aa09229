pub mod companies;
pub mod industries;
pub mod invoices;

use axum::extract::Path;
use axum::routing::{get, post};
use axum::Router;
use axum_extra::extract::WithRejection;

use crate::error::AppError;
use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        // Companies
        .route("/companies", get(companies::list).post(companies::create))
        .route(
            "/companies/{code}",
            get(companies::get)
                .patch(companies::update)
                .delete(companies::delete),
        )
        // Invoices
        .route("/invoices", get(invoices::list).post(invoices::create))
        .route(
            "/invoices/{id}",
            get(invoices::get)
                .patch(invoices::patch_amount)
                .put(invoices::update_paid_status)
                .delete(invoices::delete),
        )
        // Industries
        .route("/industries", get(industries::list).post(industries::create))
        .route("/industries/{code}", get(industries::get))
        .route("/industries/company/{code}", post(industries::associate))
}

/// Natural-key path segment. Undecodable keys become a structured 404.
type CodePath = WithRejection<Path<String>, AppError>;

/// A present, non-empty string field.
fn required_text<'a>(value: &'a Option<String>) -> Option<&'a str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// A present amount. Zero and negative amounts are rejected with `message`.
fn required_amount(value: Option<f64>, message: &str) -> Result<f64, AppError> {
    match value {
        Some(amt) if amt.is_finite() && amt > 0.0 => Ok(amt),
        Some(_) => Err(AppError::BadRequest(
            "Amount must be a positive number".to_string(),
        )),
        None => Err(AppError::BadRequest(message.to_string())),
    }
}
