use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use axum_extra::extract::WithRejection;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::db;
use crate::error::AppError;
use crate::models::CompanyDetail;
use crate::slug::slugify;
use crate::state::SharedState;

use super::{required_text, CodePath};

const COMPANY_NOT_FOUND: &str = "That company cannot be found in the DB";

#[derive(Deserialize)]
pub struct CreateCompany {
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateCompany {
    pub name: Option<String>,
    pub description: Option<String>,
}

pub async fn list(State(state): State<SharedState>) -> Result<Json<Value>, AppError> {
    let companies = db::companies::list(&state.pool).await?;
    Ok(Json(json!({ "companies": companies })))
}

pub async fn get(
    State(state): State<SharedState>,
    WithRejection(Path(code), _): CodePath,
) -> Result<Json<Value>, AppError> {
    let company = db::companies::find_by_code(&state.pool, &code)
        .await?
        .ok_or_else(|| AppError::NotFound("That company does not exist in our DB".to_string()))?;

    let invoice_ids = db::invoices::ids_for_company(&state.pool, &code).await?;

    Ok(Json(json!({ "company": CompanyDetail::new(company, invoice_ids) })))
}

pub async fn create(
    State(state): State<SharedState>,
    WithRejection(Json(req), _): WithRejection<Json<CreateCompany>, AppError>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let (Some(name), Some(description)) = (required_text(&req.name), required_text(&req.description))
    else {
        return Err(AppError::BadRequest(
            "Company requires a name and description".to_string(),
        ));
    };

    let code = slugify(name);
    if code.is_empty() {
        return Err(AppError::BadRequest(
            "Company name must contain at least one letter or digit".to_string(),
        ));
    }

    let company = db::companies::create(&state.pool, &code, name, description)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                AppError::Conflict("A company with this name or code already exists".to_string())
            }
            _ => AppError::Database(e),
        })?;

    tracing::info!(code = %company.code, "company created");

    Ok((StatusCode::CREATED, Json(json!({ "company": company }))))
}

pub async fn update(
    State(state): State<SharedState>,
    WithRejection(Path(code), _): CodePath,
    WithRejection(Json(req), _): WithRejection<Json<UpdateCompany>, AppError>,
) -> Result<Json<Value>, AppError> {
    let (Some(name), Some(description)) = (required_text(&req.name), required_text(&req.description))
    else {
        // An unknown code reports 404 even when the body is also incomplete.
        if db::companies::find_by_code(&state.pool, &code).await?.is_none() {
            return Err(AppError::NotFound(COMPANY_NOT_FOUND.to_string()));
        }
        return Err(AppError::BadRequest(
            "Company update requires a name and description".to_string(),
        ));
    };

    let company = db::companies::update(&state.pool, &code, name, description)
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => {
                AppError::NotFound(COMPANY_NOT_FOUND.to_string())
            }
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                AppError::Conflict("A company with this name already exists".to_string())
            }
            _ => AppError::Database(e),
        })?;

    Ok(Json(json!({ "company": company })))
}

pub async fn delete(
    State(state): State<SharedState>,
    WithRejection(Path(code), _): CodePath,
) -> Result<Json<Value>, AppError> {
    if !db::companies::delete(&state.pool, &code).await? {
        return Err(AppError::NotFound(
            COMPANY_NOT_FOUND.to_string(),
        ));
    }

    tracing::info!(%code, "company deleted");

    Ok(Json(json!({ "status": "Deleted" })))
}
