use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use axum_extra::extract::WithRejection;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::db;
use crate::error::AppError;
use crate::slug::slugify;
use crate::state::SharedState;

use super::{required_text, CodePath};

#[derive(Deserialize)]
pub struct CreateIndustry {
    pub field: Option<String>,
}

#[derive(Deserialize)]
pub struct AssociateIndustry {
    pub industry_code: Option<String>,
}

pub async fn list(State(state): State<SharedState>) -> Result<Json<Value>, AppError> {
    let industries = db::industries::list(&state.pool).await?;
    Ok(Json(json!({ "industries": industries })))
}

pub async fn get(
    State(state): State<SharedState>,
    WithRejection(Path(code), _): CodePath,
) -> Result<Json<Value>, AppError> {
    db::industries::find_by_code(&state.pool, &code)
        .await?
        .ok_or_else(|| AppError::NotFound("That industry cannot be found".to_string()))?;

    let companies = db::industries::companies_in(&state.pool, &code).await?;
    Ok(Json(json!({ "companies": companies })))
}

pub async fn create(
    State(state): State<SharedState>,
    WithRejection(Json(req), _): WithRejection<Json<CreateIndustry>, AppError>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let field = required_text(&req.field)
        .ok_or_else(|| AppError::BadRequest("Please give a unique field name".to_string()))?;

    let code = slugify(field);
    if code.is_empty() {
        return Err(AppError::BadRequest(
            "Industry field must contain at least one letter or digit".to_string(),
        ));
    }

    let industry = db::industries::create(&state.pool, &code, field)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                AppError::Conflict("An industry with this field or code already exists".to_string())
            }
            _ => AppError::Database(e),
        })?;

    tracing::info!(code = %industry.code, "industry created");

    Ok((StatusCode::CREATED, Json(json!({ "industry": industry }))))
}

pub async fn associate(
    State(state): State<SharedState>,
    WithRejection(Path(code), _): CodePath,
    WithRejection(Json(req), _): WithRejection<Json<AssociateIndustry>, AppError>,
) -> Result<Json<Value>, AppError> {
    db::companies::find_by_code(&state.pool, &code)
        .await?
        .ok_or_else(|| AppError::NotFound("That company is not in our DB".to_string()))?;

    let industry_code = required_text(&req.industry_code).ok_or_else(|| {
        AppError::BadRequest(
            "Please include a valid industry code to associate with this company".to_string(),
        )
    })?;

    db::industries::find_by_code(&state.pool, industry_code)
        .await?
        .ok_or_else(|| AppError::NotFound("That industry cannot be found".to_string()))?;

    let association = db::industries::associate(&state.pool, &code, industry_code)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                AppError::Conflict("That company is already in this industry".to_string())
            }
            _ => AppError::Database(e),
        })?;

    tracing::info!(comp_code = %code, ind_code = %industry_code, "industry associated");

    Ok(Json(json!({ "association": association })))
}
