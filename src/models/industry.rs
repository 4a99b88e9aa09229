use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Industry {
    pub code: String,
    pub field: String,
}

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct CompanyIndustry {
    pub comp_code: String,
    pub ind_code: String,
}

/// One company filed under an industry, as returned by the industry lookup.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct IndustryCompany {
    pub name: String,
    pub field: String,
}
