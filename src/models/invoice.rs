use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::CompanySummary;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Invoice {
    pub id: i32,
    pub comp_code: String,
    pub amt: f64,
    pub paid: bool,
    pub add_date: DateTime<Utc>,
    pub paid_date: Option<DateTime<Utc>>,
}

/// Row shape of the invoice/company join.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct InvoiceWithCompany {
    pub id: i32,
    pub comp_code: String,
    pub amt: f64,
    pub paid: bool,
    pub add_date: DateTime<Utc>,
    pub paid_date: Option<DateTime<Utc>>,
    pub name: String,
    pub description: String,
}

/// An invoice with its owning company nested under `company`.
#[derive(Debug, Clone, Serialize)]
pub struct InvoiceDetail {
    pub id: i32,
    pub amt: f64,
    pub paid: bool,
    pub add_date: DateTime<Utc>,
    pub paid_date: Option<DateTime<Utc>>,
    pub company: CompanySummary,
}

impl From<InvoiceWithCompany> for InvoiceDetail {
    fn from(row: InvoiceWithCompany) -> Self {
        Self {
            id: row.id,
            amt: row.amt,
            paid: row.paid,
            add_date: row.add_date,
            paid_date: row.paid_date,
            company: CompanySummary {
                code: row.comp_code,
                name: row.name,
                description: row.description,
            },
        }
    }
}
