use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Company {
    pub code: String,
    pub name: String,
    pub description: String,
}

/// A company together with the ids of the invoices it owns. `invoices` is
/// `None` rather than empty when the company has no invoices.
#[derive(Debug, Clone, Serialize)]
pub struct CompanyDetail {
    #[serde(flatten)]
    pub company: Company,
    pub invoices: Option<Vec<i32>>,
}

impl CompanyDetail {
    pub fn new(company: Company, invoice_ids: Vec<i32>) -> Self {
        let invoices = if invoice_ids.is_empty() {
            None
        } else {
            Some(invoice_ids)
        };
        Self { company, invoices }
    }
}

/// Company fields nested inside an invoice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanySummary {
    pub code: String,
    pub name: String,
    pub description: String,
}
