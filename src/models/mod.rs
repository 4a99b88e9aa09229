mod company;
mod industry;
mod invoice;

pub use company::{Company, CompanyDetail, CompanySummary};
pub use industry::{CompanyIndustry, Industry, IndustryCompany};
pub use invoice::{Invoice, InvoiceDetail, InvoiceWithCompany};
