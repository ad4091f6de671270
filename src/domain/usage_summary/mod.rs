pub mod model;
pub mod repository;

pub use model::{BillingChargeSource, LineItem, TariffRiderRef, UsageSummary, RESOURCE};
pub use repository::UsageSummaryRepository;
