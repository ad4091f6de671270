pub mod model;
pub mod repository;

pub use model::{ElectricPowerQualitySummary, RESOURCE};
pub use repository::ElectricPowerQualitySummaryRepository;
