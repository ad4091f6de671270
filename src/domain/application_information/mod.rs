pub mod model;
pub mod repository;

pub use model::{ApplicationInformation, RESOURCE};
pub use repository::ApplicationInformationRepository;
