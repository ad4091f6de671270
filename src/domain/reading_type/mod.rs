pub mod model;
pub mod repository;

pub use model::{ReadingType, RESOURCE};
pub use repository::ReadingTypeRepository;
