pub mod model;
pub mod repository;

pub use model::{Authorization, AuthorizationStatus, GrantType, TokenType, RESOURCE};
pub use repository::AuthorizationRepository;
