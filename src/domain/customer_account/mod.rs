pub mod model;
pub mod repository;

pub use model::{AccountNotification, CustomerAccount, Organisation, RESOURCE};
pub use repository::CustomerAccountRepository;
