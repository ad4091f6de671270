pub mod model;
pub mod repository;

pub use model::{RetailCustomer, RESOURCE};
pub use repository::RetailCustomerRepository;
