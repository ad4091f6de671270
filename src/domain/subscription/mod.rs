pub mod model;
pub mod repository;

pub use model::{Subscription, RESOURCE};
pub use repository::SubscriptionRepository;
