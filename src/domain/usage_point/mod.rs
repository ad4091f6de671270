pub mod model;
pub mod repository;

pub use model::{
    AggregateNodeRef, PnodeRef, ServiceDeliveryPoint, TimeConfiguration, UsagePoint, RESOURCE,
};
pub use repository::UsagePointRepository;
