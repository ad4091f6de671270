//! SeaORM table models. One table per entity type; embedded value objects
//! are flattened into prefixed columns; coded enumerations are stored as
//! their external codes.

pub mod account_notification;
pub mod aggregate_node_ref;
pub mod application_information;
pub mod authorization;
pub mod customer_account;
pub mod interval_block;
pub mod interval_reading;
pub mod line_item;
pub mod meter_reading;
pub mod organisation;
pub mod pnode_ref;
pub mod power_quality_summary;
pub mod reading_type;
pub mod retail_customer;
pub mod subscription;
pub mod tariff_rider_ref;
pub mod usage_point;
pub mod usage_summary;
