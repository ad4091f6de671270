//! API request handlers

pub mod customer;
pub mod health;
pub mod metrics;
pub mod oauth;
pub mod usage;
