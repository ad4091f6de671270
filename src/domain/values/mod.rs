//! Embedded value objects.
//!
//! None of these carry identity or an independent lifecycle; they are copied
//! by value into their owning entity and flattened into the owner's columns
//! in storage.

pub mod contact;
pub mod interval;
pub mod lifecycle;
pub mod measurement;
pub mod per_cent;

pub use contact::{ElectronicAddress, Status, StreetAddress, TelephoneNumber};
pub use interval::DateTimeInterval;
pub use lifecycle::{AcceptanceTest, LifecycleDates};
pub use measurement::{RationalNumber, SummaryMeasurement};
pub use per_cent::PerCent;
