pub mod model;
pub mod repository;

pub use model::{IntervalBlock, IntervalReading, MeterReading, INTERVAL_BLOCK, METER_READING};
pub use repository::{IntervalBlockRepository, MeterReadingRepository};
