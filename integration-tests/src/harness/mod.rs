pub mod fixtures;
pub mod tracing;

pub use fixtures::MeasurementFile;
pub use tracing::{CapturedEvent, init_test_tracing};
