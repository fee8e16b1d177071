pub mod config;
pub mod db;
pub mod errors;
pub mod models;
pub mod queries;
pub mod seed;
pub mod session;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::Config;
pub use db::Database;
pub use errors::{OperationError, Result};
pub use session::{ConsoleSink, ObservationSink, RecordingSink, SessionReport, SessionRunner};
