//! Data access layer
//!
//! - `influx` - InfluxDB 1.x HTTP client
//! - `traits` - Store trait the rollup pipeline depends on

pub mod influx;
pub mod traits;

pub use influx::{InfluxClient, InfluxError};
pub use traits::{ContinuousQuery, StatsStore};
