//! Rollup hierarchy construction and backfill
//!
//! - **axes**: typed axes (period, dimension, state) and their engine
//!   parameters
//! - **catalog**: measurement naming grammar and the reset drop list
//! - **query**: InfluxQL statement construction per rollup target
//! - **builder**: registers one continuous query and backfills it
//! - **orchestrator**: guard, reset, Tier 1 and the Tier 2 chain
//! - **wait**: pluggable post-build indexing barrier

pub mod axes;
pub mod catalog;
mod builder;
pub mod orchestrator;
pub mod query;
pub mod wait;

pub use axes::{Dimension, Period, State};
pub use orchestrator::backfill_login_measurements;
pub use query::RollupSpec;
pub use wait::{FixedDelay, IndexWait, NoDelay};
