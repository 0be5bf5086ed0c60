//! Store trait for the time-series backend
//!
//! The rollup pipeline depends only on this trait, so tests can inject a
//! recording in-memory store instead of a live InfluxDB instance.

use async_trait::async_trait;

use crate::data::influx::InfluxError;

/// A continuous query as reported by the engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContinuousQuery {
    /// Database the definition belongs to
    pub database: String,
    /// Definition name (`{measurement}_cq` for our own)
    pub name: String,
}

/// Collaborator surface of the time-series engine used by the rollup pipeline
#[async_trait]
pub trait StatsStore: Send + Sync {
    /// Names of all databases known to the engine
    async fn list_databases(&self) -> Result<Vec<String>, InfluxError>;

    async fn create_database(&self, name: &str) -> Result<(), InfluxError>;

    async fn drop_database(&self, name: &str) -> Result<(), InfluxError>;

    /// Drop a measurement; absence is not an error
    async fn drop_measurement(&self, db: &str, measurement: &str) -> Result<(), InfluxError>;

    /// Submit a standalone query against a database (aggregation backfill)
    async fn run_query(&self, db: &str, query: &str) -> Result<(), InfluxError>;

    /// Submit a `CREATE CONTINUOUS QUERY` registration statement
    async fn create_continuous_query(&self, db: &str, statement: &str) -> Result<(), InfluxError>;

    /// All continuous query definitions the engine currently holds
    async fn list_continuous_queries(&self) -> Result<Vec<ContinuousQuery>, InfluxError>;

    /// Drop a continuous query by name and owning database
    async fn drop_continuous_query(&self, db: &str, name: &str) -> Result<(), InfluxError>;

    /// Write raw points in line protocol (used by seeding only)
    async fn write_points(&self, db: &str, lines: &str) -> Result<(), InfluxError>;
}
