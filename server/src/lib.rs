//! Login statistics rollup service.
//!
//! Maintains a hierarchy of pre-aggregated InfluxDB measurements (minute,
//! hour, day, week, month, quarter, year) derived from a single raw login
//! measurement. Each rollup is registered as a continuous query and
//! backfilled once over existing history, in dependency order.

pub mod app;
pub mod core;
pub mod data;
pub mod domain;
