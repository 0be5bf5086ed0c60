//! Drops and recreates the full rollup hierarchy, then backfills it
//!
//! Strictly sequential: Tier 1 rollups aggregate the raw login log, Tier 2
//! rollups aggregate the previous level's output, so a coarser rollup must
//! never be built before its source exists and has been backfilled.

use crate::core::config::AppConfig;
use crate::data::influx::InfluxError;
use crate::data::traits::StatsStore;

use super::axes::{Dimension, Period, State};
use super::builder::RollupBuilder;
use super::catalog;
use super::query::RollupSpec;
use super::wait::IndexWait;

/// Tier 2 chain: each coarse period is derived from the fine rollup listed
/// with it. Order is load-bearing: a link's source must be fully backfilled
/// before the link runs.
const DERIVED_CHAIN: [(Period, Period); 6] = [
    (Period::Hour, Period::Minute),
    (Period::Day, Period::Hour),
    (Period::Week, Period::Day),
    (Period::Month, Period::Week),
    (Period::Quarter, Period::Week),
    (Period::Year, Period::Week),
];

/// Drop and recreate all rollup measurements and continuous queries, and
/// backfill the rollups from the raw login measurement.
///
/// A missing target database is treated as "not yet provisioned" and skips
/// the whole procedure. Re-invocation is safe: the reset is idempotent and
/// rebuilds the identical hierarchy.
pub async fn backfill_login_measurements(
    config: &AppConfig,
    store: &dyn StatsStore,
    wait: &dyn IndexWait,
) -> Result<(), InfluxError> {
    let db_name = &config.influx.database;
    let log = &config.log;

    let databases = store.list_databases().await?;
    if !databases.iter().any(|name| name == db_name) {
        tracing::info!(database = %db_name, "Database not provisioned, skipping backfill");
        return Ok(());
    }

    reset(store, db_name).await?;

    let builder = RollupBuilder::new(store, wait, db_name);

    // Tier 1: distinct-count rollups straight from the raw login log. The
    // minute period also carries a plain count, which Tier 2 sums up the
    // chain.
    for period in Period::ALL {
        for state in State::VARIANTS {
            for dimension in Dimension::ALL {
                let spec = RollupSpec {
                    target: catalog::measurement_name(dimension, state, period, true),
                    source: log.measurement.clone(),
                    period,
                    group_tags: dimension.tags(&log.sp_tag, &log.idp_tag),
                    is_unique: true,
                    include_total: period == Period::Minute,
                    state,
                };
                builder.build(&spec).await?;
            }
        }
    }

    // Tier 2: sum rollups derived from the previous level's output. The
    // state split is already baked into the source measurement name; the
    // source carries no state field to filter on.
    for (coarse, fine) in DERIVED_CHAIN {
        for state in State::VARIANTS {
            for dimension in Dimension::ALL {
                let spec = RollupSpec {
                    target: catalog::measurement_name(dimension, state, coarse, false),
                    source: catalog::measurement_name(dimension, state, fine, false),
                    period: coarse,
                    group_tags: dimension.tags(&log.sp_tag, &log.idp_tag),
                    is_unique: false,
                    include_total: false,
                    state: None,
                };
                builder.build(&spec).await?;
            }
        }
    }

    tracing::info!(database = %db_name, "Rollup hierarchy rebuilt");
    Ok(())
}

/// Drop everything a previous rebuild may have left behind.
///
/// Measurements come from the catalog; continuous queries are discovered
/// from the engine rather than replayed from the catalog, so definitions
/// from older schema revisions are removed too.
async fn reset(store: &dyn StatsStore, db_name: &str) -> Result<(), InfluxError> {
    let measurements = catalog::drop_catalog();
    tracing::debug!(count = measurements.len(), "Dropping rollup measurements");
    for measurement in measurements {
        store.drop_measurement(db_name, &measurement).await?;
    }

    let existing = store.list_continuous_queries().await?;
    tracing::debug!(count = existing.len(), "Dropping existing continuous queries");
    for cq in existing {
        store.drop_continuous_query(&cq.database, &cq.name).await?;
    }
    Ok(())
}
