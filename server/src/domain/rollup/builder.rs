//! Builds one rollup target against the store

use crate::data::influx::InfluxError;
use crate::data::traits::StatsStore;

use super::query::RollupSpec;
use super::wait::IndexWait;

/// Registers continuous queries and backfills their history, one target at
/// a time. Any submission error aborts the caller's rebuild; later tiers
/// cannot safely run against an incomplete upstream tier.
pub struct RollupBuilder<'a> {
    store: &'a dyn StatsStore,
    wait: &'a dyn IndexWait,
    db_name: &'a str,
}

impl<'a> RollupBuilder<'a> {
    pub fn new(store: &'a dyn StatsStore, wait: &'a dyn IndexWait, db_name: &'a str) -> Self {
        Self {
            store,
            wait,
            db_name,
        }
    }

    /// Register the continuous query, run the aggregation once over
    /// existing history, then wait out the engine's indexing lag so the
    /// next dependent target reads complete data.
    pub async fn build(&self, spec: &RollupSpec) -> Result<(), InfluxError> {
        let cq = spec.continuous_query(self.db_name);
        tracing::info!("{cq}");
        self.store.create_continuous_query(self.db_name, &cq).await?;

        let query = spec.aggregation_query();
        tracing::info!("{query}");
        self.store.run_query(self.db_name, &query).await?;

        self.wait.wait(spec.period).await;
        Ok(())
    }
}
