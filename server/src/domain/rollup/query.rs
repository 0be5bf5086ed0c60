//! InfluxQL statement construction for one rollup target

use super::axes::{Period, State};
use super::catalog;

/// Width of the sentinel bucket for cumulative periods: one bucket wide
/// enough to never roll over, so month/quarter/year totals accumulate in
/// place instead of re-bucketing.
const CUMULATIVE_BUCKET: &str = "15250w";

/// Everything needed to build one rollup's statements
#[derive(Debug, Clone)]
pub struct RollupSpec {
    /// Measurement the aggregation writes into
    pub target: String,
    /// Measurement the aggregation reads from (raw log for Tier 1, a finer
    /// rollup for Tier 2)
    pub source: String,
    pub period: Period,
    /// Dimension tags to group by, in name order
    pub group_tags: Vec<String>,
    /// Distinct-count over `user_id` (Tier 1) vs sum of the pre-counted
    /// field (Tier 2)
    pub is_unique: bool,
    /// Also select a plain count; set only for the minute period, which
    /// produces the distinct count and the raw total in one pass
    pub include_total: bool,
    pub state: Option<State>,
}

impl RollupSpec {
    /// The aggregation query. Embedded in the continuous query and also run
    /// once standalone to backfill existing history.
    pub fn aggregation_query(&self) -> String {
        let mut q = String::from("SELECT ");
        if self.is_unique {
            q.push_str("count(distinct(\"user_id\")) as distinct_count_user_id ");
            if self.include_total {
                q.push_str(", count(\"user_id\") as count_user_id ");
            }
        } else {
            q.push_str("sum(\"count_user_id\") as count_user_id ");
        }

        q.push_str(&format!("INTO \"{}\" FROM \"{}\" ", self.target, self.source));

        if let Some(state) = self.state {
            q.push_str(&format!("WHERE state = '{}' ", state.filter_value()));
        }

        let group_by = self.group_by_terms();
        if !group_by.is_empty() {
            q.push_str(&format!("GROUP BY {} ", group_by.join(", ")));
        }

        q.trim_end().to_string()
    }

    /// The `CREATE CONTINUOUS QUERY` registration statement
    pub fn continuous_query(&self, db_name: &str) -> String {
        let for_clause = self
            .period
            .resample_for()
            .map(|window| format!("FOR {window} "))
            .unwrap_or_default();
        format!(
            "CREATE CONTINUOUS QUERY \"{name}\" ON \"{db}\" RESAMPLE EVERY {every} {for_clause}BEGIN {query} END",
            name = catalog::continuous_query_name(&self.target),
            db = db_name,
            every = self.period.resample_every(),
            for_clause = for_clause,
            query = self.aggregation_query(),
        )
    }

    /// GROUP BY terms: dimension tags, then either the rolling time bucket
    /// with calendar tags (minute..week) or the cumulative sentinel bucket
    /// (month/quarter/year).
    fn group_by_terms(&self) -> Vec<String> {
        let mut terms = self.group_tags.clone();
        if let Some(bucket) = self.period.bucket() {
            terms.push("year".to_string());
            terms.push("month".to_string());
            terms.push("quarter".to_string());
            terms.push(format!("time({bucket})"));
        } else {
            terms.push(format!("time({CUMULATIVE_BUCKET})"));
            terms.push("year".to_string());
            if matches!(self.period, Period::Month | Period::Quarter) {
                terms.push(self.period.to_string());
            }
        }
        terms
    }
}
