//! Measurement naming and the reset drop list
//!
//! Names follow the grammar `[{dim}_]{state}users_{period}[{uniq}]`, e.g.
//! `sp_idp_users_minute`, `idp_pa_users_hour_unique`, `total_ta_users_week`.
//! Minute rollups never carry the `_unique` suffix even though they are
//! computed with the distinct-count aggregation.

use super::axes::{Dimension, Period, State};

/// Build the measurement name for one axis tuple
pub fn measurement_name(
    dimension: Dimension,
    state: Option<State>,
    period: Period,
    unique: bool,
) -> String {
    let state_infix = state.map(|s| format!("{}_", s.infix())).unwrap_or_default();
    let unique_suffix = if unique && period != Period::Minute {
        "_unique"
    } else {
        ""
    };
    format!(
        "{}_{}users_{}{}",
        dimension.prefix(),
        state_infix,
        period,
        unique_suffix
    )
}

/// Continuous query name owning a measurement
pub fn continuous_query_name(measurement: &str) -> String {
    format!("{measurement}_cq")
}

/// Every measurement a full rebuild owns; the reset drop list.
///
/// Flattened over all periods, dimensions and state variants, plus the
/// `_unique` family for every non-minute period.
pub fn drop_catalog() -> Vec<String> {
    let mut names = Vec::new();
    for period in Period::ALL {
        for unique in [false, true] {
            if unique && period == Period::Minute {
                continue;
            }
            for dimension in Dimension::ALL {
                for state in State::VARIANTS {
                    names.push(measurement_name(dimension, state, period, unique));
                }
            }
        }
    }
    names
}
