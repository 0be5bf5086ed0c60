//! Typed axes of the rollup hierarchy
//!
//! Every rollup is identified by a (period, dimension, state) tuple. The
//! periods carry the engine parameters keyed off them: resample cadence,
//! retention window and time-bucket width.

use std::fmt;

// =============================================================================
// Period
// =============================================================================

/// Aggregation period, ordered fine to coarse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Period {
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Quarter,
    Year,
}

impl Period {
    pub const ALL: [Period; 7] = [
        Period::Minute,
        Period::Hour,
        Period::Day,
        Period::Week,
        Period::Month,
        Period::Quarter,
        Period::Year,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Period::Minute => "minute",
            Period::Hour => "hour",
            Period::Day => "day",
            Period::Week => "week",
            Period::Month => "month",
            Period::Quarter => "quarter",
            Period::Year => "year",
        }
    }

    /// Time-bucket width for the rolling-window GROUP BY; `None` for the
    /// cumulative periods (month/quarter/year). The non-week widths are one
    /// unit of the period; the week bucket is `1w,4d` so buckets align on
    /// ISO weeks (InfluxDB epoch weeks start Thursday).
    pub fn bucket(self) -> Option<&'static str> {
        match self {
            Period::Minute => Some("1m"),
            Period::Hour => Some("1h"),
            Period::Day => Some("1d"),
            Period::Week => Some("1w,4d"),
            Period::Month | Period::Quarter | Period::Year => None,
        }
    }

    /// Whether this period gets a rolling time bucket plus calendar tags
    pub fn is_grouping(self) -> bool {
        self.bucket().is_some()
    }

    /// `RESAMPLE EVERY` cadence, matched to the arrival rate of new data at
    /// each granularity
    pub fn resample_every(self) -> &'static str {
        match self {
            Period::Minute => "5m",
            Period::Hour => "1h",
            _ => "1d",
        }
    }

    /// `RESAMPLE FOR` retention window; absent for the cumulative periods,
    /// whose buckets never need re-resampling once written
    pub fn resample_for(self) -> Option<&'static str> {
        match self {
            Period::Minute => Some("10m"),
            Period::Hour => Some("2h"),
            Period::Day => Some("2d"),
            Period::Week => Some("2w"),
            Period::Month | Period::Quarter | Period::Year => None,
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// Dimension
// =============================================================================

/// Tag grouping for a rollup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    /// Per service-provider / identity-provider pair
    SpIdp,
    /// Per identity-provider
    Idp,
    /// Per service-provider
    Sp,
    /// No grouping tags
    Total,
}

impl Dimension {
    pub const ALL: [Dimension; 4] = [
        Dimension::SpIdp,
        Dimension::Idp,
        Dimension::Sp,
        Dimension::Total,
    ];

    /// Leading token of the measurement name
    pub fn prefix(self) -> &'static str {
        match self {
            Dimension::SpIdp => "sp_idp",
            Dimension::Idp => "idp",
            Dimension::Sp => "sp",
            Dimension::Total => "total",
        }
    }

    /// GROUP BY tags for this dimension, in name order
    pub fn tags(self, sp_tag: &str, idp_tag: &str) -> Vec<String> {
        match self {
            Dimension::SpIdp => vec![sp_tag.to_string(), idp_tag.to_string()],
            Dimension::Idp => vec![idp_tag.to_string()],
            Dimension::Sp => vec![sp_tag.to_string()],
            Dimension::Total => vec![],
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.prefix())
    }
}

// =============================================================================
// State
// =============================================================================

/// Login state filter; absence means unfiltered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    /// Production-accepted logins
    Pa,
    /// Test-accepted logins
    Ta,
}

impl State {
    /// The three state variants every rollup family fans out over
    pub const VARIANTS: [Option<State>; 3] = [Some(State::Pa), Some(State::Ta), None];

    /// Name infix token
    pub fn infix(self) -> &'static str {
        match self {
            State::Pa => "pa",
            State::Ta => "ta",
        }
    }

    /// Value matched in the WHERE clause
    pub fn filter_value(self) -> &'static str {
        match self {
            State::Pa => "prodaccepted",
            State::Ta => "testaccepted",
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.infix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buckets_are_one_period_unit_except_week() {
        assert_eq!(Period::Minute.bucket(), Some("1m"));
        assert_eq!(Period::Hour.bucket(), Some("1h"));
        assert_eq!(Period::Day.bucket(), Some("1d"));
        assert_eq!(Period::Week.bucket(), Some("1w,4d"));
    }

    #[test]
    fn test_grouping_periods() {
        let grouping: Vec<Period> = Period::ALL.into_iter().filter(|p| p.is_grouping()).collect();
        assert_eq!(
            grouping,
            vec![Period::Minute, Period::Hour, Period::Day, Period::Week]
        );
    }

    #[test]
    fn test_resample_every() {
        assert_eq!(Period::Minute.resample_every(), "5m");
        assert_eq!(Period::Hour.resample_every(), "1h");
        for period in [Period::Day, Period::Week, Period::Month, Period::Quarter, Period::Year] {
            assert_eq!(period.resample_every(), "1d");
        }
    }

    #[test]
    fn test_resample_for_only_on_grouping_periods() {
        assert_eq!(Period::Minute.resample_for(), Some("10m"));
        assert_eq!(Period::Hour.resample_for(), Some("2h"));
        assert_eq!(Period::Day.resample_for(), Some("2d"));
        assert_eq!(Period::Week.resample_for(), Some("2w"));
        for period in [Period::Month, Period::Quarter, Period::Year] {
            assert_eq!(period.resample_for(), None);
        }
    }

    #[test]
    fn test_dimension_tags() {
        assert_eq!(
            Dimension::SpIdp.tags("sp_entity_id", "idp_entity_id"),
            vec!["sp_entity_id", "idp_entity_id"]
        );
        assert_eq!(
            Dimension::Idp.tags("sp_entity_id", "idp_entity_id"),
            vec!["idp_entity_id"]
        );
        assert!(Dimension::Total.tags("sp_entity_id", "idp_entity_id").is_empty());
    }

    #[test]
    fn test_state_tokens() {
        assert_eq!(State::Pa.filter_value(), "prodaccepted");
        assert_eq!(State::Ta.filter_value(), "testaccepted");
        assert_eq!(State::Pa.infix(), "pa");
        assert_eq!(State::Ta.infix(), "ta");
    }
}
