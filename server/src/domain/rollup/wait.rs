//! Post-build indexing wait strategies
//!
//! The engine offers no "indexing complete" signal, so the barrier between
//! dependent build phases is a conservative fixed delay sized to the
//! target's cadence. The strategy is injected so tests and small synthetic
//! datasets can run with zero delay.

use std::time::Duration;

use async_trait::async_trait;

use super::axes::Period;

/// Barrier run after each rollup build, before the next dependent build
#[async_trait]
pub trait IndexWait: Send + Sync {
    async fn wait(&self, period: Period);
}

/// Fixed cooldown: 10 minutes after minute targets, 5 after hour targets,
/// 1 minute otherwise
pub struct FixedDelay;

impl FixedDelay {
    fn delay(period: Period) -> Duration {
        match period {
            Period::Minute => Duration::from_secs(10 * 60),
            Period::Hour => Duration::from_secs(5 * 60),
            _ => Duration::from_secs(60),
        }
    }
}

#[async_trait]
impl IndexWait for FixedDelay {
    async fn wait(&self, period: Period) {
        let delay = Self::delay(period);
        tracing::debug!(
            period = %period,
            secs = delay.as_secs(),
            "Waiting for engine indexing"
        );
        tokio::time::sleep(delay).await;
    }
}

/// Zero-delay strategy for tests and seed-sized datasets
pub struct NoDelay;

#[async_trait]
impl IndexWait for NoDelay {
    async fn wait(&self, _period: Period) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_delays() {
        assert_eq!(FixedDelay::delay(Period::Minute), Duration::from_secs(600));
        assert_eq!(FixedDelay::delay(Period::Hour), Duration::from_secs(300));
        for period in [
            Period::Day,
            Period::Week,
            Period::Month,
            Period::Quarter,
            Period::Year,
        ] {
            assert_eq!(FixedDelay::delay(period), Duration::from_secs(60));
        }
    }

    #[tokio::test]
    async fn test_no_delay_returns_immediately() {
        let start = std::time::Instant::now();
        NoDelay.wait(Period::Minute).await;
        assert!(start.elapsed() < Duration::from_millis(50));
    }
}
