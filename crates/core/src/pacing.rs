// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pacing abstraction for testable passenger boarding delays

use crate::error::ConfigError;
use crate::id::{GroupId, PassengerId};
use rand::Rng;
use std::time::Duration;

/// Supplies how long each passenger takes to board
pub trait Pacing: Clone + Send + Sync + 'static {
    fn boarding_delay(&self, group: GroupId, passenger: PassengerId) -> Duration;
}

/// Uniformly random delay in `min..=max`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RandomPacing {
    min: Duration,
    max: Duration,
}

impl RandomPacing {
    pub const DEFAULT_MIN: Duration = Duration::from_millis(100);
    pub const DEFAULT_MAX: Duration = Duration::from_millis(300);

    pub fn new(min: Duration, max: Duration) -> Result<Self, ConfigError> {
        if min > max {
            return Err(ConfigError::InvalidDelayRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> Duration {
        self.min
    }

    pub fn max(&self) -> Duration {
        self.max
    }
}

impl Default for RandomPacing {
    fn default() -> Self {
        Self {
            min: Self::DEFAULT_MIN,
            max: Self::DEFAULT_MAX,
        }
    }
}

impl Pacing for RandomPacing {
    fn boarding_delay(&self, _group: GroupId, _passenger: PassengerId) -> Duration {
        let min = self.min.as_micros() as u64;
        let max = self.max.as_micros() as u64;
        Duration::from_micros(rand::rng().random_range(min..=max))
    }
}

/// Same delay for every passenger
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FixedPacing(pub Duration);

impl FixedPacing {
    pub fn instant() -> Self {
        Self(Duration::ZERO)
    }
}

impl Pacing for FixedPacing {
    fn boarding_delay(&self, _group: GroupId, _passenger: PassengerId) -> Duration {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_pacing_stays_in_range() {
        let pacing = RandomPacing::new(Duration::from_millis(5), Duration::from_millis(10)).unwrap();
        for p in 1..=200 {
            let delay = pacing.boarding_delay(GroupId(1), PassengerId(p));
            assert!(delay >= Duration::from_millis(5), "{:?} below min", delay);
            assert!(delay <= Duration::from_millis(10), "{:?} above max", delay);
        }
    }

    #[test]
    fn random_pacing_with_equal_bounds_is_constant() {
        let pacing = RandomPacing::new(Duration::from_millis(7), Duration::from_millis(7)).unwrap();
        assert_eq!(
            pacing.boarding_delay(GroupId(1), PassengerId(1)),
            Duration::from_millis(7)
        );
    }

    #[test]
    fn inverted_range_is_rejected() {
        let err = RandomPacing::new(Duration::from_millis(10), Duration::from_millis(5)).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDelayRange { .. }));
    }

    #[test]
    fn default_range_is_100_to_300ms() {
        let pacing = RandomPacing::default();
        assert_eq!(pacing.min(), Duration::from_millis(100));
        assert_eq!(pacing.max(), Duration::from_millis(300));
    }

    #[test]
    fn fixed_pacing_is_constant() {
        let pacing = FixedPacing(Duration::from_millis(3));
        assert_eq!(
            pacing.boarding_delay(GroupId(2), PassengerId(9)),
            Duration::from_millis(3)
        );
        assert_eq!(FixedPacing::instant().0, Duration::ZERO);
    }
}
