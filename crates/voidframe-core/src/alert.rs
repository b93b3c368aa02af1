//! Anomaly banner state machine: idle until a low-probability roll fires,
//! then active for a sampled number of ticks.

use crate::config::{ALERT_CHANCE, ALERT_TICKS_MAX, ALERT_TICKS_MIN};
use crate::rng::RandomSource;

/// The countdown only exists while active, so "active implies a positive
/// remaining count" holds by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertState {
    Idle,
    Active { remaining: u32 },
}

impl AlertState {
    pub fn is_active(&self) -> bool {
        matches!(self, AlertState::Active { .. })
    }

    /// One tick of the machine. A trigger roll happens only from `Idle`, so
    /// an active alert can never be re-triggered or extended; while active
    /// the countdown decrements and reaching zero drops back to `Idle`.
    pub fn tick(&mut self, rng: &mut dyn RandomSource) {
        *self = match *self {
            AlertState::Idle => {
                if rng.uniform() < ALERT_CHANCE {
                    let remaining =
                        rng.int_between(i64::from(ALERT_TICKS_MIN), i64::from(ALERT_TICKS_MAX));
                    AlertState::Active {
                        remaining: remaining as u32,
                    }
                } else {
                    AlertState::Idle
                }
            }
            AlertState::Active { remaining } if remaining <= 1 => AlertState::Idle,
            AlertState::Active { remaining } => AlertState::Active {
                remaining: remaining - 1,
            },
        };
    }
}

impl Default for AlertState {
    fn default() -> Self {
        AlertState::Idle
    }
}
