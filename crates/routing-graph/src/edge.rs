//! Per-edge travel-time model: the exponential moving average filter that
//! turns raw speed observations into a smoothed current travel time.
//!
//! # EMA update
//!
//! On an observation `speed` (> 0):
//!
//! - measured travel time `m = base_length / max(speed, EPSILON)`
//! - smoothing coefficient `alpha = 1.0` on the first observation (replaces
//!   the synthetic initial estimate with real data), `0.2` afterwards
//!   (≈ 5-observation memory)
//! - `ema_travel_time = alpha * m + (1 - alpha) * ema_travel_time`
//! - `current_travel_time` tracks `ema_travel_time` exactly — they always
//!   move together, per the data-model invariant.

use routing_core::EdgeId;

use crate::error::GraphError;

/// Observations below this speed are treated as numerically zero to avoid
/// a division blow-up; real callers should never submit such values (`speed
/// <= 0` is rejected by [`EdgeModel::observe`] before this ever applies).
const EPSILON: f64 = 1e-6;

/// Smoothing coefficient used for every observation after the first.
const ALPHA_STEADY_STATE: f64 = 0.2;

/// Static and dynamic per-edge state.
#[derive(Debug, Clone, Copy)]
pub struct EdgeModel {
    pub id: EdgeId,
    pub from_node: routing_core::NodeId,
    pub to_node: routing_core::NodeId,
    pub base_length: f64,
    pub base_speed_limit: f64,
    pub current_travel_time: f64,
    pub ema_travel_time: f64,
    pub observation_count: u64,
}

impl EdgeModel {
    /// Construct a new edge with the synthetic initial estimate
    /// `base_length / base_speed_limit` seeded into both
    /// `current_travel_time` and `ema_travel_time`.
    ///
    /// # Panics
    ///
    /// Panics if `base_length < 0` or `base_speed_limit <= 0` — the loader
    /// must validate these before constructing an `EdgeModel`.
    pub fn new(
        id: EdgeId,
        from_node: routing_core::NodeId,
        to_node: routing_core::NodeId,
        base_length: f64,
        base_speed_limit: f64,
    ) -> Self {
        assert!(base_length >= 0.0, "base_length must be non-negative");
        assert!(base_speed_limit > 0.0, "base_speed_limit must be positive");

        let initial = base_length / base_speed_limit;
        Self {
            id,
            from_node,
            to_node,
            base_length,
            base_speed_limit,
            current_travel_time: initial,
            ema_travel_time: initial,
            observation_count: 0,
        }
    }

    /// Apply a speed observation, updating the EMA and
    /// `current_travel_time` in lockstep. Returns `BAD_SPEED` for
    /// `speed <= 0` without mutating state.
    pub fn observe(&mut self, speed: f64) -> Result<(), GraphError> {
        if speed <= 0.0 {
            return Err(GraphError::BadSpeed(speed));
        }

        let measured = self.base_length / speed.max(EPSILON);
        let alpha = if self.observation_count == 0 {
            1.0
        } else {
            ALPHA_STEADY_STATE
        };

        self.ema_travel_time = alpha * measured + (1.0 - alpha) * self.ema_travel_time;
        self.current_travel_time = self.ema_travel_time;
        self.observation_count += 1;
        Ok(())
    }

    /// The short-term travel-time prediction: the EMA once at least one
    /// observation has landed, otherwise the synthetic initial estimate
    /// (which equals `current_travel_time` before any observation).
    #[inline]
    pub fn predict(&self) -> f64 {
        if self.observation_count > 0 {
            self.ema_travel_time
        } else {
            self.current_travel_time
        }
    }
}
