//! Tunable simulation parameters.
//!
//! [`WireConfig`] starts from the values in [`crate::constants`] and can be
//! swapped at runtime through [`crate::Simulation::reconfigure`]; node history
//! is preserved unless the node count itself changes.

use crate::constants::*;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("a cable needs at least 2 nodes, got {0}")]
    TooFewNodes(usize),
    #[error("rest length must be positive, got {0}")]
    RestLength(f32),
    #[error("damping must lie in [0, 1], got {0}")]
    Damping(f32),
    #[error("tension range ratio must be positive, got {0}")]
    TensionRange(f32),
    #[error("solver needs at least one iteration")]
    NoIterations,
    #[error("`{0}` must be finite")]
    NonFinite(&'static str),
}

#[derive(Clone, Debug, PartialEq)]
pub struct WireConfig {
    pub node_count: usize,
    pub rest_length: f32,
    pub gravity: f32,
    pub damping: f32,
    pub iterations: usize,
    pub scroll_detach_offset: f32,
    pub reattach_distance: f32,
    pub compact_max_width: f32,
    pub tension_slack_ratio: f32,
    pub tension_range_ratio: f32,
}

impl Default for WireConfig {
    fn default() -> Self {
        Self {
            node_count: NODE_COUNT,
            rest_length: REST_LENGTH,
            gravity: GRAVITY,
            damping: DAMPING,
            iterations: SOLVER_ITERATIONS,
            scroll_detach_offset: SCROLL_DETACH_OFFSET,
            reattach_distance: REATTACH_DISTANCE,
            compact_max_width: COMPACT_VIEWPORT_MAX_WIDTH,
            tension_slack_ratio: TENSION_SLACK_RATIO,
            tension_range_ratio: TENSION_RANGE_RATIO,
        }
    }
}

impl WireConfig {
    /// Rest distance between adjacent nodes.
    #[inline]
    pub fn segment_length(&self) -> f32 {
        self.rest_length / (self.node_count.max(2) - 1) as f32
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            ("rest_length", self.rest_length),
            ("gravity", self.gravity),
            ("damping", self.damping),
            ("scroll_detach_offset", self.scroll_detach_offset),
            ("reattach_distance", self.reattach_distance),
            ("compact_max_width", self.compact_max_width),
            ("tension_slack_ratio", self.tension_slack_ratio),
            ("tension_range_ratio", self.tension_range_ratio),
        ];
        if let Some((name, _)) = finite.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigError::NonFinite(*name));
        }
        if self.node_count < 2 {
            return Err(ConfigError::TooFewNodes(self.node_count));
        }
        if self.rest_length <= 0.0 {
            return Err(ConfigError::RestLength(self.rest_length));
        }
        if !(0.0..=1.0).contains(&self.damping) {
            return Err(ConfigError::Damping(self.damping));
        }
        if self.tension_range_ratio <= 0.0 {
            return Err(ConfigError::TensionRange(self.tension_range_ratio));
        }
        if self.iterations == 0 {
            return Err(ConfigError::NoIterations);
        }
        Ok(())
    }
}
