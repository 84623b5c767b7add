//! Scheduler configuration.

use serde::{Deserialize, Serialize};

/// Sizing knobs for a scheduler instance.
/// Keep this minimal; expand as needed without breaking API.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Initial capacity hint for the tween table.
    pub tween_capacity: usize,
    /// Maximum buffered events before backpressure applies (excess events are
    /// dropped until the host drains the buffer).
    pub max_events_per_tick: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tween_capacity: 64,
            max_events_per_tick: 256,
        }
    }
}
