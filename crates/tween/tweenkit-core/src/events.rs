//! Semantic events recorded while stepping.
//!
//! Events are an observability side channel keyed by [`TweenId`]; the
//! per-tween callbacks remain the authoritative completion contract. Hosts
//! drain the buffer after each tick via `Scheduler::drain_events`.

use serde::{Deserialize, Serialize};

use crate::ids::TweenId;

/// Discrete signals emitted by the scheduler.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[non_exhaustive]
pub enum TweenEvent {
    /// A tween was registered; it starts advancing on the next tick.
    Started { tween: TweenId },
    /// A tween ran to completion; its finish callback (if any) has run.
    Finished { tween: TweenId },
    /// A tween was removed before completion; no finish callback ran.
    Cancelled { tween: TweenId },
}
