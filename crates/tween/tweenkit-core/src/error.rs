//! Errors surfaced by the public API.
//!
//! Construction-time problems (bad duration, unknown curve name) are reported
//! at the call site, never deferred into the tick loop. Stale handles are
//! reported, not silently ignored.

use thiserror::Error;

use crate::ids::TweenId;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum TweenError {
    /// A tween must run for a positive, finite number of seconds.
    #[error("tween duration must be positive and finite, got {0}")]
    NonPositiveDuration(f32),
    /// The name does not map to any easing curve.
    #[error("unknown ease curve `{0}`")]
    UnknownEase(String),
    /// The handle refers to a tween that already finished, was cancelled, or
    /// never existed.
    #[error("stale tween handle {0:?}")]
    StaleHandle(TweenId),
}
