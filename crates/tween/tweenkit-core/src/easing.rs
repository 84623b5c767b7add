//! Easing curves: pure functions remapping normalized progress.
//!
//! The thirty curves are the classic easings.net set, ten families with
//! In/Out/InOut variants. [`Ease::apply`] is pure, deterministic, and
//! allocation-free. Input is expected in `[0, 1]` and is not clamped here;
//! out-of-range input extrapolates per formula (the scheduler clamps progress
//! before evaluating). Overshoot families (Back, Elastic) legitimately leave
//! `[0, 1]` even for in-range input.

use std::f32::consts::PI;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TweenError;

/// Named easing curve.
///
/// New tweens default to `InSine` (the first variant).
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Ease {
    #[default]
    InSine,
    OutSine,
    InOutSine,
    InCubic,
    OutCubic,
    InOutCubic,
    InQuint,
    OutQuint,
    InOutQuint,
    InCirc,
    OutCirc,
    InOutCirc,
    InElastic,
    OutElastic,
    InOutElastic,
    InQuad,
    OutQuad,
    InOutQuad,
    InQuart,
    OutQuart,
    InOutQuart,
    InExpo,
    OutExpo,
    InOutExpo,
    /// Overshoots backward before moving, or past the target before settling.
    InBack,
    OutBack,
    InOutBack,
    /// Bounces like a dropped ball.
    InBounce,
    OutBounce,
    InOutBounce,
}

impl Ease {
    /// Every curve, in declaration order.
    pub const ALL: [Ease; 30] = [
        Ease::InSine,
        Ease::OutSine,
        Ease::InOutSine,
        Ease::InCubic,
        Ease::OutCubic,
        Ease::InOutCubic,
        Ease::InQuint,
        Ease::OutQuint,
        Ease::InOutQuint,
        Ease::InCirc,
        Ease::OutCirc,
        Ease::InOutCirc,
        Ease::InElastic,
        Ease::OutElastic,
        Ease::InOutElastic,
        Ease::InQuad,
        Ease::OutQuad,
        Ease::InOutQuad,
        Ease::InQuart,
        Ease::OutQuart,
        Ease::InOutQuart,
        Ease::InExpo,
        Ease::OutExpo,
        Ease::InOutExpo,
        Ease::InBack,
        Ease::OutBack,
        Ease::InOutBack,
        Ease::InBounce,
        Ease::OutBounce,
        Ease::InOutBounce,
    ];

    /// Stable curve name; matches the serde representation.
    pub fn name(self) -> &'static str {
        match self {
            Ease::InSine => "InSine",
            Ease::OutSine => "OutSine",
            Ease::InOutSine => "InOutSine",
            Ease::InCubic => "InCubic",
            Ease::OutCubic => "OutCubic",
            Ease::InOutCubic => "InOutCubic",
            Ease::InQuint => "InQuint",
            Ease::OutQuint => "OutQuint",
            Ease::InOutQuint => "InOutQuint",
            Ease::InCirc => "InCirc",
            Ease::OutCirc => "OutCirc",
            Ease::InOutCirc => "InOutCirc",
            Ease::InElastic => "InElastic",
            Ease::OutElastic => "OutElastic",
            Ease::InOutElastic => "InOutElastic",
            Ease::InQuad => "InQuad",
            Ease::OutQuad => "OutQuad",
            Ease::InOutQuad => "InOutQuad",
            Ease::InQuart => "InQuart",
            Ease::OutQuart => "OutQuart",
            Ease::InOutQuart => "InOutQuart",
            Ease::InExpo => "InExpo",
            Ease::OutExpo => "OutExpo",
            Ease::InOutExpo => "InOutExpo",
            Ease::InBack => "InBack",
            Ease::OutBack => "OutBack",
            Ease::InOutBack => "InOutBack",
            Ease::InBounce => "InBounce",
            Ease::OutBounce => "OutBounce",
            Ease::InOutBounce => "InOutBounce",
        }
    }

    /// Evaluate the curve at normalized progress `x`.
    #[inline]
    pub fn apply(self, x: f32) -> f32 {
        match self {
            Ease::InSine => in_sine(x),
            Ease::OutSine => out_sine(x),
            Ease::InOutSine => in_out_sine(x),
            Ease::InCubic => in_cubic(x),
            Ease::OutCubic => out_cubic(x),
            Ease::InOutCubic => in_out_cubic(x),
            Ease::InQuint => in_quint(x),
            Ease::OutQuint => out_quint(x),
            Ease::InOutQuint => in_out_quint(x),
            Ease::InCirc => in_circ(x),
            Ease::OutCirc => out_circ(x),
            Ease::InOutCirc => in_out_circ(x),
            Ease::InElastic => in_elastic(x),
            Ease::OutElastic => out_elastic(x),
            Ease::InOutElastic => in_out_elastic(x),
            Ease::InQuad => in_quad(x),
            Ease::OutQuad => out_quad(x),
            Ease::InOutQuad => in_out_quad(x),
            Ease::InQuart => in_quart(x),
            Ease::OutQuart => out_quart(x),
            Ease::InOutQuart => in_out_quart(x),
            Ease::InExpo => in_expo(x),
            Ease::OutExpo => out_expo(x),
            Ease::InOutExpo => in_out_expo(x),
            Ease::InBack => in_back(x),
            Ease::OutBack => out_back(x),
            Ease::InOutBack => in_out_back(x),
            Ease::InBounce => in_bounce(x),
            Ease::OutBounce => out_bounce(x),
            Ease::InOutBounce => in_out_bounce(x),
        }
    }
}

impl fmt::Display for Ease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Ease {
    type Err = TweenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ease::ALL
            .iter()
            .copied()
            .find(|e| e.name() == s)
            .ok_or_else(|| TweenError::UnknownEase(s.to_string()))
    }
}

// ── Sine ────────────────────────────────────────────────────────────────

#[inline]
fn in_sine(x: f32) -> f32 {
    1.0 - (x * PI / 2.0).cos()
}

#[inline]
fn out_sine(x: f32) -> f32 {
    (x * PI / 2.0).sin()
}

#[inline]
fn in_out_sine(x: f32) -> f32 {
    -((PI * x).cos() - 1.0) / 2.0
}

// ── Power families (p = 2, 3, 4, 5) ─────────────────────────────────────

#[inline]
fn in_quad(x: f32) -> f32 {
    x * x
}

#[inline]
fn out_quad(x: f32) -> f32 {
    1.0 - (1.0 - x) * (1.0 - x)
}

#[inline]
fn in_out_quad(x: f32) -> f32 {
    if x < 0.5 {
        2.0 * x * x
    } else {
        1.0 - (-2.0 * x + 2.0).powi(2) / 2.0
    }
}

#[inline]
fn in_cubic(x: f32) -> f32 {
    x * x * x
}

#[inline]
fn out_cubic(x: f32) -> f32 {
    1.0 - (1.0 - x).powi(3)
}

#[inline]
fn in_out_cubic(x: f32) -> f32 {
    if x < 0.5 {
        4.0 * x * x * x
    } else {
        1.0 - (-2.0 * x + 2.0).powi(3) / 2.0
    }
}

#[inline]
fn in_quart(x: f32) -> f32 {
    x * x * x * x
}

#[inline]
fn out_quart(x: f32) -> f32 {
    1.0 - (1.0 - x).powi(4)
}

#[inline]
fn in_out_quart(x: f32) -> f32 {
    if x < 0.5 {
        8.0 * x * x * x * x
    } else {
        1.0 - (-2.0 * x + 2.0).powi(4) / 2.0
    }
}

#[inline]
fn in_quint(x: f32) -> f32 {
    x * x * x * x * x
}

#[inline]
fn out_quint(x: f32) -> f32 {
    1.0 - (1.0 - x).powi(5)
}

#[inline]
fn in_out_quint(x: f32) -> f32 {
    if x < 0.5 {
        16.0 * x * x * x * x * x
    } else {
        1.0 - (-2.0 * x + 2.0).powi(5) / 2.0
    }
}

// ── Circular ────────────────────────────────────────────────────────────

#[inline]
fn in_circ(x: f32) -> f32 {
    1.0 - (1.0 - x * x).sqrt()
}

#[inline]
fn out_circ(x: f32) -> f32 {
    (1.0 - (x - 1.0) * (x - 1.0)).sqrt()
}

#[inline]
fn in_out_circ(x: f32) -> f32 {
    if x < 0.5 {
        (1.0 - (1.0 - (2.0 * x).powi(2)).sqrt()) / 2.0
    } else {
        ((1.0 - (-2.0 * x + 2.0).powi(2)).sqrt() + 1.0) / 2.0
    }
}

// ── Exponential ─────────────────────────────────────────────────────────
// Boundary guards are asymmetric: In special-cases only x=0, Out only the
// near-1 neighborhood, InOut both.

#[inline]
fn in_expo(x: f32) -> f32 {
    if x == 0.0 {
        0.0
    } else {
        2.0_f32.powf(10.0 * x - 10.0)
    }
}

#[inline]
fn out_expo(x: f32) -> f32 {
    if (x - 1.0).abs() < 0.001 {
        1.0
    } else {
        1.0 - 2.0_f32.powf(-10.0 * x)
    }
}

#[inline]
fn in_out_expo(x: f32) -> f32 {
    if x == 0.0 {
        0.0
    } else if (x - 1.0).abs() < 0.001 {
        1.0
    } else if x < 0.5 {
        2.0_f32.powf(20.0 * x - 10.0) / 2.0
    } else {
        (2.0 - 2.0_f32.powf(-20.0 * x + 10.0)) / 2.0
    }
}

// ── Elastic ─────────────────────────────────────────────────────────────

#[inline]
fn in_elastic(x: f32) -> f32 {
    const C4: f32 = 2.0 * PI / 3.0;
    if x == 0.0 {
        0.0
    } else if (x - 1.0).abs() < 0.001 {
        1.0
    } else {
        -(2.0_f32.powf(10.0 * x - 10.0)) * ((x * 10.0 - 10.75) * C4).sin()
    }
}

#[inline]
fn out_elastic(x: f32) -> f32 {
    const C4: f32 = 2.0 * PI / 3.0;
    if x == 0.0 {
        0.0
    } else if (x - 1.0).abs() < 0.001 {
        1.0
    } else {
        2.0_f32.powf(-10.0 * x) * ((x * 10.0 - 0.75) * C4).sin() + 1.0
    }
}

#[inline]
fn in_out_elastic(x: f32) -> f32 {
    const C5: f32 = 2.0 * PI / 4.5;
    if x == 0.0 {
        0.0
    } else if (x - 1.0).abs() < 0.001 {
        1.0
    } else if x < 0.5 {
        -(2.0_f32.powf(20.0 * x - 10.0) * ((20.0 * x - 11.125) * C5).sin()) / 2.0
    } else {
        2.0_f32.powf(-20.0 * x + 10.0) * ((20.0 * x - 11.125) * C5).sin() / 2.0 + 1.0
    }
}

// ── Back (overshoot) ────────────────────────────────────────────────────

#[inline]
fn in_back(x: f32) -> f32 {
    const C1: f32 = 1.70158;
    const C3: f32 = C1 + 1.0;
    C3 * x * x * x - C1 * x * x
}

#[inline]
fn out_back(x: f32) -> f32 {
    const C1: f32 = 1.70158;
    const C3: f32 = C1 + 1.0;
    1.0 + C3 * (x - 1.0).powi(3) + C1 * (x - 1.0).powi(2)
}

#[inline]
fn in_out_back(x: f32) -> f32 {
    const C1: f32 = 1.70158;
    const C2: f32 = C1 * 1.525;
    if x < 0.5 {
        (2.0 * x).powi(2) * ((C2 + 1.0) * 2.0 * x - C2) / 2.0
    } else {
        ((2.0 * x - 2.0).powi(2) * ((C2 + 1.0) * (x * 2.0 - 2.0) + C2) + 2.0) / 2.0
    }
}

// ── Bounce ──────────────────────────────────────────────────────────────

#[inline]
fn in_bounce(x: f32) -> f32 {
    1.0 - out_bounce(1.0 - x)
}

#[inline]
fn out_bounce(x: f32) -> f32 {
    const N1: f32 = 7.5625;
    const D1: f32 = 2.75;

    if x < 1.0 / D1 {
        N1 * x * x
    } else if x < 2.0 / D1 {
        let x = x - 1.5 / D1;
        N1 * x * x + 0.75
    } else if x < 2.5 / D1 {
        let x = x - 2.25 / D1;
        N1 * x * x + 0.9375
    } else {
        let x = x - 2.625 / D1;
        N1 * x * x + 0.984375
    }
}

#[inline]
fn in_out_bounce(x: f32) -> f32 {
    if x < 0.5 {
        (1.0 - out_bounce(1.0 - 2.0 * x)) / 2.0
    } else {
        (1.0 + out_bounce(2.0 * x - 1.0)) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_first_variant() {
        assert_eq!(Ease::default(), Ease::InSine);
    }

    #[test]
    fn quad_midpoint_exact() {
        assert_eq!(Ease::InQuad.apply(0.5), 0.25);
        assert_eq!(Ease::OutQuad.apply(0.5), 0.75);
    }

    #[test]
    fn back_overshoots() {
        assert!(Ease::InBack.apply(0.2) < 0.0);
        assert!(Ease::OutBack.apply(0.5) > 1.0);
    }

    #[test]
    fn unknown_name_is_an_error() {
        let err = "Linear".parse::<Ease>().unwrap_err();
        assert_eq!(err, TweenError::UnknownEase("Linear".into()));
    }
}
