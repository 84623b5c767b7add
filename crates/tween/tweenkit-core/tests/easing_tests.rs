use tweenkit_core::{Ease, TweenError};

fn approx(a: f32, b: f32, eps: f32) {
    assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
}

/// it should hit the boundary identities at x=0 and x=1 for every curve
#[test]
fn boundary_identities() {
    for ease in Ease::ALL {
        let at_zero = ease.apply(0.0);
        let at_one = ease.apply(1.0);
        assert!(
            at_zero.abs() <= 1e-5,
            "{ease} at 0 should be 0, got {at_zero}"
        );
        assert!(
            (at_one - 1.0).abs() <= 1e-5,
            "{ease} at 1 should be 1, got {at_one}"
        );
    }
}

/// it should satisfy InBounce(x) == 1 - OutBounce(1-x) across [0,1]
#[test]
fn bounce_symmetry() {
    for i in 0..=100 {
        let x = i as f32 / 100.0;
        approx(
            Ease::InBounce.apply(x),
            1.0 - Ease::OutBounce.apply(1.0 - x),
            1e-6,
        );
    }
}

/// it should be monotone non-decreasing on [0,1] for the non-overshoot families
#[test]
fn monotone_families() {
    const MONOTONE: [Ease; 21] = [
        Ease::InSine,
        Ease::OutSine,
        Ease::InOutSine,
        Ease::InQuad,
        Ease::OutQuad,
        Ease::InOutQuad,
        Ease::InCubic,
        Ease::OutCubic,
        Ease::InOutCubic,
        Ease::InQuart,
        Ease::OutQuart,
        Ease::InOutQuart,
        Ease::InQuint,
        Ease::OutQuint,
        Ease::InOutQuint,
        Ease::InCirc,
        Ease::OutCirc,
        Ease::InOutCirc,
        Ease::InExpo,
        Ease::OutExpo,
        Ease::InOutExpo,
    ];
    for ease in MONOTONE {
        let mut prev = ease.apply(0.0);
        for i in 1..=200 {
            let x = i as f32 / 200.0;
            let y = ease.apply(x);
            assert!(
                y + 1e-6 >= prev,
                "{ease} decreases at x={x}: {prev} -> {y}"
            );
            prev = y;
        }
    }
}

/// it should match hand-computed values for the power and sine families
#[test]
fn power_and_sine_spot_values() {
    assert_eq!(Ease::InQuad.apply(0.5), 0.25);
    assert_eq!(Ease::InCubic.apply(0.5), 0.125);
    assert_eq!(Ease::InQuart.apply(0.5), 0.0625);
    assert_eq!(Ease::InQuint.apply(0.5), 0.03125);
    assert_eq!(Ease::OutQuad.apply(0.5), 0.75);
    // InOut halves: accelerating branch below the midpoint, mirror above.
    assert_eq!(Ease::InOutQuad.apply(0.25), 0.125);
    assert_eq!(Ease::InOutQuad.apply(0.75), 0.875);
    assert_eq!(Ease::InOutCubic.apply(0.25), 0.0625);
    approx(Ease::InOutSine.apply(0.5), 0.5, 1e-6);
    approx(Ease::InSine.apply(0.5) + Ease::OutSine.apply(0.5), 1.0, 1e-6);
}

/// it should keep the exponential boundary guards asymmetric
#[test]
fn expo_boundary_guards() {
    assert_eq!(Ease::InExpo.apply(0.0), 0.0);
    assert_eq!(Ease::InExpo.apply(1.0), 1.0);
    // Out and InOut treat the 0.001 neighborhood of 1 as done; In does not.
    assert_eq!(Ease::OutExpo.apply(0.9995), 1.0);
    assert_eq!(Ease::InOutExpo.apply(0.9995), 1.0);
    assert!(Ease::InExpo.apply(0.9995) < 1.0);
    approx(Ease::InExpo.apply(0.5), 2f32.powf(-5.0), 1e-7);
    approx(Ease::OutExpo.apply(0.5), 1.0 - 2f32.powf(-5.0), 1e-7);
}

/// it should pin elastic guards and the analytic midpoint of OutElastic
#[test]
fn elastic_guards_and_midpoint() {
    for ease in [Ease::InElastic, Ease::OutElastic, Ease::InOutElastic] {
        assert_eq!(ease.apply(0.0), 0.0);
        assert_eq!(ease.apply(1.0), 1.0);
        assert_eq!(ease.apply(0.9995), 1.0);
    }
    // sin((5 - 0.75) * 2pi/3) = sin(5pi/6) = 1/2, so 2^-5 / 2 + 1.
    approx(Ease::OutElastic.apply(0.5), 1.015625, 1e-4);
}

/// it should place OutBounce on its piecewise-quadratic segments
#[test]
fn bounce_segments() {
    // First segment: plain 7.5625 x^2.
    approx(Ease::OutBounce.apply(0.2), 7.5625 * 0.04, 1e-6);
    // Second segment: offset by 1.5/2.75 with a 0.75 correction.
    approx(Ease::OutBounce.apply(0.5), 0.765625, 1e-5);
    // Landing: last segment ends at 1.
    approx(Ease::OutBounce.apply(1.0), 1.0, 1e-5);
    // InOut splits and rescales.
    approx(
        Ease::InOutBounce.apply(0.25),
        (1.0 - Ease::OutBounce.apply(0.5)) / 2.0,
        1e-6,
    );
}

/// it should overshoot on the Back family and dip below zero on InBack
#[test]
fn back_overshoot() {
    assert!(Ease::InBack.apply(0.2) < 0.0);
    assert!(Ease::OutBack.apply(0.5) > 1.0);
    assert!(Ease::InOutBack.apply(0.2) < 0.0);
    assert!(Ease::InOutBack.apply(0.8) > 1.0);
}

/// it should round-trip every curve name through FromStr and Display
#[test]
fn names_round_trip() {
    for ease in Ease::ALL {
        let parsed: Ease = ease.name().parse().expect("known name parses");
        assert_eq!(parsed, ease);
        assert_eq!(ease.to_string(), ease.name());
    }
    assert_eq!(
        "Hermite".parse::<Ease>(),
        Err(TweenError::UnknownEase("Hermite".into()))
    );
}

/// it should serialize curves as their bare names
#[test]
fn serde_round_trip() {
    let json = serde_json::to_string(&Ease::InOutBounce).expect("serialize");
    assert_eq!(json, "\"InOutBounce\"");
    let back: Ease = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, Ease::InOutBounce);
}

/// it should expose all thirty curves exactly once
#[test]
fn thirty_distinct_curves() {
    let mut names: Vec<&str> = Ease::ALL.iter().map(|e| e.name()).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), 30);
}
