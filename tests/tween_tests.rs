// Host-side tests for the tween engine.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod tween {
    include!("../src/core/tween.rs");
}

use tween::*;

const ALL_EASES: [Ease; 7] = [
    Ease::Linear,
    Ease::QuadIn,
    Ease::QuadOut,
    Ease::QuadInOut,
    Ease::CubicIn,
    Ease::CubicOut,
    Ease::CubicInOut,
];

#[test]
fn eases_hit_their_endpoints() {
    for ease in ALL_EASES {
        assert!(ease.apply(0.0).abs() < 1e-6, "{ease:?} at 0");
        assert!((ease.apply(1.0) - 1.0).abs() < 1e-6, "{ease:?} at 1");
    }
}

#[test]
fn eases_are_monotonic() {
    for ease in ALL_EASES {
        let mut prev = ease.apply(0.0);
        for i in 1..=100 {
            let v = ease.apply(i as f32 / 100.0);
            assert!(v >= prev - 1e-6, "{ease:?} dipped at step {i}");
            prev = v;
        }
    }
}

#[test]
fn eases_clamp_out_of_range_input() {
    for ease in ALL_EASES {
        assert_eq!(ease.apply(-1.5), ease.apply(0.0));
        assert_eq!(ease.apply(7.0), ease.apply(1.0));
    }
}

#[test]
fn ease_shapes_are_correct_at_midpoint() {
    assert!((Ease::Linear.apply(0.5) - 0.5).abs() < 1e-6);
    assert!((Ease::QuadIn.apply(0.5) - 0.25).abs() < 1e-6);
    assert!((Ease::QuadOut.apply(0.5) - 0.75).abs() < 1e-6);
    assert!((Ease::QuadInOut.apply(0.5) - 0.5).abs() < 1e-6);
    assert!((Ease::CubicIn.apply(0.5) - 0.125).abs() < 1e-6);
    assert!((Ease::CubicOut.apply(0.5) - 0.875).abs() < 1e-6);
    assert!((Ease::CubicInOut.apply(0.5) - 0.5).abs() < 1e-6);
}

#[test]
fn tween_interpolates_and_lands_exactly() {
    let mut t = Tween::new(10.0, 20.0, 1.0, Ease::Linear);
    assert_eq!(t.value(), 10.0);
    assert!((t.advance(0.25) - 12.5).abs() < 1e-5);
    assert!((t.advance(0.25) - 15.0).abs() < 1e-5);
    assert!(!t.done());

    // Overshooting the duration clamps at the end value.
    let v = t.advance(10.0);
    assert_eq!(v, 20.0);
    assert!(t.done());
    assert_eq!(t.value(), t.end_value());
}

#[test]
fn zero_duration_tween_completes_immediately() {
    let mut t = Tween::new(3.0, 7.0, 0.0, Ease::CubicOut);
    assert!(t.done());
    assert_eq!(t.advance(0.016), 7.0);
}

#[test]
fn tween_ignores_negative_dt() {
    let mut t = Tween::new(0.0, 1.0, 1.0, Ease::Linear);
    t.advance(0.5);
    let v = t.advance(-0.25);
    assert!((v - 0.5).abs() < 1e-6);
}

#[test]
fn delayed_tween_holds_then_runs() {
    let mut d = Delayed::new(0.5, Tween::new(1.0, 0.0, 1.0, Ease::Linear));
    assert_eq!(d.advance(0.4), 1.0);
    assert!(!d.done());

    // Crossing the delay boundary spends the remainder inside the tween.
    let v = d.advance(0.35);
    assert!((v - 0.75).abs() < 1e-5, "got {v}");

    d.advance(0.75);
    assert!(d.done());
    assert_eq!(d.value(), 0.0);
}

#[test]
fn delayed_tween_with_zero_delay_runs_at_once() {
    let mut d = Delayed::new(0.0, Tween::new(0.0, 2.0, 1.0, Ease::Linear));
    let v = d.advance(0.5);
    assert!((v - 1.0).abs() < 1e-5);
}
