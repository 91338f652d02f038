use std::f32::consts::{FRAC_PI_2, PI};

use super::*;

#[test]
fn spin_is_uniform_along_the_ray() {
    let t = RayTwist::Spin { speed: 0.1 };
    let base = t.angle(0.0, 0, 3, 10.0);
    let tip = t.angle(1.0, 0, 3, 10.0);
    assert!((base - 1.0).abs() < 1e-6);
    assert_eq!(base, tip);
}

#[test]
fn static_wind_is_still_active() {
    let t = RayTwist::Wind {
        turns: 2.0,
        speed: 0.0,
    };
    assert!(t.is_active());
    assert_eq!(t.angle(0.0, 0, 1, 50.0), 0.0);
    assert!((t.angle(0.5, 0, 1, 50.0) - TAU).abs() < 1e-5);
    assert!(!RayTwist::Wind {
        turns: 0.0,
        speed: 0.0
    }
    .is_active());
}

#[test]
fn oscillate_peaks_at_amount() {
    let t = RayTwist::Oscillate {
        amount_degrees: 90.0,
        speed: FRAC_PI_2,
    };
    assert!((t.angle(0.3, 0, 1, 1.0) - FRAC_PI_2).abs() < 1e-5);
    for i in 0..40 {
        assert!(t.angle(0.5, 1, 4, i as f32 * 0.37).abs() <= FRAC_PI_2 + 1e-5);
    }
}

#[test]
fn progressive_grows_from_the_base() {
    let t = RayTwist::Progressive {
        amount_degrees: 180.0,
        speed: FRAC_PI_2,
    };
    assert_eq!(t.angle(0.0, 0, 1, 1.0), 0.0);
    assert!((t.angle(0.5, 0, 1, 1.0) - FRAC_PI_2).abs() < 1e-5);
    assert!((t.angle(1.0, 0, 1, 1.0) - PI).abs() < 1e-5);
}

#[test]
fn zero_amount_is_inactive() {
    let t = RayTwist::Oscillate {
        amount_degrees: 0.0,
        speed: 1.0,
    };
    assert!(!t.is_active());
    assert_eq!(t.angle(0.5, 0, 1, 3.0), 0.0);
}

#[test]
fn def_round_trip_and_fallback() {
    let t = RayTwist::Wind {
        turns: 1.5,
        speed: -0.2,
    };
    let json = serde_json::to_string(&t).unwrap();
    assert_eq!(serde_json::from_str::<RayTwist>(&json).unwrap(), t);

    let p: RayTwist = serde_json::from_str(r#"{ "mode": "PROGRESSIVE" }"#).unwrap();
    assert_eq!(
        p,
        RayTwist::Progressive {
            amount_degrees: 45.0,
            speed: 0.05
        }
    );
    let bad: RayTwist = serde_json::from_str(r#"{ "mode": "corkscrew" }"#).unwrap();
    assert_eq!(bad, RayTwist::None);
}
