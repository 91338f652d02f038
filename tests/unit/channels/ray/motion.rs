use super::*;

#[test]
fn none_and_zero_speed_are_at_rest() {
    assert_eq!(RayMotion::None.sample(1, 4, 3.0), RayMotionSample::default());
    let still = RayMotion::Radial {
        amplitude: 0.5,
        speed: 0.0,
    };
    assert!(!still.is_active());
    assert_eq!(still.sample(1, 4, 3.0), RayMotionSample::default());
}

#[test]
fn radial_moves_only_along_the_ray() {
    let m = RayMotion::Radial {
        amplitude: 0.2,
        speed: 0.3,
    };
    for i in 0..20 {
        let s = m.sample(2, 5, i as f32);
        assert_eq!(s.offset.x, 0.0);
        assert_eq!(s.offset.z, 0.0);
        assert!(s.offset.y.abs() <= 0.2 + 1e-6);
    }
}

#[test]
fn radial_rays_are_phased_apart() {
    let m = RayMotion::Radial {
        amplitude: 1.0,
        speed: 0.1,
    };
    // two opposite rays of a pair move in opposite directions
    let a = m.sample(0, 2, 4.0).offset.y;
    let b = m.sample(1, 2, 4.0).offset.y;
    assert!((a + b).abs() < 1e-5);
}

#[test]
fn orbit_rotates_the_fan() {
    let m = RayMotion::Orbit { speed: 0.25 };
    let s = m.sample(3, 8, 4.0);
    assert_eq!(s.offset, Vec3::ZERO);
    assert!((s.angle - 1.0).abs() < 1e-6);
}

#[test]
fn oscillate_follows_its_axis() {
    let m = RayMotion::Oscillate {
        axis: Axis::Z,
        amplitude: 0.5,
        speed: std::f32::consts::FRAC_PI_2,
    };
    let s = m.sample(0, 1, 1.0);
    assert!((s.offset.z - 0.5).abs() < 1e-5);
    assert_eq!(s.offset.x, 0.0);
    assert_eq!(s.offset.y, 0.0);
}

#[test]
fn spiral_keeps_constant_radius() {
    let m = RayMotion::Spiral {
        radius: 0.3,
        speed: 0.2,
    };
    for i in 0..30 {
        let o = m.sample(1, 3, i as f32).offset;
        assert_eq!(o.y, 0.0);
        assert!((o.length() - 0.3).abs() < 1e-5);
    }
}

#[test]
fn jitter_is_bounded_and_per_ray() {
    let m = RayMotion::Jitter {
        amplitude: 0.1,
        speed: 0.5,
    };
    for i in 0..50 {
        let o = m.sample(0, 4, i as f32 * 0.3).offset;
        assert!(o.abs().max_element() <= 0.1 + 1e-6);
    }
    assert_ne!(m.sample(0, 4, 7.3), m.sample(1, 4, 7.3));
}

#[test]
fn def_round_trip_and_unknown_mode() {
    let m = RayMotion::Oscillate {
        axis: Axis::X,
        amplitude: 0.4,
        speed: 0.2,
    };
    let json = serde_json::to_string(&m).unwrap();
    assert!(json.contains("\"oscillate\""));
    assert_eq!(serde_json::from_str::<RayMotion>(&json).unwrap(), m);

    let spiral: RayMotion =
        serde_json::from_str(r#"{ "mode": "Spiral", "amplitude": 0.7 }"#).unwrap();
    assert_eq!(
        spiral,
        RayMotion::Spiral {
            radius: 0.7,
            speed: 0.05
        }
    );

    let bad: RayMotion = serde_json::from_str(r#"{ "mode": "teleport" }"#).unwrap();
    assert_eq!(bad, RayMotion::None);
}
