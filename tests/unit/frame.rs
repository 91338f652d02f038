use super::*;
use crate::{
    channels::{color_cycle::ColorCycleConfig, precession::PrecessionConfig, pulse::PulseConfig},
    lifecycle::stage::StageConfig,
};

fn held(animation: Option<Animation>) -> LifecycleAnimator {
    let mut a = LifecycleAnimator::builder("x")
        .stage(StageConfig::builder("hold").animation(animation).build())
        .build();
    a.start();
    a
}

#[test]
fn no_animation_gives_plain_stage_values() {
    let a = held(None);
    let f = FrameModifiers::sample(&a, &Animation::NONE, 12.0);
    assert_eq!(f.stage, "hold");
    assert_eq!(f.scale, 1.0);
    assert_eq!(f.alpha, 1.0);
    assert_eq!(f.rotation, Quat::IDENTITY);
    assert_eq!(f.wobble, Vec3::ZERO);
    assert!(f.color.is_none());
    assert!(f.visible);
}

#[test]
fn pulse_multiplies_stage_scale() {
    let a = held(None);
    let base = Animation::NONE
        .with_pulse(PulseConfig::new(0.5, std::f32::consts::FRAC_PI_2));
    let f = FrameModifiers::sample(&a, &base, 1.0);
    assert!((f.scale - 1.5).abs() < 1e-5);
}

#[test]
fn stage_override_replaces_base() {
    let a = held(Some(Animation::spin(0.25)));
    let base = Animation::pulse(0.5, 1.0);
    let f = FrameModifiers::sample(&a, &base, 2.0);
    assert!((f.spin_angle - 0.5).abs() < 1e-6);
    assert_eq!(f.scale, 1.0);
}

#[test]
fn rotation_combines_spin_and_precession() {
    let a = held(None);
    let base = Animation::spin(0.3).with_precession(PrecessionConfig::new(20.0, 0.1));
    let f = FrameModifiers::sample(&a, &base, 4.0);
    let spin = base.spin.unwrap().rotation(4.0);
    let tilt = base.precession.unwrap().rotation(4.0);
    assert!(f.rotation.abs_diff_eq(tilt * spin, 1e-6));
}

#[test]
fn color_only_from_active_cycle() {
    let a = held(None);
    let one = Animation::NONE.with_color_cycle(ColorCycleConfig::new(vec![Rgb::BLACK], 0.1));
    assert!(FrameModifiers::sample(&a, &one, 3.0).color.is_none());

    let two = Animation::NONE
        .with_color_cycle(ColorCycleConfig::new(vec![Rgb::BLACK, Rgb::WHITE], 0.1).stepped());
    assert_eq!(FrameModifiers::sample(&a, &two, 0.0).color, Some(Rgb::BLACK));
    assert_eq!(FrameModifiers::sample(&a, &two, 10.0).color, Some(Rgb::WHITE));
}

#[test]
fn serializes_to_flat_json() {
    let a = held(None);
    let f = FrameModifiers::sample(&a, &Animation::spin(0.1), 1.0);
    let v = serde_json::to_value(&f).unwrap();
    assert_eq!(v["stage"], "hold");
    assert!(v["rotation"].is_array());
    assert!(v.get("color").is_none());
}
