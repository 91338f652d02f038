use super::*;

#[test]
fn identity_is_constant_one() {
    for i in 0..=10 {
        let t = i as f32 / 10.0;
        assert_eq!(ShapeModifier::IDENTITY.compute_scale(t), 1.0);
        assert_eq!(ShapeModifier::IDENTITY.compute_length(t), 1.0);
        assert_eq!(ShapeModifier::IDENTITY.compute_radius(t), 1.0);
        assert_eq!(ShapeModifier::IDENTITY.compute_alpha(t), 1.0);
    }
    assert!(!ShapeModifier::IDENTITY.has_any_animation());
}

#[test]
fn compute_clamps_progress() {
    let m = ShapeModifier::grow(Ease::Linear);
    assert_eq!(m.compute_scale(-3.0), 0.0);
    assert_eq!(m.compute_scale(0.25), 0.25);
    assert_eq!(m.compute_scale(7.0), 1.0);
}

#[test]
fn channels_are_independent() {
    let m = ShapeModifier::IDENTITY
        .with_length(0.0, 2.0, Ease::Linear)
        .with_alpha(1.0, 0.0, Ease::InQuad);
    assert_eq!(m.compute_scale(0.5), 1.0);
    assert_eq!(m.compute_radius(0.5), 1.0);
    assert_eq!(m.compute_length(0.5), 1.0);
    assert_eq!(m.compute_alpha(0.5), 0.75);
    assert!(m.has_length_animation());
    assert!(m.has_alpha_animation());
    assert!(!m.has_scale_animation());
    assert!(!m.has_radius_animation());
    assert!(m.has_any_animation());
}

#[test]
fn float_noise_is_not_animation() {
    let m = ShapeModifier::IDENTITY.with_radius(1.0, 1.0005, Ease::Linear);
    assert!(!m.has_radius_animation());
    let m = ShapeModifier::IDENTITY.with_radius(1.0, 1.01, Ease::Linear);
    assert!(m.has_radius_animation());
}

#[test]
fn overshoot_ease_passes_through() {
    let m = ShapeModifier::grow(Ease::OutBack);
    assert!(m.compute_scale(0.8) > 1.0);
    assert!((m.compute_scale(1.0) - 1.0).abs() < 1e-5);
}

#[test]
fn missing_fields_default_to_identity() {
    let m: ShapeModifier =
        serde_json::from_str(r#"{ "alpha": { "start": 0.0, "ease": "out_quad" } }"#).unwrap();
    assert_eq!(m.scale, ShapeChannel::IDENTITY);
    assert_eq!(m.alpha.start, 0.0);
    assert_eq!(m.alpha.end, 1.0);
    assert_eq!(m.alpha.ease, Ease::OutQuad);
}
