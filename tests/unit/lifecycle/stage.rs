use super::*;

fn timed(duration: u32) -> StageConfig {
    StageConfig::builder("t").duration(duration).build()
}

#[test]
fn timed_stage_completes_at_duration() {
    let s = timed(20);
    assert!(!s.is_complete(19));
    assert!(s.is_complete(20));
    assert!(s.is_complete(21));
    assert_eq!(s.progress(0), 0.0);
    assert_eq!(s.progress(10), 0.5);
    assert_eq!(s.progress(25), 1.0);
}

#[test]
fn zero_duration_is_indefinite() {
    let s = timed(0);
    assert_eq!(s.progress(0), 1.0);
    assert!(!s.is_complete(1_000));
    assert!(s.is_indefinite());
}

#[test]
fn only_time_stages_complete() {
    for t in [
        StageTransition::Manual,
        StageTransition::Event,
        StageTransition::Hold,
        StageTransition::Chain,
    ] {
        let s = StageConfig::builder("x").duration(5).transition(t).build();
        assert!(!s.is_complete(100), "{t:?}");
    }
}

#[test]
fn chain_is_never_indefinite() {
    let s = StageConfig::builder("c")
        .transition(StageTransition::Chain)
        .duration(0)
        .build();
    assert!(!s.is_indefinite());
    assert!(StageConfig::active().is_indefinite());
}

#[test]
fn presets_have_expected_shapes() {
    let spawn = StageConfig::spawn(20);
    assert_eq!(spawn.id, "spawn");
    assert_eq!(spawn.transition, StageTransition::Time);
    assert!(spawn.shape.compute_scale(0.0).abs() < 1e-5);
    assert!((spawn.shape.compute_scale(1.0) - 1.0).abs() < 1e-5);

    let active = StageConfig::active();
    assert_eq!(active.transition, StageTransition::Hold);
    assert!(!active.shape.has_any_animation());

    let despawn = StageConfig::despawn(30);
    assert!((despawn.shape.compute_alpha(0.0) - 1.0).abs() < 1e-5);
    assert!(despawn.shape.compute_alpha(1.0).abs() < 1e-5);
}

#[test]
fn event_filter() {
    let any = StageConfig::builder("e")
        .transition(StageTransition::Event)
        .build();
    assert!(any.accepts_event("hit"));

    let only = StageConfig::builder("e").event("charged").build();
    assert_eq!(only.transition, StageTransition::Event);
    assert!(only.accepts_event("charged"));
    assert!(!only.accepts_event("hit"));

    assert!(!timed(5).accepts_event("charged"));
}

#[test]
fn transition_names_are_lenient() {
    assert_eq!(StageTransition::from_name("CHAIN"), StageTransition::Chain);
    assert_eq!(StageTransition::from_name(" hold "), StageTransition::Hold);
    assert_eq!(StageTransition::from_name("soon"), StageTransition::Time);
    for t in [
        StageTransition::Time,
        StageTransition::Manual,
        StageTransition::Event,
        StageTransition::Hold,
        StageTransition::Chain,
    ] {
        assert_eq!(StageTransition::from_name(t.name()), t);
    }
}

#[test]
fn stage_json_defaults() {
    let s: StageConfig =
        serde_json::from_str(r#"{ "id": "burst", "duration": 8, "transition": "chain" }"#).unwrap();
    assert_eq!(s.id, "burst");
    assert_eq!(s.duration, 8);
    assert_eq!(s.transition, StageTransition::Chain);
    assert!(s.visible);
    assert_eq!(s.shape, ShapeModifier::IDENTITY);
    assert!(s.animation.is_none());
    assert!(s.next_stage.is_none());

    let json = serde_json::to_value(&s).unwrap();
    assert!(json.get("next_stage").is_none());
    assert_eq!(json["transition"], "chain");
}
