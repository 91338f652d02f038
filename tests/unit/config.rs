use super::*;
use crate::lifecycle::stage::StageTransition;

const DOC: &str = r#"{
    "id": "beacon",
    "loop": true,
    "animation": { "spin": { "speed": 0.1 } },
    "stages": [
        { "id": "rise", "duration": 10, "shape": { "scale": { "start": 0, "end": 1, "ease": "out_back" } } },
        { "id": "glow", "transition": "hold" }
    ]
}"#;

#[test]
fn parses_document() {
    let cfg = LifecycleConfig::from_json_str(DOC).unwrap();
    assert_eq!(cfg.id, "beacon");
    assert!(cfg.looping);
    assert!(cfg.animation.has_spin());
    assert_eq!(cfg.stages.len(), 2);
    assert_eq!(cfg.stages[1].transition, StageTransition::Hold);
    cfg.validate().unwrap();
}

#[test]
fn reader_and_str_agree() {
    let a = LifecycleConfig::from_json_str(DOC).unwrap();
    let b = LifecycleConfig::from_reader(DOC.as_bytes()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn empty_document_is_valid() {
    let cfg = LifecycleConfig::from_json_str("{}").unwrap();
    cfg.validate().unwrap();
    let (animator, base) = cfg.into_animator();
    assert_eq!(animator.stages().len(), 1);
    assert_eq!(base, Animation::NONE);
}

#[test]
fn duplicate_ids_fail_validation() {
    let cfg = LifecycleConfig::from_json_str(
        r#"{ "stages": [ { "id": "a" }, { "id": "b" }, { "id": "a" } ] }"#,
    )
    .unwrap();
    let err = cfg.validate().unwrap_err();
    assert!(matches!(err, FieldFxError::Validation(_)));
    assert!(err.to_string().contains("'a'"));
}

#[test]
fn dangling_next_stage_only_warns() {
    let cfg = LifecycleConfig::from_json_str(
        r#"{ "stages": [ { "id": "a", "next_stage": "ghost" }, { "id": "b" } ] }"#,
    )
    .unwrap();
    cfg.validate().unwrap();
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = LifecycleConfig::from_json_str(r#"{ "stages": 3 }"#).unwrap_err();
    assert!(matches!(err, FieldFxError::Serde(_)));
}

#[test]
fn missing_file_is_a_config_error() {
    let err = LifecycleConfig::from_path("/definitely/not/here.json").unwrap_err();
    assert!(matches!(err, FieldFxError::Config(_)));
}

#[test]
fn serializes_loop_under_its_json_name() {
    let cfg = LifecycleConfig::from_json_str(DOC).unwrap();
    let v = serde_json::to_value(&cfg).unwrap();
    assert_eq!(v["loop"], true);
    assert!(v.get("looping").is_none());
    let back: LifecycleConfig = serde_json::from_value(v).unwrap();
    assert_eq!(back, cfg);
}

#[test]
fn to_animator_keeps_stages() {
    let cfg = LifecycleConfig::from_json_str(DOC).unwrap();
    let a = cfg.to_animator();
    assert_eq!(a.id(), "beacon");
    assert!(a.is_looping());
    assert_eq!(a.stages(), cfg.stages.as_slice());
}
