use super::*;

#[test]
fn default_flow_is_inactive_and_fully_visible() {
    let flow = RayFlowConfig::default();
    assert!(!flow.is_active());
    assert_eq!(flow.visible_span(0, 4, 12.0), (0.0, 1.0));
    assert_eq!(flow.alpha_at(0.7, 0, 4, 12.0), 1.0);
}

#[test]
fn radiate_grows_from_base() {
    let flow = RayFlowConfig::length(LengthFlow::Radiate { speed: 0.1 });
    assert!(flow.is_active());
    let (start, end) = flow.visible_span(0, 1, 5.0);
    assert_eq!(start, 0.0);
    assert!((end - 0.5).abs() < 1e-5);
    assert_eq!(flow.alpha_at(0.4, 0, 1, 5.0), 1.0);
    assert_eq!(flow.alpha_at(0.6, 0, 1, 5.0), 0.0);
}

#[test]
fn absorb_grows_from_tip() {
    let flow = RayFlowConfig::length(LengthFlow::Absorb { speed: 0.1 });
    let (start, end) = flow.visible_span(0, 1, 2.5);
    assert!((start - 0.75).abs() < 1e-5);
    assert_eq!(end, 1.0);
}

#[test]
fn segment_window_slides_and_clamps() {
    let flow = RayFlowConfig::length(LengthFlow::Segment {
        speed: 0.1,
        length: 0.25,
    });
    for i in 0..40 {
        let (a, b) = flow.visible_span(0, 1, i as f32);
        assert!(0.0 <= a && a <= b && b <= 1.0);
        assert!(b - a <= 0.25 + 1e-5);
    }
}

#[test]
fn stagger_offsets_rays() {
    let flow = RayFlowConfig::length(LengthFlow::Radiate { speed: 0.1 }).staggered();
    let (_, a) = flow.visible_span(0, 4, 0.0);
    let (_, b) = flow.visible_span(1, 4, 0.0);
    assert_eq!(a, 0.0);
    assert!((b - 0.25).abs() < 1e-6);
}

#[test]
fn chase_peaks_at_band_centers() {
    let flow = RayFlowConfig::travel(TravelFlow::Chase {
        speed: 0.1,
        count: 2,
        width: 0.1,
    });
    // head at 0.3 after 3 ticks, second band at 0.8
    assert!((flow.travel_alpha(0.3, 0, 1, 3.0) - 1.0).abs() < 1e-4);
    assert!((flow.travel_alpha(0.8, 0, 1, 3.0) - 1.0).abs() < 1e-4);
    assert_eq!(flow.travel_alpha(0.55, 0, 1, 3.0), 0.0);
}

#[test]
fn comet_tail_fades_behind_head() {
    let flow = RayFlowConfig::travel(TravelFlow::Comet {
        speed: 0.1,
        tail: 0.4,
    });
    let head = 0.5;
    let t = 5.0;
    assert!((flow.travel_alpha(head, 0, 1, t) - 1.0).abs() < 1e-4);
    assert!((flow.travel_alpha(head - 0.2, 0, 1, t) - 0.5).abs() < 1e-3);
    assert_eq!(flow.travel_alpha(head + 0.1, 0, 1, t), 0.0);
}

#[test]
fn spark_is_binary_and_deterministic() {
    let flow = RayFlowConfig::travel(TravelFlow::Spark {
        speed: 1.0,
        density: 0.5,
    });
    let mut lit = 0;
    for cell in 0..16 {
        let s = (cell as f32 + 0.5) / 16.0;
        let a = flow.travel_alpha(s, 3, 8, 7.0);
        assert!(a == 0.0 || a == 1.0);
        assert_eq!(a, flow.travel_alpha(s, 3, 8, 7.0));
        lit += a as u32;
    }
    assert!(lit > 0 && lit < 16);
}

#[test]
fn flicker_variants_stay_in_unit_range() {
    let flickers = [
        FlickerFlow::Scintillate {
            intensity: 0.8,
            frequency: 0.3,
        },
        FlickerFlow::Strobe {
            frequency: 0.25,
            duty: 0.5,
        },
        FlickerFlow::FadePulse {
            speed: 0.2,
            depth: 0.6,
        },
        FlickerFlow::Flicker {
            intensity: 1.0,
            frequency: 2.0,
        },
    ];
    for f in flickers {
        let flow = RayFlowConfig::flicker(f);
        assert!(flow.is_active());
        for i in 0..100 {
            let a = flow.flicker_alpha(i % 5, 5, i as f32 * 0.7);
            assert!((0.0..=1.0).contains(&a), "{f:?} {a}");
        }
    }
}

#[test]
fn strobe_duty_cycle() {
    let flow = RayFlowConfig::flicker(FlickerFlow::Strobe {
        frequency: 0.1,
        duty: 0.3,
    });
    assert_eq!(flow.flicker_alpha(0, 1, 1.0), 1.0);
    assert_eq!(flow.flicker_alpha(0, 1, 5.0), 0.0);
}

#[test]
fn parts_compose_independently() {
    let flow = RayFlowConfig::length(LengthFlow::Radiate { speed: 0.1 })
        .with_flicker(FlickerFlow::FadePulse {
            speed: std::f32::consts::PI / 5.0,
            depth: 0.5,
        });
    // at t=5 the span ends at 0.5 and the fade is at its deepest
    assert_eq!(flow.alpha_at(0.9, 0, 1, 5.0), 0.0);
    assert!((flow.alpha_at(0.2, 0, 1, 5.0) - 0.5).abs() < 1e-4);
}

#[test]
fn flat_def_round_trips_modes() {
    let flow = RayFlowConfig::length(LengthFlow::Pulse {
        speed: 0.3,
        min: 0.4,
    })
    .with_travel(TravelFlow::Comet {
        speed: 0.2,
        tail: 0.25,
    })
    .with_flicker(FlickerFlow::Strobe {
        frequency: 0.5,
        duty: 0.1,
    })
    .staggered();
    let json = serde_json::to_string(&flow).unwrap();
    let back: RayFlowConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, flow);
}

#[test]
fn unknown_modes_load_as_none() {
    let flow: RayFlowConfig = serde_json::from_str(
        r#"{ "length_mode": "explode", "travel_mode": "SCROLL", "travel_speed": 0.2 }"#,
    )
    .unwrap();
    assert_eq!(flow.length, LengthFlow::None);
    assert_eq!(flow.travel, TravelFlow::Scroll { speed: 0.2 });
}
