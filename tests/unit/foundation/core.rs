use super::*;

#[test]
fn normalize_name_drops_separators_and_case() {
    assert_eq!(normalize_name("Ease-Out_Back"), "easeoutback");
    assert_eq!(normalize_name(" in.out quad "), "inoutquad");
}

#[test]
fn axis_parses_leniently() {
    assert_eq!(Axis::from_name("X"), Axis::X);
    assert_eq!(Axis::from_name("z_axis"), Axis::Z);
    assert_eq!(Axis::from_name("sideways"), Axis::Y);
}

#[test]
fn axis_basis_is_right_handed() {
    for axis in [Axis::X, Axis::Y, Axis::Z] {
        let (a, b) = axis.basis();
        assert!((a.cross(b) - axis.vector()).length() < 1e-6);
    }
}

#[test]
fn rgb_hex_forms() {
    assert_eq!(Rgb::parse_hex("#ff8000"), Some(Rgb::new(255, 128, 0)));
    assert_eq!(Rgb::parse_hex("0x00ff00"), Some(Rgb::new(0, 255, 0)));
    assert_eq!(Rgb::parse_hex("fff"), None);
    assert_eq!(Rgb::parse_hex("#+fffff"), None);
    assert_eq!(Rgb::parse_hex("-00000"), None);
    assert_eq!(Rgb::from("#+fffff".to_owned()), Rgb::WHITE);
    assert_eq!(Rgb::from("garbage".to_owned()), Rgb::WHITE);
    assert_eq!(Rgb::new(1, 2, 3).to_hex(), "#010203");
}

#[test]
fn world_time_clamps_partial_tick() {
    assert_eq!(world_time(10, 0.5), 10.5);
    assert_eq!(world_time(10, 3.0), 11.0);
    assert_eq!(ticks_to_secs(40), 2.0);
}
