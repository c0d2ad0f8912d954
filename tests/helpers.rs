use keyshow::{clamp, color_to_hex, parse_hex_color, snap, tr_key};

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

#[test]
fn clamp_keeps_inner_value() {
    assert_eq!(clamp(10.0, 0.0, 20.0), 10.0);
}

#[test]
fn clamp_limits_low_and_high() {
    assert_eq!(clamp(-1.0, 0.0, 1.0), 0.0);
    assert_eq!(clamp(2.0, 0.0, 1.0), 1.0);
}

// === Colour Hex ===

#[test]
fn color_to_hex_puts_alpha_first() {
    assert_eq!(color_to_hex(0.0, 0.0, 0.0, 128.0 / 255.0), "#80000000");
    assert_eq!(color_to_hex(0.2, 0.4, 0.6, 0.5), "#80336699");
}

#[test]
fn color_to_hex_always_writes_eight_digits() {
    assert_eq!(color_to_hex(1.0, 1.0, 1.0, 1.0), "#FFFFFFFF");
    assert_eq!(color_to_hex(0.0, 0.0, 1.0, 1.0), "#FF0000FF");
}

#[test]
fn color_to_hex_clamps_input() {
    assert_eq!(color_to_hex(-0.1, 1.2, 0.501, 3.0), "#FF00FF80");
}

#[test]
fn parse_eight_digits_reads_alpha_first() {
    let (r, g, b, a) = parse_hex_color("#80000000").expect("half-transparent black");
    assert!(approx_eq(r, 0.0));
    assert!(approx_eq(g, 0.0));
    assert!(approx_eq(b, 0.0));
    assert!(approx_eq(a, 128.0 / 255.0));

    let (r, g, b, a) = parse_hex_color("#FF0000FF").expect("opaque blue");
    assert!(approx_eq(r, 0.0));
    assert!(approx_eq(g, 0.0));
    assert!(approx_eq(b, 1.0));
    assert!(approx_eq(a, 1.0));
}

#[test]
fn parse_six_digits_is_opaque_rgb() {
    let (r, g, b, a) = parse_hex_color("#FF0080").expect("valid rgb hex");
    assert!(approx_eq(r, 1.0));
    assert!(approx_eq(g, 0.0));
    assert!(approx_eq(b, 128.0 / 255.0));
    assert!(approx_eq(a, 1.0));
}

#[test]
fn parse_hex_trims_and_ignores_case() {
    let (r, g, b, a) = parse_hex_color("  40ff00Ff  ").expect("no hash, mixed case");
    assert!(approx_eq(a, 64.0 / 255.0));
    assert!(approx_eq(r, 1.0));
    assert!(approx_eq(g, 0.0));
    assert!(approx_eq(b, 1.0));
}

#[test]
fn parse_hex_rejects_bad_input() {
    assert!(parse_hex_color("").is_none());
    assert!(parse_hex_color("#FFF").is_none());
    assert!(parse_hex_color("#FF00FF0").is_none());
    assert!(parse_hex_color("#80FF00FF00").is_none());
    assert!(parse_hex_color("#GG0000").is_none());
    assert!(parse_hex_color("#80ZZ0000").is_none());
}

#[test]
fn stored_hex_reads_back_to_same_string() {
    for hex in ["#80000000", "#FFFFFFFF", "#CC112233", "#00FFFFFF"] {
        let (r, g, b, a) = parse_hex_color(hex).expect(hex);
        assert_eq!(color_to_hex(r, g, b, a), hex);
    }
}

#[test]
fn six_digit_value_is_rewritten_with_opaque_alpha() {
    let (r, g, b, a) = parse_hex_color("#336699").unwrap();
    assert_eq!(color_to_hex(r, g, b, a), "#FF336699");
}

// === Snapping ===

#[test]
fn snap_rounds_to_nearest_step() {
    assert!(approx_eq(snap(1.3, 0.5), 1.5));
    assert!(approx_eq(snap(1.2, 0.5), 1.0));
    assert!(approx_eq(snap(17.4, 1.0), 17.0));
}

#[test]
fn snap_ignores_non_positive_step() {
    assert_eq!(snap(1.37, 0.0), 1.37);
    assert_eq!(snap(1.37, -1.0), 1.37);
}

// === Localisation ===

#[test]
fn tr_key_localisation_en_es() {
    assert_eq!(tr_key("Settings", false).as_ref(), "Settings");
    assert_eq!(tr_key("Settings", true).as_ref(), "Preferencias");

    assert_eq!(tr_key("Close", false).as_ref(), "Close");
    assert_eq!(tr_key("Close", true).as_ref(), "Cerrar");

    assert_eq!(tr_key("Pause", true).as_ref(), "Pausar");
    assert_eq!(tr_key("Resume", false).as_ref(), "Resume");

    // Fallback for unknown key
    assert_eq!(tr_key("UnknownKey", false).as_ref(), "UnknownKey");
    assert_eq!(tr_key("UnknownKey", true).as_ref(), "UnknownKey");
}
