use super::*;

#[test]
fn canvas_rejects_zero_dimensions() {
    assert!(Canvas::new(0, 10).is_err());
    assert!(Canvas::new(10, 0).is_err());
    let c = Canvas::new(320, 240).unwrap();
    assert_eq!(c.width_f64(), 320.0);
    assert_eq!(c.height_f64(), 240.0);
}

#[test]
fn hex_colours_parse_both_forms() {
    assert_eq!(
        Rgba8::from_hex("#2196F3").unwrap(),
        Rgba8::opaque(0x21, 0x96, 0xF3)
    );
    assert_eq!(
        Rgba8::from_hex("#BDBDBD80").unwrap(),
        Rgba8 {
            r: 0xBD,
            g: 0xBD,
            b: 0xBD,
            a: 0x80,
        }
    );
}

#[test]
fn hex_colours_reject_malformed_input() {
    for bad in ["2196F3", "#2196F", "#2196F3A", "#GG96F3", "", "#"] {
        assert!(Rgba8::from_hex(bad).is_err(), "accepted {bad:?}");
    }
}

#[test]
fn hex_serde_is_symmetric() {
    let c = Rgba8::opaque(0x21, 0x96, 0xF3);
    let json = serde_json::to_string(&c).unwrap();
    assert_eq!(json, "\"#2196F3\"");
    let back: Rgba8 = serde_json::from_str(&json).unwrap();
    assert_eq!(back, c);

    let err = serde_json::from_str::<Rgba8>("\"blue\"").unwrap_err();
    assert!(err.to_string().contains("must start with '#'"));
}
