use super::*;

#[test]
fn parses_six_digit_colors() {
    let color: HexColor = "#1f2937".parse().unwrap();
    assert_eq!(color.to_rgba(), [0x1f, 0x29, 0x37, 0xff]);
    assert_eq!(color.to_string(), "#1f2937");
}

#[test]
fn parses_short_and_alpha_forms() {
    let short: HexColor = "#fff".parse().unwrap();
    assert_eq!(short, HexColor::WHITE);

    let alpha: HexColor = "#00000080".parse().unwrap();
    assert_eq!(alpha.to_rgba(), [0, 0, 0, 0x80]);
    assert_eq!(alpha.to_string(), "#00000080");
}

#[test]
fn uppercase_is_normalized_on_display() {
    let color: HexColor = "#ABCDEF".parse().unwrap();
    assert_eq!(color.to_string(), "#abcdef");
}

#[test]
fn rejects_malformed_colors() {
    assert!(matches!("1f2937".parse::<HexColor>(), Err(ColorError::MissingHash(_))));
    assert!(matches!("#12345".parse::<HexColor>(), Err(ColorError::BadLength(_))));
    assert!(matches!("#zzzzzz".parse::<HexColor>(), Err(ColorError::BadDigit(_))));
}

#[test]
fn flatten_blends_onto_white() {
    assert_eq!(HexColor::BLACK.flatten(), [0, 0, 0]);
    assert_eq!(HexColor::rgba(0, 0, 0, 0).flatten(), [255, 255, 255]);
}

#[test]
fn serde_uses_hex_strings() {
    let json = serde_json::to_string(&HexColor::rgb(0x1f, 0x29, 0x37)).unwrap();
    assert_eq!(json, "\"#1f2937\"");

    let back: HexColor = serde_json::from_str(&json).unwrap();
    assert_eq!(back, HexColor::rgb(0x1f, 0x29, 0x37));

    serde_json::from_str::<HexColor>("\"red\"").unwrap_err();
}
