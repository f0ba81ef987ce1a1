use super::*;
use crate::types::{EcLevel, ModulePattern};

const DELAY: Duration = Duration::from_millis(300);

fn generator() -> Generator {
    Generator::new(Customization::default(), DELAY)
}

#[test]
fn debouncer_waits_for_quiet_period() {
    let start = Instant::now();
    let mut debounce = Debouncer::new(DELAY);
    assert!(!debounce.is_ready(start));

    debounce.touch(start);
    assert!(debounce.is_pending());
    assert!(!debounce.is_ready(start + Duration::from_millis(299)));
    assert!(debounce.is_ready(start + DELAY));

    debounce.clear();
    assert!(!debounce.is_ready(start + DELAY));
}

#[test]
fn typing_restarts_the_debounce() {
    let start = Instant::now();
    let mut generator = generator();

    generator.set_field("url", "exa", start).unwrap();
    generator
        .set_field("url", "example.com", start + Duration::from_millis(200))
        .unwrap();

    assert_eq!(generator.take_preview(start + DELAY), None);

    let preview = generator
        .take_preview(start + Duration::from_millis(500))
        .unwrap();
    assert_eq!(preview.payload, "https://example.com");

    // Nothing changed since.
    assert_eq!(generator.take_preview(start + Duration::from_secs(5)), None);
}

#[test]
fn empty_payload_produces_no_preview() {
    let start = Instant::now();
    let mut generator = generator();
    generator.select_type(ContentType::Wifi);
    generator.set_field("password", "secret", start).unwrap();

    assert_eq!(generator.payload(), "");
    assert_eq!(generator.take_preview(start + DELAY), None);
    assert_eq!(generator.draft(None), None);
}

#[test]
fn select_type_resets_the_form() {
    let start = Instant::now();
    let mut generator = generator();
    generator.set_field("url", "example.com", start).unwrap();

    generator.select_type(ContentType::Location);

    assert_eq!(generator.content(), &Content::empty(ContentType::Location));
    // Location always encodes, so the switch previews at once.
    let preview = generator.take_preview(start).unwrap();
    assert_eq!(preview.payload, "geo:0,0?q=");
}

#[test]
fn customization_change_previews_immediately() {
    let start = Instant::now();
    let mut generator = generator();
    generator.set_field("url", "https://a.b", start).unwrap();
    generator.take_preview(start + DELAY).unwrap();

    let customization = Customization {
        error_correction_level: EcLevel::H,
        pattern: ModulePattern::Rounded,
        ..Default::default()
    };
    generator.set_customization(customization.clone());

    let preview = generator.take_preview(start + DELAY).unwrap();
    assert_eq!(preview.customization, customization);
    assert_eq!(preview.payload, "https://a.b");
}

#[test]
fn unknown_field_leaves_debounce_untouched() {
    let start = Instant::now();
    let mut generator = generator();
    assert!(generator.set_field("ssid", "x", start).is_err());
    assert_eq!(generator.take_preview(start + DELAY), None);
}

#[test]
fn load_scanned_switches_type() {
    let mut generator = generator();
    generator.load_scanned("WIFI:T:WEP;S:Cafe;P:beans;;");

    assert_eq!(generator.content_type(), ContentType::Wifi);
    let preview = generator.take_preview(Instant::now()).unwrap();
    assert_eq!(preview.payload, "WIFI:T:WEP;S:Cafe;P:beans;H:false;;");
}

#[test]
fn draft_snapshots_payload_and_customization() {
    let start = Instant::now();
    let mut generator = generator();
    generator.select_type(ContentType::Phone);
    generator.set_field("phone", "5551234", start).unwrap();

    let name = RecordName::try_new("Office").unwrap();
    let draft = generator.draft(Some(name.clone())).unwrap();

    assert_eq!(draft.content_type, ContentType::Phone);
    assert_eq!(draft.payload, "tel:5551234");
    assert_eq!(draft.customization, Customization::default());
    assert_eq!(draft.name, Some(name));
}

#[test]
fn from_config_uses_configured_defaults() {
    let mut config = AppConfig::default();
    config.defaults.margin = 6;
    config.generator.debounce_ms = 50;

    let mut generator = Generator::from_config(&config);
    assert_eq!(generator.customization().margin, 6);

    let start = Instant::now();
    generator.set_field("url", "x.y", start).unwrap();
    assert!(generator.take_preview(start + Duration::from_millis(50)).is_some());
}
