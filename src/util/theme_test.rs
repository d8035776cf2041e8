use super::*;

// =============================================================
// Stored-value parsing
// =============================================================

#[test]
fn stored_values_round_trip() {
    assert_eq!(Theme::from_stored("light"), Some(Theme::Light));
    assert_eq!(Theme::from_stored("dark"), Some(Theme::Dark));
    assert_eq!(Theme::from_stored(Theme::Dark.as_stored()), Some(Theme::Dark));
}

#[test]
fn unknown_stored_value_reads_as_no_preference() {
    assert_eq!(Theme::from_stored("true"), None);
    assert_eq!(Theme::from_stored(""), None);
}

// =============================================================
// Flipping
// =============================================================

#[test]
fn flipping_alternates_between_the_two_themes() {
    assert_eq!(Theme::Light.flipped(), Theme::Dark);
    assert_eq!(Theme::Dark.flipped(), Theme::Light);
    assert_eq!(Theme::Light.flipped().flipped(), Theme::Light);
}

#[test]
fn default_theme_is_light() {
    assert!(!Theme::default().is_dark());
}
