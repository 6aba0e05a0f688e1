use super::*;

// =============================================================
// from_stored
// =============================================================

#[test]
fn stored_light_maps_to_light() {
    assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
}

#[test]
fn stored_dark_maps_to_dark() {
    assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
}

#[test]
fn missing_value_defaults_to_dark() {
    assert_eq!(Theme::from_stored(None), Theme::Dark);
}

#[test]
fn unknown_values_default_to_dark() {
    assert_eq!(Theme::from_stored(Some("")), Theme::Dark);
    assert_eq!(Theme::from_stored(Some("sepia")), Theme::Dark);
    assert_eq!(Theme::from_stored(Some("LIGHT")), Theme::Dark);
}

#[test]
fn stored_values_round_trip() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(Theme::from_stored(Some(theme.as_str())), theme);
    }
}

// =============================================================
// toggled
// =============================================================

#[test]
fn toggling_flips_the_mode() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
}

#[test]
fn toggling_twice_returns_to_the_start() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(theme.toggled().toggled(), theme);
    }
}

// =============================================================
// toggle_label
// =============================================================

#[test]
fn light_mode_offers_the_dark_one() {
    assert_eq!(Theme::Light.toggle_label(), "Modo oscuro");
}

#[test]
fn dark_mode_offers_the_light_one() {
    assert_eq!(Theme::Dark.toggle_label(), "Modo claro");
}
