use gctk_colourgen::colours::{Colour, KnownColor, KnownColour};
use std::collections::HashSet;

#[test]
fn test_table_size_and_order() {
    assert_eq!(KnownColour::ALL.len(), 175);
    assert_eq!(KnownColour::ALL[0], KnownColour::ActiveBorder);
    assert_eq!(KnownColour::ALL[26], KnownColour::Transparent);
    assert_eq!(KnownColour::ALL[27], KnownColour::AliceBlue);
    assert_eq!(KnownColour::ALL[174], KnownColour::RebeccaPurple);
}

#[test]
fn test_names_are_unique_identifiers() {
    let mut seen = HashSet::new();
    for colour in KnownColour::ALL {
        let name = colour.name();
        assert!(seen.insert(name), "duplicate colour name: {name}");
        assert!(
            name.chars().all(|c| c.is_ascii_alphanumeric()),
            "{name} is not a plain identifier"
        );
        assert!(name.chars().next().unwrap().is_ascii_uppercase());
    }
}

#[test]
fn test_channel_normalization() {
    for &colour in KnownColour::ALL {
        let [r, g, b, a] = colour.rgba8();
        let normalized = colour.colour();
        assert_eq!(normalized.r, r as f32 / 255.0);
        assert_eq!(normalized.g, g as f32 / 255.0);
        assert_eq!(normalized.b, b as f32 / 255.0);
        assert_eq!(normalized.a, a as f32 / 255.0);
    }
}

#[test]
fn test_from_name_known() {
    assert_eq!(Colour::from_name("Red"), Colour::from_rgba8(255, 0, 0, 255));
    assert_eq!(Colour::from_name("Black"), Colour::BLACK);
    assert_eq!(Colour::from_name("Transparent").a, 0.0);
    assert_eq!(
        KnownColour::from_name("RebeccaPurple"),
        Some(KnownColour::RebeccaPurple)
    );
}

#[test]
fn test_from_name_misses_default_to_black() {
    for name in ["", "red", "RED", "NotAColour", "Light Blue"] {
        assert_eq!(
            Colour::from_name(name),
            Colour::BLACK,
            "{name:?} should fall back to opaque black"
        );
        assert_eq!(KnownColour::from_name(name), None);
    }
}

#[test]
fn test_from_known_matches_table() {
    for &colour in KnownColour::ALL {
        let [r, g, b, a] = colour.rgba8();
        assert_eq!(Colour::from_known(colour), Colour::from_rgba8(r, g, b, a));
    }
}

#[test]
fn test_alternate_spelling_alias() {
    let colour: KnownColor = KnownColour::CornflowerBlue;
    assert_eq!(colour.name(), "CornflowerBlue");
}

#[test]
fn test_spot_values() {
    assert_eq!(KnownColour::Highlight.rgba8(), [0, 120, 215, 255]);
    assert_eq!(KnownColour::DarkSeaGreen.rgba8(), [143, 188, 139, 255]);
    assert_eq!(KnownColour::Transparent.rgba8(), [255, 255, 255, 0]);
    assert_eq!(KnownColour::RebeccaPurple.rgba8(), [102, 51, 153, 255]);
}
