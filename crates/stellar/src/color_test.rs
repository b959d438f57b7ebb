use units::Temperature;

use crate::color::{Color, ColorLookup, SpectralColorLookup};

fn kelvin(value: f64) -> Temperature {
    Temperature::from_kelvin(value)
}

#[test]
fn color_from_temperature() {
    // Hot end of the palette should be blue-white
    let hot = Color::from_temperature(kelvin(11000.0));
    assert!(hot.b > hot.r, "Hot stars should have more blue than red");

    // Sun-like should be yellowish-white
    let solar = Color::from_temperature(kelvin(5800.0));
    assert!(solar.r > solar.b);
    assert!(solar.g > solar.b);

    // M dwarf should be reddish
    let cool = Color::from_temperature(kelvin(3000.0));
    assert!(cool.r > cool.g);
    assert!(cool.g > cool.b);

    assert!(
        (hot.b as f64 / hot.r as f64) > (solar.b as f64 / solar.r as f64),
        "Blue/red ratio should increase with temperature"
    );
}

#[test]
fn lookup_clamps_to_palette_range() {
    let lookup = SpectralColorLookup;

    assert_eq!(lookup.color_for(kelvin(100.0)), lookup.color_for(kelvin(1000.0)));
    assert_eq!(lookup.color_for(kelvin(50000.0)), lookup.color_for(kelvin(11000.0)));
    assert_ne!(lookup.color_for(kelvin(3000.0)), lookup.color_for(kelvin(9000.0)));
}

#[test]
fn color_average_and_white() {
    let white = Color::white();
    let black = Color::new(0, 0, 0);

    assert_eq!(Color::default(), white);
    assert_eq!(white.average(&black), Color::new(128, 128, 128));
    assert_eq!(white.average(&white), white);

    let a = Color::new(10, 20, 30);
    let b = Color::new(30, 40, 50);
    assert_eq!(a.average(&b), Color::new(20, 30, 40));
}

#[test]
fn color_hex_roundtrip() {
    let color = Color::new(255, 128, 64);
    assert_eq!(color.to_hex(), "#FF8040");
    assert_eq!(Color::from_hex("#FF8040"), Ok(color));
    assert_eq!(Color::from_hex("ff8040"), Ok(color));
}

#[test]
fn color_hex_rejects_bad_input() {
    assert!(Color::from_hex("#FFF").is_err());
    assert!(Color::from_hex("#GG0000").is_err());
    assert!(Color::from_hex("#FF00001").is_err());
}
