use runova_backend::db::enums::DistanceUnit;
use runova_backend::utils::distance::{convert_distance, format_distance, km_to_miles, miles_to_km};

#[test]
fn mile_km_conversions_are_inverses() {
    let miles = 13.1;
    let round_trip = km_to_miles(miles_to_km(miles));
    assert!((round_trip - miles).abs() < 1e-9);
}

#[test]
fn stored_miles_convert_for_display() {
    assert_eq!(convert_distance(10.0, DistanceUnit::Mi), 10.0);
    assert!((convert_distance(10.0, DistanceUnit::Km) - 16.0934).abs() < 1e-9);
}

#[test]
fn display_formatting_rounds_to_half_steps() {
    assert_eq!(format_distance(Some(3.1), DistanceUnit::Mi), "3 mi");
    assert_eq!(format_distance(Some(3.3), DistanceUnit::Mi), "3.5 mi");
    assert_eq!(format_distance(None, DistanceUnit::Mi), "-");
}
