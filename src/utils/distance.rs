//! Distance conversion and display formatting.
//!
//! Distances are stored in miles; a plan's `distance_unit` only changes how
//! they are shown.

use crate::db::enums::DistanceUnit;

const KM_PER_MILE: f64 = 1.60934;

pub fn miles_to_km(miles: f64) -> f64 {
    miles * KM_PER_MILE
}

pub fn km_to_miles(km: f64) -> f64 {
    km / KM_PER_MILE
}

/// Round to the nearest 0.5 to avoid odd decimals in the calendar.
fn round_to_half(value: f64) -> f64 {
    (value * 2.0).round() / 2.0
}

/// Convert a stored (miles) distance into the requested display unit.
pub fn convert_distance(distance_in_miles: f64, to_unit: DistanceUnit) -> f64 {
    match to_unit {
        DistanceUnit::Km => miles_to_km(distance_in_miles),
        DistanceUnit::Mi => distance_in_miles,
    }
}

/// Format an already-converted distance with its unit label.
pub fn format_distance(distance: Option<f64>, unit: DistanceUnit) -> String {
    match distance {
        Some(value) => format!("{} {}", round_to_half(value), unit.label()),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_between_units() {
        assert!((miles_to_km(1.0) - 1.60934).abs() < 1e-9);
        assert!((km_to_miles(1.60934) - 1.0).abs() < 1e-9);
        assert!((convert_distance(5.0, DistanceUnit::Km) - 8.0467).abs() < 1e-9);
        assert_eq!(convert_distance(5.0, DistanceUnit::Mi), 5.0);
    }

    #[test]
    fn formats_with_half_step_rounding() {
        assert_eq!(format_distance(Some(4.26), DistanceUnit::Mi), "4.5 mi");
        assert_eq!(format_distance(Some(4.24), DistanceUnit::Mi), "4 mi");
        assert_eq!(format_distance(Some(8.0467), DistanceUnit::Km), "8 km");
        assert_eq!(format_distance(None, DistanceUnit::Km), "-");
    }
}
