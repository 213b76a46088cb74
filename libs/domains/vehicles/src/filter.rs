//! Single-pass vehicle filtering.

use crate::models::Vehicle;

/// Criteria combined with AND. Text fields compare case-insensitively and
/// every bound is inclusive.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VehicleFilter {
    pub color: Option<String>,
    pub brand: Option<String>,
    pub fuel_type: Option<String>,
    pub transmission: Option<String>,
    pub year_from: Option<i32>,
    pub year_to: Option<i32>,
    pub length_min: Option<f64>,
    pub length_max: Option<f64>,
    pub width_min: Option<f64>,
    pub width_max: Option<f64>,
    pub weight_min: Option<f64>,
    pub weight_max: Option<f64>,
}

fn text_matches(expected: &Option<String>, actual: &str) -> bool {
    expected
        .as_deref()
        .is_none_or(|expected| expected.eq_ignore_ascii_case(actual))
}

fn within<T: PartialOrd>(value: T, min: Option<T>, max: Option<T>) -> bool {
    min.is_none_or(|min| value >= min) && max.is_none_or(|max| value <= max)
}

impl VehicleFilter {
    pub fn matches(&self, vehicle: &Vehicle) -> bool {
        text_matches(&self.color, &vehicle.color)
            && text_matches(&self.brand, &vehicle.brand)
            && text_matches(&self.fuel_type, &vehicle.fuel_type)
            && text_matches(&self.transmission, &vehicle.transmission)
            && within(vehicle.year, self.year_from, self.year_to)
            && within(vehicle.length, self.length_min, self.length_max)
            && within(vehicle.width, self.width_min, self.width_max)
            && within(vehicle.weight, self.weight_min, self.weight_max)
    }

    pub fn apply<'a>(&self, vehicles: impl IntoIterator<Item = &'a Vehicle>) -> Vec<Vehicle> {
        vehicles
            .into_iter()
            .filter(|vehicle| self.matches(vehicle))
            .cloned()
            .collect()
    }
}

/// Parses `min-max` into an inclusive pair
pub fn parse_range(raw: &str) -> Option<(f64, f64)> {
    let (min, max) = raw.trim().split_once('-')?;
    let min = min.trim().parse::<f64>().ok()?;
    let max = max.trim().parse::<f64>().ok()?;
    (min.is_finite() && max.is_finite()).then_some((min, max))
}
