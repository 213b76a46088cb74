use crate::error::{VehicleError, VehicleResult};
use crate::models::VehicleInput;

/// Field rules checked in order; the first failure is reported
pub fn validate_vehicle(input: &VehicleInput) -> VehicleResult<()> {
    let required = [
        ("brand", &input.brand),
        ("model", &input.model),
        ("registration", &input.registration),
        ("color", &input.color),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(VehicleError::validation(format!("{field} is required")));
        }
    }

    if input.year <= 0 {
        return Err(VehicleError::validation(
            "fabrication year must be a positive value",
        ));
    }
    if input.passengers <= 0 {
        return Err(VehicleError::validation("capacity must be greater than zero"));
    }
    if input.max_speed < 0.0 {
        return Err(VehicleError::validation("max speed cannot be negative"));
    }
    if input.fuel_type.trim().is_empty() {
        return Err(VehicleError::validation("fuel type is required"));
    }
    if input.transmission.trim().is_empty() {
        return Err(VehicleError::validation("transmission is required"));
    }
    if input.weight <= 0.0 {
        return Err(VehicleError::validation("weight must be a positive value"));
    }
    if input.height <= 0.0 || input.length <= 0.0 || input.width <= 0.0 {
        return Err(VehicleError::validation("dimensions must be positive values"));
    }

    Ok(())
}
