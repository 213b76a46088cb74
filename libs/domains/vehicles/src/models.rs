use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Vehicle {
    pub id: u32,
    pub brand: String,
    pub model: String,
    pub registration: String,
    pub color: String,
    /// Fabrication year
    pub year: i32,
    /// Seating capacity
    pub passengers: i32,
    pub max_speed: f64,
    pub fuel_type: String,
    pub transmission: String,
    pub weight: f64,
    pub height: f64,
    pub length: f64,
    pub width: f64,
}

/// Body of `POST /vehicles`; the id is assigned by the server.
///
/// Missing fields decode as zero values and are reported by validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct VehicleInput {
    #[schema(example = "Toyota")]
    pub brand: String,
    #[schema(example = "Corolla")]
    pub model: String,
    #[schema(example = "ABC-1234")]
    pub registration: String,
    #[schema(example = "red")]
    pub color: String,
    #[schema(example = 2020)]
    pub year: i32,
    #[schema(example = 5)]
    pub passengers: i32,
    #[schema(example = 180.0)]
    pub max_speed: f64,
    #[schema(example = "gasoline")]
    pub fuel_type: String,
    #[schema(example = "manual")]
    pub transmission: String,
    pub weight: f64,
    pub height: f64,
    pub length: f64,
    pub width: f64,
}

impl VehicleInput {
    pub fn into_vehicle(self, id: u32) -> Vehicle {
        Vehicle {
            id,
            brand: self.brand,
            model: self.model,
            registration: self.registration,
            color: self.color,
            year: self.year,
            passengers: self.passengers,
            max_speed: self.max_speed,
            fuel_type: self.fuel_type,
            transmission: self.transmission,
            weight: self.weight,
            height: self.height,
            length: self.length,
            width: self.width,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct SpeedUpdate {
    #[validate(range(min = 0.0, message = "max speed cannot be negative"))]
    pub max_speed: f64,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct FuelUpdate {
    #[validate(length(min = 1, message = "fuel type is required"))]
    pub fuel_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AverageSpeed {
    pub brand: String,
    pub average_speed: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AverageCapacity {
    pub brand: String,
    pub average_capacity: f64,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct DimensionsQuery {
    /// Inclusive length range, `min-max`
    pub length: Option<String>,
    /// Inclusive width range, `min-max`
    pub width: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct WeightQuery {
    pub min: Option<String>,
    pub max: Option<String>,
}
