//! Vehicle Service - Business logic layer

use std::collections::HashSet;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::error::{VehicleError, VehicleResult};
use crate::filter::VehicleFilter;
use crate::models::{AverageCapacity, AverageSpeed, Vehicle, VehicleInput};
use crate::repository::VehicleRepository;
use crate::validation::validate_vehicle;

pub struct VehicleService<R: VehicleRepository> {
    repository: Arc<R>,
}

impl<R: VehicleRepository> VehicleService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self))]
    pub async fn list_vehicles(&self) -> VehicleResult<Vec<Vehicle>> {
        self.repository.find_all().await
    }

    #[instrument(skip(self, input), fields(registration = %input.registration))]
    pub async fn create_vehicle(&self, input: VehicleInput) -> VehicleResult<Vehicle> {
        validate_vehicle(&input)?;
        if self
            .repository
            .exists_by_registration(&input.registration)
            .await?
        {
            return Err(VehicleError::DuplicateRegistration(input.registration));
        }

        let vehicle = self.repository.create(input).await?;
        info!(vehicle_id = vehicle.id, "Vehicle created");
        Ok(vehicle)
    }

    /// Validates every vehicle against the store and the ones before it,
    /// then stores them together. Any failure stores nothing.
    #[instrument(skip(self, inputs), fields(count = inputs.len()))]
    pub async fn create_batch(&self, inputs: Vec<VehicleInput>) -> VehicleResult<Vec<Vehicle>> {
        let mut seen = HashSet::new();
        for input in &inputs {
            validate_vehicle(input)?;
            if !seen.insert(input.registration.as_str())
                || self
                    .repository
                    .exists_by_registration(&input.registration)
                    .await?
            {
                return Err(VehicleError::DuplicateRegistration(
                    input.registration.clone(),
                ));
            }
        }

        let vehicles = self.repository.create_many(inputs).await?;
        info!(count = vehicles.len(), "Vehicles created");
        Ok(vehicles)
    }

    /// Vehicles matching `filter`; `NoMatches` when there are none
    pub async fn search(&self, filter: &VehicleFilter) -> VehicleResult<Vec<Vehicle>> {
        let vehicles = self.repository.find_all().await?;
        let found = filter.apply(&vehicles);
        if found.is_empty() {
            return Err(VehicleError::NoMatches);
        }
        Ok(found)
    }

    #[instrument(skip(self))]
    pub async fn find_by_color_and_year(
        &self,
        color: &str,
        year: i32,
    ) -> VehicleResult<Vec<Vehicle>> {
        self.search(&VehicleFilter {
            color: Some(color.to_string()),
            year_from: Some(year),
            year_to: Some(year),
            ..Default::default()
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn find_by_brand_between(
        &self,
        brand: &str,
        start_year: i32,
        end_year: i32,
    ) -> VehicleResult<Vec<Vehicle>> {
        self.search(&VehicleFilter {
            brand: Some(brand.to_string()),
            year_from: Some(start_year),
            year_to: Some(end_year),
            ..Default::default()
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn find_by_fuel_type(&self, fuel_type: &str) -> VehicleResult<Vec<Vehicle>> {
        self.search(&VehicleFilter {
            fuel_type: Some(fuel_type.to_string()),
            ..Default::default()
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn find_by_transmission(&self, transmission: &str) -> VehicleResult<Vec<Vehicle>> {
        self.search(&VehicleFilter {
            transmission: Some(transmission.to_string()),
            ..Default::default()
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn find_by_dimensions(
        &self,
        length: Option<(f64, f64)>,
        width: Option<(f64, f64)>,
    ) -> VehicleResult<Vec<Vehicle>> {
        self.search(&VehicleFilter {
            length_min: length.map(|(min, _)| min),
            length_max: length.map(|(_, max)| max),
            width_min: width.map(|(min, _)| min),
            width_max: width.map(|(_, max)| max),
            ..Default::default()
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn find_by_weight(
        &self,
        min: Option<f64>,
        max: Option<f64>,
    ) -> VehicleResult<Vec<Vehicle>> {
        self.search(&VehicleFilter {
            weight_min: min,
            weight_max: max,
            ..Default::default()
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn average_speed_by_brand(&self, brand: &str) -> VehicleResult<AverageSpeed> {
        let vehicles = self.by_brand(brand).await?;
        let average_speed = mean(vehicles.iter().map(|v| v.max_speed));
        Ok(AverageSpeed {
            brand: brand.to_string(),
            average_speed,
        })
    }

    #[instrument(skip(self))]
    pub async fn average_capacity_by_brand(&self, brand: &str) -> VehicleResult<AverageCapacity> {
        let vehicles = self.by_brand(brand).await?;
        let average_capacity = mean(vehicles.iter().map(|v| f64::from(v.passengers)));
        Ok(AverageCapacity {
            brand: brand.to_string(),
            average_capacity,
        })
    }

    #[instrument(skip(self))]
    pub async fn update_speed(&self, id: u32, max_speed: f64) -> VehicleResult<Vehicle> {
        if max_speed < 0.0 {
            return Err(VehicleError::validation("max speed cannot be negative"));
        }
        self.repository.update_max_speed(id, max_speed).await
    }

    #[instrument(skip(self))]
    pub async fn update_fuel(&self, id: u32, fuel_type: &str) -> VehicleResult<Vehicle> {
        let fuel_type = fuel_type.trim();
        if fuel_type.is_empty() {
            return Err(VehicleError::validation("fuel type is required"));
        }
        self.repository
            .update_fuel_type(id, fuel_type.to_string())
            .await
    }

    #[instrument(skip(self))]
    pub async fn delete_vehicle(&self, id: u32) -> VehicleResult<()> {
        self.repository.delete(id).await?;
        info!("Vehicle deleted");
        Ok(())
    }

    async fn by_brand(&self, brand: &str) -> VehicleResult<Vec<Vehicle>> {
        self.search(&VehicleFilter {
            brand: Some(brand.to_string()),
            ..Default::default()
        })
        .await
    }
}

fn mean(values: impl ExactSizeIterator<Item = f64>) -> f64 {
    let count = values.len();
    if count == 0 {
        return 0.0;
    }
    values.sum::<f64>() / count as f64
}

impl<R: VehicleRepository> Clone for VehicleService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
