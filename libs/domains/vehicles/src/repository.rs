use async_trait::async_trait;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

use crate::error::{VehicleError, VehicleResult};
use crate::models::{Vehicle, VehicleInput};

/// Repository trait for Vehicle persistence
///
/// Registration uniqueness is enforced here so that it holds under
/// concurrent writes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VehicleRepository: Send + Sync {
    /// Every vehicle, ordered by id
    async fn find_all(&self) -> VehicleResult<Vec<Vehicle>>;

    async fn find_by_id(&self, id: u32) -> VehicleResult<Vehicle>;

    async fn exists_by_registration(&self, registration: &str) -> VehicleResult<bool>;

    /// Store under the next free id
    async fn create(&self, input: VehicleInput) -> VehicleResult<Vehicle>;

    /// Store all or nothing
    async fn create_many(&self, inputs: Vec<VehicleInput>) -> VehicleResult<Vec<Vehicle>>;

    async fn update_max_speed(&self, id: u32, max_speed: f64) -> VehicleResult<Vehicle>;

    async fn update_fuel_type(&self, id: u32, fuel_type: String) -> VehicleResult<Vehicle>;

    async fn delete(&self, id: u32) -> VehicleResult<()>;
}

/// Vehicles held in process memory, keyed and ordered by id
#[derive(Clone, Default)]
pub struct InMemoryVehicleRepository {
    vehicles: Arc<RwLock<BTreeMap<u32, Vehicle>>>,
}

impl InMemoryVehicleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_vehicles(vehicles: impl IntoIterator<Item = Vehicle>) -> Self {
        let map = vehicles.into_iter().map(|v| (v.id, v)).collect();
        Self {
            vehicles: Arc::new(RwLock::new(map)),
        }
    }

    /// Seed from a JSON array of vehicles
    pub async fn load(path: impl AsRef<Path>) -> VehicleResult<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let vehicles: Vec<Vehicle> = serde_json::from_slice(&bytes)?;
        info!(path = %path.display(), count = vehicles.len(), "Vehicles loaded");
        Ok(Self::with_vehicles(vehicles))
    }
}

fn next_id(vehicles: &BTreeMap<u32, Vehicle>) -> VehicleResult<u32> {
    match vehicles.keys().next_back() {
        None => Ok(1),
        Some(last) => last.checked_add(1).ok_or(VehicleError::IdsExhausted),
    }
}

fn registration_taken(vehicles: &BTreeMap<u32, Vehicle>, registration: &str) -> bool {
    vehicles.values().any(|v| v.registration == registration)
}

#[async_trait]
impl VehicleRepository for InMemoryVehicleRepository {
    async fn find_all(&self) -> VehicleResult<Vec<Vehicle>> {
        Ok(self.vehicles.read().await.values().cloned().collect())
    }

    async fn find_by_id(&self, id: u32) -> VehicleResult<Vehicle> {
        self.vehicles
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(VehicleError::NotFound(id))
    }

    async fn exists_by_registration(&self, registration: &str) -> VehicleResult<bool> {
        Ok(registration_taken(&*self.vehicles.read().await, registration))
    }

    async fn create(&self, input: VehicleInput) -> VehicleResult<Vehicle> {
        let mut vehicles = self.vehicles.write().await;
        if registration_taken(&vehicles, &input.registration) {
            return Err(VehicleError::DuplicateRegistration(input.registration));
        }

        let vehicle = input.into_vehicle(next_id(&vehicles)?);
        vehicles.insert(vehicle.id, vehicle.clone());
        Ok(vehicle)
    }

    async fn create_many(&self, inputs: Vec<VehicleInput>) -> VehicleResult<Vec<Vehicle>> {
        let mut vehicles = self.vehicles.write().await;
        let mut staged = vehicles.clone();
        let mut created = Vec::with_capacity(inputs.len());

        for input in inputs {
            if registration_taken(&staged, &input.registration) {
                return Err(VehicleError::DuplicateRegistration(input.registration));
            }
            let vehicle = input.into_vehicle(next_id(&staged)?);
            staged.insert(vehicle.id, vehicle.clone());
            created.push(vehicle);
        }

        *vehicles = staged;
        Ok(created)
    }

    async fn update_max_speed(&self, id: u32, max_speed: f64) -> VehicleResult<Vehicle> {
        let mut vehicles = self.vehicles.write().await;
        let vehicle = vehicles.get_mut(&id).ok_or(VehicleError::NotFound(id))?;
        vehicle.max_speed = max_speed;
        Ok(vehicle.clone())
    }

    async fn update_fuel_type(&self, id: u32, fuel_type: String) -> VehicleResult<Vehicle> {
        let mut vehicles = self.vehicles.write().await;
        let vehicle = vehicles.get_mut(&id).ok_or(VehicleError::NotFound(id))?;
        vehicle.fuel_type = fuel_type;
        Ok(vehicle.clone())
    }

    async fn delete(&self, id: u32) -> VehicleResult<()> {
        self.vehicles
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or(VehicleError::NotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn input(registration: &str) -> VehicleInput {
        VehicleInput {
            brand: "Toyota".into(),
            model: "Corolla".into(),
            registration: registration.into(),
            color: "red".into(),
            year: 2020,
            passengers: 5,
            max_speed: 180.0,
            fuel_type: "gasoline".into(),
            transmission: "manual".into(),
            weight: 1200.0,
            height: 1.4,
            length: 4.5,
            width: 1.7,
        }
    }

    #[tokio::test]
    async fn test_ids_follow_highest_existing() {
        let repo = InMemoryVehicleRepository::with_vehicles([input("A").into_vehicle(41)]);

        let created = repo.create(input("B")).await.unwrap();
        assert_eq!(created.id, 42);

        repo.delete(42).await.unwrap();
        let created = repo.create(input("C")).await.unwrap();
        assert_eq!(created.id, 42);
    }

    #[tokio::test]
    async fn test_create_after_highest_possible_id_fails() {
        let repo = InMemoryVehicleRepository::with_vehicles([input("A").into_vehicle(u32::MAX)]);

        assert!(matches!(
            repo.create(input("B")).await,
            Err(VehicleError::IdsExhausted)
        ));
        assert!(matches!(
            repo.create_many(vec![input("C")]).await,
            Err(VehicleError::IdsExhausted)
        ));
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_create_rejects_taken_registration() {
        let repo = InMemoryVehicleRepository::new();
        repo.create(input("A")).await.unwrap();

        assert!(matches!(
            repo.create(input("A")).await,
            Err(VehicleError::DuplicateRegistration(_))
        ));
        assert!(repo.exists_by_registration("A").await.unwrap());
    }

    #[tokio::test]
    async fn test_create_many_is_all_or_nothing() {
        let repo = InMemoryVehicleRepository::new();
        repo.create(input("A")).await.unwrap();

        let result = repo
            .create_many(vec![input("B"), input("C"), input("A")])
            .await;

        assert!(matches!(
            result,
            Err(VehicleError::DuplicateRegistration(r)) if r == "A"
        ));
        assert_eq!(repo.find_all().await.unwrap().len(), 1);

        let created = repo.create_many(vec![input("B"), input("C")]).await.unwrap();
        let ids: Vec<u32> = created.iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[tokio::test]
    async fn test_updates_on_unknown_id() {
        let repo = InMemoryVehicleRepository::new();
        assert!(matches!(
            repo.update_max_speed(9, 10.0).await,
            Err(VehicleError::NotFound(9))
        ));
        assert!(matches!(
            repo.update_fuel_type(9, "diesel".into()).await,
            Err(VehicleError::NotFound(9))
        ));
    }

    #[tokio::test]
    async fn test_load_seed_file() {
        let file = NamedTempFile::new().unwrap();
        let seed = vec![input("A").into_vehicle(1), input("B").into_vehicle(7)];
        std::fs::write(file.path(), serde_json::to_vec(&seed).unwrap()).unwrap();

        let repo = InMemoryVehicleRepository::load(file.path()).await.unwrap();

        assert_eq!(repo.find_all().await.unwrap(), seed);
        assert_eq!(repo.create(input("C")).await.unwrap().id, 8);
    }

    #[tokio::test]
    async fn test_load_missing_seed_file_fails() {
        let result = InMemoryVehicleRepository::load("/nonexistent/vehicles.json").await;
        assert!(matches!(result, Err(VehicleError::Seed(_))));
    }
}
