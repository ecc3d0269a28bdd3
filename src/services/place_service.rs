// ============================================================================
// PLACE SERVICE - Lectura de la lista de lugares desde storage
// ============================================================================

use crate::dom::local_storage;
use crate::error::AppError;
use crate::models::PlaceList;

/// Storage clave/valor con la lista de lugares
pub trait PlaceSource {
    fn get_item(&self, key: &str) -> Result<Option<String>, AppError>;
}

/// `window.localStorage`
pub struct LocalStoragePlaces;

impl PlaceSource for LocalStoragePlaces {
    fn get_item(&self, key: &str) -> Result<Option<String>, AppError> {
        let storage = local_storage().ok_or(AppError::StorageUnavailable)?;
        storage.get_item(key).map_err(|_| AppError::StorageUnavailable)
    }
}

pub struct PlaceService;

impl PlaceService {
    /// Leer y validar la lista (se lee una sola vez al cargar la página)
    pub fn load(source: &dyn PlaceSource, key: &str) -> Result<PlaceList, AppError> {
        let raw = source
            .get_item(key)?
            .ok_or_else(|| AppError::MissingPlaces { key: key.to_string() })?;

        let places = PlaceList::parse(&raw)?;
        log::info!("📍 [PLACES] {} lugares cargados desde \"{}\"", places.len(), key);
        Ok(places)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PlaceListError;
    use std::collections::HashMap;

    struct MemoryPlaces(HashMap<String, String>);

    impl PlaceSource for MemoryPlaces {
        fn get_item(&self, key: &str) -> Result<Option<String>, AppError> {
            Ok(self.0.get(key).cloned())
        }
    }

    struct BlockedStorage;

    impl PlaceSource for BlockedStorage {
        fn get_item(&self, _key: &str) -> Result<Option<String>, AppError> {
            Err(AppError::StorageUnavailable)
        }
    }

    fn memory(key: &str, value: &str) -> MemoryPlaces {
        MemoryPlaces(HashMap::from([(key.to_string(), value.to_string())]))
    }

    #[test]
    fn loads_places_under_key() {
        let source = memory("locations", "CN Tower,Casa Loma");
        let places = PlaceService::load(&source, "locations").unwrap();
        assert_eq!(places.origin(), "CN Tower");
        assert_eq!(places.destination(), "Casa Loma");
    }

    #[test]
    fn missing_key_is_reported() {
        let source = memory("other", "a,b");
        assert_eq!(
            PlaceService::load(&source, "locations"),
            Err(AppError::MissingPlaces { key: "locations".to_string() })
        );
    }

    #[test]
    fn invalid_list_is_reported() {
        let source = memory("locations", "CN Tower");
        assert_eq!(
            PlaceService::load(&source, "locations"),
            Err(AppError::InvalidPlaces(PlaceListError::TooFewPlaces { found: 1 }))
        );
    }

    #[test]
    fn storage_errors_propagate() {
        assert_eq!(
            PlaceService::load(&BlockedStorage, "locations"),
            Err(AppError::StorageUnavailable)
        );
    }
}
