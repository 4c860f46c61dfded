//! In-memory property repository.

use std::sync::{Arc, RwLock};

use anyhow::{anyhow, Result};

use crate::domain::models::property::Property;
use crate::storage::memory::fixtures::FixtureData;
use crate::storage::traits::PropertyStorage;

#[derive(Clone)]
pub struct MemoryPropertyRepository {
    data: Arc<RwLock<FixtureData>>,
}

impl MemoryPropertyRepository {
    pub fn new(data: Arc<RwLock<FixtureData>>) -> Self {
        Self { data }
    }
}

impl PropertyStorage for MemoryPropertyRepository {
    fn get_property(&self, property_id: &str) -> Result<Option<Property>> {
        let data = self
            .data
            .read()
            .map_err(|_| anyhow!("property store lock poisoned"))?;
        // Linear scan; IDs are unique by convention so the first match wins
        Ok(data.properties.iter().find(|p| p.id == property_id).cloned())
    }

    fn list_properties(&self) -> Result<Vec<Property>> {
        let data = self
            .data
            .read()
            .map_err(|_| anyhow!("property store lock poisoned"))?;
        Ok(data.properties.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::connection::MemoryConnection;
    use crate::storage::traits::Connection;

    #[test]
    fn test_get_property_returns_matching_record() {
        let repo = MemoryConnection::new().create_property_repository();
        let property = repo.get_property("prop-2").unwrap().unwrap();
        assert_eq!(property.name, "Highland Villa");
    }

    #[test]
    fn test_get_property_unknown_id_is_none() {
        let repo = MemoryConnection::new().create_property_repository();
        assert!(repo.get_property("prop-999").unwrap().is_none());
    }

    #[test]
    fn test_list_properties_preserves_insertion_order() {
        let repo = MemoryConnection::new().create_property_repository();
        let ids: Vec<String> = repo
            .list_properties()
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec!["prop-1", "prop-2", "prop-3"]);
    }
}
