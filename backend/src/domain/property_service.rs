//! Property lookup service.
//!
//! Thin accessor layer over the property repository. Lookups are total over
//! well-formed data: an unknown ID is `Ok(None)`, never an error.

use anyhow::Result;
use log::info;
use std::sync::Arc;

use crate::domain::models::property::Property;
use crate::storage::{Connection, PropertyStorage};

#[derive(Clone)]
pub struct PropertyService<C: Connection> {
    property_repository: C::PropertyRepository,
}

impl<C: Connection> PropertyService<C> {
    pub fn new(connection: Arc<C>) -> Self {
        let property_repository = connection.create_property_repository();
        Self {
            property_repository,
        }
    }

    /// Look up a property by ID. IDs are unique by convention; the first
    /// match wins.
    pub fn get_property(&self, property_id: &str) -> Result<Option<Property>> {
        let property = self.property_repository.get_property(property_id)?;
        if property.is_none() {
            info!("Property lookup missed for id {}", property_id);
        }
        Ok(property)
    }

    /// List all properties in the portfolio
    pub fn list_properties(&self) -> Result<Vec<Property>> {
        self.property_repository.list_properties()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryConnection;

    fn create_test_service() -> PropertyService<MemoryConnection> {
        PropertyService::new(Arc::new(MemoryConnection::new()))
    }

    #[test]
    fn test_get_property_present() {
        let service = create_test_service();
        let property = service.get_property("prop-1").unwrap().unwrap();
        assert_eq!(property.name, "Sunset Apartment");
        assert!(property.is_rented());
    }

    #[test]
    fn test_get_property_absent() {
        let service = create_test_service();
        assert!(service.get_property("does-not-exist").unwrap().is_none());
    }

    #[test]
    fn test_list_properties() {
        let service = create_test_service();
        assert_eq!(service.list_properties().unwrap().len(), 3);
    }
}
