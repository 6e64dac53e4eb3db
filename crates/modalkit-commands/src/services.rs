//! Typed service provider for module construction.
//!
//! The provider is a type-keyed locator: modules resolve their dependencies
//! from it during construction (required) and injection (optional). Register
//! shared services as `Arc<...>` so handing them out is a cheap clone.

use std::any::{Any, TypeId, type_name};
use std::collections::HashMap;

use crate::error::ServiceError;

/// A type-keyed map of services available to command modules.
///
/// # Example
///
/// ```rust,ignore
/// let services = ServiceProvider::new()
///     .provide(Arc::new(Database::connect(url)?))
///     .provide(AppConfig::default());
///
/// let config = ModalConfig::default().services(services);
/// ```
#[derive(Default)]
pub struct ServiceProvider {
    services: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl ServiceProvider {
    /// Creates an empty provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a service, replacing any previous one of the same type.
    pub fn provide<T: Clone + Send + Sync + 'static>(mut self, value: T) -> Self {
        self.services.insert(TypeId::of::<T>(), Box::new(value));
        self
    }

    /// Looks up a service, failing when it is absent.
    ///
    /// Use this for dependencies a module cannot exist without; the failure
    /// surfaces through the error lifecycle event of the dispatch that
    /// needed the module.
    pub fn get_required<T: Clone + 'static>(&self) -> Result<T, ServiceError> {
        self.get_optional::<T>()
            .ok_or(ServiceError::NotFound(type_name::<T>()))
    }

    /// Looks up a service, returning `None` when it is absent.
    pub fn get_optional<T: Clone + 'static>(&self) -> Option<T> {
        self.services
            .get(&TypeId::of::<T>())
            .and_then(|v| v.downcast_ref::<T>())
            .cloned()
    }

    /// Number of registered services.
    pub fn len(&self) -> usize {
        self.services.len()
    }

    /// Whether no services are registered.
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

impl std::fmt::Debug for ServiceProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceProvider")
            .field("services", &self.services.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_get_required_present() {
        let services = ServiceProvider::new().provide(42u32);
        assert_eq!(services.get_required::<u32>().unwrap(), 42);
    }

    #[test]
    fn test_get_required_missing_fails() {
        let services = ServiceProvider::new();
        let err = services.get_required::<u32>().unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[test]
    fn test_get_optional_missing_is_none() {
        let services = ServiceProvider::new().provide("present".to_string());
        assert_eq!(services.get_optional::<String>().as_deref(), Some("present"));
        assert!(services.get_optional::<u64>().is_none());
    }

    #[test]
    fn test_arc_services_share_identity() {
        let shared = Arc::new("state".to_string());
        let services = ServiceProvider::new().provide(Arc::clone(&shared));
        let resolved = services.get_required::<Arc<String>>().unwrap();
        assert!(Arc::ptr_eq(&shared, &resolved));
    }

    #[test]
    fn test_provide_replaces_same_type() {
        let services = ServiceProvider::new().provide(1u8).provide(2u8);
        assert_eq!(services.get_optional::<u8>(), Some(2));
        assert_eq!(services.len(), 1);
    }
}
