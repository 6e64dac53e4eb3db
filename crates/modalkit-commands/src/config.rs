//! Extension configuration.
//!
//! A [`ModalConfig`] is built once by the embedding application and handed to
//! [`ModalCommands::new`](crate::dispatch::ModalCommands::new), which owns it
//! for its lifetime. There is no process-global configuration.

use std::sync::Arc;

use crate::services::ServiceProvider;

/// Configuration for one [`ModalCommands`](crate::dispatch::ModalCommands)
/// instance.
#[derive(Debug, Clone)]
pub struct ModalConfig {
    pub(crate) prefix: String,
    pub(crate) separator: char,
    pub(crate) services: Arc<ServiceProvider>,
}

impl Default for ModalConfig {
    /// Prefix `"mk:"`, separator `':'`, no services.
    fn default() -> Self {
        Self {
            prefix: "mk:".to_string(),
            separator: ':',
            services: Arc::new(ServiceProvider::new()),
        }
    }
}

impl ModalConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the prefix prepended to every identifier token.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Sets the separator joining the command name and its arguments.
    ///
    /// The separator must not occur inside command names or argument values;
    /// the codec performs no escaping.
    pub fn separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Sets the service provider used for module construction and injection.
    pub fn services(mut self, services: ServiceProvider) -> Self {
        self.services = Arc::new(services);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ModalConfig::default();
        assert_eq!(config.prefix, "mk:");
        assert_eq!(config.separator, ':');
        assert!(config.services.is_empty());
    }

    #[test]
    fn test_builder_overrides() {
        let config = ModalConfig::new()
            .prefix("MC:")
            .separator(';')
            .services(ServiceProvider::new().provide(5i64));
        assert_eq!(config.prefix, "MC:");
        assert_eq!(config.separator, ';');
        assert_eq!(config.services.get_optional::<i64>(), Some(5));
    }
}
