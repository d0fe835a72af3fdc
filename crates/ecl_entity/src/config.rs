//! World configuration.

/// Name given to objects spawned without an explicit name.
pub const DEFAULT_ENTITY_NAME: &str = "Entity";

/// Configuration for a [`World`](crate::World).
#[derive(Debug, Clone)]
pub struct WorldConfig {
    /// Name used by [`SpawnSource::Unnamed`](crate::SpawnSource::Unnamed).
    pub default_entity_name: String,
    /// Number of entities the registry reserves room for up front.
    pub registry_capacity: usize,
}

impl WorldConfig {
    /// Create a config with the default entity name and no reserved capacity.
    #[must_use]
    pub fn new() -> Self {
        Self {
            default_entity_name: DEFAULT_ENTITY_NAME.to_string(),
            registry_capacity: 0,
        }
    }

    /// Override the name given to unnamed spawns.
    #[must_use]
    pub fn with_default_entity_name(mut self, name: impl Into<String>) -> Self {
        self.default_entity_name = name.into();
        self
    }

    /// Reserve room for `capacity` entities.
    #[must_use]
    pub fn with_registry_capacity(mut self, capacity: usize) -> Self {
        self.registry_capacity = capacity;
        self
    }
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = WorldConfig::default();
        assert_eq!(config.default_entity_name, "Entity");
        assert_eq!(config.registry_capacity, 0);
    }

    #[test]
    fn test_builders() {
        let config = WorldConfig::new()
            .with_default_entity_name("Actor")
            .with_registry_capacity(128);
        assert_eq!(config.default_entity_name, "Actor");
        assert_eq!(config.registry_capacity, 128);
    }
}
