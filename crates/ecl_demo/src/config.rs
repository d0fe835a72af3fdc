//! Demo configuration.

use anyhow::{Context, Result};

/// Environment variable overriding [`DemoConfig::enemy_count`].
pub const ENEMY_COUNT_VAR: &str = "ECL_DEMO_ENEMIES";

/// Number of enemies spawned when the environment does not say otherwise.
pub const DEFAULT_ENEMY_COUNT: usize = 5;

/// Configuration for one demo run.
#[derive(Debug, Clone)]
pub struct DemoConfig {
    /// How many enemies to spawn from the enemy prefab.
    pub enemy_count: usize,
}

impl DemoConfig {
    /// Read the configuration from the environment, falling back to defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if `ECL_DEMO_ENEMIES` is set but not a number.
    pub fn from_env() -> Result<Self> {
        Self::from_value(std::env::var(ENEMY_COUNT_VAR).ok().as_deref())
    }

    fn from_value(raw: Option<&str>) -> Result<Self> {
        let enemy_count = match raw {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("{ENEMY_COUNT_VAR} must be a count, got {raw:?}"))?,
            None => DEFAULT_ENEMY_COUNT,
        };
        Ok(Self { enemy_count })
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            enemy_count: DEFAULT_ENEMY_COUNT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_falls_back_to_default() {
        let config = DemoConfig::from_value(None).unwrap();
        assert_eq!(config.enemy_count, DEFAULT_ENEMY_COUNT);
    }

    #[test]
    fn test_parses_count() {
        let config = DemoConfig::from_value(Some(" 12 ")).unwrap();
        assert_eq!(config.enemy_count, 12);
    }

    #[test]
    fn test_rejects_non_numeric_count() {
        let err = DemoConfig::from_value(Some("lots")).unwrap_err();
        assert!(err.to_string().contains(ENEMY_COUNT_VAR));
        assert!(err.to_string().contains("\"lots\""));
    }
}
