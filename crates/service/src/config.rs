//! Service configuration.

use cmdcode_codegen::{GeneratorConfig, SingleSymbolPolicy};
use cmdcode_core::{CodeError, Result};

/// Configuration for the command code service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Maximum number of command logs kept by the store
    pub max_logs: usize,
    /// Maximum number of commands accepted in one log (unbounded if None)
    pub max_commands_per_log: Option<usize>,
    /// Capacity of the code table cache
    pub cache_capacity: usize,
    /// Code generation settings
    pub generator: GeneratorConfig,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            max_logs: 100,
            max_commands_per_log: None,
            cache_capacity: 1000,
            generator: GeneratorConfig::default(),
        }
    }
}

impl ServiceConfig {
    /// Start building a configuration from the defaults.
    pub fn builder() -> ServiceConfigBuilder {
        ServiceConfigBuilder::new()
    }

    /// Check that the configuration is usable.
    pub fn validate(&self) -> Result<()> {
        if self.max_logs == 0 {
            return Err(CodeError::InvalidConfig(
                "max_logs must be at least 1".to_string(),
            ));
        }
        if self.cache_capacity == 0 {
            return Err(CodeError::InvalidConfig(
                "cache_capacity must be at least 1".to_string(),
            ));
        }
        if self.max_commands_per_log == Some(0) {
            return Err(CodeError::InvalidConfig(
                "max_commands_per_log must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for [`ServiceConfig`].
#[derive(Debug, Clone, Default)]
pub struct ServiceConfigBuilder {
    config: ServiceConfig,
}

impl ServiceConfigBuilder {
    /// Create a builder with default configuration.
    pub fn new() -> Self {
        Self {
            config: ServiceConfig::default(),
        }
    }

    /// Set the maximum number of stored logs.
    pub fn max_logs(mut self, max_logs: usize) -> Self {
        self.config.max_logs = max_logs;
        self
    }

    /// Limit the number of commands in one log.
    pub fn max_commands_per_log(mut self, max: Option<usize>) -> Self {
        self.config.max_commands_per_log = max;
        self
    }

    /// Set the code table cache capacity.
    pub fn cache_capacity(mut self, capacity: usize) -> Self {
        self.config.cache_capacity = capacity;
        self
    }

    /// Set the code generation settings.
    pub fn generator(mut self, generator: GeneratorConfig) -> Self {
        self.config.generator = generator;
        self
    }

    /// Set the single-symbol policy of the generator.
    pub fn single_symbol(mut self, policy: SingleSymbolPolicy) -> Self {
        self.config.generator.single_symbol = policy;
        self
    }

    /// Validate and build the configuration.
    pub fn build(self) -> Result<ServiceConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServiceConfig::builder().build().unwrap();
        assert_eq!(config.max_logs, 100);
        assert_eq!(config.max_commands_per_log, None);
        assert_eq!(config.cache_capacity, 1000);
        assert_eq!(config.generator.single_symbol, SingleSymbolPolicy::Empty);
    }

    #[test]
    fn test_invalid_values() {
        assert!(ServiceConfig::builder().max_logs(0).build().is_err());
        assert!(ServiceConfig::builder().cache_capacity(0).build().is_err());
        assert!(ServiceConfig::builder()
            .max_commands_per_log(Some(0))
            .build()
            .is_err());
    }

    #[test]
    fn test_single_symbol_passthrough() {
        let config = ServiceConfig::builder()
            .single_symbol(SingleSymbolPolicy::Zero)
            .build()
            .unwrap();
        assert_eq!(config.generator.single_symbol, SingleSymbolPolicy::Zero);
    }
}
