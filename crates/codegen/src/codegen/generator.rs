//! Command code generator.
//!
//! This module ties counting, tree building and emission together into the
//! single call that storage and lookup layers use.

use super::builder::TreeBuilder;
use super::counter::FrequencyCounter;
use super::emitter::CodeEmitter;
use cmdcode_core::{CodeTable, CodeTree, FrequencyTable, SingleSymbolPolicy};
use tracing::debug;

/// Configuration for code generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Whether to use parallel counting for long sequences
    pub parallel: bool,
    /// Minimum sequence length for parallel counting
    pub parallel_threshold: usize,
    /// Code given to the only symbol of a single-symbol sequence
    pub single_symbol: SingleSymbolPolicy,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            parallel_threshold: 10_000,
            single_symbol: SingleSymbolPolicy::Empty,
        }
    }
}

impl GeneratorConfig {
    /// Start building a configuration from the defaults.
    pub fn builder() -> GeneratorConfigBuilder {
        GeneratorConfigBuilder::new()
    }
}

/// Builder for [`GeneratorConfig`].
#[derive(Debug, Clone, Default)]
pub struct GeneratorConfigBuilder {
    config: GeneratorConfig,
}

impl GeneratorConfigBuilder {
    /// Create a builder with default configuration.
    pub fn new() -> Self {
        Self {
            config: GeneratorConfig::default(),
        }
    }

    /// Enable or disable parallel counting.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.config.parallel = parallel;
        self
    }

    /// Set the minimum sequence length for parallel counting.
    pub fn parallel_threshold(mut self, threshold: usize) -> Self {
        self.config.parallel_threshold = threshold;
        self
    }

    /// Set the single-symbol policy.
    pub fn single_symbol(mut self, policy: SingleSymbolPolicy) -> Self {
        self.config.single_symbol = policy;
        self
    }

    /// Finish the configuration.
    pub fn build(self) -> GeneratorConfig {
        self.config
    }
}

/// Frequency-driven prefix-code generator.
///
/// Holds no state between calls; one generator can serve any number of
/// sequences from any number of threads.
#[derive(Debug, Clone, Default)]
pub struct CodeGenerator {
    config: GeneratorConfig,
}

impl CodeGenerator {
    /// Create a generator with the given configuration.
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// The generator's configuration.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate the code table for a sequence of commands.
    ///
    /// An empty sequence yields an empty table.
    pub fn generate<S>(&self, commands: &[S]) -> CodeTable
    where
        S: AsRef<str> + Sync,
    {
        self.generate_with_frequencies(commands).1
    }

    /// Generate the code table and also return the counts it was built from.
    pub fn generate_with_frequencies<S>(&self, commands: &[S]) -> (FrequencyTable, CodeTable)
    where
        S: AsRef<str> + Sync,
    {
        let frequencies = self.count(commands);
        let codes = self.generate_from_frequencies(&frequencies);
        (frequencies, codes)
    }

    /// Generate the code table for precomputed counts.
    pub fn generate_from_frequencies(&self, frequencies: &FrequencyTable) -> CodeTable {
        let Some(tree) = self.build_tree(frequencies) else {
            debug!("empty command sequence, no codes generated");
            return CodeTable::new();
        };

        let codes = CodeEmitter::new(self.config.single_symbol).emit(&tree);
        debug!(
            symbols = codes.len(),
            nodes = tree.len(),
            "generated command codes"
        );
        codes
    }

    /// Count symbol frequencies with this generator's counting strategy.
    pub fn count<S>(&self, commands: &[S]) -> FrequencyTable
    where
        S: AsRef<str> + Sync,
    {
        let counter = if self.config.parallel {
            FrequencyCounter::parallel(self.config.parallel_threshold)
        } else {
            FrequencyCounter::new()
        };
        let frequencies = counter.count(commands);
        debug!(
            commands = commands.len(),
            distinct = frequencies.len(),
            parallel = counter.is_parallel(),
            "counted command frequencies"
        );
        frequencies
    }

    /// Build the merge tree for precomputed counts.
    pub fn build_tree(&self, frequencies: &FrequencyTable) -> Option<CodeTree> {
        TreeBuilder::new().build(frequencies)
    }
}

/// Generate codes for `commands` with the default configuration.
pub fn generate_codes<S>(commands: &[S]) -> CodeTable
where
    S: AsRef<str> + Sync,
{
    CodeGenerator::default().generate(commands)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(table: &CodeTable, symbol: &str) -> Option<String> {
        table.get(symbol).map(|c| c.to_string())
    }

    #[test]
    fn test_command_example() {
        let commands = ["LEFT", "GRAB", "LEFT", "BACK", "LEFT", "BACK", "LEFT"];
        let codes = generate_codes(&commands);

        assert_eq!(codes.len(), 3);
        assert_eq!(code(&codes, "LEFT").as_deref(), Some("1"));
        assert_eq!(code(&codes, "GRAB").as_deref(), Some("00"));
        assert_eq!(code(&codes, "BACK").as_deref(), Some("01"));
        assert!(codes.is_prefix_free());
    }

    #[test]
    fn test_four_equal_symbols() {
        let commands = ["UP", "DOWN", "LEFT", "RIGHT"];
        let codes = generate_codes(&commands);

        let mut all: Vec<String> = codes.iter().map(|(_, c)| c.to_string()).collect();
        all.sort();
        assert_eq!(all, vec!["00", "01", "10", "11"]);
    }

    #[test]
    fn test_empty_input() {
        let commands: Vec<String> = Vec::new();
        let (freqs, codes) = CodeGenerator::default().generate_with_frequencies(&commands);
        assert!(freqs.is_empty());
        assert!(codes.is_empty());
    }

    #[test]
    fn test_single_symbol_default_is_empty_code() {
        let codes = generate_codes(&["GRAB", "GRAB", "GRAB"]);
        assert_eq!(codes.len(), 1);
        assert_eq!(code(&codes, "GRAB").as_deref(), Some(""));
    }

    #[test]
    fn test_single_symbol_zero_policy() {
        let config = GeneratorConfig::builder()
            .single_symbol(SingleSymbolPolicy::Zero)
            .build();
        let codes = CodeGenerator::new(config).generate(&["GRAB"]);
        assert_eq!(code(&codes, "GRAB").as_deref(), Some("0"));
    }

    #[test]
    fn test_two_symbols() {
        let codes = generate_codes(&["A", "B", "B"]);
        assert_eq!(code(&codes, "A").as_deref(), Some("0"));
        assert_eq!(code(&codes, "B").as_deref(), Some("1"));
    }

    #[test]
    fn test_parallel_and_sequential_agree() {
        let commands: Vec<String> = (0..30_000)
            .map(|i| format!("C{}", (i * i) % 101))
            .collect();

        let parallel = CodeGenerator::new(
            GeneratorConfig::builder()
                .parallel(true)
                .parallel_threshold(1)
                .build(),
        );
        let sequential = CodeGenerator::new(GeneratorConfig::builder().parallel(false).build());

        assert_eq!(parallel.generate(&commands), sequential.generate(&commands));
    }

    #[test]
    fn test_builder_defaults() {
        let config = GeneratorConfig::builder().build();
        assert_eq!(config, GeneratorConfig::default());
        assert!(config.parallel);
        assert_eq!(config.parallel_threshold, 10_000);
        assert_eq!(config.single_symbol, SingleSymbolPolicy::Empty);
    }
}
