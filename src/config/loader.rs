//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the program
//! catalog and engine settings from YAML files.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::BenchmarkSource;

use super::types::{EngineSettings, Program, ProgramCatalog, ValuationConfig};

/// Loads and provides access to the valuation configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory
/// and provides methods to query programs and benchmark values. The
/// configuration is loaded once at startup and never mutated.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/valuation/
/// ├── engine.yaml    # Engine settings (default benchmark, good margin)
/// └── programs.yaml  # Loyalty program catalog with benchmarks
/// ```
///
/// # Example
///
/// ```no_run
/// use redemption_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/valuation").unwrap();
///
/// let program = loader.get_program("aadvantage").unwrap();
/// println!("Program: {} ({}¢/point)", program.name, program.benchmark);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: ValuationConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/valuation")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Any required field is missing from the configuration
    ///
    /// # Example
    ///
    /// ```no_run
    /// use redemption_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/valuation")?;
    /// # Ok::<(), redemption_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let settings_path = path.join("engine.yaml");
        let settings = Self::load_yaml::<EngineSettings>(&settings_path)?;

        let catalog_path = path.join("programs.yaml");
        let catalog = Self::load_yaml::<ProgramCatalog>(&catalog_path)?;

        if catalog.programs.is_empty() {
            return Err(EngineError::ConfigParseError {
                path: catalog_path.display().to_string(),
                message: "program catalog is empty".to_string(),
            });
        }

        let config = ValuationConfig::new(settings, catalog.programs);

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying valuation configuration.
    pub fn config(&self) -> &ValuationConfig {
        &self.config
    }

    /// Returns the engine settings.
    pub fn settings(&self) -> &EngineSettings {
        self.config.settings()
    }

    /// Looks up a program by its code.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use redemption_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/valuation")?;
    /// if let Some(program) = loader.get_program("skymiles") {
    ///     println!("Benchmark: {}¢/point", program.benchmark);
    /// }
    /// # Ok::<(), redemption_engine::error::EngineError>(())
    /// ```
    pub fn get_program(&self, code: &str) -> Option<&Program> {
        self.config.get_program(code)
    }

    /// Returns the benchmark for a program code and where it came from.
    pub fn benchmark_for(&self, code: &str) -> (Decimal, BenchmarkSource) {
        self.config.benchmark_for(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config/valuation"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.settings().version, "2025-08-01");
        assert_eq!(loader.settings().default_benchmark, dec("1.0"));
        assert_eq!(loader.settings().good_margin, dec("0.2"));
    }

    #[test]
    fn test_catalog_has_all_programs() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(loader.config().programs().len(), 26);
    }

    #[test]
    fn test_get_program_aadvantage() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        let program = loader.get_program("aadvantage").unwrap();
        assert_eq!(program.name, "American Airlines AAdvantage");
        assert_eq!(program.benchmark, dec("1.49"));
    }

    #[test]
    fn test_get_program_unknown_returns_none() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert!(loader.get_program("mystery_air").is_none());
    }

    #[test]
    fn test_benchmark_for_known_programs() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        let (benchmark, source) = loader.benchmark_for("mileage_plan");
        assert_eq!(benchmark, dec("1.53"));
        assert_eq!(source, BenchmarkSource::Catalog);

        let (benchmark, source) = loader.benchmark_for("skymiles");
        assert_eq!(benchmark, dec("1.15"));
        assert_eq!(source, BenchmarkSource::Catalog);
    }

    #[test]
    fn test_benchmark_for_unknown_program_uses_default() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        let (benchmark, source) = loader.benchmark_for("mystery_air");
        assert_eq!(benchmark, dec("1.0"));
        assert_eq!(source, BenchmarkSource::Default);
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");
        assert!(result.is_err());

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("engine.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_all_benchmarks_positive() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        for (code, program) in loader.config().programs() {
            assert!(
                program.benchmark > Decimal::ZERO,
                "Program '{}' has non-positive benchmark {}",
                code,
                program.benchmark
            );
        }
    }
}
