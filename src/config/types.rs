//! Configuration types for redemption valuation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;

use crate::models::BenchmarkSource;

/// Engine settings and metadata from `engine.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineSettings {
    /// The human-readable name of the engine configuration.
    pub name: String,
    /// The version or effective date of the benchmark data.
    pub version: String,
    /// URL of the valuation source the benchmarks were taken from.
    pub source_url: String,
    /// Benchmark applied when a program is not in the catalog, in cents per point.
    pub default_benchmark: Decimal,
    /// Margin above benchmark within which a redemption is merely "good".
    pub good_margin: Decimal,
}

/// A loyalty program in the catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct Program {
    /// The human-readable program name (e.g., "American Airlines AAdvantage").
    pub name: String,
    /// The program's benchmark point value in cents per point.
    pub benchmark: Decimal,
}

/// Program catalog file structure (`programs.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct ProgramCatalog {
    /// Map of program code to program details.
    pub programs: HashMap<String, Program>,
}

/// The complete valuation configuration loaded from YAML files.
///
/// Read-only for the process lifetime; there is no reload mechanism.
#[derive(Debug, Clone)]
pub struct ValuationConfig {
    /// Engine settings and metadata.
    settings: EngineSettings,
    /// Loyalty programs keyed by code.
    programs: HashMap<String, Program>,
}

impl ValuationConfig {
    /// Creates a new ValuationConfig from its component parts.
    pub fn new(settings: EngineSettings, programs: HashMap<String, Program>) -> Self {
        Self { settings, programs }
    }

    /// Returns the engine settings.
    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Returns all programs in the catalog.
    pub fn programs(&self) -> &HashMap<String, Program> {
        &self.programs
    }

    /// Looks up a program by its code.
    pub fn get_program(&self, code: &str) -> Option<&Program> {
        self.programs.get(code)
    }

    /// Returns the benchmark for a program code and where it came from.
    ///
    /// Unknown codes fall back to the configured default benchmark; callers
    /// surface the fallback through an audit warning.
    pub fn benchmark_for(&self, code: &str) -> (Decimal, BenchmarkSource) {
        match self.programs.get(code) {
            Some(program) => (program.benchmark, BenchmarkSource::Catalog),
            None => (self.settings.default_benchmark, BenchmarkSource::Default),
        }
    }
}
