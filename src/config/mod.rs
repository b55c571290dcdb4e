//! Configuration for the Redemption Engine.
//!
//! This module provides loading of the loyalty program catalog and engine
//! settings from YAML files.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{EngineSettings, Program, ProgramCatalog, ValuationConfig};
