//! Configuration file loading for ideascore
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment variables prefixed `IDEASCORE_` (nested keys split on `__`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./ideascore.toml` or `./.ideascore.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/ideascore/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileBehaviorConfig, FileConfig, FileGeneratorConfig, FileOutputConfig,
    FileOutputFormat, FileProviderConfig, FileProvidersConfig,
};
pub use loader::ConfigLoader;
