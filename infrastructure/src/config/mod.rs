//! Configuration file loading for council-viz
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `COUNCIL_VIZ_*` environment variables (`__` separates sections)
//! 2. `--config <path>` specified file
//! 3. Project root: `./council-viz.toml` or `./.council-viz.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/council-viz/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileConfig, FileConvertersConfig, FileLabelsConfig, FileOutputConfig, FilePaletteConfig,
};
pub use loader::ConfigLoader;
