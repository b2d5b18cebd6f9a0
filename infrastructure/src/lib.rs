//! Infrastructure layer for council-viz
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: the local session source, the report
//! renderers, and configuration file loading.

pub mod config;
pub mod render;
pub mod source;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileConfig, FileConvertersConfig, FileLabelsConfig, FileOutputConfig,
    FilePaletteConfig,
};
pub use render::{
    ConverterCommands, HtmlRenderer, JsonRenderer, PdfRenderer, PngRenderer, SvgRenderer,
    standard_renderers,
};
pub use source::LocalSessionSource;
