//! Session document sources

mod file;

pub use file::LocalSessionSource;
