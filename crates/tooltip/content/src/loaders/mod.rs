//! Content loaders for reading resolver inputs from files.
//!
//! Each loader turns one file format into `tooltip-core` records. Text maps
//! are also written back through [`TextLoader::save`].

pub mod bins;
pub mod config;
pub mod factory;
pub mod meta;
pub mod text;

pub use bins::BinLoader;
pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use meta::{MetaLoader, MetaMap};
pub use text::{TextLoader, TextMap};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

/// Helper function to write file contents, creating parent directories.
pub(crate) fn write_file(path: &Path, contents: &str) -> LoadResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| anyhow::anyhow!("Failed to create directory {}: {}", parent.display(), e))?;
    }
    std::fs::write(path, contents)
        .map_err(|e| anyhow::anyhow!("Failed to write file {}: {}", path.display(), e))
}
