//! Data-directory loaders for the tooltip resolver.
//!
//! This crate reads the resolver's inputs from disk and writes resolved text back:
//! - Champion metadata (`champion_meta.json`)
//! - Per-champion spell bundles (`<bins_dir>/<alias>.bin.json`)
//! - Per-locale text maps (`champion_text_<locale>.json`)
//! - Resolver configuration (`tooltip.toml`)
//!
//! Resolution itself lives in `tooltip-core`; [`ChampionCatalog`] ties the two
//! together for a whole data directory.

pub mod catalog;
pub mod loaders;

pub use catalog::ChampionCatalog;
pub use loaders::{
    BinLoader, ConfigLoader, ContentFactory, LoadResult, MetaLoader, MetaMap, TextLoader, TextMap,
};
