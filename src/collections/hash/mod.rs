//! Hash-based keyed stores.

mod chain_map;

pub use chain_map::ChainMap;
