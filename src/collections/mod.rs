//! Collections underpinning the graph representation.
//!
//! Organized by data structure type:
//! - `hash`: hash-based keyed stores
//! - `list`: linked sequences with stable node handles

pub mod hash;
pub mod list;

pub use hash::ChainMap;
pub use list::{NodeHandle, SlotList};
