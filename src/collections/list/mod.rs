//! Linked sequences with stable, generational node handles.

mod slot_list;

pub use slot_list::{NodeHandle, SlotList, SlotListIter};
