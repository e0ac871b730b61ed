//! The parade: the shared row players add to and collect from.

pub mod row;

pub use row::{is_collected_by, removable_count, Collected, ParadeRow};
