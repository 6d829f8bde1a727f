//! Domain model
//!
//! The fragment/combination data model and the derivation logic over it,
//! free of any I/O concerns.

mod combination;
mod fragment;
mod inventory;
mod reconcile;
mod tally;

pub use combination::{Combination, CombinationError, CombinationSet, COMBINATION_LEN};
pub use fragment::{FragmentError, FragmentId, Kind, ITEM_INFO_URL};
pub use inventory::Inventory;
pub use reconcile::{achievable, reconcile, Delta, Reconciliation};
pub use tally::Tally;
