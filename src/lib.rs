//! Eggshell - inventory and combination tracking for the egg assembly event
//!
//! Players collect egg fragments in 45 kinds (positions 1-9 crossed with
//! kind letters a-e) and reassemble them into targets from a preset list
//! of combinations. This crate answers which combinations an inventory
//! can assemble, which fragments are still missing or in surplus, and
//! renders the item lookup links for every fragment in a combination.

pub mod cli;
pub mod domain;
pub mod source;

pub use domain::{Combination, CombinationSet, FragmentId, Inventory, Kind, Tally};
