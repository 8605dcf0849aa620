//! Inventory domain module.
//!
//! This crate contains the end-of-day aging rules for shop stock, implemented
//! purely as deterministic domain logic (no IO, no storage).

pub mod category;
pub mod item;
pub mod report;
pub mod shop;

pub use category::{Category, check_invariants, update_all, update_one};
pub use item::Item;
pub use shop::GildedRose;
