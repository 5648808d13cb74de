//! # Backpack
//!
//! `backpack` manages a fixed-capacity inventory of up to [`CAPACITY`] items, each
//! with a name, a category and a priority, and lets you reorder and query it with
//! three textbook sorting algorithms and a binary search.
//!
//! Every algorithm run reports how many key comparisons it performed and how long
//! it took, which makes the crate a small workbench for comparing them.
//!
//! ## Key Features
//!
//! - **Bounded inventory**: [`Inventory`] never holds more than [`CAPACITY`] items;
//!   removal is order-preserving.
//! - **One algorithm per key**: bubble sort by name, insertion sort by category,
//!   selection sort by priority, selected through [`SortKey`].
//! - **Guarded search**: [`Inventory::search_by_name`] only runs right after a name
//!   sort, and says so with [`InventoryError::PreconditionNotMet`] otherwise.
//! - **Instrumented**: [`SortReport`] and [`SearchReport`] carry comparison counts
//!   and elapsed time.
//!
//! ## Usage
//!
//! ```rust
//! use backpack::prelude::*;
//!
//! let mut inventory = Inventory::new();
//! inventory.insert(Item::new("Zeta", "ctrl", 5)).unwrap();
//! inventory.insert(Item::new("Alpha", "supp", 2)).unwrap();
//! inventory.insert(Item::new("Mike", "prop", 9)).unwrap();
//!
//! let report = inventory.sort(SortKey::Name);
//! assert_eq!(report.comparisons, 3);
//!
//! let found = inventory.search_by_name("Mike").unwrap();
//! assert_eq!(found.outcome, SearchOutcome::Found(1));
//!
//! inventory.remove_at(0).unwrap();
//! assert_eq!(
//!     inventory.search_by_name("Mike"),
//!     Err(InventoryError::PreconditionNotMet)
//! );
//! ```
//!
//! The slice-level algorithms in [`algo`] work on any data with an `Ord` key:
//!
//! ```rust
//! use backpack::algo::selection_sort_by;
//!
//! let mut priorities = vec![5u8, 3, 5, 1];
//! let comparisons = selection_sort_by(&mut priorities, |p| p);
//!
//! assert_eq!(priorities, vec![1, 3, 5, 5]);
//! assert_eq!(comparisons, 6);
//! ```
//!
//! The `backpack` binary wraps the inventory in an interactive menu, see [`shell`].

pub mod algo;
pub mod config;
pub mod core;
pub mod error;
pub mod observability;
pub mod shell;

pub use crate::core::{
    CAPACITY, Inventory, Item, SearchOutcome, SearchReport, SortKey, SortReport,
};
pub use error::{InventoryError, InventoryResult};

pub mod prelude {
    pub use crate::core::{Inventory, Item, SearchOutcome, SearchReport, SortKey, SortReport};
    pub use crate::error::{InventoryError, InventoryResult};
}
