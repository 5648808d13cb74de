//! Core types for the backpack inventory.
//!
//! This module defines:
//! - [`Item`]: a named, categorized, prioritized entry.
//! - [`Inventory`]: the bounded, ordered collection and its name-sort bookkeeping.
//! - [`SortKey`], [`SortReport`], [`SearchOutcome`], [`SearchReport`]: what the
//!   algorithm runs return to the caller.

use std::fmt;
use std::time::Duration;

use tracing::debug;

use crate::algo::{binary_search_by, bubble_sort_by, insertion_sort_by, selection_sort_by, timed};
use crate::error::{InventoryError, InventoryResult};

/// Maximum number of items a backpack holds.
pub const CAPACITY: usize = 10;

/// Longest accepted item name, in characters.
pub const MAX_NAME_LEN: usize = 29;

/// Longest accepted category, in characters.
pub const MAX_CATEGORY_LEN: usize = 19;

/// Priority bounds, 1 being the most urgent.
pub const MIN_PRIORITY: u8 = 1;
pub const MAX_PRIORITY: u8 = 10;

/// A single backpack entry.
///
/// Field bounds ([`MAX_NAME_LEN`], [`MAX_CATEGORY_LEN`], the priority range)
/// are checked by whoever builds the item; the inventory stores what it is given.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Item {
    pub name: String,
    pub category: String,
    pub priority: u8,
}

impl Item {
    pub fn new(name: impl Into<String>, category: impl Into<String>, priority: u8) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            priority,
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {:<28} | Category: {:<18} | Priority: {}",
            self.name, self.category, self.priority
        )
    }
}

/// The field an inventory sort orders by. Each key has its own algorithm.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// Bubble sort, byte-lexicographic on `name`.
    Name,
    /// Insertion sort, byte-lexicographic on `category`.
    Category,
    /// Selection sort, ascending on `priority`.
    Priority,
}

impl SortKey {
    /// Name of the algorithm used for this key.
    pub fn algorithm(self) -> &'static str {
        match self {
            SortKey::Name => "Bubble Sort",
            SortKey::Category => "Insertion Sort",
            SortKey::Priority => "Selection Sort",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SortKey::Name => "NAME",
            SortKey::Category => "CATEGORY",
            SortKey::Priority => "PRIORITY",
        })
    }
}

/// Outcome of one sort run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortReport {
    pub key: SortKey,
    pub comparisons: u64,
    pub elapsed: Duration,
}

/// Result of a binary search that was allowed to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    Found(usize),
    NotFound,
}

impl SearchOutcome {
    pub fn index(self) -> Option<usize> {
        match self {
            SearchOutcome::Found(index) => Some(index),
            SearchOutcome::NotFound => None,
        }
    }
}

/// Outcome of one search run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchReport {
    pub outcome: SearchOutcome,
    pub comparisons: u64,
    pub elapsed: Duration,
}

/// A bounded, ordered collection of at most [`CAPACITY`] items.
///
/// Tracks whether the items are currently sorted by name, which is the only
/// state in which [`Inventory::search_by_name`] runs. Any insert, removal or
/// sort by another key clears that flag; only [`Inventory::sort_by_name`] sets it.
///
/// # Examples
///
/// ```
/// use backpack::core::{Inventory, Item, SearchOutcome};
///
/// let mut inventory = Inventory::new();
/// inventory.insert(Item::new("Zeta", "ctrl", 5)).unwrap();
/// inventory.insert(Item::new("Alpha", "supp", 2)).unwrap();
///
/// inventory.sort_by_name();
/// let report = inventory.search_by_name("Zeta").unwrap();
/// assert_eq!(report.outcome, SearchOutcome::Found(1));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Inventory {
    items: Vec<Item>,
    sorted_by_name: bool,
}

impl Inventory {
    /// Creates an empty inventory.
    pub fn new() -> Self {
        Self {
            items: Vec::with_capacity(CAPACITY),
            sorted_by_name: false,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= CAPACITY
    }

    pub fn capacity(&self) -> usize {
        CAPACITY
    }

    /// Returns `true` only right after a name sort with no mutation since.
    pub fn is_sorted_by_name(&self) -> bool {
        self.sorted_by_name
    }

    /// The items in their current order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    pub fn get(&self, index: usize) -> InventoryResult<&Item> {
        self.items.get(index).ok_or(InventoryError::IndexOutOfRange {
            index,
            len: self.items.len(),
        })
    }

    /// Appends `item` at the end.
    ///
    /// Fails with [`InventoryError::CapacityExceeded`] when the backpack is full.
    pub fn insert(&mut self, item: Item) -> InventoryResult<()> {
        if self.is_full() {
            return Err(InventoryError::CapacityExceeded { capacity: CAPACITY });
        }
        debug!(name = %item.name, len = self.items.len() + 1, "item inserted");
        self.items.push(item);
        self.sorted_by_name = false;
        Ok(())
    }

    /// Removes the item at `index`, shifting everything after it one slot left.
    ///
    /// Fails with [`InventoryError::IndexOutOfRange`] when `index >= len`.
    pub fn remove_at(&mut self, index: usize) -> InventoryResult<Item> {
        let len = self.items.len();
        if index >= len {
            return Err(InventoryError::IndexOutOfRange { index, len });
        }
        let removed = self.items.remove(index);
        self.sorted_by_name = false;
        debug!(index, name = %removed.name, len = self.items.len(), "item removed");
        Ok(removed)
    }

    /// Sorts by `key` using the algorithm assigned to it.
    pub fn sort(&mut self, key: SortKey) -> SortReport {
        let items = self.items.as_mut_slice();
        let (comparisons, elapsed) = timed(|| match key {
            SortKey::Name => bubble_sort_by(items, |item| item.name.as_str()),
            SortKey::Category => insertion_sort_by(items, |item| item.category.as_str()),
            SortKey::Priority => selection_sort_by(items, |item| &item.priority),
        });
        self.sorted_by_name = key == SortKey::Name;

        debug!(
            %key,
            algorithm = key.algorithm(),
            comparisons,
            elapsed = ?elapsed,
            len = self.items.len(),
            "inventory sorted"
        );
        SortReport {
            key,
            comparisons,
            elapsed,
        }
    }

    pub fn sort_by_name(&mut self) -> SortReport {
        self.sort(SortKey::Name)
    }

    pub fn sort_by_category(&mut self) -> SortReport {
        self.sort(SortKey::Category)
    }

    pub fn sort_by_priority(&mut self) -> SortReport {
        self.sort(SortKey::Priority)
    }

    /// Binary-searches for an item named exactly `name`.
    ///
    /// Refuses with [`InventoryError::PreconditionNotMet`], without looking at
    /// any item, unless the inventory is currently sorted by name.
    pub fn search_by_name(&self, name: &str) -> InventoryResult<SearchReport> {
        if !self.sorted_by_name {
            return Err(InventoryError::PreconditionNotMet);
        }

        let ((index, comparisons), elapsed) =
            timed(|| binary_search_by(self.items.as_slice(), name, |item| item.name.as_str()));
        let outcome = match index {
            Some(index) => SearchOutcome::Found(index),
            None => SearchOutcome::NotFound,
        };

        debug!(name, ?outcome, comparisons, "binary search finished");
        Ok(SearchReport {
            outcome,
            comparisons,
            elapsed,
        })
    }
}

impl<'a> IntoIterator for &'a Inventory {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
