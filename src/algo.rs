//! Classic comparison algorithms (bubble, insertion and selection sort, binary search).
//!
//! Every function works on a plain slice and a key extractor, and returns the
//! number of key comparisons it actually performed. Swaps and loop iterations
//! are not counted.
//!
//! The [`Inventory`](crate::core::Inventory) wires these to the item fields;
//! they are public so they can be exercised and benchmarked on their own.

use std::cmp::Ordering;
use std::time::{Duration, Instant};

/// Bubble sort with early exit.
///
/// Pass `i` compares the adjacent pairs of `data[..n - i]`. A pass that
/// performs no swap ends the sort, after its comparisons have been counted.
///
/// # Examples
///
/// ```
/// use backpack::algo::bubble_sort_by;
///
/// let mut data = vec!["c", "b", "a"];
/// let comparisons = bubble_sort_by(&mut data, |s| *s);
///
/// assert_eq!(data, vec!["a", "b", "c"]);
/// assert_eq!(comparisons, 3); // 2 in the first pass, 1 in the second
/// ```
pub fn bubble_sort_by<T, K, F>(data: &mut [T], key: F) -> u64
where
    K: Ord + ?Sized,
    F: Fn(&T) -> &K,
{
    let n = data.len();
    let mut comparisons = 0;

    for i in 0..n.saturating_sub(1) {
        let mut swapped = false;
        for j in 0..n - 1 - i {
            comparisons += 1;
            if key(&data[j]) > key(&data[j + 1]) {
                data.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }

    comparisons
}

/// Insertion sort.
///
/// Each element is moved left past every predecessor whose key is strictly
/// greater, so equal keys keep their relative order. One comparison is counted
/// per predecessor examined, including the one that stops the shift.
pub fn insertion_sort_by<T, K, F>(data: &mut [T], key: F) -> u64
where
    K: Ord + ?Sized,
    F: Fn(&T) -> &K,
{
    let mut comparisons = 0;

    for i in 1..data.len() {
        let mut j = i;
        while j > 0 {
            comparisons += 1;
            if key(&data[j - 1]) > key(&data[j]) {
                // The element being inserted always sits at `j`, so shifting the
                // predecessor right is a single swap.
                data.swap(j - 1, j);
                j -= 1;
            } else {
                break;
            }
        }
    }

    comparisons
}

/// Selection sort.
///
/// For each position the remainder is scanned for the minimum, one comparison
/// per candidate. The minimum is swapped in only when it was found somewhere
/// else, which makes the sort unstable.
pub fn selection_sort_by<T, K, F>(data: &mut [T], key: F) -> u64
where
    K: Ord + ?Sized,
    F: Fn(&T) -> &K,
{
    let n = data.len();
    let mut comparisons = 0;

    for i in 0..n.saturating_sub(1) {
        let mut min_idx = i;
        for j in i + 1..n {
            comparisons += 1;
            if key(&data[j]) < key(&data[min_idx]) {
                min_idx = j;
            }
        }
        if min_idx != i {
            data.swap(i, min_idx);
        }
    }

    comparisons
}

/// Binary search over a slice sorted ascending by `key`.
///
/// Uses the inclusive interval `[lo, hi]` with `mid = lo + (hi - lo) / 2` and
/// counts one comparison per `mid` examined. Returns the index of an element
/// whose key equals `target`, or `None`, together with the comparison count.
///
/// The result is meaningless if `data` is not sorted by `key`.
///
/// # Examples
///
/// ```
/// use backpack::algo::binary_search_by;
///
/// let data = ["alpha", "mike", "zeta"];
/// assert_eq!(binary_search_by(&data, "mike", |s| *s), (Some(1), 1));
/// assert_eq!(binary_search_by(&data, "bravo", |s| *s), (None, 2));
/// ```
pub fn binary_search_by<T, K, F>(data: &[T], target: &K, key: F) -> (Option<usize>, u64)
where
    K: Ord + ?Sized,
    F: Fn(&T) -> &K,
{
    let mut comparisons = 0;
    if data.is_empty() {
        return (None, comparisons);
    }

    let mut lo = 0usize;
    let mut hi = data.len() - 1;

    while lo <= hi {
        let mid = lo + (hi - lo) / 2;
        comparisons += 1;
        match key(&data[mid]).cmp(target) {
            Ordering::Equal => return (Some(mid), comparisons),
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => match mid.checked_sub(1) {
                Some(next) => hi = next,
                // `hi` would drop below zero: the interval is empty.
                None => break,
            },
        }
    }

    (None, comparisons)
}

/// Runs `f` once and returns its result along with the wall-clock time it took.
#[inline]
pub fn timed<R>(f: impl FnOnce() -> R) -> (R, Duration) {
    let start = Instant::now();
    let result = f();
    (result, start.elapsed())
}
