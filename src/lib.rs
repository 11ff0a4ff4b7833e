//! Classify keyed groups into requested buckets plus a remainder.
//!
//! Given a sequence of groups (a key plus its elements, as produced by a
//! "group by key" step) and one to three requested keys, [`PartitionGroups`]
//! makes a single pass over the groups. Each group whose key equals a
//! requested key has its elements placed in that key's bucket. Every other
//! group goes, whole, into the remainder. The buckets (in request order) and
//! the remainder are then handed to a result selector whose return value is
//! the result of the call.
//!
//! The rules are few but exact:
//!
//! - a bucket nobody matched is empty, never missing;
//! - if a group's key equals several requested keys, the first requested
//!   key wins;
//! - if several groups match the same key, the **last** one fills the bucket
//!   and the earlier ones are dropped (they do not go to the remainder);
//! - the remainder keeps the input order.
//!
//! ## Examples
//!
//! ### Two keys and a remainder
//!
//! ```rust
//! use keyed_partition::{Grouping, PartitionGroups};
//!
//! let groups = vec![
//!     Grouping::new("a", vec![1, 2]),
//!     Grouping::new("b", vec![3]),
//!     Grouping::new("c", vec![4, 5]),
//! ];
//!
//! let (a, c, rest) = groups.partition_two("a", "c", |a, c, rest| (a, c, rest));
//! assert_eq!(a, [1, 2]);
//! assert_eq!(c, [4, 5]);
//! assert_eq!(rest, [Grouping::new("b", vec![3])]);
//! ```
//!
//! ### Grouped maps and custom equality
//!
//! Any `(key, elements)` pair is a group, so a map can be partitioned
//! directly. A comparer can be any closure over two keys:
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use keyed_partition::PartitionGroups;
//!
//! let mut by_name: BTreeMap<&str, Vec<u32>> = BTreeMap::new();
//! by_name.insert("Alice", vec![1]);
//! by_name.insert("bob", vec![2, 3]);
//! by_name.insert("carol", vec![4]);
//!
//! let ignore_case = |a: &&str, b: &&str| a.eq_ignore_ascii_case(b);
//! let (alice, bob, others) =
//!     by_name.partition_two_by("ALICE", "Bob", ignore_case, |alice, bob, rest| {
//!         (alice, bob, rest.len())
//!     });
//!
//! assert_eq!(alice, [1]);
//! assert_eq!(bob, [2, 3]);
//! assert_eq!(others, 1);
//! ```
//!
//! ### Boolean keys
//!
//! ```rust
//! use keyed_partition::{partition_where, Grouping, PartitionGroups};
//!
//! let groups = vec![Grouping::new(true, vec![1, 2]), Grouping::new(false, vec![3])];
//! let total = groups.partition_bool(|yes, no| yes.len() * 10 + no.len());
//! assert_eq!(total, 21);
//!
//! // ungrouped input can be split by a predicate
//! let (even, odd) = partition_where(1..=6, |n| n % 2 == 0);
//! assert_eq!(even, [2, 4, 6]);
//! assert_eq!(odd, [1, 3, 5]);
//! ```
#![cfg_attr(not(test), no_std)]

extern crate alloc;

use alloc::vec::Vec;
use core::borrow::Borrow;

use log::{debug, trace};

mod comparer;
mod error;
mod group;
mod predicate;

pub use comparer::{KeyComparer, NaturalEq};
pub use error::PartitionError;
pub use group::{Group, Grouping};
pub use predicate::{partition_where, partition_where_with};

/// The largest number of keys a single pass can isolate.
pub const MAX_KEYS: usize = 3;

/// Runs the classification pass shared by every public entry point.
///
/// `keys` holds between one and [`MAX_KEYS`] requested keys; the returned
/// buckets past `keys.len()` are always empty.
fn classify<G, K, C>(
    source: impl IntoIterator<Item = G>,
    keys: &[K],
    comparer: &C,
) -> ([G::Elements; MAX_KEYS], Vec<G>)
where
    G: Group,
    K: Borrow<G::Key>,
    C: KeyComparer<G::Key> + ?Sized,
{
    debug_assert!(
        (1..=MAX_KEYS).contains(&keys.len()),
        "classify called with {} keys",
        keys.len()
    );

    let mut buckets: [G::Elements; MAX_KEYS] = Default::default();
    // Vec::new does not allocate until the first non-matching group
    let mut remainder = Vec::new();
    let mut seen = 0usize;

    for group in source {
        seen += 1;
        let slot = keys
            .iter()
            .position(|key| comparer.equals(group.key(), Borrow::<G::Key>::borrow(key)));
        match slot {
            // last write wins: an earlier group matching the same key is dropped
            Some(index) => buckets[index] = group.into_elements(),
            None => remainder.push(group),
        }
    }

    trace!(
        "partitioned {} groups over {} keys: {} matched, {} in remainder",
        seen,
        keys.len(),
        seen - remainder.len(),
        remainder.len()
    );

    (buckets, remainder)
}

/// Partitioning of keyed groups, available on anything that iterates over
/// [`Group`]s.
///
/// Every method consumes the source exactly once, before the result selector
/// runs, and returns the selector's value unchanged. Panics raised while
/// iterating or inside the selector propagate as is.
pub trait PartitionGroups<G: Group>: IntoIterator<Item = G> + Sized {
    /// Isolates the group with key `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use keyed_partition::{Grouping, PartitionGroups};
    ///
    /// let groups = vec![Grouping::new("x", vec![1]), Grouping::new("x", vec![2])];
    ///
    /// // the later of two groups with the same key wins
    /// let (x, rest) = groups.partition_one("x", |x, rest| (x, rest));
    /// assert_eq!(x, [2]);
    /// assert!(rest.is_empty());
    /// ```
    fn partition_one<R, F>(self, key: G::Key, result_selector: F) -> R
    where
        G::Key: PartialEq,
        F: FnOnce(G::Elements, Vec<G>) -> R,
    {
        self.partition_one_by(key, NaturalEq, result_selector)
    }

    /// Isolates the group with key `key`, comparing keys with `comparer`.
    fn partition_one_by<C, R, F>(self, key: G::Key, comparer: C, result_selector: F) -> R
    where
        C: KeyComparer<G::Key>,
        F: FnOnce(G::Elements, Vec<G>) -> R,
    {
        let ([first, _, _], remainder) = classify(self, &[key], &comparer);
        result_selector(first, remainder)
    }

    /// Isolates the groups with keys `key1` and `key2`.
    fn partition_two<R, F>(self, key1: G::Key, key2: G::Key, result_selector: F) -> R
    where
        G::Key: PartialEq,
        F: FnOnce(G::Elements, G::Elements, Vec<G>) -> R,
    {
        self.partition_two_by(key1, key2, NaturalEq, result_selector)
    }

    /// Isolates the groups with keys `key1` and `key2`, comparing keys with
    /// `comparer`. A key equal to both requested keys lands in `key1`'s bucket.
    fn partition_two_by<C, R, F>(
        self,
        key1: G::Key,
        key2: G::Key,
        comparer: C,
        result_selector: F,
    ) -> R
    where
        C: KeyComparer<G::Key>,
        F: FnOnce(G::Elements, G::Elements, Vec<G>) -> R,
    {
        let ([first, second, _], remainder) = classify(self, &[key1, key2], &comparer);
        result_selector(first, second, remainder)
    }

    /// Isolates the groups with keys `key1`, `key2` and `key3`.
    fn partition_three<R, F>(
        self,
        key1: G::Key,
        key2: G::Key,
        key3: G::Key,
        result_selector: F,
    ) -> R
    where
        G::Key: PartialEq,
        F: FnOnce(G::Elements, G::Elements, G::Elements, Vec<G>) -> R,
    {
        self.partition_three_by(key1, key2, key3, NaturalEq, result_selector)
    }

    /// Isolates the groups with keys `key1`, `key2` and `key3`, comparing keys
    /// with `comparer`. Ties go to the earliest requested key.
    fn partition_three_by<C, R, F>(
        self,
        key1: G::Key,
        key2: G::Key,
        key3: G::Key,
        comparer: C,
        result_selector: F,
    ) -> R
    where
        C: KeyComparer<G::Key>,
        F: FnOnce(G::Elements, G::Elements, G::Elements, Vec<G>) -> R,
    {
        let ([first, second, third], remainder) =
            classify(self, &[key1, key2, key3], &comparer);
        result_selector(first, second, third, remainder)
    }

    /// Splits Boolean-keyed groups into the `true` and `false` buckets.
    ///
    /// # Examples
    ///
    /// ```
    /// use keyed_partition::{Grouping, PartitionGroups};
    ///
    /// let groups = vec![Grouping::new(false, vec![3]), Grouping::new(true, vec![1, 2])];
    /// let (yes, no) = groups.partition_bool(|yes, no| (yes, no));
    /// assert_eq!(yes, [1, 2]);
    /// assert_eq!(no, [3]);
    /// ```
    fn partition_bool<R, F>(self, result_selector: F) -> R
    where
        G: Group<Key = bool>,
        F: FnOnce(G::Elements, G::Elements) -> R,
    {
        self.partition_two(true, false, |yes, no, _| result_selector(yes, no))
    }

    /// Splits groups keyed by `Option<bool>` into the `Some(true)`,
    /// `Some(false)` and `None` buckets.
    fn partition_nullable_bool<R, F>(self, result_selector: F) -> R
    where
        G: Group<Key = Option<bool>>,
        F: FnOnce(G::Elements, G::Elements, G::Elements) -> R,
    {
        self.partition_three(Some(true), Some(false), None, |yes, no, unknown, _| {
            result_selector(yes, no, unknown)
        })
    }

    /// Isolates the groups matching a runtime list of keys.
    ///
    /// The selector receives exactly `keys.len()` buckets, in the order of
    /// `keys`.
    ///
    /// # Errors
    ///
    /// Returns [`PartitionError::KeyCount`] if `keys` is empty or longer than
    /// [`MAX_KEYS`]. The source is not consumed and the selector is not called.
    ///
    /// # Examples
    ///
    /// ```
    /// use keyed_partition::{Grouping, PartitionError, PartitionGroups};
    ///
    /// let groups = vec![Grouping::new(1, vec!['a']), Grouping::new(2, vec!['b'])];
    /// let buckets = groups.clone().partition_keys(&[2], |buckets, _| buckets);
    /// assert_eq!(buckets, Ok(vec![vec!['b']]));
    ///
    /// let err = groups.partition_keys(&[1, 2, 3, 4], |buckets, _| buckets);
    /// assert_eq!(err, Err(PartitionError::KeyCount(4)));
    /// ```
    fn partition_keys<R, F>(self, keys: &[G::Key], result_selector: F) -> Result<R, PartitionError>
    where
        G::Key: PartialEq,
        F: FnOnce(Vec<G::Elements>, Vec<G>) -> R,
    {
        self.partition_keys_by(keys, NaturalEq, result_selector)
    }

    /// Isolates the groups matching a runtime list of keys, comparing keys
    /// with `comparer`.
    ///
    /// # Errors
    ///
    /// Returns [`PartitionError::KeyCount`] if `keys` is empty or longer than
    /// [`MAX_KEYS`].
    fn partition_keys_by<C, R, F>(
        self,
        keys: &[G::Key],
        comparer: C,
        result_selector: F,
    ) -> Result<R, PartitionError>
    where
        C: KeyComparer<G::Key>,
        F: FnOnce(Vec<G::Elements>, Vec<G>) -> R,
    {
        if !(1..=MAX_KEYS).contains(&keys.len()) {
            debug!("rejecting partition over {} keys", keys.len());
            return Err(PartitionError::KeyCount(keys.len()));
        }

        let (buckets, remainder) = classify(self, keys, &comparer);
        let buckets = buckets.into_iter().take(keys.len()).collect();
        Ok(result_selector(buckets, remainder))
    }
}

impl<G: Group, I: IntoIterator<Item = G>> PartitionGroups<G> for I {}
