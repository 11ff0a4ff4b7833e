use alloc::vec::Vec;

use crate::{Grouping, PartitionGroups};

/// Splits `source` into the elements that satisfy `predicate` and those that
/// do not, both in encounter order.
///
/// # Examples
///
/// ```
/// use keyed_partition::partition_where;
///
/// let (short, long) = partition_where(["a", "abc", "ab", "abcd"], |s| s.len() < 3);
/// assert_eq!(short, ["a", "ab"]);
/// assert_eq!(long, ["abc", "abcd"]);
/// ```
pub fn partition_where<I, P>(source: I, predicate: P) -> (Vec<I::Item>, Vec<I::Item>)
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    partition_where_with(source, predicate, |matching, rest| (matching, rest))
}

/// Groups `source` on `predicate` and hands the `true` and `false` groups to
/// `result_selector`.
///
/// `predicate` is called once per element, in order, before the selector
/// runs.
pub fn partition_where_with<I, P, R, F>(source: I, mut predicate: P, result_selector: F) -> R
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
    F: FnOnce(Vec<I::Item>, Vec<I::Item>) -> R,
{
    let mut matching = Vec::new();
    let mut rest = Vec::new();
    for item in source {
        if predicate(&item) {
            matching.push(item);
        } else {
            rest.push(item);
        }
    }

    [Grouping::new(true, matching), Grouping::new(false, rest)].partition_bool(result_selector)
}
