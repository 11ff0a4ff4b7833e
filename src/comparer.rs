/// An equality predicate over keys.
///
/// It should behave as an equivalence relation. Nothing checks this, but if
/// a group's key compares equal to two requested keys, the one requested
/// first wins.
///
/// Any `Fn(&K, &K) -> bool` closure is a comparer:
///
/// ```
/// use keyed_partition::KeyComparer;
///
/// let ignore_case = |a: &&str, b: &&str| a.eq_ignore_ascii_case(b);
/// assert!(ignore_case.equals(&"Apple", &"aPPLE"));
/// ```
pub trait KeyComparer<K: ?Sized> {
    fn equals(&self, a: &K, b: &K) -> bool;
}

impl<K: ?Sized, F> KeyComparer<K> for F
where
    F: Fn(&K, &K) -> bool,
{
    fn equals(&self, a: &K, b: &K) -> bool {
        self(a, b)
    }
}

/// The default comparer: the key type's own [`PartialEq`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalEq;

impl<K: PartialEq + ?Sized> KeyComparer<K> for NaturalEq {
    fn equals(&self, a: &K, b: &K) -> bool {
        a == b
    }
}
