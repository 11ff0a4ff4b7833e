use alloc::vec::Vec;

/// A key together with the elements that were grouped under it.
///
/// This is the shape produced by a prior "group by key" step. Partitioning
/// only ever reads [`key`](Group::key); a group is either handed over whole
/// (into the remainder) or consumed into its elements (into a bucket).
///
/// `Elements` must be [`Default`]: a bucket that no group matched is filled
/// with the default value, which for every sequence type is the empty one.
pub trait Group {
    /// The key the group was formed on.
    type Key;
    /// The sequence of elements a matched group contributes to its bucket.
    type Elements: Default;

    /// Returns the group's key.
    fn key(&self) -> &Self::Key;

    /// Consumes the group, yielding its elements.
    fn into_elements(self) -> Self::Elements;
}

/// An owned group: a key plus the elements that share it, in order.
///
/// # Examples
///
/// ```
/// use keyed_partition::Grouping;
///
/// let g = Grouping::new("a", vec![1, 2]);
/// assert_eq!(*g.key(), "a");
/// assert_eq!(g.elements(), &[1, 2]);
/// assert_eq!(g.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grouping<K, T> {
    key: K,
    elements: Vec<T>,
}

impl<K, T> Grouping<K, T> {
    /// Creates a group from a key and its elements.
    pub fn new(key: K, elements: Vec<T>) -> Self {
        Self { key, elements }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn elements(&self) -> &[T] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Decomposes the group into its key and elements.
    pub fn into_parts(self) -> (K, Vec<T>) {
        (self.key, self.elements)
    }
}

impl<K, T> Group for Grouping<K, T> {
    type Key = K;
    type Elements = Vec<T>;

    fn key(&self) -> &K {
        &self.key
    }

    fn into_elements(self) -> Vec<T> {
        self.elements
    }
}

/// Pairs are groups, so `map.into_iter()` over e.g. a `BTreeMap<K, Vec<T>>`
/// can be partitioned directly.
impl<K, V: Default> Group for (K, V) {
    type Key = K;
    type Elements = V;

    fn key(&self) -> &K {
        &self.0
    }

    fn into_elements(self) -> V {
        self.1
    }
}
