//! Key ranges for ordered index scans.

use core::ops::{Bound, RangeBounds};

/// A key range for index queries.
#[derive(Clone, Debug, PartialEq)]
pub enum KeyRange<K> {
    /// All keys
    All,
    /// A single key (equality)
    Only(K),
    /// Keys >= lower bound
    LowerBound { value: K, exclusive: bool },
    /// Keys <= upper bound
    UpperBound { value: K, exclusive: bool },
    /// Keys between lower and upper bounds
    Bound {
        lower: K,
        upper: K,
        lower_exclusive: bool,
        upper_exclusive: bool,
    },
}

impl<K: Ord> KeyRange<K> {
    /// Creates a range for all keys.
    pub fn all() -> Self {
        KeyRange::All
    }

    /// Creates a range for a single key.
    pub fn only(key: K) -> Self {
        KeyRange::Only(key)
    }

    /// Creates a range with a lower bound.
    pub fn lower_bound(value: K, exclusive: bool) -> Self {
        KeyRange::LowerBound { value, exclusive }
    }

    /// Creates a range with an upper bound.
    pub fn upper_bound(value: K, exclusive: bool) -> Self {
        KeyRange::UpperBound { value, exclusive }
    }

    /// Creates a range with both bounds.
    pub fn bound(lower: K, upper: K, lower_exclusive: bool, upper_exclusive: bool) -> Self {
        KeyRange::Bound {
            lower,
            upper,
            lower_exclusive,
            upper_exclusive,
        }
    }

    /// Returns true if this range represents a single value (equality).
    pub fn is_only(&self) -> bool {
        matches!(self, KeyRange::Only(_))
    }

    /// Returns true if this range represents all values (unbounded).
    pub fn is_all(&self) -> bool {
        matches!(self, KeyRange::All)
    }

    /// Returns true if no key can fall inside this range.
    pub fn is_empty_range(&self) -> bool {
        match self {
            KeyRange::Bound {
                lower,
                upper,
                lower_exclusive,
                upper_exclusive,
            } => lower > upper || (lower == upper && (*lower_exclusive || *upper_exclusive)),
            _ => false,
        }
    }

    /// Checks if a key is within this range.
    pub fn contains(&self, key: &K) -> bool {
        RangeBounds::<K>::contains(&self.as_bounds(), key)
    }

    /// Returns the start and end bounds of this range.
    pub fn as_bounds(&self) -> (Bound<&K>, Bound<&K>) {
        fn edge<T>(value: &T, exclusive: bool) -> Bound<&T> {
            if exclusive {
                Bound::Excluded(value)
            } else {
                Bound::Included(value)
            }
        }
        match self {
            KeyRange::All => (Bound::Unbounded, Bound::Unbounded),
            KeyRange::Only(k) => (Bound::Included(k), Bound::Included(k)),
            KeyRange::LowerBound { value, exclusive } => (edge(value, *exclusive), Bound::Unbounded),
            KeyRange::UpperBound { value, exclusive } => (Bound::Unbounded, edge(value, *exclusive)),
            KeyRange::Bound {
                lower,
                upper,
                lower_exclusive,
                upper_exclusive,
            } => (edge(lower, *lower_exclusive), edge(upper, *upper_exclusive)),
        }
    }

    /// Applies `f` to every key held by this range.
    pub fn try_for_each_key<E>(&self, mut f: impl FnMut(&K) -> Result<(), E>) -> Result<(), E> {
        match self {
            KeyRange::All => Ok(()),
            KeyRange::Only(k) => f(k),
            KeyRange::LowerBound { value, .. } | KeyRange::UpperBound { value, .. } => f(value),
            KeyRange::Bound { lower, upper, .. } => {
                f(lower)?;
                f(upper)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;
    use rowflow_core::Value;

    fn key(a: i64, b: &str) -> Vec<Value> {
        vec![Value::Int64(a), b.into()]
    }

    #[test]
    fn test_only_and_all() {
        let only = KeyRange::only(key(1, "x"));
        assert!(only.is_only());
        assert!(only.contains(&key(1, "x")));
        assert!(!only.contains(&key(1, "y")));

        let all: KeyRange<Vec<Value>> = KeyRange::all();
        assert!(all.is_all());
        assert!(all.contains(&vec![Value::Null, Value::Null]));
    }

    #[test]
    fn test_half_open_ranges() {
        let from = KeyRange::lower_bound(5, true);
        assert!(!from.contains(&5));
        assert!(from.contains(&6));

        let to = KeyRange::upper_bound(5, false);
        assert!(to.contains(&5));
        assert!(!to.contains(&6));
    }

    #[test]
    fn test_composite_bound_is_lexicographic() {
        let range = KeyRange::bound(key(1, "m"), key(2, "c"), false, true);
        assert!(range.contains(&key(1, "m")));
        assert!(range.contains(&key(1, "z")));
        assert!(range.contains(&key(2, "a")));
        assert!(!range.contains(&key(2, "c")));
        assert!(!range.contains(&key(1, "a")));
    }

    #[test]
    fn test_empty_range() {
        assert!(KeyRange::bound(7, 3, false, false).is_empty_range());
        assert!(KeyRange::bound(3, 3, true, false).is_empty_range());
        assert!(!KeyRange::bound(3, 3, false, false).is_empty_range());
        assert!(!KeyRange::<i32>::all().is_empty_range());
    }

    #[test]
    fn test_as_bounds() {
        let range = KeyRange::bound(1, 2, true, false);
        assert_eq!(range.as_bounds(), (Bound::Excluded(&1), Bound::Included(&2)));
        let only = KeyRange::only(4);
        assert_eq!(only.as_bounds(), (Bound::Included(&4), Bound::Included(&4)));
    }

    #[test]
    fn test_try_for_each_key() {
        let range = KeyRange::bound(1, 9, false, false);
        let mut seen = Vec::new();
        range
            .try_for_each_key(|k| {
                seen.push(*k);
                Ok::<(), ()>(())
            })
            .unwrap();
        assert_eq!(seen, vec![1, 9]);
        assert_eq!(KeyRange::only(3).try_for_each_key(|_| Err("bad")), Err("bad"));
    }
}
