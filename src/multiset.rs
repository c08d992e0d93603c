use std::hash::Hash;

use crate::{Build, FastHashMap};

fn owned<T: Clone, const SIZE_KNOWN: bool>(src: &[T]) -> Vec<T> {
    if SIZE_KNOWN {
        src.to_vec()
    } else {
        let mut vec = Vec::new();
        for item in src {
            vec.push(item.clone());
        }
        vec
    }
}

fn map<K, V>(capacity: usize) -> FastHashMap<K, V> {
    FastHashMap::with_capacity_and_hasher(capacity, Build::default())
}

/// Sorts owned copies of both sequences and compares them element-wise.
/// Needs only ordering and equality, no hashing.
pub fn eq_by_sort<T: Ord + Clone, const SIZE_KNOWN: bool>(a: &[T], b: &[T]) -> bool {
    assert_eq!(a.len(), b.len(), "sequences must have equal length");
    let mut sorted_a = owned::<T, SIZE_KNOWN>(a);
    sorted_a.sort_unstable();
    let mut sorted_b = owned::<T, SIZE_KNOWN>(b);
    sorted_b.sort_unstable();
    sorted_a == sorted_b
}

/// Hash multiset over owned clones of `b`'s elements, duplicates tracked by
/// multiplicity. Each element of `a` removes one occurrence; a missing key
/// short-circuits false.
pub fn eq_by_multiset<T: Hash + Eq + Clone, const SIZE_KNOWN: bool>(a: &[T], b: &[T]) -> bool {
    assert_eq!(a.len(), b.len(), "sequences must have equal length");
    let mut multiset: FastHashMap<T, usize> = map(if SIZE_KNOWN { a.len() } else { 0 });
    for item in b {
        *multiset.entry(item.clone()).or_insert(0) += 1;
    }
    for item in a {
        match multiset.get_mut(item) {
            Some(count) => {
                *count -= 1;
                if *count == 0 {
                    multiset.remove(item);
                }
            }
            None => return false,
        }
    }
    true
}

/// Borrowed counting map: tally `a`, then drain with default-inserting
/// lookups. An element of `b` fails iff its pre-decrement count is zero,
/// including the zero entry created by the lookup itself when the key was
/// absent.
pub fn eq_by_counting<T: Hash + Eq, const SIZE_KNOWN: bool>(a: &[T], b: &[T]) -> bool {
    assert_eq!(a.len(), b.len(), "sequences must have equal length");
    let mut counts: FastHashMap<&T, usize> = map(if SIZE_KNOWN { a.len() } else { 0 });
    for item in a {
        *counts.entry(item).or_insert(0) += 1;
    }
    for item in b {
        let count = counts.entry(item).or_insert(0);
        if *count == 0 {
            return false;
        }
        *count -= 1;
    }
    true
}
