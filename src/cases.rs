use crate::bytestr::ByteStr;
use crate::dataset::Distribution;
use crate::multiset::{eq_by_counting, eq_by_multiset, eq_by_sort};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Algorithm {
    Sort,
    HashMultiset,
    CountingMap,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [
        Algorithm::Sort,
        Algorithm::HashMultiset,
        Algorithm::CountingMap,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Algorithm::Sort => "sort",
            Algorithm::HashMultiset => "hash_multiset",
            Algorithm::CountingMap => "count_map",
        }
    }
}

/// One measured benchmark configuration, immutable once built.
#[derive(Clone, Copy, Debug)]
pub struct CaseSpec {
    pub algorithm: Algorithm,
    /// Whether hash tables and owned vectors pre-reserve the input length.
    /// No effect on correctness, only on allocation and rehash cost.
    pub size_known: bool,
    pub distribution: Distribution,
    pub elem_len: usize,
}

impl CaseSpec {
    /// Full configuration space for one representation: 3 algorithms x
    /// {size known, unknown} x 2 distributions.
    pub fn all(elem_len: usize) -> Vec<CaseSpec> {
        let mut cases = Vec::new();
        for distribution in Distribution::ALL {
            for algorithm in Algorithm::ALL {
                for size_known in [true, false] {
                    cases.push(CaseSpec {
                        algorithm,
                        size_known,
                        distribution,
                        elem_len,
                    });
                }
            }
        }
        cases
    }

    /// Benchmark id: `algorithm[-unknown_size]/repr/distribution/elem_len`.
    pub fn name(&self, repr: &str) -> String {
        let suffix = if self.size_known { "" } else { "-unknown_size" };
        format!(
            "{}{suffix}/{repr}/{}/{}",
            self.algorithm.label(),
            self.distribution.label(),
            self.elem_len
        )
    }

    pub fn run<T: ByteStr>(&self, a: &[T], b: &[T]) -> bool {
        match (self.algorithm, self.size_known) {
            (Algorithm::Sort, true) => eq_by_sort::<T, true>(a, b),
            (Algorithm::Sort, false) => eq_by_sort::<T, false>(a, b),
            (Algorithm::HashMultiset, true) => eq_by_multiset::<T, true>(a, b),
            (Algorithm::HashMultiset, false) => eq_by_multiset::<T, false>(a, b),
            (Algorithm::CountingMap, true) => eq_by_counting::<T, true>(a, b),
            (Algorithm::CountingMap, false) => eq_by_counting::<T, false>(a, b),
        }
    }
}
