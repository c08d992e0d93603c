use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::bytestr::ByteStr;

/// Trailing bytes drawn independently under `AlmostEqual`.
const SUFFIX_LEN: usize = 4;

/// Seed of the shared-prefix stream. The stream restarts from this point for
/// every element, so AlmostEqual prefixes collide across all elements of
/// both sequences of a pair.
const PREFIX_SEED: u64 = 0x5eed_0f1e_1d5a_11ce;

/// Shape of the synthetic element data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Distribution {
    /// Every byte of every element drawn independently.
    Random,
    /// Shared random prefix, independent 4-byte suffix. Defeats reordering
    /// shortcuts and forces full-payload comparisons.
    AlmostEqual,
}

impl Distribution {
    pub const ALL: [Distribution; 2] = [Distribution::Random, Distribution::AlmostEqual];

    pub fn label(self) -> &'static str {
        match self {
            Distribution::Random => "random",
            Distribution::AlmostEqual => "almost_equal",
        }
    }
}

fn fill(rng: &mut StdRng, bytes: &mut [u8]) {
    for b in bytes {
        *b = rng.gen_range(b'a'..=b'z');
    }
}

/// Generates `n` elements of `m` lowercase-ASCII bytes each. Deterministic
/// for a given `(distribution, seed)` pair.
pub fn generate<T: ByteStr>(n: usize, m: usize, distribution: Distribution, seed: u64) -> Vec<T> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut out = Vec::with_capacity(n);
    match distribution {
        Distribution::Random => {
            for _ in 0..n {
                let mut s = T::default();
                s.resize(m);
                fill(&mut rng, s.as_bytes_mut());
                out.push(s);
            }
        }
        Distribution::AlmostEqual => {
            assert!(m >= SUFFIX_LEN, "elements must hold a {SUFFIX_LEN}-byte suffix");
            let split = m - SUFFIX_LEN;
            for _ in 0..n {
                let mut s = T::default();
                s.resize(m);
                let mut prefix_rng = StdRng::seed_from_u64(PREFIX_SEED);
                fill(&mut prefix_rng, &mut s.as_bytes_mut()[..split]);
                fill(&mut rng, &mut s.as_bytes_mut()[split..]);
                out.push(s);
            }
        }
    }
    out
}

/// Generates the two sequences of one benchmark case from independent
/// suffix streams derived from `seed`.
pub fn generate_pair<T: ByteStr>(
    n: usize,
    m: usize,
    distribution: Distribution,
    seed: u64,
) -> (Vec<T>, Vec<T>) {
    (
        generate(n, m, distribution, seed),
        generate(n, m, distribution, seed ^ 0x9e37_79b9_7f4a_7c15),
    )
}
