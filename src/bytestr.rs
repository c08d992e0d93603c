use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// Payload length of `CStyleStr` and of the benchmark datasets.
pub const FIXED_LEN: usize = 100;

/// Capability set shared by the three string representations.
///
/// The equality algorithms and the dataset generator depend on nothing
/// beyond this trait plus the `Eq`/`Ord`/`Hash` supertraits, so the same
/// algorithm bodies run unmodified over every representation.
pub trait ByteStr: Default + Clone + Eq + Ord + Hash {
    /// Sizes the string to `len` bytes. Fixed-size representations assert
    /// that `len` matches their capacity instead of reallocating.
    fn resize(&mut self, len: usize);

    fn as_bytes(&self) -> &[u8];

    fn as_bytes_mut(&mut self) -> &mut [u8];

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Growable heap buffer, the `Vec`-backed baseline representation.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct HeapStr(Vec<u8>);

impl ByteStr for HeapStr {
    fn resize(&mut self, len: usize) {
        self.0.resize(len, 0);
    }

    fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.0
    }

    fn len(&self) -> usize {
        self.0.len()
    }
}

impl Hash for HeapStr {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write(&self.0);
    }
}

/// Inline compile-time-sized array; `resize` only validates the length.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct InlineStr<const N: usize>([u8; N]);

impl<const N: usize> Default for InlineStr<N> {
    fn default() -> Self {
        Self([0; N])
    }
}

impl<const N: usize> ByteStr for InlineStr<N> {
    fn resize(&mut self, len: usize) {
        assert_eq!(len, N, "inline string is fixed at {N} bytes");
    }

    fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.0
    }

    fn len(&self) -> usize {
        N
    }
}

impl<const N: usize> Hash for InlineStr<N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write(&self.0);
    }
}

/// Null-terminated exclusively-owned heap buffer, sized lazily on the first
/// `resize`. Equality and ordering stop at the first NUL, strcmp-style.
///
/// `len()` reports the constant [`FIXED_LEN`] no matter what was written.
/// That only holds for the fixed 100-byte benchmark payloads; this is not a
/// general-purpose string type.
#[derive(Debug, Default)]
pub struct CStyleStr {
    buf: Option<Box<[u8]>>,
}

impl CStyleStr {
    fn c_bytes(&self) -> &[u8] {
        match &self.buf {
            Some(buf) => {
                let end = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
                &buf[..end]
            }
            None => &[],
        }
    }
}

impl Clone for CStyleStr {
    fn clone(&self) -> Self {
        let src = self
            .buf
            .as_deref()
            .expect("clone of unsized CStyleStr");
        let mut out = Self::default();
        out.resize(FIXED_LEN);
        out.as_bytes_mut().copy_from_slice(&src[..FIXED_LEN]);
        out
    }
}

impl PartialEq for CStyleStr {
    fn eq(&self, other: &Self) -> bool {
        self.c_bytes() == other.c_bytes()
    }
}

impl Eq for CStyleStr {}

impl PartialOrd for CStyleStr {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CStyleStr {
    fn cmp(&self, other: &Self) -> Ordering {
        self.c_bytes().cmp(other.c_bytes())
    }
}

impl Hash for CStyleStr {
    // Hashes the fixed window; agrees with Eq only while payloads carry no
    // interior NULs, which holds for the lowercase benchmark data.
    fn hash<H: Hasher>(&self, state: &mut H) {
        let buf = self.buf.as_deref().expect("hash of unsized CStyleStr");
        state.write(&buf[..self.len()]);
    }
}

impl ByteStr for CStyleStr {
    fn resize(&mut self, len: usize) {
        assert!(self.buf.is_none(), "CStyleStr may only be sized once");
        assert_eq!(len, FIXED_LEN, "CStyleStr is fixed at {FIXED_LEN} bytes");
        self.buf = Some(vec![0u8; len + 1].into_boxed_slice());
    }

    fn as_bytes(&self) -> &[u8] {
        let buf = self.buf.as_deref().expect("read of unsized CStyleStr");
        &buf[..FIXED_LEN]
    }

    fn as_bytes_mut(&mut self) -> &mut [u8] {
        let buf = self
            .buf
            .as_deref_mut()
            .expect("write to unsized CStyleStr");
        &mut buf[..FIXED_LEN]
    }

    fn len(&self) -> usize {
        // The logical size is the fixed test length, not the bytes actually
        // written. Kept from the original harness on purpose.
        FIXED_LEN
    }
}
