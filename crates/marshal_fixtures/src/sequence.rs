//! The canonical zero-to-nine sequence.

use log::trace;
use once_cell::sync::Lazy;

/// The number of elements in the canonical sequence.
pub const SEQUENCE_LEN: usize = 10;

static GLOBAL: Lazy<SequenceProvider> = Lazy::new(|| {
    trace!("initializing the global zero-to-nine sequence");
    SequenceProvider::new()
});

/// Owns the sequence `[0, 1, ..., 9]` and copies it out on request.
///
/// The contents never change after construction. Use [`SequenceProvider::global`] for the
/// process-wide instance that the exported functions share.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SequenceProvider {
    values: [i32; SEQUENCE_LEN],
}

impl SequenceProvider {
    /// Constructs a provider holding `[0, 1, ..., 9]`.
    pub fn new() -> Self {
        let mut values = [0; SEQUENCE_LEN];
        for (value, i) in values.iter_mut().zip(0..) {
            *value = i;
        }
        Self { values }
    }

    /// Returns the process-wide provider, initializing it on first use.
    ///
    /// Initialization happens exactly once, even when multiple threads race for it.
    pub fn global() -> &'static SequenceProvider {
        &GLOBAL
    }

    /// Returns true if the process-wide provider has been initialized.
    pub fn is_initialized() -> bool {
        Lazy::get(&GLOBAL).is_some()
    }

    /// Returns the sequence.
    pub fn values(&self) -> &[i32; SEQUENCE_LEN] {
        &self.values
    }

    /// Allocates a fresh copy of the sequence, owned by the caller.
    pub fn allocate(&self) -> Box<[i32; SEQUENCE_LEN]> {
        Box::new(self.values)
    }

    /// Copies the first `min(dest.len(), 10)` elements of the sequence into `dest`, leaving any
    /// remaining elements untouched. Returns the number of copied elements.
    pub fn copy_into(&self, dest: &mut [i32]) -> usize {
        let len = dest.len().min(SEQUENCE_LEN);
        dest[..len].copy_from_slice(&self.values[..len]);
        len
    }

    /// Copies the sequence into `dest_a` like [`SequenceProvider::copy_into`] and fills `dest_b`
    /// with a countdown from its own length, see [`fill_countdown`].
    pub fn copy_into_pair(&self, dest_a: &mut [i32], dest_b: &mut [i32]) {
        self.copy_into(dest_a);
        fill_countdown(dest_b);
    }
}

impl Default for SequenceProvider {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns true if the first ten elements of `values` are `[0, 1, ..., 9]`. Slices shorter than ten
/// elements are never valid.
pub fn is_zero_to_nine(values: &[i32]) -> bool {
    values.len() >= SEQUENCE_LEN && values.iter().take(SEQUENCE_LEN).zip(0..).all(|(v, i)| *v == i)
}

/// Fills `dest` with `len - i` for every index `i`, where `len` is the length of `dest`.
///
/// This is unrelated to the zero-to-nine sequence: a slice of three elements becomes `[3, 2, 1]`.
pub fn fill_countdown(dest: &mut [i32]) {
    let len = i32::try_from(dest.len()).unwrap_or(i32::MAX);
    for (value, i) in dest.iter_mut().zip(0..) {
        *value = len - i;
    }
}
