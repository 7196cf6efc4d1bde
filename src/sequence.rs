//! Fixed-count sequences of words.
//!
//! [`WordSequence`] exposes only the primitives a concrete sequence has to
//! supply: construction from a generator, bounds-checked element access and
//! a scoped contiguous view. Counting, equality, hashing and re-laying are
//! written once below as free functions over the trait.

use core::hash::{Hash, Hasher};
use core::ops::Range;

use crate::limb::{self, Limb};

pub(crate) mod sealed {
    pub trait Sealed {}
}

/// An ordered run of exactly `COUNT` words, index 0 least significant,
/// stored contiguously with no padding.
pub trait WordSequence: Copy + sealed::Sealed {
    type Word: Limb;

    const COUNT: usize;

    /// Build the sequence element by element. `f` is called exactly once for
    /// every index, in ascending order.
    fn from_fn<F: FnMut(usize) -> Self::Word>(f: F) -> Self;

    /// Panics if `index >= COUNT`.
    fn get(&self, index: usize) -> Self::Word;

    /// Panics if `index >= COUNT`.
    fn set(&mut self, index: usize, word: Self::Word);

    /// Run `f` on a view of the backing words. The view does not outlive the call.
    fn with_words<R>(&self, f: impl FnOnce(&[Self::Word]) -> R) -> R;

    fn with_words_mut<R>(&mut self, f: impl FnOnce(&mut [Self::Word]) -> R) -> R;

    fn splat(word: Self::Word) -> Self {
        Self::from_fn(|_| word)
    }

    /// Take the first `COUNT` values of `values`. Anything after them is left
    /// unconsumed.
    ///
    /// Panics if `values` yields fewer than `COUNT` items.
    fn from_values<I: IntoIterator<Item = Self::Word>>(values: I) -> Self {
        let mut values = values.into_iter();
        Self::from_fn(|i| match values.next() {
            Some(word) => word,
            None => panic!(
                "source ran out after {} values, {} needed",
                i,
                Self::COUNT
            ),
        })
    }

    /// Run `f` on the raw in-memory bytes of the sequence (native endianness).
    /// Meant for handing the value across an FFI or byte-oriented boundary.
    fn with_raw_bytes<R>(&self, f: impl FnOnce(&[u8]) -> R) -> R {
        self.with_words(|words| f(limb::as_bytes(words)))
    }
}

pub const fn count<S: WordSequence>() -> usize {
    S::COUNT
}

pub fn indices<S: WordSequence>() -> Range<usize> {
    0..S::COUNT
}

#[inline]
#[track_caller]
pub(crate) fn check_index<S: WordSequence>(index: usize) {
    assert!(
        index < S::COUNT,
        "index {} out of range for a sequence of {} words",
        index,
        S::COUNT
    );
}

/// Elementwise equality over all positions.
pub fn words_eq<S: WordSequence>(a: &S, b: &S) -> bool {
    indices::<S>().all(|i| a.get(i) == b.get(i))
}

/// Feed every word, least significant first, into `state`.
pub fn hash_words<S: WordSequence, H: Hasher>(sequence: &S, state: &mut H) {
    for i in indices::<S>() {
        sequence.get(i).hash(state);
    }
}

/// Re-lay `src` into another sequence type holding the same number of words.
///
/// Panics if the counts differ.
pub fn copy_into<S, D>(src: &S) -> D
where
    S: WordSequence,
    D: WordSequence<Word = S::Word>,
{
    assert_eq!(
        S::COUNT,
        D::COUNT,
        "cannot copy a {}-word sequence into a {}-word one",
        S::COUNT,
        D::COUNT
    );
    D::from_fn(|i| src.get(i))
}
