//! Unsigned integers wider than a machine word.
//!
//! A [`Wide`] owns one word sequence whose total width is the advertised
//! width of the integer. [`U128`] and [`U256`] pick their sequence per target
//! (see [`layout`]) so that their size and alignment always match the native
//! 128-bit integer and a pair of them respectively.
//!
//! There is no `+`/`-`. Callers choose between `checked_*`, `overflowing_*`,
//! `wrapping_*` and the trapping `strict_*` forms.

mod convert;
pub mod layout;
mod ops;

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};

use bitvec::prelude::*;

use crate::arith;
use crate::constants::{Word, WORD_BITS, WORD_BYTES};
use crate::pair::Pair;
use crate::sequence::{self, WordSequence};

pub use layout::{Layout128, Layout256, U128, U256};

#[derive(Clone, Copy)]
#[repr(C)]
pub struct Wide<S> {
    words: S,
    // Zero-sized; raises the alignment to that of the native 128-bit integer.
    _align: [u128; 0],
}

impl<S: WordSequence<Word = Word>> Wide<S> {
    pub const BITS: u32 = (S::COUNT * WORD_BITS) as u32;
    pub const BYTES: usize = S::COUNT * WORD_BYTES;

    pub fn from_words(words: S) -> Self {
        Self { words, _align: [] }
    }

    /// The backing words, least significant first.
    pub fn words(&self) -> &S {
        &self.words
    }

    pub fn into_words(self) -> S {
        self.words
    }

    pub fn zero() -> Self {
        Self::from_words(S::splat(0))
    }

    pub fn one() -> Self {
        let mut words = S::splat(0);
        words.set(0, 1);
        Self::from_words(words)
    }

    pub fn max_value() -> Self {
        Self::from_words(S::splat(Word::MAX))
    }

    pub fn is_zero(&self) -> bool {
        sequence::indices::<S>().all(|i| self.words.get(i) == 0)
    }

    #[track_caller]
    fn check_bit(index: usize) {
        assert!(
            index < Self::BITS as usize,
            "bit {} out of range for a {}-bit integer",
            index,
            Self::BITS
        );
    }

    /// Bit `index`, counting from the least significant bit.
    #[track_caller]
    pub fn bit(&self, index: usize) -> bool {
        Self::check_bit(index);
        self.words.with_words(|w| w.view_bits::<Lsb0>()[index])
    }

    #[track_caller]
    pub fn with_bit(mut self, index: usize, value: bool) -> Self {
        Self::check_bit(index);
        self.words
            .with_words_mut(|w| w.view_bits_mut::<Lsb0>().set(index, value));
        self
    }

    pub fn count_ones(&self) -> u32 {
        self.words
            .with_words(|w| w.view_bits::<Lsb0>().count_ones() as u32)
    }

    /// Number of significant bits: one past the highest set bit, 0 for zero.
    pub fn bit_len(&self) -> u32 {
        self.words.with_words(|w| {
            w.view_bits::<Lsb0>()
                .last_one()
                .map_or(0, |i| i as u32 + 1)
        })
    }

    pub fn leading_zeros(&self) -> u32 {
        Self::BITS - self.bit_len()
    }

    pub fn trailing_zeros(&self) -> u32 {
        self.words.with_words(|w| {
            w.view_bits::<Lsb0>()
                .first_one()
                .map_or(Self::BITS, |i| i as u32)
        })
    }

    /// Run `f` on the in-memory bytes of the value.
    ///
    /// Size and alignment match the native integer of the same width, but the
    /// words are stored least significant first with each word in native byte
    /// order. The bytes equal the native integer's only on little-endian targets.
    pub fn with_raw_bytes<R>(&self, f: impl FnOnce(&[u8]) -> R) -> R {
        self.words.with_raw_bytes(f)
    }
}

impl U256 {
    /// Join two 128-bit halves, `lo` holding the least significant bits.
    pub fn from_halves(lo: U128, hi: U128) -> Self {
        let joined = Pair::new(lo.into_words(), hi.into_words());
        Self::from_words(sequence::copy_into(&joined))
    }

    pub fn halves(&self) -> (U128, U128) {
        let split: Pair<Layout128, Layout128> = sequence::copy_into(&self.words);
        let (lo, hi) = split.into_parts();
        (U128::from_words(lo), U128::from_words(hi))
    }
}

impl<S: WordSequence<Word = Word>> Default for Wide<S> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<S: WordSequence<Word = Word>> PartialEq for Wide<S> {
    fn eq(&self, other: &Self) -> bool {
        sequence::words_eq(&self.words, &other.words)
    }
}

impl<S: WordSequence<Word = Word>> Eq for Wide<S> {}

impl<S: WordSequence<Word = Word>> Ord for Wide<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        arith::compare(&self.words, &other.words)
    }
}

impl<S: WordSequence<Word = Word>> PartialOrd for Wide<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// The value is fed to the hasher as 32-bit chunks, least significant first,
/// so a value produces the same stream whatever the native word width.
impl<S: WordSequence<Word = Word>> Hash for Wide<S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for i in sequence::indices::<S>() {
            let word = self.words.get(i) as u64;
            state.write_u32(word as u32);
            if WORD_BITS == 64 {
                state.write_u32((word >> 32) as u32);
            }
        }
    }
}

impl<S: WordSequence<Word = Word>> num_traits::Bounded for Wide<S> {
    fn min_value() -> Self {
        Self::zero()
    }

    fn max_value() -> Self {
        Self::from_words(S::splat(Word::MAX))
    }
}

impl<S: WordSequence<Word = Word>> fmt::Debug for Wide<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U{}({:#x})", Self::BITS, self)
    }
}
