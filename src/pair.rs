//! Composition of two word sequences into one.
//!
//! `Pair<A, B>` holds `A` in the low positions `[0, A::COUNT)` and `B` in the
//! high positions `[A::COUNT, A::COUNT + B::COUNT)`. Nesting pairs builds any
//! count from smaller pieces; the result is laid out exactly like the flat
//! array of the same count.

use core::fmt;
use core::hash::{Hash, Hasher};

use crate::sequence::{self, sealed, WordSequence};

#[derive(Clone, Copy)]
#[repr(C)]
pub struct Pair<A, B> {
    lo: A,
    hi: B,
}

pub fn concat<A, B>(lo: A, hi: B) -> Pair<A, B>
where
    A: WordSequence,
    B: WordSequence<Word = A::Word>,
{
    Pair::new(lo, hi)
}

impl<A, B> Pair<A, B>
where
    A: WordSequence,
    B: WordSequence<Word = A::Word>,
{
    pub fn new(lo: A, hi: B) -> Self {
        Self { lo, hi }
    }

    pub fn lo(&self) -> &A {
        &self.lo
    }

    pub fn hi(&self) -> &B {
        &self.hi
    }

    pub fn into_parts(self) -> (A, B) {
        (self.lo, self.hi)
    }
}

impl<A, B> sealed::Sealed for Pair<A, B>
where
    A: WordSequence,
    B: WordSequence<Word = A::Word>,
{
}

impl<A, B> WordSequence for Pair<A, B>
where
    A: WordSequence,
    B: WordSequence<Word = A::Word>,
{
    type Word = A::Word;

    const COUNT: usize = A::COUNT + B::COUNT;

    fn from_fn<F: FnMut(usize) -> A::Word>(mut f: F) -> Self {
        let lo = A::from_fn(&mut f);
        let hi = B::from_fn(|i| f(A::COUNT + i));
        Self { lo, hi }
    }

    #[track_caller]
    fn get(&self, index: usize) -> A::Word {
        sequence::check_index::<Self>(index);
        if index < A::COUNT {
            self.lo.get(index)
        } else {
            self.hi.get(index - A::COUNT)
        }
    }

    #[track_caller]
    fn set(&mut self, index: usize, word: A::Word) {
        sequence::check_index::<Self>(index);
        if index < A::COUNT {
            self.lo.set(index, word)
        } else {
            self.hi.set(index - A::COUNT, word)
        }
    }

    fn with_words<R>(&self, f: impl FnOnce(&[A::Word]) -> R) -> R {
        debug_assert_eq!(
            core::mem::size_of::<Self>(),
            Self::COUNT * core::mem::size_of::<A::Word>()
        );
        // SAFETY: `Pair` is `repr(C)` and both halves are word sequences of the
        // same word type, each a padding-free run of its words aligned to the
        // word. `hi` therefore starts right where `lo` ends and the whole
        // value is `COUNT` consecutive words.
        let words = unsafe {
            core::slice::from_raw_parts((self as *const Self).cast::<A::Word>(), Self::COUNT)
        };
        f(words)
    }

    fn with_words_mut<R>(&mut self, f: impl FnOnce(&mut [A::Word]) -> R) -> R {
        // SAFETY: as in `with_words`; the borrow of `self` is exclusive.
        let words = unsafe {
            core::slice::from_raw_parts_mut((self as *mut Self).cast::<A::Word>(), Self::COUNT)
        };
        f(words)
    }
}

impl<A, B> PartialEq for Pair<A, B>
where
    A: WordSequence,
    B: WordSequence<Word = A::Word>,
{
    fn eq(&self, other: &Self) -> bool {
        sequence::words_eq(self, other)
    }
}

impl<A, B> Eq for Pair<A, B>
where
    A: WordSequence,
    B: WordSequence<Word = A::Word>,
{
}

impl<A, B> Hash for Pair<A, B>
where
    A: WordSequence,
    B: WordSequence<Word = A::Word>,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        sequence::hash_words(self, state);
    }
}

impl<A, B> fmt::Debug for Pair<A, B>
where
    A: WordSequence,
    B: WordSequence<Word = A::Word>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.with_words(|words| f.debug_list().entries(words).finish())
    }
}
