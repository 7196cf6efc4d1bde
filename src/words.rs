use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Index, IndexMut};

use anyhow::ensure;
use rand::distributions::{Distribution, Standard};
use rand::Rng;

use crate::limb::Limb;
use crate::sequence::{self, sealed, WordSequence};

/// `N` words laid out exactly like `[T; N]`.
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct Words<T, const N: usize>([T; N]);

impl<T: Limb, const N: usize> Words<T, N> {
    pub const fn new(words: [T; N]) -> Self {
        Self(words)
    }

    pub fn into_array(self) -> [T; N] {
        self.0
    }

    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.0.iter()
    }
}

impl<T: Limb, const N: usize> sealed::Sealed for Words<T, N> {}

impl<T: Limb, const N: usize> WordSequence for Words<T, N> {
    type Word = T;

    const COUNT: usize = N;

    fn from_fn<F: FnMut(usize) -> T>(f: F) -> Self {
        Self(core::array::from_fn(f))
    }

    #[inline]
    #[track_caller]
    fn get(&self, index: usize) -> T {
        sequence::check_index::<Self>(index);
        self.0[index]
    }

    #[inline]
    #[track_caller]
    fn set(&mut self, index: usize, word: T) {
        sequence::check_index::<Self>(index);
        self.0[index] = word;
    }

    fn with_words<R>(&self, f: impl FnOnce(&[T]) -> R) -> R {
        f(&self.0)
    }

    fn with_words_mut<R>(&mut self, f: impl FnOnce(&mut [T]) -> R) -> R {
        f(&mut self.0)
    }
}

impl<T: Limb, const N: usize> Default for Words<T, N> {
    fn default() -> Self {
        Self::splat(T::zero())
    }
}

impl<T: Limb, const N: usize> From<[T; N]> for Words<T, N> {
    fn from(words: [T; N]) -> Self {
        Self(words)
    }
}

impl<T: Limb, const N: usize> TryFrom<&[T]> for Words<T, N> {
    type Error = anyhow::Error;

    /// Unlike [`WordSequence::from_values`], the slice must hold exactly `N` words.
    fn try_from(words: &[T]) -> anyhow::Result<Self> {
        ensure!(
            words.len() == N,
            "expected exactly {} words, got {}",
            N,
            words.len()
        );
        Ok(Self::from_fn(|i| words[i]))
    }
}

impl<T: Limb, const N: usize> IntoIterator for Words<T, N> {
    type Item = T;
    type IntoIter = core::array::IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<T: Limb, const N: usize> Index<usize> for Words<T, N> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: usize) -> &T {
        sequence::check_index::<Self>(index);
        &self.0[index]
    }
}

impl<T: Limb, const N: usize> IndexMut<usize> for Words<T, N> {
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut T {
        sequence::check_index::<Self>(index);
        &mut self.0[index]
    }
}

impl<T: Limb, const N: usize> PartialEq for Words<T, N> {
    fn eq(&self, other: &Self) -> bool {
        sequence::words_eq(self, other)
    }
}

impl<T: Limb, const N: usize> Eq for Words<T, N> {}

impl<T: Limb, const N: usize> Hash for Words<T, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        sequence::hash_words(self, state);
    }
}

impl<T: Limb, const N: usize> fmt::Debug for Words<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

impl<T: Limb, const N: usize> Distribution<Words<T, N>> for Standard
where
    Standard: Distribution<T>,
{
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Words<T, N> {
        Words::from_fn(|_| rng.gen())
    }
}
