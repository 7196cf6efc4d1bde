use super::Wide;
use crate::arith;
use crate::constants::Word;
use crate::sequence::WordSequence;
use crate::words::Words;

impl<S: WordSequence<Word = Word>> Wide<S> {
    /// `self + rhs` modulo 2^BITS, plus whether the true sum overflowed.
    pub fn overflowing_add(self, rhs: Self) -> (Self, bool) {
        let mut carry = false;
        let words = arith::add_carrying(&self.words, &rhs.words, &mut carry);
        (Self::from_words(words), carry)
    }

    /// `self - rhs` modulo 2^BITS, plus whether the true difference was negative.
    pub fn overflowing_sub(self, rhs: Self) -> (Self, bool) {
        let mut borrow = false;
        let words = arith::sub_borrowing(&self.words, &rhs.words, &mut borrow);
        (Self::from_words(words), borrow)
    }

    pub fn wrapping_add(self, rhs: Self) -> Self {
        Self::from_words(arith::add(&self.words, &rhs.words))
    }

    pub fn wrapping_sub(self, rhs: Self) -> Self {
        Self::from_words(arith::sub(&self.words, &rhs.words))
    }

    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        match self.overflowing_add(rhs) {
            (sum, false) => Some(sum),
            (_, true) => None,
        }
    }

    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        match self.overflowing_sub(rhs) {
            (diff, false) => Some(diff),
            (_, true) => None,
        }
    }

    pub fn saturating_add(self, rhs: Self) -> Self {
        self.checked_add(rhs).unwrap_or_else(Self::max_value)
    }

    pub fn saturating_sub(self, rhs: Self) -> Self {
        self.checked_sub(rhs).unwrap_or_else(Self::zero)
    }

    /// Trapping addition: the caller asserts the sum fits.
    ///
    /// # Panics
    ///
    /// If the sum does not fit in `BITS` bits.
    #[track_caller]
    pub fn strict_add(self, rhs: Self) -> Self {
        let (sum, overflow) = self.overflowing_add(rhs);
        if overflow {
            log::error!("{}-bit addition overflowed: {:#x} + {:#x}", Self::BITS, self, rhs);
            panic!("attempt to add with overflow");
        }
        sum
    }

    /// Trapping subtraction: the caller asserts `rhs <= self`.
    ///
    /// # Panics
    ///
    /// If `rhs > self`.
    #[track_caller]
    pub fn strict_sub(self, rhs: Self) -> Self {
        let (diff, borrow) = self.overflowing_sub(rhs);
        if borrow {
            log::error!("{}-bit subtraction overflowed: {:#x} - {:#x}", Self::BITS, self, rhs);
            panic!("attempt to subtract with overflow");
        }
        diff
    }

    /// Add a single word, zero-extended to the full width.
    pub fn overflowing_add_word(self, rhs: Word) -> (Self, bool) {
        let mut carry = false;
        let words = arith::add_carrying(&self.words, &Words::new([rhs]), &mut carry);
        (Self::from_words(words), carry)
    }

    pub fn overflowing_sub_word(self, rhs: Word) -> (Self, bool) {
        let mut borrow = false;
        let words = arith::sub_borrowing(&self.words, &Words::new([rhs]), &mut borrow);
        (Self::from_words(words), borrow)
    }

    pub fn wrapping_add_word(self, rhs: Word) -> Self {
        Self::from_words(arith::add(&self.words, &Words::new([rhs])))
    }

    pub fn wrapping_sub_word(self, rhs: Word) -> Self {
        Self::from_words(arith::sub(&self.words, &Words::new([rhs])))
    }
}
