//! Capabilities of a single fixed-width unsigned word.

use core::fmt::Debug;
use core::hash::Hash;

use num_traits::ops::overflowing::{OverflowingAdd, OverflowingSub};
use num_traits::{PrimInt, Unsigned, WrappingAdd, WrappingSub};

mod sealed {
    pub trait Sealed {}
}

/// A primitive unsigned integer usable as one word of a [`WordSequence`].
///
/// Sealed: the raw byte views of this crate rely on every implementor
/// being a padding-free primitive integer.
///
/// [`WordSequence`]: crate::sequence::WordSequence
pub trait Limb:
    PrimInt
    + Unsigned
    + OverflowingAdd
    + OverflowingSub
    + WrappingAdd
    + WrappingSub
    + Hash
    + Debug
    + Default
    + Send
    + Sync
    + 'static
    + sealed::Sealed
{
    const BITS: u32;
    const BYTES: usize;

    /// Full adder: `self + rhs + carry`, returning the low word and the carry out.
    #[inline]
    fn carrying_add(self, rhs: Self, carry: bool) -> (Self, bool) {
        let (sum, c0) = self.overflowing_add(&rhs);
        let (sum, c1) = sum.overflowing_add(&Self::from_bool(carry));
        (sum, c0 | c1)
    }

    /// Full subtractor: `self - rhs - borrow`, returning the low word and the borrow out.
    #[inline]
    fn borrowing_sub(self, rhs: Self, borrow: bool) -> (Self, bool) {
        let (diff, b0) = self.overflowing_sub(&rhs);
        let (diff, b1) = diff.overflowing_sub(&Self::from_bool(borrow));
        (diff, b0 | b1)
    }

    #[inline]
    fn from_bool(bit: bool) -> Self {
        if bit {
            Self::one()
        } else {
            Self::zero()
        }
    }
}

macro_rules! impl_limb {
    ($($t:ty),*) => {$(
        impl sealed::Sealed for $t {}

        impl Limb for $t {
            const BITS: u32 = <$t>::BITS;
            const BYTES: usize = core::mem::size_of::<$t>();
        }
    )*};
}

impl_limb!(u8, u16, u32, u64, u128, usize);

/// View a run of words as their in-memory bytes (native endianness).
pub(crate) fn as_bytes<T: Limb>(words: &[T]) -> &[u8] {
    // SAFETY: every `Limb` is a primitive unsigned integer, so the slice is
    // initialized, padding-free memory of `size_of_val(words)` bytes, and `u8`
    // has no alignment requirement.
    unsafe { core::slice::from_raw_parts(words.as_ptr().cast::<u8>(), core::mem::size_of_val(words)) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_carrying_add_8bit() {
        assert_eq!(0xFFu8.carrying_add(0x01, false), (0x00, true));
        assert_eq!(0x0Fu8.carrying_add(0x0F, true), (0x1F, false));
        assert_eq!(0xFFu8.carrying_add(0xFF, true), (0xFF, true));
    }

    #[test]
    fn test_borrowing_sub_8bit() {
        assert_eq!(0x00u8.borrowing_sub(0x01, false), (0xFF, true));
        assert_eq!(0x10u8.borrowing_sub(0x0F, true), (0x00, false));
        assert_eq!(0x00u8.borrowing_sub(0xFF, true), (0x00, true));
    }

    #[test]
    fn test_carrying_add_matches_wide_sum() {
        for a in (0..=u16::MAX).step_by(257) {
            for b in (0..=u16::MAX).step_by(911) {
                for carry in [false, true] {
                    let expected = a as u32 + b as u32 + carry as u32;
                    let (sum, carry_out) = a.carrying_add(b, carry);
                    assert_eq!(sum as u32 | (carry_out as u32) << 16, expected);
                }
            }
        }
    }

    #[test]
    fn test_as_bytes_len() {
        let words = [1u32, 2, 3];
        let bytes = as_bytes(&words);
        assert_eq!(bytes.len(), 12);
        assert_eq!(&bytes[..4], &1u32.to_ne_bytes());
    }
}
