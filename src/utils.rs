use num_bigint::BigUint;
use num_traits::{NumCast, Zero};

use crate::limb::Limb;

/// Interpret `words` (least significant first) as one unsigned integer.
pub fn words_to_biguint<T>(words: &[T]) -> BigUint
where
    T: Limb,
    BigUint: From<T>,
{
    words
        .iter()
        .rev()
        .fold(BigUint::zero(), |acc, &w| (acc << T::BITS) + BigUint::from(w))
}

/// Split `x` into `len` words, least significant first. `None` if `x` doesn't
/// fit in `len` words.
pub fn biguint_to_words<T: Limb>(x: &BigUint, len: usize) -> Option<Vec<T>> {
    if x.bits() > (len * T::BITS as usize) as u64 {
        return None;
    }
    let mut bytes = x.to_bytes_le();
    bytes.resize(len * T::BYTES, 0);
    bytes
        .chunks(T::BYTES)
        .map(|chunk| {
            chunk.iter().enumerate().try_fold(T::zero(), |acc, (j, &byte)| {
                let byte: T = NumCast::from(byte)?;
                Some(acc | byte.unsigned_shl(8 * j as u32))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words_to_biguint() {
        assert_eq!(words_to_biguint::<u8>(&[]), BigUint::zero());
        assert_eq!(words_to_biguint(&[0x34u8, 0x12]), BigUint::from(0x1234u32));
        assert_eq!(
            words_to_biguint(&[u64::MAX, 1]),
            BigUint::from(u64::MAX as u128 + (1u128 << 64))
        );
    }

    #[test]
    fn test_biguint_to_single_byte_words() {
        let x = BigUint::from(0xABCDu32);
        assert_eq!(biguint_to_words::<u8>(&x, 3), Some(vec![0xCD, 0xAB, 0]));
    }

    #[test]
    fn test_biguint_to_words() {
        let x = BigUint::from(0x0102_0304_0506u64);
        assert_eq!(
            biguint_to_words::<u16>(&x, 4),
            Some(vec![0x0506, 0x0304, 0x0102, 0])
        );
        assert_eq!(biguint_to_words::<u16>(&x, 2), None);
        assert_eq!(biguint_to_words::<u32>(&BigUint::zero(), 2), Some(vec![0, 0]));
    }

    #[test]
    fn test_round_trip_through_words() {
        let x = (BigUint::from(1u8) << 200u32) - 1u8;
        let words = biguint_to_words::<u64>(&x, 4).unwrap();
        assert_eq!(words_to_biguint(&words), x);
        // 200 bits do not fit in 3 words of 64 bits
        assert!(biguint_to_words::<u64>(&x, 3).is_none());
    }
}
