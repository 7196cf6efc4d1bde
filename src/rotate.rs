//! Single-word bit rotation.

use crate::limb::Limb;

/// Rotation by any signed amount. The amount is reduced modulo the word
/// width, so counts past the width wrap around and negative counts rotate
/// the other way.
pub trait Rotate: Sized {
    fn rotated_right(self, count: i64) -> Self;

    fn rotated_left(self, count: i64) -> Self;
}

impl<T: Limb> Rotate for T {
    #[inline]
    fn rotated_right(self, count: i64) -> Self {
        let k = count.rem_euclid(T::BITS as i64) as u32;
        if k == 0 {
            return self;
        }
        self.unsigned_shr(k) | self.unsigned_shl(T::BITS - k)
    }

    #[inline]
    fn rotated_left(self, count: i64) -> Self {
        // -i64::MIN wraps to itself, which is still congruent modulo any
        // power-of-two width.
        self.rotated_right(count.wrapping_neg())
    }
}

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn test_rotate_8bit() {
        assert_eq!(0b0000_0001u8.rotated_right(1), 0b1000_0000);
        assert_eq!(0b1000_0000u8.rotated_left(1), 0b0000_0001);
        assert_eq!(0b0001_0110u8.rotated_left(3), 0b1011_0000);
        assert_eq!(0xA5u8.rotated_right(8), 0xA5);
        assert_eq!(0xA5u8.rotated_right(0), 0xA5);
    }

    #[test]
    fn test_negative_count_rotates_other_way() {
        assert_eq!(0x1234u16.rotated_right(-4), 0x1234u16.rotated_left(4));
        assert_eq!(0x1234u16.rotated_left(-4), 0x4123);
        assert_eq!(0x1234u16.rotated_right(-20), 0x2341);
    }

    #[test]
    fn test_extreme_counts() {
        assert_eq!(0xDEADu16.rotated_right(i64::MIN), 0xDEAD);
        assert_eq!(0xDEADu16.rotated_left(i64::MIN), 0xDEAD);
        assert_eq!(1u32.rotated_right(i64::MAX), 1u32.rotate_right((i64::MAX % 32) as u32));
    }

    #[test]
    fn test_matches_native_rotation() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        for _ in 0..500 {
            let x: u64 = rng.gen();
            let k: i64 = rng.gen_range(-300..300);
            let native = x.rotate_right(k.rem_euclid(64) as u32);
            assert_eq!(x.rotated_right(k), native);
            assert_eq!(x.rotated_right(k).rotated_left(k), x);

            let y: u128 = rng.gen();
            assert_eq!(y.rotated_left(k).rotated_right(k), y);
            assert_eq!(y.rotated_right(128), y);

            let z: usize = rng.gen();
            assert_eq!(z.rotated_right(usize::BITS as i64), z);
        }
    }
}
