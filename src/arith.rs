//! Carry-propagating add and subtract over word sequences.
//!
//! Words are processed from index 0 (least significant) upwards, the carry
//! or borrow out of word `i` feeding word `i + 1`. The second operand may be
//! narrower than the first, in which case it is zero-extended.

use core::cmp::Ordering;

use itertools::Itertools;
use num_traits::Zero;

use crate::limb::Limb;
use crate::sequence::{self, WordSequence};

#[track_caller]
fn check_operands<A: WordSequence, B: WordSequence>() {
    assert!(
        B::COUNT <= A::COUNT,
        "second operand has {} words, more than the {} of the first",
        B::COUNT,
        A::COUNT
    );
}

/// Zero-extend `b` to `A::COUNT` words.
fn extended<A, B>(b: &B) -> impl Iterator<Item = B::Word> + '_
where
    A: WordSequence,
    B: WordSequence,
{
    sequence::indices::<B>()
        .map(move |i| b.get(i))
        .pad_using(A::COUNT, |_| B::Word::zero())
}

/// `a + b + carry`. On return `carry` holds the carry out of the top word.
#[track_caller]
pub fn add_carrying<A, B>(a: &A, b: &B, carry: &mut bool) -> A
where
    A: WordSequence,
    B: WordSequence<Word = A::Word>,
{
    check_operands::<A, B>();
    let mut rhs = extended::<A, B>(b);
    A::from_fn(|i| {
        let (sum, carry_out) = a.get(i).carrying_add(next_word(&mut rhs), *carry);
        *carry = carry_out;
        sum
    })
}

/// `a - b - borrow`. On return `borrow` holds the borrow out of the top word.
#[track_caller]
pub fn sub_borrowing<A, B>(a: &A, b: &B, borrow: &mut bool) -> A
where
    A: WordSequence,
    B: WordSequence<Word = A::Word>,
{
    check_operands::<A, B>();
    let mut rhs = extended::<A, B>(b);
    A::from_fn(|i| {
        let (diff, borrow_out) = a.get(i).borrowing_sub(next_word(&mut rhs), *borrow);
        *borrow = borrow_out;
        diff
    })
}

// `extended` yields exactly `A::COUNT` words and `from_fn` asks for exactly that many.
fn next_word<T: Limb>(rhs: &mut impl Iterator<Item = T>) -> T {
    rhs.next().unwrap_or_else(T::zero)
}

/// `a + b` with no incoming carry; the outgoing carry is dropped.
#[track_caller]
pub fn add<A, B>(a: &A, b: &B) -> A
where
    A: WordSequence,
    B: WordSequence<Word = A::Word>,
{
    add_carrying(a, b, &mut false)
}

/// `a - b` with no incoming borrow; the outgoing borrow is dropped.
#[track_caller]
pub fn sub<A, B>(a: &A, b: &B) -> A
where
    A: WordSequence,
    B: WordSequence<Word = A::Word>,
{
    sub_borrowing(a, b, &mut false)
}

/// Numeric comparison, most significant word first.
pub fn compare<S: WordSequence>(a: &S, b: &S) -> Ordering {
    sequence::indices::<S>()
        .rev()
        .map(|i| a.get(i).cmp(&b.get(i)))
        .find(|ord| ord.is_ne())
        .unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use num_bigint::BigUint;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::pair::concat;
    use crate::utils::words_to_biguint;
    use crate::words::Words;

    type W8x1 = Words<u8, 1>;

    fn to_big<S: WordSequence>(s: &S) -> BigUint
    where
        BigUint: From<S::Word>,
    {
        s.with_words(|w| words_to_biguint(w))
    }

    #[test]
    fn test_carry_out_of_single_byte() {
        let mut carry = false;
        let r = add_carrying(&W8x1::new([0xFF]), &W8x1::new([0x01]), &mut carry);
        assert_eq!(r, W8x1::new([0x00]));
        assert!(carry);

        let mut carry = true;
        let r = add_carrying(&W8x1::new([0x0F]), &W8x1::new([0x0F]), &mut carry);
        assert_eq!(r, W8x1::new([0x1F]));
        assert!(!carry);
    }

    #[test]
    fn test_carry_ripples_through_all_words() {
        let a = Words::new([0xFFu8, 0xFF, 0xFF, 0x00]);
        let mut carry = false;
        let r = add_carrying(&a, &Words::new([1u8]), &mut carry);
        assert_eq!(r, Words::new([0, 0, 0, 1]));
        assert!(!carry);

        let mut carry = false;
        let r = add_carrying(&Words::<u8, 4>::splat(0xFF), &Words::new([1u8]), &mut carry);
        assert_eq!(r, Words::splat(0));
        assert!(carry);
    }

    #[test]
    fn test_borrow_ripples_through_all_words() {
        let mut borrow = false;
        let r = sub_borrowing(&Words::new([0u8, 0, 0, 1]), &Words::new([1u8]), &mut borrow);
        assert_eq!(r, Words::new([0xFF, 0xFF, 0xFF, 0]));
        assert!(!borrow);

        let mut borrow = false;
        let r = sub_borrowing(&Words::<u8, 4>::splat(0), &Words::new([1u8]), &mut borrow);
        assert_eq!(r, Words::splat(0xFF));
        assert!(borrow);
    }

    #[test]
    fn test_incoming_borrow() {
        let mut borrow = true;
        let r = sub_borrowing(&Words::new([0x10u8, 0]), &Words::new([0x0Fu8, 0]), &mut borrow);
        assert_eq!(r, Words::new([0, 0]));
        assert!(!borrow);
    }

    #[test]
    #[should_panic(expected = "second operand has 3 words, more than the 2 of the first")]
    fn test_wider_second_operand() {
        let _ = add(&Words::<u32, 2>::splat(0), &Words::<u32, 3>::splat(0));
    }

    #[test]
    fn test_narrow_operand_is_zero_extended() {
        let a = Words::new([0x10u16, 0x20, 0x30]);
        let mut borrow = false;
        let r = sub_borrowing(&a, &Words::new([0x11u16]), &mut borrow);
        assert_eq!(r, Words::new([0xFFFF, 0x1F, 0x30]));
        assert!(!borrow);
        assert_eq!(add(&a, &Words::<u16, 0>::default()), a);
    }

    #[test]
    fn test_mixed_sequence_types() {
        let a = concat(Words::new([u64::MAX]), Words::new([0u64, 5]));
        let r = add(&a, &Words::new([1u64, 1]));
        assert_eq!(r.with_words(|w| w.to_vec()), vec![0, 2, 5]);
    }

    #[test]
    fn test_identities_and_commutativity() {
        let mut rng = ChaCha8Rng::seed_from_u64(0x5eed);
        let zero = Words::<u32, 6>::default();
        for _ in 0..200 {
            let a: Words<u32, 6> = rng.gen();
            let b: Words<u32, 6> = rng.gen();

            assert_eq!(add(&a, &b), add(&b, &a));
            assert_eq!(add(&a, &zero), a);
            assert_eq!(sub(&a, &zero), a);
            assert_eq!(sub(&add(&a, &b), &b), a);
        }
    }

    #[test]
    fn test_wrapping_associativity() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..200 {
            let [a, b, c]: [Words<u16, 5>; 3] = rng.gen();
            assert_eq!(add(&add(&a, &b), &c), add(&a, &add(&b, &c)));
        }
    }

    #[test]
    fn test_against_biguint() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let modulus = BigUint::from(1u8) << (64 * 4);
        for _ in 0..200 {
            let a: Words<u64, 4> = rng.gen();
            // sparse operands exercise long carry chains
            let b = if rng.gen_bool(0.5) {
                Words::<u64, 4>::from_fn(|_| if rng.gen_bool(0.7) { u64::MAX } else { 0 })
            } else {
                rng.gen()
            };

            let mut carry = false;
            let sum = add_carrying(&a, &b, &mut carry);
            let expected = to_big(&a) + to_big(&b);
            assert_eq!(to_big(&sum), &expected % &modulus);
            assert_eq!(carry, expected >= modulus);

            let mut borrow = false;
            let diff = sub_borrowing(&a, &b, &mut borrow);
            assert_eq!(borrow, to_big(&a) < to_big(&b));
            let expected = (to_big(&a) + &modulus - to_big(&b)) % &modulus;
            assert_eq!(to_big(&diff), expected);
        }
    }

    #[test]
    fn test_compare() {
        let a = Words::new([0u8, 1]);
        let b = Words::new([0xFFu8, 0]);
        assert_eq!(compare(&a, &b), Ordering::Greater);
        assert_eq!(compare(&b, &a), Ordering::Less);
        assert_eq!(compare(&a, &a), Ordering::Equal);
    }
}
