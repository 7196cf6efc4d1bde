//! Conversions between wide integers and native integers, bytes, `BigUint`
//! and text.

use core::fmt;
use core::str::FromStr;

use anyhow::{anyhow, ensure, Context};
use byteorder::{BigEndian, ByteOrder, LittleEndian};
use num_bigint::BigUint;
use num_traits::Num;
use rand::distributions::{Distribution, Standard};
use rand::Rng;

use super::{Wide, U128, U256};
use crate::constants::{Word, WORD_BITS, WORD_BYTES};
use crate::sequence::{self, WordSequence};
use crate::utils::{biguint_to_words, words_to_biguint};

impl<S: WordSequence<Word = Word>> Wide<S> {
    /// Little-endian bytes, `BYTES` long.
    pub fn to_le_bytes(&self) -> Vec<u8> {
        let mut out = vec![0u8; Self::BYTES];
        for (i, chunk) in out.chunks_exact_mut(WORD_BYTES).enumerate() {
            LittleEndian::write_uint(chunk, self.words.get(i) as u64, WORD_BYTES);
        }
        out
    }

    /// Big-endian bytes, `BYTES` long.
    pub fn to_be_bytes(&self) -> Vec<u8> {
        let mut out = vec![0u8; Self::BYTES];
        for (i, chunk) in out.chunks_exact_mut(WORD_BYTES).rev().enumerate() {
            BigEndian::write_uint(chunk, self.words.get(i) as u64, WORD_BYTES);
        }
        out
    }

    pub fn from_le_bytes(bytes: &[u8]) -> anyhow::Result<Self> {
        Self::check_byte_len(bytes)?;
        Ok(Self::from_words(S::from_fn(|i| {
            LittleEndian::read_uint(&bytes[i * WORD_BYTES..][..WORD_BYTES], WORD_BYTES) as Word
        })))
    }

    pub fn from_be_bytes(bytes: &[u8]) -> anyhow::Result<Self> {
        Self::check_byte_len(bytes)?;
        Ok(Self::from_words(S::from_fn(|i| {
            let start = (S::COUNT - 1 - i) * WORD_BYTES;
            BigEndian::read_uint(&bytes[start..][..WORD_BYTES], WORD_BYTES) as Word
        })))
    }

    fn check_byte_len(bytes: &[u8]) -> anyhow::Result<()> {
        ensure!(
            bytes.len() == Self::BYTES,
            "expected {} bytes for a {}-bit integer, got {}",
            Self::BYTES,
            Self::BITS,
            bytes.len()
        );
        Ok(())
    }

    pub fn to_biguint(&self) -> BigUint {
        self.words.with_words(words_to_biguint)
    }

    /// `None` if `value` needs more than `BITS` bits.
    pub fn from_biguint(value: &BigUint) -> Option<Self> {
        biguint_to_words::<Word>(value, S::COUNT).map(|words| Self::from_words(S::from_values(words)))
    }

    fn from_u128_parts(value: u128) -> Self {
        Self::from_words(S::from_fn(|i| {
            let shift = i * WORD_BITS;
            if shift < 128 {
                (value >> shift) as Word
            } else {
                0
            }
        }))
    }

    /// The low 128 bits, and whether anything above them was set.
    fn to_u128_parts(&self) -> (u128, bool) {
        let mut low = 0u128;
        let mut truncated = false;
        for i in sequence::indices::<S>() {
            let shift = i * WORD_BITS;
            let word = self.words.get(i);
            if shift < 128 {
                low |= (word as u128) << shift;
            } else {
                truncated |= word != 0;
            }
        }
        (low, truncated)
    }

    fn hex_digits(&self, upper: bool) -> String {
        let top = match sequence::indices::<S>().rev().find(|&i| self.words.get(i) != 0) {
            Some(top) => top,
            None => return "0".to_string(),
        };
        let width = WORD_BYTES * 2;
        let mut digits = String::with_capacity((top + 1) * width);
        for i in (0..=top).rev() {
            let word = self.words.get(i);
            let piece = match (upper, i == top) {
                (false, true) => format!("{:x}", word),
                (false, false) => format!("{:0width$x}", word, width = width),
                (true, true) => format!("{:X}", word),
                (true, false) => format!("{:0width$X}", word, width = width),
            };
            digits.push_str(&piece);
        }
        digits
    }
}

macro_rules! impl_from_native {
    ($wide:ty; $($t:ty),*) => {$(
        impl From<$t> for $wide {
            fn from(value: $t) -> Self {
                Self::from_u128_parts(value as u128)
            }
        }
    )*};
}

impl_from_native!(U128; u8, u16, u32, u64, u128);
impl_from_native!(U256; u8, u16, u32, u64, u128);

macro_rules! impl_try_into_native {
    ($wide:ty; $($t:ty),*) => {$(
        impl TryFrom<$wide> for $t {
            type Error = anyhow::Error;

            fn try_from(value: $wide) -> anyhow::Result<Self> {
                let (low, truncated) = value.to_u128_parts();
                ensure!(!truncated, "{} does not fit in {}", value, stringify!($t));
                <$t>::try_from(low).with_context(|| format!("{} does not fit in {}", value, stringify!($t)))
            }
        }
    )*};
}

impl_try_into_native!(U128; u64, u128);
impl_try_into_native!(U256; u64, u128);

impl From<U128> for U256 {
    fn from(value: U128) -> Self {
        U256::from_halves(value, U128::zero())
    }
}

impl TryFrom<U256> for U128 {
    type Error = anyhow::Error;

    fn try_from(value: U256) -> anyhow::Result<Self> {
        let (lo, hi) = value.halves();
        ensure!(hi.is_zero(), "{} does not fit in 128 bits", value);
        Ok(lo)
    }
}

/// Decimal, or hexadecimal with a `0x` prefix.
impl<S: WordSequence<Word = Word>> FromStr for Wide<S> {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        let (digits, radix) = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
            Some(hex) => (hex, 16),
            None => (s, 10),
        };
        ensure!(
            !digits.is_empty() && digits.chars().all(|c| c.is_digit(radix)),
            "invalid integer literal {:?}",
            s
        );
        let value = BigUint::from_str_radix(digits, radix).with_context(|| {
            log::debug!("rejected integer literal {:?}", s);
            format!("invalid integer literal {:?}", s)
        })?;
        Self::from_biguint(&value).ok_or_else(|| {
            log::debug!("integer literal {:?} wider than {} bits", s, Self::BITS);
            anyhow!("{} does not fit in {} bits", s, Self::BITS)
        })
    }
}

impl<S: WordSequence<Word = Word>> fmt::Display for Wide<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_biguint(), f)
    }
}

impl<S: WordSequence<Word = Word>> fmt::LowerHex for Wide<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "0x", &self.hex_digits(false))
    }
}

impl<S: WordSequence<Word = Word>> fmt::UpperHex for Wide<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "0x", &self.hex_digits(true))
    }
}

impl<S: WordSequence<Word = Word>> Distribution<Wide<S>> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Wide<S> {
        Wide::from_words(S::from_fn(|_| rng.gen::<Word>()))
    }
}
