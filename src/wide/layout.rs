//! Per-target backing layouts of the 128- and 256-bit integers.
//!
//! 64-bit targets use 2 and 4 words, 32-bit targets 4 and 8. Either way the
//! integer occupies exactly its advertised width, with the alignment of the
//! native `u128`.

use static_assertions::{assert_eq_align, assert_eq_size, const_assert_eq};

use super::Wide;
use crate::constants::{Word, N_WORDS_128, N_WORDS_256};
use crate::words::Words;

#[cfg(target_pointer_width = "64")]
pub type Layout128 = Words<Word, 2>;
#[cfg(target_pointer_width = "64")]
pub type Layout256 = Words<Word, 4>;

#[cfg(target_pointer_width = "32")]
pub type Layout128 = Words<Word, 4>;
#[cfg(target_pointer_width = "32")]
pub type Layout256 = Words<Word, 8>;

pub type U128 = Wide<Layout128>;
pub type U256 = Wide<Layout256>;

const_assert_eq!(core::mem::size_of::<Layout128>(), N_WORDS_128 * core::mem::size_of::<Word>());
const_assert_eq!(core::mem::size_of::<Layout256>(), N_WORDS_256 * core::mem::size_of::<Word>());

assert_eq_size!(U128, u128);
assert_eq_align!(U128, u128);
assert_eq_size!(U256, [u128; 2]);
assert_eq_align!(U256, [u128; 2]);
