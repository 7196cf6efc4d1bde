//! Native word and the word counts of the wide integer layouts.

#[cfg(not(any(target_pointer_width = "32", target_pointer_width = "64")))]
compile_error!("wide-words supports only 32-bit and 64-bit targets");

/// The native unsigned machine word.
pub type Word = usize;

pub const WORD_BITS: usize = usize::BITS as usize;
pub const WORD_BYTES: usize = core::mem::size_of::<Word>();

/// Return the number of native words that make up a `bits`-wide
/// integer, panicking if the word size doesn't divide `bits`.
const fn n_words(bits: usize) -> usize {
    if bits % WORD_BITS != 0 {
        panic!("word size must divide the integer width");
    }
    bits / WORD_BITS
}

/// Number of native words in a 128-bit integer.
pub const N_WORDS_128: usize = n_words(128); // 2 or 4
/// Number of native words in a 256-bit integer.
pub const N_WORDS_256: usize = n_words(256); // 4 or 8
