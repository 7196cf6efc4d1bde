pub mod arith;
pub mod constants;
pub mod limb;
pub mod pair;
pub mod rotate;
pub mod sequence;
pub mod utils;
pub mod wide;
pub mod words;

pub use constants::Word;
pub use limb::Limb;
pub use pair::Pair;
pub use rotate::Rotate;
pub use sequence::WordSequence;
pub use wide::{Wide, U128, U256};
pub use words::Words;
