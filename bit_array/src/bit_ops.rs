use crate::index::BitIndex;
use crate::{WORD_BITS, Word};

const TOP: usize = WORD_BITS - 1;

#[inline]
pub fn get_bit(words: &[Word], index: BitIndex) -> bool {
    words[index.word()] & index.mask() != 0
}

#[inline]
pub fn set_bit(words: &mut [Word], index: BitIndex, value: bool) {
    let word = &mut words[index.word()];
    if value {
        *word |= index.mask();
    } else {
        *word &= !index.mask();
    }
}

/// Mask of the bits of the last word that hold elements when there are `len` of them.
#[inline]
pub fn tail_mask(len: usize) -> Word {
    match len % WORD_BITS {
        0 => Word::MAX,
        rem => (1 << rem) - 1,
    }
}

/// Moves every bit at or above `at` one position up, leaving a cleared bit at `at`.
///
/// The top bit of the last word is shifted out; callers make sure it is unused.
pub fn shift_up(words: &mut [Word], at: BitIndex) {
    let first = at.word();
    for i in (first + 1..words.len()).rev() {
        words[i] = (words[i] << 1) | (words[i - 1] >> TOP);
    }
    let low = at.mask() - 1;
    let word = words[first];
    words[first] = (word & low) | ((word & !low) << 1);
}

/// Drops the bit at `at`, moving every bit above it one position down.
///
/// The top bit of the last word becomes zero.
pub fn shift_down(words: &mut [Word], at: BitIndex) {
    let first = at.word();
    let low = at.mask() - 1;
    let word = words[first];
    words[first] = (word & low) | ((word >> 1) & !low);
    for i in first + 1..words.len() {
        words[i - 1] |= (words[i] & 1) << TOP;
        words[i] >>= 1;
    }
}
