use crate::{WORD_BITS, Word};

/// Logical element position, split into word and bit on demand.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct BitIndex(pub usize);

impl BitIndex {
    #[inline]
    pub fn get(self) -> usize {
        self.0
    }

    #[inline]
    pub fn word(self) -> usize {
        self.0 / WORD_BITS
    }

    #[inline]
    pub fn bit(self) -> usize {
        self.0 % WORD_BITS
    }

    #[inline]
    pub fn mask(self) -> Word {
        1 << self.bit()
    }
}

/// Number of words needed to hold `bits` elements.
#[inline]
pub(crate) const fn words_for(bits: usize) -> usize {
    bits.div_ceil(WORD_BITS)
}
