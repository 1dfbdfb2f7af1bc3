//! Iterators over a [`BitArray`](crate::BitArray), yielding elements in index order.
//!
//! Iterators hold a view of the array as it was when iteration started; the
//! borrow checker rules out mutating the array while an [`Iter`] is alive.

use core::iter::FusedIterator;

use raw_words::Container;

use crate::bit_ops;
use crate::index::BitIndex;
use crate::{BitArray, Word};

/// Borrowing iterator. Cheap to clone, so a sequence can be restarted from any point.
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    words: &'a [Word],
    front: usize,
    back: usize,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(words: &'a [Word], len: usize) -> Self {
        Self {
            words,
            front: 0,
            back: len,
        }
    }
}

impl Iterator for Iter<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        if self.front >= self.back {
            return None;
        }
        let value = bit_ops::get_bit(self.words, BitIndex(self.front));
        self.front += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<bool> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(bit_ops::get_bit(self.words, BitIndex(self.back)))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

/// Owning iterator returned by `BitArray::into_iter`.
#[derive(Clone, Debug)]
pub struct IntoIter {
    words: Container<Word>,
    front: usize,
    back: usize,
}

impl IntoIter {
    pub(crate) fn new(bits: BitArray) -> Self {
        let (words, len) = bits.into_parts();
        Self {
            words,
            front: 0,
            back: len,
        }
    }
}

impl Iterator for IntoIter {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        if self.front >= self.back {
            return None;
        }
        let value = bit_ops::get_bit(self.words.as_slice(), BitIndex(self.front));
        self.front += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for IntoIter {
    fn next_back(&mut self) -> Option<bool> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(bit_ops::get_bit(self.words.as_slice(), BitIndex(self.back)))
    }
}

impl ExactSizeIterator for IntoIter {}

impl FusedIterator for IntoIter {}
