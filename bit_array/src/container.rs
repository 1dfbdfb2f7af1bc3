//! Packed boolean sequence with a maintained count of `true` elements.
//!
//! # Examples
//!
//! ## Basic usage
//!
//! ```rust
//! use bit_array::BitArray;
//!
//! let mut bits = BitArray::with_repeated(4, false);
//! bits.set(2, true).unwrap();
//! bits.insert(0, true).unwrap();
//!
//! assert_eq!(bits, [true, false, false, true, false]);
//! assert_eq!(bits.cardinality(), 2);
//! ```
//!
//! ## Out-of-bounds access
//!
//! ```rust
//! use bit_array::{BitArray, BitArrayError};
//!
//! let mut bits = BitArray::from([true, false]);
//! assert_eq!(
//!     bits.remove_at(2),
//!     Err(BitArrayError::IndexOutOfBounds { index: 2, len: 2 })
//! );
//! // nothing changed
//! assert_eq!(bits, [true, false]);
//! ```
use core::fmt;
use core::hash::{Hash, Hasher};

use raw_words::{Container, Vec};

use crate::bit_ops;
use crate::index::{BitIndex, words_for};
use crate::iter::{IntoIter, Iter};
use crate::{BitArrayError, WORD_BITS, Word};

type Result<T> = core::result::Result<T, BitArrayError>;

/// A growable sequence of booleans packed one bit per element.
///
/// Element `i` is bit `i % 64` of word `i / 64`. Bits at or beyond `len` in the
/// last word are always zero, so whole words can be compared and hashed.
///
/// `Clone` is an eager deep copy: the clone owns its own words.
#[derive(Clone, Default)]
pub struct BitArray {
    words: Container<Word>,
    len: usize,
    cardinality: usize,
}

impl BitArray {
    /// Creates an empty array without allocating.
    ///
    /// # Examples
    ///
    /// ```
    /// use bit_array::BitArray;
    ///
    /// let bits = BitArray::new();
    /// assert!(bits.is_empty());
    /// assert_eq!(bits.cardinality(), 0);
    /// assert_eq!(bits.first(), None);
    /// ```
    pub fn new() -> Self {
        Self {
            words: Container::new(),
            len: 0,
            cardinality: 0,
        }
    }

    /// Creates an empty array with room for at least `bits` elements.
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            words: Container::with_capacity(words_for(bits)),
            len: 0,
            cardinality: 0,
        }
    }

    /// Creates an array of `len` elements all equal to `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bit_array::BitArray;
    ///
    /// let bits = BitArray::with_repeated(70, true);
    /// assert_eq!(bits.len(), 70);
    /// assert_eq!(bits.cardinality(), 70);
    /// assert_eq!(bits.words(), &[u64::MAX, 0b11_1111]);
    /// ```
    pub fn with_repeated(len: usize, value: bool) -> Self {
        let fill = if value { Word::MAX } else { 0 };
        let mut words = Container::from_elem(fill, words_for(len));
        if value && len % WORD_BITS != 0 {
            let last = words.len() - 1;
            words[last] &= bit_ops::tail_mask(len);
        }
        Self {
            words,
            len,
            cardinality: if value { len } else { 0 },
        }
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of elements that are `true`.
    #[inline]
    pub fn cardinality(&self) -> usize {
        self.cardinality
    }

    #[inline]
    pub fn count_ones(&self) -> usize {
        self.cardinality
    }

    #[inline]
    pub fn count_zeros(&self) -> usize {
        self.len - self.cardinality
    }

    /// Number of elements the current allocation holds without reallocating.
    pub fn capacity(&self) -> usize {
        self.words.capacity() * WORD_BITS
    }

    /// The packed words. Bits at or beyond `len()` are zero.
    pub fn words(&self) -> &[Word] {
        self.words.as_slice()
    }

    pub fn first(&self) -> Option<bool> {
        self.get(0).ok()
    }

    pub fn last(&self) -> Option<bool> {
        self.len.checked_sub(1).and_then(|i| self.get(i).ok())
    }

    #[inline]
    fn check_index(&self, index: usize) -> Result<BitIndex> {
        if index < self.len {
            Ok(BitIndex(index))
        } else {
            Err(BitArrayError::IndexOutOfBounds {
                index,
                len: self.len,
            })
        }
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// `IndexOutOfBounds` if `index >= len()`.
    pub fn get(&self, index: usize) -> Result<bool> {
        let idx = self.check_index(index)?;
        Ok(bit_ops::get_bit(self.words.as_slice(), idx))
    }

    /// Overwrites the element at `index`, adjusting the cardinality if it changes.
    ///
    /// # Errors
    ///
    /// `IndexOutOfBounds` if `index >= len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bit_array::BitArray;
    ///
    /// let mut bits = BitArray::with_repeated(3, false);
    /// bits.set(1, true).unwrap();
    /// bits.set(1, true).unwrap();
    /// assert_eq!(bits.cardinality(), 1);
    /// assert!(bits.set(3, true).is_err());
    /// ```
    pub fn set(&mut self, index: usize, value: bool) -> Result<()> {
        let idx = self.check_index(index)?;
        let words = self.words.as_mut_slice();
        let old = bit_ops::get_bit(words, idx);
        if old != value {
            bit_ops::set_bit(words, idx, value);
            if value {
                self.cardinality += 1;
            } else {
                self.cardinality -= 1;
            }
        }
        Ok(())
    }

    /// Flips the element at `index` and returns its new value.
    ///
    /// # Errors
    ///
    /// `IndexOutOfBounds` if `index >= len()`.
    pub fn toggle(&mut self, index: usize) -> Result<bool> {
        let value = !self.get(index)?;
        self.set(index, value)?;
        Ok(value)
    }

    /// Exchanges the elements at `a` and `b`.
    ///
    /// # Errors
    ///
    /// `IndexOutOfBounds` if either index is `>= len()`; nothing is modified then.
    pub fn swap(&mut self, a: usize, b: usize) -> Result<()> {
        let va = self.get(a)?;
        let vb = self.get(b)?;
        if va != vb {
            let words = self.words.as_mut_slice();
            bit_ops::set_bit(words, BitIndex(a), vb);
            bit_ops::set_bit(words, BitIndex(b), va);
        }
        Ok(())
    }

    /// Appends `value` in amortized `O(1)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bit_array::BitArray;
    ///
    /// let mut bits = BitArray::new();
    /// bits.append(true);
    /// assert_eq!(bits.len(), 1);
    /// assert_eq!(bits.cardinality(), 1);
    /// assert_eq!(bits.last(), Some(true));
    /// ```
    pub fn append(&mut self, value: bool) {
        if self.len % WORD_BITS == 0 {
            self.words.push(0);
        }
        if value {
            bit_ops::set_bit(self.words.as_mut_slice(), BitIndex(self.len), true);
            self.cardinality += 1;
        }
        self.len += 1;
    }

    /// Alias of [`append`](Self::append).
    #[inline]
    pub fn push(&mut self, value: bool) {
        self.append(value);
    }

    /// Inserts `value` at `index`, shifting every later element up by one.
    ///
    /// `index == len()` appends. Runs in `O(len - index)`.
    ///
    /// # Errors
    ///
    /// `IndexOutOfBounds` if `index > len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bit_array::BitArray;
    ///
    /// let mut bits = BitArray::from([false, false]);
    /// bits.insert(1, true).unwrap();
    /// assert_eq!(bits, [false, true, false]);
    /// bits.insert(3, true).unwrap();
    /// assert_eq!(bits, [false, true, false, true]);
    /// ```
    pub fn insert(&mut self, index: usize, value: bool) -> Result<()> {
        if index > self.len {
            return Err(BitArrayError::IndexOutOfBounds {
                index,
                len: self.len,
            });
        }
        if self.len % WORD_BITS == 0 {
            self.words.push(0);
        }
        self.len += 1;
        let idx = BitIndex(index);
        let words = self.words.as_mut_slice();
        bit_ops::shift_up(words, idx);
        if value {
            bit_ops::set_bit(words, idx, true);
            self.cardinality += 1;
        }
        Ok(())
    }

    /// Removes and returns the last element, or `None` if empty.
    pub fn remove_last(&mut self) -> Option<bool> {
        let idx = BitIndex(self.len.checked_sub(1)?);
        let value = bit_ops::get_bit(self.words.as_slice(), idx);
        if value {
            bit_ops::set_bit(self.words.as_mut_slice(), idx, false);
            self.cardinality -= 1;
        }
        self.len -= 1;
        self.trim_words();
        Some(value)
    }

    /// Alias of [`remove_last`](Self::remove_last).
    #[inline]
    pub fn pop(&mut self) -> Option<bool> {
        self.remove_last()
    }

    /// Removes and returns the element at `index`, shifting later elements down.
    ///
    /// Runs in `O(len - index)`.
    ///
    /// # Errors
    ///
    /// `IndexOutOfBounds` if `index >= len()`.
    pub fn remove_at(&mut self, index: usize) -> Result<bool> {
        let idx = self.check_index(index)?;
        let words = self.words.as_mut_slice();
        let value = bit_ops::get_bit(words, idx);
        bit_ops::shift_down(words, idx);
        if value {
            self.cardinality -= 1;
        }
        self.len -= 1;
        self.trim_words();
        Ok(value)
    }

    /// Removes every element.
    ///
    /// With `keep_capacity` the word allocation is kept for later appends,
    /// otherwise it is released.
    ///
    /// # Examples
    ///
    /// ```
    /// use bit_array::BitArray;
    ///
    /// let mut bits = BitArray::with_repeated(200, true);
    /// bits.remove_all(true);
    /// assert!(bits.is_empty());
    /// assert!(bits.capacity() >= 200);
    ///
    /// bits.remove_all(false);
    /// assert_eq!(bits.capacity(), 0);
    /// ```
    pub fn remove_all(&mut self, keep_capacity: bool) {
        self.words.clear(keep_capacity);
        self.len = 0;
        self.cardinality = 0;
    }

    /// Same as `remove_all(true)`.
    pub fn clear(&mut self) {
        self.remove_all(true);
    }

    /// Iterates over the elements from index 0 upward.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self.words.as_slice(), self.len)
    }

    pub(crate) fn into_parts(self) -> (Container<Word>, usize) {
        (self.words, self.len)
    }

    // Keeps exactly words_for(len) words after a removal.
    fn trim_words(&mut self) {
        if self.len % WORD_BITS == 0 {
            self.words.truncate(words_for(self.len));
        }
    }
}

impl PartialEq for BitArray {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len
            && self.cardinality == other.cardinality
            && self.words() == other.words()
    }
}

impl Eq for BitArray {}

impl Hash for BitArray {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        self.words().hash(state);
    }
}

impl PartialEq<[bool]> for BitArray {
    fn eq(&self, other: &[bool]) -> bool {
        self.len == other.len() && self.iter().eq(other.iter().copied())
    }
}

impl PartialEq<Vec<bool>> for BitArray {
    fn eq(&self, other: &Vec<bool>) -> bool {
        *self == other[..]
    }
}

impl<const N: usize> PartialEq<[bool; N]> for BitArray {
    fn eq(&self, other: &[bool; N]) -> bool {
        *self == other[..]
    }
}

impl core::ops::Index<usize> for BitArray {
    type Output = bool;

    fn index(&self, index: usize) -> &bool {
        match self.get(index) {
            Ok(true) => &true,
            Ok(false) => &false,
            Err(e) => panic!("{}", e),
        }
    }
}

impl Extend<bool> for BitArray {
    fn extend<I: IntoIterator<Item = bool>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        self.words
            .reserve(words_for(self.len + lower).saturating_sub(self.words.len()));
        for value in iter {
            self.append(value);
        }
    }
}

impl<'a> Extend<&'a bool> for BitArray {
    fn extend<I: IntoIterator<Item = &'a bool>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl FromIterator<bool> for BitArray {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let mut bits = BitArray::new();
        bits.extend(iter);
        bits
    }
}

impl From<&[bool]> for BitArray {
    fn from(values: &[bool]) -> Self {
        values.iter().copied().collect()
    }
}

impl From<Vec<bool>> for BitArray {
    fn from(values: Vec<bool>) -> Self {
        values.into_iter().collect()
    }
}

impl<const N: usize> From<[bool; N]> for BitArray {
    fn from(values: [bool; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a BitArray {
    type Item = bool;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for BitArray {
    type Item = bool;
    type IntoIter = IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl fmt::Display for BitArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", value)?;
        }
        f.write_str("]")
    }
}

impl fmt::Debug for BitArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
