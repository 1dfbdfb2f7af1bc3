use bytemuck::Pod;

use crate::{ContainerError, Vec};

/// Factor applied to the current capacity whenever the buffer has to grow.
pub const GROWTH_FACTOR: usize = 2;

/// Capacity reserved by the first growth of an unallocated buffer.
pub const MIN_CAPACITY: usize = 4;

/// The low-level backend owning the word allocation.
///
/// Every growth reserves at least `capacity * GROWTH_FACTOR` elements, so a run
/// of `n` single-element pushes reallocates only `O(log n)` times.
#[derive(Debug, Clone)]
pub struct Storage<T: Pod> {
    vec: Vec<T>,
}

impl<T: Pod> Storage<T> {
    /// Create empty in-memory storage without allocating
    pub fn new_in_memory() -> Self {
        Storage { vec: Vec::new() }
    }

    /// Create empty storage holding room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Storage {
            vec: Vec::with_capacity(capacity),
        }
    }

    /// Adopt an existing vector as-is
    pub fn from_vec(vec: Vec<T>) -> Self {
        Storage { vec }
    }

    /// Return element count
    #[inline]
    pub fn len(&self) -> usize {
        self.vec.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }

    /// Number of elements the current allocation holds
    #[inline]
    pub fn capacity(&self) -> usize {
        self.vec.capacity()
    }

    /// Makes room for `additional` more elements, growing geometrically.
    pub fn grow_for(&mut self, additional: usize) {
        let needed = self.vec.len() + additional;
        let capacity = self.vec.capacity();
        if needed <= capacity {
            return;
        }
        let target = needed.max(capacity * GROWTH_FACTOR).max(MIN_CAPACITY);
        self.vec.reserve_exact(target - self.vec.len());
    }

    pub fn push(&mut self, value: T) {
        self.grow_for(1);
        self.vec.push(value);
    }

    pub fn pop(&mut self) -> Option<T> {
        self.vec.pop()
    }

    /// Resizes to `new_len`, filling new slots with `fill`.
    pub fn resize(&mut self, new_len: usize, fill: T) {
        if new_len > self.vec.len() {
            self.grow_for(new_len - self.vec.len());
        }
        self.vec.resize(new_len, fill);
    }

    pub fn truncate(&mut self, len: usize) {
        self.vec.truncate(len);
    }

    /// Drops every element. The allocation survives only if `keep_capacity`.
    pub fn clear(&mut self, keep_capacity: bool) {
        if keep_capacity {
            self.vec.clear();
        } else {
            self.vec = Vec::new();
        }
    }

    /// Read a reference to element i
    pub fn get(&self, index: usize) -> Result<&T, ContainerError> {
        self.vec.get(index).ok_or(ContainerError::OutOfBounds(index))
    }

    /// Read a mutable reference to element i
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, ContainerError> {
        self.vec
            .get_mut(index)
            .ok_or(ContainerError::OutOfBounds(index))
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.vec.as_slice()
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.vec.as_mut_slice()
    }
}

impl<T: Pod> Default for Storage<T> {
    fn default() -> Self {
        Self::new_in_memory()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytemuck_derive::Pod;
    use bytemuck_derive::Zeroable;

    #[repr(C)]
    #[derive(Clone, Copy, Debug, PartialEq, Zeroable, Pod)]
    struct Packet {
        id: u32,
        value: f32,
    }

    #[test]
    fn in_memory_basic_operations() {
        let mut storage = Storage::new_in_memory();
        assert_eq!(storage.len(), 0);
        assert!(storage.is_empty());
        assert_eq!(storage.capacity(), 0);

        let p1 = Packet { id: 1, value: 10.0 };
        let p2 = Packet { id: 2, value: 20.0 };

        storage.push(p1);
        storage.push(p2);

        assert_eq!(storage.len(), 2);
        assert!(!storage.is_empty());

        assert_eq!(storage.get(0).unwrap(), &p1);
        assert_eq!(storage.get(1).unwrap(), &p2);
        assert!(matches!(
            storage.get(2),
            Err(ContainerError::OutOfBounds(2))
        ));

        let mut_ref = storage.get_mut(0).unwrap();
        mut_ref.value = 42.0;
        assert_eq!(storage.get(0).unwrap().value, 42.0);
        assert_eq!(storage.pop(), Some(p2));
    }

    #[test]
    fn first_growth_reserves_minimum() {
        let mut storage = Storage::<u64>::new_in_memory();
        storage.push(1);
        assert!(storage.capacity() >= MIN_CAPACITY);
    }

    #[test]
    fn growth_is_geometric() {
        let mut storage = Storage::<u64>::new_in_memory();
        let mut reallocations = 0;
        let mut last_capacity = storage.capacity();
        for i in 0..10_000u64 {
            storage.push(i);
            if storage.capacity() != last_capacity {
                assert!(storage.capacity() >= last_capacity * GROWTH_FACTOR);
                last_capacity = storage.capacity();
                reallocations += 1;
            }
        }
        assert!(reallocations <= 16, "{reallocations} reallocations");
    }

    #[test]
    fn clear_keeps_or_releases_capacity() {
        let mut storage = Storage::<u64>::with_capacity(32);
        storage.resize(20, 7);
        storage.clear(true);
        assert!(storage.is_empty());
        assert!(storage.capacity() >= 32);

        storage.resize(20, 7);
        storage.clear(false);
        assert!(storage.is_empty());
        assert_eq!(storage.capacity(), 0);
    }

    #[test]
    fn resize_fills_and_truncates() {
        let mut storage = Storage::<u32>::from_vec(vec![1, 2]);
        storage.resize(4, 9);
        assert_eq!(storage.as_slice(), &[1, 2, 9, 9]);
        storage.truncate(1);
        assert_eq!(storage.as_slice(), &[1]);
        storage.as_mut_slice()[0] = 5;
        assert_eq!(storage.as_slice(), &[5]);
    }
}
