use crate::{ContainerError, Storage};
use bytemuck::Pod;

/// High-level container for typed words backed by an owned [`Storage`].
///
/// `T` must implement [`bytemuck::Pod`] (Plain Old Data), so the contents can
/// always be viewed as raw bytes and cloning a container is a plain memory copy.
///
/// Cloning produces an independent buffer: mutating the clone never affects
/// the original.
///
/// # Examples
///
/// ## Basic Usage
///
/// ```
/// use raw_words::Container;
/// use bytemuck_derive::{Pod, Zeroable};
///
/// #[repr(C)]
/// #[derive(Clone, Copy, Pod, Zeroable, Debug, PartialEq)]
/// struct Packet {
///     id: u32,
///     value: f32,
/// }
///
/// let mut container = Container::<Packet>::new();
///
/// container.push(Packet { id: 1, value: 10.0 });
/// container.push(Packet { id: 2, value: 20.0 });
///
/// assert_eq!(container.len(), 2);
/// assert_eq!(container.get(0).unwrap().id, 1);
///
/// container.write(0, Packet { id: 99, value: 99.0 }).unwrap();
/// assert_eq!(container.get(0).unwrap().id, 99);
/// ```
///
/// ## Words
///
/// ```
/// use raw_words::Container;
///
/// let words = Container::from_elem(u64::MAX, 3);
/// let ones: u32 = words.iter().map(|w| w.count_ones()).sum();
/// assert_eq!(ones, 192);
/// ```
#[derive(Debug, Clone)]
pub struct Container<T: Pod> {
    storage: Storage<T>,
}

impl<T: Pod> Container<T> {
    /// Creates an empty container. Nothing is allocated until the first push.
    ///
    /// # Examples
    ///
    /// ```
    /// use raw_words::Container;
    ///
    /// let mut container = Container::<u32>::new();
    /// assert!(container.is_empty());
    /// container.push(42);
    /// assert_eq!(container.len(), 1);
    /// ```
    pub fn new() -> Self {
        Container {
            storage: Storage::new_in_memory(),
        }
    }

    /// Creates a container with pre-allocated capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// use raw_words::Container;
    ///
    /// let container = Container::<u64>::with_capacity(1000);
    /// assert!(container.capacity() >= 1000);
    /// assert!(container.is_empty());
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Container {
            storage: Storage::with_capacity(capacity),
        }
    }

    /// Creates a container from a slice.
    ///
    /// # Examples
    ///
    /// ```
    /// use raw_words::Container;
    ///
    /// let container = Container::from_slice(&[1u16, 2, 3]);
    /// assert_eq!(container.len(), 3);
    /// assert_eq!(container.get(1).unwrap(), &2);
    /// ```
    pub fn from_slice(values: &[T]) -> Self {
        Container {
            storage: Storage::from_vec(values.to_vec()),
        }
    }

    /// Creates a container holding `len` copies of `value`.
    pub fn from_elem(value: T, len: usize) -> Self {
        let mut storage = Storage::with_capacity(len);
        storage.resize(len, value);
        Container { storage }
    }

    /// Returns the number of elements in the container.
    #[inline]
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Returns `true` if the container contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Returns the number of elements the container can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    /// Returns a reference to the element at the given index.
    ///
    /// # Errors
    ///
    /// Returns `ContainerError::OutOfBounds` if `index >= len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use raw_words::Container;
    ///
    /// let c = Container::from_slice(&[10u8, 30]);
    ///
    /// assert_eq!(c.get(1).unwrap(), &30);
    /// assert!(c.get(2).is_err());
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Result<&T, ContainerError> {
        self.storage.get(index)
    }

    /// Returns a mutable reference to the element at the given index.
    ///
    /// # Errors
    ///
    /// Returns `ContainerError::OutOfBounds` if `index >= len()`.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, ContainerError> {
        self.storage.get_mut(index)
    }

    /// Writes a value to the element at the given index.
    ///
    /// This is a convenience method equivalent to `*container.get_mut(index)? = value`.
    ///
    /// # Errors
    ///
    /// Returns `ContainerError::OutOfBounds` if `index >= len()`.
    pub fn write(&mut self, index: usize, value: T) -> Result<(), ContainerError> {
        let slot = self.storage.get_mut(index)?;
        *slot = value;
        Ok(())
    }

    /// Appends an element to the back of the container in amortized `O(1)`.
    pub fn push(&mut self, value: T) {
        self.storage.push(value);
    }

    /// Removes and returns the last element, or `None` if empty.
    pub fn pop(&mut self) -> Option<T> {
        self.storage.pop()
    }

    /// Extend with elements from slice
    pub fn extend_from_slice(&mut self, values: &[T]) {
        self.storage.grow_for(values.len());
        for value in values {
            self.storage.push(*value);
        }
    }

    /// Reserve room for at least `additional` more elements
    pub fn reserve(&mut self, additional: usize) {
        self.storage.grow_for(additional);
    }

    /// Resizes to `new_len`, filling new slots with `fill`.
    pub fn resize(&mut self, new_len: usize, fill: T) {
        self.storage.resize(new_len, fill);
    }

    /// Shortens the container to `len` elements. No-op if already shorter.
    pub fn truncate(&mut self, len: usize) {
        self.storage.truncate(len);
    }

    /// Clear all elements, optionally keeping the allocation for reuse.
    ///
    /// # Examples
    ///
    /// ```
    /// use raw_words::Container;
    ///
    /// let mut c = Container::from_slice(&[1u64, 2, 3]);
    /// c.clear(true);
    /// assert!(c.is_empty());
    /// assert!(c.capacity() >= 3);
    ///
    /// c.clear(false);
    /// assert_eq!(c.capacity(), 0);
    /// ```
    pub fn clear(&mut self, keep_capacity: bool) {
        self.storage.clear(keep_capacity);
    }

    /// Returns an immutable slice view of all elements.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.storage.as_slice()
    }

    /// Returns a mutable slice view of all elements.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.storage.as_mut_slice()
    }

    /// Views the elements as raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.as_slice())
    }

    /// Returns an iterator over elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use raw_words::Container;
    ///
    /// let c = Container::from_slice(&[100u32, 200, 300]);
    /// let total: u32 = c.iter().sum();
    /// assert_eq!(total, 600);
    /// ```
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Returns a mutable iterator over elements.
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }
}

impl<T: Pod> core::ops::Index<usize> for Container<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl<T: Pod> core::ops::IndexMut<usize> for Container<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.as_mut_slice()[index]
    }
}

impl<T: Pod> Default for Container<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Pod + PartialEq> PartialEq for Container<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Pod + Eq> Eq for Container<T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use bytemuck_derive::{Pod, Zeroable};

    #[repr(C)]
    #[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
    struct Packet {
        id: u32,
        value: f32,
    }

    #[test]
    fn in_memory_basic_operations() -> Result<(), ContainerError> {
        let mut c = Container::<Packet>::new();
        assert!(c.is_empty());

        let p1 = Packet { id: 1, value: 10.0 };
        let p2 = Packet { id: 2, value: 20.0 };

        c.push(p1);
        c.push(p2);
        assert_eq!(c.len(), 2);
        assert_eq!(c.get(0)?, &p1);
        assert_eq!(c.get(1)?, &p2);

        // Modify using write
        let p3 = Packet { id: 3, value: 30.0 };
        c.write(1, p3)?;
        assert_eq!(c.get(1)?, &p3);

        // Modify using get_mut
        c.get_mut(0)?.value = 99.0;
        assert_eq!(c.get(0)?.value, 99.0);

        assert!(matches!(c.write(2, p1), Err(ContainerError::OutOfBounds(2))));

        Ok(())
    }

    #[test]
    fn index_operations() {
        let mut c = Container::<Packet>::from_slice(&[
            Packet { id: 1, value: 10.0 },
            Packet { id: 2, value: 20.0 },
        ]);

        assert_eq!(c[0].id, 1);
        assert_eq!(c[1].value, 20.0);

        c[1].value = 42.0;
        assert_eq!(c[1].value, 42.0);
    }

    #[test]
    #[should_panic]
    fn index_out_of_bounds_panics() {
        let c = Container::<u64>::from_slice(&[1, 2]);
        let _ = c[2];
    }

    #[test]
    fn extend_and_reserve() {
        let mut c = Container::<Packet>::with_capacity(10);

        c.push(Packet { id: 1, value: 10.0 });
        c.extend_from_slice(&[Packet { id: 2, value: 20.0 }, Packet { id: 3, value: 30.0 }]);

        assert_eq!(c.len(), 3);
        c.reserve(10);
        assert!(c.capacity() >= 13);
    }

    #[test]
    fn pop_and_truncate() {
        let mut c = Container::from_slice(&[1u64, 2, 3, 4]);
        assert_eq!(c.pop(), Some(4));
        c.truncate(1);
        assert_eq!(c.as_slice(), &[1]);
        assert_eq!(c.pop(), Some(1));
        assert_eq!(c.pop(), None);
    }

    #[test]
    fn clone_is_independent() {
        let original = Container::from_slice(&[1u64, 2, 3]);
        let mut copy = original.clone();
        copy[0] = 100;
        copy.push(4);
        assert_eq!(original.as_slice(), &[1, 2, 3]);
        assert_eq!(copy.as_slice(), &[100, 2, 3, 4]);
        assert_ne!(original, copy);
    }

    #[test]
    fn from_elem_and_bytes() {
        let c = Container::from_elem(0xFFu16, 3);
        assert_eq!(c.as_slice(), &[0xFF, 0xFF, 0xFF]);
        assert_eq!(c.as_bytes().len(), 6);
    }

    #[test]
    fn iter_mut_updates_in_place() {
        let mut c = Container::from_slice(&[1u32, 2, 3]);
        for v in c.iter_mut() {
            *v *= 10;
        }
        assert_eq!(c.as_slice(), &[10, 20, 30]);
    }
}
