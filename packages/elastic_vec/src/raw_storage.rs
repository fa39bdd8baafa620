use std::alloc::{Layout, alloc, dealloc};
use std::any::type_name;
use std::mem;
use std::ptr::NonNull;

/// Owns a single heap allocation providing uninitialized storage for a fixed number of `T` slots.
///
/// This is the raw layer underneath [`ElasticVec`][crate::ElasticVec]: it knows how many element
/// slots the allocation holds but never which of them contain live values. It never runs element
/// constructors or destructors - the owner must destroy any values it placed into the slots
/// before dropping the storage, because dropping only releases the allocation itself.
///
/// A storage of capacity zero owns no allocation at all; its pointer is the dangling sentinel.
#[derive(Debug)]
pub(crate) struct RawStorage<T> {
    /// Start of the allocation. Dangling when `capacity` is zero, in which case no
    /// allocation exists and nothing may be read or written through this pointer.
    ptr: NonNull<T>,

    /// Number of element slots in the allocation. Counts slots, not bytes, and says
    /// nothing about which slots hold live values - that is the owner's bookkeeping.
    capacity: usize,
}

impl<T> RawStorage<T> {
    /// Creates a storage with zero capacity and no allocation.
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            capacity: 0,
        }
    }

    /// Creates a storage with room for exactly `capacity` elements, all uninitialized.
    ///
    /// A capacity of zero performs no allocation and is equivalent to [`new()`][Self::new].
    ///
    /// # Panics
    ///
    /// Panics if `T` is zero-sized or if the allocation fails.
    #[must_use]
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        assert!(
            size_of::<T>() > 0,
            "RawStorage must have non-zero item size"
        );

        if capacity == 0 {
            return Self::new();
        }

        // SAFETY: The layout is non-zero-sized because both the capacity and the item size
        // are non-zero, as guarded above.
        let ptr = NonNull::new(unsafe { alloc(Self::layout(capacity)) })
            .expect("we do not intend to handle allocation failure as a real possibility - OOM results in panic")
            .cast::<T>();

        Self { ptr, capacity }
    }

    #[must_use]
    fn layout(capacity: usize) -> Layout {
        Layout::array::<T>(capacity).expect("simple flat array layout must be calculable")
    }

    /// The number of element slots in the allocation.
    #[must_use]
    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    /// Pointer to the slot at `offset`.
    ///
    /// The one-past-the-end offset (`offset == capacity`) is explicitly legal, matching the
    /// usual end-pointer convention; the returned pointer must not be dereferenced in that case.
    ///
    /// # Safety
    ///
    /// The caller must ensure that `offset <= capacity`.
    /// In debug builds, this is checked with an assertion.
    #[must_use]
    pub(crate) unsafe fn slot(&self, offset: usize) -> NonNull<T> {
        debug_assert!(
            offset <= self.capacity,
            "slot offset {offset} out of bounds in storage of {} with capacity {}",
            type_name::<T>(),
            self.capacity
        );

        // SAFETY: The caller promises that the offset stays within the allocation or one past
        // its end, both of which are valid positions for pointer arithmetic. For an empty
        // storage the only legal offset is zero, which leaves the dangling pointer untouched.
        unsafe { self.ptr.add(offset) }
    }

    /// Exchanges the allocations of two storages.
    ///
    /// This is a plain field exchange: no allocation, no element access, cannot fail. Every
    /// growth algorithm in the owning container relies on this as its commit point.
    pub(crate) fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.ptr, &mut other.ptr);
        mem::swap(&mut self.capacity, &mut other.capacity);
    }
}

impl<T> Drop for RawStorage<T> {
    fn drop(&mut self) {
        if self.capacity == 0 {
            return;
        }

        // SAFETY: The allocation was obtained in `with_capacity()` with this same layout and
        // has not been released yet. Any values the owner placed into the slots have already
        // been destroyed or relocated by the owner - this type only returns the memory.
        unsafe {
            dealloc(self.ptr.as_ptr().cast(), Self::layout(self.capacity));
        }
    }
}

#[cfg(test)]
#[allow(
    clippy::undocumented_unsafe_blocks,
    clippy::multiple_unsafe_ops_per_block,
    clippy::indexing_slicing,
    reason = "test code doesn't need the same safety rigor as production code"
)]
mod tests {
    use super::*;

    #[test]
    fn smoke_test() {
        let storage = RawStorage::<u32>::with_capacity(3);

        assert_eq!(storage.capacity(), 3);

        unsafe {
            storage.slot(0).write(10);
            storage.slot(1).write(11);
            storage.slot(2).write(12);

            assert_eq!(storage.slot(0).read(), 10);
            assert_eq!(storage.slot(1).read(), 11);
            assert_eq!(storage.slot(2).read(), 12);
        }

        // u32 needs no destruction, so releasing the allocation is all the cleanup there is.
    }

    #[test]
    fn empty_storage_owns_no_allocation() {
        let storage = RawStorage::<u64>::new();

        assert_eq!(storage.capacity(), 0);
        assert_eq!(storage.ptr, NonNull::dangling());
    }

    #[test]
    fn zero_capacity_is_empty() {
        let storage = RawStorage::<u64>::with_capacity(0);

        assert_eq!(storage.capacity(), 0);
        assert_eq!(storage.ptr, NonNull::dangling());
    }

    #[test]
    fn one_past_the_end_slot_is_legal() {
        let storage = RawStorage::<u16>::with_capacity(4);

        let first = unsafe { storage.slot(0) };
        let end = unsafe { storage.slot(4) };

        assert_eq!(unsafe { first.add(4) }, end);
    }

    #[test]
    fn swap_exchanges_allocations() {
        let mut a = RawStorage::<u32>::with_capacity(2);
        let mut b = RawStorage::<u32>::with_capacity(5);

        let a_ptr = a.ptr;
        let b_ptr = b.ptr;

        a.swap(&mut b);

        assert_eq!(a.capacity(), 5);
        assert_eq!(b.capacity(), 2);
        assert_eq!(a.ptr, b_ptr);
        assert_eq!(b.ptr, a_ptr);
    }

    #[test]
    fn swap_with_empty_transfers_ownership() {
        let mut occupied = RawStorage::<u32>::with_capacity(8);
        let mut empty = RawStorage::<u32>::new();

        occupied.swap(&mut empty);

        assert_eq!(occupied.capacity(), 0);
        assert_eq!(empty.capacity(), 8);
    }

    #[test]
    #[should_panic]
    fn zero_sized_item_type_panics() {
        drop(RawStorage::<()>::with_capacity(3));
    }
}
