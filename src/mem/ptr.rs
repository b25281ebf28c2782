use super::space::{AddressSpace, Writable};
use core::{fmt, marker::PhantomData, ptr::null_mut};

/// A raw pointer tagged with the address space it points into.
///
/// The tag costs nothing at runtime. Every dereference stays `unsafe`:
/// a `Ptr` carries no length, no lifetime and no aliasing guarantee,
/// exactly like the pointers a kernel receives from its dispatch.
pub struct Ptr<T, A: AddressSpace> {
    raw: *mut T,
    space: PhantomData<A>,
}
impl<T, A: AddressSpace> Ptr<T, A> {
    pub const fn null() -> Ptr<T, A> {
        Ptr::from_raw(null_mut())
    }
    pub const fn from_raw(raw: *mut T) -> Ptr<T, A> {
        Ptr {
            raw,
            space: PhantomData,
        }
    }
    pub fn from_ref(value: &T) -> Ptr<T, A> {
        Ptr::from_raw((value as *const T).cast_mut())
    }
    pub fn from_mut(value: &mut T) -> Ptr<T, A> {
        Ptr::from_raw(value as *mut T)
    }
    /// Points at the first element of `slice`. Writing through the
    /// result is undefined behaviour; use [`Ptr::from_mut_slice`] for that.
    pub fn from_slice(slice: &[T]) -> Ptr<T, A> {
        Ptr::from_raw(slice.as_ptr().cast_mut())
    }
    pub fn from_mut_slice(slice: &mut [T]) -> Ptr<T, A> {
        Ptr::from_raw(slice.as_mut_ptr())
    }

    pub const fn as_ptr(self) -> *const T {
        self.raw
    }
    pub const fn as_mut_ptr(self) -> *mut T {
        self.raw
    }
    pub fn is_null(self) -> bool {
        self.raw.is_null()
    }

    /// Advances by `count` elements. The result may point out of bounds;
    /// only dereferencing it is unsafe.
    pub fn add(self, count: usize) -> Ptr<T, A> {
        Ptr::from_raw(self.raw.wrapping_add(count))
    }
    /// Distance in elements from `origin` to `self`.
    ///
    /// # Safety
    /// Both pointers must point into the same allocation.
    pub unsafe fn offset_from(self, origin: Ptr<T, A>) -> isize {
        self.raw.offset_from(origin.raw)
    }

    /// Loads the element at `index`.
    ///
    /// # Safety
    /// `self + index` must be valid for reads and initialized.
    pub unsafe fn read(self, index: usize) -> T
    where
        T: Copy,
    {
        *self.raw.add(index)
    }
}
impl<T, A: Writable> Ptr<T, A> {
    /// Stores `value` at `index`.
    ///
    /// # Safety
    /// `self + index` must be valid for writes, and no other invocation may
    /// access that element concurrently.
    pub unsafe fn write(self, index: usize, value: T) {
        self.raw.add(index).write(value);
    }
}

impl<T, A: AddressSpace> Clone for Ptr<T, A> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T, A: AddressSpace> Copy for Ptr<T, A> {}
impl<T, A: AddressSpace> PartialEq for Ptr<T, A> {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}
impl<T, A: AddressSpace> Eq for Ptr<T, A> {}
impl<T, A: AddressSpace> fmt::Debug for Ptr<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:p}", A::NAME, self.raw)
    }
}

// Device and threadgroup buffers are shared between invocations by
// definition. Synchronizing access is the kernel's job.
unsafe impl<T: Send, A: AddressSpace> Send for Ptr<T, A> {}
unsafe impl<T: Send + Sync, A: AddressSpace> Sync for Ptr<T, A> {}

#[cfg(all(test, feature = "host"))]
mod tests {
    use super::*;
    use crate::mem::Generic;

    #[test]
    fn read_and_write_go_through_the_index() {
        let mut buffer = [1u32, 2, 3, 4];
        let ptr = Ptr::<u32, Generic>::from_mut_slice(&mut buffer);
        unsafe {
            assert_eq!(ptr.read(2), 3);
            ptr.write(0, 9);
            assert_eq!(ptr.add(1).read(2), 4);
            assert_eq!(ptr.add(3).offset_from(ptr), 3);
        }
        assert_eq!(buffer, [9, 2, 3, 4]);
    }

    #[test]
    fn null_is_detected_and_debug_names_the_space() {
        let ptr = Ptr::<u8, Generic>::null();
        assert!(ptr.is_null());
        assert!(format!("{:?}", ptr).starts_with("generic "));
        assert_eq!(ptr, Ptr::from_raw(core::ptr::null_mut()));
    }
}

#[cfg(all(test, feature = "kernel"))]
mod kernel_tests {
    use super::*;
    use crate::mem::Constant;

    #[test]
    fn constant_space_is_read_only_but_readable() {
        let table = [3u16, 5, 8];
        let ptr = Ptr::<u16, Constant>::from_slice(&table);
        unsafe {
            assert_eq!(ptr.read(1), 5);
            assert_eq!(ptr.add(2).read(0), 8);
        }
        assert!(format!("{:?}", ptr).starts_with("constant "));
    }
}
