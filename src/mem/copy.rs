//! Single-element copies between address spaces.
//!
//! Each copy is followed by the barrier that makes the store visible to
//! everyone who can read the destination. Because a barrier is collective,
//! every invocation of the scope has to call the same copy the same number
//! of times, even the ones with nothing to move. Indices are not checked.

use super::{DevicePtr, ThreadPtr, ThreadgroupPtr};
use crate::sync::{MemFlags, Synchronize};

/// `dst[dest_index] = src[source_index]`, then a device-memory barrier
/// across the threadgroup.
///
/// # Safety
/// Both indices must be in bounds and the element at `dst + dest_index`
/// must not be written by another invocation before the barrier.
#[inline]
pub unsafe fn copy_group_to_device<T: Copy>(
    dst: DevicePtr<T>,
    src: ThreadgroupPtr<T>,
    dest_index: usize,
    source_index: usize,
    sync: &impl Synchronize,
) {
    dst.write(dest_index, src.read(source_index));
    sync.threadgroup_barrier(MemFlags::Device);
}

/// [`copy_group_to_device`] with one index for both sides.
///
/// # Safety
/// See [`copy_group_to_device`].
#[inline]
pub unsafe fn copy_group_to_device_at<T: Copy>(
    dst: DevicePtr<T>,
    src: ThreadgroupPtr<T>,
    index: usize,
    sync: &impl Synchronize,
) {
    copy_group_to_device(dst, src, index, index, sync);
}

/// `dst[dest_index] = src[source_index]`, then a threadgroup-memory barrier.
/// Only the calling group is guaranteed to see the store.
///
/// # Safety
/// See [`copy_group_to_device`].
#[inline]
pub unsafe fn copy_device_to_group<T: Copy>(
    dst: ThreadgroupPtr<T>,
    src: DevicePtr<T>,
    dest_index: usize,
    source_index: usize,
    sync: &impl Synchronize,
) {
    dst.write(dest_index, src.read(source_index));
    sync.threadgroup_barrier(MemFlags::Threadgroup);
}

/// [`copy_device_to_group`] with one index for both sides.
///
/// # Safety
/// See [`copy_group_to_device`].
#[inline]
pub unsafe fn copy_device_to_group_at<T: Copy>(
    dst: ThreadgroupPtr<T>,
    src: DevicePtr<T>,
    index: usize,
    sync: &impl Synchronize,
) {
    copy_device_to_group(dst, src, index, index, sync);
}

/// `*dst = src[source_index]`, then a SIMD-group execution barrier.
///
/// # Safety
/// `source_index` must be in bounds and `dst` valid for writes.
#[inline]
pub unsafe fn copy_device_to_thread<T: Copy>(
    dst: ThreadPtr<T>,
    src: DevicePtr<T>,
    source_index: usize,
    sync: &impl Synchronize,
) {
    dst.write(0, src.read(source_index));
    sync.simdgroup_barrier(MemFlags::None);
}

/// `dst[dest_index] = *src`, then a SIMD-group execution barrier.
///
/// # Safety
/// `dest_index` must be in bounds and `src` valid for reads.
#[inline]
pub unsafe fn copy_thread_to_device<T: Copy>(
    dst: DevicePtr<T>,
    src: ThreadPtr<T>,
    dest_index: usize,
    sync: &impl Synchronize,
) {
    dst.write(dest_index, src.read(0));
    sync.simdgroup_barrier(MemFlags::None);
}
