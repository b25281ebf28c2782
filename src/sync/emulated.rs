//! CPU emulation of a threadgroup.
//!
//! Lets kernel-mode code run on ordinary threads: build a [`Group`], hand
//! each thread its [`Lane`], and the barriers the kernel calls rendezvous
//! through [`SpinBarrier`]s instead of hardware.

use super::{MemFlags, SpinBarrier, Synchronize};
use crate::Error;
use arrayvec::ArrayVec;
use core::sync::atomic::{fence, Ordering};

/// Most SIMD groups a single emulated threadgroup can hold.
pub const MAX_SIMDGROUPS: usize = 32;

/// Shape of an emulated threadgroup.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GroupConfig {
    /// Invocations in the threadgroup.
    pub group_size: usize,
    /// Invocations per SIMD group. Must divide `group_size`.
    pub simd_width: usize,
}
impl GroupConfig {
    pub const fn new(group_size: usize, simd_width: usize) -> GroupConfig {
        GroupConfig {
            group_size,
            simd_width,
        }
    }
    /// SIMD groups in the threadgroup, 0 for a zero width.
    pub fn simdgroups(&self) -> usize {
        self.group_size.checked_div(self.simd_width).unwrap_or(0)
    }
    pub fn validate(&self) -> Result<(), Error> {
        if self.group_size == 0 {
            log::warn!("rejecting empty threadgroup");
            return Err(Error::EmptyGroup);
        }
        if self.simd_width == 0
            || self.group_size % self.simd_width != 0
            || self.simdgroups() > MAX_SIMDGROUPS
        {
            log::warn!(
                "rejecting simd width {} for group of {}",
                self.simd_width,
                self.group_size
            );
            return Err(Error::InvalidSimdWidth {
                group_size: self.group_size,
                simd_width: self.simd_width,
            });
        }
        Ok(())
    }
}
impl Default for GroupConfig {
    fn default() -> GroupConfig {
        GroupConfig::new(32, 32)
    }
}

/// The barriers shared by one emulated threadgroup.
#[derive(Debug)]
pub struct Group {
    config: GroupConfig,
    threadgroup: SpinBarrier,
    simdgroups: ArrayVec<SpinBarrier, MAX_SIMDGROUPS>,
}
impl Group {
    pub fn new(config: GroupConfig) -> Result<Group, Error> {
        config.validate()?;

        let mut simdgroups = ArrayVec::new();
        for _ in 0..config.simdgroups() {
            simdgroups.push(SpinBarrier::new(config.simd_width));
        }
        log::debug!(
            "emulated threadgroup of {} ({} simdgroups of {})",
            config.group_size,
            config.simdgroups(),
            config.simd_width
        );

        Ok(Group {
            config,
            threadgroup: SpinBarrier::new(config.group_size),
            simdgroups,
        })
    }
    pub fn config(&self) -> GroupConfig {
        self.config
    }
    /// The handle invocation `index` passes to kernel code.
    pub fn lane(&self, index: usize) -> Result<Lane<'_>, Error> {
        if index >= self.config.group_size {
            return Err(Error::LaneOutOfRange {
                lane: index,
                group_size: self.config.group_size,
            });
        }
        Ok(Lane {
            index,
            threadgroup: &self.threadgroup,
            simdgroup: &self.simdgroups[index / self.config.simd_width],
        })
    }
}

/// One emulated invocation's view of its group's barriers.
#[derive(Copy, Clone, Debug)]
pub struct Lane<'g> {
    index: usize,
    threadgroup: &'g SpinBarrier,
    simdgroup: &'g SpinBarrier,
}
impl<'g> Lane<'g> {
    /// Position in the threadgroup.
    pub fn index(&self) -> usize {
        self.index
    }
}
impl<'g> Synchronize for Lane<'g> {
    fn threadgroup_barrier(&self, flags: MemFlags) {
        if flags == MemFlags::Device {
            // Other groups read device memory without meeting this barrier.
            fence(Ordering::SeqCst);
        }
        self.threadgroup.wait();
    }
    fn simdgroup_barrier(&self, flags: MemFlags) {
        if flags == MemFlags::Device {
            fence(Ordering::SeqCst);
        }
        self.simdgroup.wait();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{
        sync::atomic::{AtomicUsize, Ordering},
        thread,
    };

    #[test]
    fn config_is_validated() {
        assert_eq!(GroupConfig::new(0, 1).validate(), Err(Error::EmptyGroup));
        assert_eq!(
            GroupConfig::new(12, 5).validate(),
            Err(Error::InvalidSimdWidth {
                group_size: 12,
                simd_width: 5
            })
        );
        assert!(GroupConfig::new(12, 0).validate().is_err());
        assert!(GroupConfig::new(1024, 1).validate().is_err());
        assert_eq!(GroupConfig::new(12, 4).validate(), Ok(()));
        assert_eq!(GroupConfig::default().simdgroups(), 1);
    }

    #[test]
    fn zero_simd_width_has_no_simdgroups() {
        assert_eq!(GroupConfig::new(8, 0).simdgroups(), 0);
        assert!(Group::new(GroupConfig::new(8, 0)).is_err());
    }

    #[test]
    fn lanes_share_their_simdgroup_barrier() {
        let group = Group::new(GroupConfig::new(8, 4)).unwrap();
        let a = group.lane(1).unwrap();
        let b = group.lane(3).unwrap();
        let c = group.lane(4).unwrap();
        assert!(core::ptr::eq(a.simdgroup, b.simdgroup));
        assert!(!core::ptr::eq(a.simdgroup, c.simdgroup));
        assert!(core::ptr::eq(a.threadgroup, c.threadgroup));
        assert_eq!(
            group.lane(8).unwrap_err(),
            Error::LaneOutOfRange {
                lane: 8,
                group_size: 8
            }
        );
    }

    #[test]
    fn simdgroups_rendezvous_independently() {
        let group = Group::new(GroupConfig::new(8, 2)).unwrap();
        let passes = AtomicUsize::new(0);

        thread::scope(|s| {
            for index in 0..8 {
                let lane = group.lane(index).unwrap();
                let passes = &passes;
                s.spawn(move || {
                    // Uneven round counts per simdgroup: would deadlock if
                    // simdgroup barriers spanned the whole group.
                    for _ in 0..(index / 2 + 1) {
                        lane.simdgroup_barrier(MemFlags::None);
                        passes.fetch_add(1, Ordering::Relaxed);
                    }
                    lane.threadgroup_barrier(MemFlags::Threadgroup);
                });
            }
        });

        assert_eq!(passes.load(Ordering::Relaxed), 2 * (1 + 2 + 3 + 4));
        assert_eq!(group.threadgroup.generation(), 1);
    }
}
