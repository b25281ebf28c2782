pub mod asm;

use crate::sync::{MemFlags, Synchronize};

/// The barriers of the GPU running this kernel.
#[derive(Copy, Clone, Debug, Default)]
pub struct Hardware;

impl Synchronize for Hardware {
    #[inline(always)]
    fn threadgroup_barrier(&self, flags: MemFlags) {
        unsafe {
            if flags == MemFlags::Device {
                asm::membar_gl();
            }
            asm::bar_sync();
        }
    }
    #[inline(always)]
    fn simdgroup_barrier(&self, flags: MemFlags) {
        unsafe {
            match flags {
                MemFlags::None => {}
                MemFlags::Device => asm::membar_gl(),
                MemFlags::Threadgroup => asm::membar_cta(),
            }
            asm::bar_warp_sync();
        }
    }
}
