use core::arch::asm;

/// Waits for every thread of the CTA and orders shared memory.
#[inline(always)]
pub unsafe fn bar_sync() {
    core::arch::nvptx::_syncthreads();
}

/// Waits for every active thread of the warp.
#[inline(always)]
pub unsafe fn bar_warp_sync() {
    asm!("bar.warp.sync -1;");
}

/// Fence for memory shared by the CTA.
#[inline(always)]
pub unsafe fn membar_cta() {
    asm!("membar.cta;");
}

/// Fence for global memory, visible to the whole grid.
#[inline(always)]
pub unsafe fn membar_gl() {
    asm!("membar.gl;");
}
