//! Barriers and the locks behind the console.
//!
//! A barrier is a collective rendezvous, not a lock: it protects no data by
//! itself, it only orders memory across the moment every participant of a
//! scope has arrived. Every participant must reach the same barrier the
//! same number of times. A barrier inside a branch that only some
//! invocations take hangs the scope, and nothing here can detect that.

pub mod barrier;
#[cfg(feature = "kernel")]
pub mod emulated;
pub mod spinmutex;

pub use barrier::SpinBarrier;

/// Which memory a barrier orders, besides execution.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum MemFlags {
    /// Execution only.
    #[default]
    None,
    /// Device memory writes become visible to the scope.
    Device,
    /// Threadgroup memory writes become visible to the scope.
    Threadgroup,
}

/// The barriers a kernel invocation can call.
///
/// Implemented by `arch::Hardware` on GPU targets and by `emulated::Lane`
/// everywhere else.
pub trait Synchronize {
    /// Waits for every invocation of the threadgroup.
    fn threadgroup_barrier(&self, flags: MemFlags);
    /// Waits for every invocation of the SIMD group (warp / wavefront).
    fn simdgroup_barrier(&self, flags: MemFlags);
}
impl<S: Synchronize + ?Sized> Synchronize for &S {
    fn threadgroup_barrier(&self, flags: MemFlags) {
        (**self).threadgroup_barrier(flags)
    }
    fn simdgroup_barrier(&self, flags: MemFlags) {
        (**self).simdgroup_barrier(flags)
    }
}
