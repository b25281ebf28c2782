//! Architecture-specific barrier implementations.

#[cfg(all(feature = "kernel", target_arch = "nvptx64"))]
pub mod nvptx;

#[cfg(all(feature = "kernel", target_arch = "nvptx64"))]
pub use nvptx::Hardware;
