//! C string functions and address-space memory movers for GPU kernels.
//!
//! Build with the `kernel` feature for code that runs inside a dispatch:
//! pointers carry their address space in their type and the memory mover
//! in [`mem::copy`] is available. The default `host` feature erases the
//! address spaces and leaves the mover out.

#![cfg_attr(not(test), no_std)]
#![cfg_attr(
    all(feature = "kernel", target_arch = "nvptx64"),
    feature(stdarch_nvptx, asm_experimental_arch)
)]
#![allow(clippy::missing_safety_doc)]

#[cfg(all(feature = "kernel", feature = "host"))]
compile_error!("the `kernel` and `host` features are mutually exclusive");
#[cfg(not(any(feature = "kernel", feature = "host")))]
compile_error!("an execution mode must be selected: `kernel` or `host`");

pub mod arch;
pub mod console;
mod error;
pub mod mem;
pub mod string;
pub mod sync;

pub use crate::{
    error::Error,
    mem::{ConstantPtr, DevicePtr, Ptr, ThreadPtr, ThreadgroupPtr},
    string::{strcat, strchr, strcmp, strcpy, strlen, strncat, strncpy, NULL_CHAR},
};

#[cfg(feature = "kernel")]
pub use crate::mem::copy::{
    copy_device_to_group, copy_device_to_group_at, copy_device_to_thread,
    copy_group_to_device, copy_group_to_device_at, copy_thread_to_device,
};
