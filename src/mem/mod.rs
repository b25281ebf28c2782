//! Address-space qualified pointers.
//!
//! With the `kernel` feature every space gets its own pointer type and the
//! compiler rejects, say, a threadgroup pointer where a device pointer is
//! expected. With the `host` feature the qualifiers are erased: all four
//! aliases name the same `Ptr<T, Generic>`.

#[cfg(feature = "kernel")]
pub mod copy;
mod ptr;
mod space;

pub use ptr::Ptr;
pub use space::{AddressSpace, Writable};

#[cfg(feature = "kernel")]
pub use space::{Constant, Device, Thread, Threadgroup};
#[cfg(feature = "kernel")]
pub type DevicePtr<T> = Ptr<T, Device>;
#[cfg(feature = "kernel")]
pub type ThreadgroupPtr<T> = Ptr<T, Threadgroup>;
#[cfg(feature = "kernel")]
pub type ThreadPtr<T> = Ptr<T, Thread>;
#[cfg(feature = "kernel")]
pub type ConstantPtr<T> = Ptr<T, Constant>;

#[cfg(feature = "host")]
pub use space::Generic;
#[cfg(feature = "host")]
pub type DevicePtr<T> = Ptr<T, Generic>;
#[cfg(feature = "host")]
pub type ThreadgroupPtr<T> = Ptr<T, Generic>;
#[cfg(feature = "host")]
pub type ThreadPtr<T> = Ptr<T, Generic>;
#[cfg(feature = "host")]
pub type ConstantPtr<T> = Ptr<T, Generic>;
