//! Address-space tags.
//!
//! A tag is a zero-sized type carried by [`Ptr`](super::Ptr). It never
//! exists at runtime; it only decides which functions a pointer may be
//! passed to.

mod sealed {
    pub trait Sealed {}
}

/// A memory space a pointer can refer into.
pub trait AddressSpace: sealed::Sealed + 'static {
    const NAME: &'static str;
}

/// Spaces a kernel invocation may store into.
pub trait Writable: AddressSpace {}

macro_rules! address_space {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Debug, PartialEq, Eq)]
        pub enum $name {}

        impl sealed::Sealed for $name {}
        impl AddressSpace for $name {
            const NAME: &'static str = $label;
        }
    };
}

#[cfg(feature = "kernel")]
address_space!(
    /// Visible to every invocation in the dispatch, lives as long as the kernel.
    Device,
    "device"
);
#[cfg(feature = "kernel")]
address_space!(
    /// Shared by the invocations of one threadgroup, lives as long as the group.
    Threadgroup,
    "threadgroup"
);
#[cfg(feature = "kernel")]
address_space!(
    /// Private to one invocation.
    Thread,
    "thread"
);
#[cfg(feature = "kernel")]
address_space!(
    /// Read-only data shared by the whole dispatch.
    Constant,
    "constant"
);

#[cfg(feature = "kernel")]
impl Writable for Device {}
#[cfg(feature = "kernel")]
impl Writable for Threadgroup {}
#[cfg(feature = "kernel")]
impl Writable for Thread {}

#[cfg(feature = "host")]
address_space!(
    /// The single flat address space of a host build.
    Generic,
    "generic"
);

#[cfg(feature = "host")]
impl Writable for Generic {}
