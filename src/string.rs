//! C string functions over null-terminated bytes in device memory.
//!
//! None of these allocate, bound their writes or report errors. The
//! destination must be large enough for the result and its terminator,
//! and every source must be terminated. The null checks below only look
//! at the pointer value, never at whether the memory behind it is valid.
//!
//! Writes are plain stores. Two invocations writing the same string race.

use crate::mem::DevicePtr;

/// The string terminator.
pub const NULL_CHAR: u8 = b'\0';

/// Compares two strings.
///
/// Bytes compare as signed chars, so `0x80..=0xff` sort below ASCII.
/// Returns `1` or `-1` at the first differing byte, and `0` only when both
/// strings end together. When just one string has ended the result is
/// `1` if it is `a`, and `-1` otherwise:
/// `strcmp("abc", "abcd") == 1` and `strcmp("abcd", "abc") == -1`.
/// This does not follow the usual sign-of-difference contract.
///
/// # Safety
/// Both pointers, if non-null, must point to terminated strings.
pub unsafe fn strcmp(mut a: DevicePtr<u8>, mut b: DevicePtr<u8>) -> i32 {
    while !a.is_null() && !b.is_null() && a.read(0) != NULL_CHAR && b.read(0) != NULL_CHAR {
        let (x, y) = (a.read(0) as i8, b.read(0) as i8);
        if x > y {
            return 1;
        } else if x < y {
            return -1;
        }
        a = a.add(1);
        b = b.add(1);
    }

    if !a.is_null() && !b.is_null() && a.read(0) == NULL_CHAR && b.read(0) == NULL_CHAR {
        0
    } else if !a.is_null() && a.read(0) == NULL_CHAR {
        1
    } else {
        -1
    }
}

/// Copies exactly `num` bytes, then writes a terminator at `dest[num]`.
///
/// Terminators inside the first `num` source bytes are copied like any
/// other byte and the rest of `dest` is not zero-filled. If `src` is
/// shorter than `num` this reads past its end. `dest` needs room for
/// `num + 1` bytes.
///
/// # Safety
/// `src` must be readable for `num` bytes and `dest` writable for `num + 1`.
pub unsafe fn strncpy(dest: DevicePtr<u8>, src: DevicePtr<u8>, num: usize) -> DevicePtr<u8> {
    for i in 0..num {
        dest.write(i, src.read(i));
    }
    dest.write(num, NULL_CHAR);

    dest
}

/// Copies `src` and its terminator into `dest`.
///
/// A null `src` copies as the empty string.
///
/// # Safety
/// `src` must be terminated and `dest` must hold `strlen(src) + 1` bytes.
pub unsafe fn strcpy(dest: DevicePtr<u8>, mut src: DevicePtr<u8>) -> DevicePtr<u8> {
    let mut cursor = dest;
    while !src.is_null() && src.read(0) != NULL_CHAR {
        cursor.write(0, src.read(0));
        cursor = cursor.add(1);
        src = src.add(1);
    }
    cursor.write(0, NULL_CHAR);

    dest
}

/// Position of `dest`'s terminator.
unsafe fn end_of(dest: DevicePtr<u8>) -> DevicePtr<u8> {
    let mut end = dest;
    while !end.is_null() && end.read(0) != NULL_CHAR {
        end = end.add(1);
    }
    end
}

/// Appends `num` bytes of `src` to `dest` with [`strncpy`] semantics.
///
/// # Safety
/// `dest` must be terminated and have room for `num + 1` more bytes;
/// `src` must be readable for `num` bytes.
pub unsafe fn strncat(dest: DevicePtr<u8>, src: DevicePtr<u8>, num: usize) -> DevicePtr<u8> {
    strncpy(end_of(dest), src, num);
    dest
}

/// Appends `src` to `dest` with [`strcpy`] semantics.
///
/// # Safety
/// Both strings must be terminated and `dest` must have room for
/// `strlen(src) + 1` more bytes.
pub unsafe fn strcat(dest: DevicePtr<u8>, src: DevicePtr<u8>) -> DevicePtr<u8> {
    strcpy(end_of(dest), src);
    dest
}

/// Number of bytes before the terminator. A null `s` has length 0.
///
/// The Metal version's loop never advanced its cursor and spun forever on
/// any non-empty string; this one advances.
///
/// # Safety
/// `s` must be null or terminated.
pub unsafe fn strlen(s: DevicePtr<u8>) -> usize {
    let mut size = 0;
    while !s.is_null() && s.read(size) != NULL_CHAR {
        size += 1;
    }
    size
}

/// First occurrence of `character` in `s`, truncated to a byte like C's
/// `int` parameter. The terminator itself is never matched.
///
/// The Metal version's loop never advanced its cursor, so it only ever
/// looked at the first byte; this one scans the whole string.
///
/// # Safety
/// `s` must be null or terminated.
pub unsafe fn strchr(s: DevicePtr<u8>, character: i32) -> Option<DevicePtr<u8>> {
    let wanted = character as u8;
    let mut cursor = s;
    while !cursor.is_null() && cursor.read(0) != NULL_CHAR {
        if cursor.read(0) == wanted {
            return Some(cursor);
        }
        cursor = cursor.add(1);
    }

    None
}
