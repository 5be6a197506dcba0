//! C ABI exports.
//!
//! Matches the `int sum(int a, int b)` declaration of the shared library
//! header, so C and LuaJIT/ctypes consumers can link against the cdylib.

use std::os::raw::c_int;

/// C entry point for [`crate::sum`].
#[no_mangle]
pub extern "C" fn sum(a: c_int, b: c_int) -> c_int {
    crate::sum(a, b)
}
