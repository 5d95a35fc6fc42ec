//! A fake driver: a handful of stub entry points with their exact native
//! signatures, and resolvers that hand them out by name.

#![allow(dead_code)]

use std::ffi::{c_void, CStr};
use std::os::raw::c_char;
use std::ptr;

use gl33core::types::*;

pub const GL_VIEWPORT: GLenum = 0x0BA2;
pub const GL_MAX_TEXTURE_SIZE: GLenum = 0x0D33;
pub const GL_INVALID_OPERATION: GLenum = 0x0502;
pub const GL_OUT_OF_MEMORY: GLenum = 0x0505;
pub const GL_BLEND: GLenum = 0x0BE2;

pub const VIEWPORT_SENTINEL: [GLint; 4] = [7, -3, 1920, 1080];
pub const INFO_LOG: &[u8] = b"0:1(1): error: syntax error";
pub const FENCE_SENTINEL: usize = 0x5EED;

extern "system" fn unused() {}

extern "system" fn get_integerv(pname: GLenum, params: *mut GLint) {
    unsafe {
        match pname {
            GL_VIEWPORT => ptr::copy_nonoverlapping(VIEWPORT_SENTINEL.as_ptr(), params, 4),
            GL_MAX_TEXTURE_SIZE => *params = 16384,
            _ => {}
        }
    }
}

extern "system" fn get_error_invalid_operation() -> GLenum {
    GL_INVALID_OPERATION
}

extern "system" fn get_error_out_of_memory() -> GLenum {
    GL_OUT_OF_MEMORY
}

extern "system" fn is_enabled(cap: GLenum) -> GLboolean {
    if cap == GL_BLEND { GL_TRUE } else { GL_FALSE }
}

extern "system" fn fence_sync(_condition: GLenum, _flags: GLbitfield) -> GLsync {
    FENCE_SENTINEL as GLsync
}

extern "system" fn get_uniform_location(_program: GLuint, _name: *const GLchar) -> GLint {
    -1
}

// Writes as much of INFO_LOG as fits, NUL-terminated, like a real driver.
extern "system" fn get_shader_info_log(
    _shader: GLuint,
    buf_size: GLsizei,
    length: *mut GLsizei,
    info_log: *mut GLchar,
) {
    if buf_size <= 0 || info_log.is_null() {
        if !length.is_null() {
            unsafe { *length = 0 };
        }
        return;
    }
    let written = INFO_LOG.len().min(buf_size as usize - 1);
    unsafe {
        ptr::copy_nonoverlapping(INFO_LOG.as_ptr() as *const GLchar, info_log, written);
        *info_log.add(written) = 0;
        if !length.is_null() {
            *length = written as GLsizei;
        }
    }
}

fn stub(name: &CStr) -> *const c_void {
    match name.to_bytes() {
        b"glGetIntegerv" => get_integerv as *const c_void,
        b"glGetError" => get_error_invalid_operation as *const c_void,
        b"glIsEnabled" => is_enabled as *const c_void,
        b"glFenceSync" => fence_sync as *const c_void,
        b"glGetUniformLocation" => get_uniform_location as *const c_void,
        b"glGetShaderInfoLog" => get_shader_info_log as *const c_void,
        // Never called by the tests; only needs to be non-null.
        _ => unused as *const c_void,
    }
}

/// Provides every entry point of the profile.
pub fn driver(name: &CStr) -> *const c_void {
    stub(name)
}

/// Same as [`driver`], but `glGetError` reports `GL_OUT_OF_MEMORY`.
pub fn other_driver(name: &CStr) -> *const c_void {
    match name.to_bytes() {
        b"glGetError" => get_error_out_of_memory as *const c_void,
        _ => stub(name),
    }
}

/// Lacks the legacy packed vertex calls, like most core-profile drivers.
pub fn core_only_driver(name: &CStr) -> *const c_void {
    if name.to_bytes().starts_with(b"glVertexP") {
        ptr::null()
    } else {
        stub(name)
    }
}

/// Lacks `glViewport`, which no 3.3 core driver may omit.
pub fn broken_driver(name: &CStr) -> *const c_void {
    if name.to_bytes() == b"glViewport" {
        ptr::null()
    } else {
        stub(name)
    }
}

pub extern "C" fn c_driver(name: *const c_char) -> *const c_void {
    driver(unsafe { CStr::from_ptr(name) })
}

pub extern "C" fn c_core_only_driver(name: *const c_char) -> *const c_void {
    core_only_driver(unsafe { CStr::from_ptr(name) })
}

pub extern "C" fn c_broken_driver(name: *const c_char) -> *const c_void {
    broken_driver(unsafe { CStr::from_ptr(name) })
}
