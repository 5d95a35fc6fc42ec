//! The exported C surface, driven the way a C caller would drive it.

mod common;

use std::ffi::CStr;
use std::ptr;

use common::*;
use gl33core::exports::*;
use gl33core::types::*;
use gl33core::{
    gl3_3core_clear_last_error, gl3_3core_funcs_create, gl3_3core_funcs_destroy,
    gl3_3core_funcs_is_available, gl3_3core_funcs_resolve, gl3_3core_last_error,
    gl3_3core_last_error_entry, FunctionTableHandle, Gl33Status,
};

unsafe fn available(table: FunctionTableHandle, name: &CStr) -> bool {
    gl3_3core_funcs_is_available(table, name.as_ptr())
}

unsafe fn last_error_entry(table: FunctionTableHandle) -> Option<&'static str> {
    let entry = gl3_3core_last_error_entry(table);
    if entry.is_null() {
        return None;
    }
    CStr::from_ptr(entry).to_str().ok()
}

#[test]
fn create_resolve_call_destroy() {
    unsafe {
        let table = gl3_3core_funcs_create(1, 1);
        assert!(!table.is_null());
        let status = gl3_3core_funcs_resolve(table, Some(c_driver));
        assert_eq!(status, Gl33Status::Ok);

        let mut viewport = [0; 4];
        gl3_3core_glGetIntegerv(table, GL_VIEWPORT, viewport.as_mut_ptr());
        assert_eq!(viewport, VIEWPORT_SENTINEL);
        assert_eq!(gl3_3core_glGetError(table), GL_INVALID_OPERATION);
        assert_eq!(gl3_3core_glIsEnabled(table, GL_BLEND), GL_TRUE);
        let fence = gl3_3core_glFenceSync(table, 0x9117, 0);
        assert_eq!(fence as usize, FENCE_SENTINEL);
        assert_eq!(gl3_3core_last_error(table), Gl33Status::Ok);

        gl3_3core_funcs_destroy(table);
    }
}

#[test]
fn null_table_is_a_defined_failure() {
    unsafe {
        let table = ptr::null_mut();
        let status = gl3_3core_funcs_resolve(table, Some(c_driver));
        assert_eq!(status, Gl33Status::NullTable);
        assert_eq!(gl3_3core_glGetError(table), 0);
        assert_eq!(gl3_3core_glIsEnabled(table, GL_BLEND), GL_FALSE);
        assert!(gl3_3core_glFenceSync(table, 0x9117, 0).is_null());
        assert_eq!(gl3_3core_last_error(table), Gl33Status::NullTable);
        assert_eq!(last_error_entry(table), None);
        assert!(!available(table, c"glViewport"));
        gl3_3core_clear_last_error(table);
        gl3_3core_funcs_destroy(table);
    }
}

#[test]
fn unresolved_calls_are_recorded() {
    unsafe {
        let table = gl3_3core_funcs_create(2, 2);

        let mut viewport = [0; 4];
        gl3_3core_glGetIntegerv(table, GL_VIEWPORT, viewport.as_mut_ptr());
        assert_eq!(viewport, [0; 4]);
        assert_eq!(gl3_3core_glIsEnabled(table, GL_BLEND), GL_FALSE);

        let status = gl3_3core_last_error(table);
        assert_eq!(status, Gl33Status::UnresolvedEntryPoint);
        assert_eq!(last_error_entry(table), Some("glIsEnabled"));

        gl3_3core_clear_last_error(table);
        assert_eq!(gl3_3core_last_error(table), Gl33Status::Ok);
        assert_eq!(last_error_entry(table), None);

        gl3_3core_funcs_destroy(table);
    }
}

#[test]
fn missing_mandatory_entry_point_fails_resolution() {
    unsafe {
        let table = gl3_3core_funcs_create(3, 3);
        let status = gl3_3core_funcs_resolve(table, Some(c_broken_driver));
        assert_eq!(status, Gl33Status::MissingEntryPoint);
        // The recorded outcome is reported again rather than re-queried.
        let status = gl3_3core_funcs_resolve(table, Some(c_driver));
        assert_eq!(status, Gl33Status::MissingEntryPoint);

        assert_eq!(gl3_3core_glGetError(table), 0);
        let status = gl3_3core_last_error(table);
        assert_eq!(status, Gl33Status::UnresolvedEntryPoint);
        gl3_3core_funcs_destroy(table);
    }
}

#[test]
fn availability_by_name() {
    unsafe {
        let table = gl3_3core_funcs_create(4, 4);
        assert!(!available(table, c"glViewport"));

        let status = gl3_3core_funcs_resolve(table, Some(c_core_only_driver));
        assert_eq!(status, Gl33Status::Ok);
        assert!(available(table, c"glViewport"));
        assert!(available(table, c"glVertexAttribP1ui"));
        assert!(!available(table, c"glVertexP3uiv"));
        assert!(!available(table, c"glBogus"));
        assert!(!gl3_3core_funcs_is_available(table, ptr::null()));

        // Calling the absent optional entry point is recoverable and recorded.
        gl3_3core_glVertexP3ui(table, 0x8368, 0);
        let status = gl3_3core_last_error(table);
        assert_eq!(status, Gl33Status::UnresolvedEntryPoint);
        assert_eq!(last_error_entry(table), Some("glVertexP3ui"));
        gl3_3core_funcs_destroy(table);
    }
}

#[test]
fn tables_do_not_leak_into_each_other() {
    unsafe {
        let a = gl3_3core_funcs_create(5, 5);
        let b = gl3_3core_funcs_create(6, 6);
        assert_eq!(gl3_3core_funcs_resolve(a, Some(c_driver)), Gl33Status::Ok);

        gl3_3core_glFlush(b);
        assert_eq!(gl3_3core_last_error(b), Gl33Status::UnresolvedEntryPoint);
        assert_eq!(gl3_3core_last_error(a), Gl33Status::Ok);

        gl3_3core_funcs_destroy(b);
        assert_eq!(gl3_3core_glGetError(a), GL_INVALID_OPERATION);
        gl3_3core_funcs_destroy(a);
    }
}

#[test]
fn tables_are_released_independently_of_their_context() {
    unsafe {
        // Context 7 outlives its first table and is handed a fresh one.
        let first = gl3_3core_funcs_create(7, 7);
        let status = gl3_3core_funcs_resolve(first, Some(c_driver));
        assert_eq!(status, Gl33Status::Ok);
        gl3_3core_funcs_destroy(first);

        let second = gl3_3core_funcs_create(7, 7);
        let third = gl3_3core_funcs_create(7, 7);
        assert_ne!(second, third);
        let status = gl3_3core_funcs_resolve(second, Some(c_driver));
        assert_eq!(status, Gl33Status::Ok);

        // Releasing one table of the context leaves the other intact.
        gl3_3core_funcs_destroy(third);
        assert_eq!(gl3_3core_glGetError(second), GL_INVALID_OPERATION);
        assert_eq!(gl3_3core_last_error(second), Gl33Status::Ok);
        gl3_3core_funcs_destroy(second);

        gl3_3core_funcs_destroy(ptr::null_mut());
    }
}
