//! Context-scoped dispatch for the OpenGL 3.3 core profile.
//!
//! Every entry point is reached through an explicit [`FunctionTable`] that
//! belongs to one GL context, never through process-wide function pointers.
//! A table is created per context, resolved once against the platform's
//! address resolver, and read-only afterwards:
//!
//! ```no_run
//! use gl33core::{ContextIdentity, FunctionTable, platform::PlatformLookup};
//!
//! # fn main() -> Result<(), gl33core::Error> {
//! let table = FunctionTable::create(ContextIdentity::new(1));
//! table.resolve_all(PlatformLookup)?;
//!
//! let mut viewport = [0; 4];
//! unsafe { table.GetIntegerv(0x0BA2, viewport.as_mut_ptr())? };
//! # Ok(())
//! # }
//! ```
//!
//! The same table is the leading argument of the C trampolines
//! (`gl3_3core_glViewport(table, ...)`), created and destroyed through the
//! `gl3_3core_funcs_*` functions below.
//!
//! A GL context is current on at most one thread at a time. Trampolines
//! inherit that rule: calls through a table must come from the thread the
//! owning context is current on, even though the table itself is `Sync`.

#[macro_use]
mod macros;

pub mod context;
pub mod entry_points;
pub mod error;
pub mod ffi;
pub mod platform;
pub mod table;
pub mod types;

use std::ffi::{c_void, CStr};
use std::os::raw::c_char;
use std::ptr;

pub use context::{ContextIdentity, Profile};
pub use entry_points::{exports, EntryPoint, Requirement};
pub use error::Error;
pub use ffi::Gl33Status;
pub use table::{
    from_str_lookup, AddressLookup, FunctionTable, ProcAddress, ResolveOptions, TableState,
};

/// Opaque handle for FFI
pub type FunctionTableHandle = *mut FunctionTable;

/// Type for GL proc address function
pub type GlGetProcAddress = extern "C" fn(*const c_char) -> *const c_void;

/// Create an unresolved table for a context.
/// Called the first time the context is made current.
///
/// Pass the context id as `share_group` to start a new share group, or the id
/// of the context that started an existing group to join it.
#[no_mangle]
pub extern "C" fn gl3_3core_funcs_create(context_id: u64, share_group: u64) -> FunctionTableHandle {
    platform::logging::init();

    let context = ContextIdentity::with_share_group(context_id, share_group);
    Box::into_raw(Box::new(FunctionTable::create(context)))
}

/// Resolve every entry point while the table's context is current.
///
/// A null `lookup` falls back to the platform resolver. Only the first call
/// queries the resolver; later calls report the recorded outcome.
///
/// # Safety
///
/// `table` must be null or a live handle from [`gl3_3core_funcs_create`].
#[no_mangle]
pub unsafe extern "C" fn gl3_3core_funcs_resolve(
    table: FunctionTableHandle,
    lookup: Option<GlGetProcAddress>,
) -> Gl33Status {
    let Some(table) = (unsafe { table.as_ref() }) else {
        return Gl33Status::NullTable;
    };

    let result = match lookup {
        Some(get_proc_addr) => table.resolve_all(|name: &CStr| get_proc_addr(name.as_ptr())),
        None => table.resolve_all(platform::PlatformLookup),
    };
    if let Err(err) = &result {
        log::error!("gl3_3core_funcs_resolve: {err}");
    }
    Gl33Status::from(result)
}

/// Whether `name` (e.g. `"glVertexP2ui"`) has a resolved address in `table`.
///
/// # Safety
///
/// `table` must be null or a live handle; `name` must be null or a
/// NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn gl3_3core_funcs_is_available(
    table: FunctionTableHandle,
    name: *const c_char,
) -> bool {
    let Some(table) = (unsafe { table.as_ref() }) else {
        return false;
    };
    if name.is_null() {
        return false;
    }
    let name = unsafe { CStr::from_ptr(name) };
    name.to_str()
        .ok()
        .and_then(EntryPoint::from_name)
        .is_some_and(|entry| table.is_available(entry))
}

/// Status of the last trampoline call that could not be forwarded.
///
/// `NullTable` for a null handle, `UnresolvedEntryPoint` while a failure is
/// recorded, `Ok` otherwise. Reading does not clear the record.
///
/// # Safety
///
/// `table` must be null or a live handle.
#[no_mangle]
pub unsafe extern "C" fn gl3_3core_last_error(table: FunctionTableHandle) -> Gl33Status {
    match unsafe { table.as_ref() } {
        None => Gl33Status::NullTable,
        Some(table) if table.last_failure().is_some() => Gl33Status::UnresolvedEntryPoint,
        Some(_) => Gl33Status::Ok,
    }
}

/// Standard name of the entry point behind the last failed call, or null.
/// The string is static.
///
/// # Safety
///
/// `table` must be null or a live handle.
#[no_mangle]
pub unsafe extern "C" fn gl3_3core_last_error_entry(table: FunctionTableHandle) -> *const c_char {
    let Some(table) = (unsafe { table.as_ref() }) else {
        return ptr::null();
    };
    match table.last_failure() {
        Some(entry) => entry.c_name().as_ptr(),
        None => ptr::null(),
    }
}

/// # Safety
///
/// `table` must be null or a live handle.
#[no_mangle]
pub unsafe extern "C" fn gl3_3core_clear_last_error(table: FunctionTableHandle) {
    if let Some(table) = unsafe { table.as_ref() } {
        table.clear_last_failure();
    }
}

/// Clean up a table. The context it belongs to is not touched.
///
/// # Safety
///
/// `table` must be null or a live handle; it is dangling afterwards.
#[no_mangle]
pub unsafe extern "C" fn gl3_3core_funcs_destroy(table: FunctionTableHandle) {
    if table.is_null() {
        return;
    }
    // Reconstruct the Box to drop it properly
    let table = unsafe { Box::from_raw(table) };
    table.destroy();
}
