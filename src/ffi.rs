//! Shared plumbing for the C ABI surface.

use std::ptr;

use crate::entry_points::EntryPoint;
use crate::error::Error;
use crate::table::{FunctionTable, ProcAddress};
use crate::types::{GLboolean, GLenum, GLint, GL_FALSE};

/// Status codes reported across the C ABI.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gl33Status {
    Ok = 0,
    MissingEntryPoint = 1,
    UnresolvedEntryPoint = 2,
    NullTable = 3,
}

impl From<&Error> for Gl33Status {
    fn from(err: &Error) -> Self {
        match err {
            Error::MissingEntryPoint { .. } => Gl33Status::MissingEntryPoint,
            Error::UnresolvedEntryPoint { .. } => Gl33Status::UnresolvedEntryPoint,
        }
    }
}

impl<T> From<Result<T, Error>> for Gl33Status {
    fn from(result: Result<T, Error>) -> Self {
        match result {
            Ok(_) => Gl33Status::Ok,
            Err(err) => Gl33Status::from(&err),
        }
    }
}

/// What a C trampoline returns when it cannot forward the call.
pub trait FallbackValue {
    fn fallback() -> Self;
}

impl FallbackValue for () {
    fn fallback() -> Self {}
}

impl FallbackValue for GLboolean {
    fn fallback() -> Self {
        GL_FALSE
    }
}

// Covers both `GLenum` and `GLuint`.
impl FallbackValue for GLenum {
    fn fallback() -> Self {
        0
    }
}

impl FallbackValue for GLint {
    fn fallback() -> Self {
        0
    }
}

// Covers `GLsync`.
impl<T> FallbackValue for *const T {
    fn fallback() -> Self {
        ptr::null()
    }
}

/// Looks up `entry` for a C trampoline.
///
/// Returns `None` for a null table or an empty slot; the latter is recorded
/// on the table so C callers can query it after the fact.
///
/// # Safety
///
/// `table` must be null or point to a live [`FunctionTable`].
#[inline]
pub(crate) unsafe fn dispatch_target(
    table: *const FunctionTable,
    entry: EntryPoint,
) -> Option<ProcAddress> {
    let Some(table) = (unsafe { table.as_ref() }) else {
        log::warn!("{} called with a null function table", entry.export_name());
        return None;
    };
    match table.get(entry) {
        Ok(address) => Some(address),
        Err(err) => {
            log::warn!("{}: {err}", entry.export_name());
            table.record_failure(entry);
            None
        }
    }
}
