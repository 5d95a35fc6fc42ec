//! Platform collaborators: the default address resolver and logger setup.
//!
//! Neither is needed when the host already owns a windowing/GL binding; in
//! that case pass its resolver to
//! [`FunctionTable::resolve_all`](crate::FunctionTable::resolve_all) and
//! install a `log` backend of its choosing.

pub mod gl_loader;
pub mod logging;

pub use gl_loader::{get_proc_address, PlatformLookup};
