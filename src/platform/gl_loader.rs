//! Platform-specific OpenGL address resolver
//!
//! Each platform uses its native mechanism. Only the platforms this crate
//! ships for are covered; on the rest every name resolves to null and the
//! host is expected to inject its own resolver.

use core::ffi::c_void;
use std::ffi::CStr;

use crate::table::AddressLookup;

/// Resolve an OpenGL entry point by its NUL-terminated name.
/// Returns null if the name is unknown to the platform.
pub fn get_proc_address(name: &CStr) -> *const c_void {
    #[cfg(target_os = "android")]
    {
        egl::get_proc_address(name)
    }
    #[cfg(target_os = "ios")]
    {
        ios::get_proc_address(name)
    }
    #[cfg(not(any(target_os = "android", target_os = "ios")))]
    {
        log::trace!("no platform resolver for {name:?}");
        std::ptr::null()
    }
}

/// [`AddressLookup`] backed by [`get_proc_address`].
#[derive(Debug, Default, Clone, Copy)]
pub struct PlatformLookup;

impl AddressLookup for PlatformLookup {
    fn lookup(&mut self, name: &CStr) -> *const c_void {
        get_proc_address(name)
    }
}

#[cfg(target_os = "android")]
mod egl {
    use core::ffi::c_void;
    use std::ffi::CStr;
    use std::os::raw::c_char;

    #[link(name = "EGL")]
    extern "C" {
        fn eglGetProcAddress(procname: *const c_char) -> *const c_void;
    }

    pub fn get_proc_address(name: &CStr) -> *const c_void {
        // The name is already NUL-terminated; EGL reads it in place.
        unsafe { eglGetProcAddress(name.as_ptr()) }
    }
}

#[cfg(target_os = "ios")]
mod ios {
    use core::ffi::c_void;
    use std::ffi::CStr;

    use core_foundation::base::TCFType;
    use core_foundation::bundle::{
        CFBundleGetBundleWithIdentifier, CFBundleGetFunctionPointerForName,
    };
    use core_foundation::string::CFString;

    const OPENGLES_BUNDLE: &str = "com.apple.opengles";

    pub fn get_proc_address(name: &CStr) -> *const c_void {
        let Ok(name) = name.to_str() else {
            return std::ptr::null();
        };
        let symbol_name = CFString::new(name);
        let framework_name = CFString::new(OPENGLES_BUNDLE);

        unsafe {
            let framework = CFBundleGetBundleWithIdentifier(framework_name.as_concrete_TypeRef());
            if framework.is_null() {
                log::warn!("{OPENGLES_BUNDLE} bundle is not loaded");
                return std::ptr::null();
            }
            CFBundleGetFunctionPointerForName(framework, symbol_name.as_concrete_TypeRef())
                as *const c_void
        }
    }
}

#[cfg(test)]
mod tests {
    #[cfg(not(any(target_os = "android", target_os = "ios")))]
    #[test]
    fn unsupported_platforms_resolve_nothing() {
        use super::*;

        assert!(get_proc_address(c"glViewport").is_null());
        assert!(PlatformLookup.lookup(c"glViewport").is_null());
    }
}
