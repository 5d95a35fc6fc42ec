//! Generators for the entry-point catalogue and the trampoline set.

macro_rules! requirement {
    (core) => {
        $crate::entry_points::Requirement::Core
    };
    (optional) => {
        $crate::entry_points::Requirement::Optional
    };
}

macro_rules! native_ret {
    () => {
        ()
    };
    ($ret:ty) => {
        $ret
    };
}

/// Expands one declarative list into the whole dispatch layer:
///
/// * the [`EntryPoint`](crate::EntryPoint) enum with its name, export-name and
///   requirement tables;
/// * one `unsafe fn` per entry point on [`FunctionTable`](crate::FunctionTable)
///   returning `Result<R, Error>`;
/// * one unmangled C ABI trampoline per entry point in `exports`.
///
/// Each line reads `core|optional Variant = glName / exportName(args) -> Ret;`.
/// Argument and return types must be spelled exactly as the driver expects
/// them, since the stored address is called with that signature.
macro_rules! entry_points {
    (
        $(
            $req:ident $variant:ident = $gl_name:ident / $export:ident
                ( $( $arg:ident : $arg_ty:ty ),* ) $( -> $ret:ty )? ;
        )*
    ) => {
        /// One entry point of the OpenGL 3.3 core profile.
        ///
        /// The discriminant is the slot index inside a
        /// [`FunctionTable`](crate::FunctionTable).
        #[allow(non_camel_case_types)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(u16)]
        pub enum EntryPoint {
            $( $variant, )*
        }

        impl EntryPoint {
            /// Every entry point, in slot order.
            pub const ALL: &'static [EntryPoint] = &[ $( EntryPoint::$variant, )* ];

            pub const COUNT: usize = Self::ALL.len();

            /// The standard name handed to the platform resolver, e.g. `glViewport`.
            pub const fn name(self) -> &'static str {
                match self {
                    $( EntryPoint::$variant => stringify!($gl_name), )*
                }
            }

            /// The unmangled C symbol of the trampoline, e.g. `gl3_3core_glViewport`.
            pub const fn export_name(self) -> &'static str {
                match self {
                    $( EntryPoint::$variant => stringify!($export), )*
                }
            }

            pub const fn requirement(self) -> Requirement {
                match self {
                    $( EntryPoint::$variant => requirement!($req), )*
                }
            }

            pub(crate) const fn c_name(self) -> &'static CStr {
                C_NAMES[self as usize]
            }
        }

        const C_NAMES: [&CStr; EntryPoint::COUNT] = [
            $( nul_terminated(concat!(stringify!($gl_name), "\0")), )*
        ];

        impl FunctionTable {
            $(
                #[doc = concat!("Calls `", stringify!($gl_name), "` through this table.")]
                ///
                /// Fails with [`Error::UnresolvedEntryPoint`] without calling
                /// anything when the slot is empty. Whatever the driver returns,
                /// or writes through pointer arguments, is passed back untouched.
                ///
                /// # Safety
                ///
                /// The owning context must be current on the calling thread, and
                /// every pointer argument must satisfy the GL contract for this call.
                #[allow(non_snake_case, clippy::too_many_arguments)]
                #[inline]
                pub unsafe fn $variant(
                    &self,
                    $( $arg: $arg_ty ),*
                ) -> Result<native_ret!($($ret)?), Error> {
                    let address = self.get(EntryPoint::$variant)?;
                    // SAFETY: the slot was filled by the resolver for this exact
                    // entry point, whose native signature is the one declared here.
                    let native: unsafe extern "system" fn($( $arg_ty ),*) $( -> $ret )? =
                        unsafe { mem::transmute(address.as_ptr()) };
                    Ok(unsafe { native($( $arg ),*) })
                }
            )*
        }

        /// C ABI trampolines, one per entry point.
        ///
        /// Each takes the table as its leading parameter. A call through a null
        /// or unresolved table returns the zero value of the native return type
        /// and is recorded for [`gl3_3core_last_error`](crate::gl3_3core_last_error).
        pub mod exports {
            use super::*;

            $(
                #[doc = concat!("Trampoline for `", stringify!($gl_name), "`.")]
                ///
                /// # Safety
                ///
                /// `table` must be null or a pointer returned by
                /// [`gl3_3core_funcs_create`](crate::gl3_3core_funcs_create) that has
                /// not been destroyed. The owning context must be current.
                #[no_mangle]
                #[allow(non_snake_case, clippy::too_many_arguments)]
                pub unsafe extern "C" fn $export(
                    table: *const FunctionTable,
                    $( $arg: $arg_ty ),*
                ) $( -> $ret )? {
                    match unsafe { ffi::dispatch_target(table, EntryPoint::$variant) } {
                        Some(address) => {
                            let native: unsafe extern "system" fn($( $arg_ty ),*) $( -> $ret )? =
                                unsafe { mem::transmute(address.as_ptr()) };
                            unsafe { native($( $arg ),*) }
                        }
                        None => <native_ret!($($ret)?) as ffi::FallbackValue>::fallback(),
                    }
                }
            )*
        }
    };
}
