//! Per-context function table.
//!
//! A table starts empty, is filled exactly once by [`FunctionTable::resolve_all`]
//! and is read-only from then on. The one-time guard makes a resolved table safe
//! to share between threads without locking; calling through it still requires
//! the owning context to be current on the calling thread, which is the
//! platform's rule and not something this type can check.

use std::ffi::{c_void, CStr};
use std::fmt;
use std::ptr::{self, NonNull};
use std::sync::atomic::{AtomicUsize, Ordering};

use once_cell::sync::OnceCell;

use crate::context::{ContextIdentity, Profile};
use crate::entry_points::{EntryPoint, Requirement};
use crate::error::Error;

/// A non-null driver address for one entry point.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProcAddress(NonNull<c_void>);

// Addresses are plain code pointers; they carry no thread affinity of their own.
unsafe impl Send for ProcAddress {}
unsafe impl Sync for ProcAddress {}

impl ProcAddress {
    pub fn new(address: *const c_void) -> Option<Self> {
        NonNull::new(address as *mut c_void).map(Self)
    }

    pub fn as_ptr(self) -> *const c_void {
        self.0.as_ptr()
    }
}

impl fmt::Debug for ProcAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ProcAddress({:p})", self.0)
    }
}

/// The platform's `name -> address-or-null` resolver.
///
/// Implemented for any `FnMut(&CStr) -> *const c_void`, so a closure around
/// `eglGetProcAddress`, `glXGetProcAddress` or `wglGetProcAddress` can be
/// passed directly.
pub trait AddressLookup {
    fn lookup(&mut self, name: &CStr) -> *const c_void;
}

impl<F> AddressLookup for F
where
    F: FnMut(&CStr) -> *const c_void,
{
    fn lookup(&mut self, name: &CStr) -> *const c_void {
        self(name)
    }
}

/// Adapts a loader taking `&str`, the shape used by `glow` and glutin.
pub fn from_str_lookup<F>(mut loader: F) -> impl AddressLookup
where
    F: FnMut(&str) -> *const c_void,
{
    move |name: &CStr| match name.to_str() {
        Ok(name) => loader(name),
        Err(_) => ptr::null(),
    }
}

/// Knobs for [`FunctionTable::resolve_all_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Treat the small integers some resolvers return on failure
    /// (`1`, `2`, `3`, `-1` from `wglGetProcAddress`) as null.
    pub reject_sentinel_addresses: bool,
    /// Fail resolution when an optional entry point is missing too.
    pub require_optional: bool,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            reject_sentinel_addresses: true,
            require_optional: false,
        }
    }
}

impl ResolveOptions {
    pub fn strict() -> Self {
        Self {
            require_optional: true,
            ..Self::default()
        }
    }

    fn is_required(&self, entry: EntryPoint) -> bool {
        match entry.requirement() {
            Requirement::Core => true,
            Requirement::Optional => self.require_optional,
        }
    }
}

fn is_sentinel(address: *const c_void) -> bool {
    matches!(address as isize, 1 | 2 | 3 | -1)
}

fn count_resolved(slots: &[Option<ProcAddress>]) -> usize {
    slots.iter().filter(|slot| slot.is_some()).count()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableState {
    Unresolved,
    Resolved,
    Failed,
}

enum Resolution {
    Resolved(Box<[Option<ProcAddress>]>),
    // What the driver returned is kept for diagnostics; none of it is callable.
    Failed {
        slots: Box<[Option<ProcAddress>]>,
        error: Error,
    },
}

impl Resolution {
    fn slots(&self) -> &[Option<ProcAddress>] {
        match self {
            Resolution::Resolved(slots) | Resolution::Failed { slots, .. } => slots,
        }
    }
}

/// Resolved addresses of every entry point, for one context.
pub struct FunctionTable {
    context: ContextIdentity,
    profile: Profile,
    resolution: OnceCell<Resolution>,
    // Slot index + 1 of the last call the C ABI could not forward, 0 for none.
    last_failure: AtomicUsize,
}

impl FunctionTable {
    /// Creates an unresolved table for `context`. No lookup happens here.
    pub fn create(context: ContextIdentity) -> Self {
        let profile = Profile::Gl33Core;
        log::debug!("{context}: function table created for {profile}");
        Self {
            context,
            profile,
            resolution: OnceCell::new(),
            last_failure: AtomicUsize::new(0),
        }
    }

    pub fn context(&self) -> ContextIdentity {
        self.context
    }

    pub fn profile(&self) -> Profile {
        self.profile
    }

    /// Whether this table may be used while `context` is current.
    pub fn can_serve(&self, context: &ContextIdentity) -> bool {
        self.context.shares_addresses_with(context)
    }

    /// Resolves every entry point with the default [`ResolveOptions`].
    pub fn resolve_all<L: AddressLookup>(&self, lookup: L) -> Result<(), Error> {
        self.resolve_all_with(lookup, &ResolveOptions::default())
    }

    /// Queries `lookup` once per entry point and freezes the outcome.
    ///
    /// Only the first call queries the resolver. Later calls, from any
    /// thread, return the recorded outcome; concurrent first calls block until
    /// the winner finishes.
    pub fn resolve_all_with<L: AddressLookup>(
        &self,
        mut lookup: L,
        options: &ResolveOptions,
    ) -> Result<(), Error> {
        let context = self.context;
        if self.resolution.get().is_some() {
            log::debug!("{context}: already resolved, reusing the recorded outcome");
        }
        let query = || self.query(&mut lookup, options);
        match self.resolution.get_or_init(query) {
            Resolution::Resolved(_) => Ok(()),
            Resolution::Failed { error, .. } => Err(error.clone()),
        }
    }

    fn query<L: AddressLookup>(&self, lookup: &mut L, options: &ResolveOptions) -> Resolution {
        let context = self.context;
        let mut slots = Vec::with_capacity(EntryPoint::COUNT);
        let mut missing = Vec::new();

        for &entry in EntryPoint::ALL {
            let raw = lookup.lookup(entry.c_name());
            let address = if options.reject_sentinel_addresses && is_sentinel(raw) {
                log::debug!("{context}: {entry} resolved to sentinel {raw:p}");
                None
            } else {
                ProcAddress::new(raw)
            };

            if address.is_none() {
                if options.is_required(entry) {
                    log::error!("{context}: mandatory entry point {entry} is missing");
                    missing.push(entry);
                } else {
                    log::debug!("{context}: optional entry point {entry} is not provided");
                }
            }
            slots.push(address);
        }

        let slots = slots.into_boxed_slice();
        if !missing.is_empty() {
            let error = Error::MissingEntryPoint { context, missing };
            return Resolution::Failed { slots, error };
        }

        let resolved = count_resolved(&slots);
        log::info!(
            "{context}: resolved {resolved}/{} {} entry points",
            EntryPoint::COUNT,
            self.profile
        );
        Resolution::Resolved(slots)
    }

    /// Returns the address stored for `entry`.
    ///
    /// This is the only guard between a caller and a call through null, so it
    /// never reports success for an empty slot or for a table whose
    /// resolution failed.
    #[inline]
    pub fn get(&self, entry: EntryPoint) -> Result<ProcAddress, Error> {
        match self.resolution.get() {
            Some(Resolution::Resolved(slots)) => {
                slots[entry.index()].ok_or_else(|| self.unresolved(entry))
            }
            _ => Err(self.unresolved(entry)),
        }
    }

    pub fn is_available(&self, entry: EntryPoint) -> bool {
        self.get(entry).is_ok()
    }

    pub fn state(&self) -> TableState {
        match self.resolution.get() {
            None => TableState::Unresolved,
            Some(Resolution::Resolved(_)) => TableState::Resolved,
            Some(Resolution::Failed { .. }) => TableState::Failed,
        }
    }

    /// Number of entry points the driver returned an address for.
    ///
    /// Also reported after a failed resolution, where none of them is callable.
    pub fn resolved_count(&self) -> usize {
        self.slots().map_or(0, count_resolved)
    }

    /// Optional entry points the driver does not provide. Empty until resolved.
    pub fn missing_optional(&self) -> impl Iterator<Item = EntryPoint> + '_ {
        let slots = self.slots().unwrap_or_default();
        EntryPoint::ALL.iter().copied().filter(move |entry| {
            entry.is_optional() && slots.get(entry.index()).is_some_and(Option::is_none)
        })
    }

    /// Releases the table. The context it was created for is left alone.
    pub fn destroy(self) {
        log::debug!("{}: function table destroyed", self.context);
    }

    pub(crate) fn record_failure(&self, entry: EntryPoint) {
        self.last_failure.store(entry.index() + 1, Ordering::Relaxed);
    }

    /// Entry point of the last call the C ABI could not forward.
    pub fn last_failure(&self) -> Option<EntryPoint> {
        match self.last_failure.load(Ordering::Relaxed) {
            0 => None,
            slot => EntryPoint::ALL.get(slot - 1).copied(),
        }
    }

    pub fn clear_last_failure(&self) {
        self.last_failure.store(0, Ordering::Relaxed);
    }

    fn slots(&self) -> Option<&[Option<ProcAddress>]> {
        self.resolution.get().map(Resolution::slots)
    }

    fn unresolved(&self, entry: EntryPoint) -> Error {
        Error::UnresolvedEntryPoint {
            entry,
            context: self.context,
        }
    }
}

impl fmt::Debug for FunctionTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionTable")
            .field("context", &self.context)
            .field("profile", &self.profile)
            .field("state", &self.state())
            .field("resolved", &self.resolved_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    extern "system" fn never_called() {}

    fn fake_address() -> *const c_void {
        never_called as *const c_void
    }

    fn full_driver(_: &CStr) -> *const c_void {
        fake_address()
    }

    fn driver_without(missing: &'static [&'static str]) -> impl Fn(&CStr) -> *const c_void {
        move |name: &CStr| {
            let absent = missing.iter().any(|m| m.as_bytes() == name.to_bytes());
            if absent { ptr::null() } else { fake_address() }
        }
    }

    fn table() -> FunctionTable {
        FunctionTable::create(ContextIdentity::new(1))
    }

    #[test]
    fn fresh_table_is_unresolved() {
        let table = table();
        let context = ContextIdentity::new(1);
        assert_eq!(table.state(), TableState::Unresolved);
        assert_eq!(table.resolved_count(), 0);
        assert_eq!(table.missing_optional().count(), 0);
        for &entry in EntryPoint::ALL {
            assert_eq!(
                table.get(entry),
                Err(Error::UnresolvedEntryPoint { entry, context })
            );
        }
    }

    #[test]
    fn complete_driver_resolves_every_slot() {
        let table = table();
        table.resolve_all(full_driver).unwrap();
        assert_eq!(table.state(), TableState::Resolved);
        assert_eq!(table.resolved_count(), EntryPoint::COUNT);
        for &entry in EntryPoint::ALL {
            assert_eq!(table.get(entry).unwrap().as_ptr(), fake_address());
        }
    }

    #[test]
    fn missing_core_entry_point_fails_the_table() {
        let table = table();
        let err = table
            .resolve_all(driver_without(&["glGetError", "glFinish"]))
            .unwrap_err();

        match &err {
            Error::MissingEntryPoint { missing, .. } => {
                assert_eq!(missing.len(), 2);
                assert!(missing.contains(&EntryPoint::GetError));
                assert!(missing.contains(&EntryPoint::Finish));
            }
            other => panic!("unexpected error {other:?}"),
        }
        assert_eq!(table.state(), TableState::Failed);
        assert!(!table.is_available(EntryPoint::Viewport));
        assert_eq!(table.resolved_count(), EntryPoint::COUNT - 2);
        // The failure is recorded, not recomputed.
        assert_eq!(table.resolve_all(full_driver), Err(err));
    }

    #[test]
    fn missing_optional_entry_point_is_soft() {
        let table = table();
        let context = ContextIdentity::new(1);
        let entry = EntryPoint::VertexP2ui;
        let lookup = driver_without(&["glVertexP2ui"]);
        table.resolve_all(lookup).unwrap();

        assert!(!table.is_available(entry));
        assert_eq!(
            table.get(entry),
            Err(Error::UnresolvedEntryPoint { entry, context })
        );
        assert!(table.is_available(EntryPoint::VertexP3ui));
        assert!(table.is_available(EntryPoint::GetIntegerv));
        assert_eq!(table.missing_optional().collect::<Vec<_>>(), vec![entry]);
        assert_eq!(table.resolved_count(), EntryPoint::COUNT - 1);
    }

    #[test]
    fn strict_mode_requires_optional_entry_points() {
        let table = table();
        let lookup = driver_without(&["glIndexub"]);
        let err = table
            .resolve_all_with(lookup, &ResolveOptions::strict())
            .unwrap_err();
        let expected = Error::MissingEntryPoint {
            context: ContextIdentity::new(1),
            missing: vec![EntryPoint::Indexub],
        };
        assert_eq!(err, expected);
    }

    #[test]
    fn sentinel_addresses_count_as_missing() {
        let table = table();
        let sentinels = |name: &CStr| match name.to_bytes() {
            b"glColorP3ui" => 1 as *const c_void,
            b"glColorP4ui" => -1isize as *const c_void,
            _ => fake_address(),
        };
        table.resolve_all(sentinels).unwrap();
        assert!(!table.is_available(EntryPoint::ColorP3ui));
        assert!(!table.is_available(EntryPoint::ColorP4ui));

        let lenient = FunctionTable::create(ContextIdentity::new(2));
        let options = ResolveOptions {
            reject_sentinel_addresses: false,
            ..Default::default()
        };
        let lookup = |name: &CStr| match name.to_bytes() {
            b"glColorP3ui" => 2 as *const c_void,
            _ => fake_address(),
        };
        lenient.resolve_all_with(lookup, &options).unwrap();
        let address = lenient.get(EntryPoint::ColorP3ui).unwrap();
        assert_eq!(address.as_ptr() as usize, 2);
    }

    #[test]
    fn resolution_queries_the_driver_once() {
        let calls = Cell::new(0usize);
        let counting = |_: &CStr| {
            calls.set(calls.get() + 1);
            fake_address()
        };

        let table = table();
        table.resolve_all(counting).unwrap();
        let first: Vec<_> = EntryPoint::ALL.iter().map(|&e| table.get(e)).collect();
        table.resolve_all(counting).unwrap();
        let second: Vec<_> = EntryPoint::ALL.iter().map(|&e| table.get(e)).collect();

        assert_eq!(calls.get(), EntryPoint::COUNT);
        assert_eq!(first, second);
    }

    #[test]
    fn str_loaders_are_adapted() {
        let mut seen = Vec::new();
        let table = table();
        let lookup = from_str_lookup(|name| {
            seen.push(name.to_owned());
            fake_address()
        });
        table.resolve_all(lookup).unwrap();
        assert_eq!(seen.len(), EntryPoint::COUNT);
        assert_eq!(seen[0], "glViewport");
    }

    #[test]
    fn last_failure_is_sticky_until_cleared() {
        let table = table();
        assert_eq!(table.last_failure(), None);
        table.record_failure(EntryPoint::GenBuffers);
        assert_eq!(table.last_failure(), Some(EntryPoint::GenBuffers));
        table.record_failure(EntryPoint::Viewport);
        assert_eq!(table.last_failure(), Some(EntryPoint::Viewport));
        table.clear_last_failure();
        assert_eq!(table.last_failure(), None);
    }

    #[test]
    fn tables_are_thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FunctionTable>();
    }
}
