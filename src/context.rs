//! Identity of the context a function table belongs to.

use std::fmt;

/// Correlates a [`FunctionTable`](crate::FunctionTable) with the context that
/// resolved it.
///
/// Driver addresses are only valid inside the context that produced them, or
/// inside its share group on platforms that share entry points between shared
/// contexts.
///
/// Context ids and share-group ids live in one number space: a share group is
/// named after the id of the context that started it. [`ContextIdentity::new`]
/// starts a group named after itself, and a context created later to share
/// with it passes that id as its group:
///
/// ```
/// use gl33core::ContextIdentity;
///
/// let first = ContextIdentity::new(7);
/// let shared = ContextIdentity::with_share_group(8, 7);
/// assert!(first.shares_addresses_with(&shared));
/// assert!(!first.shares_addresses_with(&ContextIdentity::new(8)));
/// ```
///
/// Hosts that number groups independently of contexts must keep the two
/// ranges disjoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContextIdentity {
    id: u64,
    share_group: u64,
}

impl ContextIdentity {
    /// A context that starts its own share group, named `id`.
    pub const fn new(id: u64) -> Self {
        Self {
            id,
            share_group: id,
        }
    }

    /// A context that joins the group started by context `share_group`.
    pub const fn with_share_group(id: u64, share_group: u64) -> Self {
        Self { id, share_group }
    }

    pub const fn id(&self) -> u64 {
        self.id
    }

    pub const fn share_group(&self) -> u64 {
        self.share_group
    }

    /// Whether addresses resolved in `self` may be called while `other` is current.
    pub const fn shares_addresses_with(&self, other: &ContextIdentity) -> bool {
        self.id == other.id || self.share_group == other.share_group
    }
}

impl fmt::Display for ContextIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.id == self.share_group {
            write!(f, "context #{}", self.id)
        } else {
            write!(f, "context #{} (share group {})", self.id, self.share_group)
        }
    }
}

/// Profile and version a table is resolved for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Profile {
    #[default]
    Gl33Core,
}

impl Profile {
    pub const fn version(self) -> (u8, u8) {
        match self {
            Profile::Gl33Core => (3, 3),
        }
    }

    /// Prefix of every exported trampoline symbol for this profile.
    pub const fn export_prefix(self) -> &'static str {
        match self {
            Profile::Gl33Core => "gl3_3core_",
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (major, minor) = self.version();
        write!(f, "OpenGL {major}.{minor} core")
    }
}
