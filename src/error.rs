use std::error::Error as StdError;
use std::fmt;

use crate::context::ContextIdentity;
use crate::entry_points::EntryPoint;

/// Failures of the dispatch layer itself.
///
/// Errors reported by the driver through `glGetError` are never translated
/// into this type; they reach the caller exactly as the driver reports them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Mandatory entry points resolved to null. The table stays unusable for
    /// the lifetime of its context.
    MissingEntryPoint {
        context: ContextIdentity,
        missing: Vec<EntryPoint>,
    },
    /// A call reached a slot that holds no address: the table was never
    /// resolved, resolution failed, or the driver lacks an optional entry point.
    UnresolvedEntryPoint {
        entry: EntryPoint,
        context: ContextIdentity,
    },
}

impl Error {
    /// Whether the caller can carry on, e.g. by taking a fallback path.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::UnresolvedEntryPoint { .. })
    }

    pub fn context(&self) -> ContextIdentity {
        match self {
            Error::MissingEntryPoint { context, .. }
            | Error::UnresolvedEntryPoint { context, .. } => *context,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MissingEntryPoint { context, missing } => {
                write!(
                    f,
                    "{context}: {} mandatory entry point(s) could not be resolved: ",
                    missing.len()
                )?;
                for (i, entry) in missing.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    f.write_str(entry.name())?;
                }
                Ok(())
            }
            Error::UnresolvedEntryPoint { entry, context } => {
                write!(f, "{context}: {entry} has no resolved address")
            }
        }
    }
}

impl StdError for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_lists_every_entry() {
        let err = Error::MissingEntryPoint {
            context: ContextIdentity::new(9),
            missing: vec![EntryPoint::Viewport, EntryPoint::GetError],
        };
        assert_eq!(
            err.to_string(),
            "context #9: 2 mandatory entry point(s) could not be resolved: glViewport, glGetError"
        );
        assert!(!err.is_recoverable());
    }

    #[test]
    fn unresolved_is_recoverable() {
        let err = Error::UnresolvedEntryPoint {
            entry: EntryPoint::ColorP4ui,
            context: ContextIdentity::new(1),
        };
        assert_eq!(
            err.to_string(),
            "context #1: glColorP4ui has no resolved address"
        );
        assert!(err.is_recoverable());
        assert_eq!(err.context(), ContextIdentity::new(1));
    }
}
