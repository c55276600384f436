//! The error-kind catalog.
//!
//! Every kind is a variant of [`Kind`] backed by a static [`Descriptor`]:
//! its name, the kind it extends, its built-in HTTP status, its default
//! error code, the default values of its message parameters, and its
//! message template.
//!
//! ```text
//! CommonError
//! ├── ArgumentInvalidError ─┬─ ArgumentMissingError
//! │                         ├─ ArgumentOutOfRangeError
//! │                         └─ ArgumentTypeError
//! ├── AuthenticationRequiredError ── BadCredentialsError
//! ├── AuthorizationConditionsNotMetError
//! ├── NoAccessError ─┬─ NoAccessDirectoryError
//! │                  └─ NoAccessFileError
//! ├── OperationNotPermittedError
//! ├── NotFoundError ─┬─ FileNotFoundError
//! │                  └─ DirectoryNotFoundError
//! ├── DatabaseError ─┬─ ConstraintViolationError ── UniqueConstraintViolationError
//! │                  ├─ RollbackError
//! │                  └─ TransactionError
//! ├── ExternalServiceError ─┬─ ConnectionError
//! │                         ├─ UnavailableError
//! │                         └─ TimeoutError
//! ├── IoError ─┬─ EndOfStreamError
//! │            └─ FileLoadError
//! ├── NotImplementedError ── NotSupportedError
//! └── SystemError
//! ```

use std::fmt;
use std::str::FromStr;

use crate::messages::{self, Render};

/// Static, per-kind definition.
pub struct Descriptor {
    pub kind: Kind,
    /// Unique name, also the key in the status registry.
    pub name: &'static str,
    /// The kind this one extends.
    pub parent: Option<Kind>,
    /// Built-in HTTP status. `None` means "inherit from the parent".
    pub status: Option<u16>,
    /// Default error code. `None` means "inherit from the parent".
    pub code: Option<&'static str>,
    /// Default message parameter values, overriding the parent's.
    pub defaults: &'static [(&'static str, &'static str)],
    pub(crate) render: Render,
}

impl fmt::Debug for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Descriptor")
            .field("name", &self.name)
            .field("parent", &self.parent)
            .field("status", &self.status)
            .field("code", &self.code)
            .field("defaults", &self.defaults)
            .finish()
    }
}

macro_rules! catalog {
    ($(
        $(#[$doc:meta])*
        $kind:ident => {
            name: $name:literal,
            parent: $parent:expr,
            status: $status:expr,
            code: $code:expr,
            defaults: [$(($key:literal, $value:literal)),* $(,)?],
            render: $render:path $(,)?
        }
    ),* $(,)?) => {
        /// A cataloged error kind.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Kind {
            $( $(#[$doc])* $kind, )*
        }

        impl Kind {
            /// Every kind, root first.
            pub const ALL: &'static [Kind] = &[$(Kind::$kind),*];

            /// The static definition of this kind.
            pub fn descriptor(self) -> &'static Descriptor {
                match self {
                    $(
                        Kind::$kind => {
                            static DESCRIPTOR: Descriptor = Descriptor {
                                kind: Kind::$kind,
                                name: $name,
                                parent: $parent,
                                status: $status,
                                code: $code,
                                defaults: &[$(($key, $value)),*],
                                render: $render,
                            };
                            &DESCRIPTOR
                        }
                    )*
                }
            }
        }
    };
}

catalog! {
    /// Root of the taxonomy; also the classifier's catch-all.
    Common => {
        name: "CommonError",
        parent: None,
        status: Some(500),
        code: None,
        defaults: [],
        render: messages::general::common,
    },

    // ── Arguments ─────────────────────────────────────────────────
    ArgumentInvalid => {
        name: "ArgumentInvalidError",
        parent: Some(Kind::Common),
        status: Some(400),
        code: None,
        defaults: [("endpoint_type", "function"), ("issue", "is invalid")],
        render: messages::argument::invalid,
    },
    ArgumentMissing => {
        name: "ArgumentMissingError",
        parent: Some(Kind::ArgumentInvalid),
        status: None,
        code: None,
        defaults: [("issue", "is missing")],
        render: messages::argument::invalid,
    },
    ArgumentOutOfRange => {
        name: "ArgumentOutOfRangeError",
        parent: Some(Kind::ArgumentInvalid),
        status: None,
        code: None,
        defaults: [("issue", "is out of range")],
        render: messages::argument::out_of_range,
    },
    ArgumentType => {
        name: "ArgumentTypeError",
        parent: Some(Kind::ArgumentInvalid),
        status: None,
        code: None,
        defaults: [("issue", "is the wrong type")],
        render: messages::argument::wrong_type,
    },

    // ── Authentication / authorization ────────────────────────────
    AuthenticationRequired => {
        name: "AuthenticationRequiredError",
        parent: Some(Kind::Common),
        status: Some(401),
        code: None,
        defaults: [("action", "action"), ("issue", "requires authentication")],
        render: messages::action_sentence,
    },
    AuthorizationConditionsNotMet => {
        name: "AuthorizationConditionsNotMetError",
        parent: Some(Kind::Common),
        status: Some(403),
        code: None,
        defaults: [
            ("action", "action"),
            ("issue", "is authorized, but certain conditions have not been met"),
        ],
        render: messages::action_sentence,
    },
    BadCredentials => {
        name: "BadCredentialsError",
        parent: Some(Kind::AuthenticationRequired),
        status: None,
        code: None,
        defaults: [("action", "authentication"), ("issue", "failed due to bad credentials")],
        render: messages::action_sentence,
    },
    NoAccess => {
        name: "NoAccessError",
        parent: Some(Kind::Common),
        status: Some(403),
        code: Some("EACCES"),
        defaults: [("action", "access to"), ("target", "resource"), ("issue", "is denied")],
        render: messages::action_sentence,
    },
    NoAccessDirectory => {
        name: "NoAccessDirectoryError",
        parent: Some(Kind::NoAccess),
        status: None,
        code: None,
        defaults: [("target", "directory")],
        render: messages::action_sentence,
    },
    NoAccessFile => {
        name: "NoAccessFileError",
        parent: Some(Kind::NoAccess),
        status: None,
        code: None,
        defaults: [("target", "file")],
        render: messages::action_sentence,
    },
    /// Not a `NoAccess` child: it must not pick up `NoAccess`'s target.
    OperationNotPermitted => {
        name: "OperationNotPermittedError",
        parent: Some(Kind::Common),
        status: Some(403),
        code: Some("EPERM"),
        defaults: [("action", "operation"), ("issue", "is not permitted")],
        render: messages::action_sentence,
    },

    // ── Not found ─────────────────────────────────────────────────
    NotFound => {
        name: "NotFoundError",
        parent: Some(Kind::Common),
        status: Some(404),
        code: Some("ENOENT"),
        defaults: [("resource", "resource")],
        render: messages::access::not_found,
    },
    FileNotFound => {
        name: "FileNotFoundError",
        parent: Some(Kind::NotFound),
        status: None,
        code: None,
        defaults: [("resource", "file")],
        render: messages::access::not_found,
    },
    DirectoryNotFound => {
        name: "DirectoryNotFoundError",
        parent: Some(Kind::NotFound),
        status: None,
        code: None,
        defaults: [("resource", "directory")],
        render: messages::access::not_found,
    },

    // ── Database / data service ───────────────────────────────────
    Database => {
        name: "DatabaseError",
        parent: Some(Kind::Common),
        status: None,
        code: None,
        defaults: [("service", "database")],
        render: messages::service::database,
    },
    ConstraintViolation => {
        name: "ConstraintViolationError",
        parent: Some(Kind::Database),
        status: Some(409),
        code: None,
        defaults: [],
        render: messages::service::constraint_violation,
    },
    UniqueConstraintViolation => {
        name: "UniqueConstraintViolationError",
        parent: Some(Kind::ConstraintViolation),
        status: None,
        code: None,
        defaults: [("constraint_type", "unique")],
        render: messages::service::constraint_violation,
    },
    Rollback => {
        name: "RollbackError",
        parent: Some(Kind::Database),
        status: None,
        code: None,
        defaults: [],
        render: messages::service::rollback,
    },
    Transaction => {
        name: "TransactionError",
        parent: Some(Kind::Database),
        status: None,
        code: None,
        defaults: [],
        render: messages::service::transaction,
    },

    // ── External services ─────────────────────────────────────────
    ExternalService => {
        name: "ExternalServiceError",
        parent: Some(Kind::Common),
        status: Some(502),
        code: None,
        defaults: [],
        render: messages::service::external,
    },
    Connection => {
        name: "ConnectionError",
        parent: Some(Kind::ExternalService),
        status: None,
        code: None,
        defaults: [],
        render: messages::service::connection,
    },
    Unavailable => {
        name: "UnavailableError",
        parent: Some(Kind::ExternalService),
        status: Some(503),
        code: None,
        defaults: [("issue", "is currently unavailable")],
        render: messages::service::external,
    },
    Timeout => {
        name: "TimeoutError",
        parent: Some(Kind::ExternalService),
        status: Some(504),
        code: Some("ETIMEDOUT"),
        defaults: [("issue", "timed out")],
        render: messages::service::external,
    },

    // ── I/O ───────────────────────────────────────────────────────
    Io => {
        name: "IoError",
        parent: Some(Kind::Common),
        status: None,
        code: None,
        defaults: [("action", "I/O operation"), ("issue", "failed")],
        render: messages::action_sentence,
    },
    EndOfStream => {
        name: "EndOfStreamError",
        parent: Some(Kind::Io),
        status: None,
        code: None,
        defaults: [("action", "reading"), ("target", "stream"), ("issue", "ended unexpectedly")],
        render: messages::action_sentence,
    },
    FileLoad => {
        name: "FileLoadError",
        parent: Some(Kind::Io),
        status: None,
        code: None,
        defaults: [("action", "loading"), ("target", "file")],
        render: messages::action_sentence,
    },

    // ── Features ──────────────────────────────────────────────────
    NotImplemented => {
        name: "NotImplementedError",
        parent: Some(Kind::Common),
        status: Some(501),
        code: None,
        defaults: [("target", "the requested action")],
        render: messages::general::not_implemented,
    },
    NotSupported => {
        name: "NotSupportedError",
        parent: Some(Kind::NotImplemented),
        status: None,
        code: None,
        defaults: [],
        render: messages::general::not_supported,
    },

    // ── Runtime ───────────────────────────────────────────────────
    /// Wraps native runtime failures (reference/syntax shaped).
    System => {
        name: "SystemError",
        parent: Some(Kind::Common),
        status: None,
        code: None,
        defaults: [],
        render: messages::general::system,
    },
}

impl Kind {
    #[inline]
    pub fn name(self) -> &'static str {
        self.descriptor().name
    }

    #[inline]
    pub fn parent(self) -> Option<Kind> {
        self.descriptor().parent
    }

    /// This kind followed by each ancestor up to `CommonError`.
    pub fn lineage(self) -> impl Iterator<Item = Kind> {
        std::iter::successors(Some(self), |k| k.parent())
    }

    /// `true` if this kind is `ancestor` or descends from it.
    ///
    /// Uses the static catalog tree, not the (mutable) status registry.
    pub fn is_a(self, ancestor: Kind) -> bool {
        self.lineage().any(|k| k == ancestor)
    }

    /// Default value for a message parameter, nearest declaration wins.
    pub fn default_for(self, param: &str) -> Option<&'static str> {
        self.lineage().find_map(|k| {
            k.descriptor()
                .defaults
                .iter()
                .find(|(key, _)| *key == param)
                .map(|(_, value)| *value)
        })
    }

    /// Default error code, nearest declaration wins.
    pub fn default_code(self) -> Option<&'static str> {
        self.lineage().find_map(|k| k.descriptor().code)
    }

    /// Built-in status, nearest declaration wins. Ignores registry overrides.
    pub fn builtin_status(self) -> Option<u16> {
        self.lineage().find_map(|k| k.descriptor().status)
    }

    /// `true` for kinds describing a failure of something remote.
    #[inline]
    pub fn is_remote(self) -> bool {
        self.is_a(Kind::ExternalService)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string names no cataloged kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownKind(pub String);

impl fmt::Display for UnknownKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown error kind '{}'", self.0)
    }
}

impl std::error::Error for UnknownKind {}

impl FromStr for Kind {
    type Err = UnknownKind;

    /// Parses a kind name such as `"NotFoundError"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Kind::ALL
            .iter()
            .copied()
            .find(|k| k.name() == s)
            .ok_or_else(|| UnknownKind(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn descriptor_matches_variant() {
        for kind in Kind::ALL {
            assert_eq!(kind.descriptor().kind, *kind);
        }
    }

    #[test]
    fn names_unique_and_parse() {
        let names: HashSet<_> = Kind::ALL.iter().map(|k| k.name()).collect();
        assert_eq!(names.len(), Kind::ALL.len());
        for kind in Kind::ALL {
            assert_eq!(kind.name().parse::<Kind>(), Ok(*kind));
            assert!(kind.name().ends_with("Error"));
        }
        assert_eq!(
            "NoSuchError".parse::<Kind>(),
            Err(UnknownKind("NoSuchError".to_string()))
        );
    }

    #[test]
    fn tree_rooted_at_common() {
        assert_eq!(Kind::Common.parent(), None);
        for kind in Kind::ALL {
            assert_eq!(kind.lineage().last(), Some(Kind::Common), "{kind}");
            assert!(kind.lineage().count() <= Kind::ALL.len());
        }
    }

    #[test]
    fn every_kind_has_builtin_status() {
        for kind in Kind::ALL {
            assert!(kind.builtin_status().is_some(), "{kind}");
        }
        assert_eq!(Kind::ArgumentMissing.builtin_status(), Some(400));
        assert_eq!(Kind::BadCredentials.builtin_status(), Some(401));
        assert_eq!(Kind::Database.builtin_status(), Some(500));
        assert_eq!(Kind::UniqueConstraintViolation.builtin_status(), Some(409));
        assert_eq!(Kind::Connection.builtin_status(), Some(502));
    }

    #[test]
    fn is_a_follows_tree() {
        assert!(Kind::ArgumentOutOfRange.is_a(Kind::ArgumentInvalid));
        assert!(Kind::ArgumentOutOfRange.is_a(Kind::Common));
        assert!(!Kind::ArgumentInvalid.is_a(Kind::ArgumentOutOfRange));
        assert!(Kind::Timeout.is_remote());
        assert!(!Kind::Database.is_remote());
    }

    #[test]
    fn defaults_nearest_wins() {
        assert_eq!(Kind::ArgumentMissing.default_for("issue"), Some("is missing"));
        assert_eq!(Kind::ArgumentMissing.default_for("endpoint_type"), Some("function"));
        assert_eq!(Kind::NoAccessFile.default_for("target"), Some("file"));
        assert_eq!(Kind::NoAccessFile.default_for("action"), Some("access to"));
        assert_eq!(Kind::OperationNotPermitted.default_for("target"), None);
        assert_eq!(Kind::Common.default_for("issue"), None);
    }

    #[test]
    fn default_codes() {
        assert_eq!(Kind::FileNotFound.default_code(), Some("ENOENT"));
        assert_eq!(Kind::NoAccessDirectory.default_code(), Some("EACCES"));
        assert_eq!(Kind::OperationNotPermitted.default_code(), Some("EPERM"));
        assert_eq!(Kind::ArgumentInvalid.default_code(), None);
    }
}
