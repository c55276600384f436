use std::collections::BTreeMap;
use std::error::Error;
use std::fmt;
use std::sync::Arc;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serror_core::status::status_name;
use serror_core::value::{translate_value, Value};

use crate::kind::Kind;
use crate::messages::Fields;
use crate::options::{merge, Options};
use crate::policy;
use crate::registry::{self, StatusRegistry};
use crate::scope::Scope;
use crate::settings::{self, Settings};

/// Status used when neither the caller nor the registry provides one.
pub const FALLBACK_STATUS: u16 = 500;

/// Attribute names of the wire contract; fields never shadow them.
const RESERVED: &[&str] = &["name", "message", "status", "status_name", "code", "hint", "cause"];

/// Standard Error: one cataloged error instance.
///
/// Everything is resolved at construction: the message is rendered once,
/// the status is looked up once. Later registry changes do not touch
/// existing instances.
///
/// Users interact through `.kind()`, `.message()`, `.status()`, `.code()`,
/// `.field()` and the standard `Error::source` chain.
#[derive(Debug, Clone)]
pub struct SError {
    kind: Kind,
    message: String,
    status: u16,
    status_name: &'static str,
    code: Option<String>,
    hint: Option<String>,
    cause: Option<Arc<dyn Error + Send + Sync>>,
    fields: BTreeMap<String, Value>,
}

/// Convenience alias.
pub type SResult<T> = Result<T, SError>;

// ── Constructors ──────────────────────────────────────────────────

impl SError {
    /// Construct against the process-wide registries.
    ///
    /// ```
    /// use serror::{Kind, Options, SError};
    ///
    /// let err = SError::new(
    ///     Kind::NotFound,
    ///     Options::new().field("resource", "the hidden garden"),
    /// );
    /// assert_eq!(err.message(), "The hidden garden not found.");
    /// assert_eq!(err.status(), 404);
    /// assert_eq!(err.code(), Some("ENOENT"));
    /// ```
    pub fn new(kind: Kind, options: Options) -> Self {
        let status = registry::read_global();
        let settings = settings::read_global();
        Self::build(kind, options, &status, &settings)
    }

    /// Construct against an isolated [`Scope`].
    pub fn new_in(kind: Kind, options: Options, scope: &Scope) -> Self {
        scope.error(kind, options)
    }

    pub(crate) fn build(
        kind: Kind,
        options: Options,
        registry: &StatusRegistry,
        settings: &Settings,
    ) -> Self {
        let Options {
            message,
            status,
            code,
            cause,
            ignore_for_message,
            no_code_hoisting,
            fields,
            ..
        } = options;

        let mut fields = merge(fields, kind);
        let hint = fields.remove("hint");

        // Code first: the connection template reads it.
        let hoisted = if no_code_hoisting {
            None
        } else {
            cause.as_ref().and_then(|c| c.code.clone())
        };
        let code = code
            .or(hoisted)
            .or_else(|| kind.default_code().map(str::to_string));

        let ignore = ignore_for_message
            .as_ref()
            .unwrap_or_else(|| settings.ignore_for_message());

        let mut message = message.unwrap_or_else(|| {
            let view = Fields {
                kind,
                merged: &fields,
                ignore,
                code: code.as_deref(),
            };
            (kind.descriptor().render)(&view)
        });

        let status = status
            .filter(|s| *s != 0)
            .or_else(|| registry.get(kind))
            .unwrap_or(FALLBACK_STATUS);

        if let Some(hint) = hint.as_ref().filter(|h| policy::admits("hint", Some(*h), ignore)) {
            message.push(' ');
            message.push_str(&translate_value(hint));
        }

        Self {
            kind,
            message,
            status,
            status_name: status_name(status),
            code,
            hint: hint.map(|h| translate_value(&h)),
            cause: cause.map(|c| c.error),
            fields,
        }
    }
}

impl From<Kind> for SError {
    fn from(kind: Kind) -> Self {
        SError::new(kind, Options::new())
    }
}

// ── Accessors ─────────────────────────────────────────────────────

impl SError {
    #[inline]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// The kind's name, e.g. `"NotFoundError"`.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    pub fn status(&self) -> u16 {
        self.status
    }

    /// `"Not Found"`, `"Bad Gateway"`, ... or `"Unassigned"`.
    #[inline]
    pub fn status_name(&self) -> &'static str {
        self.status_name
    }

    #[inline]
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    #[inline]
    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }

    /// The originating failure, if any.
    pub fn cause(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    /// A merged construction field (caller value or kind default).
    #[inline]
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    #[inline]
    pub fn fields(&self) -> &BTreeMap<String, Value> {
        &self.fields
    }

    /// `true` if this error's kind is `kind` or descends from it.
    #[inline]
    pub fn is_a(&self, kind: Kind) -> bool {
        self.kind.is_a(kind)
    }

    /// The `is_local` flag, when the error declares one.
    pub fn is_local(&self) -> Option<bool> {
        self.fields.get("is_local").and_then(Value::as_bool)
    }
}

// ── Standard trait impls ──────────────────────────────────────────

impl fmt::Display for SError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error for SError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause
            .as_ref()
            .map(|c| c.as_ref() as &(dyn Error + 'static))
    }
}

impl Serialize for SError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("name", self.name())?;
        map.serialize_entry("message", &self.message)?;
        map.serialize_entry("status", &self.status)?;
        map.serialize_entry("status_name", self.status_name)?;
        if let Some(code) = &self.code {
            map.serialize_entry("code", code)?;
        }
        if let Some(hint) = &self.hint {
            map.serialize_entry("hint", hint)?;
        }
        if let Some(cause) = &self.cause {
            map.serialize_entry("cause", &cause.to_string())?;
        }
        for (name, value) in &self.fields {
            if !RESERVED.contains(&name.as_str()) {
                map.serialize_entry(name, value)?;
            }
        }
        map.end()
    }
}
