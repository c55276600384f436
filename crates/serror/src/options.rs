//! Construction options.
//!
//! An [`Options`] value is everything a call site can tell an error kind:
//! the recognised parts (`message`, `status`, `code`, `hint`, `cause`, the
//! per-call policy switches) plus an open map of kind-specific fields.
//!
//! ```
//! use serror::{Kind, Options, SError};
//!
//! let err = SError::new(
//!     Kind::ArgumentInvalid,
//!     Options::new()
//!         .field("argument_name", "bar")
//!         .field("argument_value", 100)
//!         .hint("Pass a value below 50."),
//! );
//! assert_eq!(
//!     err.message(),
//!     "Function argument 'bar' with value '100' is invalid. Pass a value below 50."
//! );
//! ```

use std::collections::BTreeMap;
use std::error::Error;
use std::fmt;
use std::sync::Arc;

use serror_core::value::{translate_value, Value};

use crate::inspect::Inspect;
use crate::kind::Kind;

/// Which message parameters are suppressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ignore {
    /// Suppress every parameter.
    All,
    /// Suppress the named parameters only. Empty means "suppress nothing".
    Names(Vec<String>),
}

impl Default for Ignore {
    fn default() -> Self {
        Ignore::Names(Vec::new())
    }
}

impl Ignore {
    /// Build from a list of names; the name `all` means [`Ignore::All`].
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.iter().any(|n| n == "all") {
            Ignore::All
        } else {
            Ignore::Names(names)
        }
    }

    /// `true` if `param` is suppressed.
    #[inline]
    pub fn ignores(&self, param: &str) -> bool {
        match self {
            Ignore::All => true,
            Ignore::Names(names) => names.iter().any(|n| n == param),
        }
    }
}

impl fmt::Display for Ignore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ignore::All => f.write_str("all"),
            Ignore::Names(names) => f.write_str(&names.join(",")),
        }
    }
}

/// The originating failure held by an error, with its code captured.
#[derive(Clone)]
pub(crate) struct Cause {
    pub(crate) error: Arc<dyn Error + Send + Sync>,
    pub(crate) code: Option<String>,
}

impl Cause {
    pub(crate) fn new<E>(error: E) -> Self
    where
        E: Error + Inspect + Send + Sync + 'static,
    {
        let code = error.code().map(str::to_string);
        Self {
            error: Arc::new(error),
            code,
        }
    }
}

impl fmt::Debug for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cause")
            .field("error", &self.error.to_string())
            .field("code", &self.code)
            .finish()
    }
}

/// Options for constructing or wrapping an error.
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub(crate) message: Option<String>,
    pub(crate) status: Option<u16>,
    pub(crate) code: Option<String>,
    pub(crate) cause: Option<Cause>,
    pub(crate) ignore_for_message: Option<Ignore>,
    pub(crate) no_code_hoisting: bool,
    pub(crate) no_instance_hiding_on_wrap: Option<bool>,
    pub(crate) wrap_user_error_type: Option<Kind>,
    pub(crate) fields: BTreeMap<String, Value>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use this message verbatim; templates are skipped.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Explicit HTTP status. Zero means "not set".
    pub fn status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Remediation sentence appended to the message.
    pub fn hint(self, hint: impl Into<String>) -> Self {
        self.field("hint", hint.into())
    }

    /// The originating failure. Its code is captured for hoisting.
    pub fn cause<E>(mut self, cause: E) -> Self
    where
        E: Error + Inspect + Send + Sync + 'static,
    {
        self.cause = Some(Cause::new(cause));
        self
    }

    /// Suppress the named parameters for this call. `"all"` suppresses
    /// every parameter.
    pub fn ignore_for_message<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore_for_message = Some(Ignore::from_names(names));
        self
    }

    pub fn ignore(mut self, ignore: Ignore) -> Self {
        self.ignore_for_message = Some(ignore);
        self
    }

    /// Do not copy the cause's code onto the error.
    pub fn no_code_hoisting(mut self) -> Self {
        self.no_code_hoisting = true;
        self
    }

    pub fn no_instance_hiding_on_wrap(mut self, enabled: bool) -> Self {
        self.no_instance_hiding_on_wrap = Some(enabled);
        self
    }

    /// Kind used instead of the argument kinds when wrapping user-input
    /// failures.
    pub fn wrap_user_error_type(mut self, kind: Kind) -> Self {
        self.wrap_user_error_type = Some(kind);
        self
    }

    /// Set a kind-specific field.
    pub fn field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Set any option by name: `message`, `code` and `status` go to their
    /// typed slots, everything else is a field.
    pub fn with(mut self, name: &str, value: impl Into<Value>) -> Self {
        let value = value.into();
        match name {
            "message" => self.message = Some(translate_value(&value)),
            "code" => self.code = Some(translate_value(&value)),
            "status" => match status_from(&value) {
                Some(status) => self.status = Some(status),
                None => tracing::warn!(value = ?value, "ignoring non-numeric status option"),
            },
            _ => {
                self.fields.insert(name.to_string(), value);
            }
        }
        self
    }

    /// A caller-supplied field.
    #[inline]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    #[inline]
    pub fn fields(&self) -> &BTreeMap<String, Value> {
        &self.fields
    }

    #[inline]
    pub fn ignore_setting(&self) -> Option<&Ignore> {
        self.ignore_for_message.as_ref()
    }
}

fn status_from(value: &Value) -> Option<u16> {
    match value {
        Value::Int(n) => u16::try_from(*n).ok(),
        Value::UInt(n) => u16::try_from(*n).ok(),
        Value::Str(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Merge caller fields over the kind's defaults over its ancestors'
/// defaults. Empty lists count as not provided.
pub(crate) fn merge(caller: BTreeMap<String, Value>, kind: Kind) -> BTreeMap<String, Value> {
    let lineage: Vec<Kind> = kind.lineage().collect();
    let mut merged = BTreeMap::new();
    for k in lineage.iter().rev() {
        for (name, value) in k.descriptor().defaults {
            merged.insert((*name).to_string(), Value::from(*value));
        }
    }
    for (name, value) in caller {
        if !value.is_empty_list() {
            merged.insert(name, value);
        }
    }
    merged
}
