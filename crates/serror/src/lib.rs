//! # serror — Standard Error
//!
//! A structured error taxonomy: a fixed catalog of error kinds arranged in
//! an inheritance tree, each with an HTTP status, an optional error code
//! and a templated human-readable message.
//!
//! ## Design
//!
//! Every error is an [`SError`] carrying a [`Kind`]. Kinds form a tree
//! rooted at `CommonError`; a kind without its own status inherits its
//! nearest ancestor's. Statuses can be overridden per process (or per
//! [`Scope`]) at runtime without touching the catalog.
//!
//! Messages are rendered from the kind's template and the caller's
//! fields. Fields named in the `ignore_for_message` setting (or the
//! per-call option) are replaced by the kind's default, so sensitive
//! values never leak into message text while staying on the error.
//!
//! Native failures (`io::Error`, parse errors, `serde_json::Error`, or a
//! hand-built [`Failure`]) are mapped to the closest kind by [`wrap`].
//!
//! ## Quick Start
//!
//! ```rust
//! use serror::{serr, match_kind, rethrow_if, Criteria, Kind, SError, SResult};
//!
//! fn open(name: &str) -> SResult<()> {
//!     Err(serr!(FileNotFound, { resource: format!("file '{name}'") }))
//! }
//!
//! let err = open("app.toml").unwrap_err();
//! assert_eq!(err.message(), "File 'app.toml' not found.");
//! assert_eq!(err.status(), 404);
//!
//! fn handle(err: SError) -> &'static str {
//!     match_kind!(err, {
//!         FileNotFound => "create it",
//!         NotFound     => "skip",
//!         _            => "give up",
//!     })
//! }
//! assert_eq!(handle(err), "create it");
//!
//! // Re-raise server-side failures, handle the rest.
//! let unavailable = SError::from(Kind::Unavailable);
//! assert!(rethrow_if(unavailable, &Criteria::new().status_gte(500)).is_err());
//! ```
//!
//! ## Modules
//!
//! | Module     | Contents |
//! |------------|----------|
//! | `kind`     | The catalog: `Kind`, its tree and per-kind defaults |
//! | `error`    | `SError` construction, accessors, JSON form |
//! | `options`  | Per-call construction options and the ignore list |
//! | `registry` | Status overrides and custom parent links |
//! | `settings` | Library settings, env-seeded |
//! | `scope`    | Isolated registry + settings pair |
//! | `inspect`  | What the classifier can learn about a native failure |
//! | `wrap`     | Native failure → cataloged kind |
//! | `rethrow`  | Declarative re-raise filter |
//!
//! ## Logging
//!
//! Emits `tracing` events (trace for classification and re-raise, warn
//! for rejected configuration). Install any subscriber to see them.

#[macro_use]
mod macros;
mod convert;
mod error;
mod inspect;
mod kind;
mod messages;
mod options;
mod policy;
mod registry;
mod rethrow;
mod scope;
mod settings;
mod wrap;

// ── Public API ────────────────────────────────────────────────────

pub use convert::ResultExt;
pub use error::{SError, SResult, FALLBACK_STATUS};
pub use inspect::{Failure, Inspect, Shape};
pub use kind::{Descriptor, Kind, UnknownKind};
pub use options::{Ignore, Options};
pub use policy::{should_include, should_include_with};
pub use registry::{
    get_status, register_parent, reset_statuses, set_status, set_statuses, StatusKey,
    StatusRegistry, STATUS_RANGE,
};
pub use rethrow::{rethrow_if, rethrow_if_some, Criteria};
pub use scope::Scope;
pub use settings::{
    get_setting, reset_settings, set_setting, set_settings, Setting, SettingValue, Settings,
    UnknownSetting, ENV_IGNORE_FOR_MESSAGE, ENV_NO_INSTANCE_HIDING_ON_WRAP,
    ENV_WRAP_USER_ERROR_TYPE,
};
pub use wrap::{classify, wrap, Wrapped};

pub use serror_core::{status_name, translate_value, Value};
