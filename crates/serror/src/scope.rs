//! Isolated registries.
//!
//! A [`Scope`] owns its own status and settings registries. Errors built
//! through it never consult (or disturb) the process-wide ones, which makes
//! it the tool for tests and multi-tenant hosts.
//!
//! ```
//! use serror::{Kind, Options, Scope};
//!
//! let mut scope = Scope::new();
//! scope.set_status("NotFoundError", 410).unwrap();
//!
//! let err = scope.error(Kind::FileNotFound, Options::new());
//! assert_eq!(err.status(), 410);
//! assert_eq!(serror::get_status(Kind::FileNotFound), Some(404));
//! ```

use std::error::Error;

use crate::error::SError;
use crate::inspect::Inspect;
use crate::kind::Kind;
use crate::options::Options;
use crate::registry::{self, StatusKey, StatusRegistry, STATUS_RANGE};
use crate::settings::{self, Setting, SettingValue, Settings};
use crate::wrap::{self, Wrapped};

/// A registry operation the library refused.
///
/// Kept free of `SError` so it can be produced while a registry lock is
/// held; it is turned into an `SError` once the lock is released.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Rejection {
    UnknownSetting(String),
    WrongType { setting: Setting, value: SettingValue },
    StatusOutOfRange { name: String, status: u16 },
}

impl Rejection {
    pub(crate) fn into_error(self, status: &StatusRegistry, settings: &Settings) -> SError {
        let (kind, options) = match self {
            Rejection::UnknownSetting(name) => {
                let known: Vec<&str> = Setting::ALL.iter().map(|s| s.name()).collect();
                let options = Options::new()
                    .field("argument_name", "name")
                    .field("argument_value", name)
                    .hint(format!("Known settings: {}.", known.join(", ")));
                (Kind::ArgumentInvalid, options)
            }
            Rejection::WrongType { setting, value } => {
                let options = Options::new()
                    .field("argument_name", setting.name())
                    .field("argument_type", value.type_name())
                    .field("expected_type", setting.expected_type());
                (Kind::ArgumentType, options)
            }
            Rejection::StatusOutOfRange { name, status } => {
                let options = Options::new()
                    .field("argument_name", "status")
                    .field("argument_value", status)
                    .field("min", *STATUS_RANGE.start())
                    .field("max", *STATUS_RANGE.end())
                    .field("status_key", name);
                (Kind::ArgumentOutOfRange, options)
            }
        };
        SError::build(kind, options, status, settings)
    }

    /// Build against the process-wide registries. Must not be called
    /// while holding either registry's lock.
    pub(crate) fn into_global_error(self) -> SError {
        let status = registry::read_global();
        let settings = settings::read_global();
        self.into_error(&status, &settings)
    }
}

/// An isolated status registry and settings registry.
#[derive(Debug, Clone, Default)]
pub struct Scope {
    status: StatusRegistry,
    settings: Settings,
}

impl Scope {
    /// Built-in statuses and hard default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Built-in statuses and settings defaults read from the environment.
    pub fn from_env() -> Self {
        Self {
            status: StatusRegistry::new(),
            settings: Settings::from_env(),
        }
    }

    #[inline]
    pub fn status(&self) -> &StatusRegistry {
        &self.status
    }

    #[inline]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    // ── Status ────────────────────────────────────────────────────

    pub fn get_status<K: StatusKey>(&self, key: K) -> Option<u16> {
        self.status.get(key)
    }

    pub fn set_status(&mut self, name: &str, status: u16) -> Result<(), SError> {
        let result = self.status.set(name, status);
        result.map_err(|r| r.into_error(&self.status, &self.settings))
    }

    pub fn set_statuses<I, S>(&mut self, entries: I) -> Result<(), SError>
    where
        I: IntoIterator<Item = (S, u16)>,
        S: Into<String>,
    {
        let entries = entries.into_iter().map(|(n, s)| (n.into(), s)).collect();
        let result = self.status.set_many(entries);
        result.map_err(|r| r.into_error(&self.status, &self.settings))
    }

    pub fn reset_statuses(&mut self) {
        self.status.reset();
    }

    pub fn register_parent(&mut self, child: &str, parent: &str) {
        self.status.register_parent(child, parent);
    }

    // ── Settings ──────────────────────────────────────────────────

    pub fn get_setting(&self, name: &str) -> Result<SettingValue, SError> {
        self.settings
            .get_named(name)
            .map_err(|r| r.into_error(&self.status, &self.settings))
    }

    pub fn set_setting(&mut self, name: &str, value: impl Into<SettingValue>) -> Result<(), SError> {
        let result = self.settings.set(name, value.into());
        result.map_err(|r| r.into_error(&self.status, &self.settings))
    }

    pub fn set_settings<I, S>(&mut self, entries: I) -> Result<(), SError>
    where
        I: IntoIterator<Item = (S, SettingValue)>,
        S: Into<String>,
    {
        let entries = entries.into_iter().map(|(n, v)| (n.into(), v)).collect();
        let result = self.settings.set_many(entries);
        result.map_err(|r| r.into_error(&self.status, &self.settings))
    }

    pub fn reset_settings(&mut self) {
        self.settings.reset();
    }

    // ── Construction ──────────────────────────────────────────────

    /// Construct an error against this scope's registries.
    pub fn error(&self, kind: Kind, options: Options) -> SError {
        SError::build(kind, options, &self.status, &self.settings)
    }

    /// Classify and wrap `cause` against this scope's registries.
    pub fn wrap<E>(&self, cause: E, options: Options) -> Wrapped<E>
    where
        E: Error + Inspect + Send + Sync + 'static,
    {
        wrap::wrap_with(cause, options, &self.status, &self.settings)
    }
}
