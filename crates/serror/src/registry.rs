//! Status registry: error-kind name → HTTP status.
//!
//! Two tables are consulted at every level of the parent chain: custom
//! overrides first, then built-in defaults. A name with no entry inherits
//! its parent's status.
//!
//! ```text
//!   get_status("ArgumentOutOfRangeError")
//!     custom[ArgumentOutOfRangeError]?  defaults[ArgumentOutOfRangeError]?
//!       → parent ArgumentInvalidError
//!     custom[ArgumentInvalidError]?     defaults[ArgumentInvalidError] = 400 ✓
//! ```
//!
//! The process-wide registry sits behind an `RwLock`; isolated instances
//! live in a [`Scope`](crate::Scope).

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use once_cell::sync::Lazy;

use crate::error::SError;
use crate::kind::Kind;
use crate::scope::Rejection;

/// Accepted status values.
pub const STATUS_RANGE: std::ops::RangeInclusive<u16> = 100..=999;

/// Anything that names a status registry entry.
pub trait StatusKey {
    fn status_key(&self) -> &str;
}

impl StatusKey for str {
    fn status_key(&self) -> &str {
        self
    }
}

impl StatusKey for String {
    fn status_key(&self) -> &str {
        self
    }
}

impl StatusKey for Kind {
    fn status_key(&self) -> &str {
        self.name()
    }
}

impl StatusKey for SError {
    fn status_key(&self) -> &str {
        self.name()
    }
}

impl<T: StatusKey + ?Sized> StatusKey for &T {
    fn status_key(&self) -> &str {
        (**self).status_key()
    }
}

/// Kind name → status table with parent-chain inheritance.
#[derive(Debug, Clone)]
pub struct StatusRegistry {
    defaults: HashMap<String, u16>,
    custom: HashMap<String, u16>,
    parents: HashMap<String, String>,
}

impl Default for StatusRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusRegistry {
    /// A registry seeded with the catalog's built-in statuses and tree.
    pub fn new() -> Self {
        let mut defaults = HashMap::new();
        let mut parents = HashMap::new();
        for kind in Kind::ALL {
            let descriptor = kind.descriptor();
            if let Some(status) = descriptor.status {
                defaults.insert(descriptor.name.to_string(), status);
            }
            if let Some(parent) = descriptor.parent {
                parents.insert(descriptor.name.to_string(), parent.name().to_string());
            }
        }
        Self {
            defaults,
            custom: HashMap::new(),
            parents,
        }
    }

    /// Resolve a status, walking the parent chain.
    pub fn get<K: StatusKey>(&self, key: K) -> Option<u16> {
        self.lookup(key.status_key())
    }

    fn lookup(&self, name: &str) -> Option<u16> {
        let mut current = name;
        // A chain without cycles visits at most parents.len() + 1 names.
        for _ in 0..=self.parents.len() {
            if let Some(status) = self.custom.get(current).or_else(|| self.defaults.get(current)) {
                return Some(*status);
            }
            match self.parents.get(current) {
                Some(parent) => current = parent.as_str(),
                None => return None,
            }
        }
        tracing::warn!(name, "status parent chain has a cycle; no status resolved");
        None
    }

    /// The parent recorded for `name`.
    pub fn parent_of(&self, name: &str) -> Option<&str> {
        self.parents.get(name).map(String::as_str)
    }

    /// `true` if `name` has a custom override.
    pub fn is_overridden(&self, name: &str) -> bool {
        self.custom.contains_key(name)
    }

    pub(crate) fn set(&mut self, name: &str, status: u16) -> Result<(), Rejection> {
        check(name, status)?;
        self.custom.insert(name.to_string(), status);
        tracing::debug!(name, status, "status override set");
        Ok(())
    }

    /// Validate every entry, then apply them all.
    pub(crate) fn set_many(&mut self, entries: Vec<(String, u16)>) -> Result<(), Rejection> {
        for (name, status) in &entries {
            check(name, *status)?;
        }
        for (name, status) in entries {
            tracing::debug!(name = %name, status, "status override set");
            self.custom.insert(name, status);
        }
        Ok(())
    }

    pub(crate) fn reset(&mut self) {
        tracing::debug!(cleared = self.custom.len(), "status overrides reset");
        self.custom.clear();
    }

    pub(crate) fn register_parent(&mut self, child: &str, parent: &str) {
        tracing::debug!(child, parent, "status parent registered");
        self.parents.insert(child.to_string(), parent.to_string());
    }
}

fn check(name: &str, status: u16) -> Result<(), Rejection> {
    if STATUS_RANGE.contains(&status) {
        Ok(())
    } else {
        tracing::warn!(name, status, "status override rejected");
        Err(Rejection::StatusOutOfRange {
            name: name.to_string(),
            status,
        })
    }
}

// ── Process-wide registry ─────────────────────────────────────────

static STATUS: Lazy<RwLock<StatusRegistry>> = Lazy::new(|| RwLock::new(StatusRegistry::new()));

pub(crate) fn read_global() -> RwLockReadGuard<'static, StatusRegistry> {
    STATUS.read().unwrap_or_else(PoisonError::into_inner)
}

fn write_global() -> RwLockWriteGuard<'static, StatusRegistry> {
    STATUS.write().unwrap_or_else(PoisonError::into_inner)
}

/// Resolve the status for a kind name, [`Kind`] or [`SError`].
///
/// ```
/// use serror::{get_status, Kind};
///
/// assert_eq!(get_status(Kind::ArgumentOutOfRange), Some(400));
/// assert_eq!(get_status("NoSuchError"), None);
/// ```
pub fn get_status<K: StatusKey>(key: K) -> Option<u16> {
    read_global().get(key)
}

/// Override the status for `name` (and everything inheriting from it).
///
/// Fails with `ArgumentOutOfRangeError` for values outside `100..=999`.
pub fn set_status(name: &str, status: u16) -> Result<(), SError> {
    let result = write_global().set(name, status);
    result.map_err(Rejection::into_global_error)
}

/// Apply several overrides; nothing is applied if any value is invalid.
pub fn set_statuses<I, S>(entries: I) -> Result<(), SError>
where
    I: IntoIterator<Item = (S, u16)>,
    S: Into<String>,
{
    let entries = entries.into_iter().map(|(n, s)| (n.into(), s)).collect();
    let result = write_global().set_many(entries);
    result.map_err(Rejection::into_global_error)
}

/// Drop every custom override. Built-in defaults are untouched.
pub fn reset_statuses() {
    write_global().reset();
}

/// Record that `child` inherits its status from `parent`. Last write wins.
pub fn register_parent(child: &str, parent: &str) {
    write_global().register_parent(child, parent);
}
