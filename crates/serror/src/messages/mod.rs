//! Message templates.
//!
//! Every kind's descriptor points at one render function here. A render
//! function only sees a [`Fields`] view: the merged construction
//! parameters, already filtered through the message-inclusion policy.
//!
//! | Module     | Kinds |
//! |------------|-------|
//! | `argument` | ArgumentInvalid / Missing / OutOfRange / Type |
//! | `access`   | NotFound family |
//! | `service`  | ExternalService and Database families |
//! | `general`  | Common, System, NotImplemented, NotSupported |
//!
//! The auth and I/O families share [`action_sentence`].

pub(crate) mod access;
pub(crate) mod argument;
pub(crate) mod general;
pub(crate) mod service;

use std::collections::BTreeMap;

use serror_core::value::{translate_value, Value};

use crate::kind::Kind;
use crate::options::Ignore;
use crate::policy;

/// Signature of a kind's message template.
pub(crate) type Render = fn(&Fields<'_>) -> String;

/// Policy-filtered view over an error's merged parameters.
pub(crate) struct Fields<'a> {
    pub(crate) kind: Kind,
    pub(crate) merged: &'a BTreeMap<String, Value>,
    pub(crate) ignore: &'a Ignore,
    pub(crate) code: Option<&'a str>,
}

impl Fields<'_> {
    /// The text for `param`:
    ///
    /// - its rendered value if present and included,
    /// - the kind's declared default if present but excluded,
    /// - `None` if absent (the template drops the clause).
    pub(crate) fn get(&self, param: &str) -> Option<String> {
        let value = self.merged.get(param)?;
        if policy::admits(param, Some(value), self.ignore) {
            Some(translate_value(value))
        } else {
            self.kind.default_for(param).map(str::to_string)
        }
    }

    /// A boolean parameter, only when present and included.
    pub(crate) fn flag(&self, param: &str) -> Option<bool> {
        let value = self.merged.get(param)?;
        if policy::admits(param, Some(value), self.ignore) {
            value.as_bool()
        } else {
            None
        }
    }

    /// The resolved error code. Codes are never suppressed.
    #[inline]
    pub(crate) fn code(&self) -> Option<&str> {
        self.code
    }
}

/// `"<Action>[ the <target>] <issue>."`
pub(crate) fn action_sentence(f: &Fields<'_>) -> String {
    let action = f.get("action").unwrap_or_else(|| "action".to_string());
    let mut msg = capitalize(&action);
    if let Some(target) = f.get("target") {
        msg.push_str(" the ");
        msg.push_str(&target);
    }
    msg.push(' ');
    msg.push_str(&f.get("issue").unwrap_or_else(|| "failed".to_string()));
    msg.push('.');
    msg
}

/// Upper-case the first character.
pub(crate) fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Indefinite article for `word`.
pub(crate) fn article(word: &str) -> &'static str {
    let lower = word.to_ascii_lowercase();
    if lower.starts_with("uni") || lower.starts_with("use") {
        return "a";
    }
    match lower.chars().next() {
        Some('a' | 'e' | 'i' | 'o' | 'u') => "an",
        _ => "a",
    }
}


#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn capitalize_first_char() {
        assert_eq!(capitalize("access to"), "Access to");
        assert_eq!(capitalize("é"), "É");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn articles() {
        assert_eq!(article("unique"), "a");
        assert_eq!(article("exclusion"), "an");
        assert_eq!(article("foreign key"), "a");
        assert_eq!(article("Index"), "an");
    }

    #[test]
    fn auth_family() {
        assert_eq!(
            render(Kind::AuthenticationRequired, &[]),
            "Action requires authentication."
        );
        assert_eq!(
            render(Kind::AuthorizationConditionsNotMet, &[]),
            "Action is authorized, but certain conditions have not been met."
        );
        assert_eq!(
            render(Kind::BadCredentials, &[]),
            "Authentication failed due to bad credentials."
        );
        assert_eq!(render(Kind::NoAccess, &[]), "Access to the resource is denied.");
        assert_eq!(
            render(Kind::NoAccessFile, &[]),
            "Access to the file is denied."
        );
        assert_eq!(
            render(Kind::NoAccessDirectory, &[("target", "uploads directory".into())]),
            "Access to the uploads directory is denied."
        );
        assert_eq!(
            render(Kind::OperationNotPermitted, &[]),
            "Operation is not permitted."
        );
        assert_eq!(
            render(Kind::AuthenticationRequired, &[("action", "deleting a user".into())]),
            "Deleting a user requires authentication."
        );
    }

    #[test]
    fn io_family() {
        assert_eq!(render(Kind::Io, &[]), "I/O operation failed.");
        assert_eq!(
            render(Kind::EndOfStream, &[]),
            "Reading the stream ended unexpectedly."
        );
        assert_eq!(render(Kind::FileLoad, &[]), "Loading the file failed.");
        assert_eq!(
            render(Kind::FileLoad, &[("target", "config.toml".into())]),
            "Loading the config.toml failed."
        );
    }

    #[test]
    fn suppressed_field_falls_back_to_default() {
        let ignore = Ignore::Names(vec!["target".to_string()]);
        assert_eq!(
            render_ignoring(Kind::NoAccess, &[("target", "vault".into())], &ignore),
            "Access to the resource is denied."
        );
        assert_eq!(
            render_ignoring(Kind::NoAccess, &[("target", "vault".into())], &Ignore::All),
            "Access to the resource is denied."
        );
    }
}
