//! Environment variable utilities
//!
//! Seeds the process-wide settings (see `serror::settings`) without a
//! config file. Every reader trims surrounding whitespace; a value that
//! does not parse is treated as unset.
//!
//! ```ignore
//! use serror_core::env::{env_get_bool, env_get_list, env_get_opt};
//!
//! let keep: bool = env_get_bool("SERROR_NO_INSTANCE_HIDING_ON_WRAP", false);
//! let names: Option<Vec<String>> = env_get_list("SERROR_IGNORE_FOR_MESSAGE");
//! let kind: Option<String> = env_get_opt("SERROR_WRAP_USER_ERROR_TYPE");
//! ```

use std::str::FromStr;

fn raw(key: &str) -> Option<String> {
    std::env::var(key).ok().map(|v| v.trim().to_string())
}

/// `"1"`, `"true"`, `"yes"` or `"on"` (any case) is true, anything else
/// false. Unset returns `default`.
pub fn env_get_bool(key: &str, default: bool) -> bool {
    raw(key).map_or(default, |v| {
        matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
    })
}

/// The variable parsed as `T`; `None` when unset or unparseable.
pub fn env_get_opt<T: FromStr>(key: &str) -> Option<T> {
    raw(key)?.parse().ok()
}

/// Comma-separated items, trimmed, empties dropped.
///
/// `None` when unset; `Some(vec![])` when set but holding no items.
pub fn env_get_list(key: &str) -> Option<Vec<String>> {
    let items = raw(key)?
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect();
    Some(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const UNSET: &str = "__SERROR_TEST_UNSET__";

    #[test]
    fn unset_falls_back() {
        assert!(env_get_bool(UNSET, true));
        assert!(!env_get_bool(UNSET, false));
        assert_eq!(env_get_opt::<u16>(UNSET), None);
        assert_eq!(env_get_list(UNSET), None);
    }

    #[test]
    #[serial(env)]
    fn list_trims_and_drops_empty() {
        std::env::set_var("__SERROR_TEST_LIST__", " resource, ,argument_value ,");
        assert_eq!(
            env_get_list("__SERROR_TEST_LIST__"),
            Some(vec!["resource".to_string(), "argument_value".to_string()])
        );

        std::env::set_var("__SERROR_TEST_LIST__", "");
        assert_eq!(env_get_list("__SERROR_TEST_LIST__"), Some(vec![]));
        std::env::remove_var("__SERROR_TEST_LIST__");
    }

    #[test]
    #[serial(env)]
    fn bool_spellings() {
        for truthy in ["1", "true", "TRUE", "yes", " on "] {
            std::env::set_var("__SERROR_TEST_BOOL__", truthy);
            assert!(env_get_bool("__SERROR_TEST_BOOL__", false), "{truthy:?}");
        }
        for falsy in ["0", "false", "garbage"] {
            std::env::set_var("__SERROR_TEST_BOOL__", falsy);
            assert!(!env_get_bool("__SERROR_TEST_BOOL__", true), "{falsy:?}");
        }
        std::env::remove_var("__SERROR_TEST_BOOL__");
    }

    #[test]
    #[serial(env)]
    fn opt_parses_trimmed() {
        std::env::set_var("__SERROR_TEST_NUM__", "not_a_number");
        assert_eq!(env_get_opt::<u16>("__SERROR_TEST_NUM__"), None);

        std::env::set_var("__SERROR_TEST_NUM__", " 404 ");
        assert_eq!(env_get_opt::<u16>("__SERROR_TEST_NUM__"), Some(404));
        std::env::remove_var("__SERROR_TEST_NUM__");
    }
}
