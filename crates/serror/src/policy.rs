//! Message-inclusion policy.
//!
//! A parameter appears in a generated message only when it was provided
//! (not absent, not an empty list) and it is not suppressed. Suppression
//! comes from the call's `ignore_for_message` option when given, otherwise
//! from the `ignore_for_message` setting.

use serror_core::value::Value;

use crate::options::{Ignore, Options};
use crate::settings::{self, Settings};

/// Should `param`'s value from `options` appear in the message?
///
/// ```
/// use serror::{should_include, Options};
///
/// let opts = Options::new().field("resource", "garden");
/// assert!(should_include("resource", &opts));
/// assert!(!should_include("argument_name", &opts));
///
/// let opts = opts.ignore_for_message(["resource"]);
/// assert!(!should_include("resource", &opts));
/// ```
pub fn should_include(param: &str, options: &Options) -> bool {
    let value = options.get(param);
    if !provided(value) {
        return false;
    }
    match options.ignore_setting() {
        Some(ignore) => !ignore.ignores(param),
        None => !settings::read_global().ignore_for_message().ignores(param),
    }
}

/// [`should_include`] against an explicit settings registry.
pub fn should_include_with(param: &str, options: &Options, settings: &Settings) -> bool {
    let ignore = options
        .ignore_setting()
        .unwrap_or_else(|| settings.ignore_for_message());
    admits(param, options.get(param), ignore)
}

/// The policy with the suppression list already resolved.
#[inline]
pub(crate) fn admits(param: &str, value: Option<&Value>, ignore: &Ignore) -> bool {
    provided(value) && !ignore.ignores(param)
}

#[inline]
fn provided(value: Option<&Value>) -> bool {
    matches!(value, Some(v) if !v.is_empty_list())
}
