//! Library-wide switches.
//!
//! | Setting                      | Value                 | Env default                          |
//! |------------------------------|-----------------------|--------------------------------------|
//! | `ignore_for_message`         | `Ignore`              | `SERROR_IGNORE_FOR_MESSAGE`          |
//! | `no_instance_hiding_on_wrap` | `bool`                | `SERROR_NO_INSTANCE_HIDING_ON_WRAP`  |
//! | `wrap_user_error_type`       | `Option<Kind>`        | `SERROR_WRAP_USER_ERROR_TYPE`        |
//!
//! The process-wide registry reads its defaults from the environment once,
//! on first use. Custom values set at runtime sit on top of those defaults
//! until [`reset_settings`].

use std::fmt;
use std::str::FromStr;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use once_cell::sync::Lazy;
use serror_core::env::{env_get_bool, env_get_list, env_get_opt};

use crate::error::SError;
use crate::kind::Kind;
use crate::options::Ignore;
use crate::scope::Rejection;

pub const ENV_IGNORE_FOR_MESSAGE: &str = "SERROR_IGNORE_FOR_MESSAGE";
pub const ENV_NO_INSTANCE_HIDING_ON_WRAP: &str = "SERROR_NO_INSTANCE_HIDING_ON_WRAP";
pub const ENV_WRAP_USER_ERROR_TYPE: &str = "SERROR_WRAP_USER_ERROR_TYPE";

/// A known setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Setting {
    IgnoreForMessage,
    NoInstanceHidingOnWrap,
    WrapUserErrorType,
}

impl Setting {
    pub const ALL: &'static [Setting] = &[
        Setting::IgnoreForMessage,
        Setting::NoInstanceHidingOnWrap,
        Setting::WrapUserErrorType,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Setting::IgnoreForMessage => "ignore_for_message",
            Setting::NoInstanceHidingOnWrap => "no_instance_hiding_on_wrap",
            Setting::WrapUserErrorType => "wrap_user_error_type",
        }
    }

    /// The value type this setting takes, as shown in error messages.
    pub fn expected_type(self) -> &'static str {
        match self {
            Setting::IgnoreForMessage => "ignore list",
            Setting::NoInstanceHidingOnWrap => "boolean",
            Setting::WrapUserErrorType => "error kind",
        }
    }

    fn accepts(self, value: &SettingValue) -> bool {
        matches!(
            (self, value),
            (Setting::IgnoreForMessage, SettingValue::Ignore(_))
                | (Setting::NoInstanceHidingOnWrap, SettingValue::Bool(_))
                | (Setting::WrapUserErrorType, SettingValue::Kind(_))
        )
    }
}

impl fmt::Display for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string names no known setting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSetting(pub String);

impl fmt::Display for UnknownSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown setting '{}'", self.0)
    }
}

impl std::error::Error for UnknownSetting {}

impl FromStr for Setting {
    type Err = UnknownSetting;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Setting::ALL
            .iter()
            .copied()
            .find(|setting| setting.name() == s)
            .ok_or_else(|| UnknownSetting(s.to_string()))
    }
}

/// A setting's value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingValue {
    Bool(bool),
    Ignore(Ignore),
    Kind(Option<Kind>),
}

impl SettingValue {
    pub fn type_name(&self) -> &'static str {
        match self {
            SettingValue::Bool(_) => "boolean",
            SettingValue::Ignore(_) => "ignore list",
            SettingValue::Kind(_) => "error kind",
        }
    }
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingValue::Bool(b) => write!(f, "{b}"),
            SettingValue::Ignore(ignore) => write!(f, "{ignore}"),
            SettingValue::Kind(Some(kind)) => write!(f, "{kind}"),
            SettingValue::Kind(None) => f.write_str("none"),
        }
    }
}

impl From<bool> for SettingValue {
    fn from(b: bool) -> Self {
        SettingValue::Bool(b)
    }
}

impl From<Ignore> for SettingValue {
    fn from(ignore: Ignore) -> Self {
        SettingValue::Ignore(ignore)
    }
}

impl From<Kind> for SettingValue {
    fn from(kind: Kind) -> Self {
        SettingValue::Kind(Some(kind))
    }
}

impl From<Option<Kind>> for SettingValue {
    fn from(kind: Option<Kind>) -> Self {
        SettingValue::Kind(kind)
    }
}

// ── Registry ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
struct Values {
    ignore_for_message: Ignore,
    no_instance_hiding_on_wrap: bool,
    wrap_user_error_type: Option<Kind>,
}

impl Values {
    fn from_env() -> Self {
        let wrap_user_error_type = env_get_opt::<String>(ENV_WRAP_USER_ERROR_TYPE).and_then(|name| {
            name.parse::<Kind>()
                .map_err(|err| {
                    tracing::warn!(var = ENV_WRAP_USER_ERROR_TYPE, %err, "ignoring invalid value")
                })
                .ok()
        });
        Self {
            ignore_for_message: env_get_list(ENV_IGNORE_FOR_MESSAGE)
                .map(Ignore::from_names)
                .unwrap_or_default(),
            no_instance_hiding_on_wrap: env_get_bool(ENV_NO_INSTANCE_HIDING_ON_WRAP, false),
            wrap_user_error_type,
        }
    }
}

#[derive(Debug, Clone, Default)]
struct Overrides {
    ignore_for_message: Option<Ignore>,
    no_instance_hiding_on_wrap: Option<bool>,
    wrap_user_error_type: Option<Option<Kind>>,
}

/// Defaults plus runtime overrides.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    defaults: Values,
    custom: Overrides,
}

impl Settings {
    /// Built-in defaults; the environment is not consulted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults read from the `SERROR_*` environment variables.
    pub fn from_env() -> Self {
        Self {
            defaults: Values::from_env(),
            custom: Overrides::default(),
        }
    }

    pub fn ignore_for_message(&self) -> &Ignore {
        self.custom
            .ignore_for_message
            .as_ref()
            .unwrap_or(&self.defaults.ignore_for_message)
    }

    pub fn no_instance_hiding_on_wrap(&self) -> bool {
        self.custom
            .no_instance_hiding_on_wrap
            .unwrap_or(self.defaults.no_instance_hiding_on_wrap)
    }

    pub fn wrap_user_error_type(&self) -> Option<Kind> {
        self.custom
            .wrap_user_error_type
            .unwrap_or(self.defaults.wrap_user_error_type)
    }

    pub fn get(&self, setting: Setting) -> SettingValue {
        match setting {
            Setting::IgnoreForMessage => SettingValue::Ignore(self.ignore_for_message().clone()),
            Setting::NoInstanceHidingOnWrap => {
                SettingValue::Bool(self.no_instance_hiding_on_wrap())
            }
            Setting::WrapUserErrorType => SettingValue::Kind(self.wrap_user_error_type()),
        }
    }

    pub(crate) fn get_named(&self, name: &str) -> Result<SettingValue, Rejection> {
        Ok(self.get(lookup(name)?))
    }

    pub(crate) fn set(&mut self, name: &str, value: SettingValue) -> Result<(), Rejection> {
        let setting = validate(name, &value)?;
        self.apply(setting, value);
        Ok(())
    }

    /// Validate every entry, then apply them all.
    pub(crate) fn set_many(&mut self, entries: Vec<(String, SettingValue)>) -> Result<(), Rejection> {
        let mut checked = Vec::with_capacity(entries.len());
        for (name, value) in entries {
            let setting = validate(&name, &value)?;
            checked.push((setting, value));
        }
        for (setting, value) in checked {
            self.apply(setting, value);
        }
        Ok(())
    }

    pub(crate) fn reset(&mut self) {
        tracing::debug!("settings reset");
        self.custom = Overrides::default();
    }

    fn apply(&mut self, setting: Setting, value: SettingValue) {
        tracing::debug!(%setting, %value, "setting changed");
        match value {
            SettingValue::Ignore(ignore) => self.custom.ignore_for_message = Some(ignore),
            SettingValue::Bool(b) => self.custom.no_instance_hiding_on_wrap = Some(b),
            SettingValue::Kind(kind) => self.custom.wrap_user_error_type = Some(kind),
        }
    }
}

fn lookup(name: &str) -> Result<Setting, Rejection> {
    name.parse::<Setting>().map_err(|UnknownSetting(name)| {
        tracing::warn!(setting = %name, "unknown setting");
        Rejection::UnknownSetting(name)
    })
}

fn validate(name: &str, value: &SettingValue) -> Result<Setting, Rejection> {
    let setting = lookup(name)?;
    if setting.accepts(value) {
        Ok(setting)
    } else {
        tracing::warn!(%setting, got = value.type_name(), "setting rejected");
        Err(Rejection::WrongType {
            setting,
            value: value.clone(),
        })
    }
}

// ── Process-wide registry ─────────────────────────────────────────

static SETTINGS: Lazy<RwLock<Settings>> = Lazy::new(|| RwLock::new(Settings::from_env()));

pub(crate) fn read_global() -> RwLockReadGuard<'static, Settings> {
    SETTINGS.read().unwrap_or_else(PoisonError::into_inner)
}

fn write_global() -> RwLockWriteGuard<'static, Settings> {
    SETTINGS.write().unwrap_or_else(PoisonError::into_inner)
}

/// Current value of a setting.
///
/// ```
/// use serror::{get_setting, SettingValue};
///
/// assert!(get_setting("wrap_user_error_type").is_ok());
/// assert!(get_setting("colour").is_err());
/// ```
pub fn get_setting(name: &str) -> Result<SettingValue, SError> {
    let result = read_global().get_named(name);
    result.map_err(Rejection::into_global_error)
}

pub fn set_setting(name: &str, value: impl Into<SettingValue>) -> Result<(), SError> {
    let result = write_global().set(name, value.into());
    result.map_err(Rejection::into_global_error)
}

/// Apply several settings; nothing is applied if any entry is invalid.
pub fn set_settings<I, S>(entries: I) -> Result<(), SError>
where
    I: IntoIterator<Item = (S, SettingValue)>,
    S: Into<String>,
{
    let entries = entries.into_iter().map(|(n, v)| (n.into(), v)).collect();
    let result = write_global().set_many(entries);
    result.map_err(Rejection::into_global_error)
}

/// Drop every runtime override, restoring the environment defaults.
pub fn reset_settings() {
    write_global().reset();
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn hard_defaults() {
        let settings = Settings::new();
        assert_eq!(settings.ignore_for_message(), &Ignore::default());
        assert!(!settings.no_instance_hiding_on_wrap());
        assert_eq!(settings.wrap_user_error_type(), None);
    }

    #[test]
    fn set_and_reset() {
        let mut settings = Settings::new();
        settings.set("no_instance_hiding_on_wrap", true.into()).unwrap();
        settings
            .set("wrap_user_error_type", Kind::NotSupported.into())
            .unwrap();
        assert!(settings.no_instance_hiding_on_wrap());
        assert_eq!(settings.wrap_user_error_type(), Some(Kind::NotSupported));
        assert_eq!(
            settings.get(Setting::WrapUserErrorType),
            SettingValue::Kind(Some(Kind::NotSupported))
        );

        settings.reset();
        assert!(!settings.no_instance_hiding_on_wrap());
        assert_eq!(settings.wrap_user_error_type(), None);
    }

    #[test]
    fn rejects_unknown_and_mistyped() {
        let mut settings = Settings::new();
        assert!(matches!(
            settings.set("colour", true.into()),
            Err(Rejection::UnknownSetting(name)) if name == "colour"
        ));
        assert!(matches!(
            settings.set("ignore_for_message", true.into()),
            Err(Rejection::WrongType { setting: Setting::IgnoreForMessage, .. })
        ));
    }

    #[test]
    fn bulk_is_all_or_nothing() {
        let mut settings = Settings::new();
        let entries = vec![
            ("no_instance_hiding_on_wrap".to_string(), SettingValue::Bool(true)),
            ("wrap_user_error_type".to_string(), SettingValue::Bool(true)),
        ];
        assert!(settings.set_many(entries).is_err());
        assert!(!settings.no_instance_hiding_on_wrap());
    }

    #[test]
    fn setting_names_parse() {
        for setting in Setting::ALL {
            assert_eq!(setting.name().parse::<Setting>(), Ok(*setting));
        }
    }

    #[test]
    #[serial(env)]
    fn env_defaults() {
        // Initialise the global first so it never sees these variables.
        drop(read_global());
        std::env::set_var(ENV_IGNORE_FOR_MESSAGE, "resource, argument_value");
        std::env::set_var(ENV_NO_INSTANCE_HIDING_ON_WRAP, "yes");
        std::env::set_var(ENV_WRAP_USER_ERROR_TYPE, "ArgumentMissingError");
        let settings = Settings::from_env();
        std::env::remove_var(ENV_IGNORE_FOR_MESSAGE);
        std::env::remove_var(ENV_NO_INSTANCE_HIDING_ON_WRAP);
        std::env::remove_var(ENV_WRAP_USER_ERROR_TYPE);

        assert_eq!(
            settings.ignore_for_message(),
            &Ignore::Names(vec!["resource".to_string(), "argument_value".to_string()])
        );
        assert!(settings.no_instance_hiding_on_wrap());
        assert_eq!(settings.wrap_user_error_type(), Some(Kind::ArgumentMissing));
    }

    #[test]
    #[serial(env)]
    fn env_all_and_bad_kind() {
        drop(read_global());
        std::env::set_var(ENV_IGNORE_FOR_MESSAGE, "all");
        std::env::set_var(ENV_WRAP_USER_ERROR_TYPE, "Bogus");
        let settings = Settings::from_env();
        std::env::remove_var(ENV_IGNORE_FOR_MESSAGE);
        std::env::remove_var(ENV_WRAP_USER_ERROR_TYPE);

        assert_eq!(settings.ignore_for_message(), &Ignore::All);
        assert_eq!(settings.wrap_user_error_type(), None);
    }

    #[test]
    #[serial(settings)]
    fn global_round_trip() {
        set_setting("no_instance_hiding_on_wrap", true).unwrap();
        assert_eq!(
            get_setting("no_instance_hiding_on_wrap").unwrap(),
            SettingValue::Bool(true)
        );
        reset_settings();
        assert_eq!(
            get_setting("no_instance_hiding_on_wrap").unwrap(),
            SettingValue::Bool(false)
        );
    }

    #[test]
    #[serial(settings)]
    fn global_rejections_are_serrors() {
        let err = set_setting("colour", true).unwrap_err();
        assert_eq!(err.kind(), Kind::ArgumentInvalid);
        assert_eq!(err.field("argument_name").and_then(|v| v.as_str()), Some("name"));

        let err = set_setting("no_instance_hiding_on_wrap", Kind::Common).unwrap_err();
        assert_eq!(err.kind(), Kind::ArgumentType);
        assert!(err.is_a(Kind::ArgumentInvalid));
    }
}
