//! Backend configuration loaded via OrthoConfig.
//!
//! Values come from CLI flags, `TODO_*` environment variables and an
//! optional configuration file, in OrthoConfig's usual precedence.

use ortho_config::OrthoConfig;
use serde::Deserialize;

/// Startup configuration.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "TODO")]
pub struct TrackerSettings {
    /// Emit human-readable log lines instead of JSON.
    #[ortho_config(default = false)]
    pub text_logs: bool,
    /// Username registered at startup.
    pub bootstrap_username: Option<String>,
    /// Password for the bootstrap user.
    pub bootstrap_password: Option<String>,
}

impl TrackerSettings {
    /// Bootstrap credentials, when both parts are configured.
    pub fn bootstrap_credentials(&self) -> Option<(&str, &str)> {
        match (&self.bootstrap_username, &self.bootstrap_password) {
            (Some(username), Some(password)) => Some((username.as_str(), password.as_str())),
            _ => None,
        }
    }

    /// Log format selected by [`Self::text_logs`]; JSON unless overridden.
    pub fn log_format(&self) -> crate::telemetry::LogFormat {
        if self.text_logs {
            crate::telemetry::LogFormat::Text
        } else {
            crate::telemetry::LogFormat::Json
        }
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for configuration parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    use crate::telemetry::LogFormat;

    fn load_from_empty_args() -> TrackerSettings {
        TrackerSettings::load_from_iter([OsString::from("todo-backend")])
            .expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env([
            ("TODO_TEXT_LOGS", None::<String>),
            ("TODO_BOOTSTRAP_USERNAME", None::<String>),
            ("TODO_BOOTSTRAP_PASSWORD", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert!(!settings.text_logs);
        assert_eq!(settings.log_format(), LogFormat::Json);
        assert!(settings.bootstrap_credentials().is_none());
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("TODO_TEXT_LOGS", Some("true".to_owned())),
            ("TODO_BOOTSTRAP_USERNAME", Some("admin".to_owned())),
            ("TODO_BOOTSTRAP_PASSWORD", Some("password".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.log_format(), LogFormat::Text);
        assert_eq!(
            settings.bootstrap_credentials(),
            Some(("admin", "password"))
        );
    }

    #[rstest]
    fn bootstrap_requires_both_parts() {
        let _guard = lock_env([
            ("TODO_TEXT_LOGS", None::<String>),
            ("TODO_BOOTSTRAP_USERNAME", Some("admin".to_owned())),
            ("TODO_BOOTSTRAP_PASSWORD", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert!(settings.bootstrap_credentials().is_none());
    }
}
