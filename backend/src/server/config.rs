//! Server settings loaded via OrthoConfig.
//!
//! Values come from defaults, `BOOKS_*` environment variables and CLI flags,
//! in increasing order of precedence.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::domain::{ExecutionMode, UnknownExecutionMode};

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

/// Configuration values for the HTTP server and its seed data.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "BOOKS")]
pub struct ServerSettings {
    /// Address to bind; all interfaces when unset.
    pub host: Option<IpAddr>,
    /// Port to bind.
    #[ortho_config(default = 3000)]
    pub port: u16,
    /// `development` or `production`.
    pub mode: Option<String>,
    /// bcrypt cost used to hash seed passwords at start-up.
    #[ortho_config(default = 10)]
    pub hash_cost: u32,
}

impl ServerSettings {
    /// Socket address to bind, `0.0.0.0:3000` unless overridden.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host.unwrap_or(DEFAULT_HOST), self.port)
    }

    /// Configured execution mode; development for debug builds when unset.
    ///
    /// # Errors
    /// Returns [`UnknownExecutionMode`] for an unrecognised value.
    pub fn execution_mode(&self) -> Result<ExecutionMode, UnknownExecutionMode> {
        self.mode
            .as_deref()
            .map_or_else(|| Ok(ExecutionMode::build_default()), |raw| raw.parse())
    }

    /// bcrypt cost for seed passwords.
    pub fn hash_cost(&self) -> u32 {
        self.hash_cost
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for server settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    fn load_from_empty_args() -> ServerSettings {
        ServerSettings::load_from_iter([OsString::from("in-n-out-books")])
            .expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env([
            ("BOOKS_HOST", None::<String>),
            ("BOOKS_PORT", None::<String>),
            ("BOOKS_MODE", None::<String>),
            ("BOOKS_HASH_COST", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.bind_addr(), SocketAddr::from(([0, 0, 0, 0], 3000)));
        assert_eq!(settings.execution_mode(), Ok(ExecutionMode::build_default()));
        assert_eq!(settings.hash_cost(), 10);
        assert!(settings.host.is_none());
        assert!(settings.mode.is_none());
    }

    #[rstest]
    fn partial_environment_keeps_other_defaults() {
        let _guard = lock_env([
            ("BOOKS_HOST", None::<String>),
            ("BOOKS_PORT", Some("8081".to_owned())),
            ("BOOKS_MODE", None::<String>),
            ("BOOKS_HASH_COST", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.bind_addr(), SocketAddr::from(([0, 0, 0, 0], 8081)));
        assert_eq!(settings.hash_cost(), 10);
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("BOOKS_HOST", Some("127.0.0.1".to_owned())),
            ("BOOKS_PORT", Some("8080".to_owned())),
            ("BOOKS_MODE", Some("production".to_owned())),
            ("BOOKS_HASH_COST", Some("4".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.bind_addr(), SocketAddr::from(([127, 0, 0, 1], 8080)));
        assert_eq!(settings.execution_mode(), Ok(ExecutionMode::Production));
        assert_eq!(settings.hash_cost(), 4);
    }

    #[rstest]
    fn unknown_modes_are_reported() {
        let settings = ServerSettings {
            host: None,
            port: 3000,
            mode: Some("staging".to_owned()),
            hash_cost: 10,
        };
        assert_eq!(
            settings.execution_mode(),
            Err(UnknownExecutionMode("staging".to_owned()))
        );
    }
}
