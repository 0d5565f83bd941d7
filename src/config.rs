//! Server configuration.
//!
//! Every option can be given as a command-line flag or an environment
//! variable; flags win.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use axum::http::{HeaderValue, Method, header};
use clap::Parser;
use thiserror::Error;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::knowledge::{KnowledgeBase, KnowledgeError};

/// Errors from turning configuration into runtime values.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A CORS origin is not a valid header value.
    #[error("invalid CORS origin {0:?}")]
    InvalidOrigin(String),

    /// The knowledge file could not be loaded.
    #[error("failed to load knowledge file {}: {source}", path.display())]
    Knowledge {
        path: PathBuf,
        #[source]
        source: KnowledgeError,
    },
}

/// Healthcare assistant API server.
#[derive(Debug, Clone, Parser)]
#[command(name = "healthcare-assistant", version, about)]
pub struct ServerConfig {
    /// Address to bind.
    #[arg(long, env = "HEALTHCARE_HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port to listen on.
    #[arg(long, env = "HEALTHCARE_PORT", default_value_t = 8000)]
    pub port: u16,

    /// JSON file with disease entries; the built-in table is used if unset.
    #[arg(long, env = "HEALTHCARE_KNOWLEDGE_FILE")]
    pub knowledge_file: Option<PathBuf>,

    /// Allowed CORS origins. Any origin is allowed when none are given.
    #[arg(
        long = "cors-origin",
        env = "HEALTHCARE_CORS_ORIGINS",
        value_delimiter = ','
    )]
    pub cors_origins: Vec<String>,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Loads the configured knowledge base, or the built-in one.
    pub fn knowledge_base(&self) -> Result<KnowledgeBase, ConfigError> {
        match &self.knowledge_file {
            Some(path) => KnowledgeBase::load(path).map_err(|source| ConfigError::Knowledge {
                path: path.clone(),
                source,
            }),
            None => Ok(KnowledgeBase::builtin()),
        }
    }

    /// Builds the CORS layer for the configured origins.
    pub fn cors_layer(&self) -> Result<CorsLayer, ConfigError> {
        let layer = CorsLayer::new()
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

        let origins: Vec<&str> = self
            .cors_origins
            .iter()
            .map(|o| o.trim())
            .filter(|o| !o.is_empty())
            .collect();
        if origins.is_empty() {
            return Ok(layer.allow_origin(Any));
        }

        let origins = origins
            .into_iter()
            .map(|o| HeaderValue::from_str(o).map_err(|_| ConfigError::InvalidOrigin(o.to_string())))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(layer.allow_origin(AllowOrigin::list(origins)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    const ENV_VARS: [&str; 4] = [
        "HEALTHCARE_HOST",
        "HEALTHCARE_PORT",
        "HEALTHCARE_KNOWLEDGE_FILE",
        "HEALTHCARE_CORS_ORIGINS",
    ];

    /// Sets the given variables for the duration of `f`, then removes every
    /// `HEALTHCARE_*` variable. Callers must be `#[serial]`.
    fn with_env<T>(vars: &[(&str, &str)], f: impl FnOnce() -> T) -> T {
        for (key, value) in vars {
            // SAFETY: config tests are serialized, so no other test thread
            // reads or writes the environment concurrently.
            unsafe { std::env::set_var(key, value) };
        }
        let result = f();
        for key in ENV_VARS {
            // SAFETY: as above.
            unsafe { std::env::remove_var(key) };
        }
        result
    }

    fn parse(args: &[&str]) -> ServerConfig {
        let argv = std::iter::once("healthcare-assistant").chain(args.iter().copied());
        ServerConfig::try_parse_from(argv).unwrap()
    }

    #[test]
    #[serial]
    fn defaults() {
        let config = parse(&[]);
        assert_eq!(config.socket_addr(), "0.0.0.0:8000".parse::<SocketAddr>().unwrap());
        assert!(config.knowledge_file.is_none());
        assert!(config.cors_origins.is_empty());
    }

    #[test]
    #[serial]
    fn flags_override_defaults() {
        let config = parse(&["--host", "127.0.0.1", "--port", "9000"]);
        assert_eq!(config.socket_addr(), "127.0.0.1:9000".parse::<SocketAddr>().unwrap());
    }

    #[test]
    #[serial]
    fn cors_origins_split_on_commas() {
        let config = parse(&["--cors-origin", "http://localhost:5173,http://localhost:3000"]);
        assert_eq!(
            config.cors_origins,
            vec!["http://localhost:5173", "http://localhost:3000"]
        );
        assert!(config.cors_layer().is_ok());
    }

    #[test]
    #[serial]
    fn invalid_port_is_rejected() {
        let argv = ["healthcare-assistant", "--port", "not-a-port"];
        assert!(ServerConfig::try_parse_from(argv).is_err());
    }

    #[test]
    #[serial]
    fn invalid_cors_origin_is_an_error() {
        let config = parse(&["--cors-origin", "http://bad\norigin"]);
        assert!(matches!(
            config.cors_layer(),
            Err(ConfigError::InvalidOrigin(_))
        ));
    }

    #[test]
    #[serial]
    fn builtin_knowledge_without_file() {
        let config = parse(&[]);
        assert_eq!(config.knowledge_base().unwrap(), KnowledgeBase::builtin());
    }

    #[test]
    #[serial]
    fn knowledge_file_is_loaded() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"entries":[{{"keyword":"gout","info":"**Gout**"}}],"fallback":"fb"}}"#
        )
        .unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let config = parse(&["--knowledge-file", &path]);
        let kb = config.knowledge_base().unwrap();
        assert_eq!(kb.entries()[0].keyword, "gout");
    }

    #[test]
    #[serial]
    fn bad_knowledge_file_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        let config = parse(&["--knowledge-file", missing.to_str().unwrap()]);

        let err = config.knowledge_base().unwrap_err();
        assert!(err.to_string().contains("missing.json"));
    }

    #[test]
    #[serial]
    fn environment_fills_unset_flags() {
        let config = with_env(
            &[
                ("HEALTHCARE_HOST", "127.0.0.1"),
                ("HEALTHCARE_PORT", "8123"),
                (
                    "HEALTHCARE_CORS_ORIGINS",
                    "http://localhost:5173,http://localhost:3000",
                ),
            ],
            || parse(&[]),
        );

        assert_eq!(
            config.socket_addr(),
            "127.0.0.1:8123".parse::<SocketAddr>().unwrap()
        );
        assert_eq!(
            config.cors_origins,
            vec!["http://localhost:5173", "http://localhost:3000"]
        );
    }

    #[test]
    #[serial]
    fn flags_win_over_environment() {
        let config = with_env(&[("HEALTHCARE_PORT", "8123")], || {
            parse(&["--port", "9001"])
        });
        assert_eq!(config.port, 9001);
    }

    #[test]
    #[serial]
    fn invalid_port_in_environment_is_rejected() {
        let result = with_env(&[("HEALTHCARE_PORT", "eighty")], || {
            ServerConfig::try_parse_from(["healthcare-assistant"])
        });
        assert!(result.is_err());
    }
}
