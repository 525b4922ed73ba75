//! Configuration loading with env-var overrides.
//!
//! Reads `config/default.toml` relative to the current working directory,
//! then applies `BOOKSHELF_BIND` and `BOOKSHELF_LOG_LEVEL` env overrides.
//! A missing file at the default path falls back to built-in defaults; an
//! unreadable or unparsable file is an error.

use std::{env, fs, path::Path};

use serde::Deserialize;

use crate::error::AppError;

/// HTTP server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Socket address to bind the HTTP listener to.
    pub bind: String,
    pub log_level: String,
}

/// Fully-resolved service configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    /// Whether the store starts with the two demo records.
    pub seed: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                bind: default_bind(),
                log_level: default_log_level(),
            },
            seed: true,
        }
    }
}

/// Raw TOML shape — `serde` target before resolution.
#[derive(Deserialize, Default)]
struct RawConfig {
    #[serde(default)]
    server: RawServer,
    #[serde(default)]
    store: RawStore,
}

#[derive(Deserialize)]
struct RawServer {
    #[serde(default = "default_bind")]
    bind: String,
    #[serde(default = "default_log_level")]
    log_level: String,
}

impl Default for RawServer {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            log_level: default_log_level(),
        }
    }
}

#[derive(Deserialize)]
struct RawStore {
    /// Defaults to `true`: the demo records are part of the contract.
    #[serde(default = "default_true")]
    seed: bool,
}

impl Default for RawStore {
    fn default() -> Self {
        Self { seed: true }
    }
}

fn default_bind() -> String {
    "127.0.0.1:8080".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

/// Load config from `config/default.toml`, then apply env-var overrides.
pub fn load() -> Result<Config, AppError> {
    let bind_override = env::var("BOOKSHELF_BIND").ok();
    let log_level_override = env::var("BOOKSHELF_LOG_LEVEL").ok();
    load_from(
        Path::new("config/default.toml"),
        bind_override.as_deref(),
        log_level_override.as_deref(),
    )
}

/// Internal loader — accepts an explicit path and optional overrides.
/// Tests pass overrides directly instead of mutating env vars.
pub fn load_from(
    path: &Path,
    bind_override: Option<&str>,
    log_level_override: Option<&str>,
) -> Result<Config, AppError> {
    let parsed: RawConfig = match fs::read_to_string(path) {
        Ok(raw) => toml::from_str(&raw)
            .map_err(|e| AppError::Config(format!("parse error in {}: {e}", path.display())))?,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => RawConfig::default(),
        Err(e) => {
            return Err(AppError::Config(format!(
                "cannot read {}: {e}",
                path.display()
            )));
        }
    };

    let bind = bind_override.unwrap_or(&parsed.server.bind).to_string();
    let log_level = log_level_override
        .unwrap_or(&parsed.server.log_level)
        .to_string();

    Ok(Config {
        server: ServerConfig { bind, log_level },
        seed: parsed.store.seed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const MINIMAL_TOML: &str = r#"
[server]
bind = "0.0.0.0:9000"
log_level = "debug"

[store]
seed = false
"#;

    fn write_toml(content: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(content.as_bytes()).unwrap();
        f
    }

    #[test]
    fn parse_basic_config() {
        let f = write_toml(MINIMAL_TOML);
        let cfg = load_from(f.path(), None, None).unwrap();
        assert_eq!(cfg.server.bind, "0.0.0.0:9000");
        assert_eq!(cfg.server.log_level, "debug");
        assert!(!cfg.seed);
    }

    #[test]
    fn empty_file_uses_defaults() {
        let f = write_toml("");
        let cfg = load_from(f.path(), None, None).unwrap();
        assert_eq!(cfg.server.bind, "127.0.0.1:8080");
        assert_eq!(cfg.server.log_level, "info");
        assert!(cfg.seed);
    }

    #[test]
    fn missing_file_uses_defaults() {
        let cfg = load_from(Path::new("/nonexistent/config.toml"), None, None).unwrap();
        assert_eq!(cfg.server.bind, "127.0.0.1:8080");
        assert!(cfg.seed);
    }

    #[test]
    fn malformed_file_errors() {
        let f = write_toml("[server\nbind = ");
        let result = load_from(f.path(), None, None);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("config error"));
    }

    #[test]
    fn env_bind_override() {
        let f = write_toml(MINIMAL_TOML);
        let cfg = load_from(f.path(), Some("127.0.0.1:7777"), None).unwrap();
        assert_eq!(cfg.server.bind, "127.0.0.1:7777");
    }

    #[test]
    fn env_log_level_override() {
        let f = write_toml(MINIMAL_TOML);
        let cfg = load_from(f.path(), None, Some("trace")).unwrap();
        assert_eq!(cfg.server.log_level, "trace");
    }
}
