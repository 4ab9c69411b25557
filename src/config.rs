use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;

use crate::handler::encoding::CompressionAlgorithm;
use crate::http::emitter::EmitStrategy;

static CONFIG: OnceCell<ServerConfig> = OnceCell::new();

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub address: IpAddr,
    pub port: u16,

    /// How write failures are propagated while a response is on the wire.
    pub emit_strategy: EmitStrategy,
    pub compression: CompressionAlgorithm,

    /// File served as the response body; a generated welcome page when absent.
    pub document: Option<String>,

    #[serde(deserialize_with = "deserialize_duration")]
    pub write_timeout: Duration,

    pub server_name: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)),
            port: 8080,

            emit_strategy: EmitStrategy::FailFast,
            compression: CompressionAlgorithm::Identity,

            document: None,

            write_timeout: Duration::from_secs(5),

            server_name: "rustywire/0.1".to_string(),
        }
    }
}

impl ServerConfig {
    pub fn from_file(path: &str) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                eprintln!("Fail to read {}: {err}", path);
                eprintln!("Fall back to default config");
                return ServerConfig::default();
            }
        };

        match toml::from_str::<ServerConfig>(content.as_str()) {
            Ok(server_config) => server_config,
            Err(err) => {
                eprintln!("Fail to deserialize config file {}: {err}", path);
                eprintln!("Fall back to default config");
                ServerConfig::default()
            }
        }
    }
}

pub fn set_config(cfg: ServerConfig) {
    CONFIG.set(cfg).expect("Config already set");
}

/// Process-wide configuration, defaults when [`set_config`] was never called.
pub fn config() -> &'static ServerConfig {
    CONFIG.get_or_init(ServerConfig::default)
}

fn deserialize_duration<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let secs = f64::deserialize(deserializer)?;
    Ok(Duration::from_secs_f64(secs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_config_from_toml() {
        let doc = r#"
            address = "0.0.0.0"
            port = 9090
            emit_strategy = "latched"
            compression = "gzip"
            document = "./index.html"
            write_timeout = 2.5
            server_name = "unit-test/0"
        "#;

        let cfg: ServerConfig = toml::from_str(doc).unwrap();
        assert_eq!(cfg.address, IpAddr::V4(Ipv4Addr::new(0, 0, 0, 0)));
        assert_eq!(cfg.port, 9090);
        assert_eq!(cfg.emit_strategy, EmitStrategy::Latched);
        assert_eq!(cfg.compression, CompressionAlgorithm::Gzip);
        assert_eq!(cfg.document.as_deref(), Some("./index.html"));
        assert_eq!(cfg.write_timeout, Duration::from_millis(2500));
        assert_eq!(cfg.server_name, "unit-test/0");
    }

    #[test]
    fn test_document_is_optional() {
        let doc = r#"
            address = "127.0.0.1"
            port = 8080
            emit_strategy = "fail-fast"
            compression = "identity"
            write_timeout = 5.0
            server_name = "unit-test/0"
        "#;

        let cfg: ServerConfig = toml::from_str(doc).unwrap();
        assert_eq!(cfg.document, None);
    }

    #[test]
    fn test_missing_file_falls_back_to_default() {
        let cfg = ServerConfig::from_file("/nonexistent/rustywire.toml");
        assert_eq!(cfg.port, ServerConfig::default().port);
        assert_eq!(cfg.server_name, ServerConfig::default().server_name);
    }
}
