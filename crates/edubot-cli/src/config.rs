//! `edubot.toml` loading.
//!
//! Every section is optional. A missing file means all defaults; provider
//! credentials absent from the file are taken from the environment.

use edubot_providers::ProvidersConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Default, Deserialize)]
pub struct EdubotConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub providers: ProvidersConfig,
    #[serde(default)]
    pub client: ClientConfig,
}

#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ClientConfig {
    /// Root URL of the EduBot server the `chat` command talks to.
    #[serde(default = "default_server_url")]
    pub server_url: String,
    /// Where transcripts are saved.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
    /// Model asked when `--model` is not given.
    #[serde(default = "default_model")]
    pub model: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            data_dir: default_data_dir(),
            poll_interval_secs: default_poll_interval_secs(),
            model: default_model(),
        }
    }
}

impl ClientConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs.max(1))
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    3000
}
fn default_server_url() -> String {
    "http://localhost:3000".to_string()
}
fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}
fn default_poll_interval_secs() -> u64 {
    12
}
fn default_model() -> String {
    "gemini".to_string()
}

impl EdubotConfig {
    /// Parses `text` and fills missing credentials through `env`.
    pub fn parse(text: &str, env: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut config: EdubotConfig = toml::from_str(text)?;
        config.providers = config.providers.with_env_keys(env);
        Ok(config)
    }

    /// Reads `path`, or falls back to defaults when it does not exist.
    pub async fn load(path: &Path) -> anyhow::Result<Self> {
        let text = match tokio::fs::read_to_string(path).await {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
            Err(e) => {
                return Err(anyhow::anyhow!(
                    "Failed to read config file '{}': {}",
                    path.display(),
                    e
                ))
            }
        };
        Self::parse(&text, |name| std::env::var(name).ok())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use edubot_core::ProviderId;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = EdubotConfig::parse("", no_env).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.client.server_url, "http://localhost:3000");
        assert_eq!(config.client.poll_interval(), Duration::from_secs(12));
        assert_eq!(config.providers.timeout_secs, 20);
        assert!(config.providers.api_key(ProviderId::Groq).is_none());
    }

    #[test]
    fn test_sections_override_defaults() {
        let text = r#"
            [server]
            port = 8080

            [providers]
            timeout_secs = 5

            [providers.claude]
            api_key = "from-file"
            model = "claude-3-5-sonnet-latest"

            [client]
            server_url = "http://edubot.internal:9000"
            poll_interval_secs = 0
        "#;
        let config = EdubotConfig::parse(text, no_env).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.providers.timeout_secs, 5);
        assert_eq!(
            config.providers.api_key(ProviderId::Claude).as_deref(),
            Some("from-file")
        );
        assert_eq!(config.providers.model(ProviderId::Claude), "claude-3-5-sonnet-latest");
        assert_eq!(config.client.server_url, "http://edubot.internal:9000");
        assert_eq!(config.client.poll_interval(), Duration::from_secs(1));
    }

    #[test]
    fn test_env_fills_only_missing_keys() {
        let text = "[providers.groq]\napi_key = \"file-key\"\n";
        let env = |name: &str| match name {
            "GROQ_API_KEY" => Some("env-groq".to_string()),
            "GEMINI_API_KEY" => Some("env-gemini".to_string()),
            _ => None,
        };
        let config = EdubotConfig::parse(text, env).unwrap();
        assert_eq!(config.providers.api_key(ProviderId::Groq).as_deref(), Some("file-key"));
        assert_eq!(
            config.providers.api_key(ProviderId::Gemini).as_deref(),
            Some("env-gemini")
        );
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(EdubotConfig::parse("[server\nport = 1", no_env).is_err());
    }

    #[tokio::test]
    async fn test_missing_file_means_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let config = EdubotConfig::load(&tmp.path().join("absent.toml"))
            .await
            .unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[tokio::test]
    async fn test_load_reads_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("edubot.toml");
        tokio::fs::write(&path, "[client]\nmodel = \"wikipedia\"\n")
            .await
            .unwrap();
        let config = EdubotConfig::load(&path).await.unwrap();
        assert_eq!(config.client.model, "wikipedia");
    }
}
