use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub upstream: UpstreamConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory with the built front end (trunk `dist`)
    pub static_dir: String,
    pub max_upload_mb: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            static_dir: "dist".to_string(),
            max_upload_mb: 50,
        }
    }
}

impl ServerConfig {
    /// Bind target for `TcpListener::bind`; `host` may be a name like "localhost"
    pub fn bind_target(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_mb * 1024 * 1024
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct UpstreamConfig {
    /// ingestor-service base URL, exposes POST /ingest
    pub ingestor_url: String,
    /// query-service base URL, exposes POST /query
    pub query_url: String,
    pub timeout_secs: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            ingestor_url: "http://127.0.0.1:8001".to_string(),
            query_url: "http://127.0.0.1:8002".to_string(),
            timeout_secs: 120,
        }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000
static_dir = "dist"
max_upload_mb = 50

[upstream]
ingestor_url = "http://127.0.0.1:8001"
query_url = "http://127.0.0.1:8002"
timeout_secs = 120
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
///
/// Environment variables `RAG_INGESTOR_URL`, `RAG_QUERY_URL` and `RAG_PORT`
/// override the file in both cases.
pub fn load_config() -> anyhow::Result<Config> {
    let mut config = load_file_config()?;
    apply_env_overrides(&mut config, |key| std::env::var(key).ok())?;
    Ok(config)
}

fn load_file_config() -> anyhow::Result<Config> {
    // Try to find config.toml next to the executable
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                return Ok(config);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    // Fall back to default config
    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

fn apply_env_overrides<F>(config: &mut Config, lookup: F) -> anyhow::Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup("RAG_INGESTOR_URL") {
        config.upstream.ingestor_url = url;
    }
    if let Some(url) = lookup("RAG_QUERY_URL") {
        config.upstream.query_url = url;
    }
    if let Some(port) = lookup("RAG_PORT") {
        config.server.port = port
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid RAG_PORT '{}': {}", port, e))?;
    }
    Ok(())
}
