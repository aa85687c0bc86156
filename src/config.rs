use serde::Deserialize;
use std::path::PathBuf;

pub const DEFAULT_JWT_SECRET: &str = "mock-zoominfo-secret-key";
pub const DEFAULT_DOWNLOAD_BASE_URL: &str = "https://api.zoominfo.com/download";
/// Upper bound for `BULK_ETA_SECS`: one year.
pub const MAX_BULK_ETA_SECS: i64 = 31_536_000;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub port: u16,
    pub jwt_secret: String,
    /// Lifetime of issued bearer tokens, in seconds.
    pub token_ttl_secs: u64,
    /// Offset applied to `estimatedCompletionTime` on bulk submit.
    pub bulk_eta_secs: i64,
    pub download_base_url: String,
    /// Directory with `companies.json` / `contacts.json` replacing the built-in catalog.
    pub catalog_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            jwt_secret: DEFAULT_JWT_SECRET.to_string(),
            token_ttl_secs: 3600,
            bulk_eta_secs: 300,
            download_base_url: DEFAULT_DOWNLOAD_BASE_URL.to_string(),
            catalog_dir: None,
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self::from_lookup(|key| std::env::var(key).ok())?;

        // Log successful configuration load (without sensitive values)
        tracing::info!("Configuration loaded successfully");
        if config.jwt_secret == DEFAULT_JWT_SECRET {
            tracing::warn!("JWT_SECRET not set, signing tokens with the built-in mock secret");
        }
        tracing::debug!("Token TTL: {}s", config.token_ttl_secs);
        tracing::debug!("Bulk ETA: {}s", config.bulk_eta_secs);
        tracing::debug!("Download base URL: {}", config.download_base_url);
        if let Some(ref dir) = config.catalog_dir {
            tracing::info!("Catalog directory configured: {}", dir.display());
        }
        tracing::debug!("Server Port: {}", config.port);

        Ok(config)
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let config = Self {
            port: get("PORT")
                .unwrap_or_else(|| "3000".to_string())
                .parse()
                .ok()
                .filter(|port: &u16| *port != 0)
                .ok_or_else(|| anyhow::anyhow!("PORT must be a valid number between 1-65535"))?,
            jwt_secret: match get("JWT_SECRET") {
                Some(secret) if secret.trim().is_empty() => {
                    anyhow::bail!("JWT_SECRET cannot be empty")
                }
                Some(secret) => secret,
                None => DEFAULT_JWT_SECRET.to_string(),
            },
            token_ttl_secs: get("TOKEN_TTL_SECS")
                .unwrap_or_else(|| "3600".to_string())
                .parse()
                .ok()
                .filter(|ttl: &u64| *ttl > 0)
                .ok_or_else(|| anyhow::anyhow!("TOKEN_TTL_SECS must be a positive integer"))?,
            bulk_eta_secs: get("BULK_ETA_SECS")
                .unwrap_or_else(|| "300".to_string())
                .parse()
                .ok()
                .filter(|eta: &i64| (0..=MAX_BULK_ETA_SECS).contains(eta))
                .ok_or_else(|| {
                    anyhow::anyhow!(
                        "BULK_ETA_SECS must be an integer between 0 and {}",
                        MAX_BULK_ETA_SECS
                    )
                })?,
            download_base_url: get("DOWNLOAD_BASE_URL")
                .unwrap_or_else(|| DEFAULT_DOWNLOAD_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            catalog_dir: get("CATALOG_DIR")
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from),
        };

        if !config.download_base_url.starts_with("http://")
            && !config.download_base_url.starts_with("https://")
        {
            anyhow::bail!("DOWNLOAD_BASE_URL must start with http:// or https://");
        }

        Ok(config)
    }
}
