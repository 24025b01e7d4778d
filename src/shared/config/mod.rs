//! Application configuration module
//!
//! Configuration is read from the environment (optionally seeded from a
//! `.env` file by the binary) into a typed [`AppConfig`]. Tests and
//! embedders build one directly with [`AppConfig::builder`].

use thiserror::Error;

/// Production frontend allowed by CORS when nothing else is configured
pub const DEFAULT_FRONTEND_URL: &str = "https://hth-5-frontend.vercel.app";

/// Default listening port
pub const DEFAULT_PORT: u16 = 5555;

/// Default request body limit for multipart uploads (8 MiB)
pub const DEFAULT_UPLOAD_LIMIT_BYTES: usize = 8 * 1024 * 1024;

/// Development fallback used when `JWT_SECRET` is missing
pub const DEV_JWT_SECRET: &str = "hth-dev-secret-change-in-production";

/// Cloudinary unsigned-upload settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloudinaryConfig {
    pub cloud_name: String,
    pub upload_preset: String,
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Port the HTTP server binds on
    pub port: u16,
    /// PostgreSQL connection string (database features disabled when `None`)
    pub database_url: Option<String>,
    /// HMAC secret for session tokens
    pub jwt_secret: String,
    /// Origins accepted by CORS
    pub allowed_origins: Vec<String>,
    /// Image host settings (uploads ignored when `None`)
    pub cloudinary: Option<CloudinaryConfig>,
    /// Maximum multipart request size
    pub upload_limit_bytes: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            database_url: None,
            jwt_secret: DEV_JWT_SECRET.to_string(),
            allowed_origins: default_origins(DEFAULT_FRONTEND_URL),
            cloudinary: None,
            upload_limit_bytes: DEFAULT_UPLOAD_LIMIT_BYTES,
        }
    }
}

/// Frontend URL plus the local dev ports
fn default_origins(frontend_url: &str) -> Vec<String> {
    let mut origins = vec![frontend_url.to_string()];
    origins.extend((5173..=5178).map(|port| format!("http://localhost:{}", port)));
    origins
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Load configuration from environment variables
    ///
    /// Missing optional values fall back to defaults; malformed values are
    /// reported as errors rather than silently replaced.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = AppConfig::builder();

        if let Some(port) = lookup("PORT") {
            let port = port
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidValue { key: "PORT", value: port })?;
            builder = builder.port(port);
        }

        if let Some(url) = lookup("DATABASE_URL").filter(|v| !v.trim().is_empty()) {
            builder = builder.database_url(url);
        }

        match lookup("JWT_SECRET") {
            Some(secret) => builder = builder.jwt_secret(secret),
            None => tracing::warn!("JWT_SECRET not set, using development secret"),
        }

        let frontend = lookup("FRONTEND_URL").unwrap_or_else(|| DEFAULT_FRONTEND_URL.to_string());
        let origins = match lookup("ALLOWED_ORIGINS") {
            Some(list) => list
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            None => default_origins(&frontend),
        };
        builder = builder.allowed_origins(origins);

        if let (Some(cloud_name), Some(upload_preset)) =
            (lookup("CLOUDINARY_CLOUD_NAME"), lookup("CLOUDINARY_UPLOAD_PRESET"))
        {
            builder = builder.cloudinary(CloudinaryConfig {
                cloud_name,
                upload_preset,
            });
        }

        if let Some(limit) = lookup("UPLOAD_LIMIT_BYTES") {
            let limit = limit
                .trim()
                .parse::<usize>()
                .map_err(|_| ConfigError::InvalidValue { key: "UPLOAD_LIMIT_BYTES", value: limit })?;
            builder = builder.upload_limit_bytes(limit);
        }

        builder.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::InvalidValue {
                key: "PORT",
                value: "0".to_string(),
            });
        }
        if self.jwt_secret.is_empty() {
            return Err(ConfigError::MissingValue("JWT_SECRET"));
        }
        if let Some(origin) = self
            .allowed_origins
            .iter()
            .find(|o| !(o.starts_with("http://") || o.starts_with("https://")))
        {
            return Err(ConfigError::InvalidUrl(origin.clone()));
        }
        Ok(())
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    port: Option<u16>,
    database_url: Option<String>,
    jwt_secret: Option<String>,
    allowed_origins: Option<Vec<String>>,
    cloudinary: Option<CloudinaryConfig>,
    upload_limit_bytes: Option<usize>,
}

impl AppConfigBuilder {
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(secret.into());
        self
    }

    pub fn allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.allowed_origins = Some(origins);
        self
    }

    pub fn cloudinary(mut self, cloudinary: CloudinaryConfig) -> Self {
        self.cloudinary = Some(cloudinary);
        self
    }

    pub fn upload_limit_bytes(mut self, limit: usize) -> Self {
        self.upload_limit_bytes = Some(limit);
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let defaults = AppConfig::default();
        let config = AppConfig {
            port: self.port.unwrap_or(defaults.port),
            database_url: self.database_url,
            jwt_secret: self.jwt_secret.unwrap_or(defaults.jwt_secret),
            allowed_origins: self.allowed_origins.unwrap_or(defaults.allowed_origins),
            cloudinary: self.cloudinary,
            upload_limit_bytes: self.upload_limit_bytes.unwrap_or(defaults.upload_limit_bytes),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}
