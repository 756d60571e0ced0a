use askboard_errors::AppError;
use std::time::Duration;
use url::Url;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5500";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct BoardConfig {
    pub backend_url: Url,
    pub request_timeout: Duration,
    pub secure_cookies: bool,
}

impl BoardConfig {
    pub fn new(backend_url: &str) -> Result<Self, AppError> {
        Ok(Self {
            backend_url: parse_backend_url(backend_url)?,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            secure_cookies: false,
        })
    }

    /// Reads `QA_BACKEND_URL`, `QA_BACKEND_TIMEOUT_SECS` and `QA_SECURE_COOKIES`.
    pub fn from_env() -> Result<Self, AppError> {
        let backend_url =
            std::env::var("QA_BACKEND_URL").unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string());
        let mut config = Self::new(&backend_url)?;

        if let Ok(secs) = std::env::var("QA_BACKEND_TIMEOUT_SECS") {
            let secs: u64 = secs.trim().parse().map_err(|_| {
                AppError::Config(format!("QA_BACKEND_TIMEOUT_SECS is not a number: {}", secs))
            })?;
            config.request_timeout = Duration::from_secs(secs.max(1));
        }

        if let Ok(flag) = std::env::var("QA_SECURE_COOKIES") {
            config.secure_cookies = parse_flag(&flag);
        }

        Ok(config)
    }
}

fn parse_backend_url(raw: &str) -> Result<Url, AppError> {
    let url = Url::parse(raw.trim())
        .map_err(|e| AppError::Config(format!("QA_BACKEND_URL {:?}: {}", raw, e)))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(AppError::Config(format!(
            "QA_BACKEND_URL must be http or https, got {}",
            url.scheme()
        )));
    }
    if url.cannot_be_a_base() || url.host_str().is_none() {
        return Err(AppError::Config(format!("QA_BACKEND_URL has no host: {}", raw)));
    }

    Ok(url)
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
