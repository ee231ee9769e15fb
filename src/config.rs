use std::env;

use crate::error::{ImagineError, Result};

pub const DEFAULT_BASE_URL: &str = "https://api.vyro.ai/v1/imagine/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 180;

#[derive(Debug, Clone)]
pub struct ImagineConfig {
    pub token: Option<String>,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for ImagineConfig {
    fn default() -> Self {
        ImagineConfig {
            token: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ImagineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads `IMAGINE_API_TOKEN`, `IMAGINE_BASE_URL` and `IMAGINE_TIMEOUT_SECS`.
    /// Unset or unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        let token = env::var("IMAGINE_API_TOKEN").ok().filter(|t| !t.is_empty());
        let base_url = env::var("IMAGINE_BASE_URL")
            .ok()
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let timeout_secs = env::var("IMAGINE_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        ImagineConfig {
            token,
            base_url,
            timeout_secs,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    pub fn validate(&self) -> Result<()> {
        match &self.token {
            None => return Err(ImagineError::ConfigError("API token is required".into())),
            Some(token) if token.trim().is_empty() => {
                return Err(ImagineError::ConfigError("API token is empty".into()))
            }
            Some(_) => {}
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ImagineError::ConfigError(format!(
                "Base URL must be http(s): {}",
                self.base_url
            )));
        }
        if self.timeout_secs == 0 {
            return Err(ImagineError::ConfigError(
                "Timeout must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_the_public_api() {
        let config = ImagineConfig::new();
        assert_eq!(config.base_url, "https://api.vyro.ai/v1/imagine/api");
        assert_eq!(config.timeout_secs, 180);
        assert!(config.token.is_none());
    }

    #[test]
    fn validate_requires_a_token() {
        assert!(matches!(
            ImagineConfig::new().validate(),
            Err(ImagineError::ConfigError(_))
        ));
        assert!(ImagineConfig::new().with_token("secret").validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_values() {
        let config = ImagineConfig::new()
            .with_token("secret")
            .with_base_url("ftp://example.com");
        assert!(config.validate().is_err());

        let config = ImagineConfig::new().with_token("secret").with_timeout_secs(0);
        assert!(config.validate().is_err());

        let config = ImagineConfig::new().with_token("   ");
        assert!(config.validate().is_err());
    }
}
