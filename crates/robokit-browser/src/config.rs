//! Chrome session configuration

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Configuration for a Chrome session against the application under test.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChromeConfig {
    /// Full path where the browser should place downloaded files.
    pub download_dir: String,

    /// Login URL the session navigates to once open
    /// (e.g. "https://login.salesforce.com").
    pub login_url: String,

    /// Org domain (e.g. "mycompany") for the insecure-origin allowance on
    /// `https://{org}.file.force.com`. Omitted: no allowance flag.
    #[serde(default)]
    pub org_domain: Option<String>,

    /// Run the browser in headless mode (default: true).
    #[serde(default = "default_headless")]
    pub headless: bool,

    /// Port the managed chromedriver listens on (default: 9515).
    #[serde(default = "default_driver_port")]
    pub driver_port: u16,

    /// Explicit chromedriver binary. Unset: resolved from the CHROMEDRIVER
    /// environment variable, well-known locations, then PATH.
    #[serde(default)]
    pub driver_path: Option<PathBuf>,
}

fn default_headless() -> bool {
    true
}

fn default_driver_port() -> u16 {
    9515
}

impl ChromeConfig {
    /// Configuration with the default headless mode and driver port
    pub fn new(download_dir: impl Into<String>, login_url: impl Into<String>) -> Self {
        Self {
            download_dir: download_dir.into(),
            login_url: login_url.into(),
            org_domain: None,
            headless: default_headless(),
            driver_port: default_driver_port(),
            driver_path: None,
        }
    }

    /// Set the org domain for the insecure-origin allowance
    pub fn with_org_domain(mut self, org_domain: impl Into<String>) -> Self {
        self.org_domain = Some(org_domain.into());
        self
    }

    /// Toggle headless mode
    pub fn with_headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    /// WebDriver endpoint of the managed driver
    pub fn driver_url(&self) -> String {
        format!("http://localhost:{}", self.driver_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = ChromeConfig::new("/tmp/dl", "https://login.salesforce.com");
        assert!(config.headless);
        assert_eq!(config.driver_port, 9515);
        assert_eq!(config.org_domain, None);
        assert_eq!(config.driver_url(), "http://localhost:9515");
    }

    #[test]
    fn test_deserialize_fills_defaults() {
        let config: ChromeConfig = serde_json::from_str(
            r#"{"download_dir": "/tmp/dl", "login_url": "https://test.salesforce.com"}"#,
        )
        .unwrap();
        assert!(config.headless);
        assert_eq!(config.driver_port, 9515);
        assert_eq!(config.driver_path, None);
    }

    #[test]
    fn test_serde_roundtrip() {
        let config = ChromeConfig::new("/tmp/dl", "https://login.salesforce.com")
            .with_org_domain("acme")
            .with_headless(false);
        let json = serde_json::to_string(&config).unwrap();
        let back: ChromeConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.org_domain.as_deref(), Some("acme"));
        assert!(!back.headless);
    }
}
