//! Browser session opening

use fantoccini::{Client, ClientBuilder};
use serde_json::{Map, Value};
use tracing::info;

use crate::capabilities::chrome_capabilities;
use crate::config::ChromeConfig;
use crate::driver::ChromeDriver;
use crate::error::BrowserError;

/// An open Chrome session plus the driver process backing it
///
/// Keeps the capabilities the session was opened with so tests and callers
/// can inspect the effective configuration.
pub struct ChromeSession {
    client: Client,
    capabilities: Map<String, Value>,
    driver: ChromeDriver,
}

impl ChromeSession {
    /// The connected WebDriver client
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// The capabilities the session was opened with
    pub fn capabilities(&self) -> &Map<String, Value> {
        &self.capabilities
    }

    /// Close the WebDriver session and kill the driver process
    pub async fn close(self) -> Result<(), BrowserError> {
        self.client.close().await?;
        self.driver.shutdown().await;
        Ok(())
    }
}

/// Open a Chrome session per the configuration
///
/// Assembles capabilities, starts chromedriver, connects a client, navigates
/// to the configured login URL, and maximizes the window. Failures from the
/// driver and client layers propagate unchanged.
pub async fn open_chrome(config: &ChromeConfig) -> Result<ChromeSession, BrowserError> {
    let capabilities = chrome_capabilities(config);
    let driver = ChromeDriver::start(config).await?;

    let client = ClientBuilder::native()
        .capabilities(capabilities.clone())
        .connect(&driver.url())
        .await?;

    info!(url = %config.login_url, "Opening browser session");
    client.goto(&config.login_url).await?;
    client.maximize_window().await?;

    Ok(ChromeSession {
        client,
        capabilities,
        driver,
    })
}
