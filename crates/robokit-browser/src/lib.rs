//! # robokit-browser
//!
//! Chrome session configuration for Salesforce-style test suites.
//!
//! The crate assembles WebDriver capabilities from a [`ChromeConfig`] (fixed
//! flag list, download preferences, platform-conditional sandbox flag),
//! manages a chromedriver child process, and opens a browser session through
//! `fantoccini`, navigated to the login URL and maximized.
//!
//! All substantive browser-protocol work is delegated to chromedriver and the
//! WebDriver client; this crate is configuration glue.
//!
//! ## Example
//!
//! ```no_run
//! use robokit_browser::{open_chrome, ChromeConfig};
//!
//! # async fn run() -> Result<(), robokit_browser::BrowserError> {
//! let config = ChromeConfig::new("/tmp/downloads", "https://login.salesforce.com")
//!     .with_org_domain("mycompany");
//! let session = open_chrome(&config).await?;
//! // ... drive session.client() ...
//! session.close().await?;
//! # Ok(())
//! # }
//! ```

pub mod capabilities;
pub mod config;
pub mod driver;
pub mod error;
pub mod session;

// Re-exports for convenience
pub use capabilities::{append_platform_args, chrome_args, chrome_capabilities, download_prefs};
pub use config::ChromeConfig;
pub use driver::ChromeDriver;
pub use error::BrowserError;
pub use session::{open_chrome, ChromeSession};
