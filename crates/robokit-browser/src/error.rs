//! Error types for robokit-browser

use thiserror::Error;

/// Errors that can occur while configuring or opening a browser session
#[derive(Debug, Error)]
pub enum BrowserError {
    /// No chromedriver binary could be resolved
    #[error("chromedriver not found; set `driver_path`, the CHROMEDRIVER environment variable, or put it on PATH")]
    DriverNotFound,

    /// chromedriver could not be spawned
    #[error("failed to launch chromedriver: {0}")]
    LaunchFailed(String),

    /// chromedriver never started accepting connections
    #[error("chromedriver did not become ready on port {0}")]
    DriverTimeout(u16),

    /// The WebDriver session could not be established
    #[error("webdriver session error: {0}")]
    NewSession(#[from] fantoccini::error::NewSessionError),

    /// A WebDriver command failed
    #[error("webdriver command error: {0}")]
    Command(#[from] fantoccini::error::CmdError),

    /// Filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
