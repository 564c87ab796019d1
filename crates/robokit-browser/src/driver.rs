//! chromedriver process management

use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;

use tokio::net::TcpStream;
use tokio::process::{Child, Command};
use tracing::{debug, info};

use crate::config::ChromeConfig;
use crate::error::BrowserError;

const READY_POLL_INTERVAL: Duration = Duration::from_millis(200);
const READY_MAX_ATTEMPTS: u32 = 30;

/// A chromedriver child process bound to a port
///
/// The process is killed when the value is dropped or shut down explicitly.
#[derive(Debug)]
pub struct ChromeDriver {
    child: Child,
    port: u16,
}

impl ChromeDriver {
    /// Resolve the chromedriver binary to launch
    ///
    /// Order: explicit `driver_path` from the configuration, the
    /// CHROMEDRIVER environment variable, well-known install locations,
    /// then a PATH search.
    pub fn resolve_binary(config: &ChromeConfig) -> Option<PathBuf> {
        if let Some(path) = &config.driver_path {
            return Some(path.clone());
        }
        if let Ok(path) = std::env::var("CHROMEDRIVER") {
            return Some(PathBuf::from(path));
        }

        #[cfg(target_os = "linux")]
        {
            let paths = [
                "/usr/bin/chromedriver",
                "/usr/local/bin/chromedriver",
                "/usr/lib/chromium-browser/chromedriver",
                "/snap/bin/chromium.chromedriver",
            ];
            for path in &paths {
                let p = PathBuf::from(path);
                if p.exists() {
                    return Some(p);
                }
            }
        }

        #[cfg(target_os = "macos")]
        {
            let paths = [
                "/usr/local/bin/chromedriver",
                "/opt/homebrew/bin/chromedriver",
            ];
            for path in &paths {
                let p = PathBuf::from(path);
                if p.exists() {
                    return Some(p);
                }
            }
        }

        let binary = if cfg!(windows) {
            "chromedriver.exe"
        } else {
            "chromedriver"
        };
        if let Some(path_var) = std::env::var_os("PATH") {
            for dir in std::env::split_paths(&path_var) {
                let candidate = dir.join(binary);
                if candidate.is_file() {
                    return Some(candidate);
                }
            }
        }

        None
    }

    /// Launch chromedriver on the configured port and wait until it accepts
    /// connections
    pub async fn start(config: &ChromeConfig) -> Result<Self, BrowserError> {
        let binary = Self::resolve_binary(config).ok_or(BrowserError::DriverNotFound)?;

        info!(
            "Launching chromedriver at {} on port {}",
            binary.display(),
            config.driver_port
        );

        let child = Command::new(&binary)
            .arg(format!("--port={}", config.driver_port))
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| BrowserError::LaunchFailed(e.to_string()))?;

        let driver = Self {
            child,
            port: config.driver_port,
        };
        driver.wait_ready().await?;
        Ok(driver)
    }

    async fn wait_ready(&self) -> Result<(), BrowserError> {
        let addr = format!("127.0.0.1:{}", self.port);
        let mut attempts = 0;
        while attempts < READY_MAX_ATTEMPTS {
            tokio::time::sleep(READY_POLL_INTERVAL).await;
            if TcpStream::connect(&addr).await.is_ok() {
                debug!("chromedriver accepting connections on {}", addr);
                return Ok(());
            }
            attempts += 1;
        }
        Err(BrowserError::DriverTimeout(self.port))
    }

    /// WebDriver endpoint of the running driver
    pub fn url(&self) -> String {
        format!("http://localhost:{}", self.port)
    }

    /// Kill the driver process
    pub async fn shutdown(mut self) {
        info!("Shutting down chromedriver on port {}", self.port);
        let _ = self.child.kill().await;
    }
}
