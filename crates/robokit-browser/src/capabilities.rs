//! Chrome capability assembly
//!
//! Pure builders: no driver or browser interaction happens here, so the
//! assembled capabilities can be asserted on directly in tests.

use serde_json::{json, Map, Value};

use crate::config::ChromeConfig;

/// Command-line flags for the browser process
///
/// The fixed list mirrors what the application under test needs: quiet
/// logging, no extensions, and relaxed download handling so exported files
/// land in the configured directory without prompts. The insecure-origin
/// allowance is added only when an org domain is configured.
pub fn chrome_args(config: &ChromeConfig) -> Vec<String> {
    let mut args: Vec<String> = Vec::new();
    if config.headless {
        args.push("--headless=new".into());
    }
    args.push("--disable-gpu".into());
    args.push("--log-level=3".into());
    args.push("--disable-extensions".into());
    args.push("--disable-features=InsecureDownloadWarnings".into());
    args.push("--safebrowsing-disable-download-protection".into());
    args.push("--allow-running-insecure-content".into());
    args.push("--disable-dev-shm-usage".into());
    if let Some(org) = &config.org_domain {
        args.push(format!(
            "--unsafely-treat-insecure-origin-as-secure=https://{org}.file.force.com"
        ));
    }
    append_platform_args(&mut args);
    args
}

/// Append platform-conditional flags to an argument list
///
/// On Linux the browser refuses to start under common CI/container users
/// unless sandboxing is off, so `--no-sandbox` is appended there. The append
/// is skipped when the flag is already present, so the function can be
/// applied to any argument list, including one built by [`chrome_args`].
pub fn append_platform_args(args: &mut Vec<String>) {
    if cfg!(target_os = "linux") {
        let flag = "--no-sandbox";
        if !args.iter().any(|arg| arg == flag) {
            args.push(flag.to_string());
        }
    }
}

/// Browser preference map: download directory and prompt suppression
pub fn download_prefs(config: &ChromeConfig) -> Value {
    json!({
        "download.default_directory": config.download_dir,
        "download.prompt_for_download": false,
        "download.directory_upgrade": true,
        "plugins.always_open_pdf_externally": true,
        "safebrowsing.enabled": true,
        "profile.default_content_settings.popups": 0,
    })
}

/// Full WebDriver capabilities with flags and preferences under
/// `goog:chromeOptions`
pub fn chrome_capabilities(config: &ChromeConfig) -> Map<String, Value> {
    let mut caps = Map::new();
    caps.insert("browserName".to_string(), json!("chrome"));
    caps.insert(
        "goog:chromeOptions".to_string(),
        json!({
            "args": chrome_args(config),
            "prefs": download_prefs(config),
        }),
    );
    caps
}
