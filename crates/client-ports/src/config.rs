//! Client configuration shared between the runner, UI, and adapters.
//!
//! Loading from the environment lives in the adapters crate; this is just
//! the shape everyone agrees on.

use std::path::PathBuf;
use std::str::FromStr;

use url::Url;

/// Default backend address used when nothing is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8001";

/// Which layout chrome wraps the router.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShellKind {
    #[default]
    Desktop,
    Mobile,
}

impl FromStr for ShellKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "desktop" => Ok(Self::Desktop),
            "mobile" => Ok(Self::Mobile),
            other => Err(format!("unknown shell kind: {}", other)),
        }
    }
}

/// Everything the client needs to know about its environment.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Single base URL for every REST call
    pub api_base_url: Url,
    /// Base URL that server-relative image paths are resolved against
    pub asset_base_url: Url,
    pub shell: ShellKind,
    /// Reject blank names before submitting (off by default)
    pub strict_validation: bool,
    /// Override for the desktop storage directory
    pub storage_dir: Option<PathBuf>,
}

impl ClientConfig {
    pub fn new(api_base_url: Url) -> Self {
        Self {
            asset_base_url: api_base_url.clone(),
            api_base_url,
            shell: ShellKind::default(),
            strict_validation: false,
            storage_dir: None,
        }
    }

    /// Absolute URL for a server-relative image path.
    ///
    /// Paths are appended verbatim (not `Url::join`ed) so a base URL with a
    /// path prefix keeps it.
    pub fn asset_url(&self, image_path: &str) -> Option<String> {
        let path = image_path.trim();
        if path.is_empty() {
            return None;
        }
        let base = self.asset_base_url.as_str().trim_end_matches('/');
        if path.starts_with('/') {
            Some(format!("{}{}", base, path))
        } else {
            Some(format!("{}/{}", base, path))
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        // The constant is a valid absolute URL
        #[allow(clippy::unwrap_used)]
        let url = Url::parse(DEFAULT_API_BASE_URL).unwrap();
        Self::new(url)
    }
}
