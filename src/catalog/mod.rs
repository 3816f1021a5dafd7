//! Download catalog model.
//!
//! The catalog is the ordered, static list of distributable artifacts shown
//! on the install page. It is created once at startup, either from the
//! built-in defaults or from a JSON file, and never mutated afterwards.

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::runtime::Runtime;

/// Operating system an artifact is built for
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Os {
    Windows,
    Mac,
    Linux,
}

/// One distributable artifact
///
/// `label` and `url` are opaque display strings; ranking only looks at
/// `os` and `priority`. Lower `priority` means more preferred within its
/// operating system (1 = primary, 2 = secondary, ...). Duplicate
/// `(os, priority)` pairs are not rejected; they tie and keep catalog order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DownloadLink {
    pub os: Os,
    pub label: String,
    pub url: String,
    pub priority: u32,
}

/// The ordered list of download links, as authored
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Catalog {
    pub links: Vec<DownloadLink>,
}

impl Catalog {
    /// The catalog shipped with the site: one Windows build, two macOS
    /// variants, one Linux AppImage.
    pub fn builtin() -> Self {
        const RELEASES: &str =
            "https://github.com/shorefront/shorefront-app/releases/latest/download";

        let link = |os, label: &str, file: &str, priority| DownloadLink {
            os,
            label: label.to_string(),
            url: format!("{}/{}", RELEASES, file),
            priority,
        };

        Self {
            links: vec![
                link(Os::Windows, "Windows", "shorefront-app-x64.exe", 1),
                link(Os::Mac, "macOS (Apple Silicon)", "shorefront-app-aarch64.dmg", 1),
                link(Os::Mac, "macOS (Intel)", "shorefront-app-x64.dmg", 2),
                link(Os::Linux, "Linux (AppImage)", "shorefront-app-amd64.AppImage", 1),
            ],
        }
    }

    /// Load a catalog from a JSON file
    pub fn load<R: Runtime>(runtime: &R, path: &Path) -> Result<Self> {
        if !runtime.exists(path) {
            bail!("catalog file not found: {}", path.display());
        }

        let contents = runtime
            .read_to_string(path)
            .with_context(|| format!("Failed to read catalog from {}", path.display()))?;

        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse catalog from {}", path.display()))
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}
