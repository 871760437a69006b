//! Asset path resolution backed by a bundler manifest.
//!
//! The manifest is a flat JSON object from logical asset names to the
//! fingerprinted file names the bundler emitted, e.g.
//! `{"frameworks.js": "frameworks-3f9a1c.js"}`.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};

use crate::application::ports::AssetResolver;

#[derive(Debug, Clone)]
pub struct ManifestAssetResolver {
    prefix: String,
    manifest: HashMap<String, String>,
}

impl ManifestAssetResolver {
    /// A resolver with no manifest: every name maps to `<prefix>/<name>`.
    #[must_use]
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.trim_end_matches('/').to_string(),
            manifest: HashMap::new(),
        }
    }

    #[must_use]
    pub fn with_manifest(mut self, manifest: HashMap<String, String>) -> Self {
        self.manifest = manifest;
        self
    }

    /// Load the manifest JSON at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a JSON object
    /// of strings.
    pub fn from_file(prefix: &str, path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading asset manifest {}", path.display()))?;
        let manifest: HashMap<String, String> = serde_json::from_str(&content)
            .with_context(|| format!("parsing asset manifest {}", path.display()))?;
        tracing::debug!(path = %path.display(), entries = manifest.len(), "asset manifest loaded");
        Ok(Self::new(prefix).with_manifest(manifest))
    }
}

impl AssetResolver for ManifestAssetResolver {
    fn asset_path(&self, name: &str) -> String {
        let file = self.manifest.get(name).map_or(name, String::as_str);
        format!("{}/{}", self.prefix, file.trim_start_matches('/'))
    }
}
