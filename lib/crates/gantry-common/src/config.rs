use serde::Deserialize;

/// Gantry server configuration, loaded from `GANTRY_*` environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Listen address (default: 0.0.0.0:8153)
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// Optional YAML file seeding the agent registry.
    #[serde(default)]
    pub agents_file: Option<String>,

    /// Administrator user names. Empty means security is disabled and
    /// every caller is treated as an administrator.
    #[serde(default)]
    pub admins: Vec<String>,

    /// URL prefix assets are served under.
    #[serde(default = "default_asset_prefix")]
    pub asset_prefix: String,

    /// Optional JSON manifest mapping logical asset names to fingerprinted ones.
    #[serde(default)]
    pub asset_manifest: Option<String>,

    /// Start the server in maintenance mode.
    #[serde(default)]
    pub maintenance_mode: bool,
}

fn default_listen_addr() -> String {
    "0.0.0.0:8153".to_string()
}

fn default_asset_prefix() -> String {
    "/assets".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            agents_file: None,
            admins: Vec::new(),
            asset_prefix: default_asset_prefix(),
            asset_manifest: None,
            maintenance_mode: false,
        }
    }
}
