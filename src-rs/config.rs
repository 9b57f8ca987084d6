use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::catalog::{self, ProviderGroup};

/// Location of the backend the development proxy forwards to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub proxy: ProxyConfig,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            proxy: ProxyConfig::default(),
        }
    }
}

impl ServerConfig {
    pub fn api_proxy_target(&self) -> String {
        format!("http://{}:{}{}", self.host, self.port, self.proxy.api_prefix)
    }

    pub fn static_proxy_target(&self) -> String {
        format!("http://{}:{}{}", self.host, self.port, self.proxy.static_prefix)
    }
}

/// Path prefixes the development server proxies to the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProxyConfig {
    #[serde(default = "default_api_prefix")]
    pub api_prefix: String,

    #[serde(default = "default_static_prefix")]
    pub static_prefix: String,

    /// Forward websocket upgrades on the API proxy.
    #[serde(default = "default_proxy_ws")]
    pub ws: bool,
}

fn default_api_prefix() -> String {
    "/api".to_string()
}

fn default_static_prefix() -> String {
    "/static".to_string()
}

fn default_proxy_ws() -> bool {
    true
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            api_prefix: default_api_prefix(),
            static_prefix: default_static_prefix(),
            ws: default_proxy_ws(),
        }
    }
}

/// Strips one leading occurrence of `prefix` from `path`; the proxied
/// backend mounts its routes at the root. Paths without the prefix pass
/// through unchanged.
pub fn rewrite_proxy_path(prefix: &str, path: &str) -> String {
    match path.strip_prefix(prefix) {
        Some(rest) => rest.to_string(),
        None => path.to_string(),
    }
}

/// Production bundling settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BundleConfig {
    /// Asset URL prefix baked into production bundles.
    #[serde(default = "default_static_base")]
    pub static_base: String,
}

fn default_static_base() -> String {
    "/static/".to_string()
}

impl Default for BundleConfig {
    fn default() -> Self {
        Self {
            static_base: default_static_base(),
        }
    }
}

/// User override configuration (restricted fields)
#[derive(Deserialize)]
pub struct UserOverrideConfig {
    pub theme: Option<String>,
    pub server: Option<ServerPatch>,
}

#[derive(Deserialize)]
pub struct ServerPatch {
    pub host: Option<String>,
    pub port: Option<u16>,
}

/// Runtime configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RuntimeConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Global application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Runtime configuration (Internal use)
    #[serde(skip)]
    pub runtime: RuntimeConfig,

    /// UI Theme
    #[serde(default)]
    pub theme: Option<String>,

    /// Backend location and dev proxy prefixes
    #[serde(default)]
    pub server: ServerConfig,

    /// Production bundling settings
    #[serde(default)]
    pub bundle: BundleConfig,

    /// Default model to use (provider/model or just model)
    #[serde(default)]
    pub default_model: Option<String>,
}

impl AppConfig {
    /// Load configuration with layered strategy:
    /// 1. Defaults (Embedded Config.toml)
    /// 2. User Config (~/.pdftrans/pdftrans.json) - Only theme/server
    /// 3. Project Config (./.pdftrans/pdftrans.json) - Only theme/server
    /// 4. Runtime Config (~/.pdftrans/pdftrans-runtime.json) - Runtime state
    pub fn load() -> Result<Self> {
        // 1. Load Base Config (Embedded)
        let default_str = include_str!("../Config.toml");
        let mut config: AppConfig =
            toml::from_str(default_str).context("Failed to parse embedded Config.toml")?;

        // 2. Apply User Config Patch
        if let Some(home) = dirs::home_dir() {
            let user_path = home.join(".pdftrans").join("pdftrans.json");
            Self::apply_patch(&mut config, user_path);
        }

        // 3. Apply Project Config Patch
        let project_path = Path::new(".pdftrans").join("pdftrans.json");
        Self::apply_patch(&mut config, project_path);

        // 4. Load Runtime Config
        let mut runtime_needs_save = false;
        let mut runtime_file_exists = false;
        if let Some(home) = dirs::home_dir() {
            let runtime_path = home.join(".pdftrans").join("pdftrans-runtime.json");
            if runtime_path.exists() {
                runtime_file_exists = true;
                if let Ok(content) = fs::read_to_string(&runtime_path) {
                    match serde_json::from_str::<RuntimeConfig>(&content) {
                        Ok(runtime_config) => {
                            if let Some(theme) = &runtime_config.theme {
                                config.theme = Some(theme.clone());
                            }
                            config.runtime = runtime_config;
                        }
                        Err(e) => {
                            log::warn!(
                                "Failed to parse runtime config at {}: {}",
                                runtime_path.display(),
                                e
                            );
                        }
                    }
                }
            } else if let Some(theme) = &config.theme {
                // If runtime config does not exist, initialize runtime.theme
                // from the theme the patches resolved to.
                config.runtime.theme = Some(theme.clone());
                runtime_needs_save = true;
            }
        }

        // Ensure runtime theme is consistent if it was null in file but we
        // have a theme from other sources
        if config.runtime.theme.is_none() && config.theme.is_some() {
            config.runtime.theme = config.theme.clone();
            runtime_needs_save = true;
        }

        let (resolved_default_model, should_save_default_model) = resolve_default_model(
            runtime_file_exists,
            config.runtime.default_model.clone(),
            &catalog::CHAT_MODEL_OPTIONS,
        );
        config.default_model = resolved_default_model.clone();
        config.runtime.default_model = resolved_default_model;
        if should_save_default_model {
            runtime_needs_save = true;
        }

        if runtime_needs_save {
            let _ = config.save_runtime();
        }

        Ok(config)
    }

    pub fn save_runtime(&self) -> Result<()> {
        if let Some(home) = dirs::home_dir() {
            let config_dir = home.join(".pdftrans");
            if !config_dir.exists() {
                fs::create_dir_all(&config_dir)?;
            }
            let runtime_path = config_dir.join("pdftrans-runtime.json");
            let content = serde_json::to_string_pretty(&self.runtime)?;
            fs::write(runtime_path, content)?;
        }
        Ok(())
    }

    pub(crate) fn apply_patch<P: AsRef<Path>>(config: &mut AppConfig, path: P) {
        let path = path.as_ref();
        if !path.exists() {
            return;
        }
        let Ok(content) = fs::read_to_string(path) else {
            return;
        };
        // Try parsing as UserOverrideConfig to restrict fields
        match serde_json::from_str::<UserOverrideConfig>(&content) {
            Ok(patch) => {
                if let Some(theme) = patch.theme {
                    config.theme = Some(theme);
                }
                if let Some(server) = patch.server {
                    if let Some(host) = server.host {
                        config.server.host = host;
                    }
                    if let Some(port) = server.port {
                        config.server.port = port;
                    }
                }
            }
            Err(e) => {
                eprintln!(
                    "Warning: Failed to parse config patch at {}: {}",
                    path.display(),
                    e
                );
            }
        }
    }

    pub fn to_public(&self) -> PublicAppConfig {
        PublicAppConfig {
            runtime: self.runtime.clone(),
            theme: self.theme.clone(),
            server: self.server.clone(),
            bundle: self.bundle.clone(),
            default_model: self.default_model.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PublicAppConfig {
    pub runtime: RuntimeConfig,
    pub theme: Option<String>,
    pub server: ServerConfig,
    pub bundle: BundleConfig,
    pub default_model: Option<String>,
}

/// Persists a theme change into the runtime state file.
pub fn set_runtime_theme(theme: String) -> Result<()> {
    let mut config = AppConfig::load()?;
    config.theme = Some(theme.clone());
    config.runtime.theme = Some(theme);
    config.save_runtime()
}

/// Persists the selected model key into the runtime state file.
pub fn set_runtime_default_model(model_key: String) -> Result<()> {
    let model_key = model_key.trim().to_string();
    if model_key.is_empty() {
        anyhow::bail!("model key must not be empty");
    }
    let mut config = AppConfig::load()?;
    config.runtime.default_model = Some(model_key);
    config.save_runtime()
}

pub(crate) fn resolve_default_model(
    runtime_file_exists: bool,
    runtime_default_model: Option<String>,
    groups: &[ProviderGroup],
) -> (Option<String>, bool) {
    let runtime_default_model = runtime_default_model.and_then(|v| {
        let v = v.trim().to_string();
        if v.is_empty() {
            None
        } else {
            Some(v)
        }
    });

    if runtime_file_exists && runtime_default_model.is_some() {
        return (runtime_default_model, false);
    }

    let Some(first) = groups.iter().find(|g| !g.children.is_empty()) else {
        return (runtime_default_model, false);
    };
    let Some(child) = first.children.first() else {
        return (runtime_default_model, false);
    };

    (Some(format!("{}/{}", first.value, child.value)), true)
}
