use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssetsConfig {
    /// Directory holding the catalog configuration file; public paths without
    /// a recorded local path resolve below it.
    pub root: PathBuf,
    /// Catalog configuration file name, relative to `root`.
    pub config_file: String,
}

impl AssetsConfig {
    pub fn catalog_path(&self) -> PathBuf {
        self.root.join(&self.config_file)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub assets: AssetsConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        // Fallback: parse the embedded default TOML
        let defaults: &str = include_str!("../config/default.toml");
        match ::config::Config::builder()
            .add_source(::config::File::from_str(defaults, ::config::FileFormat::Toml))
            .build()
        {
            Ok(cfg) => match cfg.try_deserialize() {
                Ok(app_cfg) => app_cfg,
                Err(e) => panic!("Failed to deserialize default config: {}", e),
            },
            Err(e) => panic!("Failed to parse default config: {}", e),
        }
    }
}

pub fn load() -> anyhow::Result<AppConfig> {
    // Load .env first (optional)
    let _ = dotenvy::dotenv();

    let defaults: &str = include_str!("../config/default.toml");
    let mut builder = ::config::Config::builder()
        .add_source(::config::File::from_str(defaults, ::config::FileFormat::Toml))
        // Optional local file: backdrop.toml (in CWD)
        .add_source(::config::File::with_name("backdrop").required(false));

    if let Ok(custom_path) = std::env::var("BACKDROP_CONFIG") {
        builder = builder.add_source(::config::File::with_name(&custom_path).required(false));
    }
    // Environment variables last to have highest precedence
    builder = builder.add_source(::config::Environment::with_prefix("BACKDROP").separator("__"));

    let cfg = builder.build()?;
    let app_cfg: AppConfig = cfg.try_deserialize()?;
    validate(&app_cfg)?;
    Ok(app_cfg)
}

/// Positional `host port` process arguments override the configured listen
/// address, so `backdrop 0.0.0.0 8080` works without a config file.
pub fn apply_listen_args<I>(cfg: &mut AppConfig, mut args: I) -> anyhow::Result<()>
where
    I: Iterator<Item = String>,
{
    if let Some(host) = args.next() {
        cfg.server.host = host;
    }
    if let Some(port) = args.next() {
        cfg.server.port = port
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid port argument {:?}: {}", port, e))?;
        if cfg.server.port == 0 {
            return Err(anyhow::anyhow!("invalid port argument: 0"));
        }
    }
    Ok(())
}

pub(crate) fn validate(cfg: &AppConfig) -> anyhow::Result<()> {
    if cfg.server.port == 0 {
        return Err(anyhow::anyhow!("invalid server.port: {}", cfg.server.port));
    }
    #[cfg(unix)]
    if cfg.server.port < 1024 {
        tracing::warn!("Using privileged port {} - may require elevated permissions", cfg.server.port);
    }

    if cfg.assets.root.as_os_str().is_empty() {
        return Err(anyhow::anyhow!("assets.root must not be empty"));
    }
    if cfg.assets.config_file.is_empty() {
        return Err(anyhow::anyhow!("assets.config_file must not be empty"));
    }

    Ok(())
}
