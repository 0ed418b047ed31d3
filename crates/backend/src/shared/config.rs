use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub shop: ShopConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    /// Images and css, served under `/static`
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
    /// wasm-bindgen / trunk output with the frontend bundle
    #[serde(default = "default_pkg_dir")]
    pub pkg_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            static_dir: default_static_dir(),
            pkg_dir: default_pkg_dir(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ShopConfig {
    /// Карточек на страницу витрины
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Заполнить пустую БД демо-каталогом при старте
    #[serde(default = "default_seed")]
    pub seed_demo_data: bool,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            seed_demo_data: default_seed(),
        }
    }
}

fn default_port() -> u16 {
    3000
}

fn default_static_dir() -> String {
    "static".into()
}

fn default_pkg_dir() -> String {
    "dist".into()
}

fn default_page_size() -> usize {
    8
}

fn default_seed() -> bool {
    true
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[database]
path = "target/db/app.db"

[server]
port = 3000
static_dir = "static"
pkg_dir = "dist"

[shop]
page_size = 8
seed_demo_data = true
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return parse_config(&contents);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    if config.shop.page_size == 0 {
        anyhow::bail!("shop.page_size must be a positive integer");
    }
    Ok(config)
}

/// Get the database file path from configuration
/// Resolves relative paths relative to the executable directory
pub fn get_database_path(config: &Config) -> anyhow::Result<PathBuf> {
    let db_path_str = &config.database.path;
    let db_path = Path::new(db_path_str);

    if db_path.is_absolute() {
        return Ok(db_path.to_path_buf());
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return Ok(exe_dir.join(db_path));
        }
    }

    Ok(PathBuf::from(db_path_str))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.database.path, "target/db/app.db");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.shop.page_size, 8);
        assert!(config.shop.seed_demo_data);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = parse_config("[database]\npath = \"shop.db\"\n").unwrap();
        assert_eq!(config.server.pkg_dir, "dist");
        assert_eq!(config.server.static_dir, "static");
        assert_eq!(config.shop.page_size, 8);
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let raw = "[database]\npath = \"x.db\"\n[shop]\npage_size = 0\n";
        assert!(parse_config(raw).is_err());
    }
}
