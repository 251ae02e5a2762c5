//! # Configuration Loader / 配置加载器
//!
//! Reads a TOML file and maps it onto [`WizardConfig`]. Pure data loading:
//! values are accepted as they are in the file.

use std::path::Path;

use anyhow::Context;
use rw_core::WizardConfig;

/// Load configuration from a TOML file.
/// 从 TOML 文件加载配置
///
/// # Errors / 错误
///
/// - File cannot be read (I/O error)
/// - Content is not valid TOML (parse error)
/// - `registry.seeded_emails` is not a list of strings
pub fn load_config(config_path: &Path) -> anyhow::Result<WizardConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    WizardConfig::from_toml(&toml_value)
        .with_context(|| format!("Invalid config file: {}", config_path.display()))
}
