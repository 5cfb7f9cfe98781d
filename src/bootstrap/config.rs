//! # Configuration Loader / 配置加载器
//!
//! ## Responsibilities / 职责
//!
//! - ✅ Read TOML configuration files / 读取 TOML 配置文件
//! - ✅ Parse TOML into AppConfig DTO / 将 TOML 解析为 AppConfig DTO
//! - ✅ Report I/O and parsing errors with context / 报告带上下文的 I/O 和解析错误
//!
//! ## Prohibited / 禁止事项
//!
//! ❌ **No validation logic / 禁止验证逻辑**
//! ❌ **No default value logic / 禁止默认值逻辑** (see `init.rs`)

use anyhow::Context;
use fl_core::config::AppConfig;
use std::path::Path;

/// Load configuration from a TOML file
/// 从 TOML 文件加载配置
///
/// Missing sections and keys come back as empty values.
///
/// # Errors / 错误
///
/// - File cannot be read (I/O error)
/// - Content is not valid TOML (parse error)
pub fn load_config(config_path: &Path) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(content.as_bytes()).unwrap();
        temp_file
    }

    #[test]
    fn test_load_config_reads_valid_toml() {
        let file = write_config(
            r#"
            [analysis]
            endpoint = "https://food.example.com/api/analyze"
            timeout_secs = 15

            [camera]
            command = "fswebcam --no-banner {output}"

            [logging]
            directory = "/var/log/food-lens"
        "#,
        );

        let config = load_config(file.path()).unwrap();

        assert_eq!(config.analysis_endpoint, "https://food.example.com/api/analyze");
        assert_eq!(config.analysis_timeout_secs, 15);
        assert_eq!(config.camera_command, "fswebcam --no-banner {output}");
        assert_eq!(config.log_dir, PathBuf::from("/var/log/food-lens"));
    }

    /// Missing values are facts, not errors
    /// 缺失的值是事实，不是错误
    #[test]
    fn test_load_config_returns_empty_values_when_missing() {
        let file = write_config("[analysis]\n");

        let config = load_config(file.path()).unwrap();

        assert_eq!(config, AppConfig::empty());
    }

    #[test]
    fn test_load_config_reports_missing_file() {
        let result = load_config(Path::new("/nonexistent/food-lens/config.toml"));

        let err = result.unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_reports_invalid_toml() {
        let file = write_config("[analysis\nendpoint = ");

        let err = load_config(file.path()).unwrap_err();

        assert!(err.to_string().contains("Failed to parse config as TOML"));
    }
}
