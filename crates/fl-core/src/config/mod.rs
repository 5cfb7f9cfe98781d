//! # Pure Data Module / 纯数据模块 - Data Transfer Objects Only
//!
//! ## Responsibilities / 职责
//!
//! - ✅ Define configuration data structures / 定义配置数据结构
//! - ✅ Provide TOML → DTO mapping / 提供 TOML → DTO 的映射
//!
//! ## Prohibited / 禁止事项
//!
//! ❌ **No business logic or policies / 禁止任何业务逻辑或策略**
//! ❌ **No validation logic / 禁止验证逻辑**
//!
//! Empty values are valid facts. Filling them in is the job of the
//! bootstrap layer.

use std::path::PathBuf;

/// Endpoint used when nothing is configured.
pub const DEFAULT_ANALYSIS_ENDPOINT: &str = "http://localhost:8081/api/analyze";

/// Analysis request timeout used when nothing is configured.
pub const DEFAULT_ANALYSIS_TIMEOUT_SECS: u64 = 60;

/// Application configuration DTO (pure data, no logic)
/// 应用配置 DTO（纯数据，无逻辑）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Analysis endpoint URL (may be empty - this is a fact, not an error)
    /// 分析服务地址（可能为空）
    pub analysis_endpoint: String,

    /// Analysis request timeout in seconds, 0 when absent
    pub analysis_timeout_secs: u64,

    /// Camera capture command with an `{output}` placeholder, empty when absent
    pub camera_command: String,

    /// Log directory (path info only, no existence check)
    pub log_dir: PathBuf,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    /// 从 TOML 值创建 AppConfig
    ///
    /// **Prohibited / 禁止**: This method must NOT contain any validation
    /// or default value logic.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        Ok(Self {
            analysis_endpoint: toml_value
                .get("analysis")
                .and_then(|a| a.get("endpoint"))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
            analysis_timeout_secs: toml_value
                .get("analysis")
                .and_then(|a| a.get("timeout_secs"))
                .and_then(|v| v.as_integer())
                .unwrap_or(0)
                .max(0) as u64,
            camera_command: toml_value
                .get("camera")
                .and_then(|c| c.get("command"))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
            log_dir: PathBuf::from(
                toml_value
                    .get("logging")
                    .and_then(|l| l.get("directory"))
                    .and_then(|v| v.as_str())
                    .unwrap_or(""),
            ),
        })
    }

    /// Create empty AppConfig (all empty/default values)
    /// 创建空的 AppConfig
    pub fn empty() -> Self {
        Self {
            analysis_endpoint: String::new(),
            analysis_timeout_secs: 0,
            camera_command: String::new(),
            log_dir: PathBuf::new(),
        }
    }

    /// Create AppConfig with system-default values for production use
    /// 生产环境使用：创建具有系统默认值的 AppConfig
    ///
    /// # Arguments / 参数
    ///
    /// * `data_dir` - Base directory for app data (e.g., `~/.local/share/food-lens`)
    pub fn with_system_defaults(data_dir: PathBuf) -> Self {
        Self {
            analysis_endpoint: DEFAULT_ANALYSIS_ENDPOINT.to_string(),
            analysis_timeout_secs: DEFAULT_ANALYSIS_TIMEOUT_SECS,
            camera_command: String::new(),
            log_dir: data_dir.join("logs"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toml::Value;

    #[test]
    fn test_from_toml_returns_empty_endpoint_when_missing() {
        let toml_str = r#"
            [analysis]
            # endpoint is missing
        "#;
        let toml_value: Value = toml::from_str(toml_str).unwrap();

        let config = AppConfig::from_toml(&toml_value).unwrap();

        // Empty string is valid (fact, not error)
        assert_eq!(config.analysis_endpoint, "");
        assert_eq!(config.analysis_timeout_secs, 0);
    }

    #[test]
    fn test_from_toml_parses_all_sections() {
        let toml_str = r#"
            [analysis]
            endpoint = "https://food.example.com/api/analyze"
            timeout_secs = 15

            [camera]
            command = "fswebcam --no-banner {output}"

            [logging]
            directory = "/var/log/food-lens"
        "#;
        let toml_value: Value = toml::from_str(toml_str).unwrap();

        let config = AppConfig::from_toml(&toml_value).unwrap();

        assert_eq!(config.analysis_endpoint, "https://food.example.com/api/analyze");
        assert_eq!(config.analysis_timeout_secs, 15);
        assert_eq!(config.camera_command, "fswebcam --no-banner {output}");
        assert_eq!(config.log_dir, PathBuf::from("/var/log/food-lens"));
    }

    #[test]
    fn test_from_toml_clamps_negative_timeout_to_zero() {
        let toml_value: Value = toml::from_str("[analysis]\ntimeout_secs = -5").unwrap();

        let config = AppConfig::from_toml(&toml_value).unwrap();

        assert_eq!(config.analysis_timeout_secs, 0);
    }

    #[test]
    fn test_empty_creates_valid_dto() {
        let config = AppConfig::empty();

        assert_eq!(config.analysis_endpoint, "");
        assert_eq!(config.camera_command, "");
        assert_eq!(config.log_dir, PathBuf::new());
    }

    #[test]
    fn test_with_system_defaults_creates_valid_values() {
        let config = AppConfig::with_system_defaults(PathBuf::from("/tmp/test"));

        assert_eq!(config.analysis_endpoint, DEFAULT_ANALYSIS_ENDPOINT);
        assert_eq!(config.analysis_timeout_secs, DEFAULT_ANALYSIS_TIMEOUT_SECS);
        assert_eq!(config.log_dir, PathBuf::from("/tmp/test/logs"));
        assert_eq!(config.camera_command, "");
    }
}
