//! 应用配置模块
//!
//! 负责从环境变量加载应用配置，包括：
//! - 服务器监听地址和端口
//! - 上游 Anthropic API 密钥

use anyhow::{Context, Result};

/// 应用配置
#[derive(Debug, Clone)]
pub struct Config {
    /// 服务器监听地址（如 "0.0.0.0" 或 "127.0.0.1"）
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
    /// Anthropic API 密钥，仅 `serve` 命令需要
    api_key: Option<String>,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// # 环境变量
    ///
    /// - `FORESIGHT_HOST`: 服务器监听地址（默认: "0.0.0.0"）
    /// - `FORESIGHT_PORT`: 服务器监听端口（默认: 3000）
    /// - `ANTHROPIC_API_KEY`: 上游 API 密钥（`serve` 时**必需**）
    ///
    /// # 错误
    ///
    /// - 如果 `FORESIGHT_PORT` 不是有效的端口号
    pub fn from_env() -> Result<Self> {
        let host = std::env::var("FORESIGHT_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = std::env::var("FORESIGHT_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .context("FORESIGHT_PORT must be a valid port number")?;

        let api_key = std::env::var("ANTHROPIC_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());

        Ok(Self {
            host,
            port,
            api_key,
        })
    }

    /// 获取上游 API 密钥
    ///
    /// 密钥只在启动时读取一次，之后注入到 provider 中
    pub fn api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .context("ANTHROPIC_API_KEY environment variable is required")
    }

    #[cfg(test)]
    pub fn for_tests(api_key: Option<&str>) -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 0,
            api_key: api_key.map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_api_key_names_the_variable() {
        let config = Config::for_tests(None);
        let err = config.api_key().unwrap_err();
        assert!(err.to_string().contains("ANTHROPIC_API_KEY"));
    }

    #[test]
    fn api_key_is_returned_when_present() {
        let config = Config::for_tests(Some("sk-test"));
        assert_eq!(config.api_key().unwrap(), "sk-test");
    }
}
