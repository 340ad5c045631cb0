//! Test 命令 - 发送测试请求到本地服务器
//!
//! 此模块实现 `test` 命令，用于向本地运行的 Foresight 服务器提交一个问题，
//! 验证服务是否正常工作。

use anyhow::{Context, Result};
use serde_json::json;

use crate::analysis::AnalysisKind;
use crate::config::Config;
use crate::gateway::ANALYZE_PATH;

/// 未指定问题时使用的默认问题
pub const DEFAULT_QUESTION: &str = "Will country X hold elections in 2025?";

/// 执行测试命令
///
/// # 参数
///
/// * `config` - 应用配置，用于获取服务器地址
/// * `question` - 要分析的问题
/// * `kind` - 分析类型，决定请求体中的 `type` 字段
///
/// # 返回
///
/// 服务器返回非 2xx 状态时返回错误
pub async fn test_command(config: Config, question: String, kind: AnalysisKind) -> Result<()> {
    println!("Sending test request to local server...");

    let mut test_body = json!({ "question": question });
    if let Some(kind) = kind.as_type() {
        test_body["type"] = json!(kind);
    }

    // 监听 0.0.0.0 时通过回环地址访问
    let host = if config.host == "0.0.0.0" {
        "127.0.0.1"
    } else {
        config.host.as_str()
    };
    let url = format!("http://{}:{}{}", host, config.port, ANALYZE_PATH);

    println!("Request URL: {}", url);

    let response = reqwest::Client::new()
        .post(&url)
        .json(&test_body)
        .send()
        .await
        .context("Request failed. Make sure the server is running.")?;

    let status = response.status();
    println!("Response status: {}", status);

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        anyhow::bail!("Request failed: {}", body);
    }

    let body: serde_json::Value = response
        .json()
        .await
        .context("Failed to read response body")?;

    println!("Response:");
    println!("{}", serde_json::to_string_pretty(&body)?);

    Ok(())
}
