//! Completion Provider 抽象层
//!
//! 定义上游大模型服务的统一接口，处理器只依赖这个 trait，
//! 测试时可以替换为不做网络 I/O 的桩实现

pub mod anthropic;

use anyhow::{Context, Result};
use async_trait::async_trait;
use bytes::Bytes;
use serde_json::Value;

use crate::analysis::UpstreamPrompt;
use crate::utils::{is_present, value_to_text};

pub use anthropic::AnthropicProvider;

/// 上游未给出错误信息时使用的兜底文本
pub const UPSTREAM_ERROR_FALLBACK: &str = "API request failed";

/// Token 使用统计
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Usage {
    pub input_tokens: u64,
    pub output_tokens: u64,
    pub cache_read_tokens: u64,
    pub cache_creation_tokens: u64,
}

/// 从 Anthropic API 响应中解析 Usage 信息
///
/// 仅用于日志，缺失的字段按 0 计
pub fn parse_usage(response: &Value) -> Usage {
    let usage = response.get("usage");
    let get = |field: &str| -> u64 {
        usage
            .and_then(|u| u.get(field))
            .and_then(|v| v.as_u64())
            .unwrap_or(0)
    };

    Usage {
        input_tokens: get("input_tokens"),
        output_tokens: get("output_tokens"),
        cache_read_tokens: get("cache_read_input_tokens"),
        cache_creation_tokens: get("cache_creation_input_tokens"),
    }
}

/// 上游返回的 JSON
///
/// 同时保留原始字节，成功时原样转发给调用方
#[derive(Debug, Clone)]
pub struct CompletionReply {
    raw: Bytes,
    payload: Value,
}

impl CompletionReply {
    /// 解析上游响应体
    ///
    /// 非 JSON 或 JSON `null` 视为解析失败
    pub fn from_bytes(raw: Bytes) -> Result<Self> {
        let payload: Value =
            serde_json::from_slice(&raw).context("Failed to parse upstream response as JSON")?;

        if payload.is_null() {
            anyhow::bail!("Upstream response was JSON null");
        }

        Ok(Self { raw, payload })
    }

    pub fn payload(&self) -> &Value {
        &self.payload
    }

    /// 上游在响应体中报告的错误
    ///
    /// `error` 字段存在时返回 `error.message`，没有可用的 message 时
    /// 返回兜底文本；`error` 缺失或为 `null`、`false`、`0`、空字符串时返回 `None`。
    /// 只含空白的字符串同样算作存在
    pub fn reported_error(&self) -> Option<String> {
        let error = self.payload.get("error").filter(|e| is_present(e))?;

        let message = error
            .get("message")
            .filter(|m| is_present(m))
            .map(value_to_text)
            .unwrap_or_else(|| UPSTREAM_ERROR_FALLBACK.to_string());

        Some(message)
    }

    /// 原始响应字节
    pub fn into_raw(self) -> Bytes {
        self.raw
    }
}

/// Provider Trait - 上游补全服务的统一接口
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Provider 名称（用于日志和标识）
    fn name(&self) -> &str;

    /// 使用的模型标识
    fn model(&self) -> &str;

    /// 发送一次补全请求
    ///
    /// 只有传输或解析失败才返回 `Err`，上游在响应体中报告的错误
    /// 通过 [`CompletionReply::reported_error`] 检查
    async fn send_completion(&self, prompt: &UpstreamPrompt) -> Result<CompletionReply>;
}
