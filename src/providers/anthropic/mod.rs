//! Anthropic Provider
//!
//! 基于 API Key 认证，调用 Messages API 完成单轮补全

mod constants;

use anyhow::{Context, Result};
use async_trait::async_trait;
use http::{header, HeaderMap, HeaderValue};
use reqwest::Client;
use serde::Serialize;

use crate::analysis::UpstreamPrompt;
use crate::providers::{CompletionProvider, CompletionReply};

use constants::{ANALYSIS_MAX_TOKENS, ANALYSIS_MODEL, ANTHROPIC_API_URL, ANTHROPIC_API_VERSION};

/// Messages API 请求体
#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: [Message<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

pub struct AnthropicProvider {
    client: Client,
    endpoint: String,
    headers: HeaderMap,
}

impl AnthropicProvider {
    /// 使用默认的 Anthropic API 地址创建
    pub fn new(api_key: &str) -> Result<Self> {
        Self::with_endpoint(api_key, ANTHROPIC_API_URL)
    }

    /// 指定上游地址创建（测试时指向 mock server）
    pub fn with_endpoint(api_key: &str, endpoint: impl Into<String>) -> Result<Self> {
        // 不设置超时，沿用 reqwest 的默认行为
        let client = Client::builder()
            .user_agent(concat!("foresight/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create Anthropic API client")?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            headers: build_headers(api_key)?,
        })
    }
}

#[async_trait]
impl CompletionProvider for AnthropicProvider {
    fn name(&self) -> &str {
        "anthropic"
    }

    fn model(&self) -> &str {
        ANALYSIS_MODEL
    }

    async fn send_completion(&self, prompt: &UpstreamPrompt) -> Result<CompletionReply> {
        let body = MessagesRequest {
            model: ANALYSIS_MODEL,
            max_tokens: ANALYSIS_MAX_TOKENS,
            messages: [Message {
                role: "user",
                content: prompt.as_str(),
            }],
        };

        let response = self
            .client
            .post(&self.endpoint)
            .headers(self.headers.clone())
            .json(&body)
            .send()
            .await
            .context("Failed to send request to Anthropic API")?;

        // 不检查 HTTP 状态码，错误由响应体中的 error 字段表达
        let status = response.status();
        let raw = response
            .bytes()
            .await
            .context("Failed to read Anthropic API response")?;

        tracing::debug!(status = status.as_u16(), bytes = raw.len(), "upstream replied");

        CompletionReply::from_bytes(raw)
    }
}

fn build_headers(api_key: &str) -> Result<HeaderMap> {
    let mut map = HeaderMap::new();

    map.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );

    let mut key = HeaderValue::from_str(api_key).context("Invalid API key for header")?;
    key.set_sensitive(true);
    map.insert("x-api-key", key);

    map.insert(
        "anthropic-version",
        HeaderValue::from_static(ANTHROPIC_API_VERSION),
    );

    Ok(map)
}
