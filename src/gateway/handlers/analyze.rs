//! 分析接口处理器

use axum::{
    body::{to_bytes, Body, Bytes},
    extract::{Request, State},
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;

use crate::analysis::{AnalysisRequest, UpstreamPrompt};
use crate::gateway::{handlers::ErrorResponse, state::AppState};
use crate::providers::parse_usage;

/// 被拒绝的请求
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    MethodNotAllowed,
    MissingQuestion,
}

/// 完成了上游调用的请求
#[derive(Debug)]
pub enum Completion {
    /// 上游 JSON 原始字节
    Success(Bytes),
    /// 上游在响应体中报告的错误信息
    UpstreamError(String),
    /// 传输或解析失败的错误详情
    TransportError(String),
}

/// 单次请求的终态
#[derive(Debug)]
pub enum AnalyzeOutcome {
    PreflightOk,
    Rejected(Rejection),
    Completed(Completion),
}

impl IntoResponse for AnalyzeOutcome {
    fn into_response(self) -> Response {
        match self {
            AnalyzeOutcome::PreflightOk => StatusCode::OK.into_response(),
            AnalyzeOutcome::Rejected(Rejection::MethodNotAllowed) => (
                StatusCode::METHOD_NOT_ALLOWED,
                Json(ErrorResponse::new("Method not allowed")),
            )
                .into_response(),
            AnalyzeOutcome::Rejected(Rejection::MissingQuestion) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new("Question is required")),
            )
                .into_response(),
            AnalyzeOutcome::Completed(Completion::Success(raw)) => (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Body::from(raw),
            )
                .into_response(),
            AnalyzeOutcome::Completed(Completion::UpstreamError(message)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(message)),
            )
                .into_response(),
            AnalyzeOutcome::Completed(Completion::TransportError(details)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::with_details("Internal server error", details)),
            )
                .into_response(),
        }
    }
}

/// /api/analyze 处理器，接受任意方法
///
/// 先判断方法再读取请求体，请求体不受提取器默认大小上限的约束
pub async fn handle_analyze(
    State(state): State<AppState>,
    method: Method,
    request: Request,
) -> AnalyzeOutcome {
    if method == Method::OPTIONS {
        return AnalyzeOutcome::PreflightOk;
    }

    if method != Method::POST {
        return AnalyzeOutcome::Rejected(Rejection::MethodNotAllowed);
    }

    let body = match to_bytes(request.into_body(), usize::MAX).await {
        Ok(body) => body,
        Err(err) => {
            tracing::warn!(error = %err, "failed to read request body");
            Bytes::new()
        }
    };

    // 无法解析的请求体等同于没有 question
    let body: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    let Some(request) = AnalysisRequest::from_body(&body) else {
        return AnalyzeOutcome::Rejected(Rejection::MissingQuestion);
    };

    AnalyzeOutcome::Completed(analyze(&state, &request).await)
}

async fn analyze(state: &AppState, request: &AnalysisRequest) -> Completion {
    let provider = state.provider();
    let prompt = UpstreamPrompt::build(request);

    tracing::info!(
        provider = provider.name(),
        model = provider.model(),
        kind = ?request.kind,
        question_len = request.question.len(),
        "request"
    );

    let reply = match provider.send_completion(&prompt).await {
        Ok(reply) => reply,
        Err(err) => {
            let details = format!("{:#}", err);
            tracing::error!(provider = provider.name(), error = %details, "API Error");
            return Completion::TransportError(details);
        }
    };

    if let Some(message) = reply.reported_error() {
        tracing::warn!(provider = provider.name(), error = %message, "upstream reported error");
        return Completion::UpstreamError(message);
    }

    let usage = parse_usage(reply.payload());
    tracing::info!(
        provider = provider.name(),
        input_tokens = usage.input_tokens,
        output_tokens = usage.output_tokens,
        cache_read = usage.cache_read_tokens,
        cache_write = usage.cache_creation_tokens,
        "response"
    );

    Completion::Success(reply.into_raw())
}
