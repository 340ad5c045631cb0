//! Anthropic API 配置常量

pub const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
pub const ANTHROPIC_API_VERSION: &str = "2023-06-01";

/// 分析使用的固定模型
pub const ANALYSIS_MODEL: &str = "claude-sonnet-4-20250514";

/// 单次分析的输出 token 上限
pub const ANALYSIS_MAX_TOKENS: u32 = 4500;
