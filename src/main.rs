//! Foresight - 战略分析中继服务
//!
//! 接收用户提出的问题，套用固定的分析模板生成提示词，
//! 转发给 Anthropic Messages API，并把模型返回的 JSON 原样交回调用方。
//!
//! # 功能特性
//!
//! - PESTLE-M 地缘政治分析模板（默认）
//! - 网络安全业务风险分析模板（`type: "cyber"`）
//! - 宽松的 CORS 响应头，便于浏览器前端直接调用
//!
//! # 命令行接口
//!
//! - `serve`: 启动 API 服务器
//! - `test`: 向本地服务器发送测试请求

mod analysis;
mod commands;
mod config;
mod gateway;
mod providers;
mod utils;

use analysis::AnalysisKind;
use anyhow::Result;
use clap::{Parser, Subcommand};
use config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Foresight CLI
#[derive(Parser)]
#[command(name = "foresight")]
#[command(about = "Strategic Foresight Analysis Relay", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// 可用的命令
#[derive(Subcommand)]
enum Commands {
    /// 启动分析中继服务器
    Serve,
    /// 向本地服务器发送测试请求
    Test {
        /// 要分析的问题
        #[arg(short, long, default_value = commands::test::DEFAULT_QUESTION)]
        question: String,
        /// 分析类型
        #[arg(short = 't', long = "type", value_enum, default_value_t = AnalysisKind::Geopolitical)]
        kind: AnalysisKind,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // 加载 .env 文件（如果存在）
    if let Ok(dotenv_path) = std::env::var("FORESIGHT_ENV_FILE") {
        dotenvy::from_path(&dotenv_path).ok();
    } else {
        dotenvy::dotenv().ok();
    }

    // 初始化日志系统
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "foresight=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_thread_names(false),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?;

    match cli.command {
        Commands::Serve => commands::serve_command(config).await,
        Commands::Test { question, kind } => commands::test_command(config, question, kind).await,
    }
}
