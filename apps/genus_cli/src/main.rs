// apps/genus_cli/src/main.rs

//! Genus 命令行界面
//!
//! 读取 OBJ 网格，计算各连通分量的欧拉示性数与亏格。

mod commands;

use anyhow::Context;
use clap::{Parser, Subcommand};
use genus_config::AnalysisConfig;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// 多边形网格亏格计算工具
#[derive(Parser)]
#[command(name = "genus_cli")]
#[command(author = "Genus Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Compute the genus of polygon meshes", long_about = None)]
struct Cli {
    /// 日志级别 (trace, debug, info, warn, error)，默认取配置文件
    #[arg(short, long, global = true)]
    log_level: Option<String>,

    /// JSON 配置文件路径
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 计算亏格
    Genus(commands::genus::GenusArgs),
    /// 显示网格统计
    Info(commands::info::InfoArgs),
    /// 验证半边结构
    Validate(commands::validate::ValidateArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AnalysisConfig::from_file(path)
            .with_context(|| format!("无法加载配置文件 {}", path.display()))?,
        None => AnalysisConfig::default(),
    };

    // 初始化日志
    let level_name = cli.log_level.as_deref().unwrap_or(&config.log_level);
    let level = match level_name.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // 执行命令
    match cli.command {
        Commands::Genus(args) => commands::genus::execute(args, &config),
        Commands::Info(args) => commands::info::execute(args, &config),
        Commands::Validate(args) => commands::validate::execute(args),
    }
}
