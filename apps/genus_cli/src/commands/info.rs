// apps/genus_cli/src/commands/info.rs

//! 信息显示命令
//!
//! 显示网格的顶点、面、半边与连通分量统计。

use super::load_mesh;
use anyhow::Result;
use clap::Args;
use genus_config::{AnalysisConfig, ReportFormat};
use genus_mesh::MeshStatistics;
use std::path::PathBuf;
use tracing::info;

/// 信息显示参数
#[derive(Args)]
pub struct InfoArgs {
    /// OBJ 网格文件
    pub file: PathBuf,

    /// 输出 JSON
    #[arg(long)]
    pub json: bool,
}

/// 执行信息命令
pub fn execute(args: InfoArgs, config: &AnalysisConfig) -> Result<()> {
    info!("=== 网格信息: {} ===", args.file.display());

    let mesh = load_mesh(&args.file)?;
    let stats = MeshStatistics::compute(&mesh);

    if args.json || config.report.format == ReportFormat::Json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!("文件: {}", args.file.display());
        println!("{}", stats);
        if !stats.is_triangulated() {
            println!("注意: 网格包含非三角形面");
        }
    }

    Ok(())
}
