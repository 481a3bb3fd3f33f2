// apps/genus_cli/src/commands/validate.rs

//! 网格验证命令
//!
//! 对半边结构运行完整性检查。

use super::load_mesh;
use anyhow::{bail, Result};
use clap::Args;
use genus_mesh::ValidationReport;
use std::path::PathBuf;
use tracing::{error, info, warn};

/// 验证参数
#[derive(Args)]
pub struct ValidateArgs {
    /// OBJ 网格文件
    pub file: PathBuf,

    /// 严格模式（警告也视为错误）
    #[arg(long)]
    pub strict: bool,
}

/// 执行验证命令
pub fn execute(args: ValidateArgs) -> Result<()> {
    info!("=== 半边结构验证 ===");

    println!("\n检查网格文件: {}", args.file.display());
    let mesh = load_mesh(&args.file)?;
    println!(
        "  顶点 {}, 面 {}, 半边 {}",
        mesh.n_vertices(),
        mesh.n_faces(),
        mesh.n_halfedges()
    );

    let report = mesh.validate();
    print_validation_result(&report, args.strict)
}

fn print_validation_result(report: &ValidationReport, strict: bool) -> Result<()> {
    println!("\n=== 验证结果 ===");

    if !report.errors.is_empty() {
        println!("\n错误 ({}):", report.errors.len());
        for err in &report.errors {
            error!("  ✗ [{}] {}", err.check_name(), err);
            println!("  ✗ [{}] {}", err.check_name(), err);
        }
    }

    let warnings = [
        (report.boundary_halfedges, "条边界半边（无 twin）"),
        (report.overwritten_edges, "条重复有向边（非流形）"),
        (report.isolated_vertices, "个孤立顶点"),
    ];
    if report.warnings() > 0 {
        println!("\n警告 ({}):", report.warnings());
        for (count, what) in warnings.iter().filter(|(count, _)| *count > 0) {
            warn!("  ⚠ {} {}", count, what);
            println!("  ⚠ {} {}", count, what);
        }
    }

    let success = if strict {
        report.is_valid() && report.warnings() == 0
    } else {
        report.is_valid()
    };

    if success {
        println!("\n✓ 验证通过");
        Ok(())
    } else {
        println!("\n✗ 验证失败");
        bail!(
            "验证失败：发现 {} 个错误，{} 个警告",
            report.errors.len(),
            report.warnings()
        )
    }
}
