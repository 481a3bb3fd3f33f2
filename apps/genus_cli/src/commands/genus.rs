// apps/genus_cli/src/commands/genus.rs

//! 亏格计算命令
//!
//! 多个文件用 rayon 并行处理，输出顺序与输入顺序一致。

use super::load_mesh;
use anyhow::{bail, Result};
use clap::Args;
use genus_config::{AnalysisConfig, ReportFormat};
use genus_mesh::{ComponentTopology, TopologyAnalyzer, TopologyReport};
use rayon::prelude::*;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

/// 亏格计算参数
#[derive(Args)]
pub struct GenusArgs {
    /// OBJ 网格文件
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// 输出 JSON 报告
    #[arg(long)]
    pub json: bool,

    /// 输出每个连通分量的明细
    #[arg(long)]
    pub per_component: bool,
}

/// 单个文件的 JSON 输出
#[derive(Serialize)]
struct FileReport<'a> {
    file: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    genus: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    n_components: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    components: Option<&'a [ComponentTopology]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// 执行亏格计算命令
pub fn execute(args: GenusArgs, config: &AnalysisConfig) -> Result<()> {
    info!("=== 亏格计算: {} 个文件 ===", args.files.len());

    let results: Vec<Result<TopologyReport>> = args
        .files
        .par_iter()
        .map(|path| analyze_file(path, config.validate_topology))
        .collect();

    let json = args.json || config.report.format == ReportFormat::Json;
    let per_component = args.per_component || config.report.per_component;

    if json {
        print_json(&args.files, &results, per_component)?;
    } else {
        print_text(&args.files, &results, per_component, config.report.precision);
    }

    let failed = results.iter().filter(|r| r.is_err()).count();
    if failed > 0 {
        bail!("{} / {} 个文件处理失败", failed, args.files.len());
    }
    Ok(())
}

fn analyze_file(path: &Path, validate_topology: bool) -> Result<TopologyReport> {
    let mesh = load_mesh(path)?;

    if validate_topology {
        let report = mesh.validate().into_result()?;
        if report.overwritten_edges > 0 {
            warn!(
                "{}: {} 条有向边重复，网格非流形",
                path.display(),
                report.overwritten_edges
            );
        }
        if report.boundary_halfedges > 0 {
            info!(
                "{}: {} 条边界半边，亏格仅为形式值",
                path.display(),
                report.boundary_halfedges
            );
        }
    }

    let report = TopologyAnalyzer::analyze(&mesh);
    info!(
        "{}: {} 个连通分量, 亏格 {}",
        path.display(),
        report.n_components(),
        report.genus
    );
    Ok(report)
}

fn print_text(
    files: &[PathBuf],
    results: &[Result<TopologyReport>],
    per_component: bool,
    precision: Option<usize>,
) {
    let multiple = files.len() > 1;

    for (path, result) in files.iter().zip(results) {
        match result {
            Ok(report) => {
                let genus = format_value(report.genus, precision);
                if multiple {
                    println!("{}: GENUS {}", path.display(), genus);
                } else {
                    println!("GENUS {}", genus);
                }
                if per_component {
                    for c in &report.components {
                        println!(
                            "  分量 {}: V={} E={} F={} χ={} 亏格={}{}",
                            c.index,
                            c.vertices,
                            c.edges,
                            c.faces,
                            c.euler_characteristic,
                            format_value(c.genus, precision),
                            if c.is_closed() { "" } else { " (含边界)" }
                        );
                    }
                }
            }
            Err(e) => {
                error!("{}: {:#}", path.display(), e);
                eprintln!("{}: 错误: {:#}", path.display(), e);
            }
        }
    }
}

/// 按小数位数格式化，未指定时使用最短表示
fn format_value(value: f64, precision: Option<usize>) -> String {
    match precision {
        Some(p) => format!("{:.*}", p, value),
        None => format!("{}", value),
    }
}

fn print_json(
    files: &[PathBuf],
    results: &[Result<TopologyReport>],
    per_component: bool,
) -> Result<()> {
    let reports: Vec<FileReport<'_>> = files
        .iter()
        .zip(results)
        .map(|(path, result)| match result {
            Ok(report) => FileReport {
                file: path.display().to_string(),
                genus: Some(report.genus),
                n_components: Some(report.n_components()),
                components: per_component.then_some(report.components.as_slice()),
                error: None,
            },
            Err(e) => FileReport {
                file: path.display().to_string(),
                genus: None,
                n_components: None,
                components: None,
                error: Some(format!("{:#}", e)),
            },
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&reports)?);
    Ok(())
}
