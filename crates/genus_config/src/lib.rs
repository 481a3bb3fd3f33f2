// crates/genus_config/src/lib.rs

//! Genus Config Layer
//!
//! 配置层，提供分析流程与报告输出的 JSON 配置。
//!
//! # 模块概览
//!
//! - [`analysis_config`]: AnalysisConfig 分析配置
//! - [`error`]: 配置错误类型
//!
//! # 层级架构
//!
//! ```text
//! genus_cli        ─> uses AnalysisConfig
//! genus_config     ─> AnalysisConfig, ReportConfig (本层)
//! genus_mesh       ─> HalfEdgeMesh, TopologyAnalyzer
//! genus_foundation
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis_config;
pub mod error;

// 重导出核心类型
pub use analysis_config::{AnalysisConfig, ReportConfig, ReportFormat, LOG_LEVELS};
pub use error::ConfigError;
