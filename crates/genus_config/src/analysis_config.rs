// crates/genus_config/src/analysis_config.rs

//! AnalysisConfig - 亏格分析配置
//!
//! JSON 格式，缺失字段取默认值：
//!
//! ```json
//! {
//!   "log_level": "info",
//!   "validate_topology": true,
//!   "report": { "format": "text", "per_component": false, "precision": null }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;

/// 可用的日志级别
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// f64 有效十进制位数上限
const MAX_PRECISION: usize = 17;

/// 分析配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// 日志级别（命令行未指定时使用）
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// 分析前是否运行半边结构验证
    #[serde(default = "default_validate_topology")]
    pub validate_topology: bool,

    /// 报告配置
    #[serde(default)]
    pub report: ReportConfig,
}

fn default_log_level() -> String { "info".to_string() }
fn default_validate_topology() -> bool { true }

/// 报告输出配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ReportConfig {
    /// 输出格式
    #[serde(default)]
    pub format: ReportFormat,

    /// 是否输出每个连通分量的明细
    #[serde(default)]
    pub per_component: bool,

    /// 文本输出的小数位数，未设置时输出最短表示（如 `0.5`）
    #[serde(default)]
    pub precision: Option<usize>,
}

/// 报告格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// 纯文本 `GENUS <value>`
    #[default]
    Text,
    /// JSON 报告
    Json,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            validate_topology: default_validate_topology(),
            report: ReportConfig::default(),
        }
    }
}

impl AnalysisConfig {
    /// 从文件加载配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: AnalysisConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// 验证配置有效性
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(ConfigError::invalid_value(
                "log_level",
                &self.log_level,
                format!("必须为 {} 之一", LOG_LEVELS.join("|")),
            ));
        }

        if let Some(precision) = self.report.precision {
            if precision > MAX_PRECISION {
                return Err(ConfigError::invalid_value(
                    "report.precision",
                    precision,
                    format!("不能超过 {}", MAX_PRECISION),
                ));
            }
        }

        Ok(())
    }

    /// 保存配置到文件
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
