//! # analyze 子命令 CLI 定义
//!
//! 批量分析入口：文件发现、处理窗口与图表输出参数。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/analyze.rs`

use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// 图表输出格式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum PlotFormat {
    /// PNG image
    #[default]
    Png,
    /// SVG vector image
    Svg,
}

impl PlotFormat {
    /// 对应的文件扩展名
    pub fn extension(&self) -> &'static str {
        match self {
            PlotFormat::Png => "png",
            PlotFormat::Svg => "svg",
        }
    }
}

impl std::fmt::Display for PlotFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// analyze 子命令参数
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Input: dataset file or directory containing dataset files
    pub input: PathBuf,

    /// Glob pattern for input files (directory mode)
    #[arg(short, long, default_value = "inflammation*.csv")]
    pub pattern: String,

    /// Process only the first N matching files (0 = no limit)
    #[arg(short, long, default_value_t = 3)]
    pub limit: usize,

    /// Output directory for generated plots
    #[arg(short, long, default_value = "plots")]
    pub output_dir: PathBuf,

    /// Plot output format
    #[arg(short, long, value_enum, default_value_t = PlotFormat::Png)]
    pub format: PlotFormat,

    /// Figure width in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 1200)]
    pub width: u32,

    /// Figure height in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 800)]
    pub height: u32,

    /// Number of days to show in the per-day statistics table
    #[arg(long, default_value_t = 10)]
    pub days: usize,

    /// Skip plot generation
    #[arg(long, default_value_t = false)]
    pub no_plot: bool,
}
