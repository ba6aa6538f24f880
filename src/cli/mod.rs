//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `analyze`: 批量分析炎症数据（统计 + 图表 + 异常检测）
//! - `check`: 仅运行异常检测
//! - `stats`: 单文件按天统计
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: analyze, check, stats

pub mod analyze;
pub mod check;
pub mod stats;

use clap::{Parser, Subcommand};

/// Inflam - 炎症研究数据分析工具箱
#[derive(Parser)]
#[command(name = "inflam")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "A unified inflammation study data analysis toolkit", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Analyze inflammation datasets (statistics, plots, problem detection)
    Analyze(analyze::AnalyzeArgs),

    /// Run data-quality checks on inflammation datasets
    Check(check::CheckArgs),

    /// Print per-day statistics for a single dataset
    Stats(stats::StatsArgs),
}
