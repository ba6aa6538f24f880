//! # stats 子命令 CLI 定义
//!
//! 单文件按天统计输出。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/stats.rs`

use clap::Args;
use std::path::PathBuf;

/// stats 子命令参数
#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Input dataset file (headerless CSV, rows = patients, columns = days)
    pub input: PathBuf,

    /// Number of days to show in the table (0 = all)
    #[arg(long, default_value_t = 0)]
    pub days: usize,

    /// Export the full per-day statistics to a CSV file
    #[arg(long)]
    pub output_csv: Option<PathBuf>,
}
