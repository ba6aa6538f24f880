//! # check 子命令 CLI 定义
//!
//! 仅运行异常检测，不生成统计表和图表。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/check.rs`

use clap::Args;
use std::path::PathBuf;

/// check 子命令参数
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Input: dataset file or directory containing dataset files
    pub input: PathBuf,

    /// Glob pattern for input files (directory mode)
    #[arg(short, long, default_value = "inflammation*.csv")]
    pub pattern: String,

    /// Check only the first N matching files (0 = no limit)
    #[arg(short, long, default_value_t = 0)]
    pub limit: usize,
}
