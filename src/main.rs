//! # Inflam - 炎症研究数据分析工具箱
//!
//! 将炎症临床试验数据的批量分析脚本用 Rust 重构，统一成单一可执行文件。
//!
//! ## 子命令
//! - `analyze` - 批量分析数据集（统计表、统计曲线图、异常检测）
//! - `check`   - 仅运行异常检测并汇总
//! - `stats`   - 单文件按天统计
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   ├── analysis/   (数据加载、统计、检测、绘图)
//!   ├── batch/      (文件发现与批量执行)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod analysis;
mod batch;
mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
