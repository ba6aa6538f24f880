//! # 批量处理模块
//!
//! 提供统一的文件发现与批量处理能力。
//!
//! ## 功能
//! - glob 模式收集匹配文件列表
//! - 限定处理窗口（前 n 个文件）
//! - 串行流水线执行，失败即中止
//!
//! ## 依赖关系
//! - 被各命令模块使用
//! - 使用 `glob` / `walkdir` 进行文件发现
//! - 使用 `indicatif` 显示进度

pub mod collector;
pub mod driver;

pub use collector::{select_prefix, FileCollector};
pub use driver::{BatchDriver, PipelineStep};
