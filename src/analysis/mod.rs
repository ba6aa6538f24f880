//! # 数据分析模块
//!
//! 炎症数据集的加载、统计、异常检测与可视化。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 子模块: dataset, problems, plot, export

pub mod dataset;
pub mod export;
pub mod plot;
pub mod problems;

pub use dataset::InflammationData;
pub use problems::{detect_problems, Finding};
