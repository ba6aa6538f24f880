//! # stats 子命令实现
//!
//! 单个数据集的按天统计输出。
//!
//! ## 功能
//! - 终端表格显示每天的均值 / 最大 / 最小
//! - 可选导出完整统计为 CSV
//!
//! ## 依赖关系
//! - 使用 `cli/stats.rs` 定义的参数
//! - 使用 `analysis/dataset.rs` 加载数据
//! - 使用 `analysis/export.rs` 导出 CSV

use crate::analysis::{export, InflammationData};
use crate::cli::stats::StatsArgs;
use crate::error::Result;
use crate::utils::output;

use tabled::{Table, Tabled};

/// 统计表行
#[derive(Tabled)]
struct StatsRow {
    #[tabled(rename = "Day")]
    day: usize,
    #[tabled(rename = "Mean")]
    mean: String,
    #[tabled(rename = "Max")]
    max: String,
    #[tabled(rename = "Min")]
    min: String,
}

/// 执行单文件统计
pub fn execute(args: StatsArgs) -> Result<()> {
    output::print_header("Per-Day Inflammation Statistics");

    let data = InflammationData::load(&args.input)?;

    output::print_success(&format!(
        "Loaded dataset: {} ({} patients, {} days)",
        data.name,
        data.patients(),
        data.days()
    ));

    let mean = data.mean_per_day();
    let max = data.max_per_day();
    let min = data.min_per_day();

    let count = if args.days == 0 {
        data.days()
    } else {
        args.days.min(data.days())
    };

    let rows: Vec<StatsRow> = (0..count)
        .map(|day| StatsRow {
            day,
            mean: format!("{:.2}", mean[day]),
            max: format!("{:.1}", max[day]),
            min: format!("{:.1}", min[day]),
        })
        .collect();

    let table = Table::new(&rows);
    println!("{}", table);

    if let Some(ref output_csv) = args.output_csv {
        export::stats_to_csv(&data, output_csv)?;
        output::print_success(&format!("Statistics saved to '{}'", output_csv.display()));
    }

    Ok(())
}
