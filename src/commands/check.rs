//! # check 子命令实现
//!
//! 对数据集批量运行异常检测并汇总结果。
//!
//! ## 功能
//! - 按 glob 模式发现输入文件
//! - 逐个加载并应用检测规则
//! - 终端表格汇总各文件结论
//!
//! ## 依赖关系
//! - 使用 `cli/check.rs` 定义的参数
//! - 使用 `batch/collector.rs` 收集文件
//! - 使用 `analysis/problems.rs` 进行检测

use crate::analysis::{detect_problems, InflammationData};
use crate::batch::{select_prefix, FileCollector};
use crate::cli::check::CheckArgs;
use crate::error::Result;
use crate::utils::{output, progress};

use tabled::{Table, Tabled};

/// 检测结果汇总行
#[derive(Tabled)]
struct CheckRow {
    #[tabled(rename = "Dataset")]
    dataset: String,
    #[tabled(rename = "Patients")]
    patients: usize,
    #[tabled(rename = "Days")]
    days: usize,
    #[tabled(rename = "Finding")]
    finding: String,
}

/// 执行批量检测
pub fn execute(args: CheckArgs) -> Result<()> {
    output::print_header("Inflammation Data Quality Check");

    let files = if args.input.is_file() {
        vec![args.input.clone()]
    } else {
        FileCollector::new(args.input.clone())
            .with_pattern(&args.pattern)
            .collect()?
    };

    if files.is_empty() {
        output::print_warning(&format!(
            "No matching files found with pattern '{}'",
            args.pattern
        ));
        return Ok(());
    }

    let window = if args.limit == 0 {
        files.len()
    } else {
        args.limit
    };
    let selected = select_prefix(files, window);

    output::print_info(&format!("Checking {} file(s)", selected.len()));

    let pb = progress::create_progress_bar(selected.len() as u64, "Checking");

    let mut rows = Vec::with_capacity(selected.len());
    let mut anomalies = 0;

    for file in &selected {
        pb.suspend(|| output::print_file(&file.display().to_string()));

        let data = match InflammationData::load(file) {
            Ok(d) => d,
            Err(e) => {
                pb.finish_and_clear();
                return Err(e);
            }
        };
        let finding = detect_problems(&data);
        if finding.is_anomaly() {
            anomalies += 1;
        }

        rows.push(CheckRow {
            dataset: data.name.clone(),
            patients: data.patients(),
            days: data.days(),
            finding: finding.to_string(),
        });

        pb.inc(1);
    }

    pb.finish_and_clear();

    let table = Table::new(&rows);
    println!("{}", table);

    output::print_separator();
    if anomalies > 0 {
        output::print_warning(&format!(
            "{} of {} dataset(s) flagged",
            anomalies,
            rows.len()
        ));
    } else {
        output::print_done(&format!("All {} dataset(s) look OK", rows.len()));
    }

    Ok(())
}
