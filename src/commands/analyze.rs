//! # analyze 子命令实现
//!
//! 批量分析炎症数据集。
//!
//! ## 功能
//! - 按 glob 模式发现输入文件，字典序排列
//! - 限定处理窗口（默认前 3 个文件）
//! - 每个文件依次执行：统计分析（表格 + 图表）、异常检测
//! - 严格串行，首个错误中止整个批次
//!
//! ## 依赖关系
//! - 使用 `cli/analyze.rs` 定义的参数
//! - 使用 `batch/` 模块进行文件发现与流水线执行
//! - 使用 `analysis/` 模块进行统计、绘图与检测

use crate::analysis::{dataset, detect_problems, plot, InflammationData};
use crate::batch::{select_prefix, BatchDriver, FileCollector, PipelineStep};
use crate::cli::analyze::{AnalyzeArgs, PlotFormat};
use crate::error::{InflamError, Result};
use crate::utils::output;

use std::fs;
use std::path::{Path, PathBuf};
use tabled::{Table, Tabled};

/// 执行批量分析
pub fn execute(args: AnalyzeArgs) -> Result<()> {
    output::print_header("Inflammation Data Analysis");

    let files = collect_input_files(&args)?;
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

    output::print_info(&format!("Processing {} file(s)", selected.len()));

    if !args.no_plot {
        fs::create_dir_all(&args.output_dir).map_err(|e| InflamError::FileWriteError {
            path: args.output_dir.display().to_string(),
            source: e,
        })?;
    }

    let driver = BatchDriver::new()
        .with_step(Box::new(AnalyseStep {
            output_dir: args.output_dir.clone(),
            format: args.format,
            width: args.width,
            height: args.height,
            table_days: args.days,
            no_plot: args.no_plot,
        }))
        .with_step(Box::new(DetectProblemsStep));

    let processed = driver.run(&selected)?;

    output::print_separator();
    output::print_done(&format!("Analyzed {} file(s)", processed));

    Ok(())
}

/// 收集输入文件（单文件输入绕过发现阶段）
fn collect_input_files(args: &AnalyzeArgs) -> Result<Vec<PathBuf>> {
    if args.input.is_file() {
        return Ok(vec![args.input.clone()]);
    }

    FileCollector::new(args.input.clone())
        .with_pattern(&args.pattern)
        .collect()
}

// ─────────────────────────────────────────────────────────────
// 流水线步骤
// ─────────────────────────────────────────────────────────────

/// 统计分析步骤：摘要、按天统计表、统计曲线图
struct AnalyseStep {
    output_dir: PathBuf,
    format: PlotFormat,
    width: u32,
    height: u32,
    table_days: usize,
    no_plot: bool,
}

impl PipelineStep for AnalyseStep {
    fn name(&self) -> &str {
        "analyse"
    }

    fn process(&self, path: &Path) -> Result<()> {
        let data = InflammationData::load(path)?;

        output::print_success(&format!(
            "Loaded dataset: {} ({} patients, {} days)",
            data.name,
            data.patients(),
            data.days()
        ));

        print_stats_table(&data, self.table_days);

        if self.no_plot {
            return Ok(());
        }

        let title = match dataset::dataset_index(&data.name) {
            Some(index) => format!("Inflammation dataset {}", index),
            None => data.name.clone(),
        };
        let plot_path = self
            .output_dir
            .join(format!("{}_stats.{}", data.name, self.format.extension()));

        plot::generate_stats_plot(
            &data,
            &plot_path,
            &title,
            self.width,
            self.height,
            self.format == PlotFormat::Svg,
        )?;

        output::print_success(&format!("Plot saved to '{}'", plot_path.display()));
        Ok(())
    }
}

/// 异常检测步骤
struct DetectProblemsStep;

impl PipelineStep for DetectProblemsStep {
    fn name(&self) -> &str {
        "detect-problems"
    }

    fn process(&self, path: &Path) -> Result<()> {
        let data = InflammationData::load(path)?;
        let finding = detect_problems(&data);

        if finding.is_anomaly() {
            output::print_warning(&format!("{}: {}", data.name, finding));
        } else {
            output::print_success(&format!("{}: {}", data.name, finding));
        }

        Ok(())
    }
}

/// 打印按天统计表（前 count 天，0 为全部）
fn print_stats_table(data: &InflammationData, count: usize) {
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

    let mean = data.mean_per_day();
    let max = data.max_per_day();
    let min = data.min_per_day();

    let count = if count == 0 {
        data.days()
    } else {
        count.min(data.days())
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
}
