//! # 统计图表生成
//!
//! 使用 `plotters` 库绘制按天统计曲线（均值 / 最大 / 最小）。
//!
//! ## 功能
//! - 三条统计曲线共用一张图，带图例
//! - 支持 PNG 和 SVG 输出
//!
//! ## 依赖关系
//! - 被 `commands/analyze.rs` 调用
//! - 使用 `analysis/dataset.rs` 的 InflammationData
//! - 使用 `plotters` 渲染图表

use crate::analysis::dataset::InflammationData;
use crate::error::{InflamError, Result};

use plotters::prelude::*;
use std::path::Path;

/// 生成按天统计图表
pub fn generate_stats_plot(
    data: &InflammationData,
    output_path: &Path,
    title: &str,
    width: u32,
    height: u32,
    use_svg: bool,
) -> Result<()> {
    if use_svg {
        let root = SVGBackend::new(output_path, (width, height)).into_drawing_area();
        draw_stats_chart(&root, data, title)?;
        root.present()
            .map_err(|e| InflamError::PlotError(e.to_string()))?;
    } else {
        let root = BitMapBackend::new(output_path, (width, height)).into_drawing_area();
        draw_stats_chart(&root, data, title)?;
        root.present()
            .map_err(|e| InflamError::PlotError(e.to_string()))?;
    }
    Ok(())
}

/// 绘制统计图表的核心逻辑
fn draw_stats_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    data: &InflammationData,
    title: &str,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)
        .map_err(|e| InflamError::PlotError(format!("{:?}", e)))?;

    let mean = data.mean_per_day();
    let max = data.max_per_day();
    let min = data.min_per_day();

    let days = data.days();
    let y_max = max.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let y_margin = (y_max.abs() * 0.1).max(1.0);

    let mut chart = ChartBuilder::on(root)
        .caption(title, ("sans-serif", 28).into_font())
        .margin(30)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..(days as f64 - 1.0).max(1.0), 0.0..(y_max + y_margin))
        .map_err(|e| InflamError::PlotError(format!("{:?}", e)))?;

    chart
        .configure_mesh()
        .x_desc("Day")
        .y_desc("Inflammation")
        .x_label_style(("sans-serif", 16))
        .y_label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 18))
        .draw()
        .map_err(|e| InflamError::PlotError(format!("{:?}", e)))?;

    let series = [
        ("Mean", &mean, RGBColor(0, 102, 204)),
        ("Max", &max, RGBColor(204, 51, 51)),
        ("Min", &min, RGBColor(51, 153, 51)),
    ];

    for (label, values, color) in series {
        chart
            .draw_series(LineSeries::new(
                values.iter().enumerate().map(|(d, v)| (d as f64, *v)),
                color.stroke_width(2),
            ))
            .map_err(|e| InflamError::PlotError(format!("{:?}", e)))?
            .label(label)
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
            });
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(|e| InflamError::PlotError(format!("{:?}", e)))?;

    Ok(())
}
