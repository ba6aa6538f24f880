//! # 统计数据导出
//!
//! 导出按天统计量到 CSV 文件。
//!
//! ## 依赖关系
//! - 被 `commands/stats.rs` 调用
//! - 使用 `analysis/dataset.rs` 的 InflammationData
//! - 使用 `csv` / `serde` 写入 CSV 文件

use crate::analysis::dataset::InflammationData;
use crate::error::{InflamError, Result};

use serde::Serialize;
use std::path::Path;

/// 一天的统计记录
#[derive(Debug, Serialize)]
struct DayStats {
    day: usize,
    mean: f64,
    max: f64,
    min: f64,
}

/// 导出按天统计量为 CSV 格式（day, mean, max, min）
pub fn stats_to_csv(data: &InflammationData, output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path).map_err(InflamError::CsvError)?;

    let mean = data.mean_per_day();
    let max = data.max_per_day();
    let min = data.min_per_day();

    for day in 0..data.days() {
        wtr.serialize(DayStats {
            day,
            mean: mean[day],
            max: max[day],
            min: min[day],
        })
        .map_err(InflamError::CsvError)?;
    }

    wtr.flush().map_err(|e| InflamError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_to_csv() {
        let data =
            InflammationData::parse_str("0,1,2\n2,3,4\n", "test", "test.csv").unwrap();

        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("stats.csv");
        stats_to_csv(&data, &out).unwrap();

        let content = std::fs::read_to_string(&out).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next(), Some("day,mean,max,min"));
        assert_eq!(lines.next(), Some("0,1.0,2.0,0.0"));
        assert_eq!(lines.next(), Some("1,2.0,3.0,1.0"));
        assert_eq!(lines.next(), Some("2,3.0,4.0,2.0"));
    }
}
