//! # 炎症数据集模型
//!
//! 从无表头 CSV 读取病人炎症数据矩阵：行 = 病人，列 = 天。
//!
//! ## 功能
//! - CSV 解析与矩形校验（列数一致）
//! - 按天聚合统计（均值 / 最大 / 最小）
//! - 从文件名提取数据集编号
//!
//! ## 依赖关系
//! - 被 `commands/` 和 `analysis/problems.rs` 使用
//! - 使用 `csv` 库解析
//! - 使用 `regex` 提取文件名编号

use crate::error::{InflamError, Result};

use regex::Regex;
use std::path::Path;

/// 一个队列研究的炎症数据矩阵
#[derive(Debug, Clone)]
pub struct InflammationData {
    /// 数据集名称（文件 stem）
    pub name: String,
    /// 读数矩阵，外层为病人，内层为每日读数
    rows: Vec<Vec<f64>>,
    /// 天数（列数）
    days: usize,
}

impl InflammationData {
    /// 从 CSV 文件加载数据集
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(InflamError::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| InflamError::FileReadError {
            path: path.display().to_string(),
            source: e,
        })?;

        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("dataset")
            .to_string();

        Self::parse_str(&content, &name, &path.display().to_string())
    }

    /// 从 CSV 文本解析数据集
    pub fn parse_str(content: &str, name: &str, path: &str) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(content.as_bytes());

        let mut rows: Vec<Vec<f64>> = Vec::new();
        let mut days = 0;

        for (i, record) in reader.records().enumerate() {
            let record = record.map_err(InflamError::CsvError)?;

            if rows.is_empty() {
                days = record.len();
            } else if record.len() != days {
                return Err(InflamError::RaggedRows {
                    path: path.to_string(),
                    row: i + 1,
                    found: record.len(),
                    expected: days,
                });
            }

            let mut row = Vec::with_capacity(record.len());
            for field in record.iter() {
                let value: f64 = field.parse().map_err(|_| InflamError::ParseError {
                    path: path.to_string(),
                    reason: format!("non-numeric value '{}' in row {}", field, i + 1),
                })?;
                row.push(value);
            }
            rows.push(row);
        }

        if rows.is_empty() || days == 0 {
            return Err(InflamError::EmptyDataset {
                path: path.to_string(),
            });
        }

        Ok(InflammationData {
            name: name.to_string(),
            rows,
            days,
        })
    }

    /// 病人数（行数）
    pub fn patients(&self) -> usize {
        self.rows.len()
    }

    /// 天数（列数）
    pub fn days(&self) -> usize {
        self.days
    }

    /// 每天所有病人的平均炎症值
    pub fn mean_per_day(&self) -> Vec<f64> {
        let n = self.rows.len() as f64;
        self.column_fold(0.0, |acc, v| acc + v)
            .into_iter()
            .map(|sum| sum / n)
            .collect()
    }

    /// 每天所有病人的最大炎症值
    pub fn max_per_day(&self) -> Vec<f64> {
        self.column_fold(f64::NEG_INFINITY, f64::max)
    }

    /// 每天所有病人的最小炎症值
    pub fn min_per_day(&self) -> Vec<f64> {
        self.column_fold(f64::INFINITY, f64::min)
    }

    /// 按列折叠所有行
    fn column_fold<F>(&self, init: f64, f: F) -> Vec<f64>
    where
        F: Fn(f64, f64) -> f64,
    {
        let mut acc = vec![init; self.days];
        for row in &self.rows {
            for (a, v) in acc.iter_mut().zip(row.iter()) {
                *a = f(*a, *v);
            }
        }
        acc
    }
}

/// 从文件名提取数据集编号（如 inflammation-03.csv -> "03"）
pub fn dataset_index(filename: &str) -> Option<String> {
    let re = Regex::new(r"inflammation-(\d+)").unwrap();
    re.captures(filename)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_parse_basic() {
        let content = "0,1,2\n1,2,3\n2,3,4\n";
        let data = InflammationData::parse_str(content, "test", "test.csv").unwrap();
        assert_eq!(data.patients(), 3);
        assert_eq!(data.days(), 3);
    }

    #[test]
    fn test_per_day_stats() {
        let content = "0,1,2\n1,2,3\n2,3,4\n";
        let data = InflammationData::parse_str(content, "test", "test.csv").unwrap();

        let mean = data.mean_per_day();
        assert_relative_eq!(mean[0], 1.0);
        assert_relative_eq!(mean[1], 2.0);
        assert_relative_eq!(mean[2], 3.0);

        assert_eq!(data.max_per_day(), vec![2.0, 3.0, 4.0]);
        assert_eq!(data.min_per_day(), vec![0.0, 1.0, 2.0]);
    }

    #[test]
    fn test_parse_ragged_rows() {
        let content = "0,1,2\n1,2\n";
        let result = InflammationData::parse_str(content, "test", "test.csv");
        assert!(matches!(result, Err(InflamError::RaggedRows { row: 2, .. })));
    }

    #[test]
    fn test_parse_non_numeric() {
        let content = "0,1,2\n1,x,3\n";
        let result = InflammationData::parse_str(content, "test", "test.csv");
        assert!(matches!(result, Err(InflamError::ParseError { .. })));
    }

    #[test]
    fn test_parse_empty() {
        let result = InflammationData::parse_str("", "test", "test.csv");
        assert!(matches!(result, Err(InflamError::EmptyDataset { .. })));
    }

    #[test]
    fn test_dataset_index() {
        assert_eq!(
            dataset_index("inflammation-03.csv"),
            Some("03".to_string())
        );
        assert_eq!(
            dataset_index("data/inflammation-10.csv"),
            Some("10".to_string())
        );
        assert_eq!(dataset_index("readings.csv"), None);
    }
}
