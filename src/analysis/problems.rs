//! # 数据质量检测
//!
//! 对按天聚合的统计量应用异常检测规则。
//!
//! ## 检测规则
//! - 可疑最大值：第 0 天最大值为 0 且第 20 天最大值为 20（疑似合成数据）
//! - 最小值全零：每天最小值之和为 0（疑似健康人混入）
//!
//! ## 依赖关系
//! - 被 `commands/analyze.rs` 和 `commands/check.rs` 调用
//! - 使用 `analysis/dataset.rs` 的 InflammationData

use crate::analysis::dataset::InflammationData;

/// 可疑最大值检测所需的天索引
const MAXIMA_CHECK_DAY: usize = 20;

/// 单个数据集的检测结论
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Finding {
    /// 可疑最大值：线性爬升特征
    SuspiciousMaxima,
    /// 每天最小值之和为零
    ZeroMinimaSum,
    /// 未发现异常
    Ok,
}

impl Finding {
    /// 是否为异常
    pub fn is_anomaly(&self) -> bool {
        !matches!(self, Finding::Ok)
    }
}

impl std::fmt::Display for Finding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Finding::SuspiciousMaxima => write!(f, "Suspicious looking maxima!"),
            Finding::ZeroMinimaSum => write!(f, "Minima add up to zero!"),
            Finding::Ok => write!(f, "Seems OK!"),
        }
    }
}

/// 检测数据集中的质量问题
///
/// 最大值检查需要至少 21 天数据，天数不足时跳过该规则。
pub fn detect_problems(data: &InflammationData) -> Finding {
    let max = data.max_per_day();
    let min = data.min_per_day();

    if data.days() > MAXIMA_CHECK_DAY && max[0] == 0.0 && max[MAXIMA_CHECK_DAY] == 20.0 {
        return Finding::SuspiciousMaxima;
    }

    if min.iter().sum::<f64>() == 0.0 {
        return Finding::ZeroMinimaSum;
    }

    Finding::Ok
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 构造一个 patients x days 的数据集，值由闭包给出
    fn make_data<F>(patients: usize, days: usize, f: F) -> InflammationData
    where
        F: Fn(usize, usize) -> f64,
    {
        let content: String = (0..patients)
            .map(|p| {
                (0..days)
                    .map(|d| format!("{}", f(p, d)))
                    .collect::<Vec<_>>()
                    .join(",")
            })
            .collect::<Vec<_>>()
            .join("\n");
        InflammationData::parse_str(&content, "test", "test.csv").unwrap()
    }

    #[test]
    fn test_suspicious_maxima() {
        // 最大值随天数线性爬升: max[0] = 0, max[20] = 20
        let data = make_data(3, 40, |_, d| d as f64);
        assert_eq!(detect_problems(&data), Finding::SuspiciousMaxima);
    }

    #[test]
    fn test_zero_minima_sum() {
        // 一个全零病人使每天最小值之和为 0
        let data = make_data(3, 40, |p, d| if p == 0 { 0.0 } else { (d + 1) as f64 });
        assert_eq!(detect_problems(&data), Finding::ZeroMinimaSum);
    }

    #[test]
    fn test_healthy_data() {
        let data = make_data(3, 40, |p, d| (p + d + 1) as f64);
        assert_eq!(detect_problems(&data), Finding::Ok);
    }

    #[test]
    fn test_short_dataset_skips_maxima_check() {
        // 仅 10 天：最大值规则不可用，但最小值规则仍生效
        let data = make_data(2, 10, |p, d| if p == 0 { 0.0 } else { (d + 1) as f64 });
        assert_eq!(detect_problems(&data), Finding::ZeroMinimaSum);
    }

    #[test]
    fn test_anomaly_flag() {
        assert!(Finding::SuspiciousMaxima.is_anomaly());
        assert!(Finding::ZeroMinimaSum.is_anomaly());
        assert!(!Finding::Ok.is_anomaly());
    }
}
