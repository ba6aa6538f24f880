//! # 文件收集器
//!
//! 根据目录和 glob 模式收集待处理文件列表。
//!
//! ## 功能
//! - glob 模式匹配（如 inflammation*.csv）
//! - 结果按文件名升序字典序排列
//! - 无匹配时返回空列表而非错误
//!
//! ## 依赖关系
//! - 被 `commands/analyze.rs`, `commands/check.rs` 调用
//! - 使用 `walkdir` 遍历目录
//! - 使用 `glob` 进行模式匹配

use crate::error::{InflamError, Result};

use std::path::PathBuf;
use walkdir::WalkDir;

/// 文件收集器
pub struct FileCollector {
    /// 输入目录
    dir: PathBuf,
    /// 文件名匹配模式
    pattern: String,
}

impl FileCollector {
    /// 创建新的文件收集器
    pub fn new(dir: PathBuf) -> Self {
        Self {
            dir,
            pattern: "*".to_string(),
        }
    }

    /// 设置文件名匹配模式
    pub fn with_pattern(mut self, pattern: &str) -> Self {
        self.pattern = pattern.to_string();
        self
    }

    /// 收集所有匹配的文件，按文件名升序排列
    pub fn collect(&self) -> Result<Vec<PathBuf>> {
        if !self.dir.is_dir() {
            return Err(InflamError::DirectoryNotFound {
                path: self.dir.display().to_string(),
            });
        }

        let glob_pattern = glob::Pattern::new(&self.pattern).map_err(|e| {
            InflamError::InvalidArgument(format!("Invalid pattern '{}': {}", self.pattern, e))
        })?;

        let mut files: Vec<PathBuf> = WalkDir::new(&self.dir)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| {
                e.file_name()
                    .to_str()
                    .map(|name| glob_pattern.matches(name))
                    .unwrap_or(false)
            })
            .map(|e| e.path().to_path_buf())
            .collect();

        files.sort();
        Ok(files)
    }
}

/// 截取文件列表的前 n 个元素，不足 n 时全部保留
pub fn select_prefix(mut files: Vec<PathBuf>, n: usize) -> Vec<PathBuf> {
    files.truncate(n);
    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(dir: &std::path::Path, name: &str) {
        fs::write(dir.join(name), "0,0\n").unwrap();
    }

    #[test]
    fn test_collect_sorted_and_filtered() {
        let tmp = tempfile::tempdir().unwrap();
        touch(tmp.path(), "inflammation-02.csv");
        touch(tmp.path(), "inflammation-01.csv");
        touch(tmp.path(), "notes.txt");

        let files = FileCollector::new(tmp.path().to_path_buf())
            .with_pattern("inflammation*.csv")
            .collect()
            .unwrap();

        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["inflammation-01.csv", "inflammation-02.csv"]);
    }

    #[test]
    fn test_collect_empty_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let files = FileCollector::new(tmp.path().to_path_buf())
            .with_pattern("inflammation*.csv")
            .collect()
            .unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_collect_missing_dir() {
        let result = FileCollector::new(PathBuf::from("/no/such/dir")).collect();
        assert!(matches!(result, Err(InflamError::DirectoryNotFound { .. })));
    }

    #[test]
    fn test_collect_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        touch(tmp.path(), "inflammation-03.csv");
        touch(tmp.path(), "inflammation-01.csv");

        let collector = FileCollector::new(tmp.path().to_path_buf())
            .with_pattern("inflammation*.csv");
        assert_eq!(collector.collect().unwrap(), collector.collect().unwrap());
    }

    #[test]
    fn test_lexical_ordering_with_two_digit_suffix() {
        let tmp = tempfile::tempdir().unwrap();
        for name in [
            "inflammation-10.csv",
            "inflammation-01.csv",
            "inflammation-03.csv",
            "inflammation-02.csv",
        ] {
            touch(tmp.path(), name);
        }

        let files = FileCollector::new(tmp.path().to_path_buf())
            .with_pattern("inflammation*.csv")
            .collect()
            .unwrap();
        let selected = select_prefix(files, 3);

        let names: Vec<_> = selected
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(
            names,
            vec![
                "inflammation-01.csv",
                "inflammation-02.csv",
                "inflammation-03.csv"
            ]
        );
    }

    #[test]
    fn test_select_prefix_shorter_than_window() {
        let files = vec![PathBuf::from("a.csv"), PathBuf::from("b.csv")];
        let selected = select_prefix(files.clone(), 3);
        assert_eq!(selected, files);
    }
}
