//! # 批量执行器
//!
//! 按固定步骤序列顺序处理文件列表。
//!
//! ## 功能
//! - 严格串行执行，首个错误即中止整个批次
//! - 处理每个文件前打印文件路径
//! - 进度条显示
//!
//! ## 依赖关系
//! - 被 `commands/analyze.rs`, `commands/check.rs` 调用
//! - 使用 `utils/progress.rs` 创建进度条
//! - 使用 `utils/output.rs` 打印文件路径

use crate::error::Result;
use crate::utils::{output, progress};

use std::path::{Path, PathBuf};

/// 批处理流水线中的一个处理步骤
pub trait PipelineStep {
    /// 步骤名称（用于错误上下文）
    fn name(&self) -> &str;

    /// 处理单个文件
    fn process(&self, path: &Path) -> Result<()>;
}

/// 批量执行器
///
/// 每个文件依次经过全部步骤，任一步骤失败即返回错误，
/// 剩余文件不再处理。
pub struct BatchDriver {
    steps: Vec<Box<dyn PipelineStep>>,
}

impl BatchDriver {
    /// 创建新的批量执行器
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// 追加一个处理步骤
    pub fn with_step(mut self, step: Box<dyn PipelineStep>) -> Self {
        self.steps.push(step);
        self
    }

    /// 顺序处理文件列表，返回成功处理的文件数
    pub fn run(&self, files: &[PathBuf]) -> Result<usize> {
        let pb = progress::create_progress_bar(files.len() as u64, "Processing");

        let mut processed = 0;
        for file in files {
            pb.suspend(|| output::print_file(&file.display().to_string()));

            for step in &self.steps {
                if let Err(e) = step.process(file) {
                    pb.finish_and_clear();
                    output::print_error(&format!(
                        "Step '{}' failed on '{}', aborting batch",
                        step.name(),
                        file.display()
                    ));
                    return Err(e);
                }
            }

            processed += 1;
            pb.inc(1);
        }

        pb.finish_and_clear();
        Ok(processed)
    }
}

impl Default for BatchDriver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InflamError;
    use std::sync::{Arc, Mutex};

    /// 记录所有经过的路径
    struct RecordingStep {
        log: Arc<Mutex<Vec<PathBuf>>>,
    }

    impl PipelineStep for RecordingStep {
        fn name(&self) -> &str {
            "record"
        }

        fn process(&self, path: &Path) -> Result<()> {
            self.log.lock().unwrap().push(path.to_path_buf());
            Ok(())
        }
    }

    /// 在指定文件名上失败
    struct FailingStep {
        fail_on: String,
    }

    impl PipelineStep for FailingStep {
        fn name(&self) -> &str {
            "fail"
        }

        fn process(&self, path: &Path) -> Result<()> {
            if path.file_name().and_then(|n| n.to_str()) == Some(self.fail_on.as_str()) {
                return Err(InflamError::Other(format!("boom: {}", path.display())));
            }
            Ok(())
        }
    }

    fn paths(names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn test_run_all_files_through_all_steps() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let driver = BatchDriver::new()
            .with_step(Box::new(RecordingStep { log: log.clone() }))
            .with_step(Box::new(RecordingStep { log: log.clone() }));

        let files = paths(&["a.csv", "b.csv"]);
        let processed = driver.run(&files).unwrap();

        assert_eq!(processed, 2);
        // 每个文件依次经过两个步骤
        assert_eq!(log.lock().unwrap().len(), 4);
    }

    #[test]
    fn test_run_empty_file_list() {
        let driver = BatchDriver::new().with_step(Box::new(FailingStep {
            fail_on: "never.csv".to_string(),
        }));
        assert_eq!(driver.run(&[]).unwrap(), 0);
    }

    #[test]
    fn test_fail_fast_aborts_remaining_batch() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let driver = BatchDriver::new()
            .with_step(Box::new(RecordingStep { log: log.clone() }))
            .with_step(Box::new(FailingStep {
                fail_on: "b.csv".to_string(),
            }));

        let files = paths(&["a.csv", "b.csv", "c.csv"]);
        let result = driver.run(&files);

        assert!(result.is_err());
        // a 完整处理，b 已开始（第一步记录到），c 从未到达
        let seen = log.lock().unwrap();
        assert_eq!(*seen, paths(&["a.csv", "b.csv"]));
    }
}
