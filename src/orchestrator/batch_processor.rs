//! 批量文档处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责批量文档的处理和并发控制。
//!
//! 1. **应用初始化**：启动日志、构建 DocumentFlow
//! 2. **批量加载**：扫描并加载所有待处理的文档（`Vec<QuizDocument>`）
//! 3. **并发控制**：使用 Semaphore 限制并发数量
//! 4. **分批处理**：文档分批次处理，每批完成后再开始下一批
//! 5. **全局统计**：汇总所有文档的处理结果
//!
//! 重建引擎本身是纯同步变换，不同文档之间没有共享可变状态，
//! 因此一篇文档一个任务即可安全并行。

use crate::config::Config;
use crate::models::loaders::{load_all_toml_files, QuizDocument};
use crate::orchestrator::document_processor;
use crate::utils::logging;
use crate::workflow::DocumentFlow;
use anyhow::Result;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{error, warn};

/// 应用主结构
pub struct App {
    config: Config,
    flow: Arc<DocumentFlow>,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Result<Self> {
        logging::init_log_file(&config.output_log_file)?;
        logging::log_startup(config.max_concurrent_docs);

        let flow = Arc::new(DocumentFlow::new(&config)?);

        Ok(Self { config, flow })
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<()> {
        // 加载所有待处理的文档
        let all_documents = load_all_toml_files(&self.config.doc_folder).await?;

        if all_documents.is_empty() {
            warn!("⚠️ 没有找到待处理的TOML文件，程序结束");
            return Ok(());
        }

        let total = all_documents.len();
        logging::log_documents_loaded(total, self.config.max_concurrent_docs);

        let stats = self.process_all_documents(all_documents).await?;

        logging::print_final_stats(
            stats.success,
            stats.failed,
            stats.total,
            &self.config.output_log_file,
        );

        Ok(())
    }

    /// 分批处理所有文档
    async fn process_all_documents(&self, all_documents: Vec<QuizDocument>) -> Result<ProcessingStats> {
        let semaphore = Arc::new(Semaphore::new(self.config.max_concurrent_docs));
        let total = all_documents.len();
        let per_batch = self.config.max_concurrent_docs;
        let mut stats = ProcessingStats {
            total,
            ..Default::default()
        };

        let mut documents = all_documents.into_iter().enumerate().collect::<Vec<_>>();
        let total_batches = total.div_ceil(per_batch);

        for batch_num in 1..=total_batches {
            let rest = documents.split_off(per_batch.min(documents.len()));
            let batch = std::mem::replace(&mut documents, rest);

            let start = (batch_num - 1) * per_batch + 1;
            let end = start + batch.len() - 1;
            logging::log_batch_start(batch_num, total_batches, start, end, total);

            let result = self.process_batch(batch, semaphore.clone()).await;
            stats.success += result.success;
            stats.failed += result.failed;

            logging::log_batch_complete(batch_num, result.success, result.success + result.failed);
        }

        Ok(stats)
    }

    /// 处理单个批次
    async fn process_batch(
        &self,
        batch: Vec<(usize, QuizDocument)>,
        semaphore: Arc<Semaphore>,
    ) -> BatchResult {
        let mut handles = Vec::new();

        for (idx, document) in batch {
            let doc_index = idx + 1;
            let permit = match semaphore.clone().acquire_owned().await {
                Ok(permit) => permit,
                Err(e) => {
                    error!("[文档 {}] 获取并发许可失败: {}", doc_index, e);
                    continue;
                }
            };
            let flow = self.flow.clone();
            let config = self.config.clone();

            let handle = tokio::spawn(async move {
                let _permit = permit;
                document_processor::process_single_document(&flow, document, doc_index, &config)
                    .await
            });
            handles.push((doc_index, handle));
        }

        let mut result = BatchResult::default();
        for (doc_index, handle) in handles {
            match handle.await {
                Ok(Ok(_doc_stats)) => {
                    result.success += 1;
                }
                Ok(Err(e)) => {
                    error!("[文档 {}] ❌ 处理过程中发生错误: {}", doc_index, e);
                    result.failed += 1;
                }
                Err(e) => {
                    error!("[文档 {}] 任务执行失败: {}", doc_index, e);
                    result.failed += 1;
                }
            }
        }

        result
    }
}

/// 处理统计
#[derive(Debug, Default)]
struct ProcessingStats {
    success: usize,
    failed: usize,
    total: usize,
}

/// 批次处理结果
#[derive(Debug, Default)]
struct BatchResult {
    success: usize,
    failed: usize,
}
