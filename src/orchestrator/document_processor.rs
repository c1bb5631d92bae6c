//! 单个文档处理器 - 编排层
//!
//! 职责：拿一篇已加载的文档走完重建流程，把接受/拒绝清单
//! 落成 JSON，并输出该文档的统计信息。不做具体解析判断，
//! 解析细节全部向下委托给 workflow::DocumentFlow。

use crate::config::Config;
use crate::models::loaders::QuizDocument;
use crate::models::question::ParseOutcome;
use crate::utils::logging::truncate_text;
use crate::workflow::DocumentFlow;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::{info, warn};

/// 单个文档的处理统计
#[derive(Debug, Default)]
pub struct DocumentStats {
    pub accepted: usize,
    pub rejected: usize,
    pub warnings: usize,
}

/// 处理单篇文档
///
/// # 参数
/// - `flow`: 共享的重建流程
/// - `document`: 已加载的文档
/// - `doc_index`: 文档索引（用于日志）
/// - `config`: 配置
///
/// # 返回
/// 返回该文档的统计；整篇无题头时向上返回错误，由批处理器记失败
pub async fn process_single_document(
    flow: &DocumentFlow,
    document: QuizDocument,
    doc_index: usize,
    config: &Config,
) -> Result<DocumentStats> {
    info!("[文档 {}] 开始处理: {}", doc_index, document.name);

    let markers = document.marker_table();
    let outcome = flow
        .parse(&document.text, &markers)
        .with_context(|| format!("文档重建失败: {}", document.name))?;

    log_outcome(doc_index, &outcome);

    let stats = DocumentStats {
        accepted: outcome.accepted.len(),
        rejected: outcome.rejected.len(),
        warnings: outcome.warnings.len(),
    };

    write_outcome(&document, &outcome, config).await?;

    Ok(stats)
}

/// 把解析结果写成 JSON 文件（文件名沿用文档名）
async fn write_outcome(
    document: &QuizDocument,
    outcome: &ParseOutcome,
    config: &Config,
) -> Result<()> {
    let folder = Path::new(&config.output_folder);
    tokio::fs::create_dir_all(folder)
        .await
        .with_context(|| format!("无法创建输出目录: {}", config.output_folder))?;

    let path = folder.join(format!("{}.json", document.name));
    let json = serde_json::to_string_pretty(outcome).context("结果序列化失败")?;
    tokio::fs::write(&path, json)
        .await
        .with_context(|| format!("无法写入结果文件: {}", path.display()))?;

    info!("💾 结果已写入: {}", path.display());
    Ok(())
}

fn log_outcome(doc_index: usize, outcome: &ParseOutcome) {
    info!(
        "[文档 {}] ✓ 接受 {} 题 / 拒绝 {} 题",
        doc_index,
        outcome.accepted.len(),
        outcome.rejected.len()
    );
    for rejection in &outcome.rejected {
        warn!(
            "[文档 {}] ⚠️ 题 {} 被拒 (行 {}-{}): {}",
            doc_index,
            rejection.number,
            rejection.line_range.0,
            rejection.line_range.1,
            rejection.reason
        );
    }
    for record in &outcome.accepted {
        tracing::debug!(
            "[文档 {}] 题 {}: {}",
            doc_index,
            record.number,
            truncate_text(&record.text, 80)
        );
    }
}
