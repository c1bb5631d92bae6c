//! 文档重建流程 - 流程层
//!
//! 核心职责：定义"一篇文档"的完整重建流程
//!
//! 流程顺序（屏障在先，逐块在后）：
//! 1. 切行 → 分块（全文第一遍扫描，必须先完成）
//! 2. 逐块：分类 → 解析（块与块之间互不依赖）
//! 3. 标记对账（要求完整旁表已就位）
//! 4. 校验 → 接受/拒绝清单
//!
//! 纯同步变换：一份行流进，一组 QuestionRecord 出。
//! 不持有任何跨调用的可变状态，多篇文档可各开一个任务并行跑。

use crate::config::Config;
use crate::error::EngineError;
use crate::models::line::split_lines;
use crate::models::marker::MarkerTable;
use crate::models::question::ParseOutcome;
use crate::services::{Classifier, Patterns, Reconciler, Resolver, Segmenter, Validator};
use std::sync::Arc;
use tracing::{debug, info};

/// 文档重建流程
///
/// - 编排五个服务的调用顺序
/// - 每次 parse 调用使用全新的累积器，无共享可变状态
/// - 只依赖业务能力（services）
pub struct DocumentFlow {
    segmenter: Segmenter,
    classifier: Classifier,
    resolver: Resolver,
    reconciler: Reconciler,
    validator: Validator,
}

impl DocumentFlow {
    /// 创建新的文档重建流程
    pub fn new(config: &Config) -> Result<Self, EngineError> {
        let patterns = Arc::new(Patterns::new()?);
        Ok(Self {
            segmenter: Segmenter::new(patterns.clone(), config.keep_preamble),
            classifier: Classifier::new(patterns.clone()),
            resolver: Resolver::new(patterns.clone()),
            reconciler: Reconciler::new(patterns),
            validator: Validator::new(),
        })
    }

    /// 重建一篇文档
    ///
    /// # 参数
    /// - `text`: 标记发射器输出的归一化文本流
    /// - `markers`: 完整的标记旁表（只读）
    ///
    /// # 返回
    /// 返回逐题的接受/拒绝清单；仅当整篇文档找不到题头时
    /// 返回文档级错误 `MalformedHeader`
    pub fn parse(&self, text: &str, markers: &MarkerTable) -> Result<ParseOutcome, EngineError> {
        let lines = split_lines(text);
        let blocks = self.segmenter.segment(&lines)?;
        debug!("分块完成，共 {} 个块", blocks.len());

        let mut outcome = ParseOutcome::default();

        for block in &blocks {
            let fragments = self.classifier.classify(block);
            let mut draft = self.resolver.resolve(block, &fragments);
            let warnings = self.reconciler.reconcile(&mut draft, markers);
            outcome.warnings.extend(warnings);

            match self.validator.validate(draft) {
                Ok(record) => outcome.accepted.push(record),
                Err(rejection) => {
                    debug!(
                        "[题 {}] 拒绝: {} (行 {}-{})",
                        rejection.number,
                        rejection.reason,
                        rejection.line_range.0,
                        rejection.line_range.1
                    );
                    outcome.rejected.push(rejection);
                }
            }
        }

        info!(
            "✓ 重建完成: 接受 {} / 拒绝 {} / 警告 {}",
            outcome.accepted.len(),
            outcome.rejected.len(),
            outcome.warnings.len()
        );
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RejectReason;
    use crate::models::marker::MarkerPayload;
    use crate::models::question::{CorrectAnswer, QuestionType};

    fn flow() -> DocumentFlow {
        DocumentFlow::new(&Config::default()).unwrap()
    }

    const SAMPLE: &str = "\
1. 法国的首都是哪座城市？
A) Paris
B) London
C) Berlin
D) Madrid
Answer: A
Explanation: 常识题。
2. 计算 6 × 7 的结果。
Answer: 42
3. 下列哪个是质数？
A) 4
Answer: A";

    #[test]
    fn test_full_pipeline_accept_and_reject() {
        let outcome = flow().parse(SAMPLE, &MarkerTable::new()).unwrap();
        assert_eq!(outcome.accepted.len(), 2);
        assert_eq!(outcome.rejected.len(), 1);

        let mcq = &outcome.accepted[0];
        assert_eq!(mcq.number, 1);
        assert_eq!(mcq.kind, QuestionType::MultipleChoice);
        assert_eq!(mcq.correct_answer, CorrectAnswer::Index(0));
        assert_eq!(mcq.explanation, "常识题。");

        let short = &outcome.accepted[1];
        assert_eq!(short.kind, QuestionType::ShortAnswer);
        assert_eq!(
            short.correct_answer,
            CorrectAnswer::Literal("42".to_string())
        );

        // 单选项块被拒，而不是被硬凑成有效题目
        assert_eq!(outcome.rejected[0].number, 3);
        assert_eq!(outcome.rejected[0].reason, RejectReason::AmbiguousOptionCount);
    }

    #[test]
    fn test_rejection_never_aborts_document() {
        let text = "1. 题干\nA) 甲\nB) 乙\nAnswer: E\n2. 好题\nA) 丙\nB) 丁\nAnswer: B";
        let outcome = flow().parse(text, &MarkerTable::new()).unwrap();
        assert_eq!(outcome.accepted.len(), 1);
        assert_eq!(outcome.accepted[0].number, 2);
        assert!(matches!(
            outcome.rejected[0].reason,
            RejectReason::UnresolvedAnswer { .. }
        ));
    }

    #[test]
    fn test_no_header_escalates() {
        let err = flow().parse("没有题头的文字", &MarkerTable::new()).unwrap_err();
        assert!(matches!(err, EngineError::MalformedHeader { .. }));
    }

    #[test]
    fn test_marker_reconciliation_in_pipeline() {
        let mut markers = MarkerTable::new();
        markers.insert(
            "img_1".to_string(),
            MarkerPayload::Image {
                value: "a.png".to_string(),
            },
        );
        let text = "1. 如图 [IMAGE:img_1] 求 [MATH:x^2+1] 的最小值\nAnswer: 1";
        let outcome = flow().parse(text, &markers).unwrap();
        let record = &outcome.accepted[0];
        assert_eq!(record.image_ref.as_deref(), Some("a.png"));
        assert!(record.text.contains("$x^2+1$"));
        assert_eq!(record.math_exprs, vec!["x^2+1"]);
    }

    #[test]
    fn test_idempotent_parse() {
        let markers = MarkerTable::new();
        let first = flow().parse(SAMPLE, &markers).unwrap();
        let second = flow().parse(SAMPLE, &markers).unwrap();
        assert_eq!(first.accepted, second.accepted);
        assert_eq!(first.rejected.len(), second.rejected.len());
    }
}
