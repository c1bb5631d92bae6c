//! 校验器
//!
//! 把题目草稿收口为不可变的 QuestionRecord，或带原因拒绝。
//! 解析失败的答案绝不默认成第 0 个选项：无声的默认值会在
//! 没有任何信号的情况下污染判分结果，这里一律显式拒绝。

use crate::error::RejectReason;
use crate::models::question::{
    CorrectAnswer, DraftQuestion, QuestionRecord, QuestionType, Rejection,
};
use tracing::debug;

/// 校验器（无状态）
#[derive(Debug, Default)]
pub struct Validator;

impl Validator {
    pub fn new() -> Self {
        Self
    }

    /// 按规则顺序校验一道题
    ///
    /// 规则：(a) 题干非空，除非有图片或表格替代内容；
    /// (b) 选择题需 ≥ 2 个选项且答案下标已解析并在界内；
    /// (c) 简答题需非空答案文本；(d) 选项去空白后不得为空。
    pub fn validate(&self, draft: DraftQuestion) -> Result<QuestionRecord, Rejection> {
        let line_range = draft.line_range;
        let number = draft.number;

        let reject = |reason: RejectReason| Rejection {
            number,
            reason,
            line_range,
        };

        // (a) 题干
        if draft.text.is_empty() && draft.image_ref.is_none() && draft.table_refs.is_empty() {
            return Err(reject(RejectReason::EmptyQuestionText));
        }

        // (b) 前置：恰好 1 个选项既不是选择题也不是简答题
        if draft.options.len() == 1 {
            return Err(reject(RejectReason::AmbiguousOptionCount));
        }

        let correct_answer = match (draft.kind, draft.answer) {
            // (b) 选择题答案必须已解析且在界内
            (QuestionType::MultipleChoice, Some(CorrectAnswer::Index(i)))
                if i < draft.options.len() =>
            {
                CorrectAnswer::Index(i)
            }
            // (c) 简答题答案必须是非空字面文本
            (QuestionType::ShortAnswer, Some(CorrectAnswer::Literal(text)))
                if !text.is_empty() =>
            {
                CorrectAnswer::Literal(text)
            }
            _ => {
                return Err(reject(RejectReason::UnresolvedAnswer {
                    token: draft.answer_token,
                }))
            }
        };

        // (d) 空选项（解析器已丢弃空选项，这里兜住后续改动）
        if let Some(index) = draft.options.iter().position(|o| o.trim().is_empty()) {
            return Err(reject(RejectReason::EmptyOptionText { index }));
        }

        debug!("[题 {}] 校验通过 ({:?})", number, draft.kind);
        Ok(QuestionRecord {
            number,
            text: draft.text,
            options: draft.options,
            kind: draft.kind,
            correct_answer,
            explanation: draft.explanation,
            image_ref: draft.image_ref,
            table_refs: draft.table_refs,
            math_exprs: draft.math_exprs,
            line_range,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> DraftQuestion {
        DraftQuestion {
            number: 9,
            text: "题干".to_string(),
            options: vec!["甲".to_string(), "乙".to_string()],
            kind: QuestionType::MultipleChoice,
            answer: Some(CorrectAnswer::Index(1)),
            answer_token: Some("B".to_string()),
            explanation: String::new(),
            image_ref: None,
            table_refs: Vec::new(),
            math_exprs: Vec::new(),
            line_range: (3, 7),
        }
    }

    #[test]
    fn test_valid_mcq_accepted() {
        let record = Validator::new().validate(draft()).unwrap();
        assert_eq!(record.correct_answer, CorrectAnswer::Index(1));
        assert_eq!(record.line_range, (3, 7));
    }

    #[test]
    fn test_empty_text_rejected() {
        let mut d = draft();
        d.text.clear();
        let rejection = Validator::new().validate(d).unwrap_err();
        assert_eq!(rejection.reason, RejectReason::EmptyQuestionText);
        assert_eq!(rejection.number, 9);
    }

    #[test]
    fn test_empty_text_with_image_accepted() {
        let mut d = draft();
        d.text.clear();
        d.image_ref = Some("img.png".to_string());
        assert!(Validator::new().validate(d).is_ok());
    }

    #[test]
    fn test_single_option_rejected_as_ambiguous() {
        let mut d = draft();
        d.options.truncate(1);
        d.answer = Some(CorrectAnswer::Index(0));
        let rejection = Validator::new().validate(d).unwrap_err();
        assert_eq!(rejection.reason, RejectReason::AmbiguousOptionCount);
    }

    #[test]
    fn test_unresolved_answer_rejected_never_defaulted() {
        let mut d = draft();
        d.answer = None;
        d.answer_token = Some("E".to_string());
        let rejection = Validator::new().validate(d).unwrap_err();
        assert_eq!(
            rejection.reason,
            RejectReason::UnresolvedAnswer {
                token: Some("E".to_string())
            }
        );
    }

    #[test]
    fn test_short_answer_needs_literal() {
        let mut d = draft();
        d.options.clear();
        d.kind = QuestionType::ShortAnswer;
        d.answer = Some(CorrectAnswer::Literal("42".to_string()));
        d.answer_token = Some("42".to_string());
        let record = Validator::new().validate(d).unwrap();
        assert_eq!(
            record.correct_answer,
            CorrectAnswer::Literal("42".to_string())
        );

        let mut d = draft();
        d.options.clear();
        d.kind = QuestionType::ShortAnswer;
        d.answer = None;
        d.answer_token = None;
        let rejection = Validator::new().validate(d).unwrap_err();
        assert_eq!(rejection.reason, RejectReason::UnresolvedAnswer { token: None });
    }

    #[test]
    fn test_empty_option_rejected() {
        let mut d = draft();
        d.options = vec!["甲".to_string(), "  ".to_string()];
        let rejection = Validator::new().validate(d).unwrap_err();
        assert_eq!(rejection.reason, RejectReason::EmptyOptionText { index: 1 });
    }
}
