//! 行角色分类器
//!
//! 一个按块运行的有限状态机：逐行判定角色
//! {题干, 选项, 答案标记, 解析, 忽略}。
//!
//! 每行按严格优先级匹配，先中先得：
//! 1. 解析引导 → 进入收集解析状态（不可逆）
//! 2. 收集解析中 → 后续所有行一律是解析
//! 3. 答案引导 → 记为答案标记（单独保存，不进任何文本）
//! 4. 选项标记 → 新选项，进入收集选项状态
//! 5. 收集选项中且不带标记 → 上一选项的折行续行
//! 6. 其余 → 题干
//!
//! 解析与答案是不可逆转移：源文档不会把章节倒着写，
//! 解析开始之后的行绝不会再被解释为选项或题干。

use crate::models::block::QuestionBlock;
use crate::models::fragment::{ClassifiedFragment, LineRole};
use crate::services::patterns::Patterns;
use std::sync::Arc;

/// 分类器状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    QuestionText,
    CollectingOptions,
    CollectingExplanation,
}

/// 行角色分类器
pub struct Classifier {
    patterns: Arc<Patterns>,
}

impl Classifier {
    pub fn new(patterns: Arc<Patterns>) -> Self {
        Self { patterns }
    }

    /// 对一个题目块逐行分类
    ///
    /// # 参数
    /// - `block`: 分块器产出的题目块
    ///
    /// # 返回
    /// 返回保持原始顺序的角色标注流
    pub fn classify(&self, block: &QuestionBlock) -> Vec<ClassifiedFragment> {
        let mut state = State::QuestionText;
        let mut fragments = Vec::with_capacity(block.lines.len());

        for line in &block.lines {
            let raw = line.raw.as_str();

            // 空白行不携带信息，直接忽略（不影响状态）
            if line.is_blank() {
                fragments.push(ClassifiedFragment::new(LineRole::Ignored, ""));
                continue;
            }

            // 规则 2：解析状态粘性，后续行全部是解析
            if state == State::CollectingExplanation {
                fragments.push(ClassifiedFragment::new(LineRole::Explanation, raw));
                continue;
            }

            // 规则 1：解析引导
            if let Some(caps) = self.patterns.explanation.captures(raw) {
                state = State::CollectingExplanation;
                let inline = caps.get(1).map(|m| m.as_str()).unwrap_or("");
                if !inline.trim().is_empty() {
                    fragments.push(ClassifiedFragment::new(LineRole::Explanation, inline.trim()));
                }
                continue;
            }

            // 规则 3：答案引导，内容单独保存并退出选项收集
            if let Some(caps) = self.patterns.answer.captures(raw) {
                let token = caps.get(1).map(|m| m.as_str()).unwrap_or("");
                fragments.push(ClassifiedFragment::new(LineRole::AnswerKey, token.trim()));
                state = State::QuestionText;
                continue;
            }

            // 规则 4：带标记的选项行
            if let Some(caps) = self.patterns.option.captures(raw) {
                let marker = caps[1].chars().next().unwrap_or('A').to_ascii_uppercase();
                fragments.push(ClassifiedFragment::option(marker, caps[2].trim()));
                state = State::CollectingOptions;
                continue;
            }

            // 规则 5：选项折行续行
            if state == State::CollectingOptions {
                fragments.push(ClassifiedFragment::option_continuation(raw.trim()));
                continue;
            }

            // 规则 6：题干
            fragments.push(ClassifiedFragment::new(LineRole::QuestionText, raw.trim()));
        }

        fragments
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::line::TextLine;

    fn block_of(lines: &[&str]) -> QuestionBlock {
        QuestionBlock {
            number: 1,
            lines: lines
                .iter()
                .enumerate()
                .map(|(i, raw)| TextLine::new(*raw, i + 1))
                .collect(),
            header_index: 0,
            synthetic: false,
        }
    }

    fn classifier() -> Classifier {
        Classifier::new(Arc::new(Patterns::new().unwrap()))
    }

    #[test]
    fn test_basic_mcq_roles() {
        let fragments = classifier().classify(&block_of(&[
            "法国的首都是哪里？",
            "A) Paris",
            "B) London",
            "Answer: A",
        ]));
        let roles: Vec<LineRole> = fragments.iter().map(|f| f.role).collect();
        assert_eq!(
            roles,
            vec![
                LineRole::QuestionText,
                LineRole::Option,
                LineRole::Option,
                LineRole::AnswerKey,
            ]
        );
        assert_eq!(fragments[1].marker, Some('A'));
        assert_eq!(fragments[3].text, "A");
    }

    #[test]
    fn test_option_continuation_appends_to_previous() {
        let fragments = classifier().classify(&block_of(&[
            "题干",
            "A) 一个很长的选项",
            "在下一行继续",
            "B) 第二个选项",
        ]));
        assert_eq!(fragments[2].role, LineRole::Option);
        assert!(fragments[2].continuation);
        assert!(fragments[2].marker.is_none());
    }

    #[test]
    fn test_explanation_is_sticky() {
        let fragments = classifier().classify(&block_of(&[
            "题干",
            "A) 甲",
            "B) 乙",
            "Answer: B",
            "Explanation: 因为乙正确",
            "A) 这行看着像选项",
            "其实也是解析",
        ]));
        // 解析开始之后不允许回到选项或题干
        for fragment in &fragments[4..] {
            assert_eq!(fragment.role, LineRole::Explanation);
        }
        assert_eq!(fragments[4].text, "因为乙正确");
    }

    #[test]
    fn test_answer_exits_option_collection() {
        let fragments = classifier().classify(&block_of(&[
            "A) 甲",
            "B) 乙",
            "Answer: A",
            "后续补充的题干说明",
        ]));
        // 答案之后不再收集选项，普通行回到题干
        assert_eq!(fragments[3].role, LineRole::QuestionText);
    }

    #[test]
    fn test_answer_content_not_in_text_roles() {
        let fragments = classifier().classify(&block_of(&["题干", "Answer: 42"]));
        assert_eq!(fragments[1].role, LineRole::AnswerKey);
        assert_eq!(fragments[1].text, "42");
    }

    #[test]
    fn test_blank_lines_ignored() {
        let fragments = classifier().classify(&block_of(&["题干", "", "A) 甲", "B) 乙"]));
        assert_eq!(fragments[1].role, LineRole::Ignored);
        assert_eq!(fragments[2].role, LineRole::Option);
    }

    #[test]
    fn test_digit_option_markers() {
        let fragments = classifier().classify(&block_of(&["1 - 第一项", "2 - 第二项"]));
        assert_eq!(fragments[0].role, LineRole::Option);
        assert_eq!(fragments[0].marker, Some('1'));
        assert_eq!(fragments[1].marker, Some('2'));
    }
}
