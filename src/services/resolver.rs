//! 选项与答案解析器
//!
//! 消费分类器的角色流，产出题目草稿：归一化选项文本、
//! 判定选择题/简答题、把原始答案标记映射为选项下标或字面答案。
//!
//! 映射失败时答案保持 `None`，由校验器给出 UnresolvedAnswer 拒绝。
//! 绝不默默回退到第 0 个选项：无声的错误默认值会在无任何信号的
//! 情况下污染判分。

use crate::models::block::QuestionBlock;
use crate::models::fragment::{ClassifiedFragment, LineRole};
use crate::models::question::{CorrectAnswer, DraftQuestion, QuestionType};
use crate::services::patterns::Patterns;
use std::sync::Arc;

/// 选项累积器：块内扫描时逐步拼接，块结束后定稿
#[derive(Debug)]
struct RawOption {
    marker: char,
    text: String,
}

/// 选项与答案解析器
pub struct Resolver {
    patterns: Arc<Patterns>,
}

impl Resolver {
    pub fn new(patterns: Arc<Patterns>) -> Self {
        Self { patterns }
    }

    /// 把一个块的角色流汇总为题目草稿
    pub fn resolve(&self, block: &QuestionBlock, fragments: &[ClassifiedFragment]) -> DraftQuestion {
        let mut text_parts: Vec<&str> = Vec::new();
        let mut explanation_parts: Vec<&str> = Vec::new();
        let mut raw_options: Vec<RawOption> = Vec::new();
        let mut answer_token: Option<String> = None;

        for fragment in fragments {
            match fragment.role {
                LineRole::QuestionText => text_parts.push(&fragment.text),
                LineRole::Explanation => explanation_parts.push(&fragment.text),
                LineRole::AnswerKey => {
                    // 同块出现多个答案行时以第一个为准
                    if answer_token.is_none() {
                        answer_token = Some(fragment.text.clone());
                    }
                }
                LineRole::Option => match fragment.marker {
                    Some(marker) => raw_options.push(RawOption {
                        marker,
                        text: fragment.text.clone(),
                    }),
                    // 折行续行拼到上一选项，用空格分隔
                    None => {
                        if let Some(last) = raw_options.last_mut() {
                            last.text.push(' ');
                            last.text.push_str(&fragment.text);
                        }
                    }
                },
                LineRole::Ignored => {}
            }
        }

        let options: Vec<String> = raw_options
            .iter()
            .map(|raw| self.finalize_option(raw))
            .filter(|text| !text.is_empty())
            .collect();

        let (kind, answer) = if options.is_empty() {
            (
                QuestionType::ShortAnswer,
                answer_token
                    .as_deref()
                    .map(str::trim)
                    .filter(|token| !token.is_empty())
                    .map(|token| CorrectAnswer::Literal(token.to_string())),
            )
        } else {
            (
                QuestionType::MultipleChoice,
                answer_token
                    .as_deref()
                    .and_then(|token| resolve_choice_answer(token, &options)),
            )
        };

        DraftQuestion {
            number: block.number,
            text: text_parts.join(" ").trim().to_string(),
            options,
            kind,
            answer,
            answer_token,
            explanation: explanation_parts.join("\n").trim().to_string(),
            image_ref: None,
            table_refs: Vec::new(),
            math_exprs: Vec::new(),
            line_range: block.line_range(),
        }
    }

    /// 选项文本定稿：去空白，并防御性地再剥一次残留的前导标记
    /// （分类器的正则偶尔会把标记一并带进正文）
    fn finalize_option(&self, raw: &RawOption) -> String {
        let trimmed = raw.text.trim();
        if let Some(caps) = self.patterns.option_strict.captures(trimmed) {
            let leading = caps[1].chars().next().map(|c| c.to_ascii_uppercase());
            if leading == Some(raw.marker) {
                return caps[2].trim().to_string();
            }
        }
        trimmed.to_string()
    }
}

/// 把原始答案标记映射为选项下标
///
/// 单字母 A-D 按位次映射（A=0 … D=3），单数字 1-9 映射为 n-1，
/// 都做越界检查；其余按选项文本做忽略大小写的精确匹配。
/// 全部失败时返回 `None`，留给校验器拒绝。
fn resolve_choice_answer(token: &str, options: &[String]) -> Option<CorrectAnswer> {
    let token = token.trim();
    if token.is_empty() {
        return None;
    }

    let mut chars = token.chars();
    if let (Some(ch), None) = (chars.next(), chars.next()) {
        let index = match ch.to_ascii_uppercase() {
            letter @ 'A'..='D' => Some(letter as usize - 'A' as usize),
            digit @ '1'..='9' => Some(digit as usize - '1' as usize),
            _ => None,
        };
        if let Some(index) = index {
            return (index < options.len()).then_some(CorrectAnswer::Index(index));
        }
    }

    options
        .iter()
        .position(|option| option.eq_ignore_ascii_case(token))
        .map(CorrectAnswer::Index)
}
