use crate::error::RejectReason;
use crate::models::marker::TableRows;
use serde::{Deserialize, Serialize};

/// 题目类型，仅由解析出的选项数量决定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    /// 选择题（选项数 ≥ 2）
    MultipleChoice,
    /// 简答题（无选项，答案为字面文本）
    ShortAnswer,
}

/// 正确答案
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CorrectAnswer {
    /// 选择题：指向 options 的 0 起下标
    Index(usize),
    /// 简答题：字面答案文本
    Literal(String),
}

/// 解析阶段的题目草稿
///
/// 答案可能尚未解析成功（`answer = None`），由校验器决定接受或拒绝；
/// 引擎绝不把未解析的答案默默顶成第 0 个选项。
#[derive(Debug, Clone)]
pub struct DraftQuestion {
    pub number: u32,
    pub text: String,
    pub options: Vec<String>,
    pub kind: QuestionType,
    pub answer: Option<CorrectAnswer>,
    /// 原始答案标记（用于拒绝诊断）
    pub answer_token: Option<String>,
    pub explanation: String,
    pub image_ref: Option<String>,
    pub table_refs: Vec<TableRows>,
    pub math_exprs: Vec<String>,
    /// 源文档行范围（用于诊断输出）
    pub line_range: (usize, usize),
}

/// 校验通过的题目记录（输出契约，不可变）
///
/// 不变式：`kind = MultipleChoice` 时 `correct_answer` 必为
/// `Index(i)` 且 `0 <= i < options.len()`；该不变式由校验器保证，
/// 本类型不提供任何修改入口。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionRecord {
    /// 题号（来自题头，可能重复或乱序，仅用于展示）
    pub number: u32,
    /// 题干（仅当有图片/表格替代内容时才可能为空）
    pub text: String,
    /// 选项列表，0 个或 ≥ 2 个，绝不恰好 1 个
    pub options: Vec<String>,
    #[serde(rename = "type")]
    pub kind: QuestionType,
    pub correct_answer: CorrectAnswer,
    #[serde(default)]
    pub explanation: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub image_ref: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub table_refs: Vec<TableRows>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub math_exprs: Vec<String>,
    /// 源文档行范围
    pub line_range: (usize, usize),
}

/// 单题拒绝诊断
#[derive(Debug, Clone, Serialize)]
pub struct Rejection {
    pub number: u32,
    pub reason: RejectReason,
    /// 原始块的行范围，便于排查
    pub line_range: (usize, usize),
}

/// 一篇文档的解析结果
///
/// 接受列表与拒绝诊断列表并列输出，对外永远是逐题的
/// 接受/拒绝清单，而不是一个笼统的“解析失败”。
#[derive(Debug, Clone, Default, Serialize)]
pub struct ParseOutcome {
    pub accepted: Vec<QuestionRecord>,
    pub rejected: Vec<Rejection>,
    /// 标记对账警告（非致命）
    pub warnings: Vec<crate::models::marker::MarkerWarning>,
}
