//! 解析用正则模式集
//!
//! 全部正则收拢为一处编译、一处测试。优先级不靠 if/else 链
//! 暗示，而由分类器按固定顺序逐条尝试（解析 > 答案 > 选项 > 题干）。

use crate::error::EngineError;
use regex::Regex;

/// 题头：可选 "Q" 前缀 + 数字 + 终结符（`.` / `)` / `:`），
/// 终结符后可跟内联题干文字
const HEADER: &str = r"(?i)^(?:Q\.?\s*)?(\d+)[.:)](?:\s+(.*))?$";

/// 解析引导："Explanation:" / "Exp:"，分隔符必填，内联文字可选
const EXPLANATION: &str = r"(?i)^(?:Explanation|Exp)\s*[:\-]\s*(.*)$";

/// 答案引导："Answer:" / "Ans:" / "Correct Answer:" / "Key:" / "Solution:"
const ANSWER: &str = r"(?i)^(?:Ans(?:wer)?|Correct\s+Answer|Key|Solution)\s*[:\-]\s*(.*)$";

/// 选项：行首标记（字母 A-D 或数字）+ 终结符 + 正文
const OPTION: &str = r"(?i)^\s*([a-d0-9])[.):\-\s]+(.+)$";

/// 选项标记的严格版：终结符仅限标点，不含空白。
/// 用于二次剥离：正文恰好以 "A 某某" 开头时不能误剥
const OPTION_STRICT: &str = r"(?i)^\s*([a-d0-9])[.):\-]\s*(.+)$";

/// 内联占位符，由标记发射器写入正文
const IMAGE_MARKER: &str = r"\[IMAGE:([^\]]+)\]";
const TABLE_MARKER: &str = r"\[TABLE:([^\]]+)\]";
const MATH_MARKER: &str = r"\[MATH:([^\]]+)\]";

/// 编译好的全部模式，随 DocumentFlow 构造一次、全程共享
#[derive(Debug)]
pub struct Patterns {
    pub header: Regex,
    pub explanation: Regex,
    pub answer: Regex,
    pub option: Regex,
    pub option_strict: Regex,
    pub image_marker: Regex,
    pub table_marker: Regex,
    pub math_marker: Regex,
}

impl Patterns {
    pub fn new() -> Result<Self, EngineError> {
        Ok(Self {
            header: compile(HEADER)?,
            explanation: compile(EXPLANATION)?,
            answer: compile(ANSWER)?,
            option: compile(OPTION)?,
            option_strict: compile(OPTION_STRICT)?,
            image_marker: compile(IMAGE_MARKER)?,
            table_marker: compile(TABLE_MARKER)?,
            math_marker: compile(MATH_MARKER)?,
        })
    }
}

fn compile(pattern: &'static str) -> Result<Regex, EngineError> {
    Regex::new(pattern).map_err(|source| EngineError::PatternCompileFailed { pattern, source })
}
