use serde::Serialize;
use std::fmt;

/// 引擎级错误
///
/// 仅当整篇文档都无法处理时才上抛给调用方；
/// 局限在单个块内的结构问题一律降级为该题的 Rejection，
/// 不中断整篇文档的解析。
#[derive(Debug)]
pub enum EngineError {
    /// 整篇文档找不到任何题头，产出 0 个块
    MalformedHeader {
        /// 扫描过的行数
        line_count: usize,
    },
    /// 内置正则编译失败
    PatternCompileFailed {
        pattern: &'static str,
        source: regex::Error,
    },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::MalformedHeader { line_count } => {
                write!(f, "整篇文档未找到任何题头 (共扫描 {} 行)", line_count)
            }
            EngineError::PatternCompileFailed { pattern, source } => {
                write!(f, "正则模式编译失败 ({}): {}", pattern, source)
            }
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::MalformedHeader { .. } => None,
            EngineError::PatternCompileFailed { source, .. } => Some(source),
        }
    }
}

/// 单题拒绝原因
///
/// 校验器按规则顺序给出具体原因，绝不把残缺记录
/// 强行修补成“看起来有效”的题目。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize)]
#[serde(tag = "code", rename_all = "snake_case")]
pub enum RejectReason {
    /// 题干为空且无图片/表格可替代内容
    #[error("题干为空且无图片或表格")]
    EmptyQuestionText,
    /// 恰好只检测到一个选项
    #[error("仅检测到一个选项")]
    AmbiguousOptionCount,
    /// 答案标记缺失，或无法映射到任何选项
    #[error("答案无法解析: {token:?}")]
    UnresolvedAnswer {
        /// 原始答案标记（缺失时为 None）
        token: Option<String>,
    },
    /// 去除空白后存在空选项
    #[error("第 {index} 个选项去除空白后为空")]
    EmptyOptionText { index: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_error_display() {
        let err = EngineError::MalformedHeader { line_count: 12 };
        assert!(err.to_string().contains("12"));
    }

    #[test]
    fn test_reject_reason_serializes_with_code() {
        let reason = RejectReason::UnresolvedAnswer {
            token: Some("E".to_string()),
        };
        let json = serde_json::to_value(&reason).unwrap();
        assert_eq!(json["code"], "unresolved_answer");
        assert_eq!(json["token"], "E");
    }
}
