/// 文本行模型
///
/// 标记发射器（外部协作方）输出的是已归一化的可见文本流：
/// 无制表符、无不间断空格、行尾换行已剥离。
/// 本模块只负责把这份文本流切成带行号的行序列。

/// 单行归一化文本
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextLine {
    /// 原始行内容（已归一化）
    pub raw: String,
    /// 在整篇文档中的行号（从 0 开始）
    pub index: usize,
}

impl TextLine {
    pub fn new(raw: impl Into<String>, index: usize) -> Self {
        Self {
            raw: raw.into(),
            index,
        }
    }

    /// 是否为空白行
    pub fn is_blank(&self) -> bool {
        self.raw.trim().is_empty()
    }
}

/// 将整篇文档文本切分为行序列
///
/// # 参数
/// - `text`: 标记发射器输出的完整文本
///
/// # 返回
/// 返回带行号的行序列（保留空行，由分类器决定忽略）
pub fn split_lines(text: &str) -> Vec<TextLine> {
    text.lines()
        .enumerate()
        .map(|(index, raw)| TextLine::new(raw, index))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_lines_keeps_indices() {
        let lines = split_lines("1. 第一题\nA) 选项\n\nAnswer: A");
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0].index, 0);
        assert_eq!(lines[3].raw, "Answer: A");
        assert!(lines[2].is_blank());
    }

    #[test]
    fn test_split_lines_empty_text() {
        assert!(split_lines("").is_empty());
    }
}
