use crate::models::line::TextLine;

/// 题目块
///
/// 由分块器创建：从一个题头行开始，到下一个题头行（或文档结尾）为止的
/// 连续行序列。分类器消费后即丢弃。
#[derive(Debug, Clone)]
pub struct QuestionBlock {
    /// 题号（取自题头，仅用于展示；不保证唯一或递增）
    pub number: u32,
    /// 属于本题的行，按原始顺序（题头行本身不在其中，
    /// 题头后的内联文字会作为首行放入）
    pub lines: Vec<TextLine>,
    /// 题头行的行号
    pub header_index: usize,
    /// 是否为首个题头之前内容构成的合成块（块 0）
    pub synthetic: bool,
}

impl QuestionBlock {
    /// 本块覆盖的源文档行范围 `(起始行, 结束行)`，用于诊断输出
    pub fn line_range(&self) -> (usize, usize) {
        let end = self
            .lines
            .last()
            .map(|line| line.index)
            .unwrap_or(self.header_index);
        (self.header_index, end)
    }
}
