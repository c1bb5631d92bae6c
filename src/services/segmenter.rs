//! 分块器
//!
//! 把整篇行流按题头切成有序的题目块。题头行形如
//! `3.` / `Q12:` / `7) 内联题干`；题头之后的所有行都归属该块，
//! 直到下一个题头为止。
//!
//! 已知取舍：句中恰好踩中题头模式的行（如 "3) were found"）会被
//! 误判为新题头。设计上接受这一误报，由下游校验器丢弃没有
//! 可用内容的块。

use crate::error::EngineError;
use crate::models::block::QuestionBlock;
use crate::models::line::TextLine;
use crate::services::patterns::Patterns;
use std::sync::Arc;
use tracing::debug;

/// 分块器
pub struct Segmenter {
    patterns: Arc<Patterns>,
    /// 首个题头之前的文字：true 保留为合成块 0，false 丢弃
    keep_preamble: bool,
}

impl Segmenter {
    pub fn new(patterns: Arc<Patterns>, keep_preamble: bool) -> Self {
        Self {
            patterns,
            keep_preamble,
        }
    }

    /// 切分整篇文档
    ///
    /// # 参数
    /// - `lines`: 已归一化的行序列
    ///
    /// # 返回
    /// 返回按出现顺序排列的题目块；题号照抄题头，不做唯一性
    /// 或递增校验。整篇找不到题头时返回 `MalformedHeader`。
    pub fn segment(&self, lines: &[TextLine]) -> Result<Vec<QuestionBlock>, EngineError> {
        let mut blocks: Vec<QuestionBlock> = Vec::new();
        let mut preamble: Vec<TextLine> = Vec::new();

        for line in lines {
            if let Some(caps) = self.patterns.header.captures(&line.raw) {
                // 题号超出 u32 的情况按普通行处理，而不是让整块解析失败
                if let Ok(number) = caps[1].parse::<u32>() {
                    let mut block = QuestionBlock {
                        number,
                        lines: Vec::new(),
                        header_index: line.index,
                        synthetic: false,
                    };
                    // 题头行内联的题干文字作为块的首行
                    if let Some(inline) = caps.get(2) {
                        if !inline.as_str().trim().is_empty() {
                            block.lines.push(TextLine::new(inline.as_str(), line.index));
                        }
                    }
                    blocks.push(block);
                    continue;
                }
            }

            match blocks.last_mut() {
                Some(block) => block.lines.push(line.clone()),
                None => preamble.push(line.clone()),
            }
        }

        if blocks.is_empty() {
            return Err(EngineError::MalformedHeader {
                line_count: lines.len(),
            });
        }

        if self.keep_preamble && preamble.iter().any(|line| !line.is_blank()) {
            let header_index = preamble.first().map(|line| line.index).unwrap_or(0);
            debug!("保留题头前内容为合成块 0 (共 {} 行)", preamble.len());
            blocks.insert(
                0,
                QuestionBlock {
                    number: 0,
                    lines: preamble,
                    header_index,
                    synthetic: true,
                },
            );
        } else if !preamble.is_empty() {
            debug!("丢弃题头前内容 (共 {} 行)", preamble.len());
        }

        Ok(blocks)
    }
}
