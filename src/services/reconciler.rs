//! 标记对账器
//!
//! 题目草稿定稿之后，扫描正文里的 `[IMAGE:id]` / `[TABLE:idx]` /
//! `[MATH:expr]` 占位符：从旁表取出载荷挂到对应字段，再把占位符
//! 从可见文本里剥掉（公式替换为行内 `$expr$` 供下游渲染）。
//!
//! 旁表里找不到的占位符只记警告就丢弃：缺一张插图不应让一道
//! 本可判分的题目作废。

use crate::models::marker::{MarkerKind, MarkerPayload, MarkerTable, MarkerWarning};
use crate::models::question::DraftQuestion;
use crate::services::patterns::Patterns;
use std::sync::Arc;
use tracing::warn;

/// 标记对账器
pub struct Reconciler {
    patterns: Arc<Patterns>,
}

impl Reconciler {
    pub fn new(patterns: Arc<Patterns>) -> Self {
        Self { patterns }
    }

    /// 对账一道题的全部可见文本
    ///
    /// 题干、各选项与解析都会扫描：占位符留在任何可见字段里
    /// 都是展示缺陷。同类标记按出现顺序累积；图片只保留第一个，
    /// 多余的记警告。
    ///
    /// # 返回
    /// 返回本题产生的警告列表（非致命）
    pub fn reconcile(&self, draft: &mut DraftQuestion, markers: &MarkerTable) -> Vec<MarkerWarning> {
        let mut warnings = Vec::new();
        let number = draft.number;

        let text = std::mem::take(&mut draft.text);
        draft.text = self.reconcile_text(draft, number, text, markers, &mut warnings);

        let mut options = std::mem::take(&mut draft.options);
        for option in &mut options {
            let taken = std::mem::take(option);
            *option = self.reconcile_text(draft, number, taken, markers, &mut warnings);
        }
        draft.options = options;

        let explanation = std::mem::take(&mut draft.explanation);
        draft.explanation =
            self.reconcile_text(draft, number, explanation, markers, &mut warnings);

        for warning in &warnings {
            warn!("⚠️ {}", warning);
        }
        warnings
    }

    /// 处理一段文本里的全部占位符，返回剥离后的文本
    fn reconcile_text(
        &self,
        draft: &mut DraftQuestion,
        number: u32,
        text: String,
        markers: &MarkerTable,
        warnings: &mut Vec<MarkerWarning>,
    ) -> String {
        // 图片：挂第一个，多余的告警；占位符一律剥掉
        let text = self
            .patterns
            .image_marker
            .replace_all(&text, |caps: &regex::Captures<'_>| {
                let id = caps[1].to_string();
                match markers.get(&id) {
                    Some(MarkerPayload::Image { value }) => {
                        if draft.image_ref.is_none() {
                            draft.image_ref = Some(value.clone());
                        } else {
                            warnings.push(dangling(
                                number,
                                MarkerKind::Image,
                                &id,
                                "已有图片，忽略多余的图片标记",
                            ));
                        }
                    }
                    _ => warnings.push(dangling(number, MarkerKind::Image, &id, "旁表中无此载荷")),
                }
                String::new()
            })
            .into_owned();

        // 表格：按出现顺序累积
        let text = self
            .patterns
            .table_marker
            .replace_all(&text, |caps: &regex::Captures<'_>| {
                let id = caps[1].to_string();
                match markers.get(&id) {
                    Some(MarkerPayload::Table { rows }) => draft.table_refs.push(rows.clone()),
                    _ => warnings.push(dangling(number, MarkerKind::Table, &id, "旁表中无此载荷")),
                }
                String::new()
            })
            .into_owned();

        // 公式：占位符自带表达式，旁表有同名条目时以旁表为准；
        // 可见文本替换为 $expr$
        let text = self
            .patterns
            .math_marker
            .replace_all(&text, |caps: &regex::Captures<'_>| {
                let raw_expr = caps[1].to_string();
                let expr = match markers.get(&raw_expr) {
                    Some(MarkerPayload::Math { expr }) => expr.clone(),
                    _ => raw_expr,
                };
                draft.math_exprs.push(expr.clone());
                format!("${}$", expr)
            })
            .into_owned();

        text.trim().to_string()
    }
}

fn dangling(number: u32, kind: MarkerKind, marker_id: &str, message: &str) -> MarkerWarning {
    MarkerWarning {
        question_number: number,
        kind,
        marker_id: marker_id.to_string(),
        message: message.to_string(),
    }
}
