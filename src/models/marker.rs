use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// 表格载荷：有序行、有序单元格
pub type TableRows = Vec<Vec<String>>;

/// 标记载荷
///
/// 标记发射器（外部协作方）把图片、表格、公式抽取到旁表中，
/// 正文里只留下 `[IMAGE:id]` / `[TABLE:idx]` / `[MATH:expr]` 占位符。
/// 本引擎只读旁表，从不修改。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MarkerPayload {
    /// 图片（URL 或 base64）
    Image { value: String },
    /// 表格（行 × 单元格）
    Table { rows: TableRows },
    /// 数学公式
    Math { expr: String },
}

/// 标记 id → 载荷 的旁表
pub type MarkerTable = HashMap<String, MarkerPayload>;

/// 标记种类（用于警告信息）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerKind {
    Image,
    Table,
    Math,
}

impl fmt::Display for MarkerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarkerKind::Image => write!(f, "图片"),
            MarkerKind::Table => write!(f, "表格"),
            MarkerKind::Math => write!(f, "公式"),
        }
    }
}

/// 标记对账警告
///
/// 占位符在旁表中找不到载荷时只记警告、不判题目无效：
/// 缺一张插图不影响题目可判分。
#[derive(Debug, Clone, Serialize)]
pub struct MarkerWarning {
    /// 所属题号
    pub question_number: u32,
    /// 标记种类
    pub kind: MarkerKind,
    /// 标记 id（或多余图片标记的 id）
    pub marker_id: String,
    /// 警告说明
    pub message: String,
}

impl fmt::Display for MarkerWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[题 {}] {}标记 {}: {}",
            self.question_number, self.kind, self.marker_id, self.message
        )
    }
}
