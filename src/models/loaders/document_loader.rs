//! 文档 TOML 加载器
//!
//! 标记发射器（外部协作方）把解码好的文档落成 TOML：
//! 归一化的可见文本流 + 标记旁表。本引擎从这里读入，
//! 不碰任何二进制文档格式。
//!
//! ```toml
//! name = "2025 模拟卷（3）"
//! text = """
//! 1. 如图 [IMAGE:img_1] 所示……
//! A) 甲
//! B) 乙
//! Answer: A
//! """
//!
//! [[markers]]
//! id = "img_1"
//! kind = "image"
//! value = "https://example.com/a.png"
//! ```

use crate::models::marker::{MarkerPayload, MarkerTable};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

/// 旁表条目：标记 id + 载荷
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkerEntry {
    pub id: String,
    #[serde(flatten)]
    pub payload: MarkerPayload,
}

/// 一篇待解析的文档（标记发射器的输出契约）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizDocument {
    pub name: String,
    /// 已归一化的可见文本流
    pub text: String,
    #[serde(default)]
    pub markers: Vec<MarkerEntry>,
    #[serde(skip)]
    pub file_path: Option<String>,
}

impl QuizDocument {
    /// 把旁表条目整理成 id → 载荷 的映射
    pub fn marker_table(&self) -> MarkerTable {
        self.markers
            .iter()
            .map(|entry| (entry.id.clone(), entry.payload.clone()))
            .collect()
    }
}

/// 从 TOML 文件加载一篇文档
pub async fn load_toml_to_document(toml_file_path: &Path) -> Result<QuizDocument> {
    let content = fs::read_to_string(toml_file_path)
        .await
        .with_context(|| format!("无法读取TOML文件: {}", toml_file_path.display()))?;

    let mut document: QuizDocument = toml::from_str(&content)
        .with_context(|| format!("无法解析TOML文件: {}", toml_file_path.display()))?;

    // 设置文件路径
    document.file_path = Some(toml_file_path.to_string_lossy().to_string());

    Ok(document)
}

/// 从文件夹中加载所有文档 TOML 文件
pub async fn load_all_toml_files(folder_path: &str) -> Result<Vec<QuizDocument>> {
    let folder = PathBuf::from(folder_path);

    if !folder.exists() {
        anyhow::bail!("文件夹不存在: {}", folder_path);
    }

    let mut documents = Vec::new();
    let mut entries = fs::read_dir(&folder)
        .await
        .with_context(|| format!("无法读取文件夹: {}", folder_path))?;

    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) == Some("toml") {
            tracing::info!(
                "正在加载: {}",
                path.file_name().unwrap_or_default().to_string_lossy()
            );

            match load_toml_to_document(&path).await {
                Ok(document) => {
                    tracing::info!("成功加载，含 {} 个标记", document.markers.len());
                    documents.push(document);
                }
                Err(e) => {
                    tracing::warn!("加载文件失败 {}: {}", path.display(), e);
                }
            }
        }
    }

    Ok(documents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_deserializes_with_markers() {
        let toml_text = r#"
name = "示例卷"
text = "1. 题干 [IMAGE:img_1]\nA) 甲\nB) 乙\nAnswer: A"

[[markers]]
id = "img_1"
kind = "image"
value = "https://example.com/a.png"

[[markers]]
id = "0"
kind = "table"
rows = [["表头1", "表头2"], ["x", "y"]]

[[markers]]
id = "x^2"
kind = "math"
expr = "x^2"
"#;
        let document: QuizDocument = toml::from_str(toml_text).unwrap();
        assert_eq!(document.markers.len(), 3);

        let table = document.marker_table();
        assert!(matches!(
            table.get("img_1"),
            Some(MarkerPayload::Image { .. })
        ));
        match table.get("0") {
            Some(MarkerPayload::Table { rows }) => assert_eq!(rows[1][0], "x"),
            other => panic!("应为表格载荷: {:?}", other),
        }
    }

    #[test]
    fn test_markers_default_to_empty() {
        let document: QuizDocument = toml::from_str("name = \"卷\"\ntext = \"1. 题\"").unwrap();
        assert!(document.markers.is_empty());
        assert!(document.marker_table().is_empty());
    }
}
