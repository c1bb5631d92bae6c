//! # Quiz Question Rebuild
//!
//! 从自由排版的教育类文档（已由外部解码为带占位标记的可见文本流）
//! 重建可判分的题目：题干、有序选项、已解析的正确答案、
//! 可选的解析文字，以及随题的图片/表格/公式内容。
//!
//! ## 架构设计
//!
//! 本系统采用分层架构：
//!
//! ### ① 模型层（Models）
//! - `models/` - 行、块、角色片段、题目记录、标记旁表
//! - `models/loaders/` - 文档 TOML 加载（标记发射器的输出契约）
//!
//! ### ② 业务能力层（Services）
//! - `services/patterns` - 统一编译的正则模式集
//! - `services/segmenter` - 按题头分块
//! - `services/classifier` - 逐行角色状态机
//! - `services/resolver` - 选项归一化与答案映射
//! - `services/reconciler` - 标记对账（图片/表格/公式回挂）
//! - `services/validator` - 结构不变式校验，逐题接受/拒绝
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/document_flow` - 一篇文档的完整重建流水线
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/batch_processor` - 批量文档处理器，管理并发
//! - `orchestrator/document_processor` - 单篇文档处理与落盘

pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{EngineError, RejectReason};
pub use models::{
    CorrectAnswer, MarkerPayload, MarkerTable, ParseOutcome, QuestionRecord, QuestionType,
    QuizDocument, Rejection,
};
pub use orchestrator::App;
pub use workflow::DocumentFlow;
