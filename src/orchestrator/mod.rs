//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责批量处理和流程调度，不做具体解析判断。
//!
//! ### `batch_processor` - 批量文档处理器
//! - 管理应用生命周期（初始化、运行）
//! - 批量加载文档（Vec<QuizDocument>）
//! - 控制并发数量（Semaphore）
//! - 输出全局统计信息
//!
//! ### `document_processor` - 单个文档处理器
//! - 驱动单篇文档的重建流程
//! - 落盘接受/拒绝清单（JSON）
//! - 输出单篇文档的统计信息
//!
//! ## 层次关系
//!
//! ```text
//! batch_processor (处理 Vec<QuizDocument>)
//!     ↓
//! document_processor (处理单篇文档)
//!     ↓
//! workflow::DocumentFlow (重建流水线)
//!     ↓
//! services (能力层：segment / classify / resolve / reconcile / validate)
//! ```

pub mod batch_processor;
pub mod document_processor;

// 重新导出主要类型
pub use batch_processor::App;
pub use document_processor::{process_single_document, DocumentStats};
