//! 业务能力层
//!
//! 重建流水线的五个步骤各自成一个服务，只处理单个文档/单个块：
//! 分块 → 逐行分类 → 选项与答案解析 → 标记对账 → 校验。
//! 模式集（正则）统一在 `patterns` 编译，各服务共享。

pub mod classifier;
pub mod patterns;
pub mod reconciler;
pub mod resolver;
pub mod segmenter;
pub mod validator;

pub use classifier::Classifier;
pub use patterns::Patterns;
pub use reconciler::Reconciler;
pub use resolver::Resolver;
pub use segmenter::Segmenter;
pub use validator::Validator;
