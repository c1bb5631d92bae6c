/// 行角色分类结果
///
/// 分类器逐行输出 `ClassifiedFragment`，块内顺序保持不变且有意义：
/// 选项必须保留 A、B、C、D 的声明顺序。该流是临时产物，
/// 由解析器消费后即丢弃。

/// 行角色
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineRole {
    /// 题干文字
    QuestionText,
    /// 选项（含折行续行）
    Option,
    /// 答案标记行（内容单独保存，不进入任何文本字段）
    AnswerKey,
    /// 解析/讲解文字
    Explanation,
    /// 忽略（空白行）
    Ignored,
}

/// 带角色标注的行
#[derive(Debug, Clone)]
pub struct ClassifiedFragment {
    pub role: LineRole,
    /// 行内容（选项行为去掉标记后的正文，答案行为标记后的内容）
    pub text: String,
    /// 选项标记字符（A-D 或数字），仅当本行自带标记时存在
    pub marker: Option<char>,
    /// 本行是上一选项的折行续行
    pub continuation: bool,
}

impl ClassifiedFragment {
    pub fn new(role: LineRole, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
            marker: None,
            continuation: false,
        }
    }

    pub fn option(marker: char, text: impl Into<String>) -> Self {
        Self {
            role: LineRole::Option,
            text: text.into(),
            marker: Some(marker),
            continuation: false,
        }
    }

    pub fn option_continuation(text: impl Into<String>) -> Self {
        Self {
            role: LineRole::Option,
            text: text.into(),
            marker: None,
            continuation: true,
        }
    }
}
