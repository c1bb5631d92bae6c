/// 程序配置文件
#[derive(Clone, Debug)]
pub struct Config {
    /// 同时处理的文档数量
    pub max_concurrent_docs: usize,
    /// 文档 TOML 文件存放目录
    pub doc_folder: String,
    /// 解析结果 JSON 输出目录
    pub output_folder: String,
    /// 首个题头之前的文字是否保留为合成块 0
    pub keep_preamble: bool,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 输出日志文件
    pub output_log_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_concurrent_docs: 8,
            doc_folder: "input_docs".to_string(),
            output_folder: "output_json".to_string(),
            keep_preamble: false,
            verbose_logging: false,
            output_log_file: "output.txt".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            max_concurrent_docs: std::env::var("MAX_CONCURRENT_DOCS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.max_concurrent_docs),
            doc_folder: std::env::var("DOC_FOLDER").unwrap_or(default.doc_folder),
            output_folder: std::env::var("OUTPUT_FOLDER").unwrap_or(default.output_folder),
            keep_preamble: std::env::var("KEEP_PREAMBLE").ok().and_then(|v| v.parse().ok()).unwrap_or(default.keep_preamble),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
            output_log_file: std::env::var("OUTPUT_LOG_FILE").unwrap_or(default.output_log_file),
        }
    }
}
