use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 文件操作错误
    #[error("文件错误: {0}")]
    File(#[from] FileError),
    /// 文章获取错误
    #[error("获取错误: {0}")]
    Retrieval(#[from] RetrievalError),
    /// 阅读偏好设置错误
    #[error("偏好设置错误: {0}")]
    Preferences(#[from] PreferencesError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
}

/// 文件操作错误
#[derive(Debug, Error)]
pub enum FileError {
    /// 目录不存在
    #[error("目录不存在: {path}")]
    DirectoryNotFound { path: String },
    /// 读取文件失败
    #[error("读取文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 写入文件失败
    #[error("写入文件失败 ({path}): {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// JSON 序列化或解析失败
    #[error("JSON处理失败 ({path}): {source}")]
    JsonFailed {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    /// TOML 解析失败
    #[error("TOML解析失败 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// 文章获取错误
#[derive(Debug, Error)]
pub enum RetrievalError {
    /// 网络请求失败
    #[error("请求失败 ({endpoint}): {source}")]
    RequestFailed {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    /// 服务器返回非成功状态码
    #[error("HTTP错误 ({endpoint}): status {status}")]
    BadStatus { endpoint: String, status: u16 },
    /// 文章不存在
    #[error("文章不存在: {id}")]
    NotFound { id: String },
    /// id 含路径分隔符或 `..`
    #[error("非法文章 id: {id:?}")]
    InvalidId { id: String },
}

/// 阅读偏好设置错误
#[derive(Debug, Error)]
pub enum PreferencesError {
    /// 不在调色板中的纸张颜色
    #[error("不支持的纸张颜色: {color}")]
    UnknownPaperColor { color: String },
    /// 不在字体表中的字体
    #[error("不支持的字体: {font}")]
    UnknownFont { font: String },
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 环境变量解析失败
    #[error("环境变量 {var_name} 解析失败: 值 '{value}' 无法转换为 {expected_type}")]
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: String,
    },
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建文件读取错误
    pub fn file_read_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File(FileError::ReadFailed {
            path: path.into(),
            source,
        })
    }

    /// 创建文件写入错误
    pub fn file_write_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File(FileError::WriteFailed {
            path: path.into(),
            source,
        })
    }

    /// 创建 JSON 处理错误
    pub fn json_failed(path: impl Into<String>, source: serde_json::Error) -> Self {
        AppError::File(FileError::JsonFailed {
            path: path.into(),
            source,
        })
    }

    /// 创建请求失败错误
    pub fn request_failed(endpoint: impl Into<String>, source: reqwest::Error) -> Self {
        AppError::Retrieval(RetrievalError::RequestFailed {
            endpoint: endpoint.into(),
            source,
        })
    }

    /// 创建文章不存在错误
    pub fn article_not_found(id: impl Into<String>) -> Self {
        AppError::Retrieval(RetrievalError::NotFound { id: id.into() })
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
