use crate::error::{AppError, AppResult, ConfigError, FileError};
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;

/// 程序配置文件
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// TXT 源文件存放目录
    pub txt_folder: String,
    /// JSON 输出目录
    pub output_folder: String,
    /// 汇总文件名
    pub aggregate_file_name: String,
    /// 同时转换的文件数量
    pub max_concurrent_files: usize,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    // --- 客户端配置 ---
    pub data_base_url: String,
    pub request_timeout_secs: u64,
    pub page_size: usize,
    pub preferences_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            txt_folder: "txt".to_string(),
            output_folder: "public/data".to_string(),
            aggregate_file_name: "articles.json".to_string(),
            max_concurrent_files: 8,
            verbose_logging: false,
            data_base_url: "http://localhost:3000/data".to_string(),
            request_timeout_secs: 5,
            page_size: 6,
            preferences_file: "theme.json".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> AppResult<Self> {
        Self::default().with_env_overrides()
    }

    /// 先读取 TOML 配置文件（不存在时使用默认值），再应用环境变量覆盖
    pub fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let base = if path.exists() {
            let content = std::fs::read_to_string(path)
                .map_err(|e| AppError::file_read_failed(path.display().to_string(), e))?;
            Self::from_toml_str(&content, &path.display().to_string())?
        } else {
            Self::default()
        };
        base.with_env_overrides()
    }

    fn from_toml_str(content: &str, path: &str) -> AppResult<Self> {
        let config = toml::from_str(content).map_err(|source| FileError::TomlParseFailed {
            path: path.to_string(),
            source,
        })?;
        Ok(config)
    }

    fn with_env_overrides(self) -> AppResult<Self> {
        Ok(Self {
            txt_folder: std::env::var("TXT_FOLDER").unwrap_or(self.txt_folder),
            output_folder: std::env::var("OUTPUT_FOLDER").unwrap_or(self.output_folder),
            aggregate_file_name: std::env::var("AGGREGATE_FILE_NAME").unwrap_or(self.aggregate_file_name),
            max_concurrent_files: env_parse("MAX_CONCURRENT_FILES", self.max_concurrent_files, "usize")?,
            verbose_logging: env_parse("VERBOSE_LOGGING", self.verbose_logging, "bool")?,
            data_base_url: std::env::var("DATA_BASE_URL").unwrap_or(self.data_base_url),
            request_timeout_secs: env_parse("REQUEST_TIMEOUT_SECS", self.request_timeout_secs, "u64")?,
            page_size: env_parse("PAGE_SIZE", self.page_size, "usize")?,
            preferences_file: std::env::var("PREFERENCES_FILE").unwrap_or(self.preferences_file),
        })
    }
}

/// 读取并解析环境变量，未设置时返回默认值
fn env_parse<T: FromStr>(var_name: &str, default: T, expected_type: &str) -> AppResult<T> {
    match std::env::var(var_name) {
        Ok(value) => parse_value(var_name, &value, expected_type),
        Err(_) => Ok(default),
    }
}

fn parse_value<T: FromStr>(var_name: &str, value: &str, expected_type: &str) -> AppResult<T> {
    value.trim().parse().map_err(|_| {
        ConfigError::EnvVarParseFailed {
            var_name: var_name.to_string(),
            value: value.to_string(),
            expected_type: expected_type.to_string(),
        }
        .into()
    })
}
