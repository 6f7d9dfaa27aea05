//! 文章数据来源
//!
//! - `HttpSource`：通过 HTTP 获取批量任务生成的 JSON
//! - `DirSource`：直接读取批量任务的输出目录
//! - `EmbeddedSource`：内存中已有的文章（生产模式下嵌入页面的数据）

use crate::config::Config;
use crate::error::{AppError, AppResult, RetrievalError};
use crate::models::Article;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// 汇总文件的默认名称
pub const AGGREGATE_FILE_NAME: &str = "articles.json";

/// 文章数据来源
#[allow(async_fn_in_trait)]
pub trait ArticleSource {
    /// 获取单篇文章 `<id>.json`
    async fn fetch_article(&self, id: &str) -> AppResult<Article>;

    /// 获取汇总文件中的全部文章
    async fn fetch_all(&self) -> AppResult<Vec<Article>>;
}

/// 检查文章 id，拒绝空 id、路径分隔符和 `..`
pub fn validate_id(id: &str) -> AppResult<()> {
    if id.is_empty() || id.contains(['/', '\\']) || id.contains("..") {
        return Err(RetrievalError::InvalidId { id: id.to_string() }.into());
    }
    Ok(())
}

/// HTTP 数据来源
pub struct HttpSource {
    client: reqwest::Client,
    base_url: String,
    aggregate_file_name: String,
}

impl HttpSource {
    /// 创建新的 HTTP 数据来源
    pub fn new(config: &Config) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| AppError::request_failed(&config.data_base_url, e))?;

        Ok(Self {
            client,
            base_url: config.data_base_url.trim_end_matches('/').to_string(),
            aggregate_file_name: config.aggregate_file_name.clone(),
        })
    }

    /// 单篇文章的地址
    pub fn article_url(&self, id: &str) -> String {
        format!("{}/{}.json", self.base_url, id)
    }

    /// 汇总文件的地址
    pub fn aggregate_url(&self) -> String {
        format!("{}/{}", self.base_url, self.aggregate_file_name)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> AppResult<T> {
        debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| AppError::request_failed(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RetrievalError::BadStatus {
                endpoint: url.to_string(),
                status: status.as_u16(),
            }
            .into());
        }

        response
            .json::<T>()
            .await
            .map_err(|e| AppError::request_failed(url, e))
    }
}

impl ArticleSource for HttpSource {
    async fn fetch_article(&self, id: &str) -> AppResult<Article> {
        validate_id(id)?;
        self.get_json(&self.article_url(id)).await
    }

    async fn fetch_all(&self) -> AppResult<Vec<Article>> {
        self.get_json(&self.aggregate_url()).await
    }
}

/// 本地目录数据来源
pub struct DirSource {
    folder: PathBuf,
    aggregate_file_name: String,
}

impl DirSource {
    pub fn new(folder: impl Into<PathBuf>) -> Self {
        Self {
            folder: folder.into(),
            aggregate_file_name: AGGREGATE_FILE_NAME.to_string(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            folder: PathBuf::from(&config.output_folder),
            aggregate_file_name: config.aggregate_file_name.clone(),
        }
    }

    async fn read_json<T: serde::de::DeserializeOwned>(&self, path: &Path) -> AppResult<T> {
        let display = path.display().to_string();
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| AppError::file_read_failed(&display, e))?;
        serde_json::from_str(&content).map_err(|e| AppError::json_failed(display, e))
    }
}

impl ArticleSource for DirSource {
    async fn fetch_article(&self, id: &str) -> AppResult<Article> {
        validate_id(id)?;
        self.read_json(&self.folder.join(format!("{}.json", id))).await
    }

    async fn fetch_all(&self) -> AppResult<Vec<Article>> {
        self.read_json(&self.folder.join(&self.aggregate_file_name)).await
    }
}

/// 内存数据来源
#[derive(Debug, Clone, Default)]
pub struct EmbeddedSource {
    articles: Vec<Article>,
}

impl EmbeddedSource {
    pub fn new(articles: Vec<Article>) -> Self {
        Self { articles }
    }
}

impl ArticleSource for EmbeddedSource {
    async fn fetch_article(&self, id: &str) -> AppResult<Article> {
        Article::find(&self.articles, id)
            .cloned()
            .ok_or_else(|| AppError::article_not_found(id))
    }

    async fn fetch_all(&self) -> AppResult<Vec<Article>> {
        Ok(self.articles.clone())
    }
}
