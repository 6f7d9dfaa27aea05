//! 文章获取与降级
//!
//! 获取失败不会向上传播，而是转换为页面显示状态。

use crate::client::source::{validate_id, ArticleSource};
use crate::error::{AppError, AppResult};
use crate::models::Article;
use tracing::{error, info, warn};

/// 文章页显示状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArticleView {
    Loaded(Article),
    NotFound,
}

/// 首页列表显示状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogView {
    Loaded(Vec<Article>),
    LoadFailed,
}

/// 获取单篇文章，失败时从汇总文件中查找
pub async fn fetch_with_fallback<S: ArticleSource>(source: &S, id: &str) -> AppResult<Article> {
    validate_id(id)?;
    match source.fetch_article(id).await {
        Ok(article) => {
            info!("Fetched article {} successfully", id);
            Ok(article)
        }
        Err(single_err) => {
            warn!("Failed to fetch single article {}: {}", id, single_err);

            let all = source.fetch_all().await?;
            let found = Article::find(&all, id)
                .cloned()
                .ok_or_else(|| AppError::article_not_found(id))?;
            info!("Found article {} in all articles", id);
            Ok(found)
        }
    }
}

/// 加载文章页
pub async fn load_article<S: ArticleSource>(source: &S, id: &str) -> ArticleView {
    match fetch_with_fallback(source, id).await {
        Ok(article) => ArticleView::Loaded(article),
        Err(e) => {
            error!("Error loading article: {}", e);
            ArticleView::NotFound
        }
    }
}

/// 加载首页列表
pub async fn load_catalog<S: ArticleSource>(source: &S) -> CatalogView {
    match source.fetch_all().await {
        Ok(articles) => {
            info!("Fetched {} articles successfully", articles.len());
            CatalogView::Loaded(articles)
        }
        Err(e) => {
            error!("Error loading articles: {}", e);
            CatalogView::LoadFailed
        }
    }
}
