//! 阅读会话
//!
//! 持有显式注入的阅读偏好和数据来源，不依赖任何全局状态。

use crate::client::catalog::{paginate, search, Page};
use crate::client::preferences::ThemePreferences;
use crate::client::retrieval::{load_article, load_catalog, ArticleView, CatalogView};
use crate::client::source::ArticleSource;
use crate::error::AppResult;
use crate::models::Article;
use crate::render::{annotate, GlossReveal, Segment};
use std::path::PathBuf;

/// 渲染后的段落
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedParagraph<'a> {
    pub segments: Vec<Segment<'a>>,
    pub translation: &'a str,
}

/// 渲染后的文章
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedArticle<'a> {
    pub title: &'a str,
    /// 为空时不显示
    pub title_cn: Option<&'a str>,
    pub paragraphs: Vec<RenderedParagraph<'a>>,
}

/// 把文章的每个段落切分为可交互片段
pub fn render_article(article: &Article) -> RenderedArticle<'_> {
    RenderedArticle {
        title: &article.title,
        title_cn: (!article.title_cn.is_empty()).then_some(article.title_cn.as_str()),
        paragraphs: article
            .paragraphs
            .iter()
            .map(|p| RenderedParagraph {
                segments: annotate(&p.original),
                translation: &p.translation,
            })
            .collect(),
    }
}

/// 首页结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HomeView {
    Listing(Page<Article>),
    LoadFailed,
}

/// 阅读会话
pub struct ReaderSession<S> {
    source: S,
    preferences: ThemePreferences,
    preferences_path: PathBuf,
    page_size: usize,
    reveal: GlossReveal,
}

impl<S: ArticleSource> ReaderSession<S> {
    pub fn new(
        source: S,
        preferences: ThemePreferences,
        preferences_path: impl Into<PathBuf>,
        page_size: usize,
    ) -> Self {
        Self {
            source,
            preferences,
            preferences_path: preferences_path.into(),
            page_size,
            reveal: GlossReveal::new(),
        }
    }

    pub fn preferences(&self) -> &ThemePreferences {
        &self.preferences
    }

    pub fn reveal(&mut self) -> &mut GlossReveal {
        &mut self.reveal
    }

    /// 首页：搜索后分页
    pub async fn home(&self, query: &str, page: usize) -> HomeView {
        match load_catalog(&self.source).await {
            CatalogView::Loaded(articles) => {
                let hits: Vec<Article> = search(&articles, query).into_iter().cloned().collect();
                HomeView::Listing(paginate(&hits, page, self.page_size))
            }
            CatalogView::LoadFailed => HomeView::LoadFailed,
        }
    }

    /// 打开文章，并清除上一篇的释义显示状态
    pub async fn open(&mut self, id: &str) -> ArticleView {
        self.reveal.clear();
        load_article(&self.source, id).await
    }

    pub fn toggle_theme(&mut self) -> AppResult<()> {
        self.preferences.toggle_theme();
        self.persist()
    }

    pub fn set_theme(&mut self, is_dark: bool) -> AppResult<()> {
        self.preferences.set_theme(is_dark);
        self.persist()
    }

    pub fn set_paper_color(&mut self, color: &str) -> AppResult<()> {
        self.preferences.set_paper_color(color)?;
        self.persist()
    }

    pub fn set_font(&mut self, font: &str) -> AppResult<()> {
        self.preferences.set_font(font)?;
        self.persist()
    }

    fn persist(&self) -> AppResult<()> {
        self.preferences.save(&self.preferences_path)
    }
}
