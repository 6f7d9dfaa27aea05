//! 首页列表的搜索与分页

use crate::models::Article;
use crate::render::plain_text;

/// 一页数据
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 当前页码（从 1 开始）
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

impl<T> Page<T> {
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// 按关键词过滤文章，不区分大小写
///
/// 匹配 id、标题、中文标题以及去掉标注语法后的段落原文和译文。
/// 空白关键词返回全部文章。
pub fn search<'a>(articles: &'a [Article], query: &str) -> Vec<&'a Article> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return articles.iter().collect();
    }

    articles
        .iter()
        .filter(|article| matches_query(article, &needle))
        .collect()
}

fn matches_query(article: &Article, needle: &str) -> bool {
    let contains = |haystack: &str| haystack.to_lowercase().contains(needle);

    contains(&article.id)
        || contains(&article.title)
        || contains(&article.title_cn)
        || article
            .paragraphs
            .iter()
            .any(|p| contains(&plain_text(&p.original)) || contains(&p.translation))
}

/// 分页，页码超出范围时夹到最近的有效页
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let total_items = items.len();
    let total_pages = total_items.div_ceil(page_size).max(1);
    let page = page.clamp(1, total_pages);

    let start = (page - 1) * page_size;
    let end = (start + page_size).min(total_items);

    Page {
        items: items[start..end].to_vec(),
        page,
        total_pages,
        total_items,
    }
}
