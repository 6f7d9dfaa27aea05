//! 双语文章解析
//!
//! 源文本格式：第 1 行标题，第 2 行中文标题，可选空行，
//! 之后是以空行分隔的段落块，每块第一行为原文、第二行为译文。

use crate::models::{Article, Paragraph};
use chrono::{DateTime, Utc};

const BOM: char = '\u{FEFF}';

/// 去掉行首尾空白，BOM 也视为空白
fn trim_line(line: &str) -> &str {
    line.trim_matches(|c: char| c.is_whitespace() || c == BOM)
}

/// 解析过程中的附加信息
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseReport {
    /// 段落块中第三行及以后被丢弃的内容行（行号从 1 开始）
    pub discarded_lines: Vec<usize>,
}

/// 将原始文本解析为文章
///
/// 对任何输入都返回结果，空文本得到空标题和空段落列表。
pub fn parse_article(id: impl Into<String>, content: &str, created_at: DateTime<Utc>) -> Article {
    parse_article_with_report(id, content, created_at).0
}

/// 同 [`parse_article`]，同时返回被丢弃行的报告
pub fn parse_article_with_report(
    id: impl Into<String>,
    content: &str,
    created_at: DateTime<Utc>,
) -> (Article, ParseReport) {
    let content = content.strip_prefix(BOM).unwrap_or(content);
    let mut lines = content.split('\n').enumerate().peekable();
    let mut report = ParseReport::default();

    let title = lines.next().map(|(_, l)| trim_line(l).to_string()).unwrap_or_default();
    let title_cn = lines.next().map(|(_, l)| trim_line(l).to_string()).unwrap_or_default();
    if lines.peek().is_some_and(|(_, l)| trim_line(l).is_empty()) {
        lines.next();
    }

    let mut paragraphs = Vec::new();
    let mut current = Paragraph::default();

    for (index, raw) in lines {
        let line = trim_line(raw);

        if line.is_empty() {
            if !current.is_empty() {
                paragraphs.push(std::mem::take(&mut current));
            }
        } else if current.original.is_empty() {
            current.original = line.to_string();
        } else if current.translation.is_empty() {
            current.translation = line.to_string();
        } else {
            report.discarded_lines.push(index + 1);
        }
    }

    if !current.is_empty() {
        paragraphs.push(current);
    }

    let article = Article {
        id: id.into(),
        title,
        title_cn,
        created_at,
        paragraphs,
    };
    (article, report)
}
