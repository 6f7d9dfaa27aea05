//! 行内生词标注：`*word*(definition)`

use once_cell::sync::Lazy;
use regex::{CaptureMatches, Regex};
use serde::Serialize;
use std::iter::{Fuse, FusedIterator};

static HIGHLIGHT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*([^*]+)\*\(([^)]+)\)").expect("highlight pattern is valid"));

/// 渲染用的文本片段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Segment<'a> {
    /// 原样输出的文本
    Text { text: &'a str },
    /// 可交互的生词，悬停或点击时显示释义
    Gloss { word: &'a str, definition: &'a str },
}

/// 惰性地把段落原文切分为片段
pub struct Segments<'a> {
    text: &'a str,
    captures: Fuse<CaptureMatches<'static, 'a>>,
    last_end: usize,
    pending: Option<Segment<'a>>,
}

/// 切分段落原文；格式不完整的标注原样保留为文本
pub fn segments(text: &str) -> Segments<'_> {
    Segments {
        text,
        captures: HIGHLIGHT_RE.captures_iter(text).fuse(),
        last_end: 0,
        pending: None,
    }
}

/// 收集为 `Vec`
pub fn annotate(text: &str) -> Vec<Segment<'_>> {
    segments(text).collect()
}

/// 去掉标注语法，只保留单词本身
pub fn plain_text(text: &str) -> String {
    segments(text)
        .map(|segment| match segment {
            Segment::Text { text } => text,
            Segment::Gloss { word, .. } => word,
        })
        .collect()
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(segment) = self.pending.take() {
            return Some(segment);
        }

        let Some(caps) = self.captures.next() else {
            if self.last_end < self.text.len() {
                let rest = &self.text[self.last_end..];
                self.last_end = self.text.len();
                return Some(Segment::Text { text: rest });
            }
            return None;
        };

        // 正则成功匹配时三个分组必然存在
        let (whole, word, definition) = (caps.get(0)?, caps.get(1)?, caps.get(2)?);
        let gloss = Segment::Gloss {
            word: word.as_str().trim(),
            definition: definition.as_str().trim(),
        };

        let start = self.last_end;
        self.last_end = whole.end();
        if whole.start() > start {
            self.pending = Some(gloss);
            Some(Segment::Text {
                text: &self.text[start..whole.start()],
            })
        } else {
            Some(gloss)
        }
    }
}

impl FusedIterator for Segments<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Segment<'_> {
        Segment::Text { text: s }
    }

    fn gloss<'a>(word: &'a str, definition: &'a str) -> Segment<'a> {
        Segment::Gloss { word, definition }
    }

    #[test]
    fn test_single_gloss() {
        assert_eq!(
            annotate("I *love*(喜欢) cats."),
            vec![text("I "), gloss("love", "喜欢"), text(" cats.")]
        );
    }

    #[test]
    fn test_no_markup_is_one_text_segment() {
        let input = "Nothing to see here.";
        assert_eq!(annotate(input), vec![text(input)]);
    }

    #[test]
    fn test_empty_text_has_no_segments() {
        assert!(annotate("").is_empty());
    }

    #[test]
    fn test_multiple_and_adjacent_glosses() {
        assert_eq!(
            annotate("*quick*(快的)*brown*(棕色的) fox *jumps*(跳)"),
            vec![
                gloss("quick", "快的"),
                gloss("brown", "棕色的"),
                text(" fox "),
                gloss("jumps", "跳"),
            ]
        );
    }

    #[test]
    fn test_captures_are_trimmed() {
        assert_eq!(
            annotate("a * big dog *(  大狗 ) b"),
            vec![text("a "), gloss("big dog", "大狗"), text(" b")]
        );
    }

    #[test]
    fn test_malformed_markup_passes_through() {
        for input in ["an *open(未闭合", "*word* (space)", "*word*(missing", "**(empty)", "*w*()"] {
            assert_eq!(annotate(input), vec![text(input)], "input: {input}");
        }
    }

    #[test]
    fn test_stray_star_before_valid_markup() {
        assert_eq!(
            annotate("5 * 3 and *fox*(狐狸)"),
            vec![text("5 * 3 and "), gloss("fox", "狐狸")]
        );
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let input = "The *fox*(狐狸) and the *dog*(狗).";
        assert_eq!(annotate(input), annotate(input));
    }

    #[test]
    fn test_iterator_is_fused() {
        let mut iter = segments("x *y*(z)");
        assert_eq!(iter.by_ref().count(), 2);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_plain_text_strips_markup() {
        assert_eq!(plain_text("The *fox*(狐狸) jumped."), "The fox jumped.");
    }

    #[test]
    fn test_serializes_with_kind_tag() {
        let json = serde_json::to_value(annotate("I *love*(喜欢)")).unwrap();
        assert_eq!(json[0]["kind"], "text");
        assert_eq!(json[1]["kind"], "gloss");
        assert_eq!(json[1]["definition"], "喜欢");
    }
}
