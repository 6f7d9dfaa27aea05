pub mod article_parser;

pub use article_parser::{parse_article, parse_article_with_report, ParseReport};
