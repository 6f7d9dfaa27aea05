//! # Bilingual Reader
//!
//! 双语阅读应用：构建期把 TXT 文章转换为 JSON，客户端展示文章并提供
//! 主题/字体设置、分页、搜索和行内生词释义。
//!
//! ## 架构设计
//!
//! ### ① 模型与解析（Models / Parser）
//! - `models/` - `Article`、`Paragraph` 以及源文件扫描
//! - `parser/` - 纯函数：原始文本 → `Article`
//!
//! ### ② 渲染（Render）
//! - `render/` - `*word*(definition)` 标注切分，释义显示状态
//!
//! ### ③ 编排层（Orchestration）
//! - `orchestrator/batch_processor` - 批量转换，写出汇总文件
//! - `orchestrator/article_converter` - 单个文件转换
//!
//! ### ④ 客户端（Client）
//! - `client/` - 文章获取与降级、搜索分页、阅读偏好、阅读会话

pub mod client;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod orchestrator;
pub mod parser;
pub mod render;
pub mod utils;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{Article, Paragraph};
pub use parser::{parse_article, parse_article_with_report, ParseReport};
pub use render::{annotate, segments, Segment};
