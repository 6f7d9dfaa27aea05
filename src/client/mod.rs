//! 客户端层
//!
//! - `source` - 文章数据来源（HTTP / 本地目录 / 内存）
//! - `retrieval` - 单篇获取与汇总降级，失败转换为显示状态
//! - `catalog` - 搜索与分页
//! - `preferences` - 阅读偏好
//! - `background` - 背景图片轮换
//! - `session` - 组合以上能力的阅读会话

pub mod background;
pub mod catalog;
pub mod preferences;
pub mod retrieval;
pub mod session;
pub mod source;

pub use background::{BackgroundRotation, DEFAULT_BACKGROUNDS, ROTATION_INTERVAL};
pub use catalog::{paginate, search, Page};
pub use preferences::{ThemeConfig, ThemePreferences};
pub use retrieval::{fetch_with_fallback, load_article, load_catalog, ArticleView, CatalogView};
pub use session::{render_article, HomeView, ReaderSession, RenderedArticle, RenderedParagraph};
pub use source::{validate_id, ArticleSource, DirSource, EmbeddedSource, HttpSource};
