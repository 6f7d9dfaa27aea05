//! 编排层（Orchestration Layer）
//!
//! ## 模块划分
//!
//! ### `batch_processor` - 批量文章转换器
//! - 管理转换任务生命周期（初始化输出目录、运行、统计）
//! - 扫描源目录（Vec<PathBuf>）
//! - 控制并发数量，保持扫描顺序
//! - 写出汇总文件
//!
//! ### `article_converter` - 单个文章转换器
//! - 读取单个 TXT 文件
//! - 调用解析器
//! - 写出 `<id>.json`
//!
//! ## 层次关系
//!
//! ```text
//! batch_processor (处理 Vec<PathBuf>)
//!     ↓
//! article_converter (处理单个文件)
//!     ↓
//! parser (纯函数：文本 → Article)
//! ```

pub mod article_converter;
pub mod batch_processor;

pub use article_converter::convert_file;
pub use batch_processor::{App, ConversionStats};
