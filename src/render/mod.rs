//! 段落渲染：生词标注切分与释义显示状态

pub mod annotation;
pub mod reveal;

pub use annotation::{annotate, plain_text, segments, Segment, Segments};
pub use reveal::{GlossKey, GlossReveal};
