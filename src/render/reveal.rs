//! 生词释义的显示状态
//!
//! 同一篇文章视图中最多只有一个生词处于显示释义状态。

/// 生词在文章中的位置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GlossKey {
    /// 段落索引
    pub paragraph: usize,
    /// 段落内片段索引
    pub segment: usize,
}

impl GlossKey {
    pub fn new(paragraph: usize, segment: usize) -> Self {
        Self { paragraph, segment }
    }
}

/// 显示状态机
#[derive(Debug, Clone, Default)]
pub struct GlossReveal {
    revealed: Option<GlossKey>,
}

impl GlossReveal {
    pub fn new() -> Self {
        Self::default()
    }

    /// 指针进入：显示该生词，替换之前显示的
    pub fn pointer_enter(&mut self, key: GlossKey) {
        self.revealed = Some(key);
    }

    /// 指针离开：只有离开的正是当前显示的生词时才隐藏
    pub fn pointer_leave(&mut self, key: GlossKey) {
        if self.revealed == Some(key) {
            self.revealed = None;
        }
    }

    /// 触摸点击：切换
    pub fn tap(&mut self, key: GlossKey) {
        self.revealed = if self.revealed == Some(key) {
            None
        } else {
            Some(key)
        };
    }

    pub fn is_revealed(&self, key: GlossKey) -> bool {
        self.revealed == Some(key)
    }

    pub fn revealed(&self) -> Option<GlossKey> {
        self.revealed
    }

    /// 切换文章时重置
    pub fn clear(&mut self) {
        self.revealed = None;
    }
}
