//! 背景图片轮换：随机起始，每 30 秒切换到下一张

use rand::Rng;
use std::time::Duration;

/// 切换间隔
pub const ROTATION_INTERVAL: Duration = Duration::from_secs(30);

/// 默认背景图片
pub const DEFAULT_BACKGROUNDS: [&str; 8] = [
    "bg/1.jpg", "bg/2.jpg", "bg/3.jpg", "bg/4.jpg", "bg/5.jpg", "bg/6.jpg", "bg/7.jpg", "bg/8.jpg",
];

#[derive(Debug, Clone)]
pub struct BackgroundRotation {
    images: Vec<String>,
    index: usize,
}

impl BackgroundRotation {
    /// 从随机位置开始
    pub fn new<R: Rng + ?Sized>(images: Vec<String>, rng: &mut R) -> Self {
        let index = if images.is_empty() {
            0
        } else {
            rng.gen_range(0..images.len())
        };
        Self { images, index }
    }

    pub fn with_defaults<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(DEFAULT_BACKGROUNDS.iter().map(|s| s.to_string()).collect(), rng)
    }

    pub fn current(&self) -> Option<&str> {
        self.images.get(self.index).map(String::as_str)
    }

    /// 切换到下一张，末尾后回到第一张
    pub fn advance(&mut self) -> Option<&str> {
        if !self.images.is_empty() {
            self.index = (self.index + 1) % self.images.len();
        }
        self.current()
    }

    /// 依次展示 `count` 张图片，相邻两张之间等待 `interval`
    pub async fn rotate<F: FnMut(&str)>(&mut self, count: usize, interval: Duration, mut show: F) {
        let mut ticker = tokio::time::interval(interval);
        // 第一次 tick 立即返回
        ticker.tick().await;

        if count == 0 {
            return;
        }
        if let Some(image) = self.current() {
            show(image);
        }
        for _ in 1..count {
            ticker.tick().await;
            if let Some(image) = self.advance() {
                show(image);
            }
        }
    }
}
