//! 阅读偏好：深色模式、纸张颜色、字体
//!
//! 偏好是一个普通的可序列化结构，由调用方显式地在启动时 `load`、
//! 每次修改后 `save`，并作为上下文对象传给需要它的组件。

use crate::error::{AppError, AppResult, PreferencesError};
use phf::phf_ordered_map;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

/// 可选纸张颜色
pub const PAPER_COLORS: [&str; 5] = ["#ffffff", "#f5f5dc", "#e8f4f8", "#fffaf0", "#f0fff4"];

/// 字体名称 → CSS 字体栈
pub static FONTS: phf::OrderedMap<&'static str, &'static str> = phf_ordered_map! {
    "Arial" => "Arial, sans-serif",
    "Times" => "Times New Roman, serif",
    "Georgia" => "Georgia, serif",
    "Verdana" => "Verdana, sans-serif",
    "Courier" => "Courier New, monospace",
};

const DARK_PAPER_COLOR: &str = "#1a1a1a";

/// 当前主题下的配色
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    pub bg_color: &'static str,
    pub text_color: &'static str,
    pub paper_bg: String,
    pub highlight_bg: &'static str,
    pub highlight_text: &'static str,
    pub font_family: String,
}

/// 阅读偏好
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemePreferences {
    pub is_dark_mode: bool,
    pub current_paper_color: String,
    pub current_font: String,
}

impl Default for ThemePreferences {
    fn default() -> Self {
        Self {
            is_dark_mode: false,
            current_paper_color: PAPER_COLORS[0].to_string(),
            current_font: "Arial, sans-serif".to_string(),
        }
    }
}

impl ThemePreferences {
    /// 从文件加载，文件不存在时使用默认值
    ///
    /// 不在调色板或字体表中的值回退为默认值。
    pub fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let display = path.display().to_string();
        let content =
            std::fs::read_to_string(path).map_err(|e| AppError::file_read_failed(&display, e))?;
        let loaded: Self =
            serde_json::from_str(&content).map_err(|e| AppError::json_failed(display, e))?;
        Ok(loaded.sanitized())
    }

    fn sanitized(self) -> Self {
        let mut prefs = Self {
            is_dark_mode: self.is_dark_mode,
            ..Self::default()
        };

        if prefs.set_paper_color(&self.current_paper_color).is_err() {
            warn!("忽略无效的纸张颜色: {}", self.current_paper_color);
        }
        if prefs.set_font(&self.current_font).is_err() {
            warn!("忽略无效的字体: {}", self.current_font);
        }
        prefs
    }

    /// 保存到文件
    pub fn save(&self, path: impl AsRef<Path>) -> AppResult<()> {
        let path = path.as_ref();
        let display = path.display().to_string();
        let json =
            serde_json::to_string_pretty(self).map_err(|e| AppError::json_failed(&display, e))?;
        std::fs::write(path, json).map_err(|e| AppError::file_write_failed(display, e))
    }

    pub fn toggle_theme(&mut self) {
        self.is_dark_mode = !self.is_dark_mode;
    }

    pub fn set_theme(&mut self, is_dark: bool) {
        self.is_dark_mode = is_dark;
    }

    /// 设置纸张颜色，只接受调色板中的颜色（不区分大小写）
    pub fn set_paper_color(&mut self, color: &str) -> AppResult<()> {
        let normalized = color.trim().to_lowercase();
        if !PAPER_COLORS.contains(&normalized.as_str()) {
            return Err(PreferencesError::UnknownPaperColor {
                color: color.to_string(),
            }
            .into());
        }
        self.current_paper_color = normalized;
        Ok(())
    }

    /// 设置字体，接受字体名称（如 `Georgia`）或 CSS 字体栈
    pub fn set_font(&mut self, font: &str) -> AppResult<()> {
        let font = font.trim();
        let value = FONTS
            .entries()
            .find(|(name, value)| name.eq_ignore_ascii_case(font) || **value == font)
            .map(|(_, value)| *value)
            .ok_or_else(|| PreferencesError::UnknownFont {
                font: font.to_string(),
            })?;
        self.current_font = value.to_string();
        Ok(())
    }

    pub fn theme_class(&self) -> &'static str {
        if self.is_dark_mode {
            "dark-mode"
        } else {
            "light-mode"
        }
    }

    /// 实际显示的纸张颜色，深色模式下固定
    pub fn paper_color(&self) -> &str {
        if self.is_dark_mode {
            DARK_PAPER_COLOR
        } else {
            &self.current_paper_color
        }
    }

    pub fn theme_config(&self) -> ThemeConfig {
        if self.is_dark_mode {
            ThemeConfig {
                bg_color: "#000000",
                text_color: "#ffffff",
                paper_bg: DARK_PAPER_COLOR.to_string(),
                highlight_bg: "#ffd700",
                highlight_text: "#000000",
                font_family: self.current_font.clone(),
            }
        } else {
            ThemeConfig {
                bg_color: "#f5f5f5",
                text_color: "#333333",
                paper_bg: self.current_paper_color.clone(),
                highlight_bg: "#ffff00",
                highlight_text: "#000000",
                font_family: self.current_font.clone(),
            }
        }
    }

    /// 应用到文档根节点的 CSS 变量
    pub fn css_variables(&self) -> Vec<(&'static str, String)> {
        vec![
            ("--paper-color", self.paper_color().to_string()),
            ("--font-family", self.current_font.clone()),
        ]
    }
}
