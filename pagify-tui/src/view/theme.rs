//! 主题和样式定义

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU8, Ordering};

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Deserializer, Serialize};

// 默认为 0 (Dark)，相应地，1 为 Light
static CURRENT_THEME: AtomicU8 = AtomicU8::new(0);

/// 主题枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn label(self) -> &'static str {
        match self {
            Theme::Dark => "Dark",
            Theme::Light => "Light",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn prev(self) -> Self {
        // 只有两个选项，前后切换相同
        self.next()
    }

    fn index(self) -> u8 {
        match self {
            Theme::Dark => 0,
            Theme::Light => 1,
        }
    }

    /// 解析配置值，无法识别时回退到深色主题
    pub fn parse_lenient(raw: &str) -> Self {
        raw.parse().unwrap_or_else(|_| {
            log::warn!("Unrecognized theme '{raw}', falling back to dark");
            Theme::Dark
        })
    }
}

/// 无法识别的主题名
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTheme(pub String);

impl fmt::Display for UnknownTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown theme '{}' (expected 'dark' or 'light')", self.0)
    }
}

impl std::error::Error for UnknownTheme {}

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            _ => Err(UnknownTheme(s.to_string())),
        }
    }
}

// 配置文件里写错主题名不应导致整个配置加载失败
impl<'de> Deserialize<'de> for Theme {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Theme::parse_lenient(&raw))
    }
}

/// 设置当前主题
pub fn set_theme(theme: Theme) {
    CURRENT_THEME.store(theme.index(), Ordering::SeqCst);
}

/// 当前主题
pub fn current_theme() -> Theme {
    match CURRENT_THEME.load(Ordering::SeqCst) {
        0 => Theme::Dark,
        _ => Theme::Light,
    }
}

/// 获取当前主题的颜色方案
pub fn colors() -> ThemeColors {
    match current_theme() {
        Theme::Dark => ThemeColors::dark(),
        Theme::Light => ThemeColors::light(),
    }
}

/// 主题颜色
#[derive(Debug, Clone)]
pub struct ThemeColors {
    pub bg: Color,
    pub fg: Color,
    pub border: Color,
    pub border_focused: Color,
    pub highlight: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub muted: Color,
}

impl ThemeColors {
    /// 深色主题
    pub fn dark() -> Self {
        Self {
            bg: Color::Rgb(28, 26, 24),
            fg: Color::Rgb(222, 214, 200),
            border: Color::Rgb(70, 64, 58),
            border_focused: Color::Rgb(214, 150, 72),
            highlight: Color::Rgb(214, 150, 72),
            selected_bg: Color::Rgb(92, 62, 34),
            selected_fg: Color::White,
            success: Color::Rgb(120, 190, 120),
            warning: Color::Rgb(230, 190, 90),
            error: Color::Rgb(235, 110, 100),
            muted: Color::Rgb(130, 124, 116),
        }
    }

    /// 浅色主题
    pub fn light() -> Self {
        Self {
            bg: Color::Rgb(250, 247, 240),
            fg: Color::Rgb(48, 42, 36),
            border: Color::Rgb(206, 198, 186),
            border_focused: Color::Rgb(170, 96, 20),
            highlight: Color::Rgb(170, 96, 20),
            selected_bg: Color::Rgb(244, 222, 190),
            selected_fg: Color::Black,
            success: Color::Rgb(40, 130, 60),
            warning: Color::Rgb(170, 120, 0),
            error: Color::Rgb(200, 50, 50),
            muted: Color::Rgb(128, 120, 110),
        }
    }
}

/// 常用样式
pub struct Styles;

impl Styles {
    /// 面板边框（按焦点区分）
    pub fn border(focused: bool) -> Style {
        let c = colors();
        Style::default().fg(if focused { c.border_focused } else { c.border })
    }

    /// 选中项样式
    pub fn selected() -> Style {
        let c = colors();
        Style::default()
            .bg(c.selected_bg)
            .fg(c.selected_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// 状态栏样式
    pub fn statusbar() -> Style {
        let c = colors();
        Style::default().bg(c.highlight).fg(c.selected_fg)
    }

    /// 快捷键提示样式
    pub fn hint_key() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    /// 快捷键说明样式
    pub fn hint_desc() -> Style {
        Style::default().fg(Color::Rgb(235, 235, 235))
    }
}
