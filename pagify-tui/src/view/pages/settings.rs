//! 设置页面视图

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use unicode_width::UnicodeWidthStr;

use crate::model::{App, SettingItem};
use crate::util::text::fit;
use crate::view::theme::colors;

/// 设置项的标签宽度（用于对齐，基于显示宽度）
const LABEL_WIDTH: usize = 20;
/// 值区域的宽度（不含 ◀ ▶）
const VALUE_WIDTH: usize = 16;

/// 渲染设置页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let settings = &app.settings;

    let mut lines = vec![Line::from("")];
    for (i, item) in SettingItem::all().iter().enumerate() {
        lines.push(render_setting_row(
            item.label(),
            settings.value_label(*item),
            settings.selected_index == i,
        ));
    }

    lines.push(Line::from(""));
    lines.push(Line::styled(
        "  The default portal decides whose saved session is restored at startup.",
        Style::default().fg(c.muted),
    ));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("  ↑↓", Style::default().fg(c.warning)),
        Span::styled(" Move | ", Style::default().fg(c.muted)),
        Span::styled("←→", Style::default().fg(c.warning)),
        Span::styled(" Change | ", Style::default().fg(c.muted)),
        Span::styled("Tab", Style::default().fg(c.warning)),
        Span::styled(" Switch panel", Style::default().fg(c.muted)),
    ]));

    frame.render_widget(Paragraph::new(lines), area);
}

/// 渲染单行设置项
fn render_setting_row(label: &str, value: &str, is_selected: bool) -> Line<'static> {
    let c = colors();
    let prefix = if is_selected { "▶ " } else { "  " };

    let label_style = if is_selected {
        Style::default().fg(c.fg).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.muted)
    };
    let value_style = if is_selected {
        Style::default().fg(c.highlight).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.highlight)
    };

    // 值居中显示在 ◀ ▶ 之间
    let left = VALUE_WIDTH.saturating_sub(value.width()) / 2;
    let value_display = fit(&format!("{:left$}{value}", ""), VALUE_WIDTH);
    let (open, close) = if is_selected { ("◀ ", " ▶") } else { ("  ", "  ") };

    Line::from(vec![
        Span::styled(format!("{prefix}{}", fit(label, LABEL_WIDTH)), label_style),
        Span::styled(": ", Style::default().fg(c.muted)),
        Span::styled(open, Style::default().fg(c.warning)),
        Span::styled(value_display, value_style),
        Span::styled(close, Style::default().fg(c.warning)),
    ])
}
