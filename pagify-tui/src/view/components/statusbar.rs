//! 底部状态栏组件

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::model::{App, FocusPanel, Page};
use crate::util::text::truncate;
use crate::view::theme::{Styles, colors};

/// 状态消息最多占用的列数
const MESSAGE_WIDTH: usize = 60;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let hints = get_hints(app);

    let mut spans = Vec::new();
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(c.muted)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 状态消息显示在提示之后
    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(c.muted)));
        spans.push(Span::styled(
            truncate(msg, MESSAGE_WIDTH),
            Style::default().fg(c.warning),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    if app.searching {
        return vec![("Type", "Search"), ("Enter/Esc", "Done"), ("↑↓", "Select")];
    }

    let mut hints = vec![("Tab", "Switch Panels")];

    match app.focus {
        FocusPanel::Navigation => {
            hints.push(("↑↓", "Navigate"));
            hints.push(("Enter", "Open"));
        }
        FocusPanel::Content => match app.current_page {
            Page::Home => {}
            Page::Catalog => {
                hints.push(("/", "Search"));
                hints.push(("f", "Filter"));
                hints.push(("Enter", "Details"));
            }
            Page::Products => {
                hints.push(("/", "Search"));
                hints.push(("f", "Filter"));
                hints.push(("p/a/b", "Publish/Archive/Block"));
                hints.push(("Alt+d", "Delete"));
            }
            Page::Users => {
                hints.push(("/", "Search"));
                hints.push(("f", "Filter"));
                hints.push(("u", "Upgrade"));
                hints.push(("s", "Suspend"));
            }
            Page::Orders => {
                hints.push(("/", "Search"));
                hints.push(("f", "Filter"));
                hints.push(("n", "Advance"));
                hints.push(("c", "Cancel"));
            }
            Page::Profile => {
                hints.push(("Alt+e", "Edit"));
                hints.push(("Alt+u", "Upload picture"));
            }
            Page::Settings => {
                hints.push(("↑↓", "Select"));
                hints.push(("←→", "Change"));
            }
        },
    }

    if app.session.is_signed_in() {
        hints.push(("Alt+l", "Logout"));
    } else {
        hints.push(("Alt+l", "Login"));
    }
    hints.push(("Alt+q", "Quit"));

    hints
}
