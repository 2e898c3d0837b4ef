//! 个人资料页面视图

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::model::App;
use crate::util::text::fit;
use crate::view::theme::colors;

const LABEL_WIDTH: usize = 12;

/// 渲染个人资料页
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();

    let Some(profile) = app.session.profile() else {
        let content = vec![
            Line::from(""),
            Line::styled(
                "  You are browsing as a guest.",
                Style::default().fg(c.fg),
            ),
            Line::styled(
                "  Press Alt+l to sign in and manage your profile.",
                Style::default().fg(c.muted),
            ),
        ];
        frame.render_widget(Paragraph::new(content), area);
        return;
    };

    let row = |label: &str, value: &str| {
        Line::from(vec![
            Span::styled(format!("  {}", fit(label, LABEL_WIDTH)), Style::default().fg(c.muted)),
            Span::styled(value.to_string(), Style::default().fg(c.fg)),
        ])
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", profile.name),
            Style::default().fg(c.highlight).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        row("Email", &profile.email),
        row("Role", profile.role.display_name()),
        row("Phone", profile.phone.as_deref().unwrap_or("-")),
        row("Picture", profile.avatar_url.as_deref().unwrap_or("not uploaded")),
        Line::from(""),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Alt+e", Style::default().fg(c.warning)),
            Span::styled(" Edit profile | ", Style::default().fg(c.muted)),
            Span::styled("Alt+u", Style::default().fg(c.warning)),
            Span::styled(" Upload picture", Style::default().fg(c.muted)),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}
