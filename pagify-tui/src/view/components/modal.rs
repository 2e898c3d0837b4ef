//! 弹窗组件

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use pagify_core::form::{FormState, profile_form};
use pagify_core::services::MAX_PICTURE_BYTES;
use pagify_core::types::Portal;

use crate::model::App;
use crate::model::state::{Modal, login_schema};
use crate::util::text::truncate;
use crate::view::theme::{ThemeColors, colors};

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::Login { .. } => render_login(frame, modal),
        Modal::ConfirmAction { .. } => render_confirm_action(frame, modal),
        Modal::EditProfile { .. } => render_edit_profile(frame, modal),
        Modal::UploadPicture { .. } => render_upload(frame, modal),
        Modal::Error { title, message } => render_error(frame, title, message),
        Modal::Notice { title, lines } => render_notice(frame, title, lines),
        Modal::Help => render_help(frame),
    }
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// 清除背景并画出弹窗边框，返回内容区域
fn frame_modal(frame: &mut Frame, title: &str, width: u16, height: u16, accent: ratatui::style::Color) -> Rect {
    let c = colors();
    let area = centered_rect(width, height, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent))
        .style(Style::default().bg(c.bg).fg(c.fg));

    let inner = block.inner(area);
    frame.render_widget(block, area);
    Rect::new(
        inner.x + 1,
        inner.y,
        inner.width.saturating_sub(2),
        inner.height,
    )
}

/// 一个输入框：标签行 + 值行 + 可选的错误行
fn push_input(
    lines: &mut Vec<Line<'static>>,
    c: &ThemeColors,
    label: &str,
    value: &str,
    focused: bool,
    error: Option<&str>,
) {
    lines.push(Line::styled(label.to_string(), Style::default().fg(c.muted)));

    let display = if focused {
        format!("  {value}▎")
    } else if value.is_empty() {
        "  -".to_string()
    } else {
        format!("  {value}")
    };
    let style = if focused {
        Style::default().fg(c.highlight).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.fg)
    };
    lines.push(Line::styled(display, style));

    match error {
        Some(message) => lines.push(Line::styled(
            format!("  ✗ {message}"),
            Style::default().fg(c.error),
        )),
        None => lines.push(Line::from("")),
    }
}

fn form_field<'a>(form: &'a FormState, name: &str, secret: bool, show: bool) -> std::borrow::Cow<'a, str> {
    let value = form.value(name);
    if secret && !show {
        "•".repeat(value.chars().count()).into()
    } else {
        value.into()
    }
}

/// 渲染登录弹窗
fn render_login(frame: &mut Frame, modal: &Modal) {
    let Modal::Login {
        portal,
        form,
        focus,
        show_password,
        submitting,
        error,
        notifications,
    } = modal
    else {
        return;
    };

    let c = colors();
    let schema = login_schema(*portal);
    // 卖家入口的错误以通知列表展示，不显示在字段下
    let inline = notifications.is_empty();

    let mut lines = Vec::new();

    // === 入口选择 ===
    let portal_focused = *focus == 0;
    lines.push(Line::from(vec![
        Span::styled("Portal", Style::default().fg(c.muted)),
        if portal_focused {
            Span::styled(" (←→ to switch)", Style::default().fg(c.muted))
        } else {
            Span::raw("")
        },
    ]));
    let portal_line = Portal::all()
        .iter()
        .map(|p| {
            if p == portal {
                format!("[{}]", p.display_name())
            } else {
                format!(" {} ", p.display_name())
            }
        })
        .collect::<Vec<_>>()
        .join("  ");
    let portal_style = if portal_focused {
        Style::default().fg(c.highlight).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.fg)
    };
    lines.push(Line::styled(format!("  {portal_line}"), portal_style));
    lines.push(Line::from(""));

    // === 字段 ===
    for (i, spec) in schema.fields.iter().enumerate() {
        let value = form_field(form, spec.name, spec.secret, *show_password);
        let field_error = if inline { form.error(spec.name) } else { None };
        push_input(&mut lines, &c, spec.label, &value, *focus == i + 1, field_error);
    }

    for note in notifications {
        lines.push(Line::styled(
            format!("⚠ {note}"),
            Style::default().fg(c.warning),
        ));
    }
    if let Some(message) = error {
        lines.push(Line::styled(message.clone(), Style::default().fg(c.error)));
    }

    lines.push(Line::from(""));
    if *submitting {
        lines.push(Line::styled("Signing in…", Style::default().fg(c.muted)));
    } else {
        lines.push(Line::styled(
            "Enter sign in · Tab next field · Alt+s show password · Esc close",
            Style::default().fg(c.muted),
        ));
    }

    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(2);
    let inner = frame_modal(frame, "Sign in", 64, height, c.border_focused);
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

/// 渲染确认弹窗
fn render_confirm_action(frame: &mut Frame, modal: &Modal) {
    let Modal::ConfirmAction {
        prompt,
        confirm_focused,
        ..
    } = modal
    else {
        return;
    };

    let c = colors();
    let inner = frame_modal(frame, "Please confirm", 56, 9, c.error);

    let cancel_style = if *confirm_focused {
        Style::default().fg(c.fg)
    } else {
        Style::default().fg(c.selected_fg).bg(c.selected_bg)
    };
    let confirm_style = if *confirm_focused {
        Style::default().fg(c.bg).bg(c.error)
    } else {
        Style::default().fg(c.error)
    };

    let lines = vec![
        Line::from(""),
        Line::styled(prompt.clone(), Style::default().fg(c.fg)),
        Line::from(""),
        Line::from(vec![
            Span::raw("    "),
            Span::styled(" Cancel ", cancel_style),
            Span::raw("    "),
            Span::styled(" Confirm ", confirm_style),
        ]),
        Line::from(""),
        Line::styled("y / n · Tab switch · Enter choose", Style::default().fg(c.muted)),
    ];

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

/// 渲染资料编辑弹窗
fn render_edit_profile(frame: &mut Frame, modal: &Modal) {
    let Modal::EditProfile {
        form,
        focus,
        submitting,
        error,
    } = modal
    else {
        return;
    };

    let c = colors();
    let mut lines = Vec::new();
    for (i, spec) in profile_form().fields.iter().enumerate() {
        push_input(
            &mut lines,
            &c,
            spec.label,
            form.value(spec.name),
            *focus == i,
            form.error(spec.name),
        );
    }
    if let Some(message) = error {
        lines.push(Line::styled(message.clone(), Style::default().fg(c.error)));
    }
    lines.push(Line::from(""));
    lines.push(Line::styled(
        if *submitting {
            "Saving…"
        } else {
            "Enter save · Tab next field · Ctrl+u clear · Esc cancel"
        },
        Style::default().fg(c.muted),
    ));

    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(2);
    let inner = frame_modal(frame, "Edit profile", 60, height, c.border_focused);
    frame.render_widget(Paragraph::new(lines), inner);
}

/// 渲染头像上传弹窗
fn render_upload(frame: &mut Frame, modal: &Modal) {
    let Modal::UploadPicture {
        path,
        submitting,
        error,
    } = modal
    else {
        return;
    };

    let c = colors();
    let mut lines = Vec::new();
    push_input(&mut lines, &c, "Image file", path, true, error.as_deref());
    lines.push(Line::styled(
        format!(
            "JPEG, PNG, GIF or WebP, up to {} MB",
            MAX_PICTURE_BYTES / (1024 * 1024)
        ),
        Style::default().fg(c.muted),
    ));
    lines.push(Line::from(""));
    lines.push(Line::styled(
        if *submitting {
            "Uploading…"
        } else {
            "Enter upload · Esc cancel"
        },
        Style::default().fg(c.muted),
    ));

    let inner = frame_modal(frame, "Upload profile picture", 60, 9, c.border_focused);
    frame.render_widget(Paragraph::new(lines), inner);
}

/// 渲染错误弹窗
fn render_error(frame: &mut Frame, title: &str, message: &str) {
    let c = colors();
    let inner = frame_modal(frame, title, 50, 8, c.error);

    let lines = vec![
        Line::from(""),
        Line::styled(message.to_string(), Style::default().fg(c.fg)),
        Line::from(""),
        Line::styled("Press Esc or Enter to close", Style::default().fg(c.muted)),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner);
}

/// 渲染详情弹窗
fn render_notice(frame: &mut Frame, title: &str, body: &[String]) {
    const WIDTH: u16 = 60;

    let c = colors();
    let mut lines: Vec<Line> = vec![Line::from("")];
    lines.extend(body.iter().map(|l| {
        Line::styled(
            truncate(l, usize::from(WIDTH) - 4),
            Style::default().fg(c.fg),
        )
    }));
    lines.push(Line::from(""));
    lines.push(Line::styled("Press Esc or Enter to close", Style::default().fg(c.muted)));

    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(2);
    let inner = frame_modal(frame, &truncate(title, usize::from(WIDTH) - 6), WIDTH, height, c.border_focused);
    frame.render_widget(Paragraph::new(lines), inner);
}

/// 渲染帮助弹窗
fn render_help(frame: &mut Frame) {
    let c = colors();
    let section = |title: &'static str| {
        Line::styled(
            title,
            Style::default().fg(c.highlight).add_modifier(Modifier::BOLD),
        )
    };
    let entry = |key: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {key:<9}"), Style::default().fg(c.warning)),
            Span::styled(desc, Style::default().fg(c.fg)),
        ])
    };

    let lines = vec![
        section("Global"),
        entry("Tab", "Switch panel"),
        entry("↑↓ / jk", "Move up / down"),
        entry("Enter", "Open / details"),
        entry("Esc", "Back / cancel"),
        entry("Alt+l", "Sign in / sign out"),
        entry("Alt+r", "Refresh page"),
        entry("Alt+q", "Quit"),
        Line::from(""),
        section("Lists"),
        entry("/", "Search"),
        entry("f", "Cycle status filter"),
        entry("x", "Clear search and filter"),
        Line::from(""),
        section("Actions"),
        entry("Alt+d", "Delete product"),
        entry("p a b", "Publish / archive / block product"),
        entry("u s", "Upgrade / suspend user"),
        entry("n c", "Advance / cancel order"),
        entry("Alt+e", "Edit profile"),
        entry("Alt+u", "Upload profile picture"),
        Line::from(""),
        Line::styled("Press Esc to close the help", Style::default().fg(c.muted)),
    ];

    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(2);
    let inner = frame_modal(frame, "Help", 56, height, c.border_focused);
    frame.render_widget(Paragraph::new(lines), inner);
}
