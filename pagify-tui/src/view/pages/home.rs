//! 首页视图

use std::fmt::Display;

use pagify_core::types::Role;
use pagify_core::{ListView, Listable};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::model::{App, SessionStatus};
use crate::view::theme::colors;

/// 渲染首页
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    // 首页布局：欢迎信息 + 统计信息
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // 欢迎区域
            Constraint::Min(1),    // 统计区域
        ])
        .split(area);

    render_welcome(app, frame, layout[0]);

    let mut cards: Vec<(&str, Vec<Line>)> = Vec::new();
    match app.session.role() {
        Some(Role::Admin) => {
            cards.push(("Users", stat_lines(&app.lists.users)));
            cards.push(("Listings", stat_lines(&app.lists.products)));
            cards.push(("Orders", stat_lines(&app.lists.orders)));
        }
        Some(Role::Seller) => {
            cards.push(("Listings", stat_lines(&app.lists.products)));
            cards.push(("Orders", stat_lines(&app.lists.orders)));
        }
        Some(Role::Buyer) | None => {
            cards.push(("Catalog", stat_lines(&app.catalog)));
        }
    }

    let count = u32::try_from(cards.len()).unwrap_or(1);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(cards.iter().map(|_| Constraint::Ratio(1, count)))
        .split(layout[1]);

    let c = colors();
    for ((title, lines), column) in cards.into_iter().zip(columns.iter()) {
        let block = Block::default()
            .title(format!(" {title} "))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(c.border));
        frame.render_widget(Paragraph::new(lines).block(block), *column);
    }
}

fn render_welcome(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();

    let (greeting, detail) = match &app.session.status {
        SessionStatus::Restoring => (
            "  Welcome to Pagify".to_string(),
            "  Restoring your session…".to_string(),
        ),
        SessionStatus::Anonymous => (
            "  Welcome to Pagify".to_string(),
            "  Browse the catalog, or press Alt+l to sign in".to_string(),
        ),
        SessionStatus::SignedIn(profile) => (
            format!("  Welcome back, {}", profile.name),
            match profile.role {
                Role::Admin => "  Manage users, listings and orders across the store",
                Role::Seller => "  Manage your listings and fulfil orders",
                Role::Buyer => "  Find your next book",
            }
            .to_string(),
        ),
    };

    let welcome = vec![
        Line::from(""),
        Line::from(Span::styled(
            greeting,
            Style::default().fg(c.highlight).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(detail, Style::default().fg(c.muted))),
        Line::from(""),
    ];
    frame.render_widget(Paragraph::new(welcome), area);
}

/// 统计卡片内容：总数 + 各状态数量
fn stat_lines<T>(view: &ListView<T>) -> Vec<Line<'static>>
where
    T: Listable,
    T::Status: Display,
{
    let c = colors();
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", view.source().len()),
            Style::default().fg(c.success).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    lines.extend(view.status_counts().into_iter().map(|(status, n)| {
        Line::from(vec![
            Span::styled(format!("  {status:<14}"), Style::default().fg(c.muted)),
            Span::styled(n.to_string(), Style::default().fg(c.fg)),
        ])
    }));
    lines
}
