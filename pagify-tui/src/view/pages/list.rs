//! 列表页公共渲染：筛选栏 + 表格 + 空状态

use std::fmt::Display;

use pagify_core::{CategoryFilter, ListView, Listable};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table, TableState},
};

use crate::view::theme::{Styles, colors};

/// 表格列定义
pub struct Columns<'a> {
    pub headers: &'a [&'a str],
    pub widths: &'a [Constraint],
    /// 数据源为空时的提示
    pub empty_hint: &'a str,
}

/// 渲染一个可筛选的列表页
///
/// `cells` 生成除状态列以外的单元格，状态列总在最后，颜色由 `status_color` 决定。
pub fn render<T>(
    frame: &mut Frame,
    area: Rect,
    view: &ListView<T>,
    searching: bool,
    columns: &Columns<'_>,
    cells: impl Fn(&T) -> Vec<String>,
    status_color: impl Fn(T::Status) -> Color,
) where
    T: Listable,
    T::Status: Display,
{
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 筛选栏
            Constraint::Length(1),
            Constraint::Min(1), // 表格
        ])
        .split(area);

    render_filter_bar(frame, layout[0], view, searching);

    if view.is_empty() {
        render_empty(frame, layout[2], view, columns.empty_hint);
        return;
    }

    let c = colors();
    let header = Row::new(
        columns
            .headers
            .iter()
            .map(|h| Cell::from(*h).style(Style::default().fg(c.muted).add_modifier(Modifier::BOLD))),
    );

    let rows = view.visible().map(|item| {
        let status = item.status();
        let mut row: Vec<Cell> = cells(item).into_iter().map(Cell::from).collect();
        row.push(Cell::from(status.to_string()).style(Style::default().fg(status_color(status))));
        Row::new(row).style(Style::default().fg(c.fg))
    });

    let table = Table::new(rows, columns.widths.iter().copied())
        .header(header)
        .column_spacing(2)
        .row_highlight_style(Styles::selected())
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(view.selected_index()));

    frame.render_stateful_widget(table, layout[2], &mut state);
}

fn render_filter_bar<T>(frame: &mut Frame, area: Rect, view: &ListView<T>, searching: bool)
where
    T: Listable,
    T::Status: Display,
{
    let c = colors();

    let query = if searching {
        format!("{}▎", view.query())
    } else if view.query().is_empty() {
        "-".to_string()
    } else {
        view.query().to_string()
    };
    let query_style = if searching {
        Style::default().fg(c.highlight).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.fg)
    };

    let category = match view.category() {
        CategoryFilter::All => "All".to_string(),
        CategoryFilter::Only(status) => status.to_string(),
    };

    let line = Line::from(vec![
        Span::styled(" Search: ", Style::default().fg(c.muted)),
        Span::styled(query, query_style),
        Span::styled("   Status: ", Style::default().fg(c.muted)),
        Span::styled(category, Style::default().fg(c.highlight)),
        Span::styled(
            format!("   {}/{}", view.visible_len(), view.source().len()),
            Style::default().fg(c.muted),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_empty<T: Listable>(frame: &mut Frame, area: Rect, view: &ListView<T>, hint: &str) {
    let c = colors();
    let message = if view.source().is_empty() {
        hint.to_string()
    } else {
        "No entries match the current search. Press x to clear it.".to_string()
    };

    let content = vec![
        Line::from(""),
        Line::styled(format!("  {message}"), Style::default().fg(c.muted)),
    ];
    frame.render_widget(Paragraph::new(content), area);
}
