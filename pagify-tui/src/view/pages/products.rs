//! 商品管理页面视图

use pagify_core::types::Product;
use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::Style,
    text::Line,
    widgets::Paragraph,
};

use super::catalog::product_status_color;
use super::list::{self, Columns};
use crate::model::App;
use crate::view::theme::colors;

/// 渲染商品管理页
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    if !app.session.is_signed_in() {
        let c = colors();
        let content = vec![
            Line::from(""),
            Line::styled(
                "  Sign in with Alt+l to manage listings.",
                Style::default().fg(c.muted),
            ),
        ];
        frame.render_widget(Paragraph::new(content), area);
        return;
    }

    list::render(
        frame,
        area,
        &app.lists.products,
        app.searching,
        &Columns {
            headers: &["ID", "Title", "Seller", "Stock", "Price", "Status"],
            widths: &[
                Constraint::Length(10),
                Constraint::Percentage(35),
                Constraint::Percentage(20),
                Constraint::Length(6),
                Constraint::Length(9),
                Constraint::Min(12),
            ],
            empty_hint: "No listings yet.",
        },
        |p: &Product| {
            vec![
                p.id.clone(),
                p.title.clone(),
                p.seller.clone().unwrap_or_else(|| "-".to_string()),
                p.stock.to_string(),
                format!("${:.2}", p.price),
            ]
        },
        product_status_color,
    );
}
