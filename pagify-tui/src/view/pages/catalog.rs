//! 公开目录页面视图

use pagify_core::types::{Product, ProductStatus};
use ratatui::{Frame, layout::{Constraint, Rect}, style::Color};

use super::list::{self, Columns};
use crate::model::App;
use crate::view::theme::colors;

/// 渲染公开目录
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    list::render(
        frame,
        area,
        &app.catalog,
        app.searching,
        &Columns {
            headers: &["Title", "Author", "Price", "Status"],
            widths: &[
                Constraint::Percentage(45),
                Constraint::Percentage(30),
                Constraint::Length(9),
                Constraint::Min(10),
            ],
            empty_hint: "No books in the catalog yet. Press Alt+r to refresh.",
        },
        |p: &Product| {
            vec![
                p.title.clone(),
                p.author.clone().unwrap_or_default(),
                format!("${:.2}", p.price),
            ]
        },
        product_status_color,
    );
}

/// 商品状态颜色（商品管理页共用）
pub(super) fn product_status_color(status: ProductStatus) -> Color {
    let c = colors();
    match status {
        ProductStatus::Active => c.success,
        ProductStatus::Draft | ProductStatus::Archived => c.muted,
        ProductStatus::OutOfStock => c.warning,
        ProductStatus::Blocked => c.error,
    }
}
