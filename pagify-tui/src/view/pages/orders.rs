//! 订单管理页面视图

use pagify_core::types::{Order, OrderStatus};
use ratatui::{Frame, layout::{Constraint, Rect}};

use super::list::{self, Columns};
use crate::model::App;
use crate::view::theme::colors;

/// 渲染订单管理页
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    list::render(
        frame,
        area,
        &app.lists.orders,
        app.searching,
        &Columns {
            headers: &["Order", "Customer", "Book", "Total", "Placed", "Status"],
            widths: &[
                Constraint::Length(9),
                Constraint::Percentage(20),
                Constraint::Percentage(30),
                Constraint::Length(9),
                Constraint::Length(10),
                Constraint::Min(11),
            ],
            empty_hint: "No orders yet.",
        },
        |o: &Order| {
            vec![
                o.id.clone(),
                o.customer.clone(),
                o.book_title.clone(),
                format!("${:.2}", o.total),
                o.placed_on.format("%Y-%m-%d").to_string(),
            ]
        },
        |status| {
            let c = colors();
            match status {
                OrderStatus::Delivered => c.success,
                OrderStatus::Shipped | OrderStatus::Processing => c.highlight,
                OrderStatus::Pending => c.warning,
                OrderStatus::Cancelled => c.error,
            }
        },
    );
}
