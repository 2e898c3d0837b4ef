//! 用户管理页面视图

use pagify_core::types::{ManagedUser, UserStatus};
use ratatui::{Frame, layout::{Constraint, Rect}};

use super::list::{self, Columns};
use crate::model::App;
use crate::view::theme::colors;

/// 渲染用户管理页
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    list::render(
        frame,
        area,
        &app.lists.users,
        app.searching,
        &Columns {
            headers: &["ID", "Name", "Email", "Plan", "Status"],
            widths: &[
                Constraint::Length(8),
                Constraint::Percentage(25),
                Constraint::Percentage(35),
                Constraint::Length(8),
                Constraint::Min(10),
            ],
            empty_hint: "No users.",
        },
        |u: &ManagedUser| {
            vec![
                u.id.clone(),
                u.name.clone(),
                u.email.clone(),
                u.plan.to_string(),
            ]
        },
        |status| {
            let c = colors();
            match status {
                UserStatus::Active => c.success,
                UserStatus::Suspended => c.error,
            }
        },
    );
}
