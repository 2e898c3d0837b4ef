//! 演示数据
//!
//! 后端没有用户管理和订单接口，这两个列表页使用静态源数据。

use chrono::NaiveDate;

use crate::types::{ManagedUser, Order, OrderStatus, Plan, UserStatus};

fn user(id: &str, name: &str, email: &str, status: UserStatus, plan: Plan) -> ManagedUser {
    ManagedUser {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        status,
        plan,
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn order(
    id: &str,
    customer: &str,
    email: &str,
    book_title: &str,
    total: f64,
    placed_on: NaiveDate,
    status: OrderStatus,
) -> Order {
    Order {
        id: id.to_string(),
        customer: customer.to_string(),
        email: email.to_string(),
        book_title: book_title.to_string(),
        total,
        placed_on,
        status,
    }
}

/// 用户管理页的初始数据
pub fn demo_users() -> Vec<ManagedUser> {
    use Plan::{Free, Premium};
    use UserStatus::{Active, Suspended};

    vec![
        user("USR-001", "Olivia Bennett", "olivia.bennett@example.com", Active, Premium),
        user("USR-002", "Marcus Hale", "marcus.hale@example.com", Active, Free),
        user("USR-003", "Priya Raman", "priya.raman@example.com", Suspended, Free),
        user("USR-004", "Tomás Ortega", "tomas.ortega@example.com", Active, Free),
        user("USR-005", "Hannah Cole", "hannah.cole@example.com", Active, Premium),
        user("USR-006", "Kenji Watanabe", "kenji.watanabe@example.com", Suspended, Premium),
    ]
}

/// 订单页的初始数据
pub fn demo_orders() -> Vec<Order> {
    use OrderStatus::{Cancelled, Delivered, Pending, Processing, Shipped};

    vec![
        order("ORD-1001", "Olivia Bennett", "olivia.bennett@example.com", "The Midnight Library", 18.99, date(2024, 3, 2), Delivered),
        order("ORD-1002", "Marcus Hale", "marcus.hale@example.com", "Project Hail Mary", 24.50, date(2024, 3, 5), Shipped),
        order("ORD-1003", "Hannah Cole", "hannah.cole@example.com", "Educated", 15.00, date(2024, 3, 7), Processing),
        order("ORD-1004", "Tomás Ortega", "tomas.ortega@example.com", "Dune", 21.75, date(2024, 3, 9), Pending),
        order("ORD-1005", "Priya Raman", "priya.raman@example.com", "Circe", 16.20, date(2024, 3, 10), Cancelled),
        order("ORD-1006", "Kenji Watanabe", "kenji.watanabe@example.com", "Norwegian Wood", 13.40, date(2024, 3, 12), Pending),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list_view::Listable;

    #[test]
    fn ids_are_unique() {
        let users = demo_users();
        let mut ids: Vec<&str> = users.iter().map(Listable::id).collect();
        ids.dedup();
        assert_eq!(ids.len(), users.len());

        let orders = demo_orders();
        let mut ids: Vec<&str> = orders.iter().map(Listable::id).collect();
        ids.dedup();
        assert_eq!(ids.len(), orders.len());
    }

    #[test]
    fn dates_are_valid() {
        assert!(demo_orders().iter().all(|o| o.placed_on != NaiveDate::default()));
    }
}
