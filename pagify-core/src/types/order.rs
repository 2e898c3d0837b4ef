//! 订单类型定义

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::list_view::Listable;

/// 订单状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn all() -> &'static [OrderStatus] {
        &[
            OrderStatus::Pending,
            OrderStatus::Processing,
            OrderStatus::Shipped,
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
        ]
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Processing => "Processing",
            Self::Shipped => "Shipped",
            Self::Delivered => "Delivered",
            Self::Cancelled => "Cancelled",
        }
    }

    /// 履约流程中的下一个状态；终态返回 `None`
    pub fn next(self) -> Option<OrderStatus> {
        match self {
            Self::Pending => Some(Self::Processing),
            Self::Processing => Some(Self::Shipped),
            Self::Shipped => Some(Self::Delivered),
            Self::Delivered | Self::Cancelled => None,
        }
    }

    /// 已发货 / 已完成 / 已取消的订单不能再取消
    pub fn is_cancellable(self) -> bool {
        matches!(self, Self::Pending | Self::Processing)
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// 订单
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// 订单号（如 `ORD-1001`）
    pub id: String,
    /// 下单客户
    pub customer: String,
    /// 客户邮箱
    pub email: String,
    /// 书名
    pub book_title: String,
    /// 金额
    pub total: f64,
    /// 下单日期
    pub placed_on: NaiveDate,
    /// 状态
    pub status: OrderStatus,
}

impl Listable for Order {
    type Status = OrderStatus;

    fn id(&self) -> &str {
        &self.id
    }

    fn search_text(&self) -> String {
        format!(
            "{} {} {} {}",
            self.id, self.customer, self.email, self.book_title
        )
    }

    fn status(&self) -> OrderStatus {
        self.status
    }

    fn all_statuses() -> &'static [OrderStatus] {
        OrderStatus::all()
    }
}
