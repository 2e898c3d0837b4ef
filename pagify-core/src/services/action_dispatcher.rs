//! Action dispatcher
//!
//! Maps dashboard actions to either an in-memory mutation of the loaded lists
//! or a single remote call. Lists are only touched by a remote action after
//! the call has succeeded (see [`ActionDispatcher::reconcile`]).

use std::sync::Arc;

use crate::error::{CoreError, CoreResult};
use crate::list_view::ListView;
use crate::services::{CatalogService, ServiceContext};
use crate::types::{ManagedUser, Order, OrderStatus, Plan, Product, ProductStatus, UserStatus};

/// 用户在列表页上触发的动作
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Move a user to the Premium plan.
    UpgradeUser { user_id: String },
    /// Suspend or reactivate a user.
    SetUserStatus { user_id: String, status: UserStatus },
    /// Delete a product on the backend.
    DeleteProduct { product_id: String },
    /// Change the listing status of a product (block, archive, ...).
    SetProductStatus {
        product_id: String,
        status: ProductStatus,
    },
    /// Move an order along its workflow.
    UpdateOrderStatus {
        order_id: String,
        status: OrderStatus,
    },
    /// Cancel an open order.
    CancelOrder { order_id: String },
}

/// 动作的执行路径
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    /// In-memory only, no network.
    Local,
    /// Exactly one HTTP request, list reconciled on success.
    Remote,
}

impl Action {
    pub fn kind(&self) -> ActionKind {
        match self {
            Self::DeleteProduct { .. } => ActionKind::Remote,
            _ => ActionKind::Local,
        }
    }

    /// 破坏性动作需要用户确认
    pub fn requires_confirmation(&self) -> bool {
        match self {
            Self::DeleteProduct { .. } | Self::CancelOrder { .. } => true,
            Self::SetProductStatus { status, .. } => *status == ProductStatus::Blocked,
            Self::SetUserStatus { status, .. } => *status == UserStatus::Suspended,
            Self::UpgradeUser { .. } | Self::UpdateOrderStatus { .. } => false,
        }
    }

    /// 确认对话框中的提示语
    pub fn prompt(&self, lists: &DashboardLists) -> String {
        match self {
            Self::DeleteProduct { product_id } => format!(
                "Delete \"{}\"? This cannot be undone.",
                product_title(lists, product_id)
            ),
            Self::SetProductStatus { product_id, status } => format!(
                "Mark \"{}\" as {status}?",
                product_title(lists, product_id)
            ),
            Self::SetUserStatus { user_id, status } => {
                let verb = match status {
                    UserStatus::Suspended => "Suspend",
                    UserStatus::Active => "Reactivate",
                };
                format!("{verb} {}?", user_name(lists, user_id))
            }
            Self::UpgradeUser { user_id } => {
                format!("Upgrade {} to Premium?", user_name(lists, user_id))
            }
            Self::UpdateOrderStatus { order_id, status } => {
                format!("Mark order {order_id} as {status}?")
            }
            Self::CancelOrder { order_id } => format!("Cancel order {order_id}?"),
        }
    }
}

fn product_title<'a>(lists: &'a DashboardLists, id: &'a str) -> &'a str {
    lists.products.find(id).map_or(id, |p| p.title.as_str())
}

fn user_name<'a>(lists: &'a DashboardLists, id: &'a str) -> &'a str {
    lists.users.find(id).map_or(id, |u| u.name.as_str())
}

/// 确认提示（成功后展示给用户）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
}

impl Notice {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// 远程调用成功后的结果，用于本地对账
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteOutcome {
    ProductDeleted { product_id: String },
}

/// 仪表盘上已加载的列表
#[derive(Debug, Clone, Default)]
pub struct DashboardLists {
    pub users: ListView<ManagedUser>,
    pub products: ListView<Product>,
    pub orders: ListView<Order>,
}

/// 动作分发器
pub struct ActionDispatcher {
    catalog: CatalogService,
}

impl ActionDispatcher {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self {
            catalog: CatalogService::new(ctx),
        }
    }

    /// 执行本地动作：只修改内存中的列表，不发请求
    pub fn apply_local(lists: &mut DashboardLists, action: &Action) -> CoreResult<Notice> {
        match action {
            Action::UpgradeUser { user_id } => {
                let user = lists
                    .users
                    .find(user_id)
                    .ok_or_else(|| CoreError::ItemNotFound(user_id.clone()))?;
                if user.plan == Plan::Premium {
                    return Err(CoreError::InvalidAction(format!(
                        "{} is already on the Premium plan",
                        user.name
                    )));
                }
                let name = user.name.clone();
                lists.users.update_by_id(user_id, |u| u.plan = Plan::Premium);
                Ok(Notice::new(format!("{name} upgraded to Premium")))
            }
            Action::SetUserStatus { user_id, status } => {
                let mut name = String::new();
                if !lists.users.update_by_id(user_id, |u| {
                    u.status = *status;
                    name.clone_from(&u.name);
                }) {
                    return Err(CoreError::ItemNotFound(user_id.clone()));
                }
                let verb = match status {
                    UserStatus::Suspended => "suspended",
                    UserStatus::Active => "reactivated",
                };
                Ok(Notice::new(format!("{name} {verb}")))
            }
            Action::SetProductStatus { product_id, status } => {
                let mut title = String::new();
                if !lists.products.update_by_id(product_id, |p| {
                    p.status = *status;
                    title.clone_from(&p.title);
                }) {
                    return Err(CoreError::ItemNotFound(product_id.clone()));
                }
                Ok(Notice::new(format!("\"{title}\" marked as {status}")))
            }
            Action::UpdateOrderStatus { order_id, status } => {
                if !lists.orders.update_by_id(order_id, |o| o.status = *status) {
                    return Err(CoreError::ItemNotFound(order_id.clone()));
                }
                Ok(Notice::new(format!("Order {order_id} marked as {status}")))
            }
            Action::CancelOrder { order_id } => {
                let order = lists
                    .orders
                    .find(order_id)
                    .ok_or_else(|| CoreError::ItemNotFound(order_id.clone()))?;
                if !order.status.is_cancellable() {
                    return Err(CoreError::InvalidAction(format!(
                        "Order {order_id} is already {} and cannot be cancelled",
                        order.status
                    )));
                }
                lists
                    .orders
                    .update_by_id(order_id, |o| o.status = OrderStatus::Cancelled);
                Ok(Notice::new(format!("Order {order_id} cancelled")))
            }
            Action::DeleteProduct { .. } => Err(CoreError::InvalidAction(
                "Deleting a product requires a server call".to_string(),
            )),
        }
    }

    /// 执行远程动作：恰好一次请求，不修改任何列表
    pub async fn execute_remote(&self, action: &Action) -> CoreResult<RemoteOutcome> {
        match action {
            Action::DeleteProduct { product_id } => {
                self.catalog.delete_product(product_id).await?;
                Ok(RemoteOutcome::ProductDeleted {
                    product_id: product_id.clone(),
                })
            }
            other => Err(CoreError::InvalidAction(format!(
                "{other:?} is applied locally"
            ))),
        }
    }

    /// 远程成功后的本地对账：删除恰好一条匹配条目
    pub fn reconcile(lists: &mut DashboardLists, outcome: &RemoteOutcome) -> CoreResult<Notice> {
        match outcome {
            RemoteOutcome::ProductDeleted { product_id } => {
                let removed = lists
                    .products
                    .remove_by_id(product_id)
                    .ok_or_else(|| CoreError::ItemNotFound(product_id.clone()))?;
                Ok(Notice::new(format!("\"{}\" deleted", removed.title)))
            }
        }
    }

    /// 顺序执行一个动作
    ///
    /// 需要确认的动作在 `confirmed == false` 时返回 `ConfirmationRequired`，
    /// 不做任何修改。远程失败时列表保持不变。
    pub async fn dispatch(
        &self,
        lists: &mut DashboardLists,
        action: &Action,
        confirmed: bool,
    ) -> CoreResult<Notice> {
        if action.requires_confirmation() && !confirmed {
            return Err(CoreError::ConfirmationRequired(action.prompt(lists)));
        }

        match action.kind() {
            ActionKind::Local => Self::apply_local(lists, action),
            ActionKind::Remote => {
                let outcome = self.execute_remote(action).await?;
                Self::reconcile(lists, &outcome)
            }
        }
    }
}
