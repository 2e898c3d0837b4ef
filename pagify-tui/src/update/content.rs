//! 内容面板更新逻辑
//!
//! 处理列表页的选择、搜索、筛选和动作，以及个人资料 / 设置页面的操作

use pagify_core::services::Action;
use pagify_core::services::ProfileService;
use pagify_core::types::{ManagedUser, Order, Product, ProductStatus, Role, UserStatus};
use pagify_core::{CategoryFilter, ListView, Listable};

use crate::message::{BackendCommand, ContentMessage};
use crate::model::{App, Page};
use crate::view::theme::set_theme;

/// 处理内容面板消息
pub fn update(app: &mut App, msg: ContentMessage) {
    match msg {
        // ========== 列表导航 ==========
        ContentMessage::SelectPrevious
        | ContentMessage::SelectNext
        | ContentMessage::SelectFirst
        | ContentMessage::SelectLast => {
            handle_select(app, msg);
        }
        ContentMessage::Confirm => {
            handle_confirm(app);
        }

        // ========== 搜索与筛选 ==========
        ContentMessage::StartSearch => {
            if app.current_page.is_list_page() {
                app.searching = true;
            }
        }
        ContentMessage::EndSearch => {
            app.searching = false;
        }
        ContentMessage::SearchInput(_)
        | ContentMessage::SearchBackspace
        | ContentMessage::CycleCategory
        | ContentMessage::ClearFilter => {
            handle_filter(app, msg);
        }

        // ========== 列表动作 ==========
        ContentMessage::Delete => handle_delete(app),
        ContentMessage::Publish => handle_product_status(app, ProductStatus::Active),
        ContentMessage::Archive => handle_product_status(app, ProductStatus::Archived),
        ContentMessage::Block => handle_block(app),
        ContentMessage::Upgrade => handle_upgrade(app),
        ContentMessage::ToggleSuspend => handle_toggle_suspend(app),
        ContentMessage::Advance => handle_advance(app),
        ContentMessage::Cancel => handle_cancel(app),

        // ========== 个人资料 ==========
        ContentMessage::Edit => handle_edit(app),
        ContentMessage::Upload => handle_upload(app),

        // ========== 设置页面专用 ==========
        ContentMessage::TogglePrev => {
            if app.current_page == Page::Settings {
                app.settings.toggle_prev();
                apply_settings(app);
            }
        }
        ContentMessage::ToggleNext => {
            if app.current_page == Page::Settings {
                app.settings.toggle_next();
                apply_settings(app);
            }
        }
    }
}

// ========== 选择 ==========

fn handle_select(app: &mut App, msg: ContentMessage) {
    match app.current_page {
        Page::Catalog => move_selection(&mut app.catalog, msg),
        Page::Products => move_selection(&mut app.lists.products, msg),
        Page::Users => move_selection(&mut app.lists.users, msg),
        Page::Orders => move_selection(&mut app.lists.orders, msg),
        Page::Settings => match msg {
            ContentMessage::SelectPrevious => app.settings.select_previous(),
            ContentMessage::SelectNext => app.settings.select_next(),
            _ => {}
        },
        Page::Home | Page::Profile => {}
    }
}

fn move_selection<T: Listable>(list: &mut ListView<T>, msg: ContentMessage) {
    match msg {
        ContentMessage::SelectPrevious => list.select_prev(),
        ContentMessage::SelectNext => list.select_next(),
        ContentMessage::SelectFirst => list.select_first(),
        ContentMessage::SelectLast => list.select_last(),
        _ => {}
    }
}

/// Enter：列表页查看详情，资料页编辑，设置页切换
fn handle_confirm(app: &mut App) {
    let details = match app.current_page {
        Page::Catalog => app.catalog.selected_item().map(product_details),
        Page::Products => app.lists.products.selected_item().map(product_details),
        Page::Users => app.lists.users.selected_item().map(user_details),
        Page::Orders => app.lists.orders.selected_item().map(order_details),
        Page::Profile => {
            handle_edit(app);
            return;
        }
        Page::Settings => {
            app.settings.toggle_next();
            apply_settings(app);
            return;
        }
        Page::Home => return,
    };

    if let Some((title, lines)) = details {
        app.modal.show_notice(title, lines);
    }
}

fn product_details(p: &Product) -> (String, Vec<String>) {
    let mut lines = vec![
        format!("ID:       {}", p.id),
        format!("Author:   {}", p.author.as_deref().unwrap_or("-")),
        format!("Price:    ${:.2}", p.price),
        format!("Stock:    {}", p.stock),
        format!("Status:   {}", p.status),
    ];
    if let Some(seller) = &p.seller {
        lines.push(format!("Seller:   {seller}"));
    }
    if let Some(category) = &p.category {
        lines.push(format!("Category: {category}"));
    }
    (p.title.clone(), lines)
}

fn user_details(u: &ManagedUser) -> (String, Vec<String>) {
    (
        u.name.clone(),
        vec![
            format!("ID:     {}", u.id),
            format!("Email:  {}", u.email),
            format!("Status: {}", u.status),
            format!("Plan:   {}", u.plan),
        ],
    )
}

fn order_details(o: &Order) -> (String, Vec<String>) {
    (
        format!("Order {}", o.id),
        vec![
            format!("Customer: {} <{}>", o.customer, o.email),
            format!("Book:     {}", o.book_title),
            format!("Total:    ${:.2}", o.total),
            format!("Placed:   {}", o.placed_on),
            format!("Status:   {}", o.status),
        ],
    )
}

// ========== 搜索与筛选 ==========

fn handle_filter(app: &mut App, msg: ContentMessage) {
    match app.current_page {
        Page::Catalog => edit_filter(&mut app.catalog, msg),
        Page::Products => edit_filter(&mut app.lists.products, msg),
        Page::Users => edit_filter(&mut app.lists.users, msg),
        Page::Orders => edit_filter(&mut app.lists.orders, msg),
        Page::Home | Page::Profile | Page::Settings => {}
    }
}

fn edit_filter<T: Listable>(list: &mut ListView<T>, msg: ContentMessage) {
    match msg {
        ContentMessage::SearchInput(c) => list.push_query_char(c),
        ContentMessage::SearchBackspace => list.pop_query_char(),
        ContentMessage::CycleCategory => list.cycle_category(),
        ContentMessage::ClearFilter => {
            list.set_query("");
            list.set_category(CategoryFilter::All);
        }
        _ => {}
    }
}

// ========== 列表动作 ==========

fn selected_product_id(app: &App) -> Option<String> {
    if app.current_page != Page::Products {
        return None;
    }
    app.lists.products.selected_item().map(|p| p.id.clone())
}

fn selected_user(app: &App) -> Option<&ManagedUser> {
    if app.current_page != Page::Users {
        return None;
    }
    app.lists.users.selected_item()
}

fn selected_order(app: &App) -> Option<&Order> {
    if app.current_page != Page::Orders {
        return None;
    }
    app.lists.orders.selected_item()
}

fn handle_delete(app: &mut App) {
    if let Some(product_id) = selected_product_id(app) {
        super::request_action(app, Action::DeleteProduct { product_id });
    }
}

fn handle_product_status(app: &mut App, status: ProductStatus) {
    if let Some(product_id) = selected_product_id(app) {
        super::request_action(app, Action::SetProductStatus { product_id, status });
    }
}

/// 封禁只对管理员开放
fn handle_block(app: &mut App) {
    if app.current_page != Page::Products {
        return;
    }
    if app.session.role() != Some(Role::Admin) {
        app.set_status("Only administrators can block listings");
        return;
    }
    handle_product_status(app, ProductStatus::Blocked);
}

fn handle_upgrade(app: &mut App) {
    if let Some(user) = selected_user(app) {
        let action = Action::UpgradeUser {
            user_id: user.id.clone(),
        };
        super::request_action(app, action);
    }
}

fn handle_toggle_suspend(app: &mut App) {
    if let Some(user) = selected_user(app) {
        let status = match user.status {
            UserStatus::Active => UserStatus::Suspended,
            UserStatus::Suspended => UserStatus::Active,
        };
        let action = Action::SetUserStatus {
            user_id: user.id.clone(),
            status,
        };
        super::request_action(app, action);
    }
}

fn handle_advance(app: &mut App) {
    let Some(order) = selected_order(app) else {
        return;
    };
    match order.status.next() {
        Some(status) => {
            let action = Action::UpdateOrderStatus {
                order_id: order.id.clone(),
                status,
            };
            super::request_action(app, action);
        }
        None => {
            let message = format!("Order {} is already {}", order.id, order.status);
            app.set_status(message);
        }
    }
}

fn handle_cancel(app: &mut App) {
    if let Some(order) = selected_order(app) {
        let action = Action::CancelOrder {
            order_id: order.id.clone(),
        };
        super::request_action(app, action);
    }
}

// ========== 个人资料 ==========

fn handle_edit(app: &mut App) {
    if app.current_page != Page::Profile {
        return;
    }
    match app.session.profile() {
        Some(profile) => {
            let form = ProfileService::fill_form(profile);
            app.modal.show_edit_profile(form);
        }
        None => app.set_status("Please log in to continue."),
    }
}

fn handle_upload(app: &mut App) {
    if app.current_page != Page::Profile {
        return;
    }
    if app.session.is_signed_in() {
        app.modal.show_upload();
    } else {
        app.set_status("Please log in to continue.");
    }
}

// ========== 设置 ==========

/// 应用并保存设置
fn apply_settings(app: &mut App) {
    set_theme(app.settings.theme);
    app.config.theme = app.settings.theme;
    app.config.portal = app.settings.portal;
    if !app.session.is_signed_in() {
        app.session.portal = app.settings.portal;
    }
    app.dispatch(BackendCommand::SaveConfig(app.config.clone()));
}
