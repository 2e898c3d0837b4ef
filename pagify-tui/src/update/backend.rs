//! 后台事件更新逻辑
//!
//! 后台请求的结果在这里写回 Model。远程动作只有在成功事件到达时才修改列表。

use pagify_core::services::ActionDispatcher;
use pagify_core::types::ProductScope;

use crate::message::{BackendCommand, BackendEvent, Operation};
use crate::model::{App, Modal};

/// 处理后台事件
pub fn update(app: &mut App, event: BackendEvent) {
    app.finish_request();

    match event {
        BackendEvent::SessionRestored(profile) => {
            let name = profile.name.clone();
            super::sign_in(app, profile);
            app.set_status(format!("Welcome back, {name}"));
        }

        BackendEvent::LoginRequired(portal) => {
            app.session.portal = portal;
            super::sign_out(app);
            app.modal.show_login(portal);
        }

        BackendEvent::LoggedIn { portal, profile } => {
            let name = profile.name.clone();
            app.modal.close();
            app.session.portal = portal;
            super::sign_in(app, profile);
            remember_portal(app);
            app.set_status(format!("Signed in as {name}"));
        }

        BackendEvent::LoggedOut => {
            super::sign_out(app);
            app.set_status("Signed out");
        }

        BackendEvent::ProductsLoaded { scope, products } => {
            let count = products.len();
            match scope {
                ProductScope::Public => app.catalog.set_source(products),
                ProductScope::All => app.lists.products.set_source(products),
            }
            log::debug!("{count} products loaded ({scope:?})");
            app.set_status(format!("{count} products loaded"));
        }

        BackendEvent::RemoteDone(outcome) => {
            match ActionDispatcher::reconcile(&mut app.lists, &outcome) {
                Ok(notice) => app.set_status(notice.message),
                Err(e) => {
                    log::warn!("Nothing to reconcile for {outcome:?}: {e}");
                    app.set_status(e.user_message());
                }
            }
        }

        BackendEvent::ProfileUpdated(profile) => {
            if let Some(current) = app.session.profile_mut() {
                *current = profile;
            }
            if matches!(app.modal.active, Some(Modal::EditProfile { .. })) {
                app.modal.close();
            }
            app.set_status("Profile updated");
        }

        BackendEvent::PictureUploaded(uploaded) => {
            if let Some(url) = uploaded.url
                && let Some(current) = app.session.profile_mut()
            {
                current.avatar_url = Some(url);
            }
            if matches!(app.modal.active, Some(Modal::UploadPicture { .. })) {
                app.modal.close();
            }
            app.set_status("Profile picture uploaded");
        }

        BackendEvent::ConfigSaved => {
            log::debug!("Settings saved");
        }

        BackendEvent::Failed { operation, message } => {
            handle_failure(app, operation, message);
        }
    }
}

/// 登录入口变化时写回配置，下次启动恢复同一入口
fn remember_portal(app: &mut App) {
    let portal = app.session.portal;
    if app.config.portal != portal {
        app.config.portal = portal;
        app.settings.portal = portal;
        app.dispatch(BackendCommand::SaveConfig(app.config.clone()));
    }
}

/// 失败只影响发起它的那个操作
fn handle_failure(app: &mut App, operation: Operation, message: String) {
    match operation {
        Operation::Login => {
            if let Some(Modal::Login {
                ref mut submitting,
                ref mut error,
                ..
            }) = app.modal.active
            {
                *submitting = false;
                *error = Some(message);
            } else {
                app.modal.show_error("Login failed", message);
            }
        }

        Operation::UpdateProfile => {
            if let Some(Modal::EditProfile {
                ref mut submitting,
                ref mut error,
                ..
            }) = app.modal.active
            {
                *submitting = false;
                *error = Some(message);
            } else {
                app.set_status(message);
            }
        }

        Operation::UploadPicture => {
            if let Some(Modal::UploadPicture {
                ref mut submitting,
                ref mut error,
                ..
            }) = app.modal.active
            {
                *submitting = false;
                *error = Some(message);
            } else {
                app.set_status(message);
            }
        }

        // 会话无法恢复：按未登录处理
        Operation::Bootstrap => {
            let portal = app.session.portal;
            super::sign_out(app);
            app.modal.show_login(portal);
            app.set_status(message);
        }

        // 核心层已先销毁会话，这里只同步界面
        Operation::Logout => {
            super::sign_out(app);
            app.modal.show_error("Logout", message);
        }

        Operation::RemoteAction => {
            app.modal.show_error("Action failed", message);
        }

        Operation::LoadProducts | Operation::SaveConfig => {
            app.set_status(format!("{}: {message}", operation.label()));
        }
    }
}

#[cfg(test)]
mod tests {
    use pagify_core::services::RemoteOutcome;
    use pagify_core::types::{Portal, ProductStatus, Role, UploadedPicture};

    use super::*;
    use crate::model::{NavItemId, Page};
    use crate::update::test_support::{app, product, profile, signed_in};

    fn seller_with_products() -> App {
        let mut app = signed_in(Role::Seller);
        app.lists.products.set_source(vec![
            product("PRD-1", "Kindred", ProductStatus::Active),
            product("PRD-2", "Parable of the Sower", ProductStatus::Draft),
        ]);
        app
    }

    #[test]
    fn restored_session_builds_role_navigation() {
        let mut app = app();
        update(&mut app, BackendEvent::SessionRestored(profile(Role::Admin)));

        assert!(app.session.is_signed_in());
        assert!(app.navigation.contains(NavItemId::Users));
        assert_eq!(app.current_page, Page::Home);
    }

    #[test]
    fn login_required_opens_login_for_that_portal() {
        let mut app = app();
        update(&mut app, BackendEvent::LoginRequired(Portal::Seller));

        assert!(!app.session.is_signed_in());
        assert!(!app.session.is_restoring());
        assert!(matches!(
            app.modal.active,
            Some(Modal::Login { portal: Portal::Seller, .. })
        ));
        assert!(matches!(
            app.take_commands().as_slice(),
            [BackendCommand::LoadProducts(ProductScope::Public)]
        ));
    }

    #[test]
    fn login_with_new_portal_is_remembered() {
        let mut app = app();
        app.modal.show_login(Portal::Seller);
        update(
            &mut app,
            BackendEvent::LoggedIn {
                portal: Portal::Seller,
                profile: profile(Role::Seller),
            },
        );

        assert!(!app.modal.is_open());
        assert_eq!(app.config.portal, Portal::Seller);
        let commands = app.take_commands();
        assert!(
            commands
                .iter()
                .any(|c| matches!(c, BackendCommand::SaveConfig(cfg) if cfg.portal == Portal::Seller))
        );
    }

    #[test]
    fn login_failure_unlocks_form_with_message() {
        let mut app = app();
        app.modal.show_login(Portal::Buyer);
        if let Some(Modal::Login {
            ref mut submitting, ..
        }) = app.modal.active
        {
            *submitting = true;
        }

        update(
            &mut app,
            BackendEvent::Failed {
                operation: Operation::Login,
                message: "Invalid email or password".into(),
            },
        );
        assert!(matches!(
            app.modal.active,
            Some(Modal::Login { submitting: false, error: Some(ref e), .. }) if e == "Invalid email or password"
        ));
    }

    #[test]
    fn delete_success_removes_exactly_one() {
        let mut app = seller_with_products();
        update(
            &mut app,
            BackendEvent::RemoteDone(RemoteOutcome::ProductDeleted {
                product_id: "PRD-1".into(),
            }),
        );

        assert_eq!(app.lists.products.source().len(), 1);
        assert!(app.lists.products.find("PRD-1").is_none());
        assert_eq!(app.status_message.as_deref(), Some("\"Kindred\" deleted"));
    }

    #[test]
    fn delete_failure_leaves_list_untouched() {
        let mut app = seller_with_products();
        update(
            &mut app,
            BackendEvent::Failed {
                operation: Operation::RemoteAction,
                message: "Something went wrong. Please try again.".into(),
            },
        );

        assert_eq!(app.lists.products.source().len(), 2);
        assert!(matches!(app.modal.active, Some(Modal::Error { .. })));
    }

    #[test]
    fn products_land_in_scope_list() {
        let mut app = signed_in(Role::Admin);
        update(
            &mut app,
            BackendEvent::ProductsLoaded {
                scope: ProductScope::All,
                products: vec![product("PRD-3", "Lilith's Brood", ProductStatus::Blocked)],
            },
        );
        assert_eq!(app.lists.products.source().len(), 1);
        assert!(app.catalog.source().is_empty());
    }

    #[test]
    fn uploaded_picture_updates_avatar() {
        let mut app = signed_in(Role::Buyer);
        app.modal.show_upload();
        update(
            &mut app,
            BackendEvent::PictureUploaded(UploadedPicture {
                url: Some("https://cdn.pagify.io/a.png".into()),
            }),
        );

        assert!(!app.modal.is_open());
        assert_eq!(
            app.session.profile().and_then(|p| p.avatar_url.as_deref()),
            Some("https://cdn.pagify.io/a.png")
        );
    }

    #[test]
    fn logged_out_returns_to_guest_view() {
        let mut app = signed_in(Role::Admin);
        update(&mut app, BackendEvent::LoggedOut);

        assert!(!app.session.is_signed_in());
        assert!(app.lists.users.source().is_empty());
        assert_eq!(app.status_message.as_deref(), Some("Signed out"));
    }

    #[test]
    fn finished_requests_are_counted() {
        let mut app = app();
        app.in_flight = 1;
        update(&mut app, BackendEvent::ConfigSaved);
        assert!(!app.is_busy());
        update(&mut app, BackendEvent::ConfigSaved);
        assert_eq!(app.in_flight, 0);
    }
}
