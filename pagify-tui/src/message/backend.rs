//! 后台命令与事件
//!
//! Update 层只产生 [`BackendCommand`]，由主循环交给 Backend 层在 tokio
//! 运行时上执行；结果以 [`BackendEvent`] 经 mpsc 通道回到主循环，
//! 再作为 `AppMessage::Backend` 进入 Update 层。

use std::path::PathBuf;

use pagify_api::{Credentials, Portal, Product, ProductScope, ProfileUpdate, UploadedPicture, UserProfile};
use pagify_core::services::{Action, RemoteOutcome};

use crate::backend::AppConfig;

/// 需要后台执行的操作
#[derive(Debug, Clone)]
pub enum BackendCommand {
    /// 启动引导：读取 token 并获取当前用户
    Bootstrap(Portal),
    Login {
        portal: Portal,
        credentials: Credentials,
    },
    Logout,
    LoadProducts(ProductScope),
    /// 远程动作（目前只有删除商品）
    Remote(Action),
    UpdateProfile(ProfileUpdate),
    UploadPicture(PathBuf),
    SaveConfig(AppConfig),
}

impl BackendCommand {
    pub fn operation(&self) -> Operation {
        match self {
            Self::Bootstrap(_) => Operation::Bootstrap,
            Self::Login { .. } => Operation::Login,
            Self::Logout => Operation::Logout,
            Self::LoadProducts(_) => Operation::LoadProducts,
            Self::Remote(_) => Operation::RemoteAction,
            Self::UpdateProfile(_) => Operation::UpdateProfile,
            Self::UploadPicture(_) => Operation::UploadPicture,
            Self::SaveConfig(_) => Operation::SaveConfig,
        }
    }
}

/// 操作类别（用于失败事件的路由）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Bootstrap,
    Login,
    Logout,
    LoadProducts,
    RemoteAction,
    UpdateProfile,
    UploadPicture,
    SaveConfig,
}

impl Operation {
    pub fn label(self) -> &'static str {
        match self {
            Self::Bootstrap => "Restore session",
            Self::Login => "Login",
            Self::Logout => "Logout",
            Self::LoadProducts => "Load products",
            Self::RemoteAction => "Action",
            Self::UpdateProfile => "Update profile",
            Self::UploadPicture => "Upload picture",
            Self::SaveConfig => "Save settings",
        }
    }
}

/// 后台操作结果
#[derive(Debug, Clone)]
pub enum BackendEvent {
    /// 已存 token 有效
    SessionRestored(UserProfile),
    /// 没有 token 或 token 已失效
    LoginRequired(Portal),
    LoggedIn {
        portal: Portal,
        profile: UserProfile,
    },
    LoggedOut,
    ProductsLoaded {
        scope: ProductScope,
        products: Vec<Product>,
    },
    RemoteDone(RemoteOutcome),
    ProfileUpdated(UserProfile),
    PictureUploaded(UploadedPicture),
    ConfigSaved,
    /// 操作失败，`message` 已是面向用户的文案
    Failed {
        operation: Operation,
        message: String,
    },
}
