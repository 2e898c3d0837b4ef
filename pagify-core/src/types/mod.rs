//! 类型定义模块

mod order;
mod product;
mod user;

pub use order::{Order, OrderStatus};
pub use user::{ManagedUser, Plan, UserStatus};

// Re-export api 库的公共类型
pub use pagify_api::{
    AuthToken, Credentials, Portal, Product, ProductScope, ProductStatus, ProfilePicture,
    ProfileUpdate, Role, UploadedPicture, UserProfile,
};
