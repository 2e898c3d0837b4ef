use async_trait::async_trait;

use crate::error::Result;
use crate::types::{
    AuthToken, Credentials, Portal, Product, ProductScope, ProfilePicture, ProfileUpdate,
    UploadedPicture, UserProfile,
};

/// Pagify 后端 API Trait
///
/// 每个方法对应一次 HTTP 往返，不做重试。需要鉴权的方法显式接收 bearer token，
/// 实现本身不持有会话状态（会话由上层 `SessionContext` 管理）。
#[async_trait]
pub trait StorefrontApi: Send + Sync {
    /// 用账号密码换取 bearer token（`POST /auth/login` 或 `POST /sellers/login`）
    async fn login(&self, portal: Portal, credentials: &Credentials) -> Result<AuthToken>;

    /// 获取当前用户资料（`GET /users/me`）
    async fn current_user(&self, token: &str) -> Result<UserProfile>;

    /// 更新当前用户资料（`PATCH /users/me`）
    async fn update_current_user(&self, token: &str, update: &ProfileUpdate)
    -> Result<UserProfile>;

    /// 上传头像（`POST /users/upload-profile-picture`，multipart）
    async fn upload_profile_picture(
        &self,
        token: &str,
        picture: ProfilePicture,
    ) -> Result<UploadedPicture>;

    /// 获取商品列表（`GET /products/all` 或 `GET /products/public`）
    ///
    /// 公开列表不需要 token。
    async fn list_products(&self, token: Option<&str>, scope: ProductScope)
    -> Result<Vec<Product>>;

    /// 删除商品（`DELETE /products/{id}`）
    async fn delete_product(&self, token: &str, product_id: &str) -> Result<()>;
}
