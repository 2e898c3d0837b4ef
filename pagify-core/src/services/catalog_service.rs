//! 商品目录服务

use std::sync::Arc;

use crate::error::CoreResult;
use crate::services::ServiceContext;
use crate::types::{Product, ProductScope};

/// 商品目录服务
pub struct CatalogService {
    ctx: Arc<ServiceContext>,
}

impl CatalogService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// 获取商品列表
    ///
    /// `All` 需要登录；`Public` 匿名即可（已登录时仍附带 token）。
    pub async fn list_products(&self, scope: ProductScope) -> CoreResult<Vec<Product>> {
        let token = match scope {
            ProductScope::All => Some(self.ctx.require_token().await?),
            ProductScope::Public => self.ctx.session.token().await,
        };

        let products = self.ctx.api.list_products(token.as_deref(), scope).await?;
        log::debug!("Fetched {} products ({scope:?})", products.len());
        Ok(products)
    }

    /// 删除商品（单次请求，不重试）
    pub async fn delete_product(&self, product_id: &str) -> CoreResult<()> {
        let token = self.ctx.require_token().await?;
        self.ctx.api.delete_product(&token, product_id).await?;
        log::info!("Deleted product {product_id}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;

    use super::*;
    use crate::error::CoreError;
    use crate::test_utils::{TEST_TOKEN, create_signed_in_context, create_test_context};
    use crate::types::Role;
    use pagify_api::ApiError;

    #[tokio::test]
    async fn public_catalog_needs_no_session() {
        let (ctx, api, _) = create_test_context();
        let svc = CatalogService::new(ctx);

        let products = svc.list_products(ProductScope::Public).await.unwrap();
        assert_eq!(products.len(), 3);
        assert_eq!(*api.last_scope.read().await, Some(ProductScope::Public));
        assert!(api.last_token.read().await.is_none());
    }

    #[tokio::test]
    async fn full_catalog_requires_session() {
        let (ctx, api, _) = create_test_context();
        let svc = CatalogService::new(ctx);

        let err = svc.list_products(ProductScope::All).await.unwrap_err();
        assert!(matches!(err, CoreError::NotAuthenticated));
        assert_eq!(api.list_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn full_catalog_sends_bearer_token() {
        let (ctx, api, _) = create_signed_in_context(Role::Admin).await;
        let svc = CatalogService::new(ctx);

        svc.list_products(ProductScope::All).await.unwrap();
        assert_eq!(api.last_token.read().await.as_deref(), Some(TEST_TOKEN));
    }

    #[tokio::test]
    async fn list_failure_surfaces_server_message() {
        let (ctx, api, _) = create_signed_in_context(Role::Admin).await;
        api.set_products_result(Err(ApiError::ServerError {
            status: 403,
            raw_message: Some("Admins only".into()),
        }))
        .await;
        let svc = CatalogService::new(ctx);

        let err = svc.list_products(ProductScope::All).await.unwrap_err();
        assert_eq!(err.user_message(), "Admins only");
        assert_eq!(api.list_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn delete_issues_exactly_one_request() {
        let (ctx, api, _) = create_signed_in_context(Role::Seller).await;
        let svc = CatalogService::new(ctx);

        svc.delete_product("PRD-1").await.unwrap();
        assert_eq!(api.delete_calls.load(Ordering::SeqCst), 1);
    }
}
