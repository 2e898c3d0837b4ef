//! # pagify-api
//!
//! Typed client for the Pagify bookstore REST API.
//!
//! ## Endpoints
//!
//! | Operation | Method | Path |
//! |-----------|--------|------|
//! | Buyer / admin login | `POST` | `/api/v1/auth/login` |
//! | Seller login | `POST` | `/api/v1/sellers/login` |
//! | Current profile | `GET` / `PATCH` | `/api/v1/users/me` |
//! | Profile picture | `POST` (multipart) | `/api/v1/users/upload-profile-picture` |
//! | All products | `GET` | `/api/v1/products/all` |
//! | Public products | `GET` | `/api/v1/products/public` |
//! | Delete product | `DELETE` | `/api/v1/products/{id}` |
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)*: Use the platform's native TLS implementation.
//! - **`rustls`**: Use rustls. Recommended for cross-compilation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pagify_api::{ClientConfig, Credentials, Portal, ProductScope, RestStorefront, StorefrontApi};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = RestStorefront::new(&ClientConfig::default())?;
//!
//!     let token = api
//!         .login(
//!             Portal::Seller,
//!             &Credentials {
//!                 email: "seller@pagify.io".to_string(),
//!                 password: "secret123".to_string(),
//!             },
//!         )
//!         .await?;
//!
//!     let products = api.list_products(Some(&token.token), ProductScope::All).await?;
//!     for product in &products {
//!         println!("{} [{}]", product.title, product.status);
//!     }
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod http_client;
mod traits;
mod types;
pub mod utils;

pub use client::{API_PREFIX, ClientConfig, DEFAULT_BASE_URL, RestStorefront};
pub use error::{ApiError, Result};
pub use http_client::HttpUtils;
pub use traits::StorefrontApi;
pub use types::{
    AuthToken, Credentials, Portal, Product, ProductScope, ProductStatus, ProfilePicture,
    ProfileUpdate, Role, UploadedPicture, UserProfile,
};
