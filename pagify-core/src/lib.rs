//! Pagify Core Library
//!
//! Platform-independent client logic for the Pagify bookstore:
//! - List-view controller (search + category filter over any list)
//! - Form / validation controller
//! - Session bootstrap, login and logout
//! - Dashboard action dispatcher (local mutations and remote calls)
//!
//! Storage is abstracted through [`TokenStore`]; the backend through
//! [`pagify_api::StorefrontApi`]. Front-ends build a [`ServiceContext`] and
//! hand it to the services.

pub mod error;
pub mod fixtures;
pub mod form;
pub mod list_view;
pub mod services;
pub mod session;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use list_view::{CategoryFilter, FilterState, ListView, Listable, apply_filter};
pub use services::ServiceContext;
pub use traits::{InMemoryTokenStore, TokenStore};
