//! 页面视图

pub mod catalog;
pub mod home;
mod list;
pub mod orders;
pub mod products;
pub mod profile;
pub mod settings;
pub mod users;
