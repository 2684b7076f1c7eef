//! Refresh workers

pub mod core;
pub mod refresher;

pub use refresher::{RefreshHandle, RefreshLoop, RefreshTrigger, Refresher};
