// Module declarations
mod app;
pub mod dashboard;
pub mod splash;
pub mod text;
// Re-exports for external use
pub use app::{App, UIConfig, run};
