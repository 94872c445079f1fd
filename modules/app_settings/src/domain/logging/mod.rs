//! Application logging: asynchronous fan-out and level gating

pub mod manager;
pub mod service;

pub use manager::AppLogManager;
pub use service::LoggingService;
