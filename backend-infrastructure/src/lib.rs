// Backend Infrastructure Layer

pub mod config;
pub mod maintenance;
pub mod repositories;

pub use config::*;
pub use repositories::*;
