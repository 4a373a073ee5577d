pub mod config;
pub mod observability;
pub mod presenter;

pub use config::Config;
