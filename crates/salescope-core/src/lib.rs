pub mod config;
pub mod error;
pub mod types;

pub use config::SalescopeConfig;
pub use error::{Result, SalescopeError};
pub use types::*;
